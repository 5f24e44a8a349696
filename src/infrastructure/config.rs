use crate::application::data_source::DataSource;
use crate::application::record_store::DuplicatePolicy;
use crate::domain::catalog::Catalog;
use crate::infrastructure::file_source::FileDataSource;
use crate::infrastructure::http_source::HttpDataSource;
use config::builder::DefaultState;
use config::{ConfigBuilder, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerSettings,
    pub sources: SourceList,
    pub catalog: Catalog,
    pub store: StoreSettings,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerSettings {
    pub bind: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Observation sources in the order they are tried
#[derive(Debug, Deserialize, Clone)]
#[serde(transparent)]
pub struct SourceList(pub Vec<SourceConfig>);

impl Default for SourceList {
    fn default() -> Self {
        Self(vec![
            SourceConfig::File {
                path: PathBuf::from("data/aqi.json"),
            },
            SourceConfig::File {
                path: PathBuf::from("data/sample.json"),
            },
        ])
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SourceConfig {
    File { path: PathBuf },
    Http { url: String },
}

impl SourceConfig {
    pub fn to_data_source(&self) -> Arc<dyn DataSource> {
        match self {
            SourceConfig::File { path } => Arc::new(FileDataSource::new(path.clone())),
            SourceConfig::Http { url } => Arc::new(HttpDataSource::new(url.clone())),
        }
    }
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct StoreSettings {
    pub reject_duplicates: bool,
}

impl Default for StoreSettings {
    fn default() -> Self {
        Self {
            reject_duplicates: true,
        }
    }
}

impl StoreSettings {
    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        if self.reject_duplicates {
            DuplicatePolicy::Reject
        } else {
            DuplicatePolicy::KeepFirst
        }
    }
}

impl AppConfig {
    pub fn data_sources(&self) -> Vec<Arc<dyn DataSource>> {
        self.sources.0.iter().map(SourceConfig::to_data_source).collect()
    }
}

/// Defaults, then `config/aqi.*` if present, then `AQI__*` environment variables
pub fn load_app_config() -> anyhow::Result<AppConfig> {
    let builder = config::Config::builder()
        .add_source(File::with_name("config/aqi").required(false))
        .add_source(
            Environment::with_prefix("AQI")
                .prefix_separator("__")
                .separator("__"),
        );

    build_app_config(builder)
}

fn build_app_config(builder: ConfigBuilder<DefaultState>) -> anyhow::Result<AppConfig> {
    let settings = builder.build()?;
    let config: AppConfig = settings.try_deserialize()?;
    config.catalog.validate()?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn try_from_toml(toml: &str) -> anyhow::Result<AppConfig> {
        let builder = config::Config::builder().add_source(File::from_str(toml, FileFormat::Toml));
        build_app_config(builder)
    }

    fn from_toml(toml: &str) -> AppConfig {
        try_from_toml(toml).unwrap()
    }

    #[test]
    fn test_defaults() {
        let config = from_toml("");

        assert_eq!(config.server.bind, "0.0.0.0:8080");
        assert_eq!(config.sources.0.len(), 2);
        assert_eq!(
            config.sources.0[1],
            SourceConfig::File {
                path: PathBuf::from("data/sample.json")
            }
        );
        assert_eq!(config.catalog, Catalog::default());
        assert_eq!(config.store.duplicate_policy(), DuplicatePolicy::Reject);
    }

    #[test]
    fn test_overrides() {
        let config = from_toml(
            r#"
            [server]
            bind = "127.0.0.1:9000"

            [catalog]
            cities = ["Delhi", "Pune"]
            first_year = 2015

            [store]
            reject_duplicates = false

            [[sources]]
            kind = "http"
            url = "https://example.org/aqi.json"

            [[sources]]
            kind = "file"
            path = "data/sample.json"
            "#,
        );

        assert_eq!(config.server.bind, "127.0.0.1:9000");
        assert_eq!(config.catalog.cities, vec!["Delhi", "Pune"]);
        assert_eq!(config.catalog.first_year, 2015);
        assert_eq!(config.catalog.year_count, 20);
        assert_eq!(config.store.duplicate_policy(), DuplicatePolicy::KeepFirst);
        assert_eq!(
            config.sources.0[0],
            SourceConfig::Http {
                url: "https://example.org/aqi.json".to_string()
            }
        );

        let names: Vec<String> = config.data_sources().iter().map(|s| s.name()).collect();
        assert_eq!(names, vec!["https://example.org/aqi.json", "data/sample.json"]);
    }

    #[test]
    fn test_rejects_overflowing_catalog() {
        let err = try_from_toml(
            r#"
            [catalog]
            first_year = 2147483600
            year_count = 100
            "#,
        )
        .unwrap_err();

        assert!(err.to_string().contains("overflows"));
    }
}
