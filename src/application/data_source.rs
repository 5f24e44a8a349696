// Observation sources and ordered fallback loading
use crate::application::record_store::{DuplicateObservation, DuplicatePolicy, RecordStore};
use crate::domain::observation::Observation;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to read data: {0}")]
    Io(#[from] std::io::Error),

    #[error("request failed: {0}")]
    Request(String),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("invalid observation data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Duplicate(#[from] DuplicateObservation),
}

/// One source that was tried and failed
#[derive(Debug)]
pub struct SourceFailure {
    pub name: String,
    pub error: SourceError,
}

impl fmt::Display for SourceFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.error)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("no data sources configured")]
    NoSources,

    #[error("failed to load data from every source: {}", join_failures(.0))]
    AllSourcesFailed(Vec<SourceFailure>),
}

fn join_failures(failures: &[SourceFailure]) -> String {
    failures
        .iter()
        .map(|f| f.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[async_trait]
pub trait DataSource: Send + Sync {
    /// Human readable name used in logs and failure reports
    fn name(&self) -> String;

    /// Fetch every observation this source holds
    async fn fetch(&self) -> Result<Vec<Observation>, SourceError>;
}

/// Try each source in order and build the store from the first that loads.
///
/// A source whose data breaks the duplicate policy counts as failed, so the
/// next source gets its turn.
pub async fn load_first_available(
    sources: &[Arc<dyn DataSource>],
    policy: DuplicatePolicy,
) -> Result<RecordStore, LoadError> {
    if sources.is_empty() {
        return Err(LoadError::NoSources);
    }

    let mut failures = Vec::new();

    for source in sources {
        let name = source.name();
        let result = match source.fetch().await {
            Ok(observations) => {
                RecordStore::from_observations(observations, policy).map_err(SourceError::from)
            }
            Err(e) => Err(e),
        };

        match result {
            Ok(store) => {
                if store.is_empty() {
                    tracing::warn!("Data source {} holds no observations", name);
                }
                tracing::info!("Loaded {} observations from {}", store.len(), name);
                return Ok(store);
            }
            Err(error) => {
                tracing::warn!("Data source {} failed: {}", name, error);
                failures.push(SourceFailure { name, error });
            }
        }
    }

    Err(LoadError::AllSourcesFailed(failures))
}
