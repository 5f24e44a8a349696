// HTTP request handlers
use crate::domain::catalog::Catalog;
use crate::domain::projection::{SnapshotRow, Trajectory, YearComparisonRow};
use crate::domain::standard::Standard;
use crate::presentation::app_state::AppState;
use crate::presentation::error::ApiError;
use crate::presentation::extract::ApiQuery;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Debug, Deserialize)]
pub struct SnapshotQuery {
    pub year: Option<i32>,
    pub cities: Option<String>,
    #[serde(default)]
    pub standard: Standard,
}

#[derive(Debug, Deserialize)]
pub struct TrajectoryQuery {
    pub cities: Option<String>,
    #[serde(default)]
    pub standard: Standard,
}

#[derive(Debug, Deserialize)]
pub struct CompareQuery {
    pub city: Option<String>,
    pub years: Option<String>,
    #[serde(default)]
    pub standard: Standard,
}

#[derive(Debug, Serialize)]
pub struct StandardInfo {
    pub code: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Serialize)]
pub struct CatalogResponse {
    pub cities: Vec<String>,
    pub years: Vec<i32>,
    pub latest_year: Option<i32>,
    pub standards: Vec<StandardInfo>,
}

#[derive(Debug, Serialize)]
pub struct TrajectoryResponse {
    pub years: Vec<i32>,
    pub trajectories: Vec<Trajectory>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Cities, years and standards available for selection
pub async fn catalog(State(state): State<Arc<AppState>>) -> Json<CatalogResponse> {
    let catalog = state.query_service.catalog();

    Json(CatalogResponse {
        cities: catalog.cities.clone(),
        years: catalog.years(),
        latest_year: catalog.latest_year(),
        standards: Standard::ALL
            .iter()
            .map(|s| StandardInfo {
                code: s.code(),
                label: s.label(),
            })
            .collect(),
    })
}

/// Yearly snapshot across cities, sorted by city name
pub async fn snapshot(
    ApiQuery(query): ApiQuery<SnapshotQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<SnapshotRow>>, ApiError> {
    let service = &state.query_service;
    let year = match query.year {
        Some(year) => year,
        None => service.catalog().latest_year().ok_or(ApiError::EmptyCatalog)?,
    };
    let cities = selected_cities(query.cities.as_deref(), service.catalog());

    let mut rows = service.snapshot(year, &cities, query.standard);
    rows.sort_by(|a, b| a.city.cmp(&b.city));

    tracing::debug!(
        "Snapshot {} ({}): {} of {} cities",
        year,
        query.standard.code(),
        rows.len(),
        cities.len()
    );

    Ok(Json(rows))
}

/// Per-city series over the whole year range
pub async fn trajectory(
    ApiQuery(query): ApiQuery<TrajectoryQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<TrajectoryResponse>, ApiError> {
    let service = &state.query_service;
    let cities = selected_cities(query.cities.as_deref(), service.catalog());

    Ok(Json(TrajectoryResponse {
        years: service.catalog().years(),
        trajectories: service.trajectory(&cities, query.standard),
    }))
}

/// Arbitrary years for one city
pub async fn compare_years(
    ApiQuery(query): ApiQuery<CompareQuery>,
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<YearComparisonRow>>, ApiError> {
    let service = &state.query_service;
    let years = parse_years(query.years.as_deref())?;

    let city = match query.city.as_deref().map(str::trim) {
        Some(city) if !city.is_empty() => city.to_string(),
        _ => service.catalog().cities.first().cloned().unwrap_or_default(),
    };

    Ok(Json(service.compare_years(&city, &years, query.standard)))
}

/// Comma separated city list; missing or blank selects every catalog city
fn selected_cities(raw: Option<&str>, catalog: &Catalog) -> Vec<String> {
    let cities: Vec<String> = raw
        .unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect();

    if cities.is_empty() {
        catalog.cities.clone()
    } else {
        cities
    }
}

fn parse_years(raw: Option<&str>) -> Result<Vec<i32>, ApiError> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|y| !y.is_empty())
        .map(|y| y.parse::<i32>().map_err(|_| ApiError::InvalidYear(y.to_string())))
        .collect()
}
