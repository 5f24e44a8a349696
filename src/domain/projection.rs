// Rows and series produced by the query layer for charting
use serde::Serialize;

/// One city's index for the selected year
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SnapshotRow {
    pub city: String,
    pub aqi: i32,
    pub category: &'static str,
    pub pm25: f64,
}

/// A city's index for every year of the catalog, aligned by position
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trajectory {
    pub city: String,
    pub series: Vec<TrajectoryPoint>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TrajectoryPoint {
    pub year: i32,
    /// `None` when no observation exists for the year
    pub aqi: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearComparisonRow {
    pub year: i32,
    pub aqi: Option<i32>,
    pub category: Option<&'static str>,
    pub pm25: Option<f64>,
}

impl YearComparisonRow {
    pub fn absent(year: i32) -> Self {
        Self {
            year,
            aqi: None,
            category: None,
            pm25: None,
        }
    }
}
