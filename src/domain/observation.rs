// Observation domain model
use serde::{Deserialize, Serialize};

/// One annual PM2.5 reading for a city, in µg/m³
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub city: String,
    pub year: i32,
    pub pm25: f64,
}

impl Observation {
    pub fn new(city: impl Into<String>, year: i32, pm25: f64) -> Self {
        Self {
            city: city.into(),
            year,
            pm25,
        }
    }
}
