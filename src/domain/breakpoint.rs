// PM2.5 breakpoint tables for each supported standard
use super::standard::Standard;
use serde::Serialize;

/// One concentration range and the index range it maps onto
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BreakpointSegment {
    pub concentration_low: f64,
    pub concentration_high: f64,
    pub index_low: i32,
    pub index_high: i32,
    pub category: &'static str,
}

impl BreakpointSegment {
    const fn new(
        concentration_low: f64,
        concentration_high: f64,
        index_low: i32,
        index_high: i32,
        category: &'static str,
    ) -> Self {
        Self {
            concentration_low,
            concentration_high,
            index_low,
            index_high,
            category,
        }
    }

    pub fn contains(&self, concentration: f64) -> bool {
        concentration >= self.concentration_low && concentration <= self.concentration_high
    }

    pub fn contains_index(&self, index: i32) -> bool {
        index >= self.index_low && index <= self.index_high
    }
}

// US EPA PM2.5 schedule, µg/m³ (one-decimal bounds)
const US_EPA_PM25: [BreakpointSegment; 7] = [
    BreakpointSegment::new(0.0, 12.0, 0, 50, "Good"),
    BreakpointSegment::new(12.1, 35.4, 51, 100, "Moderate"),
    BreakpointSegment::new(35.5, 55.4, 101, 150, "Unhealthy for Sensitive Groups"),
    BreakpointSegment::new(55.5, 150.4, 151, 200, "Unhealthy"),
    BreakpointSegment::new(150.5, 250.4, 201, 300, "Very Unhealthy"),
    BreakpointSegment::new(250.5, 350.4, 301, 400, "Hazardous"),
    BreakpointSegment::new(350.5, 500.4, 401, 500, "Hazardous"),
];

// CPCB National AQI PM2.5 (24-hr) categories
const INDIA_CPCB_PM25: [BreakpointSegment; 6] = [
    BreakpointSegment::new(0.0, 30.0, 0, 50, "Good"),
    BreakpointSegment::new(31.0, 60.0, 51, 100, "Satisfactory"),
    BreakpointSegment::new(61.0, 90.0, 101, 200, "Moderate"),
    BreakpointSegment::new(91.0, 120.0, 201, 300, "Poor"),
    BreakpointSegment::new(121.0, 250.0, 301, 400, "Very Poor"),
    BreakpointSegment::new(251.0, 350.0, 401, 500, "Severe"),
];

pub fn breakpoints(standard: Standard) -> &'static [BreakpointSegment] {
    match standard {
        Standard::UsEpa => &US_EPA_PM25,
        Standard::IndiaCpcb => &INDIA_CPCB_PM25,
    }
}
