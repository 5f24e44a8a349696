// AQI calculation by piecewise-linear interpolation over a breakpoint table
use super::breakpoint::{breakpoints, BreakpointSegment};
use super::standard::Standard;
use serde::Serialize;

/// A computed index together with its published category
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AqiReading {
    pub index: i32,
    pub category: &'static str,
}

/// Map a PM2.5 concentration (µg/m³) onto the index scale of `standard`.
///
/// Total over finite input. Concentrations that fall outside every segment
/// saturate on the last segment; India additionally clamps the input into the
/// chosen segment, so its output never leaves 0..=500. US output is not
/// clamped and keeps growing past 500 for very high readings.
pub fn compute_index(concentration: f64, standard: Standard) -> i32 {
    let segment = select_segment(breakpoints(standard), concentration);

    let adjusted = if standard.clamps_input() {
        concentration.clamp(segment.concentration_low, segment.concentration_high)
    } else {
        concentration
    };

    interpolate(segment, adjusted)
}

pub fn classify(concentration: f64, standard: Standard) -> AqiReading {
    let index = compute_index(concentration, standard);
    AqiReading {
        index,
        category: category_for(index, standard),
    }
}

/// Category label for an already computed index
pub fn category_for(index: i32, standard: Standard) -> &'static str {
    let table = breakpoints(standard);
    match table.iter().find(|s| s.contains_index(index)) {
        Some(segment) => segment.category,
        None if index < 0 => table[0].category,
        None => table[table.len() - 1].category,
    }
}

fn select_segment(table: &'static [BreakpointSegment], concentration: f64) -> &'static BreakpointSegment {
    // Anything no segment covers, including the gaps between one segment's high
    // bound and the next one's low bound, saturates on the last segment.
    table
        .iter()
        .find(|s| s.contains(concentration))
        .unwrap_or(&table[table.len() - 1])
}

fn interpolate(segment: &BreakpointSegment, concentration: f64) -> i32 {
    let slope = f64::from(segment.index_high - segment.index_low)
        / (segment.concentration_high - segment.concentration_low);
    let value = slope * (concentration - segment.concentration_low) + f64::from(segment.index_low);
    round_half_up(value)
}

fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}
