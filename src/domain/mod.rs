// Domain layer - AQI standards, observations and projection rows
pub mod aqi;
pub mod breakpoint;
pub mod catalog;
pub mod observation;
pub mod projection;
pub mod standard;
