//! PM2.5 Air Quality Index dashboard backend.
//!
//! Converts annual PM2.5 readings per city into US EPA or India CPCB AQI
//! values and serves the three chart projections (yearly snapshot,
//! multi-year trajectory, year comparison) as JSON.
pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
