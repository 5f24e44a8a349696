// AQI standard selector
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Standard {
    #[default]
    #[serde(rename = "us", alias = "us_epa", alias = "epa")]
    UsEpa,
    #[serde(rename = "india", alias = "india_cpcb", alias = "cpcb")]
    IndiaCpcb,
}

impl Standard {
    pub const ALL: [Standard; 2] = [Standard::UsEpa, Standard::IndiaCpcb];

    /// Short identifier used on the wire ("us" / "india")
    pub fn code(&self) -> &'static str {
        match self {
            Standard::UsEpa => "us",
            Standard::IndiaCpcb => "india",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Standard::UsEpa => "US EPA",
            Standard::IndiaCpcb => "India National",
        }
    }

    /// Whether the input concentration is clamped into the matched segment
    pub fn clamps_input(&self) -> bool {
        matches!(self, Standard::IndiaCpcb)
    }
}

impl fmt::Display for Standard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown AQI standard: {0}")]
pub struct UnknownStandard(pub String);

impl FromStr for Standard {
    type Err = UnknownStandard;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "us" | "us_epa" | "epa" => Ok(Standard::UsEpa),
            "india" | "india_cpcb" | "cpcb" => Ok(Standard::IndiaCpcb),
            other => Err(UnknownStandard(other.to_string())),
        }
    }
}
