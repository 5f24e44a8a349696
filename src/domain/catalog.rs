// City and year universe the dashboard selects from
use serde::{Deserialize, Serialize};

pub const DEFAULT_CITIES: [&str; 10] = [
    "Delhi",
    "Mumbai",
    "Kolkata",
    "Chennai",
    "Bengaluru",
    "Hyderabad",
    "Pune",
    "Ahmedabad",
    "Jaipur",
    "Lucknow",
];
pub const DEFAULT_FIRST_YEAR: i32 = 2005;
pub const DEFAULT_YEAR_COUNT: u32 = 20;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Catalog {
    pub cities: Vec<String>,
    pub first_year: i32,
    pub year_count: u32,
}

impl Default for Catalog {
    fn default() -> Self {
        Self {
            cities: DEFAULT_CITIES.iter().map(|c| c.to_string()).collect(),
            first_year: DEFAULT_FIRST_YEAR,
            year_count: DEFAULT_YEAR_COUNT,
        }
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CatalogError {
    #[error("year range of {year_count} years starting at {first_year} overflows")]
    YearRangeOverflow { first_year: i32, year_count: u32 },
}

impl Catalog {
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.year_count > 0 && self.latest_year().is_none() {
            return Err(CatalogError::YearRangeOverflow {
                first_year: self.first_year,
                year_count: self.year_count,
            });
        }
        Ok(())
    }

    /// Contiguous year range in increasing order
    pub fn years(&self) -> Vec<i32> {
        match self.latest_year() {
            Some(last) => (self.first_year..=last).collect(),
            None => Vec::new(),
        }
    }

    /// `None` for an empty range or one that does not fit in `i32`
    pub fn latest_year(&self) -> Option<i32> {
        let offset = self.year_count.checked_sub(1)?;
        self.first_year.checked_add(i32::try_from(offset).ok()?)
    }

    pub fn contains_year(&self, year: i32) -> bool {
        match self.latest_year() {
            Some(last) => year >= self.first_year && year <= last,
            None => false,
        }
    }

    pub fn contains_city(&self, city: &str) -> bool {
        self.cities.iter().any(|c| c == city)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_domain() {
        let catalog = Catalog::default();
        let years = catalog.years();

        assert_eq!(catalog.cities.len(), 10);
        assert_eq!(years.len(), 20);
        assert_eq!(years.first(), Some(&2005));
        assert_eq!(catalog.latest_year(), Some(2024));
        assert!(catalog.contains_year(2024));
        assert!(!catalog.contains_year(2025));
        assert!(catalog.contains_city("Lucknow"));
        assert!(!catalog.contains_city("lucknow"));
    }

    #[test]
    fn test_empty_year_range() {
        let catalog = Catalog {
            year_count: 0,
            ..Catalog::default()
        };

        assert!(catalog.years().is_empty());
        assert_eq!(catalog.latest_year(), None);
        assert!(!catalog.contains_year(2005));
    }

    #[test]
    fn test_overflowing_year_range() {
        let catalog = Catalog {
            first_year: i32::MAX - 1,
            year_count: 5,
            ..Catalog::default()
        };

        assert_eq!(catalog.latest_year(), None);
        assert!(catalog.years().is_empty());
        assert_eq!(
            catalog.validate(),
            Err(CatalogError::YearRangeOverflow {
                first_year: i32::MAX - 1,
                year_count: 5
            })
        );

        let huge = Catalog {
            year_count: u32::MAX,
            ..Catalog::default()
        };
        assert!(huge.validate().is_err());
        assert!(Catalog::default().validate().is_ok());
    }
}
