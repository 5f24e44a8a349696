// Query service - Chart projections over the record store
use crate::application::record_store::RecordStore;
use crate::domain::aqi::classify;
use crate::domain::catalog::Catalog;
use crate::domain::observation::Observation;
use crate::domain::projection::{SnapshotRow, Trajectory, TrajectoryPoint, YearComparisonRow};
use crate::domain::standard::Standard;
use std::sync::Arc;

#[derive(Clone)]
pub struct QueryService {
    store: Arc<RecordStore>,
    catalog: Catalog,
}

impl QueryService {
    pub fn new(store: Arc<RecordStore>, catalog: Catalog) -> Self {
        let service = Self { store, catalog };

        for observation in service.uncatalogued() {
            tracing::debug!(
                "Observation for {} in {} is outside the catalog",
                observation.city,
                observation.year
            );
        }

        service
    }

    /// Observations whose city or year lies outside the catalog
    pub fn uncatalogued(&self) -> Vec<&Observation> {
        self.store
            .iter()
            .filter(|o| !self.catalog.contains_city(&o.city) || !self.catalog.contains_year(o.year))
            .collect()
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Index of every selected city observed in `year`.
    ///
    /// Cities without a reading that year are left out rather than zeroed.
    pub fn snapshot<S: AsRef<str>>(
        &self,
        year: i32,
        cities: &[S],
        standard: Standard,
    ) -> Vec<SnapshotRow> {
        self.store
            .find_all(year, cities)
            .into_iter()
            .map(|observation| {
                let reading = classify(observation.pm25, standard);
                SnapshotRow {
                    city: observation.city.clone(),
                    aqi: reading.index,
                    category: reading.category,
                    pm25: observation.pm25,
                }
            })
            .collect()
    }

    /// One series per city covering every catalog year, with gaps as `None`
    pub fn trajectory<S: AsRef<str>>(&self, cities: &[S], standard: Standard) -> Vec<Trajectory> {
        let years = self.catalog.years();

        cities
            .iter()
            .map(|city| {
                let city = city.as_ref();
                let series = years
                    .iter()
                    .map(|&year| TrajectoryPoint {
                        year,
                        aqi: self
                            .store
                            .find(city, year)
                            .map(|o| classify(o.pm25, standard).index),
                    })
                    .collect();

                Trajectory {
                    city: city.to_string(),
                    series,
                }
            })
            .collect()
    }

    /// Selected years for one city, ascending.
    ///
    /// An empty selection compares only the latest catalog year.
    pub fn compare_years(
        &self,
        city: &str,
        years: &[i32],
        standard: Standard,
    ) -> Vec<YearComparisonRow> {
        let mut selected: Vec<i32> = if years.is_empty() {
            self.catalog.latest_year().into_iter().collect()
        } else {
            years.to_vec()
        };
        selected.sort_unstable();
        selected.dedup();

        selected
            .into_iter()
            .map(|year| match self.store.find(city, year) {
                Some(observation) => {
                    let reading = classify(observation.pm25, standard);
                    YearComparisonRow {
                        year,
                        aqi: Some(reading.index),
                        category: Some(reading.category),
                        pm25: Some(observation.pm25),
                    }
                }
                None => YearComparisonRow::absent(year),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::record_store::DuplicatePolicy;
    use crate::domain::aqi::compute_index;

    fn values(trajectory: &Trajectory) -> Vec<Option<i32>> {
        trajectory.series.iter().map(|p| p.aqi).collect()
    }

    fn service() -> QueryService {
        let observations = vec![
            Observation::new("Delhi", 2005, 120.0),
            Observation::new("Delhi", 2023, 98.0),
            Observation::new("Delhi", 2024, 45.0),
            Observation::new("Mumbai", 2024, 35.4),
            Observation::new("Pune", 2010, 30.0),
            Observation::new("Jaipur", 2023, 61.0),
        ];
        let store = RecordStore::from_observations(observations, DuplicatePolicy::Reject).unwrap();
        QueryService::new(Arc::new(store), Catalog::default())
    }

    #[test]
    fn test_snapshot_omits_cities_without_data() {
        let service = service();
        let rows = service.snapshot(2024, &["Delhi", "Mumbai", "Chennai"], Standard::UsEpa);

        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.city != "Chennai"));

        let mumbai = rows.iter().find(|r| r.city == "Mumbai").unwrap();
        assert_eq!(mumbai.aqi, 100);
        assert_eq!(mumbai.category, "Moderate");
        assert_eq!(mumbai.pm25, 35.4);
    }

    #[test]
    fn test_snapshot_uses_selected_standard() {
        let service = service();
        let rows = service.snapshot(2024, &["Delhi"], Standard::IndiaCpcb);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].aqi, 75);
        assert_eq!(rows[0].category, "Satisfactory");
        assert!(service.snapshot(2015, &["Delhi"], Standard::IndiaCpcb).is_empty());
    }

    #[test]
    fn test_trajectory_is_aligned_with_year_domain() {
        let service = service();
        let trajectories = service.trajectory(&["Delhi", "Chennai"], Standard::UsEpa);

        assert_eq!(trajectories.len(), 2);
        for trajectory in &trajectories {
            assert_eq!(trajectory.series.len(), 20);
            assert_eq!(trajectory.series[0].year, 2005);
            assert_eq!(trajectory.series[19].year, 2024);
        }

        let delhi = values(&trajectories[0]);
        assert_eq!(delhi[0], Some(compute_index(120.0, Standard::UsEpa)));
        assert_eq!(delhi[18], Some(compute_index(98.0, Standard::UsEpa)));
        assert_eq!(delhi[19], Some(compute_index(45.0, Standard::UsEpa)));
        assert_eq!(delhi.iter().filter(|v| v.is_none()).count(), 17);

        assert_eq!(trajectories[1].city, "Chennai");
        assert!(values(&trajectories[1]).iter().all(Option::is_none));
    }

    #[test]
    fn test_compare_years_sorted_with_gaps() {
        let service = service();
        let rows = service.compare_years("Delhi", &[2024, 2010, 2023, 2010], Standard::IndiaCpcb);

        let years: Vec<i32> = rows.iter().map(|r| r.year).collect();
        assert_eq!(years, vec![2010, 2023, 2024]);

        assert_eq!(rows[0], YearComparisonRow::absent(2010));
        assert_eq!(rows[1].pm25, Some(98.0));
        assert_eq!(rows[1].aqi, Some(compute_index(98.0, Standard::IndiaCpcb)));
        assert_eq!(rows[2].aqi, Some(75));
    }

    #[test]
    fn test_compare_years_defaults_to_latest_year() {
        let service = service();
        let rows = service.compare_years("Delhi", &[], Standard::IndiaCpcb);

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].year, 2024);
        assert_eq!(rows[0].aqi, Some(75));

        let rows = service.compare_years("Jaipur", &[], Standard::UsEpa);
        assert_eq!(rows, vec![YearComparisonRow::absent(2024)]);
    }

    #[test]
    fn test_projections_are_repeatable() {
        let service = service();
        let cities = ["Delhi", "Mumbai", "Jaipur"];

        assert_eq!(
            service.snapshot(2023, &cities, Standard::UsEpa),
            service.snapshot(2023, &cities, Standard::UsEpa)
        );
        assert_eq!(
            service.trajectory(&cities, Standard::IndiaCpcb),
            service.trajectory(&cities, Standard::IndiaCpcb)
        );
    }

    #[test]
    fn test_uncatalogued_observations() {
        let observations = vec![
            Observation::new("Delhi", 2024, 45.0),
            Observation::new("Surat", 2024, 52.0),
            Observation::new("Pune", 2004, 40.0),
            Observation::new("Pune", 2025, 39.0),
        ];
        let store = RecordStore::from_observations(observations, DuplicatePolicy::Reject).unwrap();
        let service = QueryService::new(Arc::new(store), Catalog::default());

        let outside: Vec<(&str, i32)> = service
            .uncatalogued()
            .iter()
            .map(|o| (o.city.as_str(), o.year))
            .collect();
        assert_eq!(outside, vec![("Surat", 2024), ("Pune", 2004), ("Pune", 2025)]);

        // Still reachable by explicit selection
        assert_eq!(service.snapshot(2024, &["Surat"], Standard::UsEpa).len(), 1);
    }
}
