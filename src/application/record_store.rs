// In-memory observation store, frozen after construction
use crate::domain::observation::Observation;
use std::collections::{HashMap, HashSet};

/// What to do when a source holds more than one reading for a city and year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    #[default]
    Reject,
    KeepFirst,
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("duplicate observation for {city} in {year}")]
pub struct DuplicateObservation {
    pub city: String,
    pub year: i32,
}

#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    observations: Vec<Observation>,
    index: HashMap<(String, i32), usize>,
}

impl RecordStore {
    pub fn from_observations(
        observations: Vec<Observation>,
        policy: DuplicatePolicy,
    ) -> Result<Self, DuplicateObservation> {
        let mut kept = Vec::with_capacity(observations.len());
        let mut index = HashMap::with_capacity(observations.len());

        for observation in observations {
            let key = (observation.city.clone(), observation.year);
            if index.contains_key(&key) {
                match policy {
                    DuplicatePolicy::Reject => {
                        return Err(DuplicateObservation {
                            city: observation.city,
                            year: observation.year,
                        });
                    }
                    DuplicatePolicy::KeepFirst => {
                        tracing::warn!(
                            "Ignoring duplicate observation for {} in {}",
                            observation.city,
                            observation.year
                        );
                        continue;
                    }
                }
            }

            index.insert(key, kept.len());
            kept.push(observation);
        }

        Ok(Self {
            observations: kept,
            index,
        })
    }

    /// All observations for `year` whose city is in `cities`, in load order
    pub fn find_all<S: AsRef<str>>(&self, year: i32, cities: &[S]) -> Vec<&Observation> {
        let wanted: HashSet<&str> = cities.iter().map(|c| c.as_ref()).collect();
        self.observations
            .iter()
            .filter(|o| o.year == year && wanted.contains(o.city.as_str()))
            .collect()
    }

    pub fn find(&self, city: &str, year: i32) -> Option<&Observation> {
        self.index
            .get(&(city.to_string(), year))
            .map(|&i| &self.observations[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Observation> {
        self.observations.iter()
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }
}
