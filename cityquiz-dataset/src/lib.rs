//! CITYQUIZ Dataset - City table and random sampling
//!
//! The dataset collaborator behind `cityquiz_core::CitySource`:
//! - In-memory city table with a name index
//! - Loading from a JSON export or from raw GeoNames files
//! - Uniform sampling without replacement

pub mod geonames;

use anyhow::Context;
use cityquiz_core::{City, CityFilter, CitySource, QuizError};
use rand::RngCore;
use rustc_hash::FxHashMap;
use std::path::Path;

/// Immutable in-memory city table
#[derive(Clone, Debug, Default)]
pub struct CityTable {
    cities: Vec<City>,
    by_name: FxHashMap<String, usize>,
}

impl CityTable {
    pub fn new(cities: Vec<City>) -> Self {
        let by_name = cities
            .iter()
            .enumerate()
            .map(|(i, c)| (c.name.clone(), i))
            .collect();
        Self { cities, by_name }
    }

    /// Load from a JSON array of city records
    pub fn from_json_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read dataset file: {}", path.display()))?;
        let cities: Vec<City> = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse dataset JSON: {}", path.display()))?;
        Ok(Self::new(cities))
    }

    /// Build from the raw GeoNames countryInfo.txt / cities500.txt pair
    pub fn from_geonames(country_info: &Path, cities_file: &Path) -> anyhow::Result<Self> {
        Ok(Self::new(geonames::load_geonames(country_info, cities_file)?))
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&City> {
        self.by_name.get(name).map(|&i| &self.cities[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &City> {
        self.cities.iter()
    }
}

impl CitySource for CityTable {
    /// Uniform sample without replacement from the filtered subset.
    /// Fewer matches than requested is an error, never a short round.
    fn sample(
        &self,
        filter: &CityFilter,
        count: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<City>, QuizError> {
        let matching: Vec<&City> = self.cities.iter().filter(|c| filter.matches(c)).collect();
        if matching.len() < count {
            return Err(QuizError::InsufficientData {
                needed: count,
                found: matching.len(),
            });
        }

        let picks = rand::seq::index::sample(rng, matching.len(), count);
        Ok(picks.iter().map(|i| matching[i].clone()).collect())
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use cityquiz_core::Region;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn city(name: &str, country: &str, continent: &str, population: u64) -> City {
        City {
            name: name.to_string(),
            country_code: "XX".to_string(),
            country: country.to_string(),
            continent: continent.to_string(),
            lat: 0.0,
            lon: 0.0,
            population,
        }
    }

    fn table() -> CityTable {
        CityTable::new(vec![
            city("Berlin", "Germany", "EU", 3_576_873),
            city("Hamburg", "Germany", "EU", 1_841_179),
            city("Munich", "Germany", "EU", 1_471_508),
            city("Cologne", "Germany", "EU", 1_085_664),
            city("Paris", "France", "EU", 2_138_551),
            city("Tokyo", "Japan", "AS", 8_336_599),
            city("Smalltown", "Germany", "EU", 900),
        ])
    }

    #[test]
    fn test_name_index() {
        let table = table();
        assert_eq!(table.len(), 7);
        assert_eq!(table.get("Paris").unwrap().country, "France");
        assert!(table.get("Gotham").is_none());
    }

    #[test]
    fn test_sample_respects_filter() {
        let table = table();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let round = table.sample(&CityFilter::default(), 4, &mut rng).unwrap();

        assert_eq!(round.len(), 4);
        for c in &round {
            assert_eq!(c.country, "Germany");
            assert!(c.population >= 15_000);
        }
    }

    #[test]
    fn test_sample_without_replacement() {
        let table = table();
        let filter = CityFilter {
            min_population: 0,
            region: Region::World,
        };
        let mut rng = ChaCha8Rng::seed_from_u64(2);
        let round = table.sample(&filter, 7, &mut rng).unwrap();

        let mut names: Vec<_> = round.iter().map(|c| c.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 7);
    }

    #[test]
    fn test_sample_deterministic_with_seed() {
        let table = table();
        let filter = CityFilter {
            min_population: 15_000,
            region: Region::Continent("EU".to_string()),
        };

        let mut a = ChaCha8Rng::seed_from_u64(42);
        let mut b = ChaCha8Rng::seed_from_u64(42);
        assert_eq!(
            table.sample(&filter, 4, &mut a).unwrap(),
            table.sample(&filter, 4, &mut b).unwrap()
        );
    }

    #[test]
    fn test_insufficient_data() {
        let table = table();
        let filter = CityFilter {
            min_population: 15_000,
            region: Region::Continent("AS".to_string()),
        };
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let err = table.sample(&filter, 4, &mut rng).unwrap_err();
        assert_eq!(
            err,
            QuizError::InsufficientData {
                needed: 4,
                found: 1
            }
        );
    }
}
