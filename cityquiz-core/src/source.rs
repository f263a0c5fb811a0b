//! Filter types and the dataset collaborator seam

use crate::city::City;
use crate::error::QuizError;
use rand::RngCore;
use serde::{Deserialize, Serialize};

/// Default population cutoff (the dataset itself is built with the same cut)
pub const DEFAULT_MIN_POPULATION: u64 = 15_000;

/// Default number of cities per round
pub const DEFAULT_ROUND_SIZE: usize = 4;

/// Geographic restriction of a round
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Region {
    Country(String),
    Continent(String),
    World,
}

impl Default for Region {
    fn default() -> Self {
        Region::Country("Germany".to_string())
    }
}

impl Region {
    /// Map the `region` query parameter onto a restriction.
    /// "eu" plays all of Europe, "world" drops the restriction,
    /// anything else (including absence) falls back to Germany.
    pub fn from_query(param: Option<&str>) -> Self {
        match param {
            Some("eu") => Region::Continent("EU".to_string()),
            Some("world") => Region::World,
            _ => Region::default(),
        }
    }
}

/// Predicate a sampled city must satisfy
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityFilter {
    pub min_population: u64,
    pub region: Region,
}

impl Default for CityFilter {
    fn default() -> Self {
        Self {
            min_population: DEFAULT_MIN_POPULATION,
            region: Region::default(),
        }
    }
}

impl CityFilter {
    pub fn matches(&self, city: &City) -> bool {
        if city.population < self.min_population {
            return false;
        }
        match &self.region {
            Region::Country(country) => city.country == *country,
            Region::Continent(continent) => city.continent == *continent,
            Region::World => true,
        }
    }
}

/// The dataset collaborator.
///
/// `sample` returns exactly `count` matching cities chosen uniformly at
/// random without replacement, or `InsufficientData` when the filtered set
/// is too small. It never returns a short round.
pub trait CitySource {
    fn sample(
        &self,
        filter: &CityFilter,
        count: usize,
        rng: &mut dyn RngCore,
    ) -> Result<Vec<City>, QuizError>;
}
