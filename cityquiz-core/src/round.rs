//! Round state and guess tracking

use crate::city::City;
use crate::error::QuizError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

// ============================================================================
// CATEGORIES
// ============================================================================

/// One of the six guessable dimensions
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    North,
    South,
    East,
    West,
    Largest,
    Smallest,
}

impl Category {
    /// All categories, in scoring order
    pub const ALL: [Category; 6] = [
        Category::North,
        Category::South,
        Category::East,
        Category::West,
        Category::Largest,
        Category::Smallest,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::North => "north",
            Category::South => "south",
            Category::East => "east",
            Category::West => "west",
            Category::Largest => "largest",
            Category::Smallest => "smallest",
        }
    }
}

impl FromStr for Category {
    type Err = QuizError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "north" => Ok(Category::North),
            "south" => Ok(Category::South),
            "east" => Ok(Category::East),
            "west" => Ok(Category::West),
            "largest" => Ok(Category::Largest),
            "smallest" => Ok(Category::Smallest),
            other => Err(QuizError::UnknownCategory(other.to_string())),
        }
    }
}

// ============================================================================
// PHASE
// ============================================================================

/// Round lifecycle phase.
///
/// `Guessing` is entered only via round generation and `Revealed` only via
/// an explicit reveal; there is no `Empty -> Revealed` transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Empty,
    Guessing,
    Revealed,
}

// ============================================================================
// GUESSES
// ============================================================================

/// The six guess slots, each holding a city name or unset
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Guesses {
    pub north: Option<String>,
    pub south: Option<String>,
    pub east: Option<String>,
    pub west: Option<String>,
    pub largest: Option<String>,
    pub smallest: Option<String>,
}

impl Guesses {
    pub fn get(&self, category: Category) -> Option<&str> {
        let slot = match category {
            Category::North => &self.north,
            Category::South => &self.south,
            Category::East => &self.east,
            Category::West => &self.west,
            Category::Largest => &self.largest,
            Category::Smallest => &self.smallest,
        };
        slot.as_deref()
    }

    /// Overwrites the slot unconditionally; the prior guess is dropped
    pub fn set(&mut self, category: Category, city_name: impl Into<String>) {
        let slot = match category {
            Category::North => &mut self.north,
            Category::South => &mut self.south,
            Category::East => &mut self.east,
            Category::West => &mut self.west,
            Category::Largest => &mut self.largest,
            Category::Smallest => &mut self.smallest,
        };
        *slot = Some(city_name.into());
    }

    pub fn clear(&mut self) {
        *self = Guesses::default();
    }
}

// ============================================================================
// ROUND STATE
// ============================================================================

/// The active round: the sampled cities plus the player's guesses.
///
/// Cities are set once per round; guesses mutate incrementally until the
/// round is scored and replaced.
#[derive(Clone, Debug, Default)]
pub struct RoundState {
    cities: Vec<City>,
    guesses: Guesses,
}

impl RoundState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn city_names(&self) -> Vec<&str> {
        self.cities.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn guesses(&self) -> &Guesses {
        &self.guesses
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }

    /// Replace the city set and reset all six guess slots
    pub fn populate(&mut self, cities: Vec<City>) {
        self.cities = cities;
        self.guesses.clear();
    }

    /// Record a guess for one category (overwrites the prior one).
    ///
    /// The name is not validated against the round's cities; a name outside
    /// the round simply never matches an extremum at scoring time.
    pub fn set_guess(&mut self, category: Category, city_name: &str) {
        self.guesses.set(category, city_name);
    }
}

// ============================================================================
// TESTS
// ============================================================================
