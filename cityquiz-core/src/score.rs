//! Extrema computation and scoring

use crate::city::City;
use crate::error::QuizError;
use crate::round::{Category, RoundState};
use serde::Serialize;

/// Ground-truth extremum city name per category
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Extrema {
    pub north: String,
    pub south: String,
    pub east: String,
    pub west: String,
    pub largest: String,
    pub smallest: String,
}

impl Extrema {
    pub fn get(&self, category: Category) -> &str {
        match category {
            Category::North => &self.north,
            Category::South => &self.south,
            Category::East => &self.east,
            Category::West => &self.west,
            Category::Largest => &self.largest,
            Category::Smallest => &self.smallest,
        }
    }
}

/// Result of checking a round
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ScoreReport {
    pub correct: u32,
    pub wrong: u32,
    pub extrema: Extrema,
}

/// Scan in round order keeping the first city that wins the comparison.
/// Ties therefore go to the earliest city in the round, which keeps
/// scoring reproducible for any given sample.
fn first_extremum<'a, F>(cities: &'a [City], better: F) -> &'a City
where
    F: Fn(&City, &City) -> bool,
{
    let mut best = &cities[0];
    for city in &cities[1..] {
        if better(city, best) {
            best = city;
        }
    }
    best
}

/// Compute the six ground-truth extrema over a round's cities.
///
/// Errors with `EmptyRound` instead of reducing over an empty sequence.
pub fn compute_extrema(cities: &[City]) -> Result<Extrema, QuizError> {
    if cities.is_empty() {
        return Err(QuizError::EmptyRound);
    }

    Ok(Extrema {
        north: first_extremum(cities, |c, best| c.lat > best.lat).name.clone(),
        south: first_extremum(cities, |c, best| c.lat < best.lat).name.clone(),
        east: first_extremum(cities, |c, best| c.lon > best.lon).name.clone(),
        west: first_extremum(cities, |c, best| c.lon < best.lon).name.clone(),
        largest: first_extremum(cities, |c, best| c.population > best.population)
            .name
            .clone(),
        smallest: first_extremum(cities, |c, best| c.population < best.population)
            .name
            .clone(),
    })
}

/// Score the recorded guesses against the computed extrema.
///
/// Every category counts exactly once, so `correct + wrong == 6`.
pub fn score(round: &RoundState) -> Result<ScoreReport, QuizError> {
    let extrema = compute_extrema(round.cities())?;

    let mut correct = 0;
    let mut wrong = 0;
    for category in Category::ALL {
        if round.guesses().get(category) == Some(extrema.get(category)) {
            correct += 1;
        } else {
            wrong += 1;
        }
    }

    Ok(ScoreReport {
        correct,
        wrong,
        extrema,
    })
}

// ============================================================================
// TESTS
// ============================================================================
