//! Game session - single owner of the active round
//!
//! Drives the per-round state machine:
//! `Empty -> Guessing -> Revealed -> (new round) -> Guessing -> ...`

use crate::city::City;
use crate::error::QuizError;
use crate::reveal::{display_records, DisplayRecord};
use crate::round::{Category, Phase, RoundState};
use crate::score::{score, ScoreReport};
use crate::source::{CityFilter, CitySource};
use rand::RngCore;

/// One player's session: the active round plus the lifecycle phase
#[derive(Clone, Debug, Default)]
pub struct GameSession {
    round: RoundState,
    phase: Phase,
}

impl GameSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn round(&self) -> &RoundState {
        &self.round
    }

    /// Whether the "New Round" control should be offered
    pub fn can_generate(&self) -> bool {
        self.phase != Phase::Guessing
    }

    /// Whether the "Check" control should be offered
    pub fn can_check(&self) -> bool {
        self.phase == Phase::Guessing
    }

    /// Generate a fresh round: sample cities, reset guesses, enter `Guessing`.
    ///
    /// On a failed sample (`InsufficientData`, dataset trouble) the previous
    /// round and phase are left untouched.
    pub fn new_round(
        &mut self,
        source: &dyn CitySource,
        filter: &CityFilter,
        count: usize,
        rng: &mut dyn RngCore,
    ) -> Result<&[City], QuizError> {
        let cities = source.sample(filter, count, rng)?;
        self.round.populate(cities);
        self.phase = Phase::Guessing;
        Ok(self.round.cities())
    }

    /// Record a guess (unconditional overwrite for that category)
    pub fn set_guess(&mut self, category: Category, city_name: &str) {
        self.round.set_guess(category, city_name);
    }

    /// Score the current round without changing phase; the player may keep
    /// adjusting guesses and check again before revealing
    pub fn check(&self) -> Result<ScoreReport, QuizError> {
        score(&self.round)
    }

    /// Disclose ground truth and enter `Revealed`.
    ///
    /// Idempotent: revealing again returns identical records. Not available
    /// before any round was generated.
    pub fn reveal(&mut self) -> Result<Vec<DisplayRecord>, QuizError> {
        if self.round.is_empty() {
            return Err(QuizError::EmptyRound);
        }
        self.phase = Phase::Revealed;
        Ok(display_records(self.round.cities()))
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// Source that returns a fixed set, or too few cities
    struct FixedSource(Vec<City>);

    impl CitySource for FixedSource {
        fn sample(
            &self,
            _filter: &CityFilter,
            count: usize,
            _rng: &mut dyn RngCore,
        ) -> Result<Vec<City>, QuizError> {
            if self.0.len() < count {
                return Err(QuizError::InsufficientData {
                    needed: count,
                    found: self.0.len(),
                });
            }
            Ok(self.0[..count].to_vec())
        }
    }

    fn city(name: &str, lat: f64, lon: f64, population: u64) -> City {
        City {
            name: name.to_string(),
            country_code: "DE".to_string(),
            country: "Germany".to_string(),
            continent: "EU".to_string(),
            lat,
            lon,
            population,
        }
    }

    fn four_cities() -> Vec<City> {
        vec![
            city("A", 50.0, 10.0, 1000),
            city("B", 52.0, 8.0, 500),
            city("C", 48.0, 12.0, 2000),
            city("D", 52.0, 14.0, 100),
        ]
    }

    #[test]
    fn test_full_lifecycle() {
        let source = FixedSource(four_cities());
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut session = GameSession::new();

        assert_eq!(session.phase(), Phase::Empty);
        assert!(session.can_generate());
        assert!(!session.can_check());

        session
            .new_round(&source, &CityFilter::default(), 4, &mut rng)
            .unwrap();
        assert_eq!(session.phase(), Phase::Guessing);
        assert!(!session.can_generate());
        assert!(session.can_check());

        session.set_guess(Category::North, "B");
        let report = session.check().unwrap();
        assert_eq!(report.correct + report.wrong, 6);
        assert_eq!(session.phase(), Phase::Guessing);

        let records = session.reveal().unwrap();
        assert_eq!(session.phase(), Phase::Revealed);
        assert_eq!(records.len(), 4);
        assert!(session.can_generate());

        // Reveal is idempotent
        assert_eq!(session.reveal().unwrap(), records);

        // Next round re-enters Guessing with cleared guesses
        session
            .new_round(&source, &CityFilter::default(), 4, &mut rng)
            .unwrap();
        assert_eq!(session.phase(), Phase::Guessing);
        assert_eq!(session.round().guesses().get(Category::North), None);
    }

    #[test]
    fn test_insufficient_data_leaves_state_untouched() {
        let two = FixedSource(four_cities()[..2].to_vec());
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut session = GameSession::new();

        let err = session
            .new_round(&two, &CityFilter::default(), 4, &mut rng)
            .unwrap_err();
        assert_eq!(
            err,
            QuizError::InsufficientData {
                needed: 4,
                found: 2
            }
        );
        assert_eq!(session.phase(), Phase::Empty);
        assert!(session.round().is_empty());

        // A good round followed by a failed regeneration keeps the old round
        let four = FixedSource(four_cities());
        session
            .new_round(&four, &CityFilter::default(), 4, &mut rng)
            .unwrap();
        session.set_guess(Category::West, "B");
        let err = session
            .new_round(&two, &CityFilter::default(), 4, &mut rng)
            .unwrap_err();
        assert!(matches!(err, QuizError::InsufficientData { .. }));
        assert_eq!(session.round().guesses().get(Category::West), Some("B"));
    }

    #[test]
    fn test_no_empty_to_revealed_transition() {
        let mut session = GameSession::new();
        assert_eq!(session.reveal().unwrap_err(), QuizError::EmptyRound);
        assert_eq!(session.phase(), Phase::Empty);
        assert_eq!(session.check().unwrap_err(), QuizError::EmptyRound);
    }
}
