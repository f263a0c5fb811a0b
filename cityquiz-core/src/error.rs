//! Error types for the round lifecycle

/// Errors surfaced by round generation, scoring and reveal
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuizError {
    /// Fewer cities matched the filter than the round needs
    #[error("not enough cities match the filter: needed {needed}, found {found}")]
    InsufficientData { needed: usize, found: usize },

    /// Scoring or revealing was attempted before any round was generated
    #[error("no active round: generate a round before checking or revealing")]
    EmptyRound,

    /// A guess arrived for a category outside the fixed six
    #[error("unknown guess category: {0}")]
    UnknownCategory(String),

    /// The dataset collaborator could not serve the query
    #[error("dataset unavailable: {0}")]
    DatasetUnavailable(String),
}
