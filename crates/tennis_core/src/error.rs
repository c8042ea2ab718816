use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("best-of must be an odd, non-zero number of sets, got {0}")]
    InvalidBestOf(u8),

    #[error("invalid set probabilities: p1={p1}, p2={p2} (each must be in [0, 1] and sum to 1)")]
    InvalidProbability { p1: f64, p2: f64 },

    #[error("number of simulations must be greater than zero")]
    NoSimulations,

    #[error("invalid projection config: {0}")]
    InvalidConfig(String),
}
