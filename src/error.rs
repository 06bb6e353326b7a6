use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HandError {
    #[error("Configuration Error: partitions need {required} dice but only {available} are rolled")]
    PartitionOverflow { required: usize, available: usize },

    #[error("Configuration Error: {rerolls} rerolls exceeds the {normal} normal dice")]
    RerollBudget { rerolls: usize, normal: usize },

    #[error("Configuration Error: a pool of {requested} dice exceeds the supported maximum of {max}")]
    DicePool { requested: usize, max: usize },

    #[error("Invalid die face: {0} (expected 1..=6)")]
    InvalidFace(u8),

    #[error("Unknown hand category: '{0}'")]
    UnknownCategory(String),

    #[error("No data.")]
    EmptyDomain,
}

pub type HandResult<T> = Result<T, HandError>;
