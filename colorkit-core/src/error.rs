use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("Invalid hex color: {0:?}")]
    InvalidHex(String),

    #[error("Expected 3 color components (r-g-b), found {0}")]
    ComponentCount(usize),

    #[error("Invalid color component: {0:?} is not an integer")]
    InvalidComponent(String),

    #[error("Invalid step count: {0:?} is not an integer")]
    InvalidSteps(String),

    #[error("Step count {steps} exceeds the maximum of {max}")]
    TooManySteps { steps: i64, max: i64 },
}

pub type Result<T> = std::result::Result<T, ColorError>;
