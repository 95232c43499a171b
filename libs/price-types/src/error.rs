use thiserror::Error;

/// Errors raised while building reserves or encoding sqrt prices
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PriceError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Reserve must be non-negative, got {value}")]
    NegativeReserve { value: String },

    #[error("Invalid reserve amount: {input:?}")]
    InvalidReserve { input: String },

    #[error("Sqrt ratio {value} outside [MIN_SQRT_RATIO, MAX_SQRT_RATIO)")]
    SqrtRatioOutOfBounds { value: String },

    #[error("Value does not fit in {bits} bits")]
    Overflow { bits: u32 },
}

pub type PriceResult<T> = Result<T, PriceError>;
