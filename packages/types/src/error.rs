use cosmwasm_std::{ConversionOverflowError, DivideByZeroError, OverflowError};
use thiserror::Error;

/// Errors from the fixed-point precision-domain arithmetic.
///
/// These indicate inputs far outside the ranges any real position reaches;
/// callers surface them as failed operations rather than silently saturating.
#[derive(Error, Debug, PartialEq)]
pub enum MathError {
    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    DivideByZero(#[from] DivideByZeroError),

    #[error("{0}")]
    Conversion(#[from] ConversionOverflowError),
}
