use cosmwasm_std::StdError;
use dsc_types::MathError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Math(#[from] MathError),

    #[error("Zero amount not allowed")]
    ZeroAmount,

    #[error("Expected exactly one collateral coin")]
    MultipleDenoms,

    #[error("Collateral not permitted: {denom}")]
    CollateralNotPermitted { denom: String },

    #[error("Invalid constructor args: {reason}")]
    InvalidConstructorArgs { reason: String },

    #[error("Insufficient collateral: {denom} available {available}, requested {requested}")]
    InsufficientCollateral {
        denom: String,
        available: String,
        requested: String,
    },

    #[error("Insufficient debt: available {available}, requested {requested}")]
    InsufficientDebt {
        available: String,
        requested: String,
    },

    #[error("Health factor too low: {health_factor}")]
    HealthFactorTooLow { health_factor: String },

    #[error("Position is not liquidatable: health factor is {health_factor}")]
    PositionNotLiquidatable { health_factor: String },

    #[error("Liquidation did not improve the position: {before} -> {after}")]
    LiquidationDidNotImprove { before: String, after: String },

    #[error("Price feed query failed for {denom}: {reason}")]
    FeedQueryFailed { denom: String, reason: String },

    #[error("Stale price for {denom}: age {age_seconds}s, freshness window {max_staleness}s")]
    StalePrice {
        denom: String,
        age_seconds: u64,
        max_staleness: u64,
    },

    #[error("Invalid price for {denom}: {price}")]
    InvalidPrice { denom: String, price: String },
}
