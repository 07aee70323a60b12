use cosmwasm_std::{Uint128, Uint256};

use crate::error::MathError;

/// Token precision: collateral amounts, debt amounts, and the health factor
/// are all expressed in units of 10^-18.
pub const TOKEN_PRECISION: u128 = 1_000_000_000_000_000_000;

/// Raw price-feed precision (USD per whole unit of asset, 10^-8 units).
pub const FEED_PRECISION: u128 = 100_000_000;

/// Lift applied to raw quotes so that FEED_PRECISION * FEED_PRECISION_LIFT
/// equals TOKEN_PRECISION.
pub const FEED_PRECISION_LIFT: u128 = 10_000_000_000;

/// Fraction of collateral USD value that counts as debt backing (percent).
/// 50 means a position must be at least 200% over-collateralized.
pub const LIQUIDATION_THRESHOLD: u64 = 50;

/// Denominator for the threshold and bonus percentages.
pub const LIQUIDATION_PRECISION: u64 = 100;

/// Extra collateral paid to a liquidator, as a percent of the base seizure.
pub const LIQUIDATION_BONUS: u64 = 10;

/// USD value of `amount` units of an asset quoted at `raw_price`
/// (feed precision). Result is USD in token precision.
///
/// Widens to 256 bits before multiplying; token amounts near the top of the
/// 128-bit range would otherwise overflow.
pub fn usd_value(raw_price: Uint128, amount: Uint128) -> Result<Uint256, MathError> {
    let lifted = raw_price.full_mul(FEED_PRECISION_LIFT);
    let value = lifted
        .checked_mul(Uint256::from(amount))?
        .checked_div(Uint256::from(TOKEN_PRECISION))?;
    Ok(value)
}

/// Asset amount (token precision) worth `usd` (USD in token precision) at
/// `raw_price` (feed precision). Truncates toward zero.
pub fn token_amount_from_usd(raw_price: Uint128, usd: Uint128) -> Result<Uint128, MathError> {
    let divisor = raw_price.full_mul(FEED_PRECISION_LIFT);
    let amount = usd.full_mul(TOKEN_PRECISION).checked_div(divisor)?;
    Ok(Uint128::try_from(amount)?)
}

/// Health factor of a position, in token precision.
///
/// A position with no debt is always healthy; that case is represented as
/// the saturating maximum of the 256-bit domain.
pub fn health_factor(collateral_usd: Uint256, debt: Uint128) -> Result<Uint256, MathError> {
    if debt.is_zero() {
        return Ok(Uint256::MAX);
    }
    let adjusted = collateral_usd
        .checked_mul(Uint256::from(LIQUIDATION_THRESHOLD))?
        .checked_div(Uint256::from(LIQUIDATION_PRECISION))?;
    let hf = adjusted
        .checked_mul(Uint256::from(TOKEN_PRECISION))?
        .checked_div(Uint256::from(debt))?;
    Ok(hf)
}

/// Whether a health factor meets the 1.0 minimum.
pub fn meets_minimum_health(hf: Uint256) -> bool {
    hf >= Uint256::from(TOKEN_PRECISION)
}

/// Liquidator bonus on a base seizure amount.
pub fn bonus_amount(base: Uint128) -> Result<Uint128, MathError> {
    let bonus = base
        .full_mul(LIQUIDATION_BONUS)
        .checked_div(Uint256::from(LIQUIDATION_PRECISION))?;
    Ok(Uint128::try_from(bonus)?)
}
