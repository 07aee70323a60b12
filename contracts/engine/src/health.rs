use cosmwasm_std::{Deps, Env, Int128, Uint128, Uint256};

use crate::error::ContractError;
use crate::state::{COLLATERAL, DEBTS};
use dsc_types::{
    health_factor, meets_minimum_health, usd_value, CollateralEntry, EngineConfig, MathError,
    PriceFeedQueryMsg, RoundDataResponse,
};

/// Read the latest round from a collateral's price feed and validate it.
///
/// A quote older than the feed's freshness window fails closed: a stale
/// quote can falsify the solvency check in either direction.
pub fn query_feed_price(
    deps: Deps,
    env: &Env,
    entry: &CollateralEntry,
) -> Result<Uint128, ContractError> {
    let round: RoundDataResponse = deps
        .querier
        .query_wasm_smart(entry.feed.address.as_str(), &PriceFeedQueryMsg::LatestRound {})
        .map_err(|e| ContractError::FeedQueryFailed {
            denom: entry.denom.clone(),
            reason: e.to_string(),
        })?;

    let now = env.block.time.seconds();
    let age_seconds = now.saturating_sub(round.updated_at);
    if age_seconds >= entry.feed.max_staleness_secs {
        return Err(ContractError::StalePrice {
            denom: entry.denom.clone(),
            age_seconds,
            max_staleness: entry.feed.max_staleness_secs,
        });
    }

    if round.price <= Int128::zero() {
        return Err(ContractError::InvalidPrice {
            denom: entry.denom.clone(),
            price: round.price.to_string(),
        });
    }

    Ok(Uint128::new(round.price.i128().unsigned_abs()))
}

/// Total USD value (token precision) of a user's collateral, aggregated over
/// the permitted set in instantiation order. Feeds are only consulted for
/// assets the user actually holds.
pub fn collateral_usd_of(
    deps: Deps,
    env: &Env,
    config: &EngineConfig,
    user: &str,
) -> Result<Uint256, ContractError> {
    let mut total = Uint256::zero();
    for entry in &config.collaterals {
        let amount = COLLATERAL
            .may_load(deps.storage, (user, &entry.denom))?
            .unwrap_or_default();
        if amount.is_zero() {
            continue;
        }
        let price = query_feed_price(deps, env, entry)?;
        let value = usd_value(price, amount)?;
        total = total.checked_add(value).map_err(MathError::from)?;
    }
    Ok(total)
}

/// Health factor of a user's position. A user with no debt reads as the
/// saturating maximum without touching any feed.
pub fn health_factor_of(
    deps: Deps,
    env: &Env,
    config: &EngineConfig,
    user: &str,
) -> Result<Uint256, ContractError> {
    let debt = DEBTS.may_load(deps.storage, user)?.unwrap_or_default();
    if debt.is_zero() {
        return Ok(Uint256::MAX);
    }
    let collateral_usd = collateral_usd_of(deps, env, config, user)?;
    Ok(health_factor(collateral_usd, debt)?)
}

/// Fail with `HealthFactorTooLow` unless the user's position meets the
/// 1.0 minimum in the current state.
pub fn ensure_healthy(
    deps: Deps,
    env: &Env,
    config: &EngineConfig,
    user: &str,
) -> Result<(), ContractError> {
    let hf = health_factor_of(deps, env, config, user)?;
    if !meets_minimum_health(hf) {
        return Err(ContractError::HealthFactorTooLow {
            health_factor: hf.to_string(),
        });
    }
    Ok(())
}
