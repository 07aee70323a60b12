use cosmwasm_std::{Deps, Env, Uint128};

use crate::error::ContractError;
use crate::health::{collateral_usd_of, health_factor_of, query_feed_price};
use crate::state::{COLLATERAL, CONFIG, DEBTS};
use dsc_types::{
    token_amount_from_usd, usd_value, CdpInfoResponse, CollateralInfo, CollateralResponse,
    ConfigResponse, EngineConfig, HealthFactorResponse, LiquidationBonusResponse,
    PermittedCollateralResponse, TokenAmountResponse, UsdValueResponse, LIQUIDATION_BONUS,
};

fn collateral_info(config: &EngineConfig) -> Vec<CollateralInfo> {
    config
        .collaterals
        .iter()
        .map(|e| CollateralInfo {
            denom: e.denom.clone(),
            price_feed: e.feed.address.to_string(),
            max_staleness_secs: e.feed.max_staleness_secs,
        })
        .collect()
}

pub fn config(deps: Deps) -> Result<ConfigResponse, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        dsc_token: config.dsc_token.to_string(),
        collaterals: collateral_info(&config),
    })
}

pub fn cdp_info(deps: Deps, env: Env, user: String) -> Result<CdpInfoResponse, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let user_addr = deps.api.addr_validate(&user)?;

    let debt = DEBTS
        .may_load(deps.storage, user_addr.as_str())?
        .unwrap_or_default();
    let collateral_usd = collateral_usd_of(deps, &env, &config, user_addr.as_str())?;

    Ok(CdpInfoResponse {
        debt,
        collateral_usd,
    })
}

pub fn health_factor(
    deps: Deps,
    env: Env,
    user: String,
) -> Result<HealthFactorResponse, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let user_addr = deps.api.addr_validate(&user)?;

    Ok(HealthFactorResponse {
        health_factor: health_factor_of(deps, &env, &config, user_addr.as_str())?,
    })
}

pub fn usd_value_of(
    deps: Deps,
    env: Env,
    denom: String,
    amount: Uint128,
) -> Result<UsdValueResponse, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let entry = config
        .entry(&denom)
        .ok_or(ContractError::CollateralNotPermitted { denom })?;

    let price = query_feed_price(deps, &env, entry)?;
    Ok(UsdValueResponse {
        usd_value: usd_value(price, amount)?,
    })
}

pub fn token_amount(
    deps: Deps,
    env: Env,
    denom: String,
    usd_amount: Uint128,
) -> Result<TokenAmountResponse, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let entry = config
        .entry(&denom)
        .ok_or(ContractError::CollateralNotPermitted { denom })?;

    let price = query_feed_price(deps, &env, entry)?;
    Ok(TokenAmountResponse {
        amount: token_amount_from_usd(price, usd_amount)?,
    })
}

pub fn collateral_of(
    deps: Deps,
    user: String,
    denom: String,
) -> Result<CollateralResponse, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if !config.is_permitted(&denom) {
        return Err(ContractError::CollateralNotPermitted { denom });
    }
    let user_addr = deps.api.addr_validate(&user)?;

    Ok(CollateralResponse {
        amount: COLLATERAL
            .may_load(deps.storage, (user_addr.as_str(), &denom))?
            .unwrap_or_default(),
    })
}

pub fn permitted_collateral(deps: Deps) -> Result<PermittedCollateralResponse, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    Ok(PermittedCollateralResponse {
        collaterals: collateral_info(&config),
    })
}

pub fn liquidation_bonus() -> LiquidationBonusResponse {
    LiquidationBonusResponse {
        bonus_percent: LIQUIDATION_BONUS,
    }
}
