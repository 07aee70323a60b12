use cosmwasm_std::{BankMsg, Coin, DepsMut, Env, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::execute::{release_collateral, retire_debt};
use crate::health::{ensure_healthy, health_factor_of, query_feed_price};
use crate::state::CONFIG;
use dsc_types::{bonus_amount, meets_minimum_health, token_amount_from_usd, MathError};

/// Liquidate an unhealthy position.
///
/// The liquidator retires `debt_to_cover` of the user's debt with their own
/// DSC and seizes the equivalent collateral plus a 10% bonus. All-or-nothing:
/// the liquidation must strictly improve the user's health factor, and the
/// liquidator's own position must end healthy.
pub fn liquidate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    collateral_denom: String,
    user: String,
    debt_to_cover: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    if debt_to_cover.is_zero() {
        return Err(ContractError::ZeroAmount);
    }
    let entry = config
        .entry(&collateral_denom)
        .ok_or_else(|| ContractError::CollateralNotPermitted {
            denom: collateral_denom.clone(),
        })?;
    let user_addr = deps.api.addr_validate(&user)?;

    let hf_before = health_factor_of(deps.as_ref(), &env, &config, user_addr.as_str())?;
    if meets_minimum_health(hf_before) {
        return Err(ContractError::PositionNotLiquidatable {
            health_factor: hf_before.to_string(),
        });
    }

    // Seizure: collateral equivalent of the covered debt, plus the bonus
    let price = query_feed_price(deps.as_ref(), &env, entry)?;
    let base = token_amount_from_usd(price, debt_to_cover)?;
    let bonus = bonus_amount(base)?;
    let seized = base.checked_add(bonus).map_err(MathError::from)?;

    release_collateral(
        deps.storage,
        &config,
        user_addr.as_str(),
        &collateral_denom,
        seized,
    )?;
    let burn_msgs = retire_debt(
        deps.storage,
        &config,
        &env,
        user_addr.as_str(),
        &info.sender,
        debt_to_cover,
    )?;

    // A partial liquidation that leaves the position no better off is
    // refused; this keeps liquidation monotone and blocks bonus farming.
    let hf_after = health_factor_of(deps.as_ref(), &env, &config, user_addr.as_str())?;
    if hf_after <= hf_before {
        return Err(ContractError::LiquidationDidNotImprove {
            before: hf_before.to_string(),
            after: hf_after.to_string(),
        });
    }

    ensure_healthy(deps.as_ref(), &env, &config, info.sender.as_str())?;

    let seize_msg = BankMsg::Send {
        to_address: info.sender.to_string(),
        amount: vec![Coin {
            denom: collateral_denom.clone(),
            amount: seized,
        }],
    };

    Ok(Response::new()
        .add_message(seize_msg)
        .add_messages(burn_msgs)
        .add_attribute("action", "liquidate")
        .add_attribute("liquidator", info.sender)
        .add_attribute("user", user_addr)
        .add_attribute("denom", collateral_denom)
        .add_attribute("debt_covered", debt_to_cover)
        .add_attribute("collateral_seized", seized))
}
