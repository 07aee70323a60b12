use cosmwasm_std::{BankMsg, Coin, DepsMut, Env, MessageInfo, Response, Storage, Uint128};

use crate::error::ContractError;
use crate::execute::retire_debt;
use crate::health::ensure_healthy;
use crate::state::{COLLATERAL, CONFIG};
use dsc_types::EngineConfig;

/// Redeem deposited collateral.
///
/// The ledger is debited first and the solvency check runs on the resulting
/// state; only then is the outbound transfer staged, so an unhealthy
/// post-state never releases funds.
pub fn redeem_collateral(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    denom: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    release_collateral(deps.storage, &config, info.sender.as_str(), &denom, amount)?;
    ensure_healthy(deps.as_ref(), &env, &config, info.sender.as_str())?;

    let transfer = BankMsg::Send {
        to_address: info.sender.to_string(),
        amount: vec![Coin {
            denom: denom.clone(),
            amount,
        }],
    };

    Ok(Response::new()
        .add_message(transfer)
        .add_attribute("action", "redeem_collateral")
        .add_attribute("from", info.sender.clone())
        .add_attribute("to", info.sender)
        .add_attribute("denom", denom)
        .add_attribute("amount", amount))
}

/// Burn DSC and redeem collateral in one transaction; the solvency check
/// sees the state after both legs.
pub fn redeem_collateral_for_dsc(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    denom: String,
    amount: Uint128,
    dsc_to_burn: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let burn_msgs = retire_debt(
        deps.storage,
        &config,
        &env,
        info.sender.as_str(),
        &info.sender,
        dsc_to_burn,
    )?;
    release_collateral(deps.storage, &config, info.sender.as_str(), &denom, amount)?;
    ensure_healthy(deps.as_ref(), &env, &config, info.sender.as_str())?;

    let transfer = BankMsg::Send {
        to_address: info.sender.to_string(),
        amount: vec![Coin {
            denom: denom.clone(),
            amount,
        }],
    };

    Ok(Response::new()
        .add_messages(burn_msgs)
        .add_message(transfer)
        .add_attribute("action", "redeem_collateral_for_dsc")
        .add_attribute("from", info.sender.clone())
        .add_attribute("to", info.sender)
        .add_attribute("denom", denom)
        .add_attribute("amount", amount)
        .add_attribute("dsc_burned", dsc_to_burn))
}

/// Debit `amount` of `denom` from `from`'s collateral ledger. Checks: amount
/// positive, denom permitted, balance sufficient. The entry is removed when
/// it reaches zero.
pub(crate) fn release_collateral(
    storage: &mut dyn Storage,
    config: &EngineConfig,
    from: &str,
    denom: &str,
    amount: Uint128,
) -> Result<(), ContractError> {
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }
    if !config.is_permitted(denom) {
        return Err(ContractError::CollateralNotPermitted {
            denom: denom.to_string(),
        });
    }

    let current = COLLATERAL.may_load(storage, (from, denom))?.unwrap_or_default();
    let updated = current
        .checked_sub(amount)
        .map_err(|_| ContractError::InsufficientCollateral {
            denom: denom.to_string(),
            available: current.to_string(),
            requested: amount.to_string(),
        })?;
    if updated.is_zero() {
        COLLATERAL.remove(storage, (from, denom));
    } else {
        COLLATERAL.save(storage, (from, denom), &updated)?;
    }

    Ok(())
}
