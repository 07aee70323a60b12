use cosmwasm_std::{to_json_binary, Addr, DepsMut, Env, MessageInfo, Response, Storage, Uint128, WasmMsg};
use cw20::Cw20ExecuteMsg;

use crate::error::ContractError;
use crate::state::{CONFIG, DEBTS};
use dsc_types::EngineConfig;

/// Burn DSC to reduce the caller's debt.
///
/// The DSC is pulled from the caller under a prior cw20 allowance and then
/// burned by the engine. Burning cannot reduce health, so no solvency check
/// is required.
pub fn burn_dsc(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let msgs = retire_debt(deps.storage, &config, &env, info.sender.as_str(), &info.sender, amount)?;

    Ok(Response::new()
        .add_messages(msgs)
        .add_attribute("action", "burn_dsc")
        .add_attribute("user", info.sender)
        .add_attribute("amount", amount))
}

/// Reduce `on_behalf_of`'s recorded debt by `amount` and stage the cw20
/// messages that pull that much DSC from `payer` and burn it. The debt entry
/// is removed when it reaches zero.
pub(crate) fn retire_debt(
    storage: &mut dyn Storage,
    config: &EngineConfig,
    env: &Env,
    on_behalf_of: &str,
    payer: &Addr,
    amount: Uint128,
) -> Result<Vec<WasmMsg>, ContractError> {
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }

    let current = DEBTS.may_load(storage, on_behalf_of)?.unwrap_or_default();
    let updated = current
        .checked_sub(amount)
        .map_err(|_| ContractError::InsufficientDebt {
            available: current.to_string(),
            requested: amount.to_string(),
        })?;
    if updated.is_zero() {
        DEBTS.remove(storage, on_behalf_of);
    } else {
        DEBTS.save(storage, on_behalf_of, &updated)?;
    }

    let pull = WasmMsg::Execute {
        contract_addr: config.dsc_token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
            owner: payer.to_string(),
            recipient: env.contract.address.to_string(),
            amount,
        })?,
        funds: vec![],
    };
    let burn = WasmMsg::Execute {
        contract_addr: config.dsc_token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Burn { amount })?,
        funds: vec![],
    };

    Ok(vec![pull, burn])
}
