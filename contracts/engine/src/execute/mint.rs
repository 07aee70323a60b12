use cosmwasm_std::{to_json_binary, Addr, DepsMut, Env, MessageInfo, Response, Uint128, WasmMsg};
use cw20::Cw20ExecuteMsg;

use crate::error::ContractError;
use crate::health::ensure_healthy;
use crate::state::{CONFIG, DEBTS};
use dsc_types::{EngineConfig, MathError};

/// Mint DSC against already-deposited collateral.
pub fn mint_dsc(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mint_msg = increase_debt(deps, &env, &config, &info.sender, amount)?;

    Ok(Response::new()
        .add_message(mint_msg)
        .add_attribute("action", "mint_dsc")
        .add_attribute("user", info.sender)
        .add_attribute("amount", amount))
}

/// Record new debt for `user`, verify the post-state stays healthy, and
/// stage the cw20 mint. The solvency check reads the state written here, so
/// the debt increment must land before it runs.
pub(crate) fn increase_debt(
    deps: DepsMut,
    env: &Env,
    config: &EngineConfig,
    user: &Addr,
    amount: Uint128,
) -> Result<WasmMsg, ContractError> {
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }

    let current = DEBTS.may_load(deps.storage, user.as_str())?.unwrap_or_default();
    let updated = current.checked_add(amount).map_err(MathError::from)?;
    DEBTS.save(deps.storage, user.as_str(), &updated)?;

    ensure_healthy(deps.as_ref(), env, config, user.as_str())?;

    Ok(WasmMsg::Execute {
        contract_addr: config.dsc_token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Mint {
            recipient: user.to_string(),
            amount,
        })?,
        funds: vec![],
    })
}
