use cosmwasm_std::{DepsMut, Env, MessageInfo, Response, Storage, Uint128};

use crate::error::ContractError;
use crate::execute::increase_debt;
use crate::state::{COLLATERAL, CONFIG};
use dsc_types::{EngineConfig, MathError};

/// Deposit collateral sent with the message.
///
/// Depositing cannot reduce health, so no solvency check is required.
pub fn deposit_collateral(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let (denom, amount) = receive_collateral(deps.storage, &config, &info)?;

    Ok(Response::new()
        .add_attribute("action", "deposit_collateral")
        .add_attribute("user", info.sender)
        .add_attribute("denom", denom)
        .add_attribute("amount", amount))
}

/// Deposit collateral and mint DSC against it in one transaction. Either
/// both take effect or neither does.
pub fn deposit_collateral_and_mint_dsc(
    mut deps: DepsMut,
    env: Env,
    info: MessageInfo,
    dsc_to_mint: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let (denom, amount) = receive_collateral(deps.storage, &config, &info)?;
    let mint_msg = increase_debt(deps.branch(), &env, &config, &info.sender, dsc_to_mint)?;

    Ok(Response::new()
        .add_message(mint_msg)
        .add_attribute("action", "deposit_collateral_and_mint_dsc")
        .add_attribute("user", info.sender)
        .add_attribute("denom", denom)
        .add_attribute("amount", amount)
        .add_attribute("dsc_minted", dsc_to_mint))
}

/// Credit the single collateral coin attached to the message to the sender's
/// position. Checks: amount positive, denom permitted.
pub(crate) fn receive_collateral(
    storage: &mut dyn Storage,
    config: &EngineConfig,
    info: &MessageInfo,
) -> Result<(String, Uint128), ContractError> {
    let coin = match info.funds.as_slice() {
        [] => return Err(ContractError::ZeroAmount),
        [coin] => coin,
        _ => return Err(ContractError::MultipleDenoms),
    };
    if coin.amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }
    if !config.is_permitted(&coin.denom) {
        return Err(ContractError::CollateralNotPermitted {
            denom: coin.denom.clone(),
        });
    }

    let key = (info.sender.as_str(), coin.denom.as_str());
    let current = COLLATERAL.may_load(storage, key)?.unwrap_or_default();
    let updated = current.checked_add(coin.amount).map_err(MathError::from)?;
    COLLATERAL.save(storage, key, &updated)?;

    Ok((coin.denom.clone(), coin.amount))
}
