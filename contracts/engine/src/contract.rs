use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response,
};

use dsc_types::{CollateralEntry, EngineConfig, ExecuteMsg, InstantiateMsg, QueryMsg};

use crate::error::ContractError;
use crate::execute;
use crate::query;
use crate::state::{CONFIG, CONTRACT_NAME, CONTRACT_VERSION};

#[entry_point]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    cw2::set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.collateral_denoms.len() != msg.price_feeds.len() {
        return Err(ContractError::InvalidConstructorArgs {
            reason: "collateral and price feed lists differ in length".to_string(),
        });
    }
    if msg.collateral_denoms.is_empty() {
        return Err(ContractError::InvalidConstructorArgs {
            reason: "permitted collateral set must not be empty".to_string(),
        });
    }

    let mut collaterals: Vec<CollateralEntry> = Vec::with_capacity(msg.collateral_denoms.len());
    for (denom, feed) in msg.collateral_denoms.into_iter().zip(msg.price_feeds) {
        if collaterals.iter().any(|e| e.denom == denom) {
            return Err(ContractError::InvalidConstructorArgs {
                reason: format!("duplicate collateral denom: {denom}"),
            });
        }
        collaterals.push(CollateralEntry {
            denom,
            feed: feed.validate(deps.api)?,
        });
    }

    let config = EngineConfig {
        dsc_token: deps.api.addr_validate(&msg.dsc_token)?,
        collaterals,
    };
    CONFIG.save(deps.storage, &config)?;

    let denoms = config
        .collaterals
        .iter()
        .map(|e| e.denom.as_str())
        .collect::<Vec<_>>()
        .join(",");

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("dsc_token", config.dsc_token)
        .add_attribute("collaterals", denoms))
}

#[entry_point]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::DepositCollateral {} => execute::deposit_collateral(deps, info),
        ExecuteMsg::DepositCollateralAndMintDsc { dsc_to_mint } => {
            execute::deposit_collateral_and_mint_dsc(deps, env, info, dsc_to_mint)
        }
        ExecuteMsg::MintDsc { amount } => execute::mint_dsc(deps, env, info, amount),
        ExecuteMsg::BurnDsc { amount } => execute::burn_dsc(deps, env, info, amount),
        ExecuteMsg::RedeemCollateral { denom, amount } => {
            execute::redeem_collateral(deps, env, info, denom, amount)
        }
        ExecuteMsg::RedeemCollateralForDsc {
            denom,
            amount,
            dsc_to_burn,
        } => execute::redeem_collateral_for_dsc(deps, env, info, denom, amount, dsc_to_burn),
        ExecuteMsg::Liquidate {
            collateral_denom,
            user,
            debt_to_cover,
        } => execute::liquidate(deps, env, info, collateral_denom, user, debt_to_cover),
    }
}

#[entry_point]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    let result = match msg {
        QueryMsg::Config {} => to_json_binary(&query::config(deps)?)?,
        QueryMsg::CdpInfo { user } => to_json_binary(&query::cdp_info(deps, env, user)?)?,
        QueryMsg::HealthFactor { user } => {
            to_json_binary(&query::health_factor(deps, env, user)?)?
        }
        QueryMsg::UsdValue { denom, amount } => {
            to_json_binary(&query::usd_value_of(deps, env, denom, amount)?)?
        }
        QueryMsg::TokenAmountFromUsd { denom, usd_amount } => {
            to_json_binary(&query::token_amount(deps, env, denom, usd_amount)?)?
        }
        QueryMsg::CollateralOf { user, denom } => {
            to_json_binary(&query::collateral_of(deps, user, denom)?)?
        }
        QueryMsg::PermittedCollateral {} => to_json_binary(&query::permitted_collateral(deps)?)?,
        QueryMsg::LiquidationBonus {} => to_json_binary(&query::liquidation_bonus())?,
    };

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::{message_info, mock_dependencies, mock_env, MockApi};
    use cosmwasm_std::from_json;
    use dsc_types::{
        ConfigResponse, LiquidationBonusResponse, PermittedCollateralResponse,
        PriceFeedConfigUnchecked, DEFAULT_FEED_STALENESS_SECS,
    };

    fn feed(api: &MockApi, name: &str) -> PriceFeedConfigUnchecked {
        PriceFeedConfigUnchecked {
            address: api.addr_make(name).to_string(),
            max_staleness_secs: None,
        }
    }

    fn default_instantiate_msg() -> InstantiateMsg {
        let api = MockApi::default();
        InstantiateMsg {
            collateral_denoms: vec!["uweth".to_string(), "uwbtc".to_string()],
            price_feeds: vec![feed(&api, "weth-feed"), feed(&api, "wbtc-feed")],
            dsc_token: api.addr_make("dsc").to_string(),
        }
    }

    #[test]
    fn test_instantiate() {
        let mut deps = mock_dependencies();
        let api = MockApi::default();
        let info = message_info(&api.addr_make("deployer"), &[]);

        let res = instantiate(deps.as_mut(), mock_env(), info, default_instantiate_msg()).unwrap();
        assert!(res
            .attributes
            .iter()
            .any(|a| a.key == "collaterals" && a.value == "uweth,uwbtc"));

        let config = CONFIG.load(deps.as_ref().storage).unwrap();
        assert_eq!(config.dsc_token, api.addr_make("dsc"));
        assert_eq!(config.collaterals.len(), 2);
        assert_eq!(config.collaterals[0].denom, "uweth");
        assert_eq!(
            config.collaterals[0].feed.max_staleness_secs,
            DEFAULT_FEED_STALENESS_SECS
        );
    }

    #[test]
    fn test_instantiate_mismatched_lengths() {
        let mut deps = mock_dependencies();
        let api = MockApi::default();
        let info = message_info(&api.addr_make("deployer"), &[]);

        let mut msg = default_instantiate_msg();
        msg.price_feeds.pop();

        let err = instantiate(deps.as_mut(), mock_env(), info, msg).unwrap_err();
        assert!(matches!(err, ContractError::InvalidConstructorArgs { .. }));
    }

    #[test]
    fn test_instantiate_empty_set() {
        let mut deps = mock_dependencies();
        let api = MockApi::default();
        let info = message_info(&api.addr_make("deployer"), &[]);

        let msg = InstantiateMsg {
            collateral_denoms: vec![],
            price_feeds: vec![],
            dsc_token: api.addr_make("dsc").to_string(),
        };

        let err = instantiate(deps.as_mut(), mock_env(), info, msg).unwrap_err();
        assert!(matches!(err, ContractError::InvalidConstructorArgs { .. }));
    }

    #[test]
    fn test_instantiate_duplicate_denom() {
        let mut deps = mock_dependencies();
        let api = MockApi::default();
        let info = message_info(&api.addr_make("deployer"), &[]);

        let msg = InstantiateMsg {
            collateral_denoms: vec!["uweth".to_string(), "uweth".to_string()],
            price_feeds: vec![feed(&api, "weth-feed"), feed(&api, "other-feed")],
            dsc_token: api.addr_make("dsc").to_string(),
        };

        let err = instantiate(deps.as_mut(), mock_env(), info, msg).unwrap_err();
        assert!(
            matches!(&err, ContractError::InvalidConstructorArgs { reason } if reason.contains("duplicate"))
        );
    }

    #[test]
    fn test_query_config() {
        let mut deps = mock_dependencies();
        let api = MockApi::default();
        let info = message_info(&api.addr_make("deployer"), &[]);
        instantiate(deps.as_mut(), mock_env(), info, default_instantiate_msg()).unwrap();

        let res = query(deps.as_ref(), mock_env(), QueryMsg::Config {}).unwrap();
        let config: ConfigResponse = from_json(res).unwrap();

        assert_eq!(config.dsc_token, api.addr_make("dsc").to_string());
        assert_eq!(config.collaterals.len(), 2);
        assert_eq!(config.collaterals[1].denom, "uwbtc");
    }

    #[test]
    fn test_query_permitted_collateral_order() {
        let mut deps = mock_dependencies();
        let api = MockApi::default();
        let info = message_info(&api.addr_make("deployer"), &[]);
        instantiate(deps.as_mut(), mock_env(), info, default_instantiate_msg()).unwrap();

        let res = query(deps.as_ref(), mock_env(), QueryMsg::PermittedCollateral {}).unwrap();
        let permitted: PermittedCollateralResponse = from_json(res).unwrap();

        let denoms: Vec<&str> = permitted
            .collaterals
            .iter()
            .map(|c| c.denom.as_str())
            .collect();
        assert_eq!(denoms, vec!["uweth", "uwbtc"]);
    }

    #[test]
    fn test_query_liquidation_bonus() {
        let mut deps = mock_dependencies();
        let api = MockApi::default();
        let info = message_info(&api.addr_make("deployer"), &[]);
        instantiate(deps.as_mut(), mock_env(), info, default_instantiate_msg()).unwrap();

        let res = query(deps.as_ref(), mock_env(), QueryMsg::LiquidationBonus {}).unwrap();
        let bonus: LiquidationBonusResponse = from_json(res).unwrap();
        assert_eq!(bonus.bonus_percent, 10);
    }
}
