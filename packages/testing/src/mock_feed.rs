use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, Int128, MessageInfo, Response, StdResult,
};
use cw_storage_plus::Item;
use dsc_types::{PriceFeedQueryMsg, RoundDataResponse};

/// Latest round stored by the mock feed
pub const ROUND: Item<StoredRound> = Item::new("round");

#[cw_serde]
pub struct StoredRound {
    pub round_id: u64,
    pub price: Int128,
    pub updated_at: u64,
}

/// Mock feed instantiate message; the quote is in 10^-8 USD units.
#[cw_serde]
pub struct MockFeedInstantiateMsg {
    pub price: Int128,
}

/// Mock feed execute message
#[cw_serde]
pub enum MockFeedExecuteMsg {
    /// Publish a new round at the current block time
    SetPrice { price: Int128 },
    /// Publish a new round with an explicit timestamp (staleness tests)
    SetRound { price: Int128, updated_at: u64 },
}

/// Mock price feed contract entry points for use in tests.

pub fn mock_feed_instantiate(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    msg: MockFeedInstantiateMsg,
) -> StdResult<Response> {
    ROUND.save(
        deps.storage,
        &StoredRound {
            round_id: 1,
            price: msg.price,
            updated_at: env.block.time.seconds(),
        },
    )?;
    Ok(Response::new().add_attribute("action", "instantiate_mock_feed"))
}

pub fn mock_feed_execute(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    msg: MockFeedExecuteMsg,
) -> StdResult<Response> {
    let (price, updated_at) = match msg {
        MockFeedExecuteMsg::SetPrice { price } => (price, env.block.time.seconds()),
        MockFeedExecuteMsg::SetRound { price, updated_at } => (price, updated_at),
    };

    let round = ROUND.may_load(deps.storage)?.map_or(1, |r| r.round_id + 1);
    ROUND.save(
        deps.storage,
        &StoredRound {
            round_id: round,
            price,
            updated_at,
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "set_round")
        .add_attribute("round_id", round.to_string())
        .add_attribute("price", price.to_string()))
}

pub fn mock_feed_query(deps: Deps, _env: Env, msg: PriceFeedQueryMsg) -> StdResult<Binary> {
    match msg {
        PriceFeedQueryMsg::LatestRound {} => {
            let round = ROUND.load(deps.storage)?;
            to_json_binary(&RoundDataResponse {
                round_id: round.round_id,
                price: round.price,
                started_at: round.updated_at,
                updated_at: round.updated_at,
                answered_in_round: round.round_id,
            })
        }
    }
}

/// Helper to create a mock feed contract for cw-multi-test.
#[allow(dead_code)]
pub fn mock_feed_contract() -> cw_multi_test::ContractWrapper<
    MockFeedExecuteMsg,
    MockFeedInstantiateMsg,
    PriceFeedQueryMsg,
    cosmwasm_std::StdError,
    cosmwasm_std::StdError,
    cosmwasm_std::StdError,
> {
    use cw_multi_test::ContractWrapper;

    ContractWrapper::new(mock_feed_execute, mock_feed_instantiate, mock_feed_query)
}
