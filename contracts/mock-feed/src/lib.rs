use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, Int128, MessageInfo, Response,
    StdResult,
};
use cw_storage_plus::Item;
use dsc_types::{PriceFeedQueryMsg, RoundDataResponse};

pub const ROUND: Item<StoredRound> = Item::new("round");

#[cw_serde]
pub struct StoredRound {
    pub round_id: u64,
    pub price: Int128,
    pub updated_at: u64,
}

#[cw_serde]
pub struct InstantiateMsg {
    /// Initial quote in 10^-8 USD units
    pub price: Int128,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Publish a new round at the current block time
    SetPrice { price: Int128 },
    /// Publish a new round with an explicit timestamp
    SetRound { price: Int128, updated_at: u64 },
}

#[entry_point]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
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

#[entry_point]
pub fn execute(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
    msg: ExecuteMsg,
) -> StdResult<Response> {
    let (price, updated_at) = match msg {
        ExecuteMsg::SetPrice { price } => (price, env.block.time.seconds()),
        ExecuteMsg::SetRound { price, updated_at } => (price, updated_at),
    };

    let round_id = ROUND.may_load(deps.storage)?.map_or(1, |r| r.round_id + 1);
    ROUND.save(
        deps.storage,
        &StoredRound {
            round_id,
            price,
            updated_at,
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "set_round")
        .add_attribute("round_id", round_id.to_string()))
}

#[entry_point]
pub fn query(deps: Deps, _env: Env, msg: PriceFeedQueryMsg) -> StdResult<Binary> {
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
