use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Int128;

/// How old a quote may be before the engine refuses to trust it.
pub const DEFAULT_FEED_STALENESS_SECS: u64 = 3_600;

/// Price feed query interface.
/// Every permitted collateral asset has one feed contract implementing this.
#[cw_serde]
#[derive(QueryResponses)]
pub enum PriceFeedQueryMsg {
    /// Latest round published by the feed
    #[returns(RoundDataResponse)]
    LatestRound {},
}

/// One published price round.
#[cw_serde]
pub struct RoundDataResponse {
    pub round_id: u64,
    /// USD per whole unit of the asset, in 10^-8 units. Signed; the engine
    /// rejects zero or negative quotes.
    pub price: Int128,
    pub started_at: u64,
    pub updated_at: u64,
    pub answered_in_round: u64,
}
