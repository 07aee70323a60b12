use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Api, StdResult, Uint128, Uint256};

use crate::oracle::DEFAULT_FEED_STALENESS_SECS;

/// Price feed handle as supplied at instantiation, before address validation.
#[cw_serde]
pub struct PriceFeedConfigUnchecked {
    pub address: String,
    /// Freshness window in seconds; defaults to one hour.
    pub max_staleness_secs: Option<u64>,
}

impl PriceFeedConfigUnchecked {
    pub fn validate(self, api: &dyn Api) -> StdResult<PriceFeedConfig> {
        Ok(PriceFeedConfig {
            address: api.addr_validate(&self.address)?,
            max_staleness_secs: self
                .max_staleness_secs
                .unwrap_or(DEFAULT_FEED_STALENESS_SECS),
        })
    }
}

/// Validated price feed handle held by the engine.
#[cw_serde]
pub struct PriceFeedConfig {
    pub address: Addr,
    pub max_staleness_secs: u64,
}

/// One permitted collateral asset and its feed.
#[cw_serde]
pub struct CollateralEntry {
    pub denom: String,
    pub feed: PriceFeedConfig,
}

/// Engine configuration, immutable after instantiation.
///
/// The collateral list keeps its instantiation order so USD aggregation over
/// a position is deterministic.
#[cw_serde]
pub struct EngineConfig {
    /// cw20 debt token the engine is the sole minter of
    pub dsc_token: Addr,
    /// Permitted collateral set, in instantiation order
    pub collaterals: Vec<CollateralEntry>,
}

impl EngineConfig {
    /// Look up a permitted collateral by denom.
    pub fn entry(&self, denom: &str) -> Option<&CollateralEntry> {
        self.collaterals.iter().find(|e| e.denom == denom)
    }

    pub fn is_permitted(&self, denom: &str) -> bool {
        self.entry(denom).is_some()
    }
}

/// Instantiate message for the engine.
///
/// `collateral_denoms` and `price_feeds` are parallel lists; mismatched
/// lengths, an empty set, or duplicate denoms reject construction.
#[cw_serde]
pub struct InstantiateMsg {
    pub collateral_denoms: Vec<String>,
    pub price_feeds: Vec<PriceFeedConfigUnchecked>,
    pub dsc_token: String,
}

/// Execute messages for the engine.
#[cw_serde]
pub enum ExecuteMsg {
    /// Deposit collateral (send exactly one permitted coin with the msg)
    DepositCollateral {},

    /// Deposit collateral and mint DSC against it in one transaction
    /// (send exactly one permitted coin with the msg)
    DepositCollateralAndMintDsc { dsc_to_mint: Uint128 },

    /// Mint DSC against already-deposited collateral
    MintDsc { amount: Uint128 },

    /// Burn DSC to reduce debt. The engine pulls the DSC from the caller
    /// under a prior cw20 allowance.
    BurnDsc { amount: Uint128 },

    /// Redeem deposited collateral (position must stay healthy)
    RedeemCollateral { denom: String, amount: Uint128 },

    /// Burn DSC and redeem collateral in one transaction
    RedeemCollateralForDsc {
        denom: String,
        amount: Uint128,
        dsc_to_burn: Uint128,
    },

    /// Repay part of an unhealthy position's debt with the caller's DSC and
    /// seize the equivalent collateral plus a bonus
    Liquidate {
        collateral_denom: String,
        user: String,
        /// Debt to retire, in DSC units (USD at token precision)
        debt_to_cover: Uint128,
    },
}

/// Query messages for the engine.
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Engine configuration
    #[returns(ConfigResponse)]
    Config {},

    /// A user's debt and total collateral USD value
    #[returns(CdpInfoResponse)]
    CdpInfo { user: String },

    /// A user's health factor (maximum value = no debt)
    #[returns(HealthFactorResponse)]
    HealthFactor { user: String },

    /// USD value (token precision) of an amount of a permitted collateral
    #[returns(UsdValueResponse)]
    UsdValue { denom: String, amount: Uint128 },

    /// Collateral amount worth the given USD value at the current quote
    #[returns(TokenAmountResponse)]
    TokenAmountFromUsd { denom: String, usd_amount: Uint128 },

    /// A user's deposited amount of one collateral
    #[returns(CollateralResponse)]
    CollateralOf { user: String, denom: String },

    /// The permitted collateral set, in instantiation order
    #[returns(PermittedCollateralResponse)]
    PermittedCollateral {},

    /// Liquidator bonus percentage
    #[returns(LiquidationBonusResponse)]
    LiquidationBonus {},
}

#[cw_serde]
pub struct CollateralInfo {
    pub denom: String,
    pub price_feed: String,
    pub max_staleness_secs: u64,
}

#[cw_serde]
pub struct ConfigResponse {
    pub dsc_token: String,
    pub collaterals: Vec<CollateralInfo>,
}

#[cw_serde]
pub struct CdpInfoResponse {
    pub debt: Uint128,
    pub collateral_usd: Uint256,
}

#[cw_serde]
pub struct HealthFactorResponse {
    pub health_factor: Uint256,
}

#[cw_serde]
pub struct UsdValueResponse {
    pub usd_value: Uint256,
}

#[cw_serde]
pub struct TokenAmountResponse {
    pub amount: Uint128,
}

#[cw_serde]
pub struct CollateralResponse {
    pub amount: Uint128,
}

#[cw_serde]
pub struct PermittedCollateralResponse {
    pub collaterals: Vec<CollateralInfo>,
}

#[cw_serde]
pub struct LiquidationBonusResponse {
    pub bonus_percent: u64,
}
