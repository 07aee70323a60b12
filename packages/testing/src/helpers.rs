use cosmwasm_std::{Uint128, Uint256};
use dsc_types::{
    InstantiateMsg, PriceFeedConfigUnchecked, FEED_PRECISION, LIQUIDATION_PRECISION,
    LIQUIDATION_THRESHOLD, TOKEN_PRECISION,
};

/// Default test addresses
pub const DEPLOYER: &str = "deployer";
pub const USER1: &str = "user1";
pub const USER2: &str = "user2";
pub const LIQUIDATOR: &str = "liquidator";

/// Default test denoms
pub const WETH_DENOM: &str = "uweth";
pub const WBTC_DENOM: &str = "uwbtc";

/// Default raw quotes (10^-8 USD units)
pub const WETH_QUOTE: i128 = 4_000 * FEED_PRECISION as i128;
pub const WBTC_QUOTE: i128 = 70_000 * FEED_PRECISION as i128;

/// Whole tokens in token precision.
pub fn tokens(whole: u128) -> Uint128 {
    Uint128::new(whole * TOKEN_PRECISION)
}

/// Engine instantiate message for the default two-asset setup.
pub fn default_instantiate_msg(
    weth_feed: &str,
    wbtc_feed: &str,
    dsc_token: &str,
) -> InstantiateMsg {
    InstantiateMsg {
        collateral_denoms: vec![WETH_DENOM.to_string(), WBTC_DENOM.to_string()],
        price_feeds: vec![
            PriceFeedConfigUnchecked {
                address: weth_feed.to_string(),
                max_staleness_secs: None,
            },
            PriceFeedConfigUnchecked {
                address: wbtc_feed.to_string(),
                max_staleness_secs: None,
            },
        ],
        dsc_token: dsc_token.to_string(),
    }
}

/// Reference health factor for single-asset positions, mirroring the
/// engine's arithmetic. `None` means no debt (always healthy).
pub fn expected_health_factor(
    collateral_amount: Uint128,
    raw_quote: i128,
    debt: Uint128,
) -> Option<Uint256> {
    if debt.is_zero() {
        return None;
    }

    let collateral_usd = Uint128::new(raw_quote.unsigned_abs())
        .full_mul(dsc_types::FEED_PRECISION_LIFT)
        * Uint256::from(collateral_amount)
        / Uint256::from(TOKEN_PRECISION);
    let adjusted = collateral_usd * Uint256::from(LIQUIDATION_THRESHOLD)
        / Uint256::from(LIQUIDATION_PRECISION);
    Some(adjusted * Uint256::from(TOKEN_PRECISION) / Uint256::from(debt))
}
