use cosmwasm_std::Uint128;
use cw_storage_plus::{Item, Map};
use dsc_types::EngineConfig;

pub const CONTRACT_NAME: &str = "crates.io:dsc-engine";
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Engine configuration (immutable after instantiation)
pub const CONFIG: Item<EngineConfig> = Item::new("config");

/// Deposited collateral per user and denom (token-precision amounts).
/// Entries are removed when they reach zero, so an emptied position is
/// indistinguishable from an unseen user.
/// Key: (user address, collateral denom)
pub const COLLATERAL: Map<(&str, &str), Uint128> = Map::new("collateral");

/// DSC debt per user (token-precision amounts); removed at zero.
/// Key: user address
pub const DEBTS: Map<&str, Uint128> = Map::new("debts");
