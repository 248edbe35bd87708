use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    pub admin: Addr,
    /// CW20 the caller pays in.
    pub token_in: Addr,
    /// CW20 paid out from the vault (this contract's own balance).
    pub token_out: Addr,
    /// Lot granularity; immutable after instantiation, both > 0.
    pub token_in_lot_size: Uint128,
    pub token_out_lot_size: Uint128,
}

/// Running totals; each successful swap bumps every field exactly once.
#[cw_serde]
pub struct SwapStats {
    pub token_in: Uint128,
    pub token_out: Uint128,
    pub swap_counter: u64,
}

impl Default for SwapStats {
    fn default() -> Self {
        Self {
            token_in: Uint128::zero(),
            token_out: Uint128::zero(),
            swap_counter: 0,
        }
    }
}

// ---- Storage keys ----

pub const CONFIG: Item<Config> = Item::new("config");
pub const STATS: Item<SwapStats> = Item::new("stats");
pub const ACCOUNT_STATS: Map<&Addr, SwapStats> = Map::new("account_stats");

/// Remaining token-in amount each account may still swap; absolute value,
/// set by the admin and decremented on every swap. Defaults to zero.
pub const SWAP_LIMITS: Map<&Addr, Uint128> = Map::new("swap_limits");
