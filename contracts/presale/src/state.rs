use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct Config {
    pub admin: Addr,
    /// Capped-asset contract minted to buyers. This contract must hold the
    /// minter role on it.
    pub asset: Addr,
    /// Destination for quote-asset payments.
    pub fund_receiver: Addr,
}

/// One sale offering: a quote asset plus price, lot, window and cap
/// parameters. Created once, never deleted; only `sold_amount` and
/// `is_active` change afterwards.
#[cw_serde]
pub struct Pair {
    /// CW20 contract the buyer pays with.
    pub quote_asset: Addr,
    /// Bounds on the cumulative quote amount charged per account.
    pub min_contribution: Uint128,
    pub max_contribution: Uint128,
    /// Asset units delivered per lot.
    pub lot_size: Uint128,
    /// Quote units charged per lot.
    pub lot_price: Uint128,
    /// Sale window, unix seconds, inclusive on both ends.
    pub sale_start: u64,
    pub sale_end: u64,
    /// Max asset units sold through this pair.
    pub sale_cap: Uint128,
    pub sold_amount: Uint128,
    pub is_active: bool,
}

// ---- Storage keys ----

pub const CONFIG: Item<Config> = Item::new("config");

/// Next pair id; pairs are numbered sequentially from 0.
pub const PAIR_COUNTER: Item<u64> = Item::new("pair_counter");
pub const PAIRS: Map<u64, Pair> = Map::new("pairs");

/// (pair_id, account) -> cumulative quote amount charged
pub const CONTRIBUTIONS: Map<(u64, &Addr), Uint128> = Map::new("contributions");

/// Total asset units minted across all pairs.
pub const GLOBAL_ASSET_COUNTER: Item<Uint128> = Item::new("global_asset_counter");
