use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Empty, Uint128};
use cw_storage_plus::{Item, Map};

#[cw_serde]
pub struct TokenInfo {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: Uint128,
    /// Hard mint ceiling: total_supply never exceeds this.
    pub cap: Uint128,
}

/// Capability roles. Admin administers both roles; Minter may mint.
#[cw_serde]
#[derive(Copy)]
pub enum Role {
    Admin,
    Minter,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Minter => "minter",
        }
    }
}

// ---- Storage keys ----

pub const TOKEN_INFO: Item<TokenInfo> = Item::new("token_info");
pub const BALANCES: Map<&Addr, Uint128> = Map::new("balances");

/// (owner, spender) -> remaining allowance
pub const ALLOWANCES: Map<(&Addr, &Addr), Uint128> = Map::new("allowances");

/// (role, account) key presence = role membership
pub const ROLES: Map<(&str, &Addr), Empty> = Map::new("roles");
