use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

#[cw_serde]
pub struct InstantiateMsg {
    pub token_in: String,
    pub token_out: String,
    /// Both lot sizes must be > 0.
    pub token_in_lot_size: Uint128,
    pub token_out_lot_size: Uint128,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Swap `amount` of token-in, rounded down to whole lots, for token-out
    /// from the vault. Requires a CW20 allowance covering the lot-aligned
    /// input; the remainder below one lot is never pulled.
    Swap { amount: Uint128 },

    /// Admin: set the absolute remaining swap limit for an account.
    SetAccountSwapLimit { account: String, limit: Uint128 },

    /// Admin: withdraw vault-held tokens.
    Withdraw { asset: String, amount: Uint128 },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    /// Lot-aligned input/output amounts for a prospective swap.
    #[returns(CalculateInOutResponse)]
    CalculateInOut { amount: Uint128 },

    #[returns(SwapLimitResponse)]
    SwapLimit { address: String },

    #[returns(StatsResponse)]
    AccountStats { address: String },

    /// Aggregate statistics across all accounts.
    #[returns(StatsResponse)]
    Stats {},
}

// ---- Response types ----

#[cw_serde]
pub struct ConfigResponse {
    pub admin: Addr,
    pub token_in: Addr,
    pub token_out: Addr,
    pub token_in_lot_size: Uint128,
    pub token_out_lot_size: Uint128,
}

#[cw_serde]
pub struct CalculateInOutResponse {
    pub amount_in: Uint128,
    pub amount_out: Uint128,
}

#[cw_serde]
pub struct SwapLimitResponse {
    pub limit: Uint128,
}

#[cw_serde]
pub struct StatsResponse {
    pub token_in: Uint128,
    pub token_out: Uint128,
    pub swap_counter: u64,
}
