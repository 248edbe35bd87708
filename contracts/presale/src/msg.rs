use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Uint128};

#[cw_serde]
pub struct InstantiateMsg {
    /// Capped-asset contract minted to buyers.
    pub asset: String,
    /// Destination for quote-asset payments.
    pub fund_receiver: String,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Admin: register a new sale pair under the next sequential id.
    /// Parameters are stored as given; a malformed window simply never
    /// accepts purchases (permissive create, restrictive buy).
    CreatePair {
        quote_asset: String,
        min_contribution: Uint128,
        max_contribution: Uint128,
        lot_size: Uint128,
        lot_price: Uint128,
        sale_start: u64,
        sale_end: u64,
        sale_cap: Uint128,
        is_active: bool,
    },

    /// Buy from a pair. `quote_amount` is rounded down to whole lots; only
    /// the lot-aligned cost is pulled from the buyer's CW20 allowance.
    BuyAsset { pair_id: u64, quote_amount: Uint128 },

    /// Admin: enable or disable purchases on a pair.
    SetPairActive { pair_id: u64, is_active: bool },

    /// Admin: update the payout destination.
    SetFundReceiver { address: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(PairResponse)]
    Pair { pair_id: u64 },

    #[returns(PairsResponse)]
    Pairs {
        start_after: Option<u64>,
        limit: Option<u32>,
    },

    /// Cumulative quote amount the account has contributed to a pair.
    #[returns(ContributionResponse)]
    Contribution { pair_id: u64, address: String },

    /// Remaining contribution headroom for the account on a pair.
    #[returns(ContributionResponse)]
    AccountMaxContribution { pair_id: u64, address: String },
}

// ---- Response types ----

#[cw_serde]
pub struct ConfigResponse {
    pub admin: Addr,
    pub asset: Addr,
    pub fund_receiver: Addr,
    pub pair_counter: u64,
    pub global_asset_counter: Uint128,
}

#[cw_serde]
pub struct PairResponse {
    pub pair_id: u64,
    pub quote_asset: Addr,
    pub min_contribution: Uint128,
    pub max_contribution: Uint128,
    pub lot_size: Uint128,
    pub lot_price: Uint128,
    pub sale_start: u64,
    pub sale_end: u64,
    pub sale_cap: Uint128,
    pub sold_amount: Uint128,
    pub is_active: bool,
}

#[cw_serde]
pub struct PairsResponse {
    pub pairs: Vec<PairResponse>,
}

#[cw_serde]
pub struct ContributionResponse {
    pub amount: Uint128,
}
