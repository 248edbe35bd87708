use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::Uint128;

use crate::state::Role;

#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub symbol: String,
    /// Minted to the deployer on instantiation. Must not exceed `cap`.
    pub initial_supply: Uint128,
    pub cap: Uint128,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Move tokens from the caller to `recipient`.
    Transfer { recipient: String, amount: Uint128 },

    /// Move tokens from `owner` to `recipient`, spending the caller's
    /// allowance. Wire-compatible with the CW20 variant of the same name.
    TransferFrom {
        owner: String,
        recipient: String,
        amount: Uint128,
    },

    IncreaseAllowance { spender: String, amount: Uint128 },

    /// Decrease floors at zero rather than failing.
    DecreaseAllowance { spender: String, amount: Uint128 },

    /// Minter role only. Fails once total supply would exceed the cap.
    Mint { recipient: String, amount: Uint128 },

    /// Burn from the caller's own balance.
    Burn { amount: Uint128 },

    /// Admin role only.
    GrantRole { role: Role, account: String },

    /// Admin role only.
    RevokeRole { role: Role, account: String },

    /// `account` must be the caller; roles can only be renounced for oneself.
    RenounceRole { role: Role, account: String },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(TokenInfoResponse)]
    TokenInfo {},

    #[returns(BalanceResponse)]
    Balance { address: String },

    #[returns(AllowanceResponse)]
    Allowance { owner: String, spender: String },

    #[returns(HasRoleResponse)]
    HasRole { role: Role, account: String },
}

// ---- Response types ----

#[cw_serde]
pub struct TokenInfoResponse {
    pub name: String,
    pub symbol: String,
    pub decimals: u8,
    pub total_supply: Uint128,
    pub cap: Uint128,
}

#[cw_serde]
pub struct BalanceResponse {
    pub balance: Uint128,
}

#[cw_serde]
pub struct AllowanceResponse {
    pub allowance: Uint128,
}

#[cw_serde]
pub struct HasRoleResponse {
    pub has_role: bool,
}
