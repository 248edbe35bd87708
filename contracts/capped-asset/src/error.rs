use cosmwasm_std::{OverflowError, StdError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Supply cap exceeded: cap is {cap}")]
    CapExceeded { cap: String },

    #[error("Insufficient balance: need {need}, have {have}")]
    InsufficientBalance { need: String, have: String },

    #[error("Insufficient allowance: need {need}, have {have}")]
    InsufficientAllowance { need: String, have: String },
}
