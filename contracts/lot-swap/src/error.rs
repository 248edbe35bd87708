use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Invalid lot size: lot sizes must be > 0")]
    InvalidLotSize,

    #[error("Swap amount is below one full lot of {lot_size}")]
    SwapAmountTooSmall { lot_size: String },

    #[error("Swap limit exceeded: limit is {limit}, requested {requested}")]
    SwapLimitExceeded { limit: String, requested: String },

    #[error("Insufficient vault balance. Available: {available}, requested: {requested}")]
    InsufficientVaultBalance {
        available: String,
        requested: String,
    },
}
