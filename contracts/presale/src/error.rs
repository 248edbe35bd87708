use cosmwasm_std::{DivideByZeroError, OverflowError, StdError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    DivideByZero(#[from] DivideByZeroError),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Pair {pair_id} does not exist or is disabled")]
    PairUnavailable { pair_id: u64 },

    #[error("Pair {pair_id} is not in its sale period")]
    OutOfSalePeriod { pair_id: u64 },

    #[error("Contribution amount is too low: minimum is {min}")]
    ContributionTooLow { min: String },

    #[error("Contribution amount is too high: {remaining} remaining")]
    ContributionTooHigh { remaining: String },

    #[error("Sale cap exceeded: {remaining} remaining")]
    SaleCapExceeded { remaining: String },
}
