use cosmwasm_std::{DepsMut, MessageInfo, Response};

use crate::error::ContractError;
use crate::state::{CONFIG, PAIRS};

pub fn execute_set_pair_active(
    deps: DepsMut,
    info: MessageInfo,
    pair_id: u64,
    is_active: bool,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    let mut pair = PAIRS
        .may_load(deps.storage, pair_id)?
        .ok_or(ContractError::PairUnavailable { pair_id })?;
    pair.is_active = is_active;
    PAIRS.save(deps.storage, pair_id, &pair)?;

    Ok(Response::new()
        .add_attribute("action", "set_pair_active")
        .add_attribute("pair_id", pair_id.to_string())
        .add_attribute("is_active", is_active.to_string()))
}
