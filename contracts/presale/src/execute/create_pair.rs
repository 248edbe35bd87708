use cosmwasm_std::{DepsMut, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::state::{Pair, CONFIG, PAIRS, PAIR_COUNTER};

/// Admin-only. Validation is structural only: a window with
/// `sale_start >= sale_end` is stored as-is and never sells.
#[allow(clippy::too_many_arguments)]
pub fn execute_create_pair(
    deps: DepsMut,
    info: MessageInfo,
    quote_asset: String,
    min_contribution: Uint128,
    max_contribution: Uint128,
    lot_size: Uint128,
    lot_price: Uint128,
    sale_start: u64,
    sale_end: u64,
    sale_cap: Uint128,
    is_active: bool,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    let pair_id = PAIR_COUNTER.load(deps.storage)?;
    let pair = Pair {
        quote_asset: deps.api.addr_validate(&quote_asset)?,
        min_contribution,
        max_contribution,
        lot_size,
        lot_price,
        sale_start,
        sale_end,
        sale_cap,
        sold_amount: Uint128::zero(),
        is_active,
    };

    PAIRS.save(deps.storage, pair_id, &pair)?;
    PAIR_COUNTER.save(deps.storage, &(pair_id + 1))?;

    Ok(Response::new()
        .add_attribute("action", "create_pair")
        .add_attribute("pair_id", pair_id.to_string())
        .add_attribute("quote_asset", pair.quote_asset.to_string())
        .add_attribute("sale_cap", pair.sale_cap.to_string())
        .add_attribute("is_active", pair.is_active.to_string()))
}
