use cosmwasm_std::{Deps, Order, StdResult};
use cw_storage_plus::Bound;

use crate::msg::{ConfigResponse, ContributionResponse, PairResponse, PairsResponse};
use crate::state::{Pair, CONFIG, CONTRIBUTIONS, GLOBAL_ASSET_COUNTER, PAIRS, PAIR_COUNTER};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        admin: config.admin,
        asset: config.asset,
        fund_receiver: config.fund_receiver,
        pair_counter: PAIR_COUNTER.load(deps.storage)?,
        global_asset_counter: GLOBAL_ASSET_COUNTER.load(deps.storage)?,
    })
}

pub fn query_pair(deps: Deps, pair_id: u64) -> StdResult<PairResponse> {
    let pair = PAIRS.load(deps.storage, pair_id)?;
    Ok(pair_to_response(pair_id, pair))
}

pub fn query_pairs(
    deps: Deps,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<PairsResponse> {
    let limit = limit.unwrap_or(20).min(100) as usize;
    let start = start_after.map(Bound::exclusive);

    let pairs = PAIRS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(pair_id, pair)| pair_to_response(pair_id, pair)))
        .collect::<StdResult<Vec<_>>>()?;

    Ok(PairsResponse { pairs })
}

pub fn query_contribution(
    deps: Deps,
    pair_id: u64,
    address: String,
) -> StdResult<ContributionResponse> {
    let addr = deps.api.addr_validate(&address)?;
    let amount = CONTRIBUTIONS
        .may_load(deps.storage, (pair_id, &addr))?
        .unwrap_or_default();
    Ok(ContributionResponse { amount })
}

/// Remaining headroom under the pair's max contribution. An unknown pair
/// reads as zero headroom, mirroring the missing-record default.
pub fn query_account_max_contribution(
    deps: Deps,
    pair_id: u64,
    address: String,
) -> StdResult<ContributionResponse> {
    let addr = deps.api.addr_validate(&address)?;
    let max_contribution = PAIRS
        .may_load(deps.storage, pair_id)?
        .map(|pair| pair.max_contribution)
        .unwrap_or_default();
    let contributed = CONTRIBUTIONS
        .may_load(deps.storage, (pair_id, &addr))?
        .unwrap_or_default();

    Ok(ContributionResponse {
        amount: max_contribution.checked_sub(contributed)?,
    })
}

fn pair_to_response(pair_id: u64, pair: Pair) -> PairResponse {
    PairResponse {
        pair_id,
        quote_asset: pair.quote_asset,
        min_contribution: pair.min_contribution,
        max_contribution: pair.max_contribution,
        lot_size: pair.lot_size,
        lot_price: pair.lot_price,
        sale_start: pair.sale_start,
        sale_end: pair.sale_end,
        sale_cap: pair.sale_cap,
        sold_amount: pair.sold_amount,
        is_active: pair.is_active,
    }
}
