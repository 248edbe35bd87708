use cosmwasm_std::{
    to_json_binary, CosmosMsg, DepsMut, Env, MessageInfo, Response, Uint128, WasmMsg,
};
use cw20::Cw20ExecuteMsg;

use crate::error::ContractError;
use crate::state::{CONFIG, CONTRIBUTIONS, GLOBAL_ASSET_COUNTER, PAIRS};

/// Buyer purchases from a pair. All checks run before any write; the
/// quote-asset pull and the mint are queued as sub-messages of the same
/// transaction, so a failing transfer or mint reverts the counters too.
pub fn execute_buy_asset(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    pair_id: u64,
    quote_amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let mut pair = PAIRS
        .may_load(deps.storage, pair_id)?
        .filter(|pair| pair.is_active)
        .ok_or(ContractError::PairUnavailable { pair_id })?;

    let now = env.block.time.seconds();
    if now < pair.sale_start || now > pair.sale_end {
        return Err(ContractError::OutOfSalePeriod { pair_id });
    }

    // Whole lots only; the remainder below one lot is never pulled from the
    // buyer.
    let lots = quote_amount.checked_div(pair.lot_price)?;
    let asset_amount = lots.checked_mul(pair.lot_size)?;
    let cost = lots.checked_mul(pair.lot_price)?;

    if cost < pair.min_contribution {
        return Err(ContractError::ContributionTooLow {
            min: pair.min_contribution.to_string(),
        });
    }

    let contributed = CONTRIBUTIONS
        .may_load(deps.storage, (pair_id, &info.sender))?
        .unwrap_or_default();
    if contributed.checked_add(cost)? > pair.max_contribution {
        return Err(ContractError::ContributionTooHigh {
            remaining: pair
                .max_contribution
                .saturating_sub(contributed)
                .to_string(),
        });
    }

    if pair.sold_amount.checked_add(asset_amount)? > pair.sale_cap {
        return Err(ContractError::SaleCapExceeded {
            remaining: pair.sale_cap.saturating_sub(pair.sold_amount).to_string(),
        });
    }

    // All checks passed; commit the counters.
    pair.sold_amount += asset_amount;
    PAIRS.save(deps.storage, pair_id, &pair)?;
    CONTRIBUTIONS.save(deps.storage, (pair_id, &info.sender), &(contributed + cost))?;

    let global = GLOBAL_ASSET_COUNTER.load(deps.storage)?;
    GLOBAL_ASSET_COUNTER.save(deps.storage, &global.checked_add(asset_amount)?)?;

    // Pull the lot-aligned cost from the buyer to the fund receiver.
    let collect_msg = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: pair.quote_asset.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
            owner: info.sender.to_string(),
            recipient: config.fund_receiver.to_string(),
            amount: cost,
        })?,
        funds: vec![],
    });

    // Mint the bought asset to the buyer.
    let mint_msg = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.asset.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Mint {
            recipient: info.sender.to_string(),
            amount: asset_amount,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(collect_msg)
        .add_message(mint_msg)
        .add_attribute("action", "buy_asset")
        .add_attribute("buyer", info.sender.to_string())
        .add_attribute("pair_id", pair_id.to_string())
        .add_attribute("asset_amount", asset_amount.to_string())
        .add_attribute("quote_amount", cost.to_string()))
}
