use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::msg::{ExecuteMsg, InstantiateMsg, QueryMsg};
use crate::state::{Config, CONFIG, GLOBAL_ASSET_COUNTER, PAIR_COUNTER};

const CONTRACT_NAME: &str = "crates.io:presale";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        admin: info.sender,
        asset: deps.api.addr_validate(&msg.asset)?,
        fund_receiver: deps.api.addr_validate(&msg.fund_receiver)?,
    };

    CONFIG.save(deps.storage, &config)?;
    PAIR_COUNTER.save(deps.storage, &0u64)?;
    GLOBAL_ASSET_COUNTER.save(deps.storage, &Uint128::zero())?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", config.admin.to_string())
        .add_attribute("asset", config.asset.to_string())
        .add_attribute("fund_receiver", config.fund_receiver.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::CreatePair {
            quote_asset,
            min_contribution,
            max_contribution,
            lot_size,
            lot_price,
            sale_start,
            sale_end,
            sale_cap,
            is_active,
        } => crate::execute::create_pair::execute_create_pair(
            deps,
            info,
            quote_asset,
            min_contribution,
            max_contribution,
            lot_size,
            lot_price,
            sale_start,
            sale_end,
            sale_cap,
            is_active,
        ),
        ExecuteMsg::BuyAsset {
            pair_id,
            quote_amount,
        } => crate::execute::buy_asset::execute_buy_asset(deps, env, info, pair_id, quote_amount),
        ExecuteMsg::SetPairActive { pair_id, is_active } => {
            crate::execute::set_pair_active::execute_set_pair_active(deps, info, pair_id, is_active)
        }
        ExecuteMsg::SetFundReceiver { address } => {
            crate::execute::set_fund_receiver::execute_set_fund_receiver(deps, info, address)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&crate::query::query_config(deps)?),
        QueryMsg::Pair { pair_id } => to_json_binary(&crate::query::query_pair(deps, pair_id)?),
        QueryMsg::Pairs { start_after, limit } => {
            to_json_binary(&crate::query::query_pairs(deps, start_after, limit)?)
        }
        QueryMsg::Contribution { pair_id, address } => {
            to_json_binary(&crate::query::query_contribution(deps, pair_id, address)?)
        }
        QueryMsg::AccountMaxContribution { pair_id, address } => to_json_binary(
            &crate::query::query_account_max_contribution(deps, pair_id, address)?,
        ),
    }
}
