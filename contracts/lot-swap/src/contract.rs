use cosmwasm_std::{
    entry_point, to_json_binary, Binary, CosmosMsg, Deps, DepsMut, Env, MessageInfo, Response,
    StdResult, Uint128, WasmMsg,
};
use cw2::set_contract_version;
use cw20::Cw20ExecuteMsg;

use crate::error::ContractError;
use crate::msg::{
    CalculateInOutResponse, ConfigResponse, ExecuteMsg, InstantiateMsg, QueryMsg,
    StatsResponse, SwapLimitResponse,
};
use crate::state::{Config, SwapStats, ACCOUNT_STATS, CONFIG, STATS, SWAP_LIMITS};

const CONTRACT_NAME: &str = "crates.io:lot-swap";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.token_in_lot_size.is_zero() || msg.token_out_lot_size.is_zero() {
        return Err(ContractError::InvalidLotSize);
    }

    let config = Config {
        admin: info.sender,
        token_in: deps.api.addr_validate(&msg.token_in)?,
        token_out: deps.api.addr_validate(&msg.token_out)?,
        token_in_lot_size: msg.token_in_lot_size,
        token_out_lot_size: msg.token_out_lot_size,
    };

    CONFIG.save(deps.storage, &config)?;
    STATS.save(deps.storage, &SwapStats::default())?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", config.admin.to_string())
        .add_attribute("token_in", config.token_in.to_string())
        .add_attribute("token_out", config.token_out.to_string())
        .add_attribute(
            "lot_sizes",
            format!(
                "{}/{}",
                config.token_in_lot_size, config.token_out_lot_size
            ),
        ))
}

/// Round `amount` down to whole token-in lots and derive both settlement
/// legs. Pure: the remainder below one lot is neither charged nor credited.
pub fn calculate_in_out(config: &Config, amount: Uint128) -> StdResult<(Uint128, Uint128)> {
    let lots = amount.checked_div(config.token_in_lot_size)?;
    let amount_in = lots.checked_mul(config.token_in_lot_size)?;
    let amount_out = lots.checked_mul(config.token_out_lot_size)?;
    Ok((amount_in, amount_out))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Swap { amount } => execute_swap(deps, env, info, amount),
        ExecuteMsg::SetAccountSwapLimit { account, limit } => {
            execute_set_account_swap_limit(deps, info, account, limit)
        }
        ExecuteMsg::Withdraw { asset, amount } => execute_withdraw(deps, info, asset, amount),
    }
}

fn execute_swap(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    let (amount_in, amount_out) = calculate_in_out(&config, amount)?;
    if amount_in.is_zero() {
        return Err(ContractError::SwapAmountTooSmall {
            lot_size: config.token_in_lot_size.to_string(),
        });
    }

    let limit = SWAP_LIMITS
        .may_load(deps.storage, &info.sender)?
        .unwrap_or_default();
    if amount_in > limit {
        return Err(ContractError::SwapLimitExceeded {
            limit: limit.to_string(),
            requested: amount_in.to_string(),
        });
    }

    // The vault must cover the outgoing leg — query this contract's
    // token-out balance.
    let vault_balance: cw20::BalanceResponse = deps.querier.query_wasm_smart(
        config.token_out.to_string(),
        &cw20::Cw20QueryMsg::Balance {
            address: env.contract.address.to_string(),
        },
    )?;
    if vault_balance.balance < amount_out {
        return Err(ContractError::InsufficientVaultBalance {
            available: vault_balance.balance.to_string(),
            requested: amount_out.to_string(),
        });
    }

    // All checks passed; commit limit and statistics.
    SWAP_LIMITS.save(deps.storage, &info.sender, &(limit - amount_in))?;

    let mut account_stats = ACCOUNT_STATS
        .may_load(deps.storage, &info.sender)?
        .unwrap_or_default();
    account_stats.token_in += amount_in;
    account_stats.token_out += amount_out;
    account_stats.swap_counter += 1;
    ACCOUNT_STATS.save(deps.storage, &info.sender, &account_stats)?;

    let mut stats = STATS.load(deps.storage)?;
    stats.token_in += amount_in;
    stats.token_out += amount_out;
    stats.swap_counter += 1;
    STATS.save(deps.storage, &stats)?;

    // Pull the lot-aligned input into the vault.
    let collect_msg = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.token_in.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::TransferFrom {
            owner: info.sender.to_string(),
            recipient: env.contract.address.to_string(),
            amount: amount_in,
        })?,
        funds: vec![],
    });

    // Pay the caller from the vault.
    let payout_msg = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: config.token_out.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: info.sender.to_string(),
            amount: amount_out,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(collect_msg)
        .add_message(payout_msg)
        .add_attribute("action", "swap")
        .add_attribute("account", info.sender.to_string())
        .add_attribute("amount_in", amount_in.to_string())
        .add_attribute("amount_out", amount_out.to_string()))
}

/// Admin: set the absolute remaining limit (not additive).
fn execute_set_account_swap_limit(
    deps: DepsMut,
    info: MessageInfo,
    account: String,
    limit: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    let account = deps.api.addr_validate(&account)?;
    SWAP_LIMITS.save(deps.storage, &account, &limit)?;

    Ok(Response::new()
        .add_attribute("action", "set_account_swap_limit")
        .add_attribute("account", account.to_string())
        .add_attribute("limit", limit.to_string()))
}

/// Admin: move vault-held tokens back out. The token contract itself
/// enforces the vault balance.
fn execute_withdraw(
    deps: DepsMut,
    info: MessageInfo,
    asset: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.admin {
        return Err(ContractError::Unauthorized);
    }

    let asset = deps.api.addr_validate(&asset)?;
    let transfer_msg = CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: asset.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: info.sender.to_string(),
            amount,
        })?,
        funds: vec![],
    });

    Ok(Response::new()
        .add_message(transfer_msg)
        .add_attribute("action", "withdraw")
        .add_attribute("asset", asset.to_string())
        .add_attribute("amount", amount.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::CalculateInOut { amount } => {
            to_json_binary(&query_calculate_in_out(deps, amount)?)
        }
        QueryMsg::SwapLimit { address } => to_json_binary(&query_swap_limit(deps, address)?),
        QueryMsg::AccountStats { address } => to_json_binary(&query_account_stats(deps, address)?),
        QueryMsg::Stats {} => to_json_binary(&query_stats(deps)?),
    }
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        admin: config.admin,
        token_in: config.token_in,
        token_out: config.token_out,
        token_in_lot_size: config.token_in_lot_size,
        token_out_lot_size: config.token_out_lot_size,
    })
}

fn query_calculate_in_out(deps: Deps, amount: Uint128) -> StdResult<CalculateInOutResponse> {
    let config = CONFIG.load(deps.storage)?;
    let (amount_in, amount_out) = calculate_in_out(&config, amount)?;
    Ok(CalculateInOutResponse {
        amount_in,
        amount_out,
    })
}

fn query_swap_limit(deps: Deps, address: String) -> StdResult<SwapLimitResponse> {
    let addr = deps.api.addr_validate(&address)?;
    let limit = SWAP_LIMITS
        .may_load(deps.storage, &addr)?
        .unwrap_or_default();
    Ok(SwapLimitResponse { limit })
}

fn query_account_stats(deps: Deps, address: String) -> StdResult<StatsResponse> {
    let addr = deps.api.addr_validate(&address)?;
    let stats = ACCOUNT_STATS
        .may_load(deps.storage, &addr)?
        .unwrap_or_default();
    Ok(stats_to_response(stats))
}

fn query_stats(deps: Deps) -> StdResult<StatsResponse> {
    let stats = STATS.load(deps.storage)?;
    Ok(stats_to_response(stats))
}

fn stats_to_response(stats: SwapStats) -> StatsResponse {
    StatsResponse {
        token_in: stats.token_in,
        token_out: stats.token_out,
        swap_counter: stats.swap_counter,
    }
}
