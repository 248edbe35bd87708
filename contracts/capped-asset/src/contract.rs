use cosmwasm_std::{
    entry_point, to_json_binary, Addr, Binary, Deps, DepsMut, Empty, Env, MessageInfo, Response,
    StdResult, Storage, Uint128,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::msg::{
    AllowanceResponse, BalanceResponse, ExecuteMsg, HasRoleResponse, InstantiateMsg, QueryMsg,
    TokenInfoResponse,
};
use crate::state::{Role, TokenInfo, ALLOWANCES, BALANCES, ROLES, TOKEN_INFO};

const CONTRACT_NAME: &str = "crates.io:capped-asset";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fixed ledger precision.
const DECIMALS: u8 = 8;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.initial_supply > msg.cap {
        return Err(ContractError::CapExceeded {
            cap: msg.cap.to_string(),
        });
    }

    let token = TokenInfo {
        name: msg.name,
        symbol: msg.symbol,
        decimals: DECIMALS,
        total_supply: msg.initial_supply,
        cap: msg.cap,
    };
    TOKEN_INFO.save(deps.storage, &token)?;

    if !msg.initial_supply.is_zero() {
        BALANCES.save(deps.storage, &info.sender, &msg.initial_supply)?;
    }

    // Deployer starts with both roles; minting rights can be handed on later.
    ROLES.save(deps.storage, (Role::Admin.as_str(), &info.sender), &Empty {})?;
    ROLES.save(deps.storage, (Role::Minter.as_str(), &info.sender), &Empty {})?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("name", token.name)
        .add_attribute("symbol", token.symbol)
        .add_attribute("initial_supply", msg.initial_supply.to_string())
        .add_attribute("cap", token.cap.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Transfer { recipient, amount } => {
            execute_transfer(deps, info, recipient, amount)
        }
        ExecuteMsg::TransferFrom {
            owner,
            recipient,
            amount,
        } => execute_transfer_from(deps, info, owner, recipient, amount),
        ExecuteMsg::IncreaseAllowance { spender, amount } => {
            execute_increase_allowance(deps, info, spender, amount)
        }
        ExecuteMsg::DecreaseAllowance { spender, amount } => {
            execute_decrease_allowance(deps, info, spender, amount)
        }
        ExecuteMsg::Mint { recipient, amount } => execute_mint(deps, info, recipient, amount),
        ExecuteMsg::Burn { amount } => execute_burn(deps, info, amount),
        ExecuteMsg::GrantRole { role, account } => execute_grant_role(deps, info, role, account),
        ExecuteMsg::RevokeRole { role, account } => execute_revoke_role(deps, info, role, account),
        ExecuteMsg::RenounceRole { role, account } => {
            execute_renounce_role(deps, info, role, account)
        }
    }
}

/// Move `amount` between two balances, failing before any write on shortfall.
fn move_balance(
    storage: &mut dyn Storage,
    from: &Addr,
    to: &Addr,
    amount: Uint128,
) -> Result<(), ContractError> {
    let from_balance = BALANCES.may_load(storage, from)?.unwrap_or_default();
    if from_balance < amount {
        return Err(ContractError::InsufficientBalance {
            need: amount.to_string(),
            have: from_balance.to_string(),
        });
    }
    BALANCES.save(storage, from, &(from_balance - amount))?;

    let to_balance = BALANCES.may_load(storage, to)?.unwrap_or_default();
    BALANCES.save(storage, to, &(to_balance + amount))?;
    Ok(())
}

fn execute_transfer(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let recipient = deps.api.addr_validate(&recipient)?;
    move_balance(deps.storage, &info.sender, &recipient, amount)?;

    Ok(Response::new()
        .add_attribute("action", "transfer")
        .add_attribute("from", info.sender.to_string())
        .add_attribute("to", recipient.to_string())
        .add_attribute("amount", amount.to_string()))
}

fn execute_transfer_from(
    deps: DepsMut,
    info: MessageInfo,
    owner: String,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let owner = deps.api.addr_validate(&owner)?;
    let recipient = deps.api.addr_validate(&recipient)?;

    let allowance = ALLOWANCES
        .may_load(deps.storage, (&owner, &info.sender))?
        .unwrap_or_default();
    if allowance < amount {
        return Err(ContractError::InsufficientAllowance {
            need: amount.to_string(),
            have: allowance.to_string(),
        });
    }

    move_balance(deps.storage, &owner, &recipient, amount)?;
    ALLOWANCES.save(deps.storage, (&owner, &info.sender), &(allowance - amount))?;

    Ok(Response::new()
        .add_attribute("action", "transfer_from")
        .add_attribute("owner", owner.to_string())
        .add_attribute("spender", info.sender.to_string())
        .add_attribute("to", recipient.to_string())
        .add_attribute("amount", amount.to_string()))
}

fn execute_increase_allowance(
    deps: DepsMut,
    info: MessageInfo,
    spender: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let spender = deps.api.addr_validate(&spender)?;

    let current = ALLOWANCES
        .may_load(deps.storage, (&info.sender, &spender))?
        .unwrap_or_default();
    let updated = current.checked_add(amount)?;
    ALLOWANCES.save(deps.storage, (&info.sender, &spender), &updated)?;

    Ok(Response::new()
        .add_attribute("action", "increase_allowance")
        .add_attribute("owner", info.sender.to_string())
        .add_attribute("spender", spender.to_string())
        .add_attribute("allowance", updated.to_string()))
}

fn execute_decrease_allowance(
    deps: DepsMut,
    info: MessageInfo,
    spender: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let spender = deps.api.addr_validate(&spender)?;

    let current = ALLOWANCES
        .may_load(deps.storage, (&info.sender, &spender))?
        .unwrap_or_default();
    let updated = current.saturating_sub(amount);
    ALLOWANCES.save(deps.storage, (&info.sender, &spender), &updated)?;

    Ok(Response::new()
        .add_attribute("action", "decrease_allowance")
        .add_attribute("owner", info.sender.to_string())
        .add_attribute("spender", spender.to_string())
        .add_attribute("allowance", updated.to_string()))
}

fn execute_mint(
    deps: DepsMut,
    info: MessageInfo,
    recipient: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    if !ROLES.has(deps.storage, (Role::Minter.as_str(), &info.sender)) {
        return Err(ContractError::Unauthorized);
    }
    let recipient = deps.api.addr_validate(&recipient)?;

    let mut token = TOKEN_INFO.load(deps.storage)?;
    let new_supply = token.total_supply.checked_add(amount)?;
    if new_supply > token.cap {
        return Err(ContractError::CapExceeded {
            cap: token.cap.to_string(),
        });
    }
    token.total_supply = new_supply;
    TOKEN_INFO.save(deps.storage, &token)?;

    let balance = BALANCES
        .may_load(deps.storage, &recipient)?
        .unwrap_or_default();
    BALANCES.save(deps.storage, &recipient, &(balance + amount))?;

    Ok(Response::new()
        .add_attribute("action", "mint")
        .add_attribute("minter", info.sender.to_string())
        .add_attribute("to", recipient.to_string())
        .add_attribute("amount", amount.to_string()))
}

fn execute_burn(
    deps: DepsMut,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let balance = BALANCES
        .may_load(deps.storage, &info.sender)?
        .unwrap_or_default();
    if balance < amount {
        return Err(ContractError::InsufficientBalance {
            need: amount.to_string(),
            have: balance.to_string(),
        });
    }
    BALANCES.save(deps.storage, &info.sender, &(balance - amount))?;

    let mut token = TOKEN_INFO.load(deps.storage)?;
    token.total_supply -= amount;
    TOKEN_INFO.save(deps.storage, &token)?;

    Ok(Response::new()
        .add_attribute("action", "burn")
        .add_attribute("from", info.sender.to_string())
        .add_attribute("amount", amount.to_string()))
}

fn execute_grant_role(
    deps: DepsMut,
    info: MessageInfo,
    role: Role,
    account: String,
) -> Result<Response, ContractError> {
    if !ROLES.has(deps.storage, (Role::Admin.as_str(), &info.sender)) {
        return Err(ContractError::Unauthorized);
    }
    let account = deps.api.addr_validate(&account)?;
    ROLES.save(deps.storage, (role.as_str(), &account), &Empty {})?;

    Ok(Response::new()
        .add_attribute("action", "grant_role")
        .add_attribute("role", role.as_str())
        .add_attribute("account", account.to_string()))
}

fn execute_revoke_role(
    deps: DepsMut,
    info: MessageInfo,
    role: Role,
    account: String,
) -> Result<Response, ContractError> {
    if !ROLES.has(deps.storage, (Role::Admin.as_str(), &info.sender)) {
        return Err(ContractError::Unauthorized);
    }
    let account = deps.api.addr_validate(&account)?;
    ROLES.remove(deps.storage, (role.as_str(), &account));

    Ok(Response::new()
        .add_attribute("action", "revoke_role")
        .add_attribute("role", role.as_str())
        .add_attribute("account", account.to_string()))
}

fn execute_renounce_role(
    deps: DepsMut,
    info: MessageInfo,
    role: Role,
    account: String,
) -> Result<Response, ContractError> {
    let account = deps.api.addr_validate(&account)?;
    if account != info.sender {
        return Err(ContractError::Unauthorized);
    }
    ROLES.remove(deps.storage, (role.as_str(), &account));

    Ok(Response::new()
        .add_attribute("action", "renounce_role")
        .add_attribute("role", role.as_str())
        .add_attribute("account", account.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::TokenInfo {} => to_json_binary(&query_token_info(deps)?),
        QueryMsg::Balance { address } => to_json_binary(&query_balance(deps, address)?),
        QueryMsg::Allowance { owner, spender } => {
            to_json_binary(&query_allowance(deps, owner, spender)?)
        }
        QueryMsg::HasRole { role, account } => to_json_binary(&query_has_role(deps, role, account)?),
    }
}

fn query_token_info(deps: Deps) -> StdResult<TokenInfoResponse> {
    let token = TOKEN_INFO.load(deps.storage)?;
    Ok(TokenInfoResponse {
        name: token.name,
        symbol: token.symbol,
        decimals: token.decimals,
        total_supply: token.total_supply,
        cap: token.cap,
    })
}

fn query_balance(deps: Deps, address: String) -> StdResult<BalanceResponse> {
    let addr = deps.api.addr_validate(&address)?;
    let balance = BALANCES.may_load(deps.storage, &addr)?.unwrap_or_default();
    Ok(BalanceResponse { balance })
}

fn query_allowance(deps: Deps, owner: String, spender: String) -> StdResult<AllowanceResponse> {
    let owner = deps.api.addr_validate(&owner)?;
    let spender = deps.api.addr_validate(&spender)?;
    let allowance = ALLOWANCES
        .may_load(deps.storage, (&owner, &spender))?
        .unwrap_or_default();
    Ok(AllowanceResponse { allowance })
}

fn query_has_role(deps: Deps, role: Role, account: String) -> StdResult<HasRoleResponse> {
    let addr = deps.api.addr_validate(&account)?;
    Ok(HasRoleResponse {
        has_role: ROLES.has(deps.storage, (role.as_str(), &addr)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::{
        mock_dependencies, mock_env, mock_info, MockApi, MockQuerier, MockStorage,
    };
    use cosmwasm_std::{from_json, Addr, OwnedDeps};

    const DEPLOYER: &str = "deployer";
    const ACCOUNT1: &str = "account1";
    const ACCOUNT2: &str = "account2";

    fn setup_contract(deps: DepsMut) {
        let msg = InstantiateMsg {
            name: "Dummy Token".to_string(),
            symbol: "DMY".to_string(),
            initial_supply: Uint128::new(5_000),
            cap: Uint128::new(25_000),
        };
        let info = mock_info(DEPLOYER, &[]);
        instantiate(deps, mock_env(), info, msg).unwrap();
    }

    fn balance_of(deps: &OwnedDeps<MockStorage, MockApi, MockQuerier>, address: &str) -> Uint128 {
        let res = query(
            deps.as_ref(),
            mock_env(),
            QueryMsg::Balance {
                address: address.to_string(),
            },
        )
        .unwrap();
        let balance: BalanceResponse = from_json(res).unwrap();
        balance.balance
    }

    fn has_role(deps: &OwnedDeps<MockStorage, MockApi, MockQuerier>, role: Role, account: &str) -> bool {
        let res = query(
            deps.as_ref(),
            mock_env(),
            QueryMsg::HasRole {
                role,
                account: account.to_string(),
            },
        )
        .unwrap();
        let has: HasRoleResponse = from_json(res).unwrap();
        has.has_role
    }

    #[test]
    fn proper_instantiation() {
        let mut deps = mock_dependencies();
        setup_contract(deps.as_mut());

        let token = TOKEN_INFO.load(deps.as_ref().storage).unwrap();
        assert_eq!(token.name, "Dummy Token");
        assert_eq!(token.symbol, "DMY");
        assert_eq!(token.decimals, 8);
        assert_eq!(token.total_supply, Uint128::new(5_000));
        assert_eq!(token.cap, Uint128::new(25_000));

        assert_eq!(balance_of(&deps, DEPLOYER), Uint128::new(5_000));
        assert!(has_role(&deps, Role::Admin, DEPLOYER));
        assert!(has_role(&deps, Role::Minter, DEPLOYER));
        assert!(!has_role(&deps, Role::Minter, ACCOUNT1));
    }

    #[test]
    fn instantiate_rejects_supply_over_cap() {
        let mut deps = mock_dependencies();
        let msg = InstantiateMsg {
            name: "Dummy Token".to_string(),
            symbol: "DMY".to_string(),
            initial_supply: Uint128::new(30_000),
            cap: Uint128::new(25_000),
        };
        let info = mock_info(DEPLOYER, &[]);
        let err = instantiate(deps.as_mut(), mock_env(), info, msg).unwrap_err();
        assert!(matches!(err, ContractError::CapExceeded { .. }));
    }

    #[test]
    fn transfer_updates_balances() {
        let mut deps = mock_dependencies();
        setup_contract(deps.as_mut());

        let info = mock_info(DEPLOYER, &[]);
        execute(
            deps.as_mut(),
            mock_env(),
            info,
            ExecuteMsg::Transfer {
                recipient: ACCOUNT1.to_string(),
                amount: Uint128::new(300),
            },
        )
        .unwrap();

        assert_eq!(balance_of(&deps, DEPLOYER), Uint128::new(4_700));
        assert_eq!(balance_of(&deps, ACCOUNT1), Uint128::new(300));
    }

    #[test]
    fn transfer_insufficient_balance() {
        let mut deps = mock_dependencies();
        setup_contract(deps.as_mut());

        let info = mock_info(ACCOUNT1, &[]);
        let err = execute(
            deps.as_mut(),
            mock_env(),
            info,
            ExecuteMsg::Transfer {
                recipient: ACCOUNT2.to_string(),
                amount: Uint128::new(1),
            },
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::InsufficientBalance { .. }));
    }

    #[test]
    fn burn_then_mint_restores_balance() {
        let mut deps = mock_dependencies();
        setup_contract(deps.as_mut());

        let info = mock_info(DEPLOYER, &[]);
        execute(
            deps.as_mut(),
            mock_env(),
            info.clone(),
            ExecuteMsg::Burn {
                amount: Uint128::new(500),
            },
        )
        .unwrap();
        assert_eq!(balance_of(&deps, DEPLOYER), Uint128::new(4_500));
        let token = TOKEN_INFO.load(deps.as_ref().storage).unwrap();
        assert_eq!(token.total_supply, Uint128::new(4_500));

        execute(
            deps.as_mut(),
            mock_env(),
            info,
            ExecuteMsg::Mint {
                recipient: DEPLOYER.to_string(),
                amount: Uint128::new(500),
            },
        )
        .unwrap();
        assert_eq!(balance_of(&deps, DEPLOYER), Uint128::new(5_000));
        let token = TOKEN_INFO.load(deps.as_ref().storage).unwrap();
        assert_eq!(token.total_supply, Uint128::new(5_000));
    }

    #[test]
    fn burn_insufficient_balance() {
        let mut deps = mock_dependencies();
        setup_contract(deps.as_mut());

        let info = mock_info(ACCOUNT1, &[]);
        let err = execute(
            deps.as_mut(),
            mock_env(),
            info,
            ExecuteMsg::Burn {
                amount: Uint128::new(100),
            },
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::InsufficientBalance { .. }));
    }

    #[test]
    fn mint_requires_minter_role() {
        let mut deps = mock_dependencies();
        setup_contract(deps.as_mut());

        let info = mock_info(ACCOUNT1, &[]);
        let err = execute(
            deps.as_mut(),
            mock_env(),
            info,
            ExecuteMsg::Mint {
                recipient: ACCOUNT1.to_string(),
                amount: Uint128::new(100),
            },
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::Unauthorized));
    }

    #[test]
    fn mint_up_to_cap_then_fails() {
        let mut deps = mock_dependencies();
        setup_contract(deps.as_mut());

        // 20_000 remaining under the 25_000 cap
        let info = mock_info(DEPLOYER, &[]);
        execute(
            deps.as_mut(),
            mock_env(),
            info.clone(),
            ExecuteMsg::Mint {
                recipient: DEPLOYER.to_string(),
                amount: Uint128::new(20_000),
            },
        )
        .unwrap();

        let token = TOKEN_INFO.load(deps.as_ref().storage).unwrap();
        assert_eq!(token.total_supply, token.cap);

        let err = execute(
            deps.as_mut(),
            mock_env(),
            info,
            ExecuteMsg::Mint {
                recipient: DEPLOYER.to_string(),
                amount: Uint128::new(100),
            },
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::CapExceeded { .. }));
    }

    #[test]
    fn grant_then_revoke_minter_role() {
        let mut deps = mock_dependencies();
        setup_contract(deps.as_mut());

        let admin = mock_info(DEPLOYER, &[]);
        execute(
            deps.as_mut(),
            mock_env(),
            admin.clone(),
            ExecuteMsg::GrantRole {
                role: Role::Minter,
                account: ACCOUNT1.to_string(),
            },
        )
        .unwrap();
        assert!(has_role(&deps, Role::Minter, ACCOUNT1));

        // Granted account can mint
        let info = mock_info(ACCOUNT1, &[]);
        execute(
            deps.as_mut(),
            mock_env(),
            info.clone(),
            ExecuteMsg::Mint {
                recipient: ACCOUNT1.to_string(),
                amount: Uint128::new(100),
            },
        )
        .unwrap();

        execute(
            deps.as_mut(),
            mock_env(),
            admin,
            ExecuteMsg::RevokeRole {
                role: Role::Minter,
                account: ACCOUNT1.to_string(),
            },
        )
        .unwrap();
        assert!(!has_role(&deps, Role::Minter, ACCOUNT1));

        // Revoked account cannot mint anymore
        let err = execute(
            deps.as_mut(),
            mock_env(),
            info,
            ExecuteMsg::Mint {
                recipient: ACCOUNT1.to_string(),
                amount: Uint128::new(100),
            },
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::Unauthorized));
    }

    #[test]
    fn grant_role_requires_admin() {
        let mut deps = mock_dependencies();
        setup_contract(deps.as_mut());

        let info = mock_info(ACCOUNT1, &[]);
        let err = execute(
            deps.as_mut(),
            mock_env(),
            info,
            ExecuteMsg::GrantRole {
                role: Role::Minter,
                account: ACCOUNT1.to_string(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::Unauthorized));
    }

    #[test]
    fn renounce_role_is_self_only() {
        let mut deps = mock_dependencies();
        setup_contract(deps.as_mut());

        let admin = mock_info(DEPLOYER, &[]);
        execute(
            deps.as_mut(),
            mock_env(),
            admin,
            ExecuteMsg::GrantRole {
                role: Role::Minter,
                account: ACCOUNT1.to_string(),
            },
        )
        .unwrap();

        // Renouncing someone else's role is rejected
        let info = mock_info(ACCOUNT1, &[]);
        let err = execute(
            deps.as_mut(),
            mock_env(),
            info.clone(),
            ExecuteMsg::RenounceRole {
                role: Role::Minter,
                account: DEPLOYER.to_string(),
            },
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::Unauthorized));
        assert!(has_role(&deps, Role::Minter, DEPLOYER));

        // Renouncing one's own role works
        execute(
            deps.as_mut(),
            mock_env(),
            info,
            ExecuteMsg::RenounceRole {
                role: Role::Minter,
                account: ACCOUNT1.to_string(),
            },
        )
        .unwrap();
        assert!(!has_role(&deps, Role::Minter, ACCOUNT1));
    }

    #[test]
    fn transfer_from_spends_allowance() {
        let mut deps = mock_dependencies();
        setup_contract(deps.as_mut());

        let owner = mock_info(DEPLOYER, &[]);
        execute(
            deps.as_mut(),
            mock_env(),
            owner,
            ExecuteMsg::IncreaseAllowance {
                spender: ACCOUNT1.to_string(),
                amount: Uint128::new(300),
            },
        )
        .unwrap();

        let spender = mock_info(ACCOUNT1, &[]);
        execute(
            deps.as_mut(),
            mock_env(),
            spender.clone(),
            ExecuteMsg::TransferFrom {
                owner: DEPLOYER.to_string(),
                recipient: ACCOUNT2.to_string(),
                amount: Uint128::new(200),
            },
        )
        .unwrap();

        assert_eq!(balance_of(&deps, DEPLOYER), Uint128::new(4_800));
        assert_eq!(balance_of(&deps, ACCOUNT2), Uint128::new(200));

        let res = query(
            deps.as_ref(),
            mock_env(),
            QueryMsg::Allowance {
                owner: DEPLOYER.to_string(),
                spender: ACCOUNT1.to_string(),
            },
        )
        .unwrap();
        let allowance: AllowanceResponse = from_json(res).unwrap();
        assert_eq!(allowance.allowance, Uint128::new(100));

        // Remaining allowance does not cover another 200
        let err = execute(
            deps.as_mut(),
            mock_env(),
            spender,
            ExecuteMsg::TransferFrom {
                owner: DEPLOYER.to_string(),
                recipient: ACCOUNT2.to_string(),
                amount: Uint128::new(200),
            },
        )
        .unwrap_err();
        assert!(matches!(err, ContractError::InsufficientAllowance { .. }));
    }

    #[test]
    fn decrease_allowance_floors_at_zero() {
        let mut deps = mock_dependencies();
        setup_contract(deps.as_mut());

        let owner = mock_info(DEPLOYER, &[]);
        execute(
            deps.as_mut(),
            mock_env(),
            owner.clone(),
            ExecuteMsg::IncreaseAllowance {
                spender: ACCOUNT1.to_string(),
                amount: Uint128::new(100),
            },
        )
        .unwrap();
        execute(
            deps.as_mut(),
            mock_env(),
            owner,
            ExecuteMsg::DecreaseAllowance {
                spender: ACCOUNT1.to_string(),
                amount: Uint128::new(250),
            },
        )
        .unwrap();

        let allowance = ALLOWANCES
            .load(
                deps.as_ref().storage,
                (&Addr::unchecked(DEPLOYER), &Addr::unchecked(ACCOUNT1)),
            )
            .unwrap();
        assert_eq!(allowance, Uint128::zero());
    }
}
