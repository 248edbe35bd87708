#[cfg(test)]
pub mod helpers {
    use cosmwasm_std::testing::{
        mock_dependencies, mock_env, mock_info, MockApi, MockQuerier, MockStorage,
    };
    use cosmwasm_std::{from_json, Env, OwnedDeps, Response, Timestamp, Uint128};

    use crate::contract::{execute, instantiate, query};
    use crate::msg::*;

    pub const ADMIN: &str = "admin";
    pub const ASSET: &str = "sale_asset";
    pub const QUOTE: &str = "quote_token";
    pub const FUND_RECEIVER: &str = "fund_receiver";
    pub const BUYER: &str = "buyer";
    pub const BUYER2: &str = "buyer2";
    pub const RANDOM_USER: &str = "random_user";

    /// Fixed block time the default sale windows are built around.
    pub const NOW: u64 = 1_700_000_000;

    pub fn setup_contract() -> (OwnedDeps<MockStorage, MockApi, MockQuerier>, Env) {
        let mut deps = mock_dependencies();
        let env = env_at_time(NOW);
        let info = mock_info(ADMIN, &[]);

        let msg = InstantiateMsg {
            asset: ASSET.to_string(),
            fund_receiver: FUND_RECEIVER.to_string(),
        };
        instantiate(deps.as_mut(), env.clone(), info, msg).unwrap();

        (deps, env)
    }

    /// Create a pair priced at 5 quote units per lot of 1 asset unit, with
    /// contributions bounded to [10, 5000].
    pub fn create_pair(
        deps: &mut OwnedDeps<MockStorage, MockApi, MockQuerier>,
        env: &Env,
        sender: &str,
        sale_start: u64,
        sale_end: u64,
        sale_cap: u128,
        is_active: bool,
    ) -> Result<Response, crate::error::ContractError> {
        let info = mock_info(sender, &[]);
        execute(
            deps.as_mut(),
            env.clone(),
            info,
            ExecuteMsg::CreatePair {
                quote_asset: QUOTE.to_string(),
                min_contribution: Uint128::new(10),
                max_contribution: Uint128::new(5000),
                lot_size: Uint128::new(1),
                lot_price: Uint128::new(5),
                sale_start,
                sale_end,
                sale_cap: Uint128::new(sale_cap),
                is_active,
            },
        )
    }

    /// Create a pair with an open window around NOW.
    pub fn create_open_pair(
        deps: &mut OwnedDeps<MockStorage, MockApi, MockQuerier>,
        env: &Env,
        sale_cap: u128,
        is_active: bool,
    ) -> Result<Response, crate::error::ContractError> {
        create_pair(deps, env, ADMIN, NOW - 200, NOW + 200, sale_cap, is_active)
    }

    pub fn buy(
        deps: &mut OwnedDeps<MockStorage, MockApi, MockQuerier>,
        env: &Env,
        buyer: &str,
        pair_id: u64,
        quote_amount: u128,
    ) -> Result<Response, crate::error::ContractError> {
        let info = mock_info(buyer, &[]);
        execute(
            deps.as_mut(),
            env.clone(),
            info,
            ExecuteMsg::BuyAsset {
                pair_id,
                quote_amount: Uint128::new(quote_amount),
            },
        )
    }

    pub fn query_config(
        deps: &OwnedDeps<MockStorage, MockApi, MockQuerier>,
        env: &Env,
    ) -> ConfigResponse {
        let res = query(deps.as_ref(), env.clone(), QueryMsg::Config {}).unwrap();
        from_json(&res).unwrap()
    }

    pub fn query_pair(
        deps: &OwnedDeps<MockStorage, MockApi, MockQuerier>,
        env: &Env,
        pair_id: u64,
    ) -> PairResponse {
        let res = query(deps.as_ref(), env.clone(), QueryMsg::Pair { pair_id }).unwrap();
        from_json(&res).unwrap()
    }

    pub fn query_contribution(
        deps: &OwnedDeps<MockStorage, MockApi, MockQuerier>,
        env: &Env,
        pair_id: u64,
        address: &str,
    ) -> Uint128 {
        let res = query(
            deps.as_ref(),
            env.clone(),
            QueryMsg::Contribution {
                pair_id,
                address: address.to_string(),
            },
        )
        .unwrap();
        let contribution: ContributionResponse = from_json(&res).unwrap();
        contribution.amount
    }

    pub fn query_remaining_contribution(
        deps: &OwnedDeps<MockStorage, MockApi, MockQuerier>,
        env: &Env,
        pair_id: u64,
        address: &str,
    ) -> Uint128 {
        let res = query(
            deps.as_ref(),
            env.clone(),
            QueryMsg::AccountMaxContribution {
                pair_id,
                address: address.to_string(),
            },
        )
        .unwrap();
        let contribution: ContributionResponse = from_json(&res).unwrap();
        contribution.amount
    }

    /// Create an env with a specific block time
    pub fn env_at_time(secs: u64) -> Env {
        let mut env = mock_env();
        env.block.time = Timestamp::from_seconds(secs);
        env
    }
}
