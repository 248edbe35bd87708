pub mod buy_asset;
pub mod create_pair;
pub mod set_fund_receiver;
pub mod set_pair_active;
