use cosmwasm_std::{Addr, HexBinary, Uint128};
use cw_multi_test::{App, AppResponse};
use raffle::{
    msg::{ConfigResponse, QueryMsg, UpkeepResponse},
    state::{PendingDraw, RaffleState, RoundInfo},
};
use utils::state::NATIVE_DENOM;

use crate::common_setup::{msg::RaffleContracts, nois_proxy, setup_accounts_and_block::mint};

/// A 32 bytes big-endian word holding `value`
pub fn randomness_from(value: u64) -> HexBinary {
    let mut bytes = [0u8; 32];
    bytes[24..].copy_from_slice(&value.to_be_bytes());
    HexBinary::from(bytes.to_vec())
}

pub fn raffle_config(app: &App, contracts: &RaffleContracts) -> ConfigResponse {
    app.wrap()
        .query_wasm_smart(contracts.raffle.clone(), &QueryMsg::Config {})
        .unwrap()
}

pub fn raffle_state(app: &App, contracts: &RaffleContracts) -> RaffleState {
    app.wrap()
        .query_wasm_smart(contracts.raffle.clone(), &QueryMsg::RaffleState {})
        .unwrap()
}

pub fn round_info(app: &App, contracts: &RaffleContracts) -> RoundInfo {
    app.wrap()
        .query_wasm_smart(contracts.raffle.clone(), &QueryMsg::Round {})
        .unwrap()
}

pub fn check_upkeep(app: &App, contracts: &RaffleContracts) -> UpkeepResponse {
    app.wrap()
        .query_wasm_smart(contracts.raffle.clone(), &QueryMsg::CheckUpkeep {})
        .unwrap()
}

pub fn pending_draw(app: &App, contracts: &RaffleContracts) -> Option<PendingDraw> {
    app.wrap()
        .query_wasm_smart(contracts.raffle.clone(), &QueryMsg::PendingDraw {})
        .unwrap()
}

pub fn players(app: &App, contracts: &RaffleContracts) -> Vec<String> {
    app.wrap()
        .query_wasm_smart(
            contracts.raffle.clone(),
            &QueryMsg::Players {
                start_after: None,
                limit: None,
            },
        )
        .unwrap()
}

pub fn number_of_players(app: &App, contracts: &RaffleContracts) -> u32 {
    app.wrap()
        .query_wasm_smart(contracts.raffle.clone(), &QueryMsg::NumberOfPlayers {})
        .unwrap()
}

pub fn recent_winner(app: &App, contracts: &RaffleContracts) -> Option<Addr> {
    app.wrap()
        .query_wasm_smart(contracts.raffle.clone(), &QueryMsg::RecentWinner {})
        .unwrap()
}

pub fn owed_payout(app: &App, contracts: &RaffleContracts, address: &Addr) -> Uint128 {
    app.wrap()
        .query_wasm_smart(
            contracts.raffle.clone(),
            &QueryMsg::OwedPayout {
                address: address.to_string(),
            },
        )
        .unwrap()
}

/// Job ids the nois mock still has to answer for the raffle
pub fn nois_jobs(app: &App, contracts: &RaffleContracts) -> Vec<String> {
    app.wrap()
        .query_wasm_smart(
            contracts.nois.clone(),
            &nois_proxy::QueryMsg::Jobs {
                consumer: contracts.raffle.to_string(),
            },
        )
        .unwrap()
}

pub fn balance_of(app: &App, address: &Addr) -> u128 {
    app.wrap()
        .query_balance(address, NATIVE_DENOM)
        .unwrap()
        .amount
        .u128()
}

/// Sends the raffle `amount` on top of its pool, for the randomness fee
pub fn fund_oracle_fee(app: &mut App, contracts: &RaffleContracts, amount: u128) {
    mint(app, &contracts.raffle, amount);
}

/// The job id stored in the response data of a draw request
pub fn requested_job_id(res: &AppResponse) -> String {
    cosmwasm_std::from_json(res.data.clone().unwrap()).unwrap()
}

/// Value of the first `key` attribute on the contract events of type `ty`
pub fn event_attribute(res: &AppResponse, ty: &str, key: &str) -> Option<String> {
    res.events
        .iter()
        .filter(|e| e.ty == format!("wasm-{ty}"))
        .flat_map(|e| e.attributes.iter())
        .find(|a| a.key == key)
        .map(|a| a.value.clone())
}
