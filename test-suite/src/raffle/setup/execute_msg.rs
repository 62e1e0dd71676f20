use anyhow::Error;
use cosmwasm_std::{coins, Addr, HexBinary};
use cw_multi_test::{App, AppResponse, Executor};
use raffle::msg::ExecuteMsg;
use utils::state::NATIVE_DENOM;

use crate::common_setup::{
    constants::{ENTRANCE_FEE, KEEPER_ADDR},
    msg::RaffleContracts,
    nois_proxy,
};

pub fn enter_raffle(
    app: &mut App,
    contracts: &RaffleContracts,
    player: &Addr,
    amount: u128,
) -> Result<AppResponse, Error> {
    app.execute_contract(
        player.clone(),
        contracts.raffle.clone(),
        &ExecuteMsg::Enter {},
        &coins(amount, NATIVE_DENOM),
    )
}

/// Every player enters once, paying exactly the entrance fee
pub fn enter_players(app: &mut App, contracts: &RaffleContracts, players: &[&Addr]) {
    for player in players {
        enter_raffle(app, contracts, player, ENTRANCE_FEE).unwrap();
    }
}

pub fn request_draw(app: &mut App, contracts: &RaffleContracts) -> Result<AppResponse, Error> {
    app.execute_contract(
        Addr::unchecked(KEEPER_ADDR),
        contracts.raffle.clone(),
        &ExecuteMsg::RequestDraw {},
        &[],
    )
}

/// Lets the nois mock publish `randomness` for `job_id`, which calls the raffle back
pub fn deliver_randomness(
    app: &mut App,
    contracts: &RaffleContracts,
    job_id: &str,
    randomness: HexBinary,
) -> Result<AppResponse, Error> {
    app.execute_contract(
        Addr::unchecked(KEEPER_ADDR),
        contracts.nois.clone(),
        &nois_proxy::ExecuteMsg::Deliver {
            consumer: contracts.raffle.to_string(),
            job_id: job_id.to_string(),
            randomness,
        },
        &[],
    )
}
