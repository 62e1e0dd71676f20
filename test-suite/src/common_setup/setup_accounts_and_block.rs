use cosmwasm_std::{coin, Addr};
use cw_multi_test::{App, BankSudo, SudoMsg};
use utils::state::NATIVE_DENOM;

use super::{
    constants::{GENESIS_TIME, KEEPER_ADDR, OWNER_ADDR},
    helpers::setup_block_time,
    msg::RaffleParticipants,
};

pub const INITIAL_BALANCE: u128 = 100_000_000_000;

pub fn mint(router: &mut App, to_address: &Addr, amount: u128) {
    router
        .sudo(SudoMsg::Bank({
            BankSudo::Mint {
                to_address: to_address.to_string(),
                amount: vec![coin(amount, NATIVE_DENOM.to_string())],
            }
        }))
        .unwrap();
}

pub fn setup_accounts(router: &mut App) -> (Addr, Addr) {
    // define accounts
    let owner = Addr::unchecked(OWNER_ADDR);
    let keeper = Addr::unchecked(KEEPER_ADDR);
    // fund accounts
    mint(router, &owner, INITIAL_BALANCE);
    mint(router, &keeper, INITIAL_BALANCE);

    (owner, keeper)
}

pub fn setup_raffle_participants(router: &mut App) -> RaffleParticipants {
    let participants = RaffleParticipants {
        one: Addr::unchecked("player_one"),
        two: Addr::unchecked("player_two"),
        three: Addr::unchecked("player_three"),
        four: Addr::unchecked("player_four"),
        five: Addr::unchecked("player_five"),
        six: Addr::unchecked("player_six"),
    };
    for player in [
        &participants.one,
        &participants.two,
        &participants.three,
        &participants.four,
        &participants.five,
        &participants.six,
    ] {
        mint(router, player, INITIAL_BALANCE);
    }
    participants
}

// set up block to the genesis time
pub fn setup_block(router: &mut App) {
    setup_block_time(router, GENESIS_TIME, Some(10_000));
}
