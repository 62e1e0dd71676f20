use thiserror::Error;

use cosmwasm_std::{Coin, StdError, Timestamp, Uint128};
use utils::payment::PaymentError;

use crate::state::RaffleState;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("Unauthorized.")]
    Unauthorized,

    #[error("Proxy address is not valid")]
    InvalidProxyAddress,

    #[error("Invalid Name")]
    InvalidName {},

    #[error("The entrance fee must be greater than zero")]
    InvalidEntranceFee {},

    #[error("The randomness fee must be greater than zero")]
    InvalidProxyCoin,

    #[error("The raffle interval must be greater than zero")]
    InvalidInterval {},

    #[error("The draw timeout must be greater than zero")]
    InvalidDrawTimeout {},

    #[error("Not enough funds sent to enter the raffle. Required : {required}, sent : {sent}")]
    InsufficientFee { required: Coin, sent: Uint128 },

    #[error("The raffle is not open, a winner is being calculated")]
    RoundNotOpen {},

    #[error("Upkeep not needed. Balance : {balance}, players : {players}, state : {state}")]
    UpkeepNotNeeded {
        balance: Uint128,
        players: u32,
        state: RaffleState,
    },

    #[error("The raffle interval has not elapsed. Round started at {round_start}, interval : {interval} seconds, now : {now}")]
    IntervalNotElapsed {
        round_start: Timestamp,
        interval: u64,
        now: Timestamp,
    },

    #[error("The contract can't pay the randomness fee without touching the prize pool. Required : {required}, available : {available}")]
    InsufficientOracleFunds { required: Coin, available: Uint128 },

    // callback should only be allowed to be called by the proxy contract
    // otherwise anyone can cut the randomness workflow and cheat the randomness
    #[error("Unauthorized Receive execution")]
    UnauthorizedReceive,

    #[error("Randomness job {job_id} doesn't match the pending draw")]
    UnknownRequest { job_id: String },

    #[error("Received invalid randomness")]
    InvalidRandomness,

    #[error("There are no players to pick a winner from")]
    NoPlayers {},

    #[error("No draw is waiting for randomness")]
    NoPendingDraw {},

    #[error("The pending draw can only be abandoned after {available_at}")]
    DrawTimeoutNotReached { available_at: Timestamp },

    #[error("No payout is owed to this address")]
    NoPayoutOwed {},

    #[error("Unknown reply id: {0}")]
    UnknownReplyId(u64),

    #[error("An unplanned bug just happened :/")]
    ContractBug {},
}
