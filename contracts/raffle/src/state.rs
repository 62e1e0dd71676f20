use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Coin, Env, StdResult, Storage, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};

pub const CONFIG: Item<Config> = Item::new("config");
pub const ROUND: Item<RoundInfo> = Item::new("round");
/// Tickets keyed by (round_id, ticket index). Only the current round's prefix is ever read
pub const PLAYERS: Map<(u64, u32), Addr> = Map::new("players");

pub const PENDING_PAYOUT: Item<Payout> = Item::new("pending_payout");
pub const OWED_PAYOUTS: Map<&Addr, Uint128> = Map::new("owed_payouts");
pub const OWED_TOTAL: Item<Uint128> = Item::new("owed_total");

pub const DEFAULT_DRAW_TIMEOUT: u64 = 86_400;
pub const PAYOUT_REPLY_ID: u64 = 1;

#[cw_serde]
pub struct Config {
    /// The name of the smart contract
    pub name: String,
    /// The admin of the smart contract
    pub owner: Addr,
    /// Price of one ticket. Immutable
    pub entrance_fee: Coin,
    /// Minimum number of seconds between the start of a round and its draw. Immutable
    pub interval: u64,
    pub nois_proxy_addr: Addr,
    /// Paid to the proxy on every randomness request
    pub nois_proxy_coin: Coin,
    /// When set, the beacon must be published at least this many seconds after the request
    pub randomness_delay: Option<u64>,
    /// Seconds after which the owner may abandon an unanswered randomness request
    pub draw_timeout: u64,
}

#[cw_serde]
#[derive(Copy)]
pub enum RaffleState {
    Open,
    Calculating,
}

impl fmt::Display for RaffleState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RaffleState::Open => write!(f, "open"),
            RaffleState::Calculating => write!(f, "calculating"),
        }
    }
}

#[cw_serde]
pub struct PendingDraw {
    pub job_id: String,
    pub requested_at: Timestamp,
}

#[cw_serde]
pub struct RoundInfo {
    pub round_id: u64,
    pub state: RaffleState,
    pub round_start: Timestamp,
    pub number_of_players: u32,
    /// Sum of the entry payments of the current round
    pub pool: Uint128,
    pub pending_draw: Option<PendingDraw>,
    /// Incremented on every randomness request, keeps job ids unique across retries
    pub draw_nonce: u64,
    pub recent_winner: Option<Addr>,
}

impl RoundInfo {
    pub fn new(env: &Env) -> Self {
        Self {
            round_id: 0,
            state: RaffleState::Open,
            round_start: env.block.time,
            number_of_players: 0,
            pool: Uint128::zero(),
            pending_draw: None,
            draw_nonce: 0,
            recent_winner: None,
        }
    }

    pub fn is_pending(&self, job_id: &str) -> bool {
        self.state == RaffleState::Calculating
            && self
                .pending_draw
                .as_ref()
                .map_or(false, |pending| pending.job_id == job_id)
    }
}

/// A payout being transferred, or owed to the winner when the transfer failed
#[cw_serde]
pub struct Payout {
    pub round_id: u64,
    pub winner: Addr,
    pub amount: Coin,
}

pub fn load_owed_total(storage: &dyn Storage) -> StdResult<Uint128> {
    Ok(OWED_TOTAL.may_load(storage)?.unwrap_or_default())
}
