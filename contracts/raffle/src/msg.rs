use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Coin, Timestamp, Uint128};
use nois::NoisCallback;

use crate::state::{PendingDraw, RaffleState, RoundInfo};

#[cw_serde]
pub struct InstantiateMsg {
    pub name: String,
    pub owner: Option<String>,
    pub entrance_fee: Coin,
    /// Seconds between the start of a round and the moment a draw can be requested
    pub interval: u64,
    pub nois_proxy_addr: String,
    pub nois_proxy_coin: Coin,
    pub randomness_delay: Option<u64>,
    pub draw_timeout: Option<u64>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Buy one ticket for the current round, paying at least the entrance fee
    Enter {},
    /// Close the round and ask the oracle for randomness. Anyone can call it once upkeep is needed
    RequestDraw {},
    NoisReceive {
        callback: NoisCallback,
    },
    /// Withdraw a prize whose transfer failed during finalization
    ClaimPayout {},
    // Admin messages
    ReopenRound {},
    UpdateConfig {
        owner: Option<String>,
        nois_proxy_addr: Option<String>,
        nois_proxy_coin: Option<Coin>,
        /// Zero removes the delay
        randomness_delay: Option<u64>,
        draw_timeout: Option<u64>,
    },
}

#[cw_serde]
pub enum SudoMsg {
    /// Governance override, abandons the pending draw without waiting for the timeout
    ReopenRound {},
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},
    #[returns(RaffleState)]
    RaffleState {},
    #[returns(Coin)]
    EntranceFee {},
    #[returns(u64)]
    Interval {},
    #[returns(Vec<String>)]
    Players {
        start_after: Option<u32>,
        limit: Option<u32>,
    },
    #[returns(Addr)]
    Player { index: u32 },
    #[returns(u32)]
    NumberOfPlayers {},
    #[returns(Timestamp)]
    LastTimestamp {},
    #[returns(Option<Addr>)]
    RecentWinner {},
    #[returns(UpkeepResponse)]
    CheckUpkeep {},
    #[returns(Option<PendingDraw>)]
    PendingDraw {},
    #[returns(RoundInfo)]
    Round {},
    #[returns(Uint128)]
    OwedPayout { address: String },
}

#[cw_serde]
pub struct ConfigResponse {
    pub name: String,
    pub owner: Addr,
    pub entrance_fee: Coin,
    pub interval: u64,
    pub nois_proxy_addr: Addr,
    pub nois_proxy_coin: Coin,
    pub randomness_delay: Option<u64>,
    pub draw_timeout: u64,
}

/// Eligibility of the current round for a draw, with the data a keeper needs to decide
#[cw_serde]
pub struct UpkeepResponse {
    pub upkeep_needed: bool,
    pub time_passed: bool,
    pub is_open: bool,
    pub has_balance: bool,
    pub has_players: bool,
    pub balance: Uint128,
    pub number_of_players: u32,
    pub state: RaffleState,
    /// Seconds since the round started
    pub elapsed: u64,
    pub seconds_until_eligible: u64,
}

#[cw_serde]
pub struct MigrateMsg {}
