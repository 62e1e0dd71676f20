use cosmwasm_std::{
    BankMsg, Coin, Deps, Env, HexBinary, StdError, Uint128, Uint256,
};
use nois::ProxyExecuteMsg;
use utils::types::{into_cosmos_msg, CosmosMsg};

use crate::{
    error::ContractError,
    msg::UpkeepResponse,
    state::{load_owed_total, Config, Payout, RaffleState, RoundInfo},
};

const NANOS_PER_SECOND: u64 = 1_000_000_000;

/// The eligibility predicate gating a draw request.
/// A draw is needed when the interval has elapsed, the raffle is open and the round holds funds and players.
pub fn check_upkeep(env: &Env, config: &Config, round: &RoundInfo) -> UpkeepResponse {
    let eligible_at = round.round_start.plus_seconds(config.interval);
    let time_passed = env.block.time >= eligible_at;
    // whole seconds elapsed, and seconds left rounded up, so both agree with `time_passed`
    let elapsed = env.block.time.nanos().saturating_sub(round.round_start.nanos()) / NANOS_PER_SECOND;
    let seconds_until_eligible = eligible_at
        .nanos()
        .saturating_sub(env.block.time.nanos())
        .div_ceil(NANOS_PER_SECOND);
    let is_open = round.state == RaffleState::Open;
    let has_balance = !round.pool.is_zero();
    let has_players = round.number_of_players > 0;

    UpkeepResponse {
        upkeep_needed: time_passed && is_open && has_balance && has_players,
        time_passed,
        is_open,
        has_balance,
        has_players,
        balance: round.pool,
        number_of_players: round.number_of_players,
        state: round.state,
        elapsed,
        seconds_until_eligible,
    }
}

/// Builds the randomness request sent to the nois proxy.
/// The job id is needed to know what randomness we are referring to upon reception in the callback.
pub fn get_nois_randomness(
    env: &Env,
    config: &Config,
    job_id: String,
) -> Result<CosmosMsg, ContractError> {
    let msg = match config.randomness_delay {
        Some(delay) => ProxyExecuteMsg::GetRandomnessAfter {
            after: env.block.time.plus_seconds(delay),
            job_id,
        },
        None => ProxyExecuteMsg::GetNextRandomness { job_id },
    };

    // Pay from the contract
    Ok(into_cosmos_msg(
        msg,
        config.nois_proxy_addr.clone(),
        Some(vec![config.nois_proxy_coin.clone()]),
    )?)
}

/// Contract funds that can pay the oracle.
/// Entry fees of the running round and escrowed prizes never do.
pub fn available_oracle_funds(
    deps: Deps,
    env: &Env,
    config: &Config,
    round: &RoundInfo,
) -> Result<Uint128, ContractError> {
    let denom = &config.nois_proxy_coin.denom;
    let balance = deps
        .querier
        .query_balance(&env.contract.address, denom)?
        .amount;

    if *denom != config.entrance_fee.denom {
        return Ok(balance);
    }
    let reserved = round.pool + load_owed_total(deps.storage)?;
    Ok(balance.saturating_sub(reserved))
}

/// Index of the winning ticket: the randomness, read as a big-endian 256-bit integer, modulo the ticket count
pub fn winner_index(randomness: &HexBinary, number_of_players: u32) -> Result<u32, ContractError> {
    if number_of_players == 0 {
        return Err(ContractError::NoPlayers {});
    }
    let randomness: [u8; 32] = randomness
        .to_array()
        .map_err(|_| ContractError::InvalidRandomness)?;

    let index = Uint256::from_be_bytes(randomness) % Uint256::from(number_of_players);
    let index: Uint128 = index
        .try_into()
        .map_err(|_| StdError::generic_err("winner index overflow"))?;
    u32::try_from(index.u128()).map_err(|_| ContractError::ContractBug {})
}

pub fn payout_message(payout: &Payout) -> CosmosMsg {
    BankMsg::Send {
        to_address: payout.winner.to_string(),
        amount: vec![payout.amount.clone()],
    }
    .into()
}

pub fn pool_coin(config: &Config, amount: Uint128) -> Coin {
    Coin {
        denom: config.entrance_fee.denom.clone(),
        amount,
    }
}
