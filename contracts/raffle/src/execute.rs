use cosmwasm_std::{
    ensure, ensure_eq, to_json_binary, BankMsg, Coin, DepsMut, Env, Event, MessageInfo, Reply, SubMsgResult,
    Uint128,
};
use nois::NoisCallback;
use utils::{
    payment::paid_amount,
    types::{Response, SubMsg},
};

use crate::{
    error::ContractError,
    state::{
        load_owed_total, Config, Payout, PendingDraw, RaffleState, CONFIG,
        OWED_PAYOUTS, OWED_TOTAL, PAYOUT_REPLY_ID, PENDING_PAYOUT, PLAYERS, ROUND,
    },
    utils::{
        available_oracle_funds, check_upkeep, get_nois_randomness, payout_message, pool_coin,
        winner_index,
    },
};

/// Buy a ticket for the current round.
///
/// The funds sent must be in the entrance fee denomination and cover at least the entrance fee.
/// Everything sent becomes part of the prize pool.
pub fn execute_enter(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut round = ROUND.load(deps.storage)?;

    let paid = paid_amount(&info, &config.entrance_fee.denom)?;
    if paid < config.entrance_fee.amount {
        return Err(ContractError::InsufficientFee {
            required: config.entrance_fee,
            sent: paid,
        });
    }
    if round.state != RaffleState::Open {
        return Err(ContractError::RoundNotOpen {});
    }

    PLAYERS.save(
        deps.storage,
        (round.round_id, round.number_of_players),
        &info.sender,
    )?;
    round.number_of_players += 1;
    round.pool += paid;
    ROUND.save(deps.storage, &round)?;

    Ok(Response::new()
        .add_event(Event::new("entered_raffle").add_attribute("player", info.sender.to_string()))
        .add_attribute("action", "enter")
        .add_attribute("round_id", round.round_id.to_string())
        .add_attribute("player", info.sender)
        .add_attribute("ticket", (round.number_of_players - 1).to_string()))
}

/// Closes the round and requests randomness from nois.
///
/// Anyone can trigger the draw, but only once the round is eligible.
/// Funds attached to this message can top up the oracle fee.
pub fn execute_request_draw(
    deps: DepsMut,
    env: Env,
    _info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut round = ROUND.load(deps.storage)?;

    let upkeep = check_upkeep(&env, &config, &round);
    if !upkeep.upkeep_needed {
        return Err(ContractError::UpkeepNotNeeded {
            balance: upkeep.balance,
            players: upkeep.number_of_players,
            state: upkeep.state,
        });
    }
    // The interval is checked again right before the state transition
    ensure!(
        env.block.time >= round.round_start.plus_seconds(config.interval),
        ContractError::IntervalNotElapsed {
            round_start: round.round_start,
            interval: config.interval,
            now: env.block.time,
        }
    );

    let available = available_oracle_funds(deps.as_ref(), &env, &config, &round)?;
    if available < config.nois_proxy_coin.amount {
        return Err(ContractError::InsufficientOracleFunds {
            required: config.nois_proxy_coin,
            available,
        });
    }

    let job_id = format!("raffle-{}-{}", round.round_id, round.draw_nonce);
    round.draw_nonce += 1;
    round.state = RaffleState::Calculating;
    round.pending_draw = Some(PendingDraw {
        job_id: job_id.clone(),
        requested_at: env.block.time,
    });
    ROUND.save(deps.storage, &round)?;

    let msg = get_nois_randomness(&env, &config, job_id.clone())?;

    Ok(Response::new()
        .add_message(msg)
        .add_event(Event::new("requested_raffle_winner").add_attribute("request_id", &job_id))
        .add_attribute("action", "request_draw")
        .add_attribute("round_id", round.round_id.to_string())
        .add_attribute("request_id", &job_id)
        .set_data(to_json_binary(&job_id)?))
}

/// Randomness callback from the nois proxy. Picks the winner, resets the round and pays the pool out.
pub fn execute_receive_nois(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    callback: NoisCallback,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let mut round = ROUND.load(deps.storage)?;

    // callback should only be allowed to be called by the proxy contract
    // otherwise anyone can cut the randomness workflow and cheat the randomness by sending the randomness directly to this contract
    ensure_eq!(
        info.sender,
        config.nois_proxy_addr,
        ContractError::UnauthorizedReceive
    );
    // Only the outstanding request is accepted, stale or replayed jobs are refused
    if !round.is_pending(&callback.job_id) {
        return Err(ContractError::UnknownRequest {
            job_id: callback.job_id,
        });
    }

    let winning_ticket = winner_index(&callback.randomness, round.number_of_players)?;
    let winner = PLAYERS.load(deps.storage, (round.round_id, winning_ticket))?;
    let payout = Payout {
        round_id: round.round_id,
        winner: winner.clone(),
        amount: pool_coin(&config, round.pool),
    };

    // The round is finalized before any funds move.
    // Tickets are keyed by round id, moving to the next round leaves the old ones unreachable.
    round.recent_winner = Some(winner.clone());
    round.round_id += 1;
    round.number_of_players = 0;
    round.pool = Uint128::zero();
    round.round_start = env.block.time;
    round.pending_draw = None;
    round.state = RaffleState::Open;
    ROUND.save(deps.storage, &round)?;

    let mut response = Response::new()
        .add_event(Event::new("winner_picked").add_attribute("winner", winner.to_string()))
        .add_attribute("action", "pick_winner")
        .add_attribute("round_id", payout.round_id.to_string())
        .add_attribute("request_id", callback.job_id)
        .add_attribute("winning_ticket", winning_ticket.to_string())
        .add_attribute("winner", winner)
        .add_attribute("prize", payout.amount.to_string());

    if !payout.amount.amount.is_zero() {
        // A failed transfer is escrowed in the reply instead of reverting the finalization
        PENDING_PAYOUT.save(deps.storage, &payout)?;
        response = response.add_submessage(SubMsg::reply_always(
            payout_message(&payout),
            PAYOUT_REPLY_ID,
        ));
    }

    Ok(response)
}

/// Outcome of the prize transfer started in `execute_receive_nois`
pub fn reply_payout(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    let payout = PENDING_PAYOUT.load(deps.storage)?;
    PENDING_PAYOUT.remove(deps.storage);

    match msg.result {
        SubMsgResult::Ok(_) => Ok(Response::new()
            .add_event(
                Event::new("payout_sent")
                    .add_attribute("winner", payout.winner.to_string())
                    .add_attribute("amount", payout.amount.to_string()),
            )
            .add_attribute("action", "payout")
            .add_attribute("round_id", payout.round_id.to_string())),
        SubMsgResult::Err(err) => {
            deps.api.debug(&format!(
                "payout of {} to {} failed: {}",
                payout.amount, payout.winner, err
            ));
            OWED_PAYOUTS.update::<_, ContractError>(deps.storage, &payout.winner, |owed| {
                Ok(owed.unwrap_or_default() + payout.amount.amount)
            })?;
            let owed_total = load_owed_total(deps.storage)? + payout.amount.amount;
            OWED_TOTAL.save(deps.storage, &owed_total)?;

            Ok(Response::new()
                .add_event(
                    Event::new("payout_deferred")
                        .add_attribute("winner", payout.winner.to_string())
                        .add_attribute("amount", payout.amount.to_string())
                        .add_attribute("reason", err),
                )
                .add_attribute("action", "payout")
                .add_attribute("round_id", payout.round_id.to_string()))
        }
    }
}

/// Withdraw a prize that could not be transferred when the round was finalized
pub fn execute_claim_payout(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let owed = OWED_PAYOUTS
        .may_load(deps.storage, &info.sender)?
        .ok_or(ContractError::NoPayoutOwed {})?;

    OWED_PAYOUTS.remove(deps.storage, &info.sender);
    let owed_total = load_owed_total(deps.storage)?.saturating_sub(owed);
    OWED_TOTAL.save(deps.storage, &owed_total)?;

    let amount = pool_coin(&config, owed);
    let msg = BankMsg::Send {
        to_address: info.sender.to_string(),
        amount: vec![amount.clone()],
    };

    Ok(Response::new()
        .add_message(msg)
        .add_event(
            Event::new("payout_claimed")
                .add_attribute("winner", info.sender.to_string())
                .add_attribute("amount", amount.to_string()),
        )
        .add_attribute("action", "claim_payout")
        .add_attribute("winner", info.sender))
}

/// Abandons an unanswered randomness request after the draw timeout.
/// Players and pool are kept, the round can be drawn again right away.
pub fn execute_reopen_round(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    // check the calling address is the authorised multisig
    ensure_eq!(info.sender, config.owner, ContractError::Unauthorized);

    _reopen_round(deps, env, Some(config.draw_timeout))
}

pub fn execute_sudo_reopen_round(deps: DepsMut, env: Env) -> Result<Response, ContractError> {
    _reopen_round(deps, env, None)
}

fn _reopen_round(
    deps: DepsMut,
    env: Env,
    draw_timeout: Option<u64>,
) -> Result<Response, ContractError> {
    let mut round = ROUND.load(deps.storage)?;
    let pending = match (round.state, round.pending_draw.take()) {
        (RaffleState::Calculating, Some(pending)) => pending,
        _ => return Err(ContractError::NoPendingDraw {}),
    };

    if let Some(timeout) = draw_timeout {
        let available_at = pending.requested_at.plus_seconds(timeout);
        if env.block.time < available_at {
            return Err(ContractError::DrawTimeoutNotReached { available_at });
        }
    }

    round.state = RaffleState::Open;
    ROUND.save(deps.storage, &round)?;

    Ok(Response::new()
        .add_event(Event::new("round_reopened").add_attribute("abandoned_request_id", &pending.job_id))
        .add_attribute("action", "reopen_round")
        .add_attribute("round_id", round.round_id.to_string()))
}

#[allow(clippy::too_many_arguments)]
pub fn execute_update_config(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    owner: Option<String>,
    nois_proxy_addr: Option<String>,
    nois_proxy_coin: Option<Coin>,
    randomness_delay: Option<u64>,
    draw_timeout: Option<u64>,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    // ensure msg sender is admin
    ensure_eq!(info.sender, config.owner, ContractError::Unauthorized);

    let owner = match owner {
        Some(ow) => deps.api.addr_validate(&ow)?,
        None => config.owner,
    };
    let nois_proxy_addr = match nois_proxy_addr {
        Some(prx) => deps
            .api
            .addr_validate(&prx)
            .map_err(|_| ContractError::InvalidProxyAddress)?,
        None => config.nois_proxy_addr,
    };
    // a zero delay switches back to the next available beacon
    let randomness_delay = match randomness_delay {
        Some(0) => None,
        Some(delay) => Some(delay),
        None => config.randomness_delay,
    };
    let nois_proxy_coin = match nois_proxy_coin {
        Some(coin) if coin.amount.is_zero() => return Err(ContractError::InvalidProxyCoin),
        Some(coin) => coin,
        None => config.nois_proxy_coin,
    };
    let draw_timeout = match draw_timeout {
        Some(0) => return Err(ContractError::InvalidDrawTimeout {}),
        Some(dt) => dt,
        None => config.draw_timeout,
    };

    // entrance fee and interval can't change for the lifetime of the contract
    CONFIG.save(
        deps.storage,
        &Config {
            name: config.name,
            owner,
            entrance_fee: config.entrance_fee,
            interval: config.interval,
            nois_proxy_addr,
            nois_proxy_coin,
            randomness_delay,
            draw_timeout,
        },
    )?;

    Ok(Response::new().add_attribute("action", "update_config"))
}
