#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    ensure, to_json_binary, Deps, DepsMut, Env, MessageInfo, QueryResponse, Reply, StdResult,
};

use crate::{
    error::ContractError,
    execute::{
        execute_claim_payout, execute_enter, execute_receive_nois, execute_reopen_round,
        execute_request_draw, execute_sudo_reopen_round, execute_update_config, reply_payout,
    },
    msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg, SudoMsg},
    query::{query_check_upkeep, query_config, query_owed_payout, query_player, query_players},
    state::{
        Config, RoundInfo, CONFIG, DEFAULT_DRAW_TIMEOUT, PAYOUT_REPLY_ID, PENDING_PAYOUT, ROUND,
    },
};
use utils::{state::is_valid_name, types::Response};

use cw2::set_contract_version;

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let nois_proxy_addr = deps
        .api
        .addr_validate(&msg.nois_proxy_addr)
        .map_err(|_| ContractError::InvalidProxyAddress)?;

    // valid name
    if !is_valid_name(&msg.name) {
        return Err(ContractError::InvalidName {});
    }
    ensure!(
        !msg.entrance_fee.amount.is_zero(),
        ContractError::InvalidEntranceFee {}
    );
    ensure!(
        !msg.nois_proxy_coin.amount.is_zero(),
        ContractError::InvalidProxyCoin
    );
    ensure!(msg.interval > 0, ContractError::InvalidInterval {});
    let draw_timeout = msg.draw_timeout.unwrap_or(DEFAULT_DRAW_TIMEOUT);
    ensure!(draw_timeout > 0, ContractError::InvalidDrawTimeout {});

    let config = Config {
        name: msg.name,
        owner: deps
            .api
            .addr_validate(&msg.owner.unwrap_or_else(|| info.sender.to_string()))?,
        entrance_fee: msg.entrance_fee,
        interval: msg.interval,
        nois_proxy_addr,
        nois_proxy_coin: msg.nois_proxy_coin,
        randomness_delay: msg.randomness_delay.filter(|delay| *delay > 0),
        draw_timeout,
    };
    let round = RoundInfo::new(&env);

    CONFIG.save(deps.storage, &config)?;
    ROUND.save(deps.storage, &round)?;
    set_contract_version(
        deps.storage,
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
    )?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract_name", config.name)
        .add_attribute("owner", config.owner)
        .add_attribute("entrance_fee", config.entrance_fee.to_string())
        .add_attribute("interval", config.interval.to_string())
        .add_attribute("round_start", round.round_start.to_string()))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> StdResult<Response> {
    set_contract_version(
        deps.storage,
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
    )?;
    Ok(Response::default())
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Enter {} => execute_enter(deps, env, info),
        ExecuteMsg::RequestDraw {} => execute_request_draw(deps, env, info),
        ExecuteMsg::NoisReceive { callback } => execute_receive_nois(deps, env, info, callback),
        ExecuteMsg::ClaimPayout {} => execute_claim_payout(deps, env, info),
        ExecuteMsg::ReopenRound {} => execute_reopen_round(deps, env, info),
        ExecuteMsg::UpdateConfig {
            owner,
            nois_proxy_addr,
            nois_proxy_coin,
            randomness_delay,
            draw_timeout,
        } => execute_update_config(
            deps,
            env,
            info,
            owner,
            nois_proxy_addr,
            nois_proxy_coin,
            randomness_delay,
            draw_timeout,
        ),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<QueryResponse> {
    let response = match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?)?,
        QueryMsg::RaffleState {} => to_json_binary(&ROUND.load(deps.storage)?.state)?,
        QueryMsg::EntranceFee {} => to_json_binary(&CONFIG.load(deps.storage)?.entrance_fee)?,
        QueryMsg::Interval {} => to_json_binary(&CONFIG.load(deps.storage)?.interval)?,
        QueryMsg::Players { start_after, limit } => {
            to_json_binary(&query_players(deps, start_after, limit)?)?
        }
        QueryMsg::Player { index } => to_json_binary(&query_player(deps, index)?)?,
        QueryMsg::NumberOfPlayers {} => {
            to_json_binary(&ROUND.load(deps.storage)?.number_of_players)?
        }
        QueryMsg::LastTimestamp {} => to_json_binary(&ROUND.load(deps.storage)?.round_start)?,
        QueryMsg::RecentWinner {} => to_json_binary(&ROUND.load(deps.storage)?.recent_winner)?,
        QueryMsg::CheckUpkeep {} => to_json_binary(&query_check_upkeep(deps, env)?)?,
        QueryMsg::PendingDraw {} => to_json_binary(&ROUND.load(deps.storage)?.pending_draw)?,
        QueryMsg::Round {} => to_json_binary(&ROUND.load(deps.storage)?)?,
        QueryMsg::OwedPayout { address } => to_json_binary(&query_owed_payout(deps, address)?)?,
    };
    Ok(response)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn reply(deps: DepsMut, env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        PAYOUT_REPLY_ID => reply_payout(deps, env, msg),
        id => Err(ContractError::UnknownReplyId(id)),
    }
}

// sudo entry point for governance override
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn sudo(deps: DepsMut, env: Env, msg: SudoMsg) -> Result<Response, ContractError> {
    match msg {
        SudoMsg::ReopenRound {} => execute_sudo_reopen_round(deps, env),
    }
}
