use cosmwasm_std::{Addr, Deps, Env, Order, StdResult, Uint128};
use cw_storage_plus::Bound;
use utils::state::{DEFAULT_LIMIT, MAX_LIMIT};

use crate::{
    msg::{ConfigResponse, UpkeepResponse},
    state::{CONFIG, OWED_PAYOUTS, PLAYERS, ROUND},
    utils::check_upkeep,
};

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        name: config.name,
        owner: config.owner,
        entrance_fee: config.entrance_fee,
        interval: config.interval,
        nois_proxy_addr: config.nois_proxy_addr,
        nois_proxy_coin: config.nois_proxy_coin,
        randomness_delay: config.randomness_delay,
        draw_timeout: config.draw_timeout,
    })
}

/// Query the players of the current round, in entry order.
/// An address appears once per ticket bought
pub fn query_players(
    deps: Deps,
    start_after: Option<u32>,
    limit: Option<u32>,
) -> StdResult<Vec<String>> {
    let round = ROUND.load(deps.storage)?;
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let start = start_after.map(Bound::exclusive);

    PLAYERS
        .prefix(round.round_id)
        .range(deps.storage, start, None, Order::Ascending)
        .map(|kv_item| Ok(kv_item?.1.to_string()))
        .take(limit)
        .collect()
}

/// Fails when the index is out of range
pub fn query_player(deps: Deps, index: u32) -> StdResult<Addr> {
    let round = ROUND.load(deps.storage)?;
    PLAYERS.load(deps.storage, (round.round_id, index))
}

pub fn query_check_upkeep(deps: Deps, env: Env) -> StdResult<UpkeepResponse> {
    let config = CONFIG.load(deps.storage)?;
    let round = ROUND.load(deps.storage)?;
    Ok(check_upkeep(&env, &config, &round))
}

pub fn query_owed_payout(deps: Deps, address: String) -> StdResult<Uint128> {
    let address = deps.api.addr_validate(&address)?;
    Ok(OWED_PAYOUTS
        .may_load(deps.storage, &address)?
        .unwrap_or_default())
}
