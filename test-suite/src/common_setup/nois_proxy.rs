use cosmwasm_schema::cw_serde;
use cosmwasm_std::{
    coins, to_json_binary, Addr, Binary, CosmosMsg, Deps, DepsMut, Env, HexBinary, MessageInfo,
    Order, StdError, StdResult, Timestamp, WasmMsg,
};
use cw_storage_plus::{Item, Map};
use nois::NoisCallback;
use utils::types::Response;

pub const DEFAULT_RANDOMNESS_SEED: &str =
    "aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa115";

#[cw_serde]
pub struct Config {
    denom: String,
    amount: u128,
}

/// A randomness request waiting for the test to deliver it
#[cw_serde]
pub struct RandomnessForLater {
    pub after: Timestamp,
}

const CONFIG: Item<Config> = Item::new("config");
const RANDOMNESS: Map<(Addr, String), RandomnessForLater> = Map::new("randomnesss");

#[cw_serde]
pub struct InstantiateMsg {
    pub denom: String,
    pub amount: u128,
}

/// Same wire format as `nois::ProxyExecuteMsg`, plus a test-only trigger
#[cw_serde]
pub enum ExecuteMsg {
    GetNextRandomness {
        job_id: String,
    },
    GetRandomnessAfter {
        after: Timestamp,
        job_id: String,
    },
    /// Publishes `randomness` for a registered job and calls the consumer back
    Deliver {
        consumer: String,
        job_id: String,
        randomness: HexBinary,
    },
}

#[cw_serde]
pub enum QueryMsg {
    /// Job ids still waiting for randomness
    Jobs { consumer: String },
    Job { consumer: String, job_id: String },
}

pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, StdError> {
    CONFIG.save(
        deps.storage,
        &Config {
            denom: msg.denom,
            amount: msg.amount,
        },
    )?;
    Ok(Response::new())
}

pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> Result<Binary, StdError> {
    match msg {
        QueryMsg::Jobs { consumer } => {
            let consumer = deps.api.addr_validate(&consumer)?;
            let jobs = RANDOMNESS
                .prefix(consumer)
                .keys(deps.storage, None, None, Order::Ascending)
                .collect::<StdResult<Vec<String>>>()?;
            to_json_binary(&jobs)
        }
        QueryMsg::Job { consumer, job_id } => {
            let consumer = deps.api.addr_validate(&consumer)?;
            to_json_binary(&RANDOMNESS.may_load(deps.storage, (consumer, job_id))?)
        }
    }
}

pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, StdError> {
    match msg {
        ExecuteMsg::GetNextRandomness { job_id } => {
            register_randomness_for_later(deps, info, env.block.time, job_id)
        }
        ExecuteMsg::GetRandomnessAfter { after, job_id } => {
            register_randomness_for_later(deps, info, after, job_id)
        }
        ExecuteMsg::Deliver {
            consumer,
            job_id,
            randomness,
        } => deliver_randomness(deps, env, consumer, job_id, randomness),
    }
}

pub fn register_randomness_for_later(
    deps: DepsMut,
    info: MessageInfo,
    after: Timestamp,
    job_id: String,
) -> StdResult<Response> {
    let config = CONFIG.load(deps.storage)?;
    if info.funds != coins(config.amount, config.denom) {
        return Err(StdError::generic_err("Nois not enough funds sent to proxy"));
    }
    if RANDOMNESS.has(deps.storage, (info.sender.clone(), job_id.clone())) {
        return Err(StdError::generic_err("Job id already registered"));
    }

    RANDOMNESS.save(
        deps.storage,
        (info.sender, job_id),
        &RandomnessForLater { after },
    )?;
    Ok(Response::new())
}

fn deliver_randomness(
    deps: DepsMut,
    env: Env,
    consumer: String,
    job_id: String,
    randomness: HexBinary,
) -> StdResult<Response> {
    let consumer = deps.api.addr_validate(&consumer)?;
    let job = RANDOMNESS.load(deps.storage, (consumer.clone(), job_id.clone()))?;

    // Make sure we are after the requested publication time
    if env.block.time < job.after {
        return Err(StdError::generic_err(
            "Too soon to test-trigger randomness providing",
        ));
    }

    RANDOMNESS.remove(deps.storage, (consumer.clone(), job_id.clone()));
    Ok(Response::new().add_message(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: consumer.to_string(),
        msg: to_json_binary(&raffle::msg::ExecuteMsg::NoisReceive {
            callback: NoisCallback {
                job_id,
                published: env.block.time,
                randomness,
            },
        })?,
        funds: vec![],
    })))
}
