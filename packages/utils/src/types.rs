use cosmwasm_std::{to_json_binary, Coin, StdResult, WasmMsg};
use serde::Serialize;

pub type Response = cosmwasm_std::Response;
pub type SubMsg = cosmwasm_std::SubMsg;
pub type CosmosMsg = cosmwasm_std::CosmosMsg;

pub fn into_cosmos_msg<M: Serialize, T: Into<String>>(
    message: M,
    contract_addr: T,
    funds: Option<Vec<Coin>>,
) -> StdResult<CosmosMsg> {
    let msg = to_json_binary(&message)?;
    let execute = WasmMsg::Execute {
        contract_addr: contract_addr.into(),
        msg,
        funds: funds.unwrap_or_default(),
    };
    Ok(execute.into())
}
