use cosmwasm_std::{MessageInfo, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum PaymentError {
    #[error("Only {expected} can be sent, received {received}")]
    UnexpectedFunds { expected: String, received: String },
}

/// Sums the funds sent in `expected_denom`.
/// Any other denomination is refused so nothing ends up stuck in the contract.
pub fn paid_amount(msg_info: &MessageInfo, expected_denom: &str) -> Result<Uint128, PaymentError> {
    if let Some(other) = msg_info.funds.iter().find(|c| c.denom != expected_denom) {
        return Err(PaymentError::UnexpectedFunds {
            expected: expected_denom.to_string(),
            received: other.denom.clone(),
        });
    }

    Ok(msg_info.funds.iter().map(|c| c.amount).sum())
}
