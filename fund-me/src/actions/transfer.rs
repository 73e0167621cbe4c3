use sep_41_token::TokenClient;
use soroban_sdk::{Address, Env};

use crate::errors::FundMeError;

/// Transfer `amount` of `token` from `from` to `to`
///
/// ### Arguments
/// * `token` - The token to transfer
/// * `from` - The address sending tokens
/// * `to` - The address receiving tokens
/// * `amount` - The amount of tokens
///
/// ### Errors
/// If the token contract rejects the transfer
pub fn transfer(
    e: &Env,
    token: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), FundMeError> {
    match TokenClient::new(e, token).try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => Err(FundMeError::TransferFailed),
    }
}
