use soroban_sdk::{Address, Env};

use crate::{errors::FundMeError, ledger::Ledger, storage, validator};

use super::{load_price, to_usd, transfer};

/// Fund the contract with `amount` tokens from `funder`
///
/// Returns a tuple of (the cumulative contribution of `funder`, the USD value of `amount`)
///
/// ### Arguments
/// * `funder` - The address sending the funds
/// * `amount` - The amount of funding tokens to send
///
/// ### Errors
/// If the amount is negative, the price cannot be loaded, the USD value of `amount` is below
/// the minimum, or the token transfer fails
pub fn execute_fund(e: &Env, funder: &Address, amount: i128) -> Result<(i128, i128), FundMeError> {
    validator::require_nonnegative(amount)?;

    let ledger = Ledger::load(e);
    let price = load_price(e, &storage::get_oracle(e), &ledger.token)?;
    let usd_value = to_usd(e, amount, price, storage::get_token_scalar(e));
    if usd_value < storage::get_min_usd(e) {
        return Err(FundMeError::InsufficientFunds);
    }

    let total = ledger.record_contribution(e, funder, amount);
    transfer(
        e,
        &ledger.token,
        funder,
        &e.current_contract_address(),
        amount,
    )?;
    Ok((total, usd_value))
}
