use soroban_sdk::{Address, Env};

use crate::{
    errors::FundMeError,
    ledger::{Ledger, ResetStrategy},
    validator,
};

use super::transfer;

/// Withdraw the entire balance held by the contract to the owner and reset the ledger
///
/// The ledger is reset before any tokens leave the contract. If the transfer fails the
/// invocation returns an error and the reset is rolled back with it.
///
/// Returns the amount of tokens withdrawn
///
/// ### Arguments
/// * `caller` - The address withdrawing, must be the owner
/// * `strategy` - How the funding order is walked during the reset
///
/// ### Errors
/// If `caller` is not the owner or the token transfer fails
pub fn execute_withdraw(
    e: &Env,
    caller: &Address,
    strategy: ResetStrategy,
) -> Result<i128, FundMeError> {
    validator::require_owner(e, caller)?;

    let ledger = Ledger::load(e);
    let amount = ledger.total_held(e);
    ledger.reset_all(e, strategy)?;

    if amount > 0 {
        transfer(
            e,
            &ledger.token,
            &e.current_contract_address(),
            caller,
            amount,
        )?;
    }
    Ok(amount)
}
