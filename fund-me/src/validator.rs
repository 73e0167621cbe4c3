use soroban_sdk::{Address, Env};

use crate::{errors::FundMeError, storage};

/// Require that an incoming amount is not negative
///
/// ### Arguments
/// * `amount` - The amount to check
///
/// ### Errors
/// If the number is negative
pub fn require_nonnegative(amount: i128) -> Result<(), FundMeError> {
    if amount.is_negative() {
        return Err(FundMeError::NegativeAmount);
    }
    Ok(())
}

/// Require that `caller` is the owner of the contract
///
/// ### Arguments
/// * `caller` - The address attempting an owner only action
///
/// ### Errors
/// If `caller` is not the owner
pub fn require_owner(e: &Env, caller: &Address) -> Result<(), FundMeError> {
    if *caller != storage::get_owner(e) {
        return Err(FundMeError::NotOwner);
    }
    Ok(())
}
