use crate::{
    actions, errors::FundMeError, events::FundMeEvents, ledger::Ledger, storage, validator,
    ResetStrategy,
};
use sep_41_token::TokenClient;
use soroban_sdk::{contract, contractclient, contractimpl, panic_with_error, Address, Env};

/// ### FundMe
///
/// A custody contract that accepts funds above a minimum USD value and lets a single
/// owner sweep the entire balance.
#[contract]
pub struct FundMeContract;

#[contractclient(name = "FundMeClient")]
pub trait FundMe {
    /********** Funding **********/

    /// Fund the contract with `amount` funding tokens from `funder`. The USD value of `amount`,
    /// priced by the oracle, must be at least the minimum USD value.
    ///
    /// Returns the cumulative contribution of `funder` for the current epoch
    ///
    /// ### Arguments
    /// * `funder` - The address sending the funds
    /// * `amount` - The amount of funding tokens to send
    ///
    /// ### Errors
    /// * `InsufficientFunds` - If the USD value of `amount` is below the minimum
    /// * `NegativeAmount` - If `amount` is negative
    /// * `InvalidPrice` / `StalePrice` - If the oracle does not have a usable price
    /// * `TransferFailed` - If the funding tokens cannot be transferred from `funder`
    fn fund(e: Env, funder: Address, amount: i128) -> Result<i128, FundMeError>;

    /********** Withdrawal **********/

    /// (Owner only) Withdraw the entire balance of the contract to the owner and reset every
    /// contribution.
    ///
    /// Returns the amount withdrawn
    ///
    /// ### Arguments
    /// * `caller` - The address withdrawing
    ///
    /// ### Errors
    /// * `NotOwner` - If `caller` is not the owner
    /// * `TransferFailed` - If the funding tokens cannot be transferred to the owner
    fn withdraw(e: Env, caller: Address) -> Result<i128, FundMeError>;

    /// (Owner only) Withdraw the entire balance of the contract to the owner and reset every
    /// contribution. Reads the number of funders once instead of on every step of the reset.
    ///
    /// Returns the amount withdrawn
    ///
    /// ### Arguments
    /// * `caller` - The address withdrawing
    ///
    /// ### Errors
    /// * `NotOwner` - If `caller` is not the owner
    /// * `TransferFailed` - If the funding tokens cannot be transferred to the owner
    fn cheaper_withdraw(e: Env, caller: Address) -> Result<i128, FundMeError>;

    /********** Getters **********/

    /// Fetch the owner of the contract
    fn owner(e: Env) -> Address;

    /// Fetch the address of the price feed
    fn price_feed(e: Env) -> Address;

    /// Fetch the address of the funding token
    fn token(e: Env) -> Address;

    /// Fetch the minimum USD value of a single funding, in the oracle's decimals
    fn min_usd(e: Env) -> i128;

    /// Fetch the number of decimals the price feed reports prices in. USD values, including
    /// the minimum, use the same decimals.
    fn price_decimals(e: Env) -> u32;

    /// Fetch the cumulative contribution of `funder` for the current epoch
    ///
    /// ### Arguments
    /// * `funder` - The address of the funder
    fn contribution(e: Env, funder: Address) -> i128;

    /// Fetch the funder at `index` in the order funders first contributed this epoch
    ///
    /// ### Arguments
    /// * `index` - The position of the funder
    ///
    /// ### Errors
    /// * `FunderNotFound` - If `index` is outside of the funding order
    fn funder(e: Env, index: u32) -> Result<Address, FundMeError>;

    /// Fetch the number of funders for the current epoch
    fn funder_count(e: Env) -> u32;

    /// Fetch the balance of funding tokens held by the contract
    fn total_held(e: Env) -> i128;

    /// Fetch the current USD value of `amount` funding tokens, in the oracle's decimals
    ///
    /// ### Arguments
    /// * `amount` - The amount of funding tokens
    ///
    /// ### Errors
    /// * `NegativeAmount` - If `amount` is negative
    /// * `InvalidPrice` / `StalePrice` - If the oracle does not have a usable price
    fn usd_value(e: Env, amount: i128) -> Result<i128, FundMeError>;
}

#[contractimpl]
impl FundMeContract {
    /// Construct the fund-me contract
    ///
    /// ### Arguments
    /// * `owner` - The address allowed to withdraw
    /// * `oracle` - The SEP-40 price feed used to price the funding token
    /// * `token` - The SEP-41 token accepted as funding
    /// * `min_usd` - The minimum USD value of a single funding, in the oracle's decimals
    ///
    /// ### Panics
    /// If `min_usd` is negative
    pub fn __constructor(e: Env, owner: Address, oracle: Address, token: Address, min_usd: i128) {
        if let Err(error) = validator::require_nonnegative(min_usd) {
            panic_with_error!(&e, error);
        }
        let decimals = TokenClient::new(&e, &token).decimals();

        storage::set_owner(&e, &owner);
        storage::set_oracle(&e, &oracle);
        storage::set_token(&e, &token);
        storage::set_token_scalar(&e, &10i128.pow(decimals));
        storage::set_min_usd(&e, &min_usd);
        storage::extend_instance(&e);
    }
}

/// @dev
/// The contract implementation only manages the authorization / authentication required from the caller(s), and
/// utilizes other modules to carry out contract functionality.
#[contractimpl]
impl FundMe for FundMeContract {
    /********** Funding **********/

    fn fund(e: Env, funder: Address, amount: i128) -> Result<i128, FundMeError> {
        storage::extend_instance(&e);
        funder.require_auth();

        let (total, usd_value) = actions::execute_fund(&e, &funder, amount)?;

        FundMeEvents::fund(&e, funder, amount, usd_value);
        Ok(total)
    }

    /********** Withdrawal **********/

    fn withdraw(e: Env, caller: Address) -> Result<i128, FundMeError> {
        storage::extend_instance(&e);
        caller.require_auth();

        let amount = actions::execute_withdraw(&e, &caller, ResetStrategy::Requery)?;

        FundMeEvents::withdraw(&e, caller, amount);
        Ok(amount)
    }

    fn cheaper_withdraw(e: Env, caller: Address) -> Result<i128, FundMeError> {
        storage::extend_instance(&e);
        caller.require_auth();

        let amount = actions::execute_withdraw(&e, &caller, ResetStrategy::CachedLength)?;

        FundMeEvents::withdraw(&e, caller, amount);
        Ok(amount)
    }

    /********** Getters **********/

    fn owner(e: Env) -> Address {
        storage::get_owner(&e)
    }

    fn price_feed(e: Env) -> Address {
        storage::get_oracle(&e)
    }

    fn token(e: Env) -> Address {
        storage::get_token(&e)
    }

    fn min_usd(e: Env) -> i128 {
        storage::get_min_usd(&e)
    }

    fn price_decimals(e: Env) -> u32 {
        actions::load_price_decimals(&e, &storage::get_oracle(&e))
    }

    fn contribution(e: Env, funder: Address) -> i128 {
        Ledger::load(&e).contribution(&e, &funder)
    }

    fn funder(e: Env, index: u32) -> Result<Address, FundMeError> {
        Ledger::load(&e).funder(&e, index)
    }

    fn funder_count(e: Env) -> u32 {
        Ledger::load(&e).funder_count(&e)
    }

    fn total_held(e: Env) -> i128 {
        Ledger::load(&e).total_held(&e)
    }

    fn usd_value(e: Env, amount: i128) -> Result<i128, FundMeError> {
        actions::execute_usd_value(&e, amount)
    }
}
