use sep_41_token::TokenClient;
use soroban_sdk::{Address, Env};

use crate::{errors::FundMeError, storage};

/// The access pattern used to walk the funding order when the ledger is reset
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResetStrategy {
    /// Read the funder count from storage on every iteration
    Requery,
    /// Read the funder count once and reuse it for every iteration
    CachedLength,
}

impl ResetStrategy {
    fn funder_count(&self, e: &Env, cached: u32) -> u32 {
        match self {
            ResetStrategy::Requery => storage::get_funder_count(e),
            ResetStrategy::CachedLength => cached,
        }
    }
}

/// The contribution ledger for the current funding epoch
///
/// Tracks the cumulative amount contributed by each funder and the order funders
/// first contributed in. The balance held by the contract is never tracked here, it is
/// always read from the funding token.
pub struct Ledger {
    pub token: Address,
}

impl Ledger {
    /// Load the ledger
    pub fn load(e: &Env) -> Ledger {
        Ledger {
            token: storage::get_token(e),
        }
    }

    /// Add `amount` to the contribution of `funder`, appending them to the funding order
    /// if this is their first contribution of the epoch.
    ///
    /// Returns the cumulative contribution of `funder`
    ///
    /// ### Arguments
    /// * `funder` - The address of the funder
    /// * `amount` - The amount contributed
    pub fn record_contribution(&self, e: &Env, funder: &Address, amount: i128) -> i128 {
        if !storage::has_contribution(e, funder) {
            let count = storage::get_funder_count(e);
            storage::set_funder(e, count, funder);
            storage::set_funder_count(e, &(count + 1));
        }
        let total = storage::get_contribution(e, funder) + amount;
        storage::set_contribution(e, funder, &total);
        total
    }

    /// Zero every contribution recorded this epoch and clear the funding order
    ///
    /// ### Arguments
    /// * `strategy` - How the length of the funding order is read while walking it
    ///
    /// ### Errors
    /// If the funding order is missing an entry below the funder count
    pub fn reset_all(&self, e: &Env, strategy: ResetStrategy) -> Result<(), FundMeError> {
        let cached = storage::get_funder_count(e);
        let mut index: u32 = 0;
        while index < strategy.funder_count(e, cached) {
            let funder = storage::get_funder(e, index).ok_or(FundMeError::InternalError)?;
            storage::del_contribution(e, &funder);
            storage::del_funder(e, index);
            index += 1;
        }
        storage::set_funder_count(e, &0);
        Ok(())
    }

    /// Fetch the balance of the funding token held by the contract
    pub fn total_held(&self, e: &Env) -> i128 {
        TokenClient::new(e, &self.token).balance(&e.current_contract_address())
    }

    /// Fetch the cumulative contribution of `funder` this epoch
    pub fn contribution(&self, e: &Env, funder: &Address) -> i128 {
        storage::get_contribution(e, funder)
    }

    /// Fetch the funder at `index` of the funding order
    ///
    /// ### Errors
    /// If `index` is outside of the funding order
    pub fn funder(&self, e: &Env, index: u32) -> Result<Address, FundMeError> {
        if index >= storage::get_funder_count(e) {
            return Err(FundMeError::FunderNotFound);
        }
        storage::get_funder(e, index).ok_or(FundMeError::FunderNotFound)
    }

    /// Fetch the number of funders recorded this epoch
    pub fn funder_count(&self, e: &Env) -> u32 {
        storage::get_funder_count(e)
    }
}
