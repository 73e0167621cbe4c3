#![no_std]

use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, panic_with_error, Address, Env,
};

const ONE_DAY_LEDGERS: u32 = 17280; // assumes 5s a ledger
const LEDGER_THRESHOLD: u32 = ONE_DAY_LEDGERS * 90;
const LEDGER_BUMP: u32 = ONE_DAY_LEDGERS * 120;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum FreezableTokenError {
    BalanceError = 10,
    AccountFrozen = 20,
}

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Decimals,
    Balance(Address),
    Frozen(Address),
}

/// A minimal SEP-41 shaped token where any address can be frozen, causing every transfer
/// to or from it to fail.
#[contract]
pub struct FreezableToken;

#[contractimpl]
impl FreezableToken {
    pub fn __constructor(e: Env, decimals: u32) {
        e.storage().instance().set(&DataKey::Decimals, &decimals);
    }

    /// Mint `amount` tokens to `to`
    pub fn mint(e: Env, to: Address, amount: i128) {
        let balance = Self::balance(e.clone(), to.clone());
        write_balance(&e, &to, balance + amount);
    }

    /// Freeze or unfreeze an address
    ///
    /// # Arguments
    /// * 'id' - The address to freeze
    /// * 'frozen' - If transfers to or from the address should fail
    pub fn set_frozen(e: Env, id: Address, frozen: bool) {
        e.storage().instance().set(&DataKey::Frozen(id), &frozen);
    }

    pub fn balance(e: Env, id: Address) -> i128 {
        let key = DataKey::Balance(id);
        e.storage().persistent().get::<DataKey, i128>(&key).unwrap_or(0)
    }

    pub fn transfer(e: Env, from: Address, to: Address, amount: i128) {
        from.require_auth();
        if is_frozen(&e, &from) || is_frozen(&e, &to) {
            panic_with_error!(&e, FreezableTokenError::AccountFrozen);
        }
        let from_balance = Self::balance(e.clone(), from.clone());
        if from_balance < amount {
            panic_with_error!(&e, FreezableTokenError::BalanceError);
        }
        let to_balance = Self::balance(e.clone(), to.clone());
        write_balance(&e, &from, from_balance - amount);
        write_balance(&e, &to, to_balance + amount);
    }

    pub fn decimals(e: Env) -> u32 {
        e.storage()
            .instance()
            .get::<DataKey, u32>(&DataKey::Decimals)
            .unwrap_or(7)
    }
}

fn is_frozen(e: &Env, id: &Address) -> bool {
    e.storage()
        .instance()
        .get::<DataKey, bool>(&DataKey::Frozen(id.clone()))
        .unwrap_or(false)
}

fn write_balance(e: &Env, id: &Address, amount: i128) {
    let key = DataKey::Balance(id.clone());
    e.storage().persistent().set::<DataKey, i128>(&key, &amount);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD, LEDGER_BUMP);
}
