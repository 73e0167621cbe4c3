use soroban_sdk::{
    contracttype, unwrap::UnwrapOptimized, Address, Env, IntoVal, Symbol, TryFromVal, Val,
};

/********** Ledger Thresholds **********/

const ONE_DAY_LEDGERS: u32 = 17280; // assumes 5s a ledger

const LEDGER_THRESHOLD_INSTANCE: u32 = ONE_DAY_LEDGERS * 30; // ~ 30 days
const LEDGER_BUMP_INSTANCE: u32 = LEDGER_THRESHOLD_INSTANCE + ONE_DAY_LEDGERS; // ~ 31 days

const LEDGER_THRESHOLD_FUNDER: u32 = ONE_DAY_LEDGERS * 100; // ~ 100 days
const LEDGER_BUMP_FUNDER: u32 = LEDGER_THRESHOLD_FUNDER + 20 * ONE_DAY_LEDGERS; // ~ 120 days

/********** Storage Key Types **********/

const OWNER_KEY: &str = "Owner";
const ORACLE_KEY: &str = "Oracle";
const TOKEN_KEY: &str = "Token";
const TOKEN_SCALAR_KEY: &str = "TknScalar";
const MIN_USD_KEY: &str = "MinUsd";
const PRICE_DECIMALS_KEY: &str = "PriceDec";
const FUNDER_COUNT_KEY: &str = "FunderCnt";

#[derive(Clone)]
#[contracttype]
pub enum FundMeDataKey {
    // The cumulative amount contributed by an address this epoch
    Contribution(Address),
    // The address of the funder at an index of the funding order
    Funder(u32),
}

/****************************
**         Storage         **
****************************/

/// Bump the instance rent for the contract
pub fn extend_instance(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(LEDGER_THRESHOLD_INSTANCE, LEDGER_BUMP_INSTANCE);
}

/// Fetch an entry in persistent storage that has a default value if it doesn't exist
fn get_persistent_default<K: IntoVal<Env, Val>, V: TryFromVal<Env, Val>, F: FnOnce() -> V>(
    e: &Env,
    key: &K,
    default: F,
    bump_threshold: u32,
    bump_amount: u32,
) -> V {
    if let Some(result) = e.storage().persistent().get::<K, V>(key) {
        e.storage()
            .persistent()
            .extend_ttl(key, bump_threshold, bump_amount);
        result
    } else {
        default()
    }
}

/********** Instance Storage **********/

/// Fetch the owner of the contract
pub fn get_owner(e: &Env) -> Address {
    e.storage()
        .instance()
        .get::<Symbol, Address>(&Symbol::new(e, OWNER_KEY))
        .unwrap_optimized()
}

/// Set the owner of the contract
///
/// ### Arguments
/// * `owner` - The address allowed to withdraw funds
pub fn set_owner(e: &Env, owner: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, OWNER_KEY), owner);
}

/// Fetch the price feed id
pub fn get_oracle(e: &Env) -> Address {
    e.storage()
        .instance()
        .get::<Symbol, Address>(&Symbol::new(e, ORACLE_KEY))
        .unwrap_optimized()
}

/// Set the price feed id
///
/// ### Arguments
/// * `oracle` - The ID of the SEP-40 price feed
pub fn set_oracle(e: &Env, oracle: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, ORACLE_KEY), oracle);
}

/// Fetch the funding token id
pub fn get_token(e: &Env) -> Address {
    e.storage()
        .instance()
        .get::<Symbol, Address>(&Symbol::new(e, TOKEN_KEY))
        .unwrap_optimized()
}

/// Set the funding token id
///
/// ### Arguments
/// * `token` - The ID of the token accepted by the contract
pub fn set_token(e: &Env, token: &Address) {
    e.storage()
        .instance()
        .set::<Symbol, Address>(&Symbol::new(e, TOKEN_KEY), token);
}

/// Fetch the scalar of the funding token, `10^decimals`
pub fn get_token_scalar(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get::<Symbol, i128>(&Symbol::new(e, TOKEN_SCALAR_KEY))
        .unwrap_optimized()
}

/// Set the scalar of the funding token
///
/// ### Arguments
/// * `scalar` - The fixed-point scalar of the funding token
pub fn set_token_scalar(e: &Env, scalar: &i128) {
    e.storage()
        .instance()
        .set::<Symbol, i128>(&Symbol::new(e, TOKEN_SCALAR_KEY), scalar);
}

/// Fetch the minimum USD value of a single funding
pub fn get_min_usd(e: &Env) -> i128 {
    e.storage()
        .instance()
        .get::<Symbol, i128>(&Symbol::new(e, MIN_USD_KEY))
        .unwrap_optimized()
}

/// Set the minimum USD value of a single funding
///
/// ### Arguments
/// * `min_usd` - The minimum, in the oracle's decimals
pub fn set_min_usd(e: &Env, min_usd: &i128) {
    e.storage()
        .instance()
        .set::<Symbol, i128>(&Symbol::new(e, MIN_USD_KEY), min_usd);
}

/// Fetch the cached number of decimals used by the price feed, if it has been loaded
pub fn get_price_decimals(e: &Env) -> Option<u32> {
    e.storage()
        .instance()
        .get::<Symbol, u32>(&Symbol::new(e, PRICE_DECIMALS_KEY))
}

/// Set the number of decimals used by the price feed
///
/// ### Arguments
/// * `decimals` - The decimals reported by the price feed
pub fn set_price_decimals(e: &Env, decimals: &u32) {
    e.storage()
        .instance()
        .set::<Symbol, u32>(&Symbol::new(e, PRICE_DECIMALS_KEY), decimals);
}

/// Fetch the number of funders recorded this epoch
pub fn get_funder_count(e: &Env) -> u32 {
    e.storage()
        .instance()
        .get::<Symbol, u32>(&Symbol::new(e, FUNDER_COUNT_KEY))
        .unwrap_or(0)
}

/// Set the number of funders recorded this epoch
///
/// ### Arguments
/// * `count` - The new funder count
pub fn set_funder_count(e: &Env, count: &u32) {
    e.storage()
        .instance()
        .set::<Symbol, u32>(&Symbol::new(e, FUNDER_COUNT_KEY), count);
}

/********** Contributions **********/

/// Check if `funder` has a contribution entry this epoch
///
/// ### Arguments
/// * `funder` - The address of the funder
pub fn has_contribution(e: &Env, funder: &Address) -> bool {
    let key = FundMeDataKey::Contribution(funder.clone());
    e.storage().persistent().has(&key)
}

/// Fetch the cumulative contribution of `funder`, or 0 if they have not funded this epoch
///
/// ### Arguments
/// * `funder` - The address of the funder
pub fn get_contribution(e: &Env, funder: &Address) -> i128 {
    let key = FundMeDataKey::Contribution(funder.clone());
    get_persistent_default(
        e,
        &key,
        || 0i128,
        LEDGER_THRESHOLD_FUNDER,
        LEDGER_BUMP_FUNDER,
    )
}

/// Set the cumulative contribution of `funder`
///
/// ### Arguments
/// * `funder` - The address of the funder
/// * `amount` - The cumulative amount
pub fn set_contribution(e: &Env, funder: &Address, amount: &i128) {
    let key = FundMeDataKey::Contribution(funder.clone());
    e.storage()
        .persistent()
        .set::<FundMeDataKey, i128>(&key, amount);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_FUNDER, LEDGER_BUMP_FUNDER);
}

/// Remove the contribution entry of `funder`
///
/// ### Arguments
/// * `funder` - The address of the funder
pub fn del_contribution(e: &Env, funder: &Address) {
    let key = FundMeDataKey::Contribution(funder.clone());
    e.storage().persistent().remove(&key);
}

/********** Funding Order **********/

/// Fetch the funder at `index` of the funding order
///
/// ### Arguments
/// * `index` - The position in the funding order
pub fn get_funder(e: &Env, index: u32) -> Option<Address> {
    let key = FundMeDataKey::Funder(index);
    let result = e.storage().persistent().get::<FundMeDataKey, Address>(&key);
    if result.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, LEDGER_THRESHOLD_FUNDER, LEDGER_BUMP_FUNDER);
    }
    result
}

/// Set the funder at `index` of the funding order
///
/// ### Arguments
/// * `index` - The position in the funding order
/// * `funder` - The address of the funder
pub fn set_funder(e: &Env, index: u32, funder: &Address) {
    let key = FundMeDataKey::Funder(index);
    e.storage()
        .persistent()
        .set::<FundMeDataKey, Address>(&key, funder);
    e.storage()
        .persistent()
        .extend_ttl(&key, LEDGER_THRESHOLD_FUNDER, LEDGER_BUMP_FUNDER);
}

/// Remove the funder at `index` of the funding order
///
/// ### Arguments
/// * `index` - The position in the funding order
pub fn del_funder(e: &Env, index: u32) {
    let key = FundMeDataKey::Funder(index);
    e.storage().persistent().remove(&key);
}
