use sep_40_oracle::{Asset, PriceFeedClient};
use soroban_fixed_point_math::SorobanFixedPoint;
use soroban_sdk::{Address, Env};

use crate::{constants::MAX_PRICE_AGE, errors::FundMeError, storage, validator};

/// Load the USD price of `token` from the price feed
///
/// Returns the price in the oracle's decimals
///
/// ### Arguments
/// * `oracle` - The SEP-40 price feed
/// * `token` - The asset to price
///
/// ### Errors
/// If the price feed has no positive price for the asset, if the price is dated after the
/// current ledger, or if the price is older than `MAX_PRICE_AGE`
pub fn load_price(e: &Env, oracle: &Address, token: &Address) -> Result<i128, FundMeError> {
    let oracle_client = PriceFeedClient::new(e, oracle);
    let price_data = match oracle_client.lastprice(&Asset::Stellar(token.clone())) {
        Some(price_data) => price_data,
        None => return Err(FundMeError::InvalidPrice),
    };
    if price_data.price <= 0 {
        return Err(FundMeError::InvalidPrice);
    }
    let now = e.ledger().timestamp();
    if price_data.timestamp > now {
        return Err(FundMeError::InvalidPrice);
    }
    if now - price_data.timestamp > MAX_PRICE_AGE {
        return Err(FundMeError::StalePrice);
    }
    Ok(price_data.price)
}

/// Load the number of decimals prices from the price feed are reported in
///
/// The value is read from the price feed once and cached
///
/// ### Arguments
/// * `oracle` - The SEP-40 price feed
pub fn load_price_decimals(e: &Env, oracle: &Address) -> u32 {
    if let Some(decimals) = storage::get_price_decimals(e) {
        return decimals;
    }
    let decimals = PriceFeedClient::new(e, oracle).decimals();
    storage::set_price_decimals(e, &decimals);
    decimals
}

/// Convert an amount of tokens to its USD value, rounding down
///
/// ### Arguments
/// * `amount` - The amount of tokens
/// * `price` - The USD price of one whole token, in the oracle's decimals
/// * `token_scalar` - The scalar of the token, `10^decimals`
pub fn to_usd(e: &Env, amount: i128, price: i128, token_scalar: i128) -> i128 {
    amount.fixed_mul_floor(e, &price, &token_scalar)
}

/// Fetch the current USD value of `amount` funding tokens
///
/// ### Arguments
/// * `amount` - The amount of funding tokens
///
/// ### Errors
/// If the amount is negative or the price cannot be loaded
pub fn execute_usd_value(e: &Env, amount: i128) -> Result<i128, FundMeError> {
    validator::require_nonnegative(amount)?;
    let price = load_price(e, &storage::get_oracle(e), &storage::get_token(e))?;
    Ok(to_usd(e, amount, price, storage::get_token_scalar(e)))
}
