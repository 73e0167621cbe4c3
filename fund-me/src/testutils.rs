#![cfg(test)]

use crate::FundMeContract;
use mock_token::{FreezableToken, FreezableTokenClient};
use sep_40_oracle::testutils::{Asset, MockPriceOracleClient, MockPriceOracleWASM};
use sep_41_token::testutils::{MockTokenClient, MockTokenWASM};
use soroban_sdk::{testutils::Address as _, vec, Address, Env, IntoVal, Symbol};

/// Create a fund-me contract
pub(crate) fn create_fund_me(
    e: &Env,
    owner: &Address,
    oracle: &Address,
    token: &Address,
    min_usd: i128,
) -> Address {
    e.register(
        FundMeContract {},
        (owner.clone(), oracle.clone(), token.clone(), min_usd),
    )
}

/// Create a fund-me contract with a fresh funding token and an unused oracle address.
///
/// Used by unit tests that only touch storage.
pub(crate) fn create_fund_me_stub(e: &Env, owner: &Address) -> Address {
    let (token, _) = create_token_contract(e, owner);
    create_fund_me(e, owner, &Address::generate(e), &token, 50_0000000)
}

//************************************************
//           External Contract Helpers
//************************************************

// ***** Token *****

pub(crate) fn create_token_contract<'a>(
    e: &Env,
    admin: &Address,
) -> (Address, MockTokenClient<'a>) {
    let contract_address = Address::generate(e);
    e.register_at(&contract_address, MockTokenWASM, ());
    let client = MockTokenClient::new(e, &contract_address);
    client.initialize(admin, &7, &"unit".into_val(e), &"test".into_val(e));
    (contract_address, client)
}

pub(crate) fn create_freezable_token<'a>(e: &Env) -> (Address, FreezableTokenClient<'a>) {
    let contract_address = e.register(FreezableToken {}, (7u32,));
    (
        contract_address.clone(),
        FreezableTokenClient::new(e, &contract_address),
    )
}

//***** Oracle ******

pub(crate) fn create_mock_oracle<'a>(e: &Env) -> (Address, MockPriceOracleClient<'a>) {
    let contract_address = e.register(MockPriceOracleWASM, ());
    (
        contract_address.clone(),
        MockPriceOracleClient::new(e, &contract_address),
    )
}

/// Configure the mock oracle to price `token` in USD w/ 7 decimals
pub(crate) fn set_oracle_price(
    e: &Env,
    oracle_client: &MockPriceOracleClient,
    admin: &Address,
    token: &Address,
    price: i128,
) {
    oracle_client.set_data(
        admin,
        &Asset::Other(Symbol::new(e, "USD")),
        &vec![e, Asset::Stellar(token.clone())],
        &7,
        &300,
    );
    oracle_client.set_price_stable(&vec![e, price]);
}
