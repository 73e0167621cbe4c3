use sep_40_oracle::testutils::{Asset, MockPriceOracleClient, MockPriceOracleWASM};
use soroban_sdk::{vec, Address, Env, Symbol};

pub fn create_mock_oracle<'a>(e: &Env) -> (Address, MockPriceOracleClient<'a>) {
    let contract_id = e.register(MockPriceOracleWASM, ());
    (contract_id.clone(), MockPriceOracleClient::new(e, &contract_id))
}

/// Price `token` in USD w/ 7 decimals at the current ledger timestamp
pub fn set_usd_price(
    e: &Env,
    oracle: &MockPriceOracleClient,
    admin: &Address,
    token: &Address,
    price: i128,
) {
    oracle.set_data(
        admin,
        &Asset::Other(Symbol::new(e, "USD")),
        &vec![e, Asset::Stellar(token.clone())],
        &7,
        &300,
    );
    oracle.set_price_stable(&vec![e, price]);
}
