use mock_token::{FreezableToken, FreezableTokenClient};
use sep_41_token::testutils::{MockTokenClient, MockTokenWASM};
use soroban_sdk::{testutils::Address as _, Address, Env, IntoVal};

pub fn create_token<'a>(
    e: &Env,
    admin: &Address,
    decimals: u32,
    symbol: &str,
) -> (Address, MockTokenClient<'a>) {
    let contract_id = Address::generate(e);
    e.register_at(&contract_id, MockTokenWASM, ());
    let client = MockTokenClient::new(e, &contract_id);
    client.initialize(admin, &decimals, &"test".into_val(e), &symbol.into_val(e));
    (contract_id, client)
}

pub fn create_freezable_token<'a>(e: &Env, decimals: u32) -> (Address, FreezableTokenClient<'a>) {
    let contract_id = e.register(FreezableToken {}, (decimals,));
    (contract_id.clone(), FreezableTokenClient::new(e, &contract_id))
}
