#![cfg(test)]

use fund_me::FundMeError;
use soroban_sdk::{
    testutils::{Address as _, AuthorizedFunction, AuthorizedInvocation, Events},
    vec, Address, IntoVal, Symbol,
};
use test_suites::{
    contract::create_fund_me,
    create_fixture_with_funders,
    oracle::{create_mock_oracle, set_usd_price},
    test_fixture::{TestFixture, MIN_USD, SCALAR_7, TOKEN_PRICE, USER_BALANCE},
    token::create_freezable_token,
};

#[test]
fn test_withdraw_single_funder() {
    let fixture = TestFixture::create();
    let frodo = &fixture.users[0];
    let amount = SCALAR_7;
    fixture.fund_me.fund(frodo, &amount);

    let owner_balance = fixture.token.balance(&fixture.owner);
    let result = fixture.fund_me.withdraw(&fixture.owner);
    assert_eq!(
        fixture.env.auths()[0],
        (
            fixture.owner.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    fixture.fund_me.address.clone(),
                    Symbol::new(&fixture.env, "withdraw"),
                    vec![&fixture.env, fixture.owner.to_val()]
                )),
                sub_invocations: std::vec![]
            }
        )
    );
    let event = vec![&fixture.env, fixture.env.events().all().last_unchecked()];
    assert_eq!(
        event,
        vec![
            &fixture.env,
            (
                fixture.fund_me.address.clone(),
                (Symbol::new(&fixture.env, "withdraw"), fixture.owner.clone())
                    .into_val(&fixture.env),
                amount.into_val(&fixture.env)
            )
        ]
    );

    assert_eq!(result, amount);
    assert_eq!(fixture.fund_me.total_held(), 0);
    assert_eq!(fixture.token.balance(&fixture.owner), owner_balance + amount);
    assert_eq!(fixture.fund_me.contribution(frodo), 0);
    assert_eq!(fixture.fund_me.funder_count(), 0);
    assert_eq!(
        fixture.fund_me.try_funder(&0).err(),
        Some(Ok(FundMeError::FunderNotFound))
    );
}

#[test]
fn test_cheaper_withdraw_single_funder() {
    let fixture = TestFixture::create();
    let frodo = &fixture.users[0];
    let amount = SCALAR_7;
    fixture.fund_me.fund(frodo, &amount);

    let result = fixture.fund_me.cheaper_withdraw(&fixture.owner);
    assert_eq!(
        fixture.env.auths()[0],
        (
            fixture.owner.clone(),
            AuthorizedInvocation {
                function: AuthorizedFunction::Contract((
                    fixture.fund_me.address.clone(),
                    Symbol::new(&fixture.env, "cheaper_withdraw"),
                    vec![&fixture.env, fixture.owner.to_val()]
                )),
                sub_invocations: std::vec![]
            }
        )
    );

    assert_eq!(result, amount);
    assert_eq!(fixture.fund_me.total_held(), 0);
    assert_eq!(fixture.token.balance(&fixture.owner), amount);
    assert_eq!(fixture.fund_me.contribution(frodo), 0);
    assert_eq!(fixture.fund_me.funder_count(), 0);
}

#[test]
fn test_withdraw_multiple_funders() {
    let fixture = create_fixture_with_funders();
    assert_eq!(fixture.fund_me.funder_count(), 5);
    assert_eq!(fixture.fund_me.total_held(), 5 * SCALAR_7);

    let result = fixture.fund_me.withdraw(&fixture.owner);

    assert_eq!(result, 5 * SCALAR_7);
    assert_eq!(fixture.fund_me.total_held(), 0);
    assert_eq!(fixture.token.balance(&fixture.owner), 5 * SCALAR_7);
    assert_eq!(fixture.fund_me.funder_count(), 0);
    for contribution in fixture.contributions() {
        assert_eq!(contribution, 0);
    }
    for user in fixture.users[0..5].iter() {
        assert_eq!(fixture.token.balance(user), USER_BALANCE - SCALAR_7);
    }
}

#[test]
fn test_cheaper_withdraw_multiple_funders() {
    let fixture = create_fixture_with_funders();

    let result = fixture.fund_me.cheaper_withdraw(&fixture.owner);

    assert_eq!(result, 5 * SCALAR_7);
    assert_eq!(fixture.fund_me.total_held(), 0);
    assert_eq!(fixture.token.balance(&fixture.owner), 5 * SCALAR_7);
    assert_eq!(fixture.fund_me.funder_count(), 0);
    for contribution in fixture.contributions() {
        assert_eq!(contribution, 0);
    }
}

#[test]
fn test_withdraw_variants_are_equivalent() {
    let requery = create_fixture_with_funders();
    let cached = create_fixture_with_funders();
    for fixture in [&requery, &cached] {
        fixture.fund_me.fund(&fixture.users[2], &(3 * SCALAR_7));
        fixture.fund_me.fund(&fixture.users[5], &0_0500000);
    }

    let requery_result = requery.fund_me.withdraw(&requery.owner);
    let cached_result = cached.fund_me.cheaper_withdraw(&cached.owner);

    assert_eq!(requery_result, cached_result);
    assert_eq!(requery_result, 8_0500000);
    assert_eq!(requery.contributions(), cached.contributions());
    assert_eq!(requery.fund_me.funder_count(), cached.fund_me.funder_count());
    assert_eq!(requery.fund_me.total_held(), cached.fund_me.total_held());
    assert_eq!(
        requery.token.balance(&requery.owner),
        cached.token.balance(&cached.owner)
    );
}

#[test]
fn test_withdraw_only_owner() {
    let fixture = create_fixture_with_funders();
    let sauron = Address::generate(&fixture.env);

    for caller in [&sauron, &fixture.users[0]] {
        let result = fixture.fund_me.try_withdraw(caller);
        assert_eq!(result.err(), Some(Ok(FundMeError::NotOwner)));
        let result = fixture.fund_me.try_cheaper_withdraw(caller);
        assert_eq!(result.err(), Some(Ok(FundMeError::NotOwner)));
    }

    assert_eq!(fixture.fund_me.total_held(), 5 * SCALAR_7);
    assert_eq!(fixture.fund_me.funder_count(), 5);
    for contribution in fixture.contributions()[0..5].iter() {
        assert_eq!(*contribution, SCALAR_7);
    }
    assert_eq!(fixture.token.balance(&sauron), 0);
}

#[test]
fn test_withdraw_empty() {
    let fixture = TestFixture::create();

    let result = fixture.fund_me.withdraw(&fixture.owner);
    assert_eq!(result, 0);
    let result = fixture.fund_me.cheaper_withdraw(&fixture.owner);
    assert_eq!(result, 0);

    assert_eq!(fixture.fund_me.total_held(), 0);
    assert_eq!(fixture.token.balance(&fixture.owner), 0);
}

#[test]
fn test_withdraw_includes_direct_transfers() {
    let fixture = create_fixture_with_funders();
    let samwise = &fixture.users[5];

    // tokens sent without calling fund are withdrawn but never recorded
    fixture
        .token
        .transfer(samwise, &fixture.fund_me.address, &SCALAR_7);
    assert_eq!(fixture.fund_me.contribution(samwise), 0);
    assert_eq!(fixture.fund_me.total_held(), 6 * SCALAR_7);

    let result = fixture.fund_me.withdraw(&fixture.owner);
    assert_eq!(result, 6 * SCALAR_7);
    assert_eq!(fixture.fund_me.total_held(), 0);
}

#[test]
fn test_withdraw_starts_new_epoch() {
    let fixture = create_fixture_with_funders();
    fixture.fund_me.withdraw(&fixture.owner);

    let samwise = &fixture.users[4];
    let result = fixture.fund_me.fund(samwise, &(2 * SCALAR_7));

    assert_eq!(result, 2 * SCALAR_7);
    assert_eq!(fixture.funders(), std::vec![samwise.clone()]);
    assert_eq!(fixture.fund_me.contribution(&fixture.users[0]), 0);
    assert_eq!(fixture.fund_me.total_held(), 2 * SCALAR_7);

    let result = fixture.fund_me.cheaper_withdraw(&fixture.owner);
    assert_eq!(result, 2 * SCALAR_7);
    assert_eq!(fixture.token.balance(&fixture.owner), 7 * SCALAR_7);
}

#[test]
fn test_fund_and_withdraw() {
    let fixture = TestFixture::create();
    let frodo = &fixture.users[0];

    fixture.fund_me.fund(frodo, &0_1000000);
    fixture.fund_me.withdraw(&fixture.owner);

    assert_eq!(fixture.fund_me.total_held(), 0);
    assert_eq!(fixture.token.balance(&fixture.owner), 0_1000000);
}

#[test]
fn test_withdraw_transfer_failure_rolls_back() {
    let fixture = TestFixture::create();
    let e = &fixture.env;

    let (token_id, token_client) = create_freezable_token(e, 7);
    let (oracle_id, oracle_client) = create_mock_oracle(e);
    set_usd_price(e, &oracle_client, &fixture.owner, &token_id, TOKEN_PRICE);
    let fund_me = create_fund_me(e, &fixture.owner, &oracle_id, &token_id, MIN_USD);

    let frodo = &fixture.users[0];
    let samwise = &fixture.users[1];
    token_client.mint(frodo, &USER_BALANCE);
    token_client.mint(samwise, &USER_BALANCE);
    fund_me.fund(frodo, &SCALAR_7);
    fund_me.fund(samwise, &(2 * SCALAR_7));

    token_client.set_frozen(&fixture.owner, &true);
    let result = fund_me.try_withdraw(&fixture.owner);
    assert_eq!(result.err(), Some(Ok(FundMeError::TransferFailed)));
    let result = fund_me.try_cheaper_withdraw(&fixture.owner);
    assert_eq!(result.err(), Some(Ok(FundMeError::TransferFailed)));

    assert_eq!(fund_me.total_held(), 3 * SCALAR_7);
    assert_eq!(fund_me.funder_count(), 2);
    assert_eq!(fund_me.funder(&0), frodo.clone());
    assert_eq!(fund_me.funder(&1), samwise.clone());
    assert_eq!(fund_me.contribution(frodo), SCALAR_7);
    assert_eq!(fund_me.contribution(samwise), 2 * SCALAR_7);
    assert_eq!(token_client.balance(&fixture.owner), 0);

    token_client.set_frozen(&fixture.owner, &false);
    let result = fund_me.withdraw(&fixture.owner);
    assert_eq!(result, 3 * SCALAR_7);
    assert_eq!(fund_me.funder_count(), 0);
    assert_eq!(token_client.balance(&fixture.owner), 3 * SCALAR_7);
}
