use crate::contract::create_fund_me;
use crate::oracle::{create_mock_oracle, set_usd_price};
use crate::token::create_token;
use fund_me::FundMeClient;
use sep_40_oracle::testutils::MockPriceOracleClient;
use sep_41_token::testutils::MockTokenClient;
use soroban_sdk::testutils::{Address as _, EnvTestConfig, Ledger, LedgerInfo};
use soroban_sdk::{Address, Env};

pub const SCALAR_7: i128 = 1_000_0000;

/// The minimum USD value of a single funding ($50)
pub const MIN_USD: i128 = 50 * SCALAR_7;

/// The USD price of the funding token ($2000)
pub const TOKEN_PRICE: i128 = 2000 * SCALAR_7;

/// The amount of funding tokens minted to each user
pub const USER_BALANCE: i128 = 100 * SCALAR_7;

pub struct TestFixture<'a> {
    pub env: Env,
    pub owner: Address,
    pub users: Vec<Address>,
    pub oracle: MockPriceOracleClient<'a>,
    pub token: MockTokenClient<'a>,
    pub fund_me: FundMeClient<'a>,
}

impl TestFixture<'_> {
    /// Create a new TestFixture for the FundMe contract
    ///
    /// Deploys a 7 decimal funding token priced at $2000 by a mock oracle, and a FundMe
    /// contract with a $50 minimum owned by `owner`. Six users are created and each is minted
    /// `USER_BALANCE` funding tokens.
    pub fn create<'a>() -> TestFixture<'a> {
        let e = Env::new_with_config(EnvTestConfig {
            capture_snapshot_at_drop: false,
        });
        e.mock_all_auths();
        e.cost_estimate().budget().reset_unlimited();

        let owner = Address::generate(&e);

        e.ledger().set(LedgerInfo {
            timestamp: 1441065600, // Sept 1st, 2015
            protocol_version: 22,
            sequence_number: 150,
            network_id: Default::default(),
            base_reserve: 10,
            min_temp_entry_ttl: 500000,
            min_persistent_entry_ttl: 500000,
            max_entry_ttl: 9999999,
        });

        let (token_id, token_client) = create_token(&e, &owner, 7, "ETH");
        let (oracle_id, oracle_client) = create_mock_oracle(&e);
        set_usd_price(&e, &oracle_client, &owner, &token_id, TOKEN_PRICE);

        let fund_me_client = create_fund_me(&e, &owner, &oracle_id, &token_id, MIN_USD);

        let mut users = Vec::new();
        for _ in 0..6 {
            let user = Address::generate(&e);
            token_client.mint(&user, &USER_BALANCE);
            users.push(user);
        }

        TestFixture {
            env: e,
            owner,
            users,
            oracle: oracle_client,
            token: token_client,
            fund_me: fund_me_client,
        }
    }

    /********** Ledger Helpers ***********/

    /// Fetch the contribution of every user
    pub fn contributions(&self) -> Vec<i128> {
        self.users
            .iter()
            .map(|user| self.fund_me.contribution(user))
            .collect()
    }

    /// Fetch the funding order as recorded by the contract
    pub fn funders(&self) -> Vec<Address> {
        (0..self.fund_me.funder_count())
            .map(|index| self.fund_me.funder(&index))
            .collect()
    }

    /// Re-price the funding token at the current ledger timestamp
    pub fn set_price(&self, price: i128) {
        set_usd_price(&self.env, &self.oracle, &self.owner, &self.token.address, price);
    }

    /********** Chain Helpers ***********/

    pub fn jump(&self, time: u64) {
        self.env.ledger().set(LedgerInfo {
            timestamp: self.env.ledger().timestamp().saturating_add(time),
            protocol_version: 22,
            sequence_number: self.env.ledger().sequence(),
            network_id: Default::default(),
            base_reserve: 10,
            min_temp_entry_ttl: 999999,
            min_persistent_entry_ttl: 999999,
            max_entry_ttl: 9999999,
        });
    }
}
