use fund_me::{FundMeClient, FundMeContract};
use soroban_sdk::{Address, Env};

pub fn create_fund_me<'a>(
    e: &Env,
    owner: &Address,
    oracle: &Address,
    token: &Address,
    min_usd: i128,
) -> FundMeClient<'a> {
    let contract_id = e.register(
        FundMeContract {},
        (owner.clone(), oracle.clone(), token.clone(), min_usd),
    );
    FundMeClient::new(e, &contract_id)
}
