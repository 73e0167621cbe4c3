use soroban_sdk::{Address, Env, Symbol};

pub struct FundMeEvents {}

impl FundMeEvents {
    /// Emitted when a funder funds the contract
    ///
    /// - topics - `["fund", funder: Address]`
    /// - data - `[amount: i128, usd_value: i128]`
    ///
    /// ### Arguments
    /// * funder - The address that sent the funds
    /// * amount - The amount of funding tokens sent
    /// * usd_value - The USD value of the funds at the time of funding
    pub fn fund(e: &Env, funder: Address, amount: i128, usd_value: i128) {
        let topics = (Symbol::new(e, "fund"), funder);
        e.events().publish(topics, (amount, usd_value));
    }

    /// Emitted when the owner withdraws the balance of the contract
    ///
    /// - topics - `["withdraw", owner: Address]`
    /// - data - `amount: i128`
    ///
    /// ### Arguments
    /// * owner - The owner of the contract
    /// * amount - The amount of funding tokens withdrawn
    pub fn withdraw(e: &Env, owner: Address, amount: i128) {
        let topics = (Symbol::new(e, "withdraw"), owner);
        e.events().publish(topics, amount);
    }
}
