#![no_std]

#[cfg(any(test, feature = "testutils"))]
extern crate std;

mod actions;
mod constants;
mod contract;
mod errors;
mod events;
mod ledger;
mod storage;
mod validator;

#[cfg(test)]
mod testutils;

pub use constants::{MAX_PRICE_AGE, SCALAR_7};
pub use contract::*;
pub use errors::FundMeError;
pub use events::FundMeEvents;
pub use ledger::{Ledger, ResetStrategy};
pub use storage::FundMeDataKey;
