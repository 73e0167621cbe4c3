mod fund;
pub use fund::execute_fund;

mod price;
pub use price::{execute_usd_value, load_price, load_price_decimals, to_usd};

mod transfer;
pub use transfer::transfer;

mod withdrawal;
pub use withdrawal::execute_withdraw;
