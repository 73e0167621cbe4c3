/********** Numbers **********/

/// Fixed-point scalar for 7 decimal numbers
pub const SCALAR_7: i128 = 1_0000000;

/********** Oracle **********/

/// The maximum age of an oracle price, in seconds, before it is considered stale
pub const MAX_PRICE_AGE: u64 = 24 * 60 * 60;
