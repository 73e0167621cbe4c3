use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
/// Error codes for the fund-me contract. Common errors are codes that match up with the built-in
/// contracts error reporting. Fund-me specific errors start at 1400.
pub enum FundMeError {
    // Common Errors
    InternalError = 1,
    NotOwner = 4,
    NegativeAmount = 8,

    // Funding Errors (start at 1400)
    InsufficientFunds = 1400,
    TransferFailed = 1401,

    // Oracle Errors
    InvalidPrice = 1402,
    StalePrice = 1403,

    // Query Errors
    FunderNotFound = 1404,
}
