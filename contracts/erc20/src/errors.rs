use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Erc20Error {
    AlreadyInitialized = 300,
    NotInitialized = 301,
    InsufficientBalance = 302,
    InsufficientAllowance = 303,
    Overflow = 304,
    InvalidMetadata = 305,
}
