use soroban_sdk::{contracttype, Address, Env, String, U256};

use crate::math::u256_zero;

const INSTANCE_LIFETIME_THRESHOLD: u32 = 17280; // ~1 day in 5s ledgers
const INSTANCE_BUMP_AMOUNT: u32 = 518400; // ~30 days in 5s ledgers

const BALANCE_LIFETIME_THRESHOLD: u32 = 518400; // ~30 days in 5s ledgers
const BALANCE_BUMP_AMOUNT: u32 = 1036800; // ~60 days in 5s ledgers

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AllowanceKey {
    pub owner: Address,
    pub spender: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub enum DataKey {
    Metadata,
    TotalSupply,
    Balance(Address),
    Allowance(AllowanceKey),
}

pub fn has_metadata(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Metadata)
}

pub fn get_metadata(env: &Env) -> Option<TokenMetadata> {
    env.storage().instance().get(&DataKey::Metadata)
}

pub fn set_metadata(env: &Env, metadata: &TokenMetadata) {
    env.storage().instance().set(&DataKey::Metadata, metadata);
}

pub fn get_total_supply(env: &Env) -> U256 {
    env.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or_else(|| u256_zero(env))
}

pub fn set_total_supply(env: &Env, supply: &U256) {
    env.storage().instance().set(&DataKey::TotalSupply, supply);
}

/// Unset balances read as zero. Reads never bump the entry TTL.
pub fn get_balance(env: &Env, account: &Address) -> U256 {
    let key = DataKey::Balance(account.clone());
    env.storage()
        .persistent()
        .get(&key)
        .unwrap_or_else(|| u256_zero(env))
}

pub fn set_balance(env: &Env, account: &Address, amount: &U256) {
    let key = DataKey::Balance(account.clone());
    env.storage().persistent().set(&key, amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

pub fn get_allowance(env: &Env, owner: &Address, spender: &Address) -> U256 {
    let key = DataKey::Allowance(AllowanceKey {
        owner: owner.clone(),
        spender: spender.clone(),
    });
    env.storage()
        .persistent()
        .get(&key)
        .unwrap_or_else(|| u256_zero(env))
}

pub fn set_allowance(env: &Env, owner: &Address, spender: &Address, amount: &U256) {
    let key = DataKey::Allowance(AllowanceKey {
        owner: owner.clone(),
        spender: spender.clone(),
    });
    env.storage().persistent().set(&key, amount);
    env.storage()
        .persistent()
        .extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

/// Extend instance storage TTL to keep contract alive.
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}
