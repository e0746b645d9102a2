#![no_std]

mod errors;
mod events;
mod math;
mod storage;

#[cfg(test)]
extern crate std; // soroban-sdk testutils require std; the ledger is no_std so we must opt-in explicitly.


use soroban_sdk::{contract, contractimpl, log, Address, Env, String, U256};

pub use errors::Erc20Error;
use events::Erc20Events;
use storage::TokenMetadata;

/// Fixed number of decimal places reported to wallets and indexers.
pub const DECIMALS: u32 = 18;

#[contract]
pub struct Erc20Token;

#[contractimpl]
impl Erc20Token {
    /// One-time construction. Credits the whole `total_supply` to `deployer`.
    pub fn initialize(
        env: Env,
        deployer: Address,
        name: String,
        symbol: String,
        total_supply: U256,
    ) -> Result<(), Erc20Error> {
        if storage::has_metadata(&env) {
            log!(&env, "erc20: already initialized");
            return Err(Erc20Error::AlreadyInitialized);
        }

        if name.is_empty() || symbol.is_empty() {
            log!(&env, "erc20: empty name or symbol");
            return Err(Erc20Error::InvalidMetadata);
        }

        deployer.require_auth();

        storage::set_metadata(&env, &TokenMetadata { name, symbol });
        storage::set_total_supply(&env, &total_supply);
        storage::set_balance(&env, &deployer, &total_supply);
        storage::extend_instance_ttl(&env);
        Ok(())
    }

    pub fn name(env: Env) -> Result<String, Erc20Error> {
        storage::get_metadata(&env)
            .map(|m| m.name)
            .ok_or(Erc20Error::NotInitialized)
    }

    pub fn symbol(env: Env) -> Result<String, Erc20Error> {
        storage::get_metadata(&env)
            .map(|m| m.symbol)
            .ok_or(Erc20Error::NotInitialized)
    }

    pub fn decimals(_env: Env) -> u32 {
        DECIMALS
    }

    pub fn total_supply(env: Env) -> U256 {
        storage::get_total_supply(&env)
    }

    pub fn balance_of(env: Env, account: Address) -> U256 {
        storage::get_balance(&env, &account)
    }

    pub fn allowance(env: Env, owner: Address, spender: Address) -> U256 {
        storage::get_allowance(&env, &owner, &spender)
    }

    /// Moves `amount` from `from` to `to`. Zero-value transfers still emit.
    pub fn transfer(
        env: Env,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<bool, Erc20Error> {
        from.require_auth();

        move_balance(&env, &from, &to, &amount)?;
        storage::extend_instance_ttl(&env);
        Erc20Events::transfer(&env, &from, &to, &amount);
        Ok(true)
    }

    /// Overwrites the allowance `spender` may draw from `owner`.
    ///
    /// Not bounded by the owner's balance. The previous value is replaced,
    /// not added to; use `increase_allowance` / `decrease_allowance` for
    /// relative changes.
    pub fn approve(
        env: Env,
        owner: Address,
        spender: Address,
        amount: U256,
    ) -> Result<bool, Erc20Error> {
        owner.require_auth();

        storage::set_allowance(&env, &owner, &spender, &amount);
        storage::extend_instance_ttl(&env);
        Erc20Events::approval(&env, &owner, &spender, &amount);
        Ok(true)
    }

    pub fn increase_allowance(
        env: Env,
        owner: Address,
        spender: Address,
        added: U256,
    ) -> Result<bool, Erc20Error> {
        owner.require_auth();

        let current = storage::get_allowance(&env, &owner, &spender);
        let updated = math::checked_add(&env, &current, &added).ok_or_else(|| {
            log!(&env, "erc20: allowance overflow", owner, spender);
            Erc20Error::Overflow
        })?;

        storage::set_allowance(&env, &owner, &spender, &updated);
        storage::extend_instance_ttl(&env);
        Erc20Events::approval(&env, &owner, &spender, &updated);
        Ok(true)
    }

    pub fn decrease_allowance(
        env: Env,
        owner: Address,
        spender: Address,
        subtracted: U256,
    ) -> Result<bool, Erc20Error> {
        owner.require_auth();

        let current = storage::get_allowance(&env, &owner, &spender);
        let updated = math::checked_sub(&current, &subtracted).ok_or_else(|| {
            log!(&env, "erc20: allowance underflow", owner, spender);
            Erc20Error::InsufficientAllowance
        })?;

        storage::set_allowance(&env, &owner, &spender, &updated);
        storage::extend_instance_ttl(&env);
        Erc20Events::approval(&env, &owner, &spender, &updated);
        Ok(true)
    }

    /// Delegated transfer: `spender` moves `amount` of `owner`'s balance to
    /// `to`, consuming the same amount of allowance.
    ///
    /// # Errors
    /// | Error                   | Condition                               |
    /// |-------------------------|-----------------------------------------|
    /// | `InsufficientAllowance` | `allowance(owner, spender) < amount`    |
    /// | `InsufficientBalance`   | `balance_of(owner) < amount`            |
    /// | `Overflow`              | crediting `to` would exceed 2^256 - 1   |
    pub fn transfer_from(
        env: Env,
        spender: Address,
        owner: Address,
        to: Address,
        amount: U256,
    ) -> Result<bool, Erc20Error> {
        spender.require_auth();

        let allowance = storage::get_allowance(&env, &owner, &spender);
        let remaining = math::checked_sub(&allowance, &amount).ok_or_else(|| {
            log!(&env, "erc20: insufficient allowance", owner, spender, amount);
            Erc20Error::InsufficientAllowance
        })?;

        // Balance checks run before the allowance write, so a failure here
        // leaves the allowance untouched.
        move_balance(&env, &owner, &to, &amount)?;
        storage::set_allowance(&env, &owner, &spender, &remaining);
        storage::extend_instance_ttl(&env);

        Erc20Events::transfer(&env, &owner, &to, &amount);
        Ok(true)
    }
}

/// Debits `from` and credits `to`. All checks complete before the first write.
fn move_balance(env: &Env, from: &Address, to: &Address, amount: &U256) -> Result<(), Erc20Error> {
    let from_balance = storage::get_balance(env, from);
    let from_after = math::checked_sub(&from_balance, amount).ok_or_else(|| {
        log!(env, "erc20: insufficient balance", from.clone(), amount.clone());
        Erc20Error::InsufficientBalance
    })?;

    if from == to {
        return Ok(());
    }

    let to_balance = storage::get_balance(env, to);
    let to_after = math::checked_add(env, &to_balance, amount).ok_or_else(|| {
        log!(env, "erc20: balance overflow", to.clone());
        Erc20Error::Overflow
    })?;

    storage::set_balance(env, from, &from_after);
    storage::set_balance(env, to, &to_after);
    Ok(())
}
