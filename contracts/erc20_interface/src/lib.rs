#![no_std]

use soroban_sdk::{contractclient, Address, Env, String, U256};

/// ERC20 Ledger Interface.
/// Collaborator contracts call a deployed ledger through `Erc20Client`.
/// A rejected call (insufficient balance or allowance) traps the caller's
/// invocation; use the generated `try_*` methods to observe it instead.
#[contractclient(name = "Erc20Client")]
pub trait Erc20Interface {
    fn name(env: Env) -> String;
    fn symbol(env: Env) -> String;
    fn decimals(env: Env) -> u32;
    fn total_supply(env: Env) -> U256;
    fn balance_of(env: Env, account: Address) -> U256;
    fn allowance(env: Env, owner: Address, spender: Address) -> U256;

    fn transfer(env: Env, from: Address, to: Address, amount: U256) -> bool;
    fn approve(env: Env, owner: Address, spender: Address, amount: U256) -> bool;
    fn increase_allowance(env: Env, owner: Address, spender: Address, added: U256) -> bool;
    fn decrease_allowance(env: Env, owner: Address, spender: Address, subtracted: U256) -> bool;
    fn transfer_from(
        env: Env,
        spender: Address,
        owner: Address,
        to: Address,
        amount: U256,
    ) -> bool;
}
