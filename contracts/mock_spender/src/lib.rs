#![no_std]

#[cfg(test)]
extern crate std;

#[cfg(test)]
mod test;

use coralswap_erc20_interface::Erc20Client;
use soroban_sdk::{contract, contractimpl, Address, Env, U256};

/// Delegated spender used to drive `transfer_from` across a contract
/// boundary. The contract itself is the spender, so owners approve its
/// address.
#[contract]
pub struct MockSpender;

#[contractimpl]
impl MockSpender {
    pub fn spend(env: Env, token: Address, owner: Address, to: Address, amount: U256) -> bool {
        let me = env.current_contract_address();
        Erc20Client::new(&env, &token).transfer_from(&me, &owner, &to, &amount)
    }

    pub fn balance(env: Env, token: Address, account: Address) -> U256 {
        Erc20Client::new(&env, &token).balance_of(&account)
    }
}
