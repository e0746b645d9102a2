use soroban_sdk::{symbol_short, Address, Env, U256};

pub struct Erc20Events;

impl Erc20Events {
    /// Emits a `transfer` event after balances have moved.
    ///
    /// Topics: `("transfer", from, to)`
    /// Data:   `value`
    ///
    /// Published for zero-value and self transfers too.
    pub fn transfer(env: &Env, from: &Address, to: &Address, value: &U256) {
        env.events().publish(
            (symbol_short!("transfer"), from.clone(), to.clone()),
            value.clone(),
        );
    }

    /// Emits an `approval` event carrying the allowance now in effect.
    ///
    /// Topics: `("approval", owner, spender)`
    /// Data:   `value`
    pub fn approval(env: &Env, owner: &Address, spender: &Address, value: &U256) {
        env.events().publish(
            (symbol_short!("approval"), owner.clone(), spender.clone()),
            value.clone(),
        );
    }
}
