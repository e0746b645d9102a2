#![cfg(test)]

use coralswap_erc20::{Erc20Error, Erc20Token, Erc20TokenClient};
use coralswap_erc20_interface::Erc20Client;
use soroban_sdk::{testutils::Address as _, Address, Env, String, U256};

use crate::{MockSpender, MockSpenderClient};

const SUPPLY: u32 = 100_000;

struct Fixture<'a> {
    env: Env,
    token: Erc20TokenClient<'a>,
    spender: MockSpenderClient<'a>,
    owner: Address,
}

fn u256(env: &Env, value: u32) -> U256 {
    U256::from_u32(env, value)
}

/// Deploys the ledger with the initial supply held by `owner`, plus a spender
/// contract, in one environment.
fn setup<'a>() -> Fixture<'a> {
    let env = Env::default();
    env.mock_all_auths();

    let token_id = env.register_contract(None, Erc20Token);
    let token = Erc20TokenClient::new(&env, &token_id);
    let owner = Address::generate(&env);
    token.initialize(
        &owner,
        &String::from_str(&env, "ERC20 Token"),
        &String::from_str(&env, "ERT"),
        &u256(&env, SUPPLY),
    );

    let spender_id = env.register_contract(None, MockSpender);
    let spender = MockSpenderClient::new(&env, &spender_id);

    Fixture {
        env,
        token,
        spender,
        owner,
    }
}

#[test]
fn contract_spender_draws_within_allowance() {
    let f = setup();
    let recipient = Address::generate(&f.env);

    f.token
        .approve(&f.owner, &f.spender.address, &u256(&f.env, 1_000));
    assert!(f
        .spender
        .spend(&f.token.address, &f.owner, &recipient, &u256(&f.env, 400)));

    assert_eq!(f.token.balance_of(&f.owner), u256(&f.env, SUPPLY - 400));
    assert_eq!(f.token.balance_of(&recipient), u256(&f.env, 400));
    assert_eq!(
        f.token.allowance(&f.owner, &f.spender.address),
        u256(&f.env, 600)
    );
}

#[test]
fn contract_spender_over_allowance_traps() {
    let f = setup();
    let recipient = Address::generate(&f.env);

    f.token
        .approve(&f.owner, &f.spender.address, &u256(&f.env, 10));
    let result = f
        .spender
        .try_spend(&f.token.address, &f.owner, &recipient, &u256(&f.env, 11));
    assert!(result.is_err());

    assert_eq!(f.token.balance_of(&f.owner), u256(&f.env, SUPPLY));
    assert_eq!(f.token.balance_of(&recipient), u256(&f.env, 0));
    assert_eq!(
        f.token.allowance(&f.owner, &f.spender.address),
        u256(&f.env, 10)
    );
}

#[test]
fn approval_to_another_address_does_not_cover_spender() {
    let f = setup();
    let other = Address::generate(&f.env);
    let recipient = Address::generate(&f.env);

    f.token.approve(&f.owner, &other, &u256(&f.env, 1_000));
    let result = f
        .spender
        .try_spend(&f.token.address, &f.owner, &recipient, &u256(&f.env, 1));
    assert!(result.is_err());

    assert_eq!(f.token.balance_of(&f.owner), u256(&f.env, SUPPLY));
    assert_eq!(f.token.balance_of(&recipient), u256(&f.env, 0));
    assert_eq!(f.token.allowance(&f.owner, &other), u256(&f.env, 1_000));
    assert_eq!(
        f.token.allowance(&f.owner, &f.spender.address),
        u256(&f.env, 0)
    );
}

#[test]
fn balance_reads_through_interface_client() {
    let f = setup();
    assert_eq!(
        f.spender.balance(&f.token.address, &f.owner),
        u256(&f.env, SUPPLY)
    );
}

#[test]
fn interface_client_matches_contract_client() {
    let f = setup();
    let ledger = Erc20Client::new(&f.env, &f.token.address);

    assert_eq!(ledger.name(), f.token.name());
    assert_eq!(ledger.symbol(), f.token.symbol());
    assert_eq!(ledger.decimals(), 18);
    assert_eq!(ledger.total_supply(), u256(&f.env, SUPPLY));
}

#[test]
fn interface_client_surfaces_ledger_errors() {
    let f = setup();
    let stranger = Address::generate(&f.env);
    let ledger = Erc20Client::new(&f.env, &f.token.address);

    let via_interface = ledger.try_transfer(&stranger, &f.owner, &u256(&f.env, 1));
    assert!(via_interface.is_err());

    let via_contract = f.token.try_transfer(&stranger, &f.owner, &u256(&f.env, 1));
    assert_eq!(via_contract, Err(Ok(Erc20Error::InsufficientBalance)));
}

#[test]
fn relative_allowance_changes_through_interface_client() {
    let f = setup();
    let ledger = Erc20Client::new(&f.env, &f.token.address);
    let recipient = Address::generate(&f.env);

    ledger.approve(&f.owner, &f.spender.address, &u256(&f.env, 100));
    ledger.increase_allowance(&f.owner, &f.spender.address, &u256(&f.env, 50));
    ledger.decrease_allowance(&f.owner, &f.spender.address, &u256(&f.env, 30));
    assert_eq!(
        ledger.allowance(&f.owner, &f.spender.address),
        u256(&f.env, 120)
    );

    f.spender
        .spend(&f.token.address, &f.owner, &recipient, &u256(&f.env, 120));
    assert_eq!(
        ledger.allowance(&f.owner, &f.spender.address),
        u256(&f.env, 0)
    );
}

#[test]
fn contract_spender_authorizes_itself_without_mocked_auths() {
    let f = setup();
    let recipient = Address::generate(&f.env);

    f.token
        .approve(&f.owner, &f.spender.address, &u256(&f.env, 100));
    f.env.set_auths(&[]);

    assert!(f
        .spender
        .spend(&f.token.address, &f.owner, &recipient, &u256(&f.env, 40)));

    assert_eq!(f.token.balance_of(&recipient), u256(&f.env, 40));
    assert_eq!(f.token.balance_of(&f.owner), u256(&f.env, SUPPLY - 40));
    assert_eq!(
        f.token.allowance(&f.owner, &f.spender.address),
        u256(&f.env, 60)
    );
}

#[test]
fn owner_transfer_without_auth_is_rejected() {
    let f = setup();
    let recipient = Address::generate(&f.env);
    f.env.set_auths(&[]);

    let result = f
        .token
        .try_transfer(&f.owner, &recipient, &u256(&f.env, 1));
    assert!(result.is_err());
    assert_eq!(f.token.balance_of(&f.owner), u256(&f.env, SUPPLY));
}
