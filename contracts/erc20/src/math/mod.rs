//! Checked 256-bit unsigned arithmetic.
//!
//! Host `U256` arithmetic traps on overflow and underflow. Every helper here
//! compares first so callers get `None` back and can map it to a contract
//! error instead of aborting the invocation.

use soroban_sdk::{Env, U256};

/// 2^256 - 1.
pub fn u256_max(env: &Env) -> U256 {
    U256::from_parts(env, u64::MAX, u64::MAX, u64::MAX, u64::MAX)
}

pub fn u256_zero(env: &Env) -> U256 {
    U256::from_u32(env, 0)
}

/// Returns `lhs + rhs`, or `None` if the sum exceeds 2^256 - 1.
pub fn checked_add(env: &Env, lhs: &U256, rhs: &U256) -> Option<U256> {
    let headroom = u256_max(env).sub(lhs);
    if *rhs > headroom {
        return None;
    }
    Some(lhs.add(rhs))
}

/// Returns `lhs - rhs`, or `None` if `rhs > lhs`.
pub fn checked_sub(lhs: &U256, rhs: &U256) -> Option<U256> {
    if rhs > lhs {
        return None;
    }
    Some(lhs.sub(rhs))
}
