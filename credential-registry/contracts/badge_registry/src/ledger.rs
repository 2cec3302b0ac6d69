//! Ownership ledger for badge tokens.
//!
//! Tracks the current holder of each token and per-account balances. The
//! registry only ever calls [`mint`]; [`transfer`] is driven by holders
//! through the contract's `transfer` entry point.

use soroban_sdk::{Address, Env};

use crate::{events, storage, BadgeError};

/// Records `to` as the holder of a freshly allocated `token_id`.
pub fn mint(env: &Env, to: &Address, token_id: u32) {
    storage::set_token_owner(env, token_id, to);
    let balance = storage::get_balance(env, to);
    storage::set_balance(env, to, balance + 1);
    events::emit_mint(env, to, token_id);
}

pub fn owner_of(env: &Env, token_id: u32) -> Option<Address> {
    storage::get_token_owner(env, token_id)
}

pub fn balance(env: &Env, account: &Address) -> u32 {
    storage::get_balance(env, account)
}

/// Moves `token_id` from `from` to `to`. `from` must have authorized the call.
pub fn transfer(env: &Env, from: &Address, to: &Address, token_id: u32) -> Result<(), BadgeError> {
    let holder = owner_of(env, token_id).ok_or(BadgeError::TokenNotFound)?;
    if holder != *from {
        return Err(BadgeError::NotTokenOwner);
    }
    if crate::is_null_address(env, to) {
        return Err(BadgeError::InvalidRecipient);
    }

    storage::set_balance(env, from, balance(env, from) - 1);
    storage::set_token_owner(env, token_id, to);
    storage::set_balance(env, to, balance(env, to) + 1);

    events::emit_transfer(env, from, to, token_id);
    Ok(())
}
