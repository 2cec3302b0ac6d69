use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol, Vec};

use crate::{BadgeError, BadgeRecord};

const OWNER: Symbol = symbol_short!("owner");
const MAX_SUPPLY: Symbol = symbol_short!("max_sup");
const NEXT_ID: Symbol = symbol_short!("next_id");

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Badge(u32),
    Issuer(Address),
    EndorserCount(u32),
    Endorser(u32, u32),
    Endorsed(u32, Address),
    TokenOwner(u32),
    Balance(Address),
}

pub fn get_owner(env: &Env) -> Result<Address, BadgeError> {
    env.storage()
        .instance()
        .get(&OWNER)
        .ok_or(BadgeError::NotInitialized)
}

pub fn set_owner(env: &Env, owner: &Address) {
    env.storage().instance().set(&OWNER, owner);
}

pub fn get_max_supply(env: &Env) -> Result<u32, BadgeError> {
    env.storage()
        .instance()
        .get(&MAX_SUPPLY)
        .ok_or(BadgeError::NotInitialized)
}

pub fn set_max_supply(env: &Env, max_supply: u32) {
    env.storage().instance().set(&MAX_SUPPLY, &max_supply);
}

pub fn get_next_token_id(env: &Env) -> u32 {
    env.storage().instance().get(&NEXT_ID).unwrap_or(0)
}

pub fn set_next_token_id(env: &Env, next: u32) {
    env.storage().instance().set(&NEXT_ID, &next);
}

// ========================================================================
// Badges
// ========================================================================

pub fn get_badge(env: &Env, token_id: u32) -> Option<BadgeRecord> {
    env.storage().persistent().get(&DataKey::Badge(token_id))
}

pub fn set_badge(env: &Env, token_id: u32, record: &BadgeRecord) {
    env.storage()
        .persistent()
        .set(&DataKey::Badge(token_id), record);
}

pub fn has_badge(env: &Env, token_id: u32) -> bool {
    env.storage().persistent().has(&DataKey::Badge(token_id))
}

// ========================================================================
// Issuers
// ========================================================================

pub fn is_issuer(env: &Env, account: &Address) -> bool {
    env.storage()
        .persistent()
        .get(&DataKey::Issuer(account.clone()))
        .unwrap_or(false)
}

pub fn set_issuer(env: &Env, account: &Address) {
    env.storage()
        .persistent()
        .set(&DataKey::Issuer(account.clone()), &true);
}

pub fn remove_issuer(env: &Env, account: &Address) {
    env.storage()
        .persistent()
        .remove(&DataKey::Issuer(account.clone()));
}

// ========================================================================
// Endorsements
// ========================================================================

pub fn get_endorser_count(env: &Env, token_id: u32) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::EndorserCount(token_id))
        .unwrap_or(0)
}

/// Endorsers of `token_id` in insertion order.
pub fn get_endorsers(env: &Env, token_id: u32) -> Vec<Address> {
    let mut endorsers = Vec::new(env);
    for index in 0..get_endorser_count(env, token_id) {
        if let Some(endorser) = env
            .storage()
            .persistent()
            .get::<DataKey, Address>(&DataKey::Endorser(token_id, index))
        {
            endorsers.push_back(endorser);
        }
    }
    endorsers
}

pub fn has_endorsed(env: &Env, token_id: u32, endorser: &Address) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Endorsed(token_id, endorser.clone()))
}

/// Stores `endorser` at the next index for the token and marks the pair as seen.
pub fn add_endorser(env: &Env, token_id: u32, endorser: &Address) {
    let index = get_endorser_count(env, token_id);
    env.storage()
        .persistent()
        .set(&DataKey::Endorser(token_id, index), endorser);
    env.storage()
        .persistent()
        .set(&DataKey::EndorserCount(token_id), &(index + 1));
    env.storage()
        .persistent()
        .set(&DataKey::Endorsed(token_id, endorser.clone()), &true);
}

// ========================================================================
// Token ownership
// ========================================================================

pub fn get_token_owner(env: &Env, token_id: u32) -> Option<Address> {
    env.storage().persistent().get(&DataKey::TokenOwner(token_id))
}

pub fn set_token_owner(env: &Env, token_id: u32, owner: &Address) {
    env.storage()
        .persistent()
        .set(&DataKey::TokenOwner(token_id), owner);
}

pub fn get_balance(env: &Env, account: &Address) -> u32 {
    env.storage()
        .persistent()
        .get(&DataKey::Balance(account.clone()))
        .unwrap_or(0)
}

pub fn set_balance(env: &Env, account: &Address, balance: u32) {
    env.storage()
        .persistent()
        .set(&DataKey::Balance(account.clone()), &balance);
}
