use soroban_sdk::{symbol_short, Address, Env, String, Symbol};

pub const BADGE_AWARDED: Symbol = symbol_short!("awarded");
pub const EVIDENCE_UPDATED: Symbol = symbol_short!("evidence");
pub const BADGE_ENDORSED: Symbol = symbol_short!("endorsed");
pub const ISSUER_ADDED: Symbol = symbol_short!("iss_add");
pub const ISSUER_REMOVED: Symbol = symbol_short!("iss_rm");
pub const OWNERSHIP_TRANSFERRED: Symbol = symbol_short!("owner");
pub const MINT: Symbol = symbol_short!("mint");
pub const TRANSFER: Symbol = symbol_short!("transfer");

pub fn emit_badge_awarded(
    env: &Env,
    token_id: u32,
    recipient: &Address,
    skill_name: &String,
    issued_date: u64,
) {
    env.events().publish(
        (BADGE_AWARDED, token_id, recipient.clone()),
        (skill_name.clone(), issued_date),
    );
}

pub fn emit_evidence_updated(env: &Env, token_id: u32, new_evidence_uri: &String) {
    env.events()
        .publish((EVIDENCE_UPDATED, token_id), new_evidence_uri.clone());
}

pub fn emit_badge_endorsed(env: &Env, token_id: u32, endorser: &Address) {
    env.events()
        .publish((BADGE_ENDORSED, token_id, endorser.clone()), ());
}

pub fn emit_issuer_added(env: &Env, issuer: &Address) {
    env.events().publish((ISSUER_ADDED, issuer.clone()), ());
}

pub fn emit_issuer_removed(env: &Env, issuer: &Address) {
    env.events().publish((ISSUER_REMOVED, issuer.clone()), ());
}

pub fn emit_ownership_transferred(env: &Env, previous: &Address, new_owner: &Address) {
    env.events()
        .publish((OWNERSHIP_TRANSFERRED, previous.clone()), new_owner.clone());
}

pub fn emit_mint(env: &Env, to: &Address, token_id: u32) {
    env.events().publish((MINT, to.clone()), token_id);
}

pub fn emit_transfer(env: &Env, from: &Address, to: &Address, token_id: u32) {
    env.events()
        .publish((TRANSFER, from.clone(), to.clone()), token_id);
}
