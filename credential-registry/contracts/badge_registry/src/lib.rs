#![no_std]
use soroban_sdk::{
    contract, contracterror, contractimpl, contracttype, log, panic_with_error, Address, Env,
    String, Vec,
};

mod events;
mod ledger;
mod storage;


/// Capacity used when the registry is deployed with `max_supply == 0`.
pub const DEFAULT_MAX_SUPPLY: u32 = 10_000;

/// Strkey of the all-zero ed25519 account, reserved as the null address.
pub const NULL_ADDRESS: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

const COLLECTION_NAME: &str = "SkillBadge";
const COLLECTION_SYMBOL: &str = "SKB";

#[derive(Clone, Debug, Eq, PartialEq)]
#[contracttype]
pub struct BadgeRecord {
    pub skill_name: String,
    pub issued_date: u64,
    pub evidence_uri: String,
}

#[contracterror]
#[derive(Clone, Copy, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum BadgeError {
    NotInitialized = 1,
    NotOwner = 2,
    InvalidAddress = 3,
    InvalidRecipient = 4,
    EmptySkillName = 5,
    EmptyEvidenceURI = 6,
    NotAuthorized = 7,
    IssuerRestricted = 8,
    CapacityExceeded = 9,
    TokenNotFound = 10,
    AlreadyIssuer = 11,
    NotAnIssuer = 12,
    AlreadyEndorsed = 13,
    NotTokenOwner = 14,
}

pub(crate) fn is_null_address(env: &Env, address: &Address) -> bool {
    *address == Address::from_string(&String::from_str(env, NULL_ADDRESS))
}

#[contract]
pub struct BadgeRegistry;

#[contractimpl]
impl BadgeRegistry {
    /// Deploy the registry with its owner and a fixed badge capacity.
    /// A `max_supply` of zero selects [`DEFAULT_MAX_SUPPLY`].
    pub fn __constructor(env: Env, owner: Address, max_supply: u32) {
        if is_null_address(&env, &owner) {
            panic_with_error!(&env, BadgeError::InvalidAddress);
        }

        let max_supply = if max_supply == 0 {
            DEFAULT_MAX_SUPPLY
        } else {
            max_supply
        };

        storage::set_owner(&env, &owner);
        storage::set_max_supply(&env, max_supply);
        storage::set_next_token_id(&env, 0);

        log!(&env, "badge registry deployed", owner, max_supply);
    }

    // ========================================================================
    // Issuer Management
    // ========================================================================

    /// Grant minting rights to `issuer`.
    pub fn add_issuer(env: Env, caller: Address, issuer: Address) -> Result<(), BadgeError> {
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        if is_null_address(&env, &issuer) {
            return Err(BadgeError::InvalidAddress);
        }
        if storage::is_issuer(&env, &issuer) {
            return Err(BadgeError::AlreadyIssuer);
        }

        storage::set_issuer(&env, &issuer);
        events::emit_issuer_added(&env, &issuer);

        log!(&env, "issuer added", issuer);
        Ok(())
    }

    /// Revoke minting rights. Badges already minted by `issuer` are unaffected.
    pub fn remove_issuer(env: Env, caller: Address, issuer: Address) -> Result<(), BadgeError> {
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        if !storage::is_issuer(&env, &issuer) {
            return Err(BadgeError::NotAnIssuer);
        }

        storage::remove_issuer(&env, &issuer);
        events::emit_issuer_removed(&env, &issuer);

        log!(&env, "issuer removed", issuer);
        Ok(())
    }

    pub fn is_issuer(env: Env, account: Address) -> bool {
        storage::is_issuer(&env, &account)
    }

    // ========================================================================
    // Badges
    // ========================================================================

    /// Mint a badge for `recipient` and return its token id.
    ///
    /// The owner may award to anyone. Issuers may only award to accounts
    /// that are neither themselves nor another issuer.
    pub fn award_badge(
        env: Env,
        caller: Address,
        recipient: Address,
        skill_name: String,
        evidence_uri: String,
    ) -> Result<u32, BadgeError> {
        caller.require_auth();

        if is_null_address(&env, &recipient) {
            return Err(BadgeError::InvalidRecipient);
        }
        if skill_name.is_empty() {
            return Err(BadgeError::EmptySkillName);
        }
        if evidence_uri.is_empty() {
            return Err(BadgeError::EmptyEvidenceURI);
        }

        let owner = storage::get_owner(&env)?;
        let is_owner = caller == owner;
        if !is_owner && !storage::is_issuer(&env, &caller) {
            return Err(BadgeError::NotAuthorized);
        }
        if !is_owner && (recipient == caller || storage::is_issuer(&env, &recipient)) {
            return Err(BadgeError::IssuerRestricted);
        }

        let token_id = storage::get_next_token_id(&env);
        if token_id >= storage::get_max_supply(&env)? {
            return Err(BadgeError::CapacityExceeded);
        }

        let record = BadgeRecord {
            skill_name,
            issued_date: env.ledger().timestamp(),
            evidence_uri,
        };
        storage::set_badge(&env, token_id, &record);
        ledger::mint(&env, &recipient, token_id);

        events::emit_badge_awarded(
            &env,
            token_id,
            &recipient,
            &record.skill_name,
            record.issued_date,
        );
        storage::set_next_token_id(&env, token_id + 1);

        log!(&env, "badge awarded", token_id, recipient);
        Ok(token_id)
    }

    /// Replace the evidence URI of an existing badge. Owner only.
    pub fn update_badge_evidence(
        env: Env,
        caller: Address,
        token_id: u32,
        new_evidence_uri: String,
    ) -> Result<(), BadgeError> {
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        let mut record = storage::get_badge(&env, token_id).ok_or(BadgeError::TokenNotFound)?;
        record.evidence_uri = new_evidence_uri;
        storage::set_badge(&env, token_id, &record);

        events::emit_evidence_updated(&env, token_id, &record.evidence_uri);

        log!(&env, "badge evidence updated", token_id);
        Ok(())
    }

    pub fn get_badge_info(env: Env, token_id: u32) -> Result<BadgeRecord, BadgeError> {
        storage::get_badge(&env, token_id).ok_or(BadgeError::TokenNotFound)
    }

    // ========================================================================
    // Endorsements
    // ========================================================================

    /// Record `caller` as an endorser of `token_id`. Each account may endorse
    /// a given badge once.
    pub fn endorse_badge(env: Env, caller: Address, token_id: u32) -> Result<(), BadgeError> {
        caller.require_auth();

        if !storage::has_badge(&env, token_id) {
            return Err(BadgeError::TokenNotFound);
        }
        if storage::has_endorsed(&env, token_id, &caller) {
            return Err(BadgeError::AlreadyEndorsed);
        }

        storage::add_endorser(&env, token_id, &caller);
        events::emit_badge_endorsed(&env, token_id, &caller);

        log!(&env, "badge endorsed", token_id, caller);
        Ok(())
    }

    /// Endorsers of `token_id`, in the order they endorsed.
    pub fn get_endorsers(env: Env, token_id: u32) -> Result<Vec<Address>, BadgeError> {
        if !storage::has_badge(&env, token_id) {
            return Err(BadgeError::TokenNotFound);
        }
        Ok(storage::get_endorsers(&env, token_id))
    }

    pub fn endorsement_count(env: Env, token_id: u32) -> Result<u32, BadgeError> {
        if !storage::has_badge(&env, token_id) {
            return Err(BadgeError::TokenNotFound);
        }
        Ok(storage::get_endorser_count(&env, token_id))
    }

    // ========================================================================
    // Token Ledger
    // ========================================================================

    pub fn owner_of(env: Env, token_id: u32) -> Result<Address, BadgeError> {
        ledger::owner_of(&env, token_id).ok_or(BadgeError::TokenNotFound)
    }

    pub fn balance(env: Env, account: Address) -> u32 {
        ledger::balance(&env, &account)
    }

    /// Move a badge to another holder. The badge record travels with it.
    pub fn transfer(env: Env, from: Address, to: Address, token_id: u32) -> Result<(), BadgeError> {
        from.require_auth();
        ledger::transfer(&env, &from, &to, token_id)
    }

    pub fn name(env: Env) -> String {
        String::from_str(&env, COLLECTION_NAME)
    }

    pub fn symbol(env: Env) -> String {
        String::from_str(&env, COLLECTION_SYMBOL)
    }

    // ========================================================================
    // Admin Functions
    // ========================================================================

    /// Hand the owner role to `new_owner`.
    pub fn transfer_ownership(
        env: Env,
        caller: Address,
        new_owner: Address,
    ) -> Result<(), BadgeError> {
        caller.require_auth();
        Self::require_owner(&env, &caller)?;

        if is_null_address(&env, &new_owner) {
            return Err(BadgeError::InvalidAddress);
        }

        storage::set_owner(&env, &new_owner);
        events::emit_ownership_transferred(&env, &caller, &new_owner);

        log!(&env, "ownership transferred", caller, new_owner);
        Ok(())
    }

    pub fn owner(env: Env) -> Result<Address, BadgeError> {
        storage::get_owner(&env)
    }

    pub fn max_supply(env: Env) -> Result<u32, BadgeError> {
        storage::get_max_supply(&env)
    }

    /// Number of badges minted so far; also the next token id to be assigned.
    pub fn total_badges(env: Env) -> u32 {
        storage::get_next_token_id(&env)
    }

    // ========================================================================
    // Helper Functions
    // ========================================================================

    fn require_owner(env: &Env, caller: &Address) -> Result<(), BadgeError> {
        let owner = storage::get_owner(env)?;
        if *caller != owner {
            return Err(BadgeError::NotOwner);
        }
        Ok(())
    }
}
