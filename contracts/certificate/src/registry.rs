//! # Certificate Registry Storage
//!
//! Holds certificate records, the id counter, and per-holder live counts.
//! - Ids are allocated sequentially from 0 and never reused.
//! - A certificate is `Active` from issuance until revocation; `Revoked`
//!   is terminal. Revoked entries stay in storage as the audit log.
//! - Validity is derived on every read from the ledger timestamp and is
//!   never stored.
//!
//! All entries live in instance storage, which is loaded in full on every
//! invocation and is bounded by the network's per-entry size limit. The
//! registry is therefore sized for a certifier's catalogue, not for
//! unbounded issuance. Every write extends the instance TTL so the
//! registry does not get archived.

use soroban_sdk::{contracttype, Address, Env, String, Vec};

use crate::errors::CertificateError;

pub const SECONDS_PER_DAY: u64 = 86_400;

/// Ledgers closed per day at ~5s per ledger.
pub const DAY_IN_LEDGERS: u32 = 17_280;
pub const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

// ======= Storage key ======

#[contracttype]
#[derive(Clone)]
pub enum RegistryKey {
    /// Next id to allocate (monotonic).
    NextId,
    /// Certificate state by id.
    Certificate(u64),
    /// Number of live certificates owned by a holder.
    LiveCount(Address),
    /// Ids of a holder's live certificates, in issuance order.
    HolderCertificates(Address),
}

// ====== Types ======

/// Full record for an issued certificate.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Certificate {
    pub id: u64,
    /// Non-transferable owner, fixed at issuance.
    pub holder: Address,
    pub company_name: String,
    pub registration_number: String,
    /// Ledger timestamp at issuance.
    pub issued_at: u64,
    /// Only ever moved forward, by renewal.
    pub expiration_date: u64,
    /// Reference to off-chain descriptive content.
    pub metadata_uri: String,
    pub active: bool,
}

/// Audit entry recorded when a certificate is revoked.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Revocation {
    pub reason: String,
    pub revoked_at: u64,
}

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub enum CertificateState {
    Active(Certificate),
    Revoked(Certificate, Revocation),
}

// ====== Internal storage helpers =======

fn get_state(env: &Env, id: u64) -> Option<CertificateState> {
    env.storage().instance().get(&RegistryKey::Certificate(id))
}

fn set_state(env: &Env, id: u64, state: &CertificateState) {
    env.storage()
        .instance()
        .set(&RegistryKey::Certificate(id), state);
}

fn set_live_count(env: &Env, holder: &Address, count: u64) {
    env.storage()
        .instance()
        .set(&RegistryKey::LiveCount(holder.clone()), &count);
}

fn set_holder_certificates(env: &Env, holder: &Address, ids: &Vec<u64>) {
    env.storage()
        .instance()
        .set(&RegistryKey::HolderCertificates(holder.clone()), ids);
}

/// Convert a day count to seconds, rejecting zero and overflow.
fn days_to_seconds(days: u64) -> Result<u64, CertificateError> {
    if days == 0 {
        return Err(CertificateError::InvalidInput);
    }
    days.checked_mul(SECONDS_PER_DAY)
        .ok_or(CertificateError::InvalidInput)
}

// ====== Public API ======

/// Keep the instance (and every record in it) alive for another
/// `INSTANCE_BUMP_AMOUNT` ledgers once it drops below the threshold.
pub fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
}

/// Number of ids allocated so far; also the next id to be issued.
pub fn next_id(env: &Env) -> u64 {
    env.storage()
        .instance()
        .get(&RegistryKey::NextId)
        .unwrap_or(0)
}

/// Return the record for `id` only while it is active.
pub fn get_active(env: &Env, id: u64) -> Result<Certificate, CertificateError> {
    match get_state(env, id) {
        Some(CertificateState::Active(certificate)) => Ok(certificate),
        _ => Err(CertificateError::NotFound),
    }
}

/// Create a certificate for `holder`. The caller has already been checked.
///
/// Expiration is `now + validity_days * 86400`.
pub fn issue(
    env: &Env,
    holder: Address,
    company_name: String,
    registration_number: String,
    validity_days: u64,
    metadata_uri: String,
) -> Result<Certificate, CertificateError> {
    if holder == env.current_contract_address() {
        return Err(CertificateError::InvalidInput);
    }
    let validity = days_to_seconds(validity_days)?;
    let issued_at = env.ledger().timestamp();
    let expiration_date = issued_at
        .checked_add(validity)
        .ok_or(CertificateError::InvalidInput)?;

    let id = next_id(env);
    let certificate = Certificate {
        id,
        holder: holder.clone(),
        company_name,
        registration_number,
        issued_at,
        expiration_date,
        metadata_uri,
        active: true,
    };

    set_state(env, id, &CertificateState::Active(certificate.clone()));
    env.storage().instance().set(&RegistryKey::NextId, &(id + 1));

    set_live_count(env, &holder, live_count(env, &holder) + 1);
    let mut ids = holder_certificates(env, &holder);
    ids.push_back(id);
    set_holder_certificates(env, &holder, &ids);
    extend_instance_ttl(env);

    Ok(certificate)
}

/// Extend an active certificate's expiration by `additional_days`.
///
/// The extension is added to the stored expiration, not to the current
/// time, so a lapsed certificate keeps its schedule. Returns the new
/// expiration.
pub fn renew(env: &Env, id: u64, additional_days: u64) -> Result<u64, CertificateError> {
    let extension = days_to_seconds(additional_days)?;
    let mut certificate = get_active(env, id)?;

    certificate.expiration_date = certificate
        .expiration_date
        .checked_add(extension)
        .ok_or(CertificateError::InvalidInput)?;
    let new_expiration = certificate.expiration_date;
    set_state(env, id, &CertificateState::Active(certificate));
    extend_instance_ttl(env);

    Ok(new_expiration)
}

/// Revoke an active certificate. Revoking twice is `NotFound`.
pub fn revoke(env: &Env, id: u64, reason: String) -> Result<Revocation, CertificateError> {
    let mut certificate = get_active(env, id)?;
    certificate.active = false;

    let holder = certificate.holder.clone();
    let revocation = Revocation {
        reason,
        revoked_at: env.ledger().timestamp(),
    };
    set_state(
        env,
        id,
        &CertificateState::Revoked(certificate, revocation.clone()),
    );

    // Every active certificate was counted at issuance.
    set_live_count(env, &holder, live_count(env, &holder).saturating_sub(1));
    let ids = holder_certificates(env, &holder);
    let mut remaining = Vec::new(env);
    for held in ids.iter() {
        if held != id {
            remaining.push_back(held);
        }
    }
    set_holder_certificates(env, &holder, &remaining);
    extend_instance_ttl(env);

    Ok(revocation)
}

/// `true` iff `id` is active and `now < expiration_date`. Never fails.
pub fn is_valid(env: &Env, id: u64) -> bool {
    match get_state(env, id) {
        Some(CertificateState::Active(certificate)) => {
            env.ledger().timestamp() < certificate.expiration_date
        }
        _ => false,
    }
}

pub fn live_count(env: &Env, holder: &Address) -> u64 {
    env.storage()
        .instance()
        .get(&RegistryKey::LiveCount(holder.clone()))
        .unwrap_or(0)
}

pub fn holder_certificates(env: &Env, holder: &Address) -> Vec<u64> {
    env.storage()
        .instance()
        .get(&RegistryKey::HolderCertificates(holder.clone()))
        .unwrap_or_else(|| Vec::new(env))
}

/// Revocation audit entry for `id`, if it was ever revoked.
pub fn get_revocation(env: &Env, id: u64) -> Option<Revocation> {
    match get_state(env, id) {
        Some(CertificateState::Revoked(_, revocation)) => Some(revocation),
        _ => None,
    }
}
