#![no_std]
//! # Fair-Trade Certificate Registry
//!
//! Issues, renews and revokes non-transferable certificates attesting a
//! company's fair-trade compliance. Each certificate is bound to one holder
//! and carries an expiration timestamp; validity is recomputed from the
//! ledger time on every read.
//!
//! Only the Authority, fixed at deployment, may mutate the registry.
//! Reads are open to anyone.

use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};

pub mod access_control;
pub mod errors;
pub mod events;
pub mod registry;

pub use errors::CertificateError;
pub use events::{CertificateIssuedEvent, CertificateRenewedEvent, CertificateRevokedEvent};
pub use registry::{Certificate, CertificateState, Revocation, SECONDS_PER_DAY};

#[cfg(test)]
mod events_test;

pub const COLLECTION_NAME: &str = "FairTradeCertificate";
pub const COLLECTION_SYMBOL: &str = "FTC";

#[contract]
pub struct CertificateRegistry;

#[contractimpl]
impl CertificateRegistry {
    // ── Construction ────────────────────────────────────────────────

    /// Runs once, atomically with deployment. Fixes the Authority for the
    /// lifetime of the registry; there is no way to reassign it.
    pub fn __constructor(env: Env, authority: Address) {
        access_control::set_authority(&env, &authority);
        registry::extend_instance_ttl(&env);
        events::emit_initialized(&env, &authority);
    }

    // ── Authority operations ────────────────────────────────────────

    /// Issue a certificate to `holder` valid for `validity_days` from now.
    ///
    /// Returns the new id, which is greater than every id issued before it.
    ///
    /// Errors:
    /// - `Unauthorized` if `caller` is not the Authority
    /// - `InvalidInput` if `holder` is the registry itself or
    ///   `validity_days` is 0
    pub fn issue(
        env: Env,
        caller: Address,
        holder: Address,
        company_name: String,
        registration_number: String,
        validity_days: u64,
        metadata_uri: String,
    ) -> Result<u64, CertificateError> {
        access_control::require_authority(&env, &caller)?;

        let certificate = registry::issue(
            &env,
            holder,
            company_name,
            registration_number,
            validity_days,
            metadata_uri,
        )?;

        events::emit_certificate_issued(
            &env,
            certificate.id,
            &certificate.holder,
            &certificate.company_name,
            certificate.expiration_date,
        );
        Ok(certificate.id)
    }

    /// Extend a live certificate by `additional_days`, counted from its
    /// current expiration rather than from now.
    pub fn renew(
        env: Env,
        caller: Address,
        id: u64,
        additional_days: u64,
    ) -> Result<(), CertificateError> {
        access_control::require_authority(&env, &caller)?;
        let new_expiration = registry::renew(&env, id, additional_days)?;
        events::emit_certificate_renewed(&env, id, new_expiration);
        Ok(())
    }

    /// Permanently revoke a live certificate.
    ///
    /// The record disappears from `get_info`; `reason` and the revocation
    /// time stay queryable through `get_revocation`. Revoking an already
    /// revoked id is `NotFound`.
    pub fn revoke(
        env: Env,
        caller: Address,
        id: u64,
        reason: String,
    ) -> Result<(), CertificateError> {
        access_control::require_authority(&env, &caller)?;
        let revocation = registry::revoke(&env, id, reason)?;
        events::emit_certificate_revoked(&env, id, &revocation.reason);
        Ok(())
    }

    // ── Read-only queries ───────────────────────────────────────────

    /// Full record of a live certificate.
    pub fn get_info(env: Env, id: u64) -> Result<Certificate, CertificateError> {
        registry::get_active(&env, id)
    }

    /// Whether `id` is live and unexpired at the current ledger time.
    /// Unknown ids are simply invalid.
    pub fn is_valid(env: Env, id: u64) -> bool {
        registry::is_valid(&env, id)
    }

    /// Number of live certificates owned by `holder`.
    pub fn live_certificate_count(env: Env, holder: Address) -> u64 {
        registry::live_count(&env, &holder)
    }

    pub fn balance_of(env: Env, holder: Address) -> u64 {
        registry::live_count(&env, &holder)
    }

    /// Ids of the holder's live certificates, oldest first.
    pub fn get_holder_certificates(env: Env, holder: Address) -> Vec<u64> {
        registry::holder_certificates(&env, &holder)
    }

    pub fn owner_of(env: Env, id: u64) -> Result<Address, CertificateError> {
        registry::get_active(&env, id).map(|c| c.holder)
    }

    pub fn metadata_uri(env: Env, id: u64) -> Result<String, CertificateError> {
        registry::get_active(&env, id).map(|c| c.metadata_uri)
    }

    /// Number of ids ever allocated, revoked ones included.
    pub fn total_issued(env: Env) -> u64 {
        registry::next_id(&env)
    }

    pub fn is_revoked(env: Env, id: u64) -> bool {
        registry::get_revocation(&env, id).is_some()
    }

    /// Revocation audit entry for `id`, or `None` if it was never revoked.
    pub fn get_revocation(env: Env, id: u64) -> Option<Revocation> {
        registry::get_revocation(&env, id)
    }

    pub fn get_authority(env: Env) -> Address {
        access_control::get_authority(&env)
    }

    pub fn name(env: Env) -> String {
        String::from_str(&env, COLLECTION_NAME)
    }

    pub fn symbol(env: Env) -> String {
        String::from_str(&env, COLLECTION_SYMBOL)
    }
}
