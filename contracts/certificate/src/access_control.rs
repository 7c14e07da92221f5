//! # Authority Access Control
//!
//! The registry has exactly one privileged principal, the Authority. It is
//! passed to the contract constructor at deployment and cannot be
//! reassigned afterwards.
//!
//! ## Security Model
//!
//! - Issue, Renew and Revoke call [`require_authority`] before touching state
//! - The caller must both authorize the invocation and equal the stored
//!   Authority
//! - Read operations are open to any caller

use soroban_sdk::{contracttype, Address, Env};

use crate::errors::CertificateError;

/// Storage keys for access control
#[contracttype]
#[derive(Clone)]
pub enum AccessControlKey {
    /// The single privileged principal.
    Authority,
}

// ════════════════════════════════════════════════════════════════════
//  Authority Storage
// ════════════════════════════════════════════════════════════════════

/// Get the Authority. Always present once the contract is deployed.
pub fn get_authority(env: &Env) -> Address {
    env.storage()
        .instance()
        .get(&AccessControlKey::Authority)
        .expect("authority not set")
}

/// Store the Authority. Only the constructor calls this.
pub fn set_authority(env: &Env, authority: &Address) {
    env.storage()
        .instance()
        .set(&AccessControlKey::Authority, authority);
}

// ════════════════════════════════════════════════════════════════════
//  Authorization Helpers
// ════════════════════════════════════════════════════════════════════

/// Capability comparison: is `account` the Authority?
pub fn is_authority(env: &Env, account: &Address) -> bool {
    get_authority(env) == *account
}

/// Require that the caller is the Authority.
///
/// The caller must authorize the invocation; a caller that does not match
/// the stored Authority gets `Unauthorized`.
pub fn require_authority(env: &Env, caller: &Address) -> Result<(), CertificateError> {
    caller.require_auth();
    if !is_authority(env, caller) {
        return Err(CertificateError::Unauthorized);
    }
    Ok(())
}
