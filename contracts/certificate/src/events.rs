//! # Structured Event Emissions for Certificates
//!
//! Append-only notifications consumed by off-chain indexers. The registry
//! never reads its own events back.
//!
//! ## Event Types
//!
//! | Event                | Topic key | Description                          |
//! |----------------------|-----------|--------------------------------------|
//! | Initialized          | -         | Registry deployed with its Authority |
//! | CertificateIssued    | holder    | New certificate issued to a holder   |
//! | CertificateRenewed   | id        | Expiration extended                  |
//! | CertificateRevoked   | id        | Certificate permanently invalidated  |

use soroban_sdk::{contracttype, symbol_short, Address, Env, String, Symbol};

// ════════════════════════════════════════════════════════════════════
//  Event Topics
// ════════════════════════════════════════════════════════════════════

/// Topic for the event published once at deployment
pub const TOPIC_INITIALIZED: Symbol = symbol_short!("init");
/// Topic for certificate issuance events
pub const TOPIC_CERTIFICATE_ISSUED: Symbol = symbol_short!("cert_iss");
/// Topic for certificate renewal events
pub const TOPIC_CERTIFICATE_RENEWED: Symbol = symbol_short!("cert_ren");
/// Topic for certificate revocation events
pub const TOPIC_CERTIFICATE_REVOKED: Symbol = symbol_short!("cert_rev");

// ════════════════════════════════════════════════════════════════════
//  Event Data Structures
// ════════════════════════════════════════════════════════════════════

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct InitializedEvent {
    pub authority: Address,
}

/// Event data for certificate issuance
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct CertificateIssuedEvent {
    /// Newly allocated certificate id
    pub id: u64,
    /// Holder the certificate is bound to
    pub holder: Address,
    /// Certified company name
    pub company_name: String,
    /// Expiration timestamp (seconds)
    pub expiration_date: u64,
}

/// Event data for certificate renewal
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct CertificateRenewedEvent {
    pub id: u64,
    /// Expiration timestamp after the extension
    pub new_expiration_date: u64,
}

/// Event data for certificate revocation
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct CertificateRevokedEvent {
    pub id: u64,
    pub reason: String,
}

// ════════════════════════════════════════════════════════════════════
//  Event Emission Functions
// ════════════════════════════════════════════════════════════════════

pub fn emit_initialized(env: &Env, authority: &Address) {
    let event = InitializedEvent {
        authority: authority.clone(),
    };
    env.events().publish((TOPIC_INITIALIZED,), event);
}

/// Emit a certificate issued event.
///
/// Keyed by holder so indexers can follow every certificate a company
/// has been granted.
pub fn emit_certificate_issued(
    env: &Env,
    id: u64,
    holder: &Address,
    company_name: &String,
    expiration_date: u64,
) {
    let event = CertificateIssuedEvent {
        id,
        holder: holder.clone(),
        company_name: company_name.clone(),
        expiration_date,
    };
    env.events()
        .publish((TOPIC_CERTIFICATE_ISSUED, holder.clone()), event);
}

/// Emit a certificate renewed event.
pub fn emit_certificate_renewed(env: &Env, id: u64, new_expiration_date: u64) {
    let event = CertificateRenewedEvent {
        id,
        new_expiration_date,
    };
    env.events().publish((TOPIC_CERTIFICATE_RENEWED, id), event);
}

/// Emit a certificate revoked event.
///
/// Carries the revocation reason so the audit trail survives off-chain
/// even though the record is no longer returned by `get_info`.
pub fn emit_certificate_revoked(env: &Env, id: u64, reason: &String) {
    let event = CertificateRevokedEvent {
        id,
        reason: reason.clone(),
    };
    env.events().publish((TOPIC_CERTIFICATE_REVOKED, id), event);
}
