//! # Certificate Registry Errors
//!
//! Every failing call reports exactly one of these codes to the immediate
//! caller. A failed invocation commits nothing.

use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum CertificateError {
    /// Caller is not the registry Authority.
    Unauthorized = 1,
    /// Certificate id was never issued, or has been revoked.
    NotFound = 2,
    /// Malformed argument: invalid holder, zero day count, or a day count
    /// whose timestamp arithmetic overflows.
    InvalidInput = 3,
}
