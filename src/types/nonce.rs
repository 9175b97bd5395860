//! Nonce (identifier) encoding.
//!
//! Every signed message carries a time-ordered 128-bit nonce, presented as a
//! canonical dashed UUID string (8-4-4-4-12). The hash builders encode the
//! nonce as its raw 16 big-endian bytes; the argument builders pass it to the
//! chain as a `uint128`. Both forms are derived here.
//!
//! Validation is strict: anything other than the 36-character dashed form
//! rejects, so a nonce that hashes correctly is guaranteed to re-parse the
//! same way on every host.

use uuid::Uuid;

use crate::error::{Error, Result};

/// Byte width of a raw nonce.
pub const NONCE_BYTES: usize = 16;

/// Convert a canonical dashed UUID string to its raw 16-byte big-endian form.
///
/// # Errors
///
/// [`Error::MalformedIdentifier`] unless the input is exactly 36 characters
/// with dashes at positions 8, 13, 18 and 23 and hex digits everywhere else.
///
/// # Example
///
/// ```
/// use dex_signing::types::nonce::nonce_to_bytes;
///
/// let bytes = nonce_to_bytes("c2c6ed6e-1d1b-11eb-adc1-0242ac120002").unwrap();
/// assert_eq!(bytes[0], 0xc2);
/// assert_eq!(bytes.len(), 16);
/// ```
pub fn nonce_to_bytes(nonce: &str) -> Result<[u8; NONCE_BYTES]> {
    validate_canonical_form(nonce)?;
    let uuid = Uuid::parse_str(nonce)
        .map_err(|_| Error::MalformedIdentifier(nonce.to_string()))?;
    Ok(*uuid.as_bytes())
}

/// Render a nonce as a compact `0x`-prefixed hex string (no separators).
///
/// # Example
///
/// ```
/// use dex_signing::types::nonce::nonce_to_hex;
///
/// assert_eq!(
///     nonce_to_hex("c2c6ed6e-1d1b-11eb-adc1-0242ac120002").unwrap(),
///     "0xc2c6ed6e1d1b11ebadc10242ac120002",
/// );
/// ```
pub fn nonce_to_hex(nonce: &str) -> Result<String> {
    let bytes = nonce_to_bytes(nonce)?;
    Ok(format!("0x{}", hex::encode(bytes)))
}

/// Interpret a nonce as the big-endian `uint128` the on-chain structs carry.
pub fn nonce_to_u128(nonce: &str) -> Result<u128> {
    let bytes = nonce_to_bytes(nonce)?;
    Ok(u128::from_be_bytes(bytes))
}

/// Reject anything that is not the exact canonical dashed form.
///
/// `Uuid::parse_str` alone also accepts braced, URN and separator-free
/// inputs; those must not hash, so the shape is pinned first.
fn validate_canonical_form(nonce: &str) -> Result<()> {
    let bytes = nonce.as_bytes();
    if bytes.len() != 36 {
        return Err(Error::MalformedIdentifier(nonce.to_string()));
    }
    for (i, &b) in bytes.iter().enumerate() {
        let ok = match i {
            8 | 13 | 18 | 23 => b == b'-',
            _ => b.is_ascii_hexdigit(),
        };
        if !ok {
            return Err(Error::MalformedIdentifier(nonce.to_string()));
        }
    }
    Ok(())
}

// ============================================================================
// Unit Tests
// ============================================================================
