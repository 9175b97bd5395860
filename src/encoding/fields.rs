//! Typed-field packing and hashing.
//!
//! ## Tight packing
//!
//! The on-chain verifier hashes `abi.encodePacked(...)` output: each field's
//! raw bytes concatenated in order with NO padding and NO length prefixes.
//! This is deliberately not the padded 32-byte-slot ABI encoding - packing
//! with the wrong convention silently produces a different, non-matching
//! digest, which is the single most dangerous failure mode in this crate.
//!
//! ## Field widths
//!
//! | Field     | Bytes | Encoding                       |
//! |-----------|-------|--------------------------------|
//! | Uint8     | 1     | as-is                          |
//! | Uint64    | 8     | big-endian                     |
//! | Uint128   | 16    | big-endian                     |
//! | Uint256   | 32    | big-endian                     |
//! | Bool      | 1     | 0 or 1                         |
//! | Address   | 20    | raw bytes                      |
//! | Str       | n     | raw UTF-8, no length prefix    |
//!
//! The field enumeration is closed: a tag outside it cannot be constructed,
//! so there is no unsupported-type error path.

use primitive_types::{H160, U256};
use sha3::{Digest, Keccak256};

/// One typed field of a canonical message encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Field {
    Uint8(u8),
    Uint64(u64),
    Uint128(u128),
    Uint256(U256),
    Bool(bool),
    Address(H160),
    Str(String),
}

impl Field {
    /// Append this field's packed bytes to `out`.
    pub fn pack_into(&self, out: &mut Vec<u8>) {
        match self {
            Field::Uint8(v) => out.push(*v),
            Field::Uint64(v) => out.extend_from_slice(&v.to_be_bytes()),
            Field::Uint128(v) => out.extend_from_slice(&v.to_be_bytes()),
            Field::Uint256(v) => out.extend_from_slice(&v.to_big_endian()),
            Field::Bool(v) => out.push(u8::from(*v)),
            Field::Address(v) => out.extend_from_slice(v.as_bytes()),
            Field::Str(v) => out.extend_from_slice(v.as_bytes()),
        }
    }

    /// Packed width in bytes.
    pub fn packed_len(&self) -> usize {
        match self {
            Field::Uint8(_) | Field::Bool(_) => 1,
            Field::Uint64(_) => 8,
            Field::Uint128(_) => 16,
            Field::Uint256(_) => 32,
            Field::Address(_) => 20,
            Field::Str(v) => v.len(),
        }
    }
}

/// Tightly pack `fields` in order.
pub fn pack(fields: &[Field]) -> Vec<u8> {
    let len = fields.iter().map(Field::packed_len).sum();
    let mut out = Vec::with_capacity(len);
    for field in fields {
        field.pack_into(&mut out);
    }
    out
}

/// Tightly pack `fields` and keccak-256 the concatenation.
///
/// Total and deterministic: identical input always yields the identical
/// 32-byte digest, and any reordering changes it.
///
/// # Example
///
/// ```
/// use dex_signing::encoding::{pack_and_hash, Field};
///
/// let digest = pack_and_hash(&[Field::Uint8(2), Field::Str("ETH-USDC".into())]);
/// assert_eq!(digest, pack_and_hash(&[Field::Uint8(2), Field::Str("ETH-USDC".into())]));
/// ```
pub fn pack_and_hash(fields: &[Field]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(pack(fields));
    hasher.finalize().into()
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_widths() {
        assert_eq!(pack(&[Field::Uint8(0xab)]), vec![0xab]);
        assert_eq!(
            pack(&[Field::Uint64(1)]),
            vec![0, 0, 0, 0, 0, 0, 0, 1],
        );
        assert_eq!(pack(&[Field::Uint128(1)]).len(), 16);
        assert_eq!(pack(&[Field::Uint256(U256::one())]).len(), 32);
        assert_eq!(pack(&[Field::Bool(true)]), vec![1]);
        assert_eq!(pack(&[Field::Bool(false)]), vec![0]);
        assert_eq!(pack(&[Field::Address(H160::repeat_byte(0x11))]).len(), 20);
    }

    #[test]
    fn test_pack_big_endian() {
        let bytes = pack(&[Field::Uint64(0x0102030405060708)]);
        assert_eq!(bytes, vec![1, 2, 3, 4, 5, 6, 7, 8]);

        let bytes = pack(&[Field::Uint256(U256::from(0xdeadbeefu64))]);
        assert_eq!(&bytes[28..], &[0xde, 0xad, 0xbe, 0xef]);
        assert!(bytes[..28].iter().all(|b| *b == 0));
    }

    #[test]
    fn test_pack_string_no_length_prefix() {
        assert_eq!(pack(&[Field::Str("ETH".into())]), b"ETH".to_vec());
        assert_eq!(pack(&[Field::Str(String::new())]), Vec::<u8>::new());
    }

    #[test]
    fn test_pack_no_padding_between_fields() {
        let bytes = pack(&[
            Field::Uint8(1),
            Field::Str("AB".into()),
            Field::Bool(true),
        ]);
        assert_eq!(bytes, vec![1, b'A', b'B', 1]);
    }

    #[test]
    fn test_keccak_known_vectors() {
        // keccak256("") - the canonical empty-input vector.
        assert_eq!(
            hex::encode(pack_and_hash(&[])),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470",
        );
        // keccak256("abc")
        assert_eq!(
            hex::encode(pack_and_hash(&[Field::Str("abc".into())])),
            "4e03657aea45a94fc7d47ba826c8d667c0d1e6e33a64a036ec44f58fa12d6c45",
        );
    }

    #[test]
    fn test_hash_is_order_sensitive() {
        let a = pack_and_hash(&[Field::Uint8(1), Field::Uint8(2)]);
        let b = pack_and_hash(&[Field::Uint8(2), Field::Uint8(1)]);
        assert_ne!(a, b);
    }

    #[test]
    fn test_tight_packing_collision_documents_convention() {
        // A u8 packs to one byte, so [u8(0), str("A")] and [str("\0A")]
        // collide under tight packing but a padded encoding would separate
        // them. The convention is pinned by the verifier; this documents it.
        let a = pack_and_hash(&[Field::Uint8(0), Field::Str("A".into())]);
        let b = pack_and_hash(&[Field::Str("\u{0}A".into())]);
        assert_eq!(a, b);
    }
}
