//! Error types for the signing/encoding library.
//!
//! Every failure here is synchronous and reflects a caller programming error,
//! never a transient condition - nothing in this crate is retried. None of
//! these are swallowed or defaulted: a silently-defaulted field would produce
//! a hash that looks valid but does not match the on-chain recomputation.

use thiserror::Error;

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// All errors surfaced by the encoding and conversion paths.
#[derive(Debug, Error)]
pub enum Error {
    /// A nonce string is not a canonical dashed UUID (8-4-4-4-12 hex).
    #[error("malformed identifier: {0:?}")]
    MalformedIdentifier(String),

    /// A quantity string is not a valid non-negative decimal numeral.
    #[error("invalid decimal quantity: {0:?}")]
    InvalidDecimal(String),

    /// A withdrawal names both or neither of its two mutually exclusive
    /// asset-reference fields.
    #[error("withdrawal must specify exactly one of asset symbol or asset contract address")]
    AmbiguousAssetReference,

    /// A market symbol does not split into exactly two non-empty parts on
    /// the base/quote separator.
    #[error("malformed market symbol: {0:?}")]
    MalformedMarketSymbol(String),

    /// A pip quantity does not fit the on-chain uint64 field.
    #[error("pip quantity {0:?} exceeds the on-chain uint64 range")]
    PipOverflow(String),

    /// A compiled-contract artifact could not be read.
    #[error("failed to read contract artifact {name:?}")]
    ArtifactIo {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// A compiled-contract artifact is not a valid `{ abi, bytecode }` record.
    #[error("failed to parse contract artifact {name:?}")]
    ArtifactParse {
        name: String,
        #[source]
        source: serde_json::Error,
    },
}
