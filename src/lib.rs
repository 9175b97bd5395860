//! # dex-signing
//!
//! Off-chain companion library for a hybrid on-chain exchange: produces,
//! byte for byte, the canonical packed encodings and keccak-256 digests the
//! on-chain verifier recomputes from signed client messages, and converts
//! quantities among their three representations (decimal strings, 10^8
//! "pip" integers, native token units).
//!
//! ## Architecture
//!
//! - **Types**: domain messages (Order, Withdrawal, liquidity changes) plus
//!   pip and nonce conversions
//! - **Encoding**: typed-field tight packing, per-message hash builders,
//!   on-chain argument struct builders
//! - **Contracts**: injected read-mostly store of compiled artifacts
//!
//! ## Design Principles
//!
//! 1. **Byte fidelity**: field order, widths and rounding match the
//!    verifier exactly; any deviation is a rejected signature
//! 2. **No Floating Point**: all quantity math runs on decimal strings and
//!    U256 integers, truncating toward zero
//! 3. **Pure and stateless**: every encoding operation is a synchronous
//!    function of its inputs (the artifact cache is the one read-mostly
//!    exception)
//! 4. **Errors are defects**: every failure reflects a caller programming
//!    error; nothing is retried, swallowed or defaulted

// ============================================================================
// Module declarations
// ============================================================================

/// Domain messages and quantity/nonce conversions
pub mod types;

/// Typed-field packing, message hashes, argument structs
pub mod encoding;

/// Compiled-contract artifact store
pub mod contracts;

/// Crate-wide error type
pub mod error;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use encoding::{
    liquidity_addition_hash, liquidity_removal_hash, order_hash, withdrawal_hash,
    SIGNATURE_HASH_VERSION,
};
pub use error::{Error, Result};
pub use types::{
    LiquidityAddition, LiquidityRemoval, Order, OrderType, Side, Trade, Withdrawal,
};
