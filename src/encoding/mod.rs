//! Canonical encoding: typed-field packing, message hashes, call arguments.
//!
//! ## Pipeline
//!
//! A signed message flows through this module twice, along two parallel
//! paths that must never be merged:
//!
//! 1. [`hashes`]: message -> ordered typed fields -> tightly packed bytes
//!    -> keccak-256 digest, the payload the wallet signs.
//! 2. [`args`]: message + signature -> the ordered struct the on-chain
//!    entry point takes, with quantities pip-converted.
//!
//! The verifier recomputes path 1 from the fields delivered by path 2, so
//! any disagreement between the two (field order, widths, rounding) makes
//! the chain reject an apparently well-signed message.

mod args;
mod fields;
mod hashes;

pub use args::{
    liquidity_addition_to_args, liquidity_removal_to_args, order_to_args, split_market_symbol,
    trade_call_args, trade_to_args, withdrawal_to_args, LiquidityAdditionArgs,
    LiquidityRemovalArgs, OrderArgs, TradeArgs, WithdrawalArgs, MARKET_SYMBOL_SEPARATOR,
};
pub use fields::{pack, pack_and_hash, Field};
pub use hashes::{
    liquidity_addition_hash, liquidity_removal_hash, order_hash, withdrawal_hash,
    SIGNATURE_HASH_VERSION,
};
