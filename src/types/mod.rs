//! Domain message types and quantity representations.
//!
//! ## Types
//!
//! - [`Order`]: a signed order request (quantities as decimal strings)
//! - [`Withdrawal`]: a signed withdrawal, by symbol or contract address
//! - [`LiquidityAddition`] / [`LiquidityRemoval`]: signed pool changes
//! - [`Trade`]: externally-supplied fill data for settlement calls
//!
//! ## Quantity representations
//!
//! [`pips`] converts among decimal strings, 10^8-scaled pip integers, and
//! native token units; [`nonce`] encodes the dashed-UUID message nonces.

mod liquidity;
mod order;
mod trade;
mod withdrawal;

pub mod nonce;
pub mod pips;

// Re-export all types at module level
pub use liquidity::{
    LiquidityAddition, LiquidityChangeOrigination, LiquidityChangeType, LiquidityRemoval,
};
pub use order::{Order, OrderType, SelfTradePrevention, Side, TimeInForce};
pub use trade::Trade;
pub use withdrawal::{AssetReference, Withdrawal};
