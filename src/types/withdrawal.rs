//! Withdrawal message type.
//!
//! A withdrawal names the asset to withdraw either by exchange symbol or by
//! token contract address - exactly one of the two. Both builders (hash and
//! on-chain arguments) branch on the same presence rule, so the check lives
//! here on the message itself.

use primitive_types::H160;

use crate::error::{Error, Result};

/// The asset-reference form a withdrawal resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetReference<'a> {
    /// Withdraw by exchange asset symbol (e.g. `"USDC"`)
    Symbol(&'a str),
    /// Withdraw by token contract address
    Contract(H160),
}

/// A client withdrawal request, as assembled for signing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Withdrawal {
    /// Time-ordered UUID string in canonical dashed form
    pub nonce: String,

    /// Signing wallet address
    pub wallet: H160,

    /// Asset symbol; mutually exclusive with `asset_contract_address`
    pub asset_symbol: Option<String>,

    /// Token contract address; mutually exclusive with `asset_symbol`
    pub asset_contract_address: Option<H160>,

    /// Gross quantity to withdraw, as a decimal string
    pub quantity: String,

    /// Whether settlement dispatches automatically. Configurable on the
    /// struct, but the signature hash always encodes `true`.
    pub auto_dispatch_enabled: bool,
}

impl Withdrawal {
    /// Create a withdrawal by asset symbol.
    pub fn by_symbol(nonce: &str, wallet: H160, asset_symbol: &str, quantity: &str) -> Self {
        Self {
            nonce: nonce.to_string(),
            wallet,
            asset_symbol: Some(asset_symbol.to_string()),
            asset_contract_address: None,
            quantity: quantity.to_string(),
            auto_dispatch_enabled: true,
        }
    }

    /// Create a withdrawal by token contract address.
    pub fn by_contract(nonce: &str, wallet: H160, asset: H160, quantity: &str) -> Self {
        Self {
            nonce: nonce.to_string(),
            wallet,
            asset_symbol: None,
            asset_contract_address: Some(asset),
            quantity: quantity.to_string(),
            auto_dispatch_enabled: true,
        }
    }

    /// Resolve which of the two asset-reference fields is present.
    ///
    /// # Errors
    ///
    /// [`Error::AmbiguousAssetReference`] when both or neither are set.
    pub fn asset_reference(&self) -> Result<AssetReference<'_>> {
        match (&self.asset_symbol, self.asset_contract_address) {
            (Some(symbol), None) => Ok(AssetReference::Symbol(symbol)),
            (None, Some(contract)) => Ok(AssetReference::Contract(contract)),
            _ => Err(Error::AmbiguousAssetReference),
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
