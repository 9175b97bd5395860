//! Liquidity-change message types.
//!
//! Additions and removals share a versioned envelope (change type,
//! origination, nonce, wallet, asset pair) and differ only in their numeric
//! payload. Amounts here are native-unit integers (`U256`), not decimal
//! strings - pool amounts are exchanged with the chain in the token's own
//! precision, unlike order quantities.

use primitive_types::{H160, U256};

// ============================================================================
// LiquidityChangeType enum
// ============================================================================

/// Whether a liquidity change adds to or removes from a pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiquidityChangeType {
    Addition,
    Removal,
}

impl LiquidityChangeType {
    /// Convert to the on-chain u8 discriminant
    pub fn to_u8(self) -> u8 {
        match self {
            LiquidityChangeType::Addition => 0,
            LiquidityChangeType::Removal => 1,
        }
    }

    /// Convert from the on-chain u8 discriminant
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(LiquidityChangeType::Addition),
            1 => Some(LiquidityChangeType::Removal),
            _ => None,
        }
    }
}

// ============================================================================
// LiquidityChangeOrigination enum
// ============================================================================

/// Where a liquidity change originated.
///
/// Client-signed messages are always off-chain; the on-chain variant exists
/// for requests submitted directly to the contract, which never pass
/// through this library's hash builders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LiquidityChangeOrigination {
    OnChain,
    OffChain,
}

impl LiquidityChangeOrigination {
    /// Convert to the on-chain u8 discriminant
    pub fn to_u8(self) -> u8 {
        match self {
            LiquidityChangeOrigination::OnChain => 0,
            LiquidityChangeOrigination::OffChain => 1,
        }
    }

    /// Convert from the on-chain u8 discriminant
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(LiquidityChangeOrigination::OnChain),
            1 => Some(LiquidityChangeOrigination::OffChain),
            _ => None,
        }
    }
}

// ============================================================================
// LiquidityAddition struct
// ============================================================================

/// A signed request to add liquidity to the pool for `(asset_a, asset_b)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiquidityAddition {
    pub signature_hash_version: u8,

    /// Time-ordered UUID string in canonical dashed form
    pub nonce: String,

    /// Signing wallet address
    pub wallet: H160,

    pub asset_a: H160,
    pub asset_b: H160,

    /// Desired deposit amounts, in each token's native units
    pub amount_a_desired: U256,
    pub amount_b_desired: U256,

    /// Slippage floors, in each token's native units
    pub amount_a_min: U256,
    pub amount_b_min: U256,

    /// Recipient of the minted pool tokens
    pub to: H160,

    /// Unix deadline timestamp in seconds
    pub deadline: u64,
}

// ============================================================================
// LiquidityRemoval struct
// ============================================================================

/// A signed request to burn pool tokens and withdraw the pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiquidityRemoval {
    pub signature_hash_version: u8,

    /// Time-ordered UUID string in canonical dashed form
    pub nonce: String,

    /// Signing wallet address
    pub wallet: H160,

    pub asset_a: H160,
    pub asset_b: H160,

    /// Pool-token amount to burn, in the pool token's native units
    pub liquidity: U256,

    /// Slippage floors, in each token's native units
    pub amount_a_min: U256,
    pub amount_b_min: U256,

    /// Recipient of the withdrawn assets
    pub to: H160,

    /// Unix deadline timestamp in seconds
    pub deadline: u64,
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_type_conversion() {
        assert_eq!(LiquidityChangeType::Addition.to_u8(), 0);
        assert_eq!(LiquidityChangeType::Removal.to_u8(), 1);
        assert_eq!(
            LiquidityChangeType::from_u8(0),
            Some(LiquidityChangeType::Addition),
        );
        assert_eq!(
            LiquidityChangeType::from_u8(1),
            Some(LiquidityChangeType::Removal),
        );
        assert_eq!(LiquidityChangeType::from_u8(2), None);
    }

    #[test]
    fn test_origination_conversion() {
        assert_eq!(LiquidityChangeOrigination::OnChain.to_u8(), 0);
        assert_eq!(LiquidityChangeOrigination::OffChain.to_u8(), 1);
        assert_eq!(LiquidityChangeOrigination::from_u8(2), None);
    }
}
