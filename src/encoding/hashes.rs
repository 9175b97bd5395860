//! Canonical message hash builders.
//!
//! One pure function per message kind. Each assembles the exact, versioned,
//! ordered field list the on-chain verifier recomputes and delegates to
//! [`pack_and_hash`]. The lists are fixed by protocol version: fields must
//! never be reordered, extended or omitted, even when optional in the domain
//! model - absent optionals encode as sentinel defaults (empty string, zero)
//! so that an absent field and an explicit default hash identically.
//!
//! Note the quantity asymmetry: order hashes cover the RAW decimal strings,
//! because the verifier re-parses the decimal strings it receives alongside
//! the signature. The pip-converted values only appear in the argument
//! structs (see [`super::args`]). Do not "fix" this.

use super::fields::{pack_and_hash, Field};
use crate::error::Result;
use crate::types::nonce::nonce_to_u128;
use crate::types::{
    AssetReference, LiquidityAddition, LiquidityChangeOrigination, LiquidityChangeType,
    LiquidityRemoval, Order, Withdrawal,
};

/// The signature-hash layout version this library implements end to end.
///
/// Messages carrying another version still hash (the version byte is part
/// of the packed fields); the mismatch is a contract-level rejection, not
/// caught here.
pub const SIGNATURE_HASH_VERSION: u8 = 2;

/// Compute the signable hash of an order.
///
/// # Errors
///
/// [`crate::Error::MalformedIdentifier`] if the nonce is not canonical.
pub fn order_hash(order: &Order) -> Result<[u8; 32]> {
    let fields = [
        Field::Uint8(order.signature_hash_version),
        Field::Uint128(nonce_to_u128(&order.nonce)?),
        Field::Address(order.wallet),
        Field::Str(order.market.clone()),
        Field::Uint8(order.order_type.to_u8()),
        Field::Uint8(order.side.to_u8()),
        Field::Str(order.quantity.clone()),
        Field::Bool(order.is_quantity_in_quote),
        Field::Str(order.price.clone().unwrap_or_default()),
        Field::Str(order.stop_price.clone().unwrap_or_default()),
        Field::Str(order.client_order_id.clone().unwrap_or_default()),
        Field::Uint8(order.time_in_force.map_or(0, |t| t.to_u8())),
        Field::Uint8(order.self_trade_prevention.map_or(0, |s| s.to_u8())),
        Field::Uint64(order.cancel_after.unwrap_or(0)),
    ];
    Ok(pack_and_hash(&fields))
}

/// Compute the signable hash of a withdrawal.
///
/// The asset is encoded as either its symbol string or its contract
/// address, chosen by field presence. The auto-dispatch flag is always
/// hashed as `true` regardless of its struct-level setting; the contract
/// fixes it at the same value when recomputing.
///
/// # Errors
///
/// [`crate::Error::AmbiguousAssetReference`] if both or neither asset
/// fields are set; [`crate::Error::MalformedIdentifier`] for a bad nonce.
pub fn withdrawal_hash(withdrawal: &Withdrawal) -> Result<[u8; 32]> {
    let asset_field = match withdrawal.asset_reference()? {
        AssetReference::Symbol(symbol) => Field::Str(symbol.to_string()),
        AssetReference::Contract(address) => Field::Address(address),
    };
    let fields = [
        Field::Uint128(nonce_to_u128(&withdrawal.nonce)?),
        Field::Address(withdrawal.wallet),
        asset_field,
        Field::Str(withdrawal.quantity.clone()),
        Field::Bool(true), // auto-dispatch is fixed in the hash
    ];
    Ok(pack_and_hash(&fields))
}

/// Compute the signable hash of a liquidity addition.
///
/// Client-signed changes always carry off-chain origination; on-chain
/// originated changes never pass through this builder.
pub fn liquidity_addition_hash(addition: &LiquidityAddition) -> Result<[u8; 32]> {
    let fields = [
        Field::Uint8(addition.signature_hash_version),
        Field::Uint8(LiquidityChangeType::Addition.to_u8()),
        Field::Uint8(LiquidityChangeOrigination::OffChain.to_u8()),
        Field::Uint128(nonce_to_u128(&addition.nonce)?),
        Field::Address(addition.wallet),
        Field::Address(addition.asset_a),
        Field::Address(addition.asset_b),
        Field::Uint256(addition.amount_a_desired),
        Field::Uint256(addition.amount_b_desired),
        Field::Uint256(addition.amount_a_min),
        Field::Uint256(addition.amount_b_min),
        Field::Address(addition.to),
        Field::Str(addition.deadline.to_string()),
    ];
    Ok(pack_and_hash(&fields))
}

/// Compute the signable hash of a liquidity removal.
pub fn liquidity_removal_hash(removal: &LiquidityRemoval) -> Result<[u8; 32]> {
    let fields = [
        Field::Uint8(removal.signature_hash_version),
        Field::Uint8(LiquidityChangeType::Removal.to_u8()),
        Field::Uint8(LiquidityChangeOrigination::OffChain.to_u8()),
        Field::Uint128(nonce_to_u128(&removal.nonce)?),
        Field::Address(removal.wallet),
        Field::Address(removal.asset_a),
        Field::Address(removal.asset_b),
        Field::Uint256(removal.liquidity),
        Field::Uint256(removal.amount_a_min),
        Field::Uint256(removal.amount_b_min),
        Field::Address(removal.to),
        Field::Str(removal.deadline.to_string()),
    ];
    Ok(pack_and_hash(&fields))
}

// ============================================================================
// Unit Tests
// ============================================================================
