//! End-to-end signing-path tests.
//!
//! These tests verify:
//! 1. Hash builders reproduce pinned keccak-256 vectors byte for byte
//! 2. The decimal/pip/native-unit conversion chain holds its invariants
//! 3. Hash and argument builders stay consistent over the same messages
//!
//! The pinned digests were computed independently from the packed field
//! layout; a change to field order, widths or sentinel defaults fails here
//! before it can produce signatures a verifier rejects.

use dex_signing::encoding::{
    liquidity_addition_hash, liquidity_removal_hash, order_hash, order_to_args,
    trade_call_args, withdrawal_hash, withdrawal_to_args, SIGNATURE_HASH_VERSION,
};
use dex_signing::types::nonce::{nonce_to_bytes, nonce_to_hex};
use dex_signing::types::pips::{
    asset_units_to_pips, decimal_to_asset_units, decimal_to_pips, pips_to_asset_units,
};
use dex_signing::types::{
    LiquidityAddition, LiquidityRemoval, Order, OrderType, Side, Trade, Withdrawal,
};
use primitive_types::{H160, U256};

// ============================================================================
// TEST CONSTANTS
// ============================================================================

/// Canonical v1 UUID nonce used across all vectors
const NONCE: &str = "c2c6ed6e-1d1b-11eb-adc1-0242ac120002";

fn wallet() -> H160 {
    H160::repeat_byte(0x11)
}

fn sample_order() -> Order {
    Order::new(
        NONCE,
        wallet(),
        "ETH-USDC",
        OrderType::Limit,
        Side::Buy,
        "1.50000000",
    )
}

// ============================================================================
// PINNED HASH VECTORS
// ============================================================================

#[test]
fn order_hash_matches_pinned_vector() {
    let digest = order_hash(&sample_order()).unwrap();
    assert_eq!(
        hex::encode(digest),
        "0b0a94361044930a57851baeab901ba2272304bfc4706904642adbca12e80b54",
    );
}

#[test]
fn withdrawal_hash_matches_pinned_vectors() {
    let by_symbol = Withdrawal::by_symbol(NONCE, wallet(), "USDC", "100");
    assert_eq!(
        hex::encode(withdrawal_hash(&by_symbol).unwrap()),
        "4d4295052cb3400c83ac39d3feb4db3aaba427b6b84818f763cf52a1fb7cd94e",
    );

    let by_contract = Withdrawal::by_contract(NONCE, wallet(), H160::repeat_byte(0xaa), "100");
    assert_eq!(
        hex::encode(withdrawal_hash(&by_contract).unwrap()),
        "3230f4238212d5bdb20d418f14918f03b3b717e3f4ab967f2abbff7b59c2f3a0",
    );
}

#[test]
fn liquidity_hashes_match_pinned_vectors() {
    let addition = LiquidityAddition {
        signature_hash_version: SIGNATURE_HASH_VERSION,
        nonce: NONCE.to_string(),
        wallet: wallet(),
        asset_a: H160::repeat_byte(0xaa),
        asset_b: H160::repeat_byte(0xbb),
        amount_a_desired: U256::from(1_000_000u64),
        amount_b_desired: U256::from(2_000_000u64),
        amount_a_min: U256::from(990_000u64),
        amount_b_min: U256::from(1_980_000u64),
        to: wallet(),
        deadline: 1_700_000_000,
    };
    assert_eq!(
        hex::encode(liquidity_addition_hash(&addition).unwrap()),
        "a13af24349d59daa03ebf6f6e9a5c3d9aae40fe12b6d4519202d9997bcbfc4a4",
    );

    let removal = LiquidityRemoval {
        signature_hash_version: SIGNATURE_HASH_VERSION,
        nonce: NONCE.to_string(),
        wallet: wallet(),
        asset_a: H160::repeat_byte(0xaa),
        asset_b: H160::repeat_byte(0xbb),
        liquidity: U256::from(500_000u64),
        amount_a_min: U256::from(990_000u64),
        amount_b_min: U256::from(1_980_000u64),
        to: wallet(),
        deadline: 1_700_000_000,
    };
    assert_eq!(
        hex::encode(liquidity_removal_hash(&removal).unwrap()),
        "1a0bc814496e199fe3749f91ab7a715c7ede76dbab0002bec5349427f9faf237",
    );
}

// ============================================================================
// CONVERSION INVARIANTS
// ============================================================================

#[test]
fn pip_conversion_identity_at_eight_decimals() {
    for d in ["0", "1", "0.00000001", "100", "50000.12345678"] {
        let pips = decimal_to_pips(d).unwrap();
        assert_eq!(pips_to_asset_units(&pips, 8).unwrap(), pips);
    }
}

#[test]
fn asset_units_to_pips_concrete_cases() {
    assert_eq!(asset_units_to_pips("100", 2).unwrap(), "100000000");
    assert_eq!(decimal_to_pips("100").unwrap(), "10000000000");
    assert_eq!(
        asset_units_to_pips("1000000000000000000000000000000000000000000", 18).unwrap(),
        "100000000000000000000000000000000",
    );
}

#[test]
fn composed_conversion_equals_two_stage_conversion() {
    for (decimal, decimals) in [("100", 2u8), ("1.23456789", 18), ("0.000000019", 9)] {
        let staged =
            pips_to_asset_units(&decimal_to_pips(decimal).unwrap(), decimals).unwrap();
        assert_eq!(decimal_to_asset_units(decimal, decimals).unwrap(), staged);
    }
}

#[test]
fn nonce_round_trips_through_compact_hex() {
    let stripped: String = NONCE.chars().filter(|c| *c != '-').collect();
    assert_eq!(nonce_to_hex(NONCE).unwrap(), format!("0x{stripped}"));
    assert_eq!(nonce_to_bytes(NONCE).unwrap().len(), 16);
}

// ============================================================================
// HASH/ARGUMENT CONSISTENCY
// ============================================================================

#[test]
fn hash_covers_decimal_strings_while_args_carry_pips() {
    // Same numeric value, different string form: hashes differ (the
    // verifier re-parses the raw string) while argument pips agree.
    let canonical = sample_order();
    let mut trimmed = sample_order();
    trimmed.quantity = "1.5".to_string();

    assert_ne!(
        order_hash(&canonical).unwrap(),
        order_hash(&trimmed).unwrap(),
    );
    assert_eq!(
        order_to_args(&canonical, &[]).unwrap().quantity_in_pips,
        order_to_args(&trimmed, &[]).unwrap().quantity_in_pips,
    );
}

#[test]
fn withdrawal_flag_configurable_in_args_fixed_in_hash() {
    let mut withdrawal = Withdrawal::by_symbol(NONCE, wallet(), "USDC", "100");
    withdrawal.auto_dispatch_enabled = false;

    // The struct keeps the caller's setting...
    let args = withdrawal_to_args(&withdrawal, &[]).unwrap();
    assert!(!args.auto_dispatch_enabled);

    // ...but the hash is identical to the enabled form.
    let enabled = Withdrawal::by_symbol(NONCE, wallet(), "USDC", "100");
    assert_eq!(
        withdrawal_hash(&withdrawal).unwrap(),
        withdrawal_hash(&enabled).unwrap(),
    );
}

#[test]
fn trade_settlement_tuple_is_complete() {
    let buy = sample_order();
    let mut sell = sample_order();
    sell.side = Side::Sell;
    sell.nonce = "c2c6ed6e-1d1b-11eb-adc1-0242ac120003".to_string();

    let trade = Trade {
        gross_base_quantity: "1.5".to_string(),
        gross_quote_quantity: "3000".to_string(),
        net_base_quantity: "1.4985".to_string(),
        net_quote_quantity: "3000".to_string(),
        maker_fee_asset: H160::repeat_byte(0xaa),
        taker_fee_asset: H160::repeat_byte(0xbb),
        maker_fee_quantity: "0.0015".to_string(),
        taker_fee_quantity: "3".to_string(),
        price: "2000".to_string(),
        maker_side: Side::Sell,
    };

    let (buy_args, sell_args, trade_args) =
        trade_call_args(&buy, &[0x01], &sell, &[0x02], &trade).unwrap();

    assert_eq!(buy_args.nonce >> 64, sell_args.nonce >> 64); // same timestamp half
    assert_ne!(buy_args.nonce, sell_args.nonce);
    assert_eq!(trade_args.base_asset_symbol, "ETH");
    assert_eq!(trade_args.quote_asset_symbol, "USDC");
    assert_eq!(trade_args.gross_base_quantity_in_pips, 150_000_000);
    assert_eq!(trade_args.price_in_pips, 200_000_000_000);
}

#[test]
fn hash_builders_are_deterministic_across_clones() {
    let order = sample_order();
    let clone = order.clone();
    assert_eq!(order_hash(&order).unwrap(), order_hash(&clone).unwrap());
}
