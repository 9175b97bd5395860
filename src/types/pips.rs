//! Fixed-point quantity conversions.
//!
//! ## Overview
//!
//! The exchange protocol denominates every quantity on the wire in "pips":
//! integers scaled by 10^8, regardless of a token's own decimal precision.
//! This module converts among the three representations a quantity passes
//! through:
//!
//! - human decimal strings (arbitrary precision),
//! - pip integers (10^8 scale),
//! - a token's native integer units (10^decimals scale, decimals 0..=18+).
//!
//! ## Why strings and U256?
//!
//! Floating point cannot exactly represent most base-10 fractions in base-2,
//! so it is forbidden on this path. Token amounts at 18 decimals routinely
//! exceed u64, so all scaling runs on [`U256`] and values cross module
//! boundaries as base-10 integer strings - the same form the on-chain
//! verifier consumes.
//!
//! ## Rounding policy
//!
//! Truncation toward zero at every step. `decimal -> pips -> native` is an
//! intentional double rounding: the chain only ever sees pip-denominated
//! values as the intermediate wire format, so a "more accurate" direct
//! conversion would disagree with the verifier.
//!
//! ## Examples
//!
//! ```
//! use dex_signing::types::pips::{decimal_to_pips, pips_to_asset_units};
//!
//! // 1.5 tokens -> 150000000 pips
//! assert_eq!(decimal_to_pips("1.5").unwrap(), "150000000");
//!
//! // 150000000 pips of a 6-decimal token -> 1500000 native units
//! assert_eq!(pips_to_asset_units("150000000", 6).unwrap(), "1500000");
//! ```

use primitive_types::U256;
use rust_decimal::Decimal;

use crate::error::{Error, Result};

/// Pip scaling factor: 10^8.
pub const PIP_SCALE: u64 = 100_000_000;

/// Number of fractional digits a pip value carries.
pub const PIP_DECIMALS: u32 = 8;

// ============================================================================
// Decimal string -> pips
// ============================================================================

/// Convert a non-negative decimal string to a pip integer string.
///
/// Multiplies by 10^8 and truncates toward zero; fractional digits beyond
/// the eighth are dropped, never rounded up. The result carries no leading
/// zeros (`"0"` for zero).
///
/// # Errors
///
/// [`Error::InvalidDecimal`] if `decimal` is not a syntactically valid
/// non-negative decimal numeral (signs, exponents, multiple dots, and
/// non-digit characters all reject).
///
/// # Example
///
/// ```
/// use dex_signing::types::pips::decimal_to_pips;
///
/// assert_eq!(decimal_to_pips("100").unwrap(), "10000000000");
/// assert_eq!(decimal_to_pips("0.00000001").unwrap(), "1");
/// assert_eq!(decimal_to_pips("1.999999999").unwrap(), "199999999");
/// assert!(decimal_to_pips("-1").is_err());
/// ```
pub fn decimal_to_pips(decimal: &str) -> Result<String> {
    let (int_part, frac_part) = split_numeral(decimal)?;

    // Truncate toward zero: keep at most the first 8 fractional digits.
    let kept = &frac_part[..frac_part.len().min(PIP_DECIMALS as usize)];
    let mut frac_scaled = String::from(kept);
    while frac_scaled.len() < PIP_DECIMALS as usize {
        frac_scaled.push('0');
    }

    let int = parse_u256(int_part, decimal)?;
    let frac = parse_u256(&frac_scaled, decimal)?;
    let pips = int
        .checked_mul(U256::from(PIP_SCALE))
        .and_then(|v| v.checked_add(frac))
        .ok_or_else(|| Error::InvalidDecimal(decimal.to_string()))?;

    Ok(pips.to_string())
}

// ============================================================================
// Pips <-> native asset units
// ============================================================================

/// Scale a pip integer string to a token's native units.
///
/// A decimal right-shift when `decimals < 8`, a left-shift when
/// `decimals > 8`, identity at 8. Truncates toward zero.
///
/// # Example
///
/// ```
/// use dex_signing::types::pips::pips_to_asset_units;
///
/// // 1.00000000 of a 2-decimal token -> 100 native units
/// assert_eq!(pips_to_asset_units("100000000", 2).unwrap(), "100");
/// // ... and of an 18-decimal token
/// assert_eq!(
///     pips_to_asset_units("100000000", 18).unwrap(),
///     "1000000000000000000",
/// );
/// ```
pub fn pips_to_asset_units(pips: &str, decimals: u8) -> Result<String> {
    let value = parse_u256(pips, pips)?;
    let scaled = rescale(value, PIP_DECIMALS as u8, decimals)
        .ok_or_else(|| Error::InvalidDecimal(pips.to_string()))?;
    Ok(scaled.to_string())
}

/// Scale a native-unit integer string back to pips.
///
/// Inverse of [`pips_to_asset_units`]; truncates toward zero in the same
/// direction, so `native -> pips -> native` never increases magnitude.
///
/// # Example
///
/// ```
/// use dex_signing::types::pips::asset_units_to_pips;
///
/// assert_eq!(asset_units_to_pips("100", 2).unwrap(), "100000000");
/// ```
pub fn asset_units_to_pips(asset_units: &str, decimals: u8) -> Result<String> {
    let value = parse_u256(asset_units, asset_units)?;
    let scaled = rescale(value, decimals, PIP_DECIMALS as u8)
        .ok_or_else(|| Error::InvalidDecimal(asset_units.to_string()))?;
    Ok(scaled.to_string())
}

/// Convert a decimal string directly to native units.
///
/// Defined as the composition `pips_to_asset_units(decimal_to_pips(d), d)`,
/// bit-identical to calling the two stages in sequence. The intermediate
/// pip truncation is part of the protocol, not an implementation shortcut.
pub fn decimal_to_asset_units(decimal: &str, decimals: u8) -> Result<String> {
    let pips = decimal_to_pips(decimal)?;
    pips_to_asset_units(&pips, decimals)
}

// ============================================================================
// Pips -> decimal string
// ============================================================================

/// Render an on-chain pip value as a decimal string with 8 fractional digits.
///
/// # Example
///
/// ```
/// use dex_signing::types::pips::pips_to_decimal;
///
/// assert_eq!(pips_to_decimal(150_000_000), "1.50000000");
/// assert_eq!(pips_to_decimal(1), "0.00000001");
/// ```
pub fn pips_to_decimal(pips: u64) -> String {
    let value = Decimal::from(pips) / Decimal::from(PIP_SCALE);
    format!("{:.8}", value)
}

/// Parse a pip integer string into the on-chain `uint64` representation.
///
/// # Errors
///
/// [`Error::InvalidDecimal`] if `pips` is not an unsigned integer numeral;
/// [`Error::PipOverflow`] if the value exceeds `u64::MAX`.
pub fn pips_to_u64(pips: &str) -> Result<u64> {
    let value = parse_u256(pips, pips)?;
    if value > U256::from(u64::MAX) {
        return Err(Error::PipOverflow(pips.to_string()));
    }
    Ok(value.as_u64())
}

// ============================================================================
// Internal helpers
// ============================================================================

/// Split a decimal numeral into integer and fractional digit runs.
///
/// Accepts `"5"`, `"5."`, `".5"`, `"5.25"`; rejects everything else.
fn split_numeral(s: &str) -> Result<(&str, &str)> {
    let invalid = || Error::InvalidDecimal(s.to_string());

    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return Err(invalid());
    }

    let (int_part, frac_part) = match s.find('.') {
        Some(dot) => {
            let frac = &s[dot + 1..];
            if frac.contains('.') {
                return Err(invalid());
            }
            (&s[..dot], frac)
        }
        None => (s, ""),
    };

    // A bare "." carries no digits at all.
    if int_part.is_empty() && frac_part.is_empty() {
        return Err(invalid());
    }

    Ok((int_part, frac_part))
}

/// Parse a digit run as U256, treating the empty string as zero.
///
/// `original` is the caller-supplied input, reported on failure.
fn parse_u256(digits: &str, original: &str) -> Result<U256> {
    if digits.is_empty() {
        return Ok(U256::zero());
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::InvalidDecimal(original.to_string()));
    }
    U256::from_dec_str(digits).map_err(|_| Error::InvalidDecimal(original.to_string()))
}

/// Rescale `value` from `from` decimals to `to` decimals, truncating toward
/// zero. Returns `None` on multiplication overflow.
fn rescale(value: U256, from: u8, to: u8) -> Option<U256> {
    if to >= from {
        value.checked_mul(U256::exp10(usize::from(to - from)))
    } else {
        // Integer division on non-negative values truncates toward zero.
        Some(value / U256::exp10(usize::from(from - to)))
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
