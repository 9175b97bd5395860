//! Argument struct builders for the on-chain entry points.
//!
//! These transform a domain message plus its wallet signature (and, for
//! trade settlement, the fill data from the external matching component)
//! into the exact ordered structs the contract expects. They run parallel
//! to the hash builders over the same source messages and never compute a
//! hash themselves.
//!
//! Unlike the hashes, every quantity here IS pip-converted: the contract's
//! struct fields are `uint64` pip values, while the hash covers the raw
//! decimal strings the verifier re-parses.

use primitive_types::{H160, U256};

use crate::error::{Error, Result};
use crate::types::nonce::nonce_to_u128;
use crate::types::pips::{decimal_to_pips, pips_to_u64};
use crate::types::{
    AssetReference, LiquidityAddition, LiquidityChangeOrigination, LiquidityRemoval, Order,
    Trade, Withdrawal,
};

/// Separator between base and quote symbols in a market symbol.
pub const MARKET_SYMBOL_SEPARATOR: char = '-';

/// Discriminant for a withdrawal referencing its asset by symbol.
const WITHDRAWAL_TYPE_BY_SYMBOL: u8 = 0;
/// Discriminant for a withdrawal referencing its asset by contract address.
const WITHDRAWAL_TYPE_BY_ADDRESS: u8 = 1;

// ============================================================================
// Market symbol splitting
// ============================================================================

/// Split a market symbol into its base and quote asset symbols.
///
/// # Errors
///
/// [`Error::MalformedMarketSymbol`] unless the separator yields exactly two
/// non-empty parts.
///
/// # Example
///
/// ```
/// use dex_signing::encoding::split_market_symbol;
///
/// assert_eq!(split_market_symbol("ETH-USDC").unwrap(), ("ETH", "USDC"));
/// assert!(split_market_symbol("ETHUSDC").is_err());
/// ```
pub fn split_market_symbol(market: &str) -> Result<(&str, &str)> {
    let mut parts = market.split(MARKET_SYMBOL_SEPARATOR);
    match (parts.next(), parts.next(), parts.next()) {
        (Some(base), Some(quote), None) if !base.is_empty() && !quote.is_empty() => {
            Ok((base, quote))
        }
        _ => Err(Error::MalformedMarketSymbol(market.to_string())),
    }
}

/// Pip-convert a decimal string into the on-chain `uint64` representation.
fn decimal_to_pip_u64(decimal: &str) -> Result<u64> {
    pips_to_u64(&decimal_to_pips(decimal)?)
}

// ============================================================================
// Order arguments
// ============================================================================

/// The order struct of the trade-settlement entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderArgs {
    pub signature_hash_version: u8,
    pub nonce: u128,
    pub wallet: H160,
    pub order_type: u8,
    pub side: u8,
    pub quantity_in_pips: u64,
    pub is_quantity_in_quote: bool,
    /// Zero when the order carries no limit price
    pub limit_price_in_pips: u64,
    /// Zero when the order carries no stop price
    pub stop_price_in_pips: u64,
    /// Empty when the order carries no client order id
    pub client_order_id: String,
    pub time_in_force: u8,
    pub self_trade_prevention: u8,
    pub cancel_after: u64,
    /// The wallet's signature over [`super::order_hash`]
    pub signature: Vec<u8>,
}

/// Build the on-chain order struct from a signed order.
///
/// # Errors
///
/// Nonce, decimal and pip-range failures; see [`crate::Error`].
pub fn order_to_args(order: &Order, signature: &[u8]) -> Result<OrderArgs> {
    let limit_price_in_pips = match &order.price {
        Some(price) => decimal_to_pip_u64(price)?,
        None => 0,
    };
    let stop_price_in_pips = match &order.stop_price {
        Some(price) => decimal_to_pip_u64(price)?,
        None => 0,
    };
    Ok(OrderArgs {
        signature_hash_version: order.signature_hash_version,
        nonce: nonce_to_u128(&order.nonce)?,
        wallet: order.wallet,
        order_type: order.order_type.to_u8(),
        side: order.side.to_u8(),
        quantity_in_pips: decimal_to_pip_u64(&order.quantity)?,
        is_quantity_in_quote: order.is_quantity_in_quote,
        limit_price_in_pips,
        stop_price_in_pips,
        client_order_id: order.client_order_id.clone().unwrap_or_default(),
        time_in_force: order.time_in_force.map_or(0, |t| t.to_u8()),
        self_trade_prevention: order.self_trade_prevention.map_or(0, |s| s.to_u8()),
        cancel_after: order.cancel_after.unwrap_or(0),
        signature: signature.to_vec(),
    })
}

// ============================================================================
// Trade arguments
// ============================================================================

/// The fill struct of the trade-settlement entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TradeArgs {
    pub base_asset_symbol: String,
    pub quote_asset_symbol: String,
    pub maker_fee_asset: H160,
    pub taker_fee_asset: H160,
    pub gross_base_quantity_in_pips: u64,
    pub gross_quote_quantity_in_pips: u64,
    pub net_base_quantity_in_pips: u64,
    pub net_quote_quantity_in_pips: u64,
    pub maker_fee_quantity_in_pips: u64,
    pub taker_fee_quantity_in_pips: u64,
    pub price_in_pips: u64,
    pub maker_side: u8,
}

/// Build the on-chain fill struct from externally-supplied execution data.
///
/// `market` is the traded market symbol; its split provides the base and
/// quote asset symbols the contract resolves against its asset registry.
pub fn trade_to_args(market: &str, trade: &Trade) -> Result<TradeArgs> {
    let (base, quote) = split_market_symbol(market)?;
    Ok(TradeArgs {
        base_asset_symbol: base.to_string(),
        quote_asset_symbol: quote.to_string(),
        maker_fee_asset: trade.maker_fee_asset,
        taker_fee_asset: trade.taker_fee_asset,
        gross_base_quantity_in_pips: decimal_to_pip_u64(&trade.gross_base_quantity)?,
        gross_quote_quantity_in_pips: decimal_to_pip_u64(&trade.gross_quote_quantity)?,
        net_base_quantity_in_pips: decimal_to_pip_u64(&trade.net_base_quantity)?,
        net_quote_quantity_in_pips: decimal_to_pip_u64(&trade.net_quote_quantity)?,
        maker_fee_quantity_in_pips: decimal_to_pip_u64(&trade.maker_fee_quantity)?,
        taker_fee_quantity_in_pips: decimal_to_pip_u64(&trade.taker_fee_quantity)?,
        price_in_pips: decimal_to_pip_u64(&trade.price)?,
        maker_side: trade.maker_side.to_u8(),
    })
}

/// Build the full argument tuple for the trade-settlement call: buy order,
/// sell order and the fill that crossed them.
pub fn trade_call_args(
    buy: &Order,
    buy_signature: &[u8],
    sell: &Order,
    sell_signature: &[u8],
    trade: &Trade,
) -> Result<(OrderArgs, OrderArgs, TradeArgs)> {
    Ok((
        order_to_args(buy, buy_signature)?,
        order_to_args(sell, sell_signature)?,
        trade_to_args(&buy.market, trade)?,
    ))
}

// ============================================================================
// Withdrawal arguments
// ============================================================================

/// The withdrawal struct of the settlement entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WithdrawalArgs {
    /// 0 = by symbol, 1 = by contract address
    pub withdrawal_type: u8,
    pub nonce: u128,
    pub wallet: H160,
    /// Empty when withdrawing by contract address
    pub asset_symbol: String,
    /// Zero when withdrawing by symbol
    pub asset_contract_address: H160,
    pub gross_quantity_in_pips: u64,
    /// Struct-level setting; the signature hash always encodes `true`
    pub auto_dispatch_enabled: bool,
    /// The wallet's signature over [`super::withdrawal_hash`]
    pub signature: Vec<u8>,
}

/// Build the on-chain withdrawal struct from a signed withdrawal.
pub fn withdrawal_to_args(withdrawal: &Withdrawal, signature: &[u8]) -> Result<WithdrawalArgs> {
    let (withdrawal_type, asset_symbol, asset_contract_address) =
        match withdrawal.asset_reference()? {
            AssetReference::Symbol(symbol) => {
                (WITHDRAWAL_TYPE_BY_SYMBOL, symbol.to_string(), H160::zero())
            }
            AssetReference::Contract(address) => {
                (WITHDRAWAL_TYPE_BY_ADDRESS, String::new(), address)
            }
        };
    Ok(WithdrawalArgs {
        withdrawal_type,
        nonce: nonce_to_u128(&withdrawal.nonce)?,
        wallet: withdrawal.wallet,
        asset_symbol,
        asset_contract_address,
        gross_quantity_in_pips: decimal_to_pip_u64(&withdrawal.quantity)?,
        auto_dispatch_enabled: withdrawal.auto_dispatch_enabled,
        signature: signature.to_vec(),
    })
}

// ============================================================================
// Liquidity arguments
// ============================================================================

/// The addition struct of the pool entry point. Native-unit amounts pass
/// through unconverted; pools settle in each token's own precision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiquidityAdditionArgs {
    pub signature_hash_version: u8,
    pub origination: u8,
    pub nonce: u128,
    pub wallet: H160,
    pub asset_a: H160,
    pub asset_b: H160,
    pub amount_a_desired: U256,
    pub amount_b_desired: U256,
    pub amount_a_min: U256,
    pub amount_b_min: U256,
    pub to: H160,
    pub deadline: u64,
    /// The wallet's signature over [`super::liquidity_addition_hash`]
    pub signature: Vec<u8>,
}

/// Build the on-chain addition struct from a signed liquidity addition.
pub fn liquidity_addition_to_args(
    addition: &LiquidityAddition,
    signature: &[u8],
) -> Result<LiquidityAdditionArgs> {
    Ok(LiquidityAdditionArgs {
        signature_hash_version: addition.signature_hash_version,
        origination: LiquidityChangeOrigination::OffChain.to_u8(),
        nonce: nonce_to_u128(&addition.nonce)?,
        wallet: addition.wallet,
        asset_a: addition.asset_a,
        asset_b: addition.asset_b,
        amount_a_desired: addition.amount_a_desired,
        amount_b_desired: addition.amount_b_desired,
        amount_a_min: addition.amount_a_min,
        amount_b_min: addition.amount_b_min,
        to: addition.to,
        deadline: addition.deadline,
        signature: signature.to_vec(),
    })
}

/// The removal struct of the pool entry point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiquidityRemovalArgs {
    pub signature_hash_version: u8,
    pub origination: u8,
    pub nonce: u128,
    pub wallet: H160,
    pub asset_a: H160,
    pub asset_b: H160,
    pub liquidity: U256,
    pub amount_a_min: U256,
    pub amount_b_min: U256,
    pub to: H160,
    pub deadline: u64,
    /// The wallet's signature over [`super::liquidity_removal_hash`]
    pub signature: Vec<u8>,
}

/// Build the on-chain removal struct from a signed liquidity removal.
pub fn liquidity_removal_to_args(
    removal: &LiquidityRemoval,
    signature: &[u8],
) -> Result<LiquidityRemovalArgs> {
    Ok(LiquidityRemovalArgs {
        signature_hash_version: removal.signature_hash_version,
        origination: LiquidityChangeOrigination::OffChain.to_u8(),
        nonce: nonce_to_u128(&removal.nonce)?,
        wallet: removal.wallet,
        asset_a: removal.asset_a,
        asset_b: removal.asset_b,
        liquidity: removal.liquidity,
        amount_a_min: removal.amount_a_min,
        amount_b_min: removal.amount_b_min,
        to: removal.to,
        deadline: removal.deadline,
        signature: signature.to_vec(),
    })
}

// ============================================================================
// Unit Tests
// ============================================================================
