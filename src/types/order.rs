//! Order message types.
//!
//! An [`Order`] is the client-side record of a signed order request. Its
//! enum fields carry the exact `u8` discriminants the on-chain verifier
//! expects; quantity and price fields stay as decimal strings because the
//! order hash covers the raw strings, not their pip conversions (the
//! argument builders pip-convert separately).
//!
//! Optional fields are hashed with sentinel defaults (empty string, zero),
//! so an absent field and an explicitly-defaulted field hash identically.

use primitive_types::H160;

// ============================================================================
// Side enum
// ============================================================================

/// Order side: Buy or Sell.
///
/// Wire representation:
/// - Buy = 0
/// - Sell = 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Side {
    #[default]
    Buy,
    Sell,
}

impl Side {
    /// Convert to the on-chain u8 discriminant
    pub fn to_u8(self) -> u8 {
        match self {
            Side::Buy => 0,
            Side::Sell => 1,
        }
    }

    /// Convert from the on-chain u8 discriminant
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(Side::Buy),
            1 => Some(Side::Sell),
            _ => None,
        }
    }

    /// Returns the opposite side
    pub fn opposite(self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }
}

// ============================================================================
// OrderType enum
// ============================================================================

/// Order type enumeration, in on-chain discriminant order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderType {
    Market,
    #[default]
    Limit,
    LimitMaker,
    StopLoss,
    StopLossLimit,
    TakeProfit,
    TakeProfitLimit,
}

impl OrderType {
    /// Convert to the on-chain u8 discriminant
    pub fn to_u8(self) -> u8 {
        match self {
            OrderType::Market => 0,
            OrderType::Limit => 1,
            OrderType::LimitMaker => 2,
            OrderType::StopLoss => 3,
            OrderType::StopLossLimit => 4,
            OrderType::TakeProfit => 5,
            OrderType::TakeProfitLimit => 6,
        }
    }

    /// Convert from the on-chain u8 discriminant
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(OrderType::Market),
            1 => Some(OrderType::Limit),
            2 => Some(OrderType::LimitMaker),
            3 => Some(OrderType::StopLoss),
            4 => Some(OrderType::StopLossLimit),
            5 => Some(OrderType::TakeProfit),
            6 => Some(OrderType::TakeProfitLimit),
            _ => None,
        }
    }
}

// ============================================================================
// TimeInForce enum
// ============================================================================

/// Time-in-force policy. Absent on a message means GTC (discriminant 0) in
/// the hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TimeInForce {
    /// Good til canceled
    #[default]
    Gtc,
    /// Good til time (requires `cancel_after`)
    Gtt,
    /// Immediate or cancel
    Ioc,
    /// Fill or kill
    Fok,
}

impl TimeInForce {
    /// Convert to the on-chain u8 discriminant
    pub fn to_u8(self) -> u8 {
        match self {
            TimeInForce::Gtc => 0,
            TimeInForce::Gtt => 1,
            TimeInForce::Ioc => 2,
            TimeInForce::Fok => 3,
        }
    }

    /// Convert from the on-chain u8 discriminant
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(TimeInForce::Gtc),
            1 => Some(TimeInForce::Gtt),
            2 => Some(TimeInForce::Ioc),
            3 => Some(TimeInForce::Fok),
            _ => None,
        }
    }
}

// ============================================================================
// SelfTradePrevention enum
// ============================================================================

/// Self-trade prevention policy. Absent means DecrementAndCancel
/// (discriminant 0) in the hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SelfTradePrevention {
    /// Decrement the resting order, cancel the remainder
    #[default]
    DecrementAndCancel,
    CancelOldest,
    CancelNewest,
    CancelBoth,
}

impl SelfTradePrevention {
    /// Convert to the on-chain u8 discriminant
    pub fn to_u8(self) -> u8 {
        match self {
            SelfTradePrevention::DecrementAndCancel => 0,
            SelfTradePrevention::CancelOldest => 1,
            SelfTradePrevention::CancelNewest => 2,
            SelfTradePrevention::CancelBoth => 3,
        }
    }

    /// Convert from the on-chain u8 discriminant
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0 => Some(SelfTradePrevention::DecrementAndCancel),
            1 => Some(SelfTradePrevention::CancelOldest),
            2 => Some(SelfTradePrevention::CancelNewest),
            3 => Some(SelfTradePrevention::CancelBoth),
            _ => None,
        }
    }
}

// ============================================================================
// Order struct
// ============================================================================

/// A client order request, as assembled for signing.
///
/// ## Fields
///
/// `quantity`, `price` and `stop_price` are decimal strings: the signature
/// hash covers the raw strings and the verifier re-parses them on chain.
///
/// ## Example
///
/// ```
/// use dex_signing::types::{Order, OrderType, Side};
/// use primitive_types::H160;
///
/// let order = Order::new(
///     "c2c6ed6e-1d1b-11eb-adc1-0242ac120002",
///     H160::repeat_byte(0x11),
///     "ETH-USDC",
///     OrderType::Limit,
///     Side::Buy,
///     "1.50000000",
/// );
/// assert!(order.price.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    /// Selects the field layout the verifier applies; mismatches are a
    /// contract-level rejection, not caught here
    pub signature_hash_version: u8,

    /// Time-ordered UUID string in canonical dashed form
    pub nonce: String,

    /// Signing wallet address
    pub wallet: H160,

    /// Market symbol, `BASE-QUOTE`
    pub market: String,

    pub order_type: OrderType,

    pub side: Side,

    /// Order quantity as a decimal string
    pub quantity: String,

    /// Whether `quantity` is denominated in the quote asset
    pub is_quantity_in_quote: bool,

    /// Limit price as a decimal string; hashed as "" when absent
    pub price: Option<String>,

    /// Stop price as a decimal string; hashed as "" when absent
    pub stop_price: Option<String>,

    /// Client-assigned order id; hashed as "" when absent
    pub client_order_id: Option<String>,

    /// Hashed as 0 (GTC) when absent
    pub time_in_force: Option<TimeInForce>,

    /// Hashed as 0 (DecrementAndCancel) when absent
    pub self_trade_prevention: Option<SelfTradePrevention>,

    /// Expiry timestamp in seconds for GTT orders; hashed as 0 when absent
    pub cancel_after: Option<u64>,
}

impl Order {
    /// Create an order with the required fields; optional fields start
    /// absent and hash as their sentinel defaults.
    pub fn new(
        nonce: &str,
        wallet: H160,
        market: &str,
        order_type: OrderType,
        side: Side,
        quantity: &str,
    ) -> Self {
        Self {
            signature_hash_version: crate::encoding::SIGNATURE_HASH_VERSION,
            nonce: nonce.to_string(),
            wallet,
            market: market.to_string(),
            order_type,
            side,
            quantity: quantity.to_string(),
            is_quantity_in_quote: false,
            price: None,
            stop_price: None,
            client_order_id: None,
            time_in_force: None,
            self_trade_prevention: None,
            cancel_after: None,
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
