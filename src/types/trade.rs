//! Trade execution data.
//!
//! A [`Trade`] is not signed by either wallet: it is the fill record the
//! off-chain matching component produces when a buy and a sell order cross,
//! and it rides along with the two signed orders into the settlement call.
//! This library only converts it into argument form - it never computes or
//! checks any of the amounts.

use primitive_types::H160;

use super::order::Side;

/// Execution data for one fill, supplied by the external matching component.
///
/// All quantities and the price are decimal strings; the argument builder
/// pip-converts them for the chain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trade {
    /// Gross base-asset quantity exchanged
    pub gross_base_quantity: String,

    /// Gross quote-asset quantity exchanged
    pub gross_quote_quantity: String,

    /// Base quantity net of fees
    pub net_base_quantity: String,

    /// Quote quantity net of fees
    pub net_quote_quantity: String,

    /// Token the maker fee is charged in
    pub maker_fee_asset: H160,

    /// Token the taker fee is charged in
    pub taker_fee_asset: H160,

    pub maker_fee_quantity: String,

    pub taker_fee_quantity: String,

    /// Execution price as a decimal string
    pub price: String,

    /// Which side of the fill was resting on the book
    pub maker_side: Side,
}
