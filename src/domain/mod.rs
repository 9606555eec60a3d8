//! Value types shared by every layer of the SDK.
//!
//! Tokens and currencies, exact amounts, rational prices and percentages,
//! curve identifiers and the directed reserve view the curves price
//! against. Amounts are `uint256` like the contracts; prices and
//! percentages are unbounded fractions.

mod currency;
mod currency_amount;
mod curve_id;
mod fraction;
mod percent;
mod price;
mod reserves;
mod rounding;
mod token;
mod trade_type;

pub use currency::{Currency, NativeCurrency};
pub use currency_amount::CurrencyAmount;
pub use curve_id::CurveId;
pub use fraction::Fraction;
pub use percent::Percent;
pub use price::Price;
pub use reserves::DirectedReserves;
pub use rounding::Rounding;
pub use token::Token;
pub use trade_type::TradeType;
