// ============================================================================
// Exact Money Library
// Exact-arithmetic monetary values with lossless rounding conversions
// ============================================================================

//! # exact-money
//!
//! Monetary values with no floating-point rounding error.
//!
//! ## Features
//!
//! - **Exact arithmetic** over arbitrary-precision rationals; no amount is
//!   ever silently rounded, truncated or approximated
//! - **Dense vs Discrete split**: exact amounts in a currency's base unit
//!   vs integral counts of one subdivision unit (the I/O boundary form)
//! - **Lossless conversions**: floor / ceil / round / trunc each return
//!   the discrete result *and* the exact remainder, so
//!   `amount == from_discrete(d) + remainder` always holds
//! - **Compile-time currency safety**: the currency is a type parameter;
//!   mixing currencies does not compile
//! - **Arbitrary subdivision ratios**: any rational scale factor works,
//!   including non-decimal ones like gold grams per troy ounce
//!
//! ## Example
//!
//! ```rust
//! use exact_money::prelude::*;
//! use exact_money::numeric::{Integer, Rational};
//! use exact_money::scale::eur;
//!
//! // -1.24 EUR, exactly
//! let amount: Dense<Eur> = Dense::from_rational(
//!     Rational::new(Integer::from(-124), Integer::from(100)).unwrap(),
//! );
//!
//! // Whole euros toward negative infinity, plus the exact leftover
//! let (euros, rest) = floor(eur::EURO, &amount).unwrap();
//! assert_eq!(euros.amount(), &Integer::from(-2));
//!
//! // Nothing was lost: the parts recompose the original exactly
//! let back = Dense::from_discrete(&euros).unwrap() + rest;
//! assert_eq!(back, amount);
//! ```

pub mod money;
pub mod numeric;
pub mod scale;

// Re-exports for convenience
pub mod prelude {
    pub use crate::money::{
        ceil, convert, floor, round, trunc, Btc, Currency, Dense, Discrete, Eur, Format, Gbp,
        Jpy, Rounding, Usd, Xau,
    };
    pub use crate::numeric::{MoneyError, MoneyResult};
    pub use crate::scale::{register_unit, registered_units, scale_factor};
}
