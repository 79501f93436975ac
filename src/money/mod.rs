// ============================================================================
// Money Module
// The Dense/Discrete monetary value model
// ============================================================================
//
// This module provides:
// - Currency: type-level currency tags (Eur, Usd, Gbp, Jpy, Xau, Btc)
// - Dense<C>: exact rational amount in a currency's base unit
// - Discrete<C>: integral count of one subdivision unit
// - Format<C>: (currency, unit) descriptor for scale-table lookups
// - convert / floor / ceil / round / trunc: lossless rounding conversions
//
// Design principles:
// - Mixing currencies is a compile error, not a runtime check
// - Dense values are never rounded implicitly; conversions return the
//   exact remainder alongside the discrete result

pub mod convert;
pub mod currency;
pub mod dense;
pub mod discrete;

pub use convert::{ceil, convert, floor, round, trunc, Rounding};
pub use currency::{Btc, Currency, Eur, Gbp, Jpy, Usd, Xau};
pub use dense::Dense;
pub use discrete::{Discrete, Format};
