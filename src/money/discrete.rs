// ============================================================================
// Discrete Amounts and Formats
// Integral counts of one subdivision unit of a currency
// ============================================================================

use std::fmt;
use std::marker::PhantomData;

use super::currency::Currency;
use crate::numeric::{Integer, MoneyResult, Rational};
use crate::scale;

/// A (currency, unit) descriptor naming one subdivision unit, e.g.
/// `(EUR, "cent")`.
///
/// The currency lives in the type, the unit is a key into the scale table.
/// Per-currency constants are provided by the `scale` modules
/// (e.g. [`scale::eur::CENT`], [`scale::xau::GRAM`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Format<C: Currency> {
    unit: &'static str,
    _currency: PhantomData<C>,
}

impl<C: Currency> Format<C> {
    /// Descriptor for the named unit of currency `C`.
    ///
    /// Construction does not validate the unit; the scale-table lookup at
    /// use time reports `UnknownUnit` for an unregistered name.
    pub const fn new(unit: &'static str) -> Self {
        Self {
            unit,
            _currency: PhantomData,
        }
    }

    /// The unit name.
    pub const fn unit(&self) -> &'static str {
        self.unit
    }

    /// The unit's scale factor relative to the currency's base unit.
    ///
    /// # Errors
    /// Returns `UnknownUnit` if the unit is not registered for `C`.
    pub fn scale(&self) -> MoneyResult<Rational> {
        scale::scale_factor::<C>(self.unit)
    }
}

impl<C: Currency> fmt::Display for Format<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", C::CODE, self.unit)
    }
}

/// An integral amount of one subdivision unit of a currency: the value
/// at I/O boundaries (cents stored in a ledger, satoshi on a wire).
///
/// Deliberately opaque: no arithmetic is defined on it. Computation
/// happens in [`Dense`](super::Dense) space; a `Discrete` is produced by a
/// rounding conversion or constructed directly from a known unit count.
/// Equality requires both the same integer amount and the same unit (the
/// currency already matches by type).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Discrete<C: Currency> {
    amount: Integer,
    unit: &'static str,
    _currency: PhantomData<C>,
}

impl<C: Currency> Discrete<C> {
    /// An amount of `amount` times the unit named by `format`.
    pub fn new(amount: Integer, format: Format<C>) -> Self {
        Self {
            amount,
            unit: format.unit(),
            _currency: PhantomData,
        }
    }

    /// The unit count.
    pub fn amount(&self) -> &Integer {
        &self.amount
    }

    /// The unit name.
    pub const fn unit(&self) -> &'static str {
        self.unit
    }

    /// The descriptor of this amount's unit.
    pub const fn format(&self) -> Format<C> {
        Format::new(self.unit)
    }
}

impl<C: Currency> fmt::Display for Discrete<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.amount, self.unit, C::CODE)
    }
}
