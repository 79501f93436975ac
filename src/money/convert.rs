// ============================================================================
// Rounding Conversions
// Dense -> Discrete with an exact remainder; nothing is ever lost
// ============================================================================

use super::currency::Currency;
use super::dense::Dense;
use super::discrete::{Discrete, Format};
use crate::numeric::{MoneyResult, Rational};

/// The rounding rule applied when a dense amount is discretized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rounding {
    /// Toward negative infinity; remainder is always >= 0.
    Floor,
    /// Toward positive infinity; remainder is always <= 0.
    Ceil,
    /// To the nearest unit count, ties away from zero.
    Nearest,
    /// Toward zero; remainder carries the sign of the amount.
    Trunc,
}

/// Convert a dense amount into a whole number of `format`'s unit plus the
/// exact remainder, under the given rounding rule.
///
/// For every rule, format and amount:
/// `amount == Dense::from_discrete(&discrete)? + remainder`, and the
/// remainder's magnitude is strictly below one unit.
///
/// # Errors
/// Returns `UnknownUnit` if `format`'s unit is not registered.
pub fn convert<C: Currency>(
    format: Format<C>,
    amount: &Dense<C>,
    rounding: Rounding,
) -> MoneyResult<(Discrete<C>, Dense<C>)> {
    let scale = format.scale()?;

    // The amount expressed as an exact count of format's unit. The scale
    // table never stores a zero factor, so the division cannot fail.
    let scaled = amount.rational().div(&scale)?;

    let count = match rounding {
        Rounding::Floor => scaled.floor_int(),
        Rounding::Ceil => scaled.ceil_int(),
        Rounding::Nearest => scaled.round_int(),
        Rounding::Trunc => scaled.trunc_int(),
    };

    let discrete = Discrete::new(count.clone(), format);
    let discretized = Rational::from_integer(count).mul(&scale);
    let remainder = Dense::from_rational(amount.rational().sub(&discretized));

    Ok((discrete, remainder))
}

/// Discretize rounding toward negative infinity.
pub fn floor<C: Currency>(
    format: Format<C>,
    amount: &Dense<C>,
) -> MoneyResult<(Discrete<C>, Dense<C>)> {
    convert(format, amount, Rounding::Floor)
}

/// Discretize rounding toward positive infinity.
pub fn ceil<C: Currency>(
    format: Format<C>,
    amount: &Dense<C>,
) -> MoneyResult<(Discrete<C>, Dense<C>)> {
    convert(format, amount, Rounding::Ceil)
}

/// Discretize to the nearest unit count; ties round away from zero.
pub fn round<C: Currency>(
    format: Format<C>,
    amount: &Dense<C>,
) -> MoneyResult<(Discrete<C>, Dense<C>)> {
    convert(format, amount, Rounding::Nearest)
}

/// Discretize rounding toward zero.
pub fn trunc<C: Currency>(
    format: Format<C>,
    amount: &Dense<C>,
) -> MoneyResult<(Discrete<C>, Dense<C>)> {
    convert(format, amount, Rounding::Trunc)
}
