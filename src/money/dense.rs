// ============================================================================
// Dense Amounts
// Exact monetary values in a currency's base unit
// ============================================================================

use std::fmt;
use std::marker::PhantomData;
use std::ops::{Add, Neg, Sub};

use super::currency::Currency;
use super::discrete::Discrete;
use crate::numeric::{Integer, MoneyResult, Rational};

/// An exact monetary amount of currency `C`, held as a [`Rational`] number
/// of the currency's base unit (euro for EUR, troy ounce for XAU).
///
/// A `Dense` value is never rounded by any operation here; rounding only
/// happens through the conversions in [`convert`](super::convert), which
/// return the discarded fraction as an exact remainder. Equality is value
/// equality on the underlying rational, so an amount multiplied and then
/// divided by the same scalar compares equal to the original.
///
/// # Example
/// ```
/// use exact_money::money::{Dense, Usd};
/// use exact_money::numeric::{Integer, Rational};
///
/// let four: Dense<Usd> = Dense::from_integer(Integer::from(4));
/// let k = Rational::new(Integer::from(3), Integer::one()).unwrap();
/// let round_trip = four.mul_scalar(&k).div_scalar(&k).unwrap();
/// assert_eq!(round_trip, four);
/// ```
#[derive(Debug, Clone)]
pub struct Dense<C: Currency> {
    amount: Rational,
    _currency: PhantomData<C>,
}

impl<C: Currency> Dense<C> {
    /// The integer `n` as the exact amount `n/1` base units.
    pub fn from_integer(n: Integer) -> Self {
        Self::from_rational(Rational::from_integer(n))
    }

    /// An arbitrary exact amount of base units.
    pub fn from_rational(amount: Rational) -> Self {
        Self {
            amount,
            _currency: PhantomData,
        }
    }

    /// Exact conversion of a decimal value: the mantissa over `10^scale`.
    ///
    /// Boundary constructor for callers holding `rust_decimal` values;
    /// nothing is rounded.
    pub fn from_decimal(value: rust_decimal::Decimal) -> Self {
        let numer = Integer::from(value.mantissa());
        let denom = Integer::from(10i64).pow(value.scale());
        // A positive power of ten is never zero.
        Self::from_rational(Rational::new(numer, denom).expect("nonzero denominator"))
    }

    /// The dense value of a discrete amount: the unit count times the
    /// unit's scale factor.
    ///
    /// # Errors
    /// Returns `UnknownUnit` if the discrete amount's unit is not
    /// registered for `C`.
    pub fn from_discrete(discrete: &Discrete<C>) -> MoneyResult<Self> {
        let scale = discrete.format().scale()?;
        let count = Rational::from_integer(discrete.amount().clone());
        Ok(Self::from_rational(count.mul(&scale)))
    }

    /// The zero amount.
    pub fn zero() -> Self {
        Self::from_rational(Rational::zero())
    }

    /// The underlying rational amount in base units.
    pub fn rational(&self) -> &Rational {
        &self.amount
    }

    /// The amount with its rational reduced to lowest terms. The value is
    /// unchanged.
    pub fn simplify(&self) -> Self {
        Self::from_rational(self.amount.simplify())
    }

    /// Check if the amount is zero.
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Check if the amount is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.amount.is_negative()
    }

    /// Exact multiplication by a unitless scalar.
    pub fn mul_scalar(&self, k: &Rational) -> Self {
        Self::from_rational(self.amount.mul(k))
    }

    /// Exact division by a unitless scalar.
    ///
    /// # Errors
    /// Returns `DivisionByZero` when `k` is zero.
    pub fn div_scalar(&self, k: &Rational) -> MoneyResult<Self> {
        Ok(Self::from_rational(self.amount.div(k)?))
    }
}

impl<C: Currency> PartialEq for Dense<C> {
    fn eq(&self, other: &Self) -> bool {
        self.amount == other.amount
    }
}

impl<C: Currency> Eq for Dense<C> {}

impl<C: Currency> PartialOrd for Dense<C> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<C: Currency> Ord for Dense<C> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.amount.cmp(&other.amount)
    }
}

// ============================================================================
// Ring Operations (same currency, enforced by the type parameter)
// ============================================================================

impl<C: Currency> Add for Dense<C> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self::from_rational(self.amount.add(&rhs.amount))
    }
}

impl<C: Currency> Add for &Dense<C> {
    type Output = Dense<C>;

    fn add(self, rhs: Self) -> Self::Output {
        Dense::from_rational(self.amount.add(&rhs.amount))
    }
}

impl<C: Currency> Sub for Dense<C> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self::from_rational(self.amount.sub(&rhs.amount))
    }
}

impl<C: Currency> Sub for &Dense<C> {
    type Output = Dense<C>;

    fn sub(self, rhs: Self) -> Self::Output {
        Dense::from_rational(self.amount.sub(&rhs.amount))
    }
}

impl<C: Currency> Neg for Dense<C> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from_rational(self.amount.neg())
    }
}

impl<C: Currency> Neg for &Dense<C> {
    type Output = Dense<C>;

    fn neg(self) -> Self::Output {
        Dense::from_rational(self.amount.neg())
    }
}

// ============================================================================
// Display
// ============================================================================

impl<C: Currency> fmt::Display for Dense<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount, C::CODE)
    }
}

// ============================================================================
// Serde (rational string form; the currency is carried by the type)
// ============================================================================

#[cfg(feature = "serde")]
impl<C: Currency> serde::Serialize for Dense<C> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.amount.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de, C: Currency> serde::Deserialize<'de> for Dense<C> {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        let amount: Rational = s
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid amount: {}", s)))?;
        Ok(Self::from_rational(amount))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::currency::{Eur, Usd, Xau};
    use crate::scale::{eur, xau};

    fn rat(n: i64, d: i64) -> Rational {
        Rational::new(Integer::from(n), Integer::from(d)).unwrap()
    }

    fn usd(n: i64) -> Dense<Usd> {
        Dense::from_integer(Integer::from(n))
    }

    #[test]
    fn test_from_integer() {
        let two = usd(2);
        assert_eq!(two.rational().numer(), &Integer::from(2));
        assert_eq!(two.rational().denom(), &Integer::one());
    }

    #[test]
    fn test_from_discrete() {
        let one_cent = Discrete::new(Integer::one(), eur::CENT);
        assert_eq!(
            Dense::<Eur>::from_discrete(&one_cent).unwrap().rational(),
            &rat(1, 100)
        );

        let one_euro = Discrete::new(Integer::one(), eur::EURO);
        assert_eq!(
            Dense::<Eur>::from_discrete(&one_euro).unwrap().rational(),
            &rat(1, 1)
        );

        let one_gram = Discrete::new(Integer::one(), xau::GRAM);
        assert_eq!(
            Dense::<Xau>::from_discrete(&one_gram).unwrap().rational(),
            &rat(1_000_000, 31_103_477)
        );
    }

    #[test]
    fn test_from_decimal() {
        use rust_decimal::Decimal;

        let d = Decimal::new(-124, 2); // -1.24
        let amount = Dense::<Eur>::from_decimal(d);
        assert_eq!(amount.rational(), &rat(-124, 100));

        let whole = Dense::<Eur>::from_decimal(Decimal::new(5, 0));
        assert_eq!(whole.rational(), &rat(5, 1));
    }

    #[test]
    fn test_zero() {
        let zero = Dense::<Usd>::zero();
        assert!(zero.is_zero());
        assert_eq!(&zero + &usd(3), usd(3));
    }

    #[test]
    fn test_ring_add() {
        let sum = usd(2) + usd(3);
        assert_eq!(sum.rational().numer(), &Integer::from(5));
        assert_eq!(sum.rational().denom(), &Integer::one());
    }

    #[test]
    fn test_sub_and_neg() {
        let diff = usd(2) - usd(3);
        assert_eq!(diff, usd(-1));
        assert_eq!(-usd(4), usd(-4));
        assert!(diff.is_negative());
    }

    #[test]
    fn test_mul_scalar() {
        let product = usd(4).mul_scalar(&rat(3, 1));
        assert_eq!(product.rational().numer(), &Integer::from(12));
        assert_eq!(product.rational().denom(), &Integer::one());
    }

    #[test]
    fn test_div_scalar() {
        let quotient = usd(4).div_scalar(&rat(3, 1)).unwrap();
        assert_eq!(quotient.rational().numer(), &Integer::from(4));
        assert_eq!(quotient.rational().denom(), &Integer::from(3));

        let err = usd(4).div_scalar(&Rational::zero());
        assert_eq!(err.unwrap_err(), crate::numeric::MoneyError::DivisionByZero);
    }

    #[test]
    fn test_no_loss_through_scalar_round_trip() {
        let x = usd(4);
        let k = rat(3, 1);
        let y = x.mul_scalar(&k).div_scalar(&k).unwrap();
        assert_eq!(y, x);
    }

    #[test]
    fn test_simplify_preserves_value() {
        let amount = Dense::<Eur>::from_rational(rat(4, 2));
        let simplified = amount.simplify();
        assert_eq!(simplified.rational().numer(), &Integer::from(2));
        assert_eq!(simplified.rational().denom(), &Integer::one());
        assert_eq!(simplified, amount);
    }

    #[test]
    fn test_display() {
        let amount = Dense::<Eur>::from_rational(rat(-124, 100));
        assert_eq!(amount.to_string(), "-124/100 EUR");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_round_trip() {
        let amount = Dense::<Eur>::from_rational(rat(-124, 100));
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, "\"-124/100\"");

        let back: Dense<Eur> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, amount);
    }
}
