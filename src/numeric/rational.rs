// ============================================================================
// Rational Numbers
// Exact fractions of two arbitrary-precision integers
// ============================================================================

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use super::errors::{MoneyError, MoneyResult};
use super::integer::Integer;

/// An exact rational number: a pair of [`Integer`] numerator and nonzero
/// denominator.
///
/// The pair is stored as constructed; reduction to lowest terms happens
/// only through the explicit [`Rational::simplify`] step. Equality and
/// ordering are defined by cross-multiplication, never by reducing or by
/// converting to floating point, so two representations of the same value
/// always compare equal regardless of form.
///
/// # Example
/// ```
/// use exact_money::numeric::{Integer, Rational};
///
/// let half = Rational::new(Integer::from(2), Integer::from(4)).unwrap();
/// assert_eq!(half.simplify(), Rational::new(Integer::from(1), Integer::from(2)).unwrap());
/// ```
#[derive(Clone)]
pub struct Rational {
    numer: Integer,
    denom: Integer,
}

impl Rational {
    /// Create a rational from a numerator and denominator.
    ///
    /// # Errors
    /// Returns `DivisionByZero` if `denom` is zero.
    pub fn new(numer: Integer, denom: Integer) -> MoneyResult<Self> {
        if denom.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        Ok(Self { numer, denom })
    }

    /// The integer `n` as the rational `n/1`.
    pub fn from_integer(numer: Integer) -> Self {
        Self {
            numer,
            denom: Integer::one(),
        }
    }

    /// The constant 0/1.
    pub fn zero() -> Self {
        Self::from_integer(Integer::zero())
    }

    /// The constant 1/1.
    pub fn one() -> Self {
        Self::from_integer(Integer::one())
    }

    /// The numerator as constructed.
    pub fn numer(&self) -> &Integer {
        &self.numer
    }

    /// The denominator as constructed. Never zero.
    pub fn denom(&self) -> &Integer {
        &self.denom
    }

    /// Reduce to lowest terms: divide numerator and denominator by their
    /// greatest common divisor.
    ///
    /// The sign placement is preserved exactly as stored; a negative
    /// denominator stays in the denominator (`2/-1` simplifies to `2/-1`,
    /// while `-4/2` simplifies to `-2/1`). Idempotent, and the represented
    /// value never changes.
    pub fn simplify(&self) -> Self {
        let g = self.numer.gcd(&self.denom);
        if g.is_zero() {
            // Numerator and denominator both zero is unreachable: the
            // denominator is nonzero by construction.
            return self.clone();
        }
        Self {
            numer: self.numer.div_mod_floor(&g).0,
            denom: self.denom.div_mod_floor(&g).0,
        }
    }

    /// Check if the represented value is zero.
    pub fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }

    /// Check if the represented value is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.numer.is_negative() != self.denom.is_negative() && !self.numer.is_zero()
    }

    /// Exact addition: `a/b + c/d = (ad + cb) / bd`.
    pub fn add(&self, rhs: &Self) -> Self {
        Self {
            numer: &(&self.numer * &rhs.denom) + &(&rhs.numer * &self.denom),
            denom: &self.denom * &rhs.denom,
        }
    }

    /// Exact subtraction: `a/b - c/d = (ad - cb) / bd`.
    pub fn sub(&self, rhs: &Self) -> Self {
        Self {
            numer: &(&self.numer * &rhs.denom) - &(&rhs.numer * &self.denom),
            denom: &self.denom * &rhs.denom,
        }
    }

    /// Exact multiplication: `a/b * c/d = ac / bd`.
    pub fn mul(&self, rhs: &Self) -> Self {
        Self {
            numer: &self.numer * &rhs.numer,
            denom: &self.denom * &rhs.denom,
        }
    }

    /// Exact division: `a/b / c/d = ad / bc`.
    ///
    /// # Errors
    /// Returns `DivisionByZero` when `rhs` represents zero.
    pub fn div(&self, rhs: &Self) -> MoneyResult<Self> {
        if rhs.is_zero() {
            return Err(MoneyError::DivisionByZero);
        }
        Ok(Self {
            numer: &self.numer * &rhs.denom,
            denom: &self.denom * &rhs.numer,
        })
    }

    /// Multiplicative inverse.
    ///
    /// # Errors
    /// Returns `DivisionByZero` when the value is zero.
    pub fn recip(&self) -> MoneyResult<Self> {
        Self::one().div(self)
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self {
            numer: self.numer.abs(),
            denom: self.denom.abs(),
        }
    }

    /// Negation.
    pub fn neg(&self) -> Self {
        Self {
            numer: -&self.numer,
            denom: self.denom.clone(),
        }
    }

    /// Numerator and denominator with the sign moved into the numerator,
    /// so the returned denominator is strictly positive.
    fn normalized(&self) -> (Integer, Integer) {
        if self.denom.is_negative() {
            (-&self.numer, -&self.denom)
        } else {
            (self.numer.clone(), self.denom.clone())
        }
    }

    // ========================================================================
    // Rounding to Integer
    // ========================================================================

    /// Largest integer not greater than the value.
    pub fn floor_int(&self) -> Integer {
        let (n, d) = self.normalized();
        n.div_mod_floor(&d).0
    }

    /// Smallest integer not less than the value.
    pub fn ceil_int(&self) -> Integer {
        let (n, d) = self.normalized();
        let (q, r) = n.div_mod_floor(&d);
        if r.is_zero() {
            q
        } else {
            q + Integer::one()
        }
    }

    /// Integer part: rounds toward zero, sign preserved.
    pub fn trunc_int(&self) -> Integer {
        let (n, d) = self.normalized();
        let (q, r) = n.div_mod_floor(&d);
        if n.is_negative() && !r.is_zero() {
            q + Integer::one()
        } else {
            q
        }
    }

    /// Nearest integer; ties round away from zero (`5/2 -> 3`,
    /// `-5/2 -> -3`).
    pub fn round_int(&self) -> Integer {
        let (n, d) = self.normalized();
        let (q, r) = n.div_mod_floor(&d);
        // The fractional part is r/d with r in [0, d); compare it to 1/2
        // via 2r vs d to stay in integer arithmetic.
        match (&r * &Integer::two()).compare(&d) {
            Ordering::Less => q,
            Ordering::Greater => q + Integer::one(),
            Ordering::Equal => {
                if n.is_negative() {
                    q
                } else {
                    q + Integer::one()
                }
            },
        }
    }
}

// ============================================================================
// Equality and Ordering (cross-multiplication, no float conversion)
// ============================================================================

impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        let (a, b) = self.normalized();
        let (c, d) = other.normalized();
        &a * &d == &c * &b
    }
}

impl Eq for Rational {}

impl PartialOrd for Rational {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Rational {
    fn cmp(&self, other: &Self) -> Ordering {
        let (a, b) = self.normalized();
        let (c, d) = other.normalized();
        // b and d are positive, so a/b < c/d iff a*d < c*b.
        (&a * &d).compare(&(&c * &b))
    }
}

// ============================================================================
// Display and Parsing
// ============================================================================

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({}/{})", self.numer, self.denom)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numer, self.denom)
    }
}

impl FromStr for Rational {
    type Err = MoneyError;

    /// Parse `"n/d"` or a plain integer `"n"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('/') {
            Some((n, d)) => {
                let numer = n.parse::<Integer>()?;
                let denom = d.parse::<Integer>()?;
                Self::new(numer, denom)
            },
            None => Ok(Self::from_integer(s.parse::<Integer>()?)),
        }
    }
}

// ============================================================================
// Serde (as the "n/d" string form)
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Rational {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Rational {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid rational: {}", s)))
    }
}

// ============================================================================
// Tests
// ============================================================================
