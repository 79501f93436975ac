// ============================================================================
// Arbitrary-Precision Integer
// Exact signed integer arithmetic with no overflow truncation
// ============================================================================

use num_bigint::BigInt;
use num_integer::Integer as NumInteger;
use num_traits::{One, Signed, Zero};
use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::str::FromStr;

use super::errors::MoneyError;

/// Arbitrary-precision signed integer.
///
/// Every arithmetic operation is exact and returns a new value; there is no
/// overflow, no truncation and no interior mutability, so values can be
/// shared freely across threads.
///
/// # Example
/// ```
/// use exact_money::numeric::Integer;
///
/// let a = Integer::from(41);
/// let b = a + Integer::one();
/// assert_eq!(b, Integer::from(42));
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Integer(BigInt);

impl Integer {
    /// Parse a decimal-digit string (optional leading `-` or `+`).
    ///
    /// Returns `None` on malformed input (empty string, embedded non-digit
    /// characters, misplaced sign). Never panics, so callers can compose
    /// this with further validation.
    pub fn wrap(s: &str) -> Option<Self> {
        s.parse::<BigInt>().ok().map(Self)
    }

    /// The constant 0.
    pub fn zero() -> Self {
        Self(BigInt::zero())
    }

    /// The constant 1.
    pub fn one() -> Self {
        Self(BigInt::one())
    }

    /// The constant 2.
    pub fn two() -> Self {
        Self(BigInt::from(2))
    }

    /// Check if the value is zero.
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Check if the value is strictly positive.
    pub fn is_positive(&self) -> bool {
        self.0.is_positive()
    }

    /// Check if the value is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    /// Absolute value.
    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Sign of the value: -1, 0 or 1.
    pub fn signum(&self) -> Self {
        Self(self.0.signum())
    }

    /// Greatest common divisor. Always non-negative.
    ///
    /// Convention: `gcd(0, 0) == 0`.
    pub fn gcd(&self, other: &Self) -> Self {
        Self(self.0.gcd(&other.0))
    }

    /// Least common multiple. Always non-negative.
    ///
    /// Convention: `lcm(x, 0) == 0` for every `x`, including `x == 0`.
    pub fn lcm(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            Self::zero()
        } else {
            Self(self.0.lcm(&other.0))
        }
    }

    /// Total order comparison, consistent with mathematical integer order.
    pub fn compare(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }

    /// Raise to a non-negative power. Exact.
    pub fn pow(&self, exp: u32) -> Self {
        Self(num_traits::Pow::pow(&self.0, exp))
    }

    /// Floor division with non-negative remainder (`other` must be nonzero;
    /// callers in this crate guarantee it by construction).
    pub(crate) fn div_mod_floor(&self, other: &Self) -> (Self, Self) {
        let (q, r) = self.0.div_mod_floor(&other.0);
        (Self(q), Self(r))
    }
}

impl From<BigInt> for Integer {
    fn from(value: BigInt) -> Self {
        Self(value)
    }
}

impl From<i32> for Integer {
    fn from(value: i32) -> Self {
        Self(BigInt::from(value))
    }
}

impl From<i64> for Integer {
    fn from(value: i64) -> Self {
        Self(BigInt::from(value))
    }
}

impl From<u64> for Integer {
    fn from(value: u64) -> Self {
        Self(BigInt::from(value))
    }
}

impl From<i128> for Integer {
    fn from(value: i128) -> Self {
        Self(BigInt::from(value))
    }
}

impl FromStr for Integer {
    type Err = MoneyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::wrap(s).ok_or(MoneyError::InvalidInput)
    }
}

// ============================================================================
// Ring Operations
// ============================================================================

impl Add for Integer {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl Add for &Integer {
    type Output = Integer;

    fn add(self, rhs: Self) -> Self::Output {
        Integer(&self.0 + &rhs.0)
    }
}

impl Sub for Integer {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl Sub for &Integer {
    type Output = Integer;

    fn sub(self, rhs: Self) -> Self::Output {
        Integer(&self.0 - &rhs.0)
    }
}

impl Mul for Integer {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Self(self.0 * rhs.0)
    }
}

impl Mul for &Integer {
    type Output = Integer;

    fn mul(self, rhs: Self) -> Self::Output {
        Integer(&self.0 * &rhs.0)
    }
}

impl Neg for Integer {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Neg for &Integer {
    type Output = Integer;

    fn neg(self) -> Self::Output {
        Integer(-&self.0)
    }
}

// ============================================================================
// Display and Debug
// ============================================================================

impl fmt::Debug for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Integer({})", self.0)
    }
}

impl fmt::Display for Integer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Serde (string form, to keep arbitrary precision intact on the wire)
// ============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for Integer {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Integer {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Integer::wrap(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid integer: {}", s)))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_valid() {
        assert_eq!(Integer::wrap("0"), Some(Integer::zero()));
        assert_eq!(Integer::wrap("42"), Some(Integer::from(42)));
        assert_eq!(Integer::wrap("-17"), Some(Integer::from(-17)));
        assert_eq!(Integer::wrap("+5"), Some(Integer::from(5)));

        // Exceeds every native width
        let huge = Integer::wrap("123456789012345678901234567890123456789").unwrap();
        assert!(huge > Integer::from(i128::MAX));
    }

    #[test]
    fn test_wrap_malformed() {
        assert_eq!(Integer::wrap(""), None);
        assert_eq!(Integer::wrap("12a3"), None);
        assert_eq!(Integer::wrap("1.5"), None);
        assert_eq!(Integer::wrap("--4"), None);
        assert_eq!(Integer::wrap("- 4"), None);
    }

    #[test]
    fn test_from_str() {
        let x: Integer = "1000".parse().unwrap();
        assert_eq!(x, Integer::from(1000));

        let err = "not_a_number".parse::<Integer>();
        assert_eq!(err, Err(MoneyError::InvalidInput));
    }

    #[test]
    fn test_constants() {
        assert!(Integer::zero().is_zero());
        assert_eq!(Integer::one(), Integer::from(1));
        assert_eq!(Integer::two(), &Integer::one() + &Integer::one());
    }

    #[test]
    fn test_ring_operations() {
        let a = Integer::from(6);
        let b = Integer::from(4);

        assert_eq!(&a + &b, Integer::from(10));
        assert_eq!(&a - &b, Integer::from(2));
        assert_eq!(&a * &b, Integer::from(24));
        assert_eq!(-&a, Integer::from(-6));

        // Exactness far beyond i64
        let big = Integer::wrap("9223372036854775807").unwrap();
        let doubled = &big + &big;
        assert_eq!(doubled.to_string(), "18446744073709551614");
    }

    #[test]
    fn test_gcd() {
        let gcd = Integer::from(12).gcd(&Integer::from(18));
        assert_eq!(gcd, Integer::from(6));

        // Non-negative regardless of operand signs
        assert_eq!(Integer::from(-12).gcd(&Integer::from(18)), Integer::from(6));
        assert_eq!(Integer::from(12).gcd(&Integer::from(-18)), Integer::from(6));

        // Documented conventions
        assert_eq!(Integer::zero().gcd(&Integer::zero()), Integer::zero());
        assert_eq!(Integer::zero().gcd(&Integer::from(7)), Integer::from(7));
    }

    #[test]
    fn test_lcm() {
        assert_eq!(Integer::from(4).lcm(&Integer::from(6)), Integer::from(12));
        assert_eq!(Integer::from(-4).lcm(&Integer::from(6)), Integer::from(12));
        assert_eq!(Integer::from(5).lcm(&Integer::zero()), Integer::zero());
        assert_eq!(Integer::zero().lcm(&Integer::zero()), Integer::zero());
    }

    #[test]
    fn test_compare() {
        let a = Integer::from(-3);
        let b = Integer::from(2);
        assert_eq!(a.compare(&b), Ordering::Less);
        assert_eq!(b.compare(&a), Ordering::Greater);
        assert_eq!(a.compare(&a.clone()), Ordering::Equal);
        assert!(a < b);
    }

    #[test]
    fn test_predicates() {
        assert!(Integer::from(3).is_positive());
        assert!(Integer::from(-3).is_negative());
        assert!(!Integer::zero().is_positive());
        assert!(!Integer::zero().is_negative());
        assert_eq!(Integer::from(-3).abs(), Integer::from(3));
        assert_eq!(Integer::from(-3).signum(), Integer::from(-1));
        assert_eq!(Integer::zero().signum(), Integer::zero());
    }

    #[test]
    fn test_div_mod_floor() {
        // Remainder is always in [0, divisor) for a positive divisor
        let (q, r) = Integer::from(-7).div_mod_floor(&Integer::from(2));
        assert_eq!(q, Integer::from(-4));
        assert_eq!(r, Integer::from(1));

        let (q, r) = Integer::from(7).div_mod_floor(&Integer::from(2));
        assert_eq!(q, Integer::from(3));
        assert_eq!(r, Integer::from(1));
    }

    #[test]
    fn test_display() {
        assert_eq!(Integer::from(-42).to_string(), "-42");
        assert_eq!(format!("{:?}", Integer::from(7)), "Integer(7)");
    }
}

#[cfg(test)]
mod ring_laws {
    use super::*;
    use quickcheck::quickcheck;

    quickcheck! {
        fn add_commutes(a: i64, b: i64) -> bool {
            &Integer::from(a) + &Integer::from(b) == &Integer::from(b) + &Integer::from(a)
        }

        fn add_associates(a: i64, b: i64, c: i64) -> bool {
            let (x, y, z) = (Integer::from(a), Integer::from(b), Integer::from(c));
            &(&x + &y) + &z == &x + &(&y + &z)
        }

        fn mul_distributes_over_add(a: i32, b: i32, c: i32) -> bool {
            let (x, y, z) = (Integer::from(a), Integer::from(b), Integer::from(c));
            &x * &(&y + &z) == &(&x * &y) + &(&x * &z)
        }

        fn sub_is_add_of_negation(a: i64, b: i64) -> bool {
            &Integer::from(a) - &Integer::from(b) == Integer::from(a) + (-Integer::from(b))
        }

        fn gcd_is_nonnegative_and_divides(a: i32, b: i32) -> bool {
            let g = Integer::from(a).gcd(&Integer::from(b));
            if g.is_zero() {
                return a == 0 && b == 0;
            }
            let (_, ra) = Integer::from(a).div_mod_floor(&g);
            let (_, rb) = Integer::from(b).div_mod_floor(&g);
            !g.is_negative() && ra.is_zero() && rb.is_zero()
        }
    }
}
