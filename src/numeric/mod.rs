// ============================================================================
// Numeric Module
// Exact arbitrary-precision arithmetic for monetary values
// ============================================================================
//
// This module provides:
// - Integer: arbitrary-precision signed integer with ring operations
// - Rational: exact fraction of two Integers with explicit simplification
// - MoneyError: error types shared by the whole crate
//
// Design principles:
// - No floating-point operations anywhere
// - Every value is immutable; every operation returns a new value
// - Recoverable conditions are returned, never thrown

mod errors;
mod integer;
mod rational;

pub use errors::{MoneyError, MoneyResult};
pub use integer::Integer;
pub use rational::Rational;
