// ============================================================================
// Scale Table
// Registry of subdivision units and their scale factors per currency
// ============================================================================
//
// Each currency module registers its units as (currency code, unit name)
// -> Rational scale factor relative to the currency's base unit (the unit
// with factor 1/1). Built-in currencies are registered on first access;
// downstream crates can add their own through `register_unit`. Lookups are
// read-locked and safe for concurrent use.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use parking_lot::RwLock;

use crate::money::Currency;
use crate::numeric::{Integer, MoneyError, MoneyResult, Rational};

pub mod btc;
pub mod eur;
pub mod gbp;
pub mod jpy;
pub mod usd;
pub mod xau;

pub(crate) type Key = (&'static str, &'static str);
type Table = HashMap<Key, Rational>;

static SCALE_TABLE: Lazy<RwLock<Table>> = Lazy::new(|| {
    let mut table = Table::new();
    btc::register(&mut table);
    eur::register(&mut table);
    gbp::register(&mut table);
    jpy::register(&mut table);
    usd::register(&mut table);
    xau::register(&mut table);
    tracing::trace!(units = table.len(), "scale table initialized");
    RwLock::new(table)
});

/// Build a scale factor from literal parts (registration helper).
pub(crate) fn ratio(numer: i64, denom: i64) -> Rational {
    Rational::new(Integer::from(numer), Integer::from(denom)).expect("nonzero denominator")
}

/// The scale factor of `unit` relative to currency `C`'s base unit.
///
/// # Errors
/// Returns `UnknownUnit` if the (currency, unit) pair is not registered.
pub fn scale_factor<C: Currency>(unit: &'static str) -> MoneyResult<Rational> {
    let table = SCALE_TABLE.read();
    match table.get(&(C::CODE, unit)) {
        Some(scale) => Ok(scale.clone()),
        None => {
            tracing::debug!(currency = C::CODE, unit, "scale table lookup miss");
            Err(MoneyError::UnknownUnit)
        },
    }
}

/// Register a unit for currency `C` with the given scale factor, making it
/// available to lookups and conversions. Re-registering a unit replaces
/// its factor.
///
/// # Errors
/// Returns `InvalidInput` for a zero or negative scale factor (no unit can
/// be worth zero or negative base units; a negative factor would flip the
/// remainder signs of the rounding conversions).
pub fn register_unit<C: Currency>(unit: &'static str, scale: Rational) -> MoneyResult<()> {
    if scale.is_zero() || scale.is_negative() {
        return Err(MoneyError::InvalidInput);
    }
    tracing::trace!(currency = C::CODE, unit, scale = %scale, "registering unit");
    SCALE_TABLE.write().insert((C::CODE, unit), scale);
    Ok(())
}

/// Enumerate the units registered for currency `C` with their scale
/// factors. Order is unspecified.
pub fn registered_units<C: Currency>() -> Vec<(&'static str, Rational)> {
    SCALE_TABLE
        .read()
        .iter()
        .filter(|((code, _), _)| *code == C::CODE)
        .map(|((_, unit), scale)| (*unit, scale.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::{Eur, Jpy, Xau};

    #[test]
    fn test_scale_factor_builtin() {
        assert_eq!(scale_factor::<Eur>("cent").unwrap(), ratio(1, 100));
        assert_eq!(scale_factor::<Eur>("euro").unwrap(), ratio(1, 1));
        assert_eq!(
            scale_factor::<Xau>("gram").unwrap(),
            ratio(1_000_000, 31_103_477)
        );
    }

    #[test]
    fn test_scale_factor_unknown() {
        assert_eq!(
            scale_factor::<Eur>("crown").unwrap_err(),
            MoneyError::UnknownUnit
        );
        // A unit name registered for another currency does not leak across
        assert_eq!(
            scale_factor::<Jpy>("cent").unwrap_err(),
            MoneyError::UnknownUnit
        );
    }

    #[test]
    fn test_registered_units() {
        let units = registered_units::<Eur>();
        assert_eq!(units.len(), 2);
        assert!(units.iter().any(|(unit, _)| *unit == "euro"));
        assert!(units.iter().any(|(unit, _)| *unit == "cent"));
    }

    #[test]
    fn test_register_unit() {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        struct Xts;
        impl Currency for Xts {
            const CODE: &'static str = "XTS";
            const NAME: &'static str = "Test Currency";
        }

        register_unit::<Xts>("piece", ratio(1, 1)).unwrap();
        register_unit::<Xts>("shred", ratio(1, 64)).unwrap();
        assert_eq!(scale_factor::<Xts>("shred").unwrap(), ratio(1, 64));

        assert_eq!(
            register_unit::<Xts>("void", ratio(0, 1)).unwrap_err(),
            MoneyError::InvalidInput
        );
    }

    #[test]
    fn test_register_unit_rejects_negative_scale() {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        struct Xxa;
        impl Currency for Xxa {
            const CODE: &'static str = "XXA";
            const NAME: &'static str = "Negative Scale Test";
        }

        // A negative factor would flip the remainder signs of floor/ceil,
        // so it must never enter the table.
        assert_eq!(
            register_unit::<Xxa>("anticent", ratio(-1, 100)).unwrap_err(),
            MoneyError::InvalidInput
        );
        // Same with the sign carried by the denominator
        assert_eq!(
            register_unit::<Xxa>("antibit", ratio(1, -64)).unwrap_err(),
            MoneyError::InvalidInput
        );
        assert_eq!(
            scale_factor::<Xxa>("anticent").unwrap_err(),
            MoneyError::UnknownUnit
        );
    }
}
