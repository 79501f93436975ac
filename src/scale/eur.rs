//! Euro units: euro (base) and cent.

use std::collections::HashMap;

use super::{ratio, Key};
use crate::money::{Currency, Eur, Format};
use crate::numeric::Rational;

/// The base unit: 1 euro.
pub const EURO: Format<Eur> = Format::new("euro");
/// 1/100 euro.
pub const CENT: Format<Eur> = Format::new("cent");

pub(crate) fn register(table: &mut HashMap<Key, Rational>) {
    table.insert((Eur::CODE, EURO.unit()), ratio(1, 1));
    table.insert((Eur::CODE, CENT.unit()), ratio(1, 100));
}
