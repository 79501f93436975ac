//! US dollar units: dollar (base) and cent.

use std::collections::HashMap;

use super::{ratio, Key};
use crate::money::{Currency, Format, Usd};
use crate::numeric::Rational;

/// The base unit: 1 dollar.
pub const DOLLAR: Format<Usd> = Format::new("dollar");
/// 1/100 dollar.
pub const CENT: Format<Usd> = Format::new("cent");

pub(crate) fn register(table: &mut HashMap<Key, Rational>) {
    table.insert((Usd::CODE, DOLLAR.unit()), ratio(1, 1));
    table.insert((Usd::CODE, CENT.unit()), ratio(1, 100));
}
