//! Pound sterling units: pound (base) and penny.

use std::collections::HashMap;

use super::{ratio, Key};
use crate::money::{Currency, Format, Gbp};
use crate::numeric::Rational;

/// The base unit: 1 pound.
pub const POUND: Format<Gbp> = Format::new("pound");
/// 1/100 pound.
pub const PENNY: Format<Gbp> = Format::new("penny");

pub(crate) fn register(table: &mut HashMap<Key, Rational>) {
    table.insert((Gbp::CODE, POUND.unit()), ratio(1, 1));
    table.insert((Gbp::CODE, PENNY.unit()), ratio(1, 100));
}
