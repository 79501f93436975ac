//! Gold units, relative to the troy ounce (1 ozt = 31.103477 g, so a gram
//! is the non-decimal factor 1000000/31103477 of the base unit).

use std::collections::HashMap;

use super::{ratio, Key};
use crate::money::{Currency, Format, Xau};
use crate::numeric::Rational;

/// The base unit: 1 troy ounce.
pub const TROY_OUNCE: Format<Xau> = Format::new("troy-ounce");
/// 1000000/31103477 troy ounce.
pub const GRAM: Format<Xau> = Format::new("gram");
/// 1000/31103477 troy ounce.
pub const MILLIGRAM: Format<Xau> = Format::new("milligram");

pub(crate) fn register(table: &mut HashMap<Key, Rational>) {
    table.insert((Xau::CODE, TROY_OUNCE.unit()), ratio(1, 1));
    table.insert((Xau::CODE, GRAM.unit()), ratio(1_000_000, 31_103_477));
    table.insert((Xau::CODE, MILLIGRAM.unit()), ratio(1_000, 31_103_477));
}
