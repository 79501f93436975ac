//! Japanese yen units: the yen has no subdivision in circulation.

use std::collections::HashMap;

use super::{ratio, Key};
use crate::money::{Currency, Format, Jpy};
use crate::numeric::Rational;

/// The base unit: 1 yen.
pub const YEN: Format<Jpy> = Format::new("yen");

pub(crate) fn register(table: &mut HashMap<Key, Rational>) {
    table.insert((Jpy::CODE, YEN.unit()), ratio(1, 1));
}
