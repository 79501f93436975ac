//! Bitcoin units: bitcoin (base) and satoshi.

use std::collections::HashMap;

use super::{ratio, Key};
use crate::money::{Btc, Currency, Format};
use crate::numeric::Rational;

/// The base unit: 1 bitcoin.
pub const BITCOIN: Format<Btc> = Format::new("bitcoin");
/// 1/100000000 bitcoin.
pub const SATOSHI: Format<Btc> = Format::new("satoshi");

pub(crate) fn register(table: &mut HashMap<Key, Rational>) {
    table.insert((Btc::CODE, BITCOIN.unit()), ratio(1, 1));
    table.insert((Btc::CODE, SATOSHI.unit()), ratio(1, 100_000_000));
}
