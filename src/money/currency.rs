// ============================================================================
// Currency Tags
// Type-level currency markers for compile-time mix-up protection
// ============================================================================

use std::fmt;

/// A currency, used as a type parameter on [`Dense`](crate::money::Dense),
/// [`Discrete`](crate::money::Discrete) and
/// [`Format`](crate::money::Format).
///
/// Because the tag lives in the type, an operation between amounts of
/// different currencies does not compile; there is no runtime mismatch to
/// detect.
pub trait Currency: Copy + Eq + fmt::Debug + Send + Sync + 'static {
    /// ISO 4217 (or commodity) code, e.g. "EUR", "XAU".
    const CODE: &'static str;
    /// Human-readable name.
    const NAME: &'static str;
}

macro_rules! currencies {
    ($($(#[$doc:meta])* $ty:ident => $code:literal, $name:literal;)*) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            pub struct $ty;

            impl Currency for $ty {
                const CODE: &'static str = $code;
                const NAME: &'static str = $name;
            }
        )*
    };
}

currencies! {
    /// Euro
    Eur => "EUR", "Euro";
    /// US Dollar
    Usd => "USD", "United States Dollar";
    /// Pound Sterling
    Gbp => "GBP", "Pound Sterling";
    /// Japanese Yen
    Jpy => "JPY", "Japanese Yen";
    /// Gold, denominated in troy ounces
    Xau => "XAU", "Gold";
    /// Bitcoin
    Btc => "BTC", "Bitcoin";
}
