//! `boardroom-i18n` — locale-aware formatting of euro amounts, percentages
//! and years.
//!
//! Locale data is a small static table; see [`data::LOCALES`].

pub mod data;
mod decimal;
pub mod error;
pub mod format;
pub mod locale;

pub use data::{CURRENCY_SIGN, LocaleData, resolve, resolve_str};
pub use decimal::MAX_FRACTION_DIGITS;
pub use error::FormatError;
pub use format::{
    CURRENCY_CODE, FractionDigits, NumberFormatter, Precision, currency_symbol,
    format_money_compact, format_money_full, format_percent, format_year,
};
pub use locale::LocaleTag;
