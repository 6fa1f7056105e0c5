//! Euro, percent and year formatting.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use boardroom_core::{DomainError, DomainResult};

use crate::FormatError;
use crate::data::{Affixes, CURRENCY_SIGN, LocaleData, resolve_str};
use crate::decimal::{FixedDecimal, Grouping, MAX_FRACTION_DIGITS};

/// The one currency the dashboard reports in.
pub const CURRENCY_CODE: &str = "EUR";

/// Display symbol for an ISO 4217 code; codes without one print as the code.
pub fn currency_symbol(code: &str) -> &str {
    match code {
        "EUR" => "€",
        "USD" => "$",
        "GBP" => "£",
        other => other,
    }
}

/// Replace the currency placeholder with the symbol of [`CURRENCY_CODE`].
fn fill(affix: &'static str) -> Cow<'static, str> {
    if affix.contains(CURRENCY_SIGN) {
        Cow::Owned(affix.replace(CURRENCY_SIGN, currency_symbol(CURRENCY_CODE)))
    } else {
        Cow::Borrowed(affix)
    }
}

/// Bounds on digits after the decimal point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FractionDigits {
    pub min: u8,
    pub max: u8,
}

impl FractionDigits {
    pub const fn new(min: u8, max: u8) -> Self {
        Self { min, max }
    }

    pub const fn exactly(digits: u8) -> Self {
        Self::new(digits, digits)
    }

    fn validate(&self, what: &str) -> DomainResult<()> {
        if self.max > MAX_FRACTION_DIGITS {
            return Err(DomainError::validation(format!(
                "{what}: at most {MAX_FRACTION_DIGITS} fraction digits are supported, got {}",
                self.max
            )));
        }
        if self.min > self.max {
            return Err(DomainError::validation(format!(
                "{what}: min fraction digits ({}) exceed max ({})",
                self.min, self.max
            )));
        }
        Ok(())
    }

    /// (min, max) clamped into a usable range.
    fn bounds(&self) -> (usize, usize) {
        let max = self.max.min(MAX_FRACTION_DIGITS);
        (self.min.min(max) as usize, max as usize)
    }
}

/// Rounding precision for the formats that allow fraction digits.
///
/// Full currency and years always use zero fraction digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Precision {
    /// Compact currency, e.g. `€24.0B`.
    pub compact: FractionDigits,
    /// Percentages, e.g. `4.3%`.
    pub percent: FractionDigits,
}

impl Default for Precision {
    fn default() -> Self {
        Self {
            compact: FractionDigits::exactly(1),
            percent: FractionDigits::new(0, 1),
        }
    }
}

impl Precision {
    pub fn validate(&self) -> DomainResult<()> {
        self.compact.validate("compact precision")?;
        self.percent.validate("percent precision")
    }
}

/// Locale-aware number formatter.
///
/// Pure: the same (value, locale) always gives the same string. An
/// unsupported or malformed locale is the only error and is passed through
/// untouched.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NumberFormatter {
    precision: Precision,
}

impl NumberFormatter {
    pub fn new(precision: Precision) -> Self {
        Self { precision }
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Euro amount in short compact notation (`€24.0B`, `24,0 Mrd. €`).
    pub fn format_money_compact(&self, value: f64, locale: &str) -> Result<String, FormatError> {
        let data = resolve_str(locale)?;
        Ok(self.money_compact(value, data))
    }

    /// Euro amount without compaction or fraction digits (`€24,000,000,000`).
    pub fn format_money_full(&self, value: f64, locale: &str) -> Result<String, FormatError> {
        let data = resolve_str(locale)?;
        Ok(whole(value, data, data.currency))
    }

    /// Fraction as percentage (`0.42` → `42%`).
    pub fn format_percent(&self, value: f64, locale: &str) -> Result<String, FormatError> {
        let data = resolve_str(locale)?;
        let Some(mut d) = FixedDecimal::from_f64(value) else {
            return Ok(non_finite(value, data, data.percent));
        };
        let (min, max) = self.precision.percent.bounds();
        d.shift(2);
        d.round(max);
        d.set_min_fraction(min);
        Ok(assemble(&d, data, data.percent, "", Grouping::Always))
    }

    /// Grouped integer (`2024` → `2,024` / `2.024`).
    pub fn format_year(&self, value: f64, locale: &str) -> Result<String, FormatError> {
        let data = resolve_str(locale)?;
        Ok(whole(value, data, Affixes { prefix: "", suffix: "" }))
    }

    fn money_compact(&self, value: f64, data: &LocaleData) -> String {
        let Some(original) = FixedDecimal::from_f64(value) else {
            return non_finite(value, data, data.currency);
        };
        let (min, max) = self.precision.compact.bounds();

        let scale = |exponent: u32| {
            let mut d = original.clone();
            d.shift(-i64::from(exponent));
            d.round(max);
            d
        };

        let mut unit = data.compact_unit(original.integer_digits());
        let mut scaled = scale(unit.map_or(0, |u| u.exponent));

        // Rounding can carry into the next unit: 999.95K must print as 1.0M.
        let magnitude = scaled.integer_digits() + unit.map_or(0, |u| u.exponent as usize);
        let carried = data.compact_unit(magnitude);
        if carried != unit {
            unit = carried;
            scaled = scale(unit.map_or(0, |u| u.exponent));
        }

        scaled.set_min_fraction(min);
        assemble(
            &scaled,
            data,
            data.currency,
            unit.map_or("", |u| u.suffix),
            Grouping::Min2,
        )
    }
}

fn whole(value: f64, data: &LocaleData, affixes: Affixes) -> String {
    let Some(mut d) = FixedDecimal::from_f64(value) else {
        return non_finite(value, data, affixes);
    };
    d.round(0);
    assemble(&d, data, affixes, "", Grouping::Always)
}

fn assemble(
    d: &FixedDecimal,
    data: &LocaleData,
    affixes: Affixes,
    unit: &str,
    grouping: Grouping,
) -> String {
    let sign = if d.is_negative() { data.minus } else { "" };
    format!(
        "{sign}{}{}{unit}{}",
        fill(affixes.prefix),
        d.render(data, grouping),
        fill(affixes.suffix)
    )
}

fn non_finite(value: f64, data: &LocaleData, affixes: Affixes) -> String {
    let (sign, body) = if value.is_nan() {
        ("", "NaN")
    } else if value < 0.0 {
        (data.minus, "∞")
    } else {
        ("", "∞")
    };
    format!("{sign}{}{body}{}", fill(affixes.prefix), fill(affixes.suffix))
}

/// [`NumberFormatter::format_money_compact`] with default precision.
pub fn format_money_compact(value: f64, locale: &str) -> Result<String, FormatError> {
    NumberFormatter::default().format_money_compact(value, locale)
}

/// [`NumberFormatter::format_money_full`] with default precision.
pub fn format_money_full(value: f64, locale: &str) -> Result<String, FormatError> {
    NumberFormatter::default().format_money_full(value, locale)
}

/// [`NumberFormatter::format_percent`] with default precision.
pub fn format_percent(value: f64, locale: &str) -> Result<String, FormatError> {
    NumberFormatter::default().format_percent(value, locale)
}

/// [`NumberFormatter::format_year`].
pub fn format_year(value: f64, locale: &str) -> Result<String, FormatError> {
    NumberFormatter::default().format_year(value, locale)
}
