//! Static locale data.
//!
//! Only what the dashboard formats is recorded: separators, where the
//! currency symbol and the percent sign go, and the short compact-notation
//! suffixes.
//! Spacing characters follow CLDR (U+00A0 no-break space, U+202F narrow
//! no-break space).

use crate::{FormatError, LocaleTag};

/// Stands for the currency symbol inside currency [`Affixes`] (CLDR `¤`).
pub const CURRENCY_SIGN: char = '¤';

/// Text placed around a formatted number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affixes {
    pub prefix: &'static str,
    pub suffix: &'static str,
}

/// A compact-notation step: values ≥ 10^exponent are divided by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompactUnit {
    pub exponent: u32,
    pub suffix: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocaleData {
    pub tag: &'static str,
    pub decimal: &'static str,
    pub group: &'static str,
    pub minus: &'static str,
    /// Currency symbol placement, with [`CURRENCY_SIGN`] as placeholder.
    pub currency: Affixes,
    pub percent: Affixes,
    /// Ascending by exponent.
    pub compact: &'static [CompactUnit],
}

impl LocaleData {
    /// Largest compact unit for a number with `integer_digits` digits before
    /// the decimal point.
    pub fn compact_unit(&self, integer_digits: usize) -> Option<&'static CompactUnit> {
        self.compact
            .iter()
            .rev()
            .find(|u| (u.exponent as usize) < integer_digits)
    }

    fn language(&self) -> &'static str {
        self.tag.split('-').next().unwrap_or(self.tag)
    }

    fn region(&self) -> Option<&'static str> {
        self.tag.split('-').nth(1)
    }
}

const EN_COMPACT: &[CompactUnit] = &[
    CompactUnit { exponent: 3, suffix: "K" },
    CompactUnit { exponent: 6, suffix: "M" },
    CompactUnit { exponent: 9, suffix: "B" },
    CompactUnit { exponent: 12, suffix: "T" },
];

// German short compact notation leaves thousands alone.
const DE_COMPACT: &[CompactUnit] = &[
    CompactUnit { exponent: 6, suffix: "\u{a0}Mio." },
    CompactUnit { exponent: 9, suffix: "\u{a0}Mrd." },
    CompactUnit { exponent: 12, suffix: "\u{a0}Bio." },
];

const FR_COMPACT: &[CompactUnit] = &[
    CompactUnit { exponent: 3, suffix: "\u{a0}k" },
    CompactUnit { exponent: 6, suffix: "\u{a0}M" },
    CompactUnit { exponent: 9, suffix: "\u{a0}Md" },
    CompactUnit { exponent: 12, suffix: "\u{a0}Bn" },
];

const EN_US: LocaleData = LocaleData {
    tag: "en-US",
    decimal: ".",
    group: ",",
    minus: "-",
    currency: Affixes { prefix: "¤", suffix: "" },
    percent: Affixes { prefix: "", suffix: "%" },
    compact: EN_COMPACT,
};

const EN_GB: LocaleData = LocaleData { tag: "en-GB", ..EN_US };

const DE_DE: LocaleData = LocaleData {
    tag: "de-DE",
    decimal: ",",
    group: ".",
    minus: "-",
    currency: Affixes { prefix: "", suffix: "\u{a0}¤" },
    percent: Affixes { prefix: "", suffix: "\u{a0}%" },
    compact: DE_COMPACT,
};

const FR_FR: LocaleData = LocaleData {
    tag: "fr-FR",
    decimal: ",",
    group: "\u{202f}",
    minus: "-",
    currency: Affixes { prefix: "", suffix: "\u{a0}¤" },
    percent: Affixes { prefix: "", suffix: "\u{202f}%" },
    compact: FR_COMPACT,
};

/// All supported locales. The first entry per language is that language's
/// default region.
pub static LOCALES: &[LocaleData] = &[EN_US, EN_GB, DE_DE, FR_FR];

/// Find locale data for a parsed tag.
///
/// Exact language+region match first, then the language default. A language
/// without any data is an error; there is no cross-language fallback.
pub fn resolve(tag: &LocaleTag) -> Result<&'static LocaleData, FormatError> {
    if let Some(region) = tag.region() {
        if let Some(exact) = for_language(tag.language()).find(|d| d.region() == Some(region)) {
            return Ok(exact);
        }
    }

    match for_language(tag.language()).next() {
        Some(fallback) => {
            if tag.region().is_some() {
                tracing::debug!(requested = %tag, resolved = fallback.tag, "locale region fallback");
            }
            Ok(fallback)
        }
        None => Err(FormatError::UnsupportedLocale(tag.to_string())),
    }
}

fn for_language(language: &str) -> impl Iterator<Item = &'static LocaleData> + '_ {
    LOCALES.iter().filter(move |d| d.language() == language)
}

/// Parse and resolve in one step.
pub fn resolve_str(tag: &str) -> Result<&'static LocaleData, FormatError> {
    resolve(&LocaleTag::parse(tag)?)
}
