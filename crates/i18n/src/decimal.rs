//! Exact decimal digits of an `f64`.
//!
//! Rounding works on the shortest decimal string that round-trips to the
//! float (what `Display` prints), so `0.0425` rounds like the decimal 0.0425
//! and not like its binary approximation.

use crate::data::LocaleData;

/// Maximum fraction digits the formatter will produce.
pub const MAX_FRACTION_DIGITS: u8 = 20;

/// When to insert group separators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Grouping {
    /// Group any integer part longer than three digits.
    Always,
    /// Group only from five integer digits on (compact notation).
    Min2,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FixedDecimal {
    negative: bool,
    /// Most significant first, no leading zeros; empty means zero.
    int: Vec<u8>,
    frac: Vec<u8>,
}

impl FixedDecimal {
    /// `None` for NaN and infinities.
    pub(crate) fn from_f64(value: f64) -> Option<Self> {
        if !value.is_finite() {
            return None;
        }

        let text = format!("{}", value.abs());
        let (int_text, frac_text) = text.split_once('.').unwrap_or((text.as_str(), ""));
        let mut decimal = Self {
            negative: value < 0.0,
            int: int_text.bytes().map(|b| b - b'0').collect(),
            frac: frac_text.bytes().map(|b| b - b'0').collect(),
        };
        decimal.strip_leading_zeros();
        Some(decimal)
    }

    fn strip_leading_zeros(&mut self) {
        let zeros = self.int.iter().take_while(|d| **d == 0).count();
        self.int.drain(..zeros);
    }

    /// Number of digits before the decimal point (0 for values below one).
    pub(crate) fn integer_digits(&self) -> usize {
        self.int.len()
    }

    pub(crate) fn is_zero(&self) -> bool {
        self.int.iter().chain(&self.frac).all(|d| *d == 0)
    }

    /// Shows a minus sign only when something non-zero is left after rounding.
    pub(crate) fn is_negative(&self) -> bool {
        self.negative && !self.is_zero()
    }

    /// Multiply by 10^`places` (negative places divide).
    pub(crate) fn shift(&mut self, places: i64) {
        let mut point = self.int.len() as i64 + places;
        let mut digits = std::mem::take(&mut self.int);
        digits.append(&mut self.frac);

        if point < 0 {
            let pad = point.unsigned_abs() as usize;
            digits.splice(0..0, std::iter::repeat_n(0, pad));
            point = 0;
        }
        let point = point as usize;
        if point > digits.len() {
            digits.resize(point, 0);
        }

        self.frac = digits.split_off(point);
        self.int = digits;
        self.strip_leading_zeros();
        while self.frac.last() == Some(&0) {
            self.frac.pop();
        }
    }

    /// Round half away from zero to at most `max` fraction digits.
    pub(crate) fn round(&mut self, max: usize) {
        if self.frac.len() <= max {
            return;
        }
        let round_up = self.frac[max] >= 5;
        self.frac.truncate(max);
        if round_up {
            self.increment_last();
        }
    }

    fn increment_last(&mut self) {
        for d in self.frac.iter_mut().rev().chain(self.int.iter_mut().rev()) {
            if *d == 9 {
                *d = 0;
            } else {
                *d += 1;
                return;
            }
        }
        // Carried out of every digit: 9.99 -> 10.00
        self.int.insert(0, 1);
    }

    /// Drop trailing zeros down to `min` fraction digits, then pad up to it.
    pub(crate) fn set_min_fraction(&mut self, min: usize) {
        while self.frac.len() > min && self.frac.last() == Some(&0) {
            self.frac.pop();
        }
        if self.frac.len() < min {
            self.frac.resize(min, 0);
        }
    }

    /// Digits with locale separators, without sign or affixes.
    pub(crate) fn render(&self, data: &LocaleData, grouping: Grouping) -> String {
        let mut out = String::with_capacity(self.int.len() * 2 + self.frac.len() + 2);

        if self.int.is_empty() {
            out.push('0');
        } else {
            let len = self.int.len();
            let grouped = match grouping {
                Grouping::Always => len > 3,
                Grouping::Min2 => len > 4,
            };
            for (i, d) in self.int.iter().enumerate() {
                if grouped && i > 0 && (len - i) % 3 == 0 {
                    out.push_str(data.group);
                }
                out.push(char::from(b'0' + d));
            }
        }

        if !self.frac.is_empty() {
            out.push_str(data.decimal);
            out.extend(self.frac.iter().map(|d| char::from(b'0' + d)));
        }
        out
    }
}
