//! Locale tags.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use boardroom_core::ValueObject;

use crate::FormatError;

/// A `language[-Script][-REGION]` tag with normalized casing.
///
/// Extension and variant subtags (`de-DE-u-nu-latn`) are accepted and
/// dropped: they do not change any of the formats this crate produces.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LocaleTag {
    language: String,
    script: Option<String>,
    region: Option<String>,
}

impl LocaleTag {
    pub fn parse(tag: &str) -> Result<Self, FormatError> {
        let malformed = || FormatError::MalformedLocale(tag.to_string());

        let mut subtags = tag.split('-');
        let language = subtags.next().ok_or_else(malformed)?;
        if !(2..=3).contains(&language.len()) || !language.bytes().all(|b| b.is_ascii_alphabetic())
        {
            return Err(malformed());
        }

        let mut script = None;
        let mut region = None;
        let mut rest_started = false;
        for sub in subtags {
            if sub.is_empty() || sub.len() > 8 || !sub.bytes().all(|b| b.is_ascii_alphanumeric()) {
                return Err(malformed());
            }
            if rest_started {
                continue;
            }

            let alpha = sub.bytes().all(|b| b.is_ascii_alphabetic());
            let digits = sub.bytes().all(|b| b.is_ascii_digit());
            if script.is_none() && region.is_none() && sub.len() == 4 && alpha {
                let mut s = sub.to_ascii_lowercase();
                s[..1].make_ascii_uppercase();
                script = Some(s);
            } else if region.is_none() && ((sub.len() == 2 && alpha) || (sub.len() == 3 && digits)) {
                region = Some(sub.to_ascii_uppercase());
            } else {
                rest_started = true;
            }
        }

        Ok(Self {
            language: language.to_ascii_lowercase(),
            script,
            region,
        })
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    pub fn script(&self) -> Option<&str> {
        self.script.as_deref()
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }
}

impl ValueObject for LocaleTag {}

impl FromStr for LocaleTag {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for LocaleTag {
    type Error = FormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<LocaleTag> for String {
    fn from(value: LocaleTag) -> Self {
        value.to_string()
    }
}

impl core::fmt::Display for LocaleTag {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.language)?;
        if let Some(script) = &self.script {
            write!(f, "-{script}")?;
        }
        if let Some(region) = &self.region {
            write!(f, "-{region}")?;
        }
        Ok(())
    }
}
