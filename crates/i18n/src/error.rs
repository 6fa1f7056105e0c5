use thiserror::Error;

/// Formatting failure.
///
/// Only the locale can be wrong; every finite or non-finite `f64` formats.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// The tag is not a well-formed `language[-Script][-REGION]` tag.
    #[error("malformed locale tag '{0}'")]
    MalformedLocale(String),

    /// Well-formed, but no locale data exists for its language.
    #[error("unsupported locale '{0}'")]
    UnsupportedLocale(String),
}
