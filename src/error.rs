use thiserror::Error;

/// Errors surfaced by the converter. Every public operation either succeeds
/// completely or fails with one of these.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// A configured locale has no bundled resource.
    #[error("Locale \"{0}\" is not supported.")]
    UnsupportedLocale(String),

    /// The configured locale list is empty.
    #[error("At least one locale has to be configured.")]
    NoLocales,

    /// A locale resource does not satisfy the resource contract.
    #[error("Locale \"{locale}\" is invalid: {reason}")]
    InvalidLocale { locale: String, reason: String },

    /// No locale/format combination parses the residual date text.
    #[error("Date input \"{0}\" matches none of the available formats.")]
    NoMatchingFormat(String),

    /// The string is not EDTF compliant or uses unsupported features.
    #[error("Invalid EDTF: \"{0}\" is not EDTF compliant or contains unsupported features.")]
    InvalidEdtf(String),

    /// A custom modifier or separator pattern does not compile.
    #[error("invalid detection pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// Options or locale JSON could not be deserialized.
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}
