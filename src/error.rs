//! Errors returned by the case converters.

use thiserror::Error;

/// Reasons a conversion can fail.
///
/// ```
/// use casefold::{to_dot_case, CaseError};
///
/// assert_eq!(to_dot_case("   "), Err(CaseError::EmptyInput));
/// assert_eq!(to_dot_case("?!"), Err(CaseError::NoTokens));
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CaseError {
    /// The value handed to [`convert_value`](crate::inflector::convert_value)
    /// is not a string.
    #[error("expected a string, found `{found}`")]
    TypeMismatch { found: &'static str },

    /// The input is empty or whitespace-only.
    #[error("input is empty or whitespace-only")]
    EmptyInput,

    /// Tokenization left nothing to join, e.g. punctuation-only input.
    #[error("input contains no letters or digits to convert")]
    NoTokens,

    /// [`Case::from_str`](crate::Case) was given a name it doesn't know.
    #[error("unknown case `{0}`, expected one of kebab-case, camelCase, dot.case")]
    UnknownCase(String),
}

impl CaseError {
    /// Returns true if the error was caused by the content of a string
    /// argument, as opposed to its type or a bad case name.
    pub fn is_input_error(&self) -> bool {
        matches!(self, CaseError::EmptyInput | CaseError::NoTokens)
    }
}
