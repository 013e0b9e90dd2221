use once_cell::sync::Lazy;
use regex::Regex;

use crate::CaseError;

/// Provides conversion to and detection of camel case strings.
///
/// Example string `camelCase`
pub mod camel;
pub use camel::is_camel_case;
pub use camel::to_camel_case;

/// Provides conversion to and detection of kebab case strings.
///
/// Example string `kebab-case`
pub mod kebab;
pub use kebab::is_kebab_case;
pub use kebab::to_kebab_case;

/// Provides conversion to and detection of dot case strings.
///
/// Example string `dot.case`
pub mod dot;
pub use dot::is_dot_case;
pub use dot::to_dot_case;

static SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\p{L}\p{N}]").unwrap());
static SEPARATOR_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\p{L}\p{N}]+").unwrap());

/// Trims the input, rejecting it if nothing is left.
#[doc(hidden)]
pub fn validate(convertable_string: &str) -> Result<&str, CaseError> {
    let trimmed = convertable_string.trim();
    if trimmed.is_empty() {
        return Err(CaseError::EmptyInput);
    }
    Ok(trimmed)
}

/// True if any character is neither a letter nor a number.
#[doc(hidden)]
pub fn has_separator(convertable_string: &str) -> bool {
    SEPARATOR.is_match(convertable_string)
}

/// Splits on every run of non-letter, non-number characters.
#[doc(hidden)]
pub fn split_on_separators(convertable_string: &str) -> Result<Vec<&str>, CaseError> {
    let tokens: Vec<&str> = SEPARATOR_RUN
        .split(convertable_string)
        .filter(|token| !token.is_empty())
        .collect();
    if tokens.is_empty() {
        return Err(CaseError::NoTokens);
    }
    Ok(tokens)
}

fn lowercase_first(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn capitalize(token: &str) -> String {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[test]
fn test_validate_trims() {
    assert_eq!(validate("  abc\t"), Ok("abc"))
}

#[test]
fn test_validate_rejects_whitespace() {
    assert_eq!(validate(" \n\t "), Err(CaseError::EmptyInput))
}

#[test]
fn test_validate_rejects_empty() {
    assert_eq!(validate(""), Err(CaseError::EmptyInput))
}

#[test]
fn test_has_separator_underscore() {
    assert!(has_separator("foo_bar"))
}

#[test]
fn test_has_separator_when_not() {
    assert!(!has_separator("fooBar42"))
}

#[test]
fn test_has_separator_non_ascii_letters() {
    assert!(!has_separator("größeÜber"))
}

#[test]
fn test_split_on_separators_drops_empties() {
    assert_eq!(split_on_separators("--a__b--"), Ok(vec!["a", "b"]))
}

#[test]
fn test_split_on_separators_only_separators() {
    assert_eq!(split_on_separators("-*-"), Err(CaseError::NoTokens))
}

#[test]
fn test_lowercase_first_keeps_rest() {
    assert_eq!(lowercase_first("HelloWorld"), "helloWorld")
}

#[test]
fn test_capitalize_lowers_rest() {
    assert_eq!(capitalize("wORLD"), "World")
}

#[test]
fn test_capitalize_non_ascii() {
    assert_eq!(capitalize("élan"), "Élan")
}
