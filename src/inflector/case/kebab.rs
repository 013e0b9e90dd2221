use super::*;

static WHITESPACE_OR_UNDERSCORE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\s_]+").unwrap());
static HYPHENS: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").unwrap());

/// Converts a `&str` to kebab-case `String`
///
/// Only whitespace, `_` and `-` separate words; case changes do not.
///
/// ```
/// use casefold::inflector::case::to_kebab_case;
///
/// assert_eq!(to_kebab_case(" Hello  World ").unwrap(), "hello-world");
/// assert_eq!(to_kebab_case("foo_bar__baz").unwrap(), "foo-bar-baz");
/// assert_eq!(to_kebab_case("FOO_BAR").unwrap(), "foo-bar");
/// assert_eq!(to_kebab_case("--foo--bar--").unwrap(), "foo-bar");
/// assert_eq!(to_kebab_case("fooBar").unwrap(), "foobar");
/// ```
pub fn to_kebab_case(non_kebab_case_string: &str) -> Result<String, CaseError> {
    let trimmed = validate(non_kebab_case_string)?;
    let lowered = trimmed.to_lowercase();
    let hyphenated = WHITESPACE_OR_UNDERSCORE.replace_all(&lowered, "-");
    let collapsed = HYPHENS.replace_all(&hyphenated, "-");
    let result = collapsed.trim_matches('-');
    if result.is_empty() {
        return Err(CaseError::NoTokens);
    }
    tracing::trace!(
        path = "separator",
        tokens = result.split('-').count(),
        "converted to kebab-case"
    );
    Ok(result.to_owned())
}

/// Determines if a `&str` is kebab-case
///
/// ```
/// use casefold::inflector::case::is_kebab_case;
///
/// assert!(is_kebab_case("foo-bar-string-that-is-really-really-long"));
/// assert!(is_kebab_case("foo"));
///
/// assert!(!is_kebab_case("Foo bar"));
/// assert!(!is_kebab_case("foo_bar"));
/// assert!(!is_kebab_case("foo--bar"));
/// assert!(!is_kebab_case(""));
/// ```
pub fn is_kebab_case(test_string: &str) -> bool {
    to_kebab_case(test_string).is_ok_and(|converted| converted == test_string)
}

#[cfg(test)]
mod tests {
    use super::is_kebab_case;
    use super::to_kebab_case;
    use crate::CaseError;

    #[test]
    fn from_camel_case() {
        let convertable_string: String = "fooBar".to_owned();
        let expected: String = "foobar".to_owned();
        assert_eq!(to_kebab_case(&convertable_string), Ok(expected))
    }

    #[test]
    fn from_screaming_snake_case() {
        let convertable_string: String = "FOO_BAR".to_owned();
        let expected: String = "foo-bar".to_owned();
        assert_eq!(to_kebab_case(&convertable_string), Ok(expected))
    }

    #[test]
    fn from_title_case() {
        let convertable_string: String = "Foo Bar".to_owned();
        let expected: String = "foo-bar".to_owned();
        assert_eq!(to_kebab_case(&convertable_string), Ok(expected))
    }

    #[test]
    fn from_case_with_loads_of_space() {
        let convertable_string: String = " Hello  World ".to_owned();
        let expected: String = "hello-world".to_owned();
        assert_eq!(to_kebab_case(&convertable_string), Ok(expected))
    }

    #[test]
    fn mixed_separators_collapse() {
        let convertable_string: String = "foo _-_ bar\tbaz".to_owned();
        let expected: String = "foo-bar-baz".to_owned();
        assert_eq!(to_kebab_case(&convertable_string), Ok(expected))
    }

    #[test]
    fn other_punctuation_is_kept() {
        let convertable_string: String = "Robert C. Martin".to_owned();
        let expected: String = "robert-c.-martin".to_owned();
        assert_eq!(to_kebab_case(&convertable_string), Ok(expected))
    }

    #[test]
    fn non_ascii_is_lowercased() {
        let convertable_string: String = "Größe Über".to_owned();
        let expected: String = "größe-über".to_owned();
        assert_eq!(to_kebab_case(&convertable_string), Ok(expected))
    }

    #[test]
    fn whitespace_only() {
        assert_eq!(to_kebab_case(" \t\n"), Err(CaseError::EmptyInput))
    }

    #[test]
    fn separators_only() {
        assert_eq!(to_kebab_case("_ - _"), Err(CaseError::NoTokens))
    }

    #[test]
    fn is_correct_from_kebab_case() {
        assert!(is_kebab_case("foo-bar"))
    }

    #[test]
    fn is_correct_from_snake_case() {
        assert!(!is_kebab_case("foo_bar"))
    }

    #[test]
    fn is_correct_from_padded_kebab_case() {
        assert!(!is_kebab_case(" foo-bar"))
    }
}
