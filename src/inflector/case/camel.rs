use super::*;

/// Converts a `&str` to camelCase `String`
///
/// Input without separators is taken as a single word whose inner casing is
/// kept, so camelCase and PascalCase only have their first letter lowered.
///
/// ```
/// use casefold::inflector::case::to_camel_case;
///
/// assert_eq!(to_camel_case("fooBar").unwrap(), "fooBar");
/// assert_eq!(to_camel_case("FooBar").unwrap(), "fooBar");
/// assert_eq!(to_camel_case("FOO_BAR").unwrap(), "fooBar");
/// assert_eq!(to_camel_case("Foo Bar").unwrap(), "fooBar");
/// assert_eq!(to_camel_case("foo-bar").unwrap(), "fooBar");
/// assert_eq!(to_camel_case("__FOO---bar__").unwrap(), "fooBar");
/// assert_eq!(to_camel_case("FooBar3").unwrap(), "fooBar3");
/// ```
pub fn to_camel_case(non_camelized_string: &str) -> Result<String, CaseError> {
    let trimmed = validate(non_camelized_string)?;
    if !has_separator(trimmed) {
        tracing::trace!(path = "single-token", "converted to camelCase");
        return Ok(lowercase_first(trimmed));
    }

    let tokens = split_on_separators(trimmed)?;
    let mut result = String::with_capacity(trimmed.len());
    for (index, token) in tokens.iter().enumerate() {
        if index == 0 {
            result.push_str(&token.to_lowercase());
        } else {
            result.push_str(&capitalize(token));
        }
    }
    tracing::trace!(
        path = "separator",
        tokens = tokens.len(),
        "converted to camelCase"
    );
    Ok(result)
}

/// Determines if a `&str` is camelCase
///
/// ```
/// use casefold::inflector::case::is_camel_case;
///
/// assert!(is_camel_case("foo"));
/// assert!(is_camel_case("fooBarIsAReallyReally3longString"));
/// assert!(is_camel_case("fooBarIsAReallyReallyLongString"));
///
/// assert!(!is_camel_case("Foo"));
/// assert!(!is_camel_case("foo-bar-string-that-is-really-really-long"));
/// assert!(!is_camel_case("FooBarIsAReallyReallyLongString"));
/// assert!(!is_camel_case("FOO_BAR_STRING_THAT_IS_REALLY_REALLY_LONG"));
/// assert!(!is_camel_case("foo_bar_string_that_is_really_really_long"));
/// assert!(!is_camel_case("Foo bar string that is really really long"));
/// ```
pub fn is_camel_case(test_string: &str) -> bool {
    to_camel_case(test_string).is_ok_and(|converted| converted == test_string)
}

#[cfg(test)]
mod tests {
    use super::is_camel_case;
    use super::to_camel_case;
    use crate::CaseError;

    #[test]
    fn from_camel_case() {
        let convertable_string: String = "helloWorld".to_owned();
        let expected: String = "helloWorld".to_owned();
        assert_eq!(to_camel_case(&convertable_string), Ok(expected))
    }

    #[test]
    fn from_pascal_case() {
        let convertable_string: String = "HelloWorld".to_owned();
        let expected: String = "helloWorld".to_owned();
        assert_eq!(to_camel_case(&convertable_string), Ok(expected))
    }

    #[test]
    fn from_screaming_word_keeps_inner_casing() {
        let convertable_string: String = "HTTP".to_owned();
        let expected: String = "hTTP".to_owned();
        assert_eq!(to_camel_case(&convertable_string), Ok(expected))
    }

    #[test]
    fn from_kebab_case() {
        let convertable_string: String = "foo-bar".to_owned();
        let expected: String = "fooBar".to_owned();
        assert_eq!(to_camel_case(&convertable_string), Ok(expected))
    }

    #[test]
    fn from_sentence_case() {
        let convertable_string: String = "Foo bar".to_owned();
        let expected: String = "fooBar".to_owned();
        assert_eq!(to_camel_case(&convertable_string), Ok(expected))
    }

    #[test]
    fn from_screaming_snake_case() {
        let convertable_string: String = "FOO_BAR".to_owned();
        let expected: String = "fooBar".to_owned();
        assert_eq!(to_camel_case(&convertable_string), Ok(expected))
    }

    #[test]
    fn tokens_are_relowered() {
        let convertable_string: String = "xml HTTP request".to_owned();
        let expected: String = "xmlHttpRequest".to_owned();
        assert_eq!(to_camel_case(&convertable_string), Ok(expected))
    }

    #[test]
    fn wrapped_in_separators() {
        let convertable_string: String = "__FOO---bar__".to_owned();
        let expected: String = "fooBar".to_owned();
        assert_eq!(to_camel_case(&convertable_string), Ok(expected))
    }

    #[test]
    fn a_name_with_a_dot() {
        let convertable_string: String = "Robert C. Martin".to_owned();
        let expected: String = "robertCMartin".to_owned();
        assert_eq!(to_camel_case(&convertable_string), Ok(expected))
    }

    #[test]
    fn random_text_with_bad_chars() {
        let convertable_string: String = "Random text with *(bad) chars".to_owned();
        let expected: String = "randomTextWithBadChars".to_owned();
        assert_eq!(to_camel_case(&convertable_string), Ok(expected))
    }

    #[test]
    fn has_an_integer_followed_by_an_underscore() {
        let convertable_string: String = "abc123_xyz".to_owned();
        let expected: String = "abc123Xyz".to_owned();
        assert_eq!(to_camel_case(&convertable_string), Ok(expected))
    }

    #[test]
    fn non_ascii_words() {
        let convertable_string: String = "élan vital".to_owned();
        let expected: String = "élanVital".to_owned();
        assert_eq!(to_camel_case(&convertable_string), Ok(expected))
    }

    #[test]
    fn empty_input() {
        assert_eq!(to_camel_case(""), Err(CaseError::EmptyInput))
    }

    #[test]
    fn whitespace_only() {
        assert_eq!(to_camel_case("   \t"), Err(CaseError::EmptyInput))
    }

    #[test]
    fn punctuation_only() {
        assert_eq!(to_camel_case("-*-"), Err(CaseError::NoTokens))
    }

    #[test]
    fn is_correct_from_camel_case() {
        assert!(is_camel_case("fooBar"))
    }

    #[test]
    fn is_correct_from_pascal_case() {
        assert!(!is_camel_case("FooBar"))
    }

    #[test]
    fn is_correct_from_kebab_case() {
        assert!(!is_camel_case("foo-bar"))
    }

    #[test]
    fn is_correct_from_empty() {
        assert!(!is_camel_case(""))
    }
}
