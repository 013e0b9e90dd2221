use super::*;

/// Converts a `&str` to dot.case `String`
///
/// Separated input is split like camelCase. Input made only of letters and
/// digits is split at case and number boundaries instead, keeping acronyms
/// together.
///
/// ```
/// use casefold::inflector::case::to_dot_case;
///
/// assert_eq!(to_dot_case("helloWorld42").unwrap(), "hello.world.42");
/// assert_eq!(to_dot_case("XMLHttpRequest").unwrap(), "xml.http.request");
/// assert_eq!(to_dot_case("foo_bar").unwrap(), "foo.bar");
/// assert_eq!(to_dot_case("Foo Bar").unwrap(), "foo.bar");
/// assert_eq!(to_dot_case("HTTP").unwrap(), "http");
/// ```
pub fn to_dot_case(non_dot_case_string: &str) -> Result<String, CaseError> {
    let trimmed = validate(non_dot_case_string)?;
    let tokens = if has_separator(trimmed) {
        let tokens = split_on_separators(trimmed)?;
        tracing::trace!(
            path = "separator",
            tokens = tokens.len(),
            "converted to dot.case"
        );
        tokens
    } else {
        let fragments = split_on_case_boundaries(trimmed);
        if fragments.is_empty() {
            tracing::trace!(path = "scan-fallback", "converted to dot.case");
            vec![trimmed]
        } else {
            tracing::trace!(
                path = "boundary-scan",
                tokens = fragments.len(),
                "converted to dot.case"
            );
            fragments
        }
    };

    Ok(tokens
        .iter()
        .map(|token| token.to_lowercase())
        .collect::<Vec<_>>()
        .join("."))
}

/// Determines if a `&str` is dot.case
///
/// ```
/// use casefold::inflector::case::is_dot_case;
///
/// assert!(is_dot_case("foo.bar.string.that.is.really.really.long"));
/// assert!(is_dot_case("foo.bar.42"));
///
/// assert!(!is_dot_case("fooBar"));
/// assert!(!is_dot_case("foo..bar"));
/// assert!(!is_dot_case("foo-bar"));
/// assert!(!is_dot_case(".foo"));
/// ```
pub fn is_dot_case(test_string: &str) -> bool {
    to_dot_case(test_string).is_ok_and(|converted| converted == test_string)
}

/// Splits a separator-free string into acronym runs, words and digit runs.
/// Characters that start none of these are dropped.
fn split_on_case_boundaries(convertable_string: &str) -> Vec<&str> {
    let chars: Vec<(usize, char)> = convertable_string.char_indices().collect();
    let byte_offset = |index: usize| {
        chars
            .get(index)
            .map_or(convertable_string.len(), |(offset, _)| *offset)
    };

    let mut fragments = vec![];
    let mut index = 0;
    while index < chars.len() {
        let rest = &chars[index..];
        let matched = acronym_len(rest)
            .or_else(|| word_len(rest))
            .or_else(|| digits_len(rest));
        match matched {
            Some(len) => {
                let span = byte_offset(index)..byte_offset(index + len);
                fragments.push(&convertable_string[span]);
                index += len;
            }
            None => index += 1,
        }
    }
    fragments
}

/// At least two uppercase letters that stop before a trailing
/// uppercase+lowercase pair, e.g. the `XML` of `XMLHttp`.
fn acronym_len(chars: &[(usize, char)]) -> Option<usize> {
    let run = chars.iter().take_while(|(_, c)| c.is_uppercase()).count();
    let followed_by_lowercase = chars.get(run).is_some_and(|(_, c)| c.is_lowercase());
    (run >= 3 && followed_by_lowercase).then(|| run - 1)
}

/// Optional uppercase letter followed by at least one lowercase letter.
fn word_len(chars: &[(usize, char)]) -> Option<usize> {
    let capital = usize::from(chars.first().is_some_and(|(_, c)| c.is_uppercase()));
    let lower = chars[capital..]
        .iter()
        .take_while(|(_, c)| c.is_lowercase())
        .count();
    (lower > 0).then_some(capital + lower)
}

fn digits_len(chars: &[(usize, char)]) -> Option<usize> {
    let digits = chars.iter().take_while(|(_, c)| c.is_numeric()).count();
    (digits > 0).then_some(digits)
}

#[test]
fn test_acronym_len_before_word() {
    let chars: Vec<_> = "XMLHttp".char_indices().collect();
    assert_eq!(acronym_len(&chars), Some(3))
}

#[test]
fn test_acronym_len_needs_a_following_word() {
    let chars: Vec<_> = "XML".char_indices().collect();
    assert_eq!(acronym_len(&chars), None)
}

#[test]
fn test_acronym_len_single_capital_is_a_word() {
    let chars: Vec<_> = "Http".char_indices().collect();
    assert_eq!(acronym_len(&chars), None)
}

#[test]
fn test_acronym_len_starting_lowercase() {
    let chars: Vec<_> = "helloWorld".char_indices().collect();
    assert_eq!(acronym_len(&chars), None)
}

#[test]
fn test_acronym_len_starting_with_digit() {
    let chars: Vec<_> = "42abc".char_indices().collect();
    assert_eq!(acronym_len(&chars), None)
}

#[test]
fn test_acronym_len_two_capitals_before_pair() {
    let chars: Vec<_> = "ABCd".char_indices().collect();
    assert_eq!(acronym_len(&chars), Some(2))
}

#[test]
fn test_acronym_len_one_capital_before_pair() {
    let chars: Vec<_> = "ABc".char_indices().collect();
    assert_eq!(acronym_len(&chars), None)
}

#[test]
fn test_word_len_capitalized() {
    let chars: Vec<_> = "Hello42".char_indices().collect();
    assert_eq!(word_len(&chars), Some(5))
}

#[test]
fn test_word_len_lone_capital() {
    let chars: Vec<_> = "H42".char_indices().collect();
    assert_eq!(word_len(&chars), None)
}

#[test]
fn test_digits_len() {
    let chars: Vec<_> = "42abc".char_indices().collect();
    assert_eq!(digits_len(&chars), Some(2))
}

#[test]
fn test_split_on_case_boundaries_mixed() {
    assert_eq!(
        split_on_case_boundaries("parseHTMLString2Tree"),
        vec!["parse", "HTML", "String", "2", "Tree"]
    )
}

#[test]
fn test_split_on_case_boundaries_drops_stray_capitals() {
    assert_eq!(split_on_case_boundaries("aB"), vec!["a"])
}

#[test]
fn test_split_on_case_boundaries_single_capital_before_word() {
    assert_eq!(split_on_case_boundaries("getIPhone"), vec!["get", "Phone"])
}

#[test]
fn test_split_on_case_boundaries_non_ascii() {
    assert_eq!(
        split_on_case_boundaries("größeÜberMaß"),
        vec!["größe", "Über", "Maß"]
    )
}

#[test]
fn test_split_on_case_boundaries_no_match() {
    assert!(split_on_case_boundaries("HTTP").is_empty())
}
