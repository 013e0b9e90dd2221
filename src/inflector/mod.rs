//! String based case inflections. Kebab, camel and dot cases are supported
//! both as a trait on `str` and as pure functions.

use std::{fmt, str::FromStr};

use crate::CaseError;

/// Provides case inflections
/// - Camel case
/// - Kebab case
/// - Dot case
pub mod case;

mod value;
pub use value::convert_value;

pub use case::camel::is_camel_case;
pub use case::camel::to_camel_case;

pub use case::kebab::is_kebab_case;
pub use case::kebab::to_kebab_case;

pub use case::dot::is_dot_case;
pub use case::dot::to_dot_case;

#[allow(missing_docs)]
pub trait Inflector {
    fn to_camel_case(&self) -> Result<String, CaseError>;
    fn is_camel_case(&self) -> bool;

    fn to_kebab_case(&self) -> Result<String, CaseError>;
    fn is_kebab_case(&self) -> bool;

    fn to_dot_case(&self) -> Result<String, CaseError>;
    fn is_dot_case(&self) -> bool;
}

impl Inflector for str {
    fn to_camel_case(&self) -> Result<String, CaseError> {
        to_camel_case(self)
    }

    fn is_camel_case(&self) -> bool {
        is_camel_case(self)
    }

    fn to_kebab_case(&self) -> Result<String, CaseError> {
        to_kebab_case(self)
    }

    fn is_kebab_case(&self) -> bool {
        is_kebab_case(self)
    }

    fn to_dot_case(&self) -> Result<String, CaseError> {
        to_dot_case(self)
    }

    fn is_dot_case(&self) -> bool {
        is_dot_case(self)
    }
}

/// A target casing convention.
///
/// ```
/// use casefold::Case;
///
/// let case: Case = "dot".parse().unwrap();
/// assert_eq!(case, Case::Dot);
/// assert_eq!(case.convert("fooBar").unwrap(), "foo.bar");
/// assert_eq!(case.to_string(), "dot.case");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Case {
    Camel,
    Kebab,
    Dot,
}

impl Case {
    pub const ALL: [Case; 3] = [Case::Camel, Case::Kebab, Case::Dot];

    pub fn is_case(self, s: &str) -> bool {
        match self {
            Case::Camel => is_camel_case(s),
            Case::Kebab => is_kebab_case(s),
            Case::Dot => is_dot_case(s),
        }
    }

    pub fn convert(self, s: &str) -> Result<String, CaseError> {
        match self {
            Case::Camel => to_camel_case(s),
            Case::Kebab => to_kebab_case(s),
            Case::Dot => to_dot_case(s),
        }
    }

    /// The name of the case written in its own convention.
    pub fn name(self) -> &'static str {
        match self {
            Case::Camel => "camelCase",
            Case::Kebab => "kebab-case",
            Case::Dot => "dot.case",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Case::Camel => &["camel", "camel-case", "camel_case"],
            Case::Kebab => &["kebab", "kebab_case"],
            Case::Dot => &["dot", "dot-case", "dot_case"],
        }
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Case {
    type Err = CaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Case::ALL
            .into_iter()
            .find(|case| {
                case.name().eq_ignore_ascii_case(wanted)
                    || case
                        .aliases()
                        .iter()
                        .any(|alias| alias.eq_ignore_ascii_case(wanted))
            })
            .ok_or_else(|| CaseError::UnknownCase(s.to_owned()))
    }
}
