use std::any::{type_name, Any};

use super::Case;
use crate::CaseError;

/// Converts a value of unknown type, rejecting anything that isn't a string.
///
/// Only `String` and `&'static str` are accepted; every other type yields
/// [`CaseError::TypeMismatch`] carrying its type name.
///
/// ```
/// use casefold::{convert_value, Case, CaseError};
///
/// assert_eq!(convert_value(&"foo bar", Case::Kebab).unwrap(), "foo-bar");
/// assert_eq!(
///     convert_value(&42_i32, Case::Kebab),
///     Err(CaseError::TypeMismatch { found: "i32" })
/// );
/// ```
pub fn convert_value<T: Any>(value: &T, case: Case) -> Result<String, CaseError> {
    let any = value as &dyn Any;
    let s = if let Some(s) = any.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = any.downcast_ref::<&'static str>() {
        *s
    } else {
        return Err(CaseError::TypeMismatch {
            found: type_name::<T>(),
        });
    };
    case.convert(s)
}
