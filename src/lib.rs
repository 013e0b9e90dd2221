//! Converts strings between kebab-case, camelCase and dot.case.
//!
//! ```
//! use casefold::{to_camel_case, to_dot_case, to_kebab_case};
//!
//! assert_eq!(to_kebab_case(" Hello  World ").unwrap(), "hello-world");
//! assert_eq!(to_camel_case("__FOO---bar__").unwrap(), "fooBar");
//! assert_eq!(to_dot_case("XMLHttpRequest").unwrap(), "xml.http.request");
//! ```

mod error;
pub mod inflector;

pub use error::CaseError;
pub use inflector::{
    convert_value, is_camel_case, is_dot_case, is_kebab_case, to_camel_case, to_dot_case,
    to_kebab_case, Case, Inflector,
};
