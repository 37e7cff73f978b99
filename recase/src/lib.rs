//! Convert identifiers between programming naming conventions
//!
//! Supported cases:
//! - `camelCase` (`pascalCase`)
//! - `CamelCase` (`PascalCase`)
//! - `snake_case`
//! - `MACRO_CASE`
//! - `space case` (`prose`)
//! - `dank` (target only, randomized capitalization)
//! - `leet` / `1337` (target only)
//! - `ultraleet` / `ultra1337` (target only)
//!
//! Each case name also resolves through a shorthand alias with the case
//! marker stripped (`"snake"`, `"MACRO"`, `"Camel"`, ...). The full lists
//! are available from [`Registry::source_names`] and
//! [`Registry::target_names`].
//!
//! # Examples
//!
//! ```
//! use recase::convert;
//!
//! assert_eq!(convert("MyVariable", "CamelCase", "snake_case").unwrap(), "my_variable");
//! assert_eq!(convert("fooBarBaz", "pascalCase", "MACRO_CASE").unwrap(), "FOO_BAR_BAZ");
//! assert_eq!(convert("I am very cool", "space case", "leet").unwrap(), "1 4m v32y (00l");
//! ```
//!
//! Compile-time-checked references work anywhere a name does:
//!
//! ```
//! use recase::{convert, CaseId};
//!
//! assert_eq!(convert("FOO_BAR", CaseId::Macro, CaseId::LowerCamel).unwrap(), "fooBar");
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod input;
pub mod registry;

// Re-export key types
pub use error::{ConvertError, RegistryError, Result};
pub use input::CaseRef;
pub use recase_core::{CaseId, Strategy, Words};
pub use registry::Registry;

/// Convert `text` from `case_from` to `case_to` using the process-wide
/// registry.
///
/// `text` should already be formatted in `case_from`; characters that match
/// none of that case's words are discarded. Both cases may be given as a
/// registered name/alias (`&str`) or as a [`CaseId`].
pub fn convert<'a, 'b>(
    text: &str,
    case_from: impl Into<CaseRef<'a>>,
    case_to: impl Into<CaseRef<'b>>,
) -> Result<String> {
    Registry::global().convert(text, case_from, case_to)
}

/// Identifiers accepted as a conversion source, sorted.
pub fn source_names() -> Vec<&'static str> {
    Registry::global().source_names()
}

/// Identifiers accepted as a conversion target, sorted.
pub fn target_names() -> Vec<&'static str> {
    Registry::global().target_names()
}
