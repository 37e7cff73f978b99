//! Case references accepted by the conversion API
//!
//! A case can be requested either by one of its registered names/aliases or
//! by its compile-time identifier. `convert` takes `impl Into<CaseRef>` so
//! both spellings work at the call site:
//!
//! ```
//! use recase::{convert, CaseId};
//!
//! assert_eq!(convert("fooBar", "camelCase", CaseId::Snake).unwrap(), "foo_bar");
//! ```

use recase_core::CaseId;

/// A source or target case, given by name or by identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaseRef<'a> {
    /// A registered name or alias, resolved against the registry.
    Name(&'a str),
    /// A direct strategy identifier; skips name resolution.
    Id(CaseId),
}

impl<'a> From<&'a str> for CaseRef<'a> {
    fn from(name: &'a str) -> Self {
        CaseRef::Name(name)
    }
}

impl<'a> From<&'a String> for CaseRef<'a> {
    fn from(name: &'a String) -> Self {
        CaseRef::Name(name)
    }
}

impl From<CaseId> for CaseRef<'static> {
    fn from(id: CaseId) -> Self {
        CaseRef::Id(id)
    }
}
