//! Error types for case conversion

use recase_core::CaseId;
use thiserror::Error;

/// Errors reported by [`convert`](crate::convert) and
/// [`Registry::convert`](crate::Registry::convert).
///
/// All variants are terminal: no partial output is produced and nothing is
/// retried internally.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The requested source identifier matches no encode-capable strategy.
    #[error("'{requested}' is not a supported source case (expected one of: {})", .supported.join(", "))]
    UnknownSourceCase {
        /// The identifier that failed to resolve.
        requested: String,
        /// All valid source identifiers, sorted.
        supported: Vec<String>,
    },

    /// The requested target identifier matches no registered strategy.
    #[error("'{requested}' is not a supported target case (expected one of: {})", .supported.join(", "))]
    UnknownTargetCase {
        /// The identifier that failed to resolve.
        requested: String,
        /// All valid target identifiers, sorted.
        supported: Vec<String>,
    },

    /// A decode-only case was referenced directly as a conversion source.
    #[error("{0} is a stylistic target case and cannot be used as a source")]
    UnsupportedAsSource(CaseId),
}

/// Errors raised while constructing a [`Registry`](crate::Registry).
///
/// Both variants indicate an inconsistent strategy set, which for the
/// built-in set is a bug rather than a runtime condition.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Two distinct strategies claim the same name or derived alias.
    #[error("case name '{name}' is claimed by both {first} and {second}")]
    NameCollision {
        /// The contested name or alias.
        name: String,
        /// The strategy registered first.
        first: CaseId,
        /// The strategy that attempted to re-register the name.
        second: CaseId,
    },

    /// A strategy's segmentation pattern failed to compile.
    #[error("invalid segmentation pattern for {case}: {source}")]
    Pattern {
        /// The strategy whose pattern is broken.
        case: CaseId,
        /// The underlying regex error.
        source: regex::Error,
    },
}

/// Result type for conversion operations.
pub type Result<T> = std::result::Result<T, ConvertError>;
