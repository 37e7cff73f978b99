//! Case strategy definitions for identifier case conversion
//!
//! This crate is the leaf layer of `recase`: it defines each supported
//! naming convention as a [`Strategy`] bundling an identifier ([`CaseId`]),
//! an optional segmentation rule (extracting words from text of that case)
//! and a render rule (joining words back into that case). The registry and
//! conversion dispatch live in the `recase` crate.
//!
//! Segmentation is regex-based and zero-copy; rendering is a pure string
//! transform except for the randomized stylistic cases (dank, ultraleet),
//! which draw from a thread-local random source.

#![warn(missing_docs)]

pub mod case;
pub mod leet;
pub mod strategy;

mod render;

// Re-export key types
pub use case::{strip_case_marker, CaseId};
pub use strategy::{Strategy, Words};
