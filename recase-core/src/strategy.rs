//! Strategy values: a case identifier with its compiled segmentation pattern
//!
//! A [`Strategy`] is built once (pattern compilation can fail, so
//! construction returns `Result`) and is immutable afterwards. Segmentation
//! borrows from the input text; rendering allocates the output string.

use rand::thread_rng;
use regex::Regex;
use smallvec::SmallVec;

use crate::case::CaseId;
use crate::render;

/// Ordered sequence of words extracted from input text. Borrowed slices of
/// the original input; insertion order is reading order.
pub type Words<'a> = SmallVec<[&'a str; 8]>;

/// A case strategy ready for use: its identifier plus the compiled
/// word-boundary pattern for encode-capable cases (`None` for the
/// decode-only stylistic cases).
#[derive(Debug)]
pub struct Strategy {
    id: CaseId,
    pattern: Option<Regex>,
}

impl Strategy {
    /// Compile the strategy for `id`.
    pub fn new(id: CaseId) -> Result<Self, regex::Error> {
        let pattern = match segmentation_pattern(id) {
            Some(src) => Some(Regex::new(src)?),
            None => None,
        };
        Ok(Self { id, pattern })
    }

    /// The case this strategy implements.
    pub fn id(&self) -> CaseId {
        self.id
    }

    /// Segment `text` into its word sequence: maximal non-overlapping
    /// matches of the case's word pattern, left to right. Characters that
    /// match no word (separators, stray punctuation) are discarded.
    ///
    /// Returns `None` for decode-only strategies.
    pub fn segment<'t>(&self, text: &'t str) -> Option<Words<'t>> {
        let pattern = self.pattern.as_ref()?;
        Some(pattern.find_iter(text).map(|m| m.as_str()).collect())
    }

    /// Render a word sequence into text formatted per this case. Always
    /// supported; zero words render as the empty string for every built-in
    /// case.
    pub fn render(&self, words: &[&str]) -> String {
        match self.id {
            CaseId::Camel => render::camel(words),
            CaseId::LowerCamel => render::lower_camel(words),
            CaseId::Snake => render::snake(words),
            CaseId::Macro => render::macro_case(words),
            CaseId::Space => render::space(words),
            CaseId::Dank => render::dank(words, &mut thread_rng()),
            CaseId::Leet => render::leet(words),
            CaseId::UltraLeet => render::ultra_leet(words, &mut thread_rng()),
        }
    }
}

/// Word-boundary pattern source for encode-capable cases.
fn segmentation_pattern(id: CaseId) -> Option<&'static str> {
    match id {
        CaseId::Camel => Some("[A-Z][a-z]+"),
        CaseId::LowerCamel => Some("[A-Z]?[a-z]+"),
        CaseId::Snake => Some("[a-z]+"),
        CaseId::Macro => Some("[A-Z]+"),
        CaseId::Space => Some(r"\w+"),
        CaseId::Dank | CaseId::Leet | CaseId::UltraLeet => None,
    }
}
