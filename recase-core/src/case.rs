//! Case identifiers and their name sets
//!
//! Every supported naming convention is a variant of [`CaseId`]. The set is
//! closed: adding a convention means adding a variant and wiring it through
//! the `match` arms in this crate, which the compiler then enforces.

/// Identifier for a supported case strategy.
///
/// The first four variants are bidirectional: text in that case can be
/// segmented into words and words can be rendered back. The last three are
/// stylistic transforms that only work as conversion targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CaseId {
    /// `FooBarBaz` (also known as PascalCase)
    Camel,
    /// `fooBarBaz`
    LowerCamel,
    /// `foo_bar_baz`
    Snake,
    /// `FOO_BAR_BAZ`
    Macro,
    /// `foo bar baz`, case preserved
    Space,
    /// `fOo BaR bAz`, randomized per-character casing (target only)
    Dank,
    /// `f00 842 84z`, fixed leet-speak substitutions (target only)
    Leet,
    /// leet with randomly chosen multi-character variants (target only)
    UltraLeet,
}

impl CaseId {
    /// Every supported case, bidirectional strategies first.
    pub const ALL: [CaseId; 8] = [
        CaseId::Camel,
        CaseId::LowerCamel,
        CaseId::Snake,
        CaseId::Macro,
        CaseId::Space,
        CaseId::Dank,
        CaseId::Leet,
        CaseId::UltraLeet,
    ];

    /// Recognized names for this case, canonical name first.
    pub fn names(self) -> &'static [&'static str] {
        match self {
            CaseId::Camel => &["CamelCase", "PascalCase"],
            CaseId::LowerCamel => &["camelCase", "pascalCase", "lowerCamelCase", "lowerPascalCase"],
            CaseId::Snake => &["snake_case"],
            CaseId::Macro => &["MACRO_CASE"],
            CaseId::Space => &["space case", "prose"],
            CaseId::Dank => &["dank", "dank_case"],
            CaseId::Leet => &["leet", "1337"],
            CaseId::UltraLeet => &["ultraleet", "ultra1337"],
        }
    }

    /// The canonical name, e.g. `"snake_case"`.
    pub fn canonical_name(self) -> &'static str {
        self.names()[0]
    }

    /// Whether text in this case can be segmented into words, i.e. whether
    /// the case may appear on the source side of a conversion. Rendering is
    /// supported by every case.
    pub fn supports_segmentation(self) -> bool {
        match self {
            CaseId::Camel
            | CaseId::LowerCamel
            | CaseId::Snake
            | CaseId::Macro
            | CaseId::Space => true,
            CaseId::Dank | CaseId::Leet | CaseId::UltraLeet => false,
        }
    }
}

impl std::fmt::Display for CaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.canonical_name())
    }
}

/// Derive the shorthand alias for a case name by stripping every literal
/// case marker (`CASE`, `Case` or `case`, optionally preceded by a space or
/// underscore): `"snake_case"` → `"snake"`, `"MACRO_CASE"` → `"MACRO"`,
/// `"CamelCase"` → `"Camel"`, `"prose"` → `"prose"` (unchanged).
pub fn strip_case_marker(name: &str) -> String {
    const MARKERS: [&str; 3] = ["CASE", "Case", "case"];

    let mut out = String::with_capacity(name.len());
    let mut rest = name;
    'scan: while !rest.is_empty() {
        for marker in MARKERS {
            if let Some(tail) = rest.strip_prefix(marker) {
                // Marker at the very start has no separator to swallow
                rest = tail;
                continue 'scan;
            }
            let sep = rest.starts_with(' ') || rest.starts_with('_');
            if sep {
                if let Some(tail) = rest[1..].strip_prefix(marker) {
                    rest = tail;
                    continue 'scan;
                }
            }
        }
        let ch = match rest.chars().next() {
            Some(ch) => ch,
            None => break,
        };
        out.push(ch);
        rest = &rest[ch.len_utf8()..];
    }
    out
}
