//! Render rules: join a word sequence into text formatted per a case
//!
//! Rendering never fails. The randomized styles (dank, ultraleet) are
//! generic over [`rand::Rng`] so callers can seed them deterministically;
//! the strategy layer plugs in `thread_rng` for normal use.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::leet::{leet_char, ultra_variants};

/// Title-case a single word: first letter uppercased, the rest lowercased.
pub(crate) fn title_case(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
    }
    for ch in chars {
        out.extend(ch.to_lowercase());
    }
    out
}

/// `FooBarBaz`
pub(crate) fn camel(words: &[&str]) -> String {
    words.iter().map(|w| title_case(w)).collect()
}

/// `fooBarBaz`. Zero words render as the empty string; the first-word
/// lowercasing rule only applies when a first word exists.
pub(crate) fn lower_camel(words: &[&str]) -> String {
    let (first, rest) = match words.split_first() {
        Some(split) => split,
        None => return String::new(),
    };
    let mut out = first.to_lowercase();
    for word in rest {
        out.push_str(&title_case(word));
    }
    out
}

/// `foo_bar_baz`
pub(crate) fn snake(words: &[&str]) -> String {
    words.join("_").to_lowercase()
}

/// `FOO_BAR_BAZ`
pub(crate) fn macro_case(words: &[&str]) -> String {
    words.join("_").to_uppercase()
}

/// `foo bar baz`, original casing kept
pub(crate) fn space(words: &[&str]) -> String {
    words.join(" ")
}

/// `fOo bAR BaZ`: each character flips a coin for its case
pub(crate) fn dank<R: Rng>(words: &[&str], rng: &mut R) -> String {
    let styled: Vec<String> = words.iter().map(|w| dankify_word(w, rng)).collect();
    styled.join(" ")
}

fn dankify_word<R: Rng>(word: &str, rng: &mut R) -> String {
    let mut out = String::with_capacity(word.len());
    for ch in word.chars() {
        if rng.gen_bool(0.5) {
            out.extend(ch.to_uppercase());
        } else {
            out.extend(ch.to_lowercase());
        }
    }
    out
}

/// `f00 b42`, the fixed single-variant substitution
pub(crate) fn leet(words: &[&str]) -> String {
    let styled: Vec<String> = words.iter().map(|w| leetify_word(w)).collect();
    styled.join(" ")
}

fn leetify_word(word: &str) -> String {
    let mut out = String::with_capacity(word.len());
    for ch in word.chars() {
        match leet_char(ch) {
            Some(sub) => out.push_str(sub),
            None => out.push(ch),
        }
    }
    out
}

/// Like [`leet`] but picks one of several visual variants per letter, so
/// the output may be longer than the input.
pub(crate) fn ultra_leet<R: Rng>(words: &[&str], rng: &mut R) -> String {
    let styled: Vec<String> = words.iter().map(|w| ultra_leetify_word(w, rng)).collect();
    styled.join(" ")
}

fn ultra_leetify_word<R: Rng>(word: &str, rng: &mut R) -> String {
    let mut out = String::with_capacity(word.len());
    for ch in word.chars() {
        match ultra_variants(ch).and_then(|v| v.choose(rng)) {
            Some(sub) => out.push_str(sub),
            None => out.push(ch),
        }
    }
    out
}
