//! Leet-speak substitution tables

/// Fixed single-variant substitution, applied case-insensitively.
/// Letters without an entry pass through unchanged.
pub fn leet_char(ch: char) -> Option<&'static str> {
    match ch.to_ascii_uppercase() {
        'A' => Some("4"),
        'B' => Some("8"),
        'C' => Some("("),
        'E' => Some("3"),
        'H' => Some("#"),
        'I' => Some("1"),
        'O' => Some("0"),
        'R' => Some("2"),
        'S' => Some("5"),
        'T' => Some("7"),
        _ => None,
    }
}

/// Multi-variant table: each substitutable letter maps to several visual
/// variants, one of which is picked at random per occurrence. Variants may
/// be longer than one character, so ultraleet output can grow.
pub fn ultra_variants(ch: char) -> Option<&'static [&'static str]> {
    let variants: &'static [&'static str] = match ch.to_ascii_uppercase() {
        'A' => &["4", "/\\", "@", "∂", "/-\\"],
        'B' => &["8", "13", "|3", "ß"],
        'C' => &["(", "¢", "<", "[", "©"],
        'D' => &["[)", "|>", "|)", "|]"],
        'E' => &["3", "€", "є", "[-"],
        'F' => &["|=", "ƒ", "/="],
        'G' => &["6", "(_+"],
        'H' => &[
            "#", "/-/", "[-]", "]-[", ")-(", "(-)", ":-:", "|~|", "|-|", "]~[", "}{",
        ],
        'I' => &["1", "!", "|", "][", "]", ":"],
        'J' => &["_|", "_/", "¿"],
        'K' => &["X", "|<", "|{", "ɮ"],
        'L' => &["£", "1_", "ℓ", "|_", "[_"],
        'M' => &["|V|", "|\\/|", "/\\/\\", "/V\\"],
        'N' => &["|V", "|\\|", "/\\/", "[\\]", "/V"],
        'O' => &["[]", "0", "()", "°"],
        'P' => &["|*", "|o", "|º", "|°", "/*"],
        'Q' => &["¶", "(_,)", "()_", "0_", "°|", "<|", "0."],
        'R' => &["2", "|?", "/2", "®", "Я", "|2"],
        'S' => &["5", "$", "§", "_/¯"],
        'T' => &["7", "†", "¯|¯"],
        'U' => &["(_)", "|_|", "L|", "µ"],
        'V' => &["\\/", "|/"],
        'W' => &[
            "\\/\\/", "vv", "'//", "\\^/", "\\V/", "\\|/", "\\_|_/", "\\_:_/",
        ],
        'X' => &["><", "}{", "×", ")("],
        'Y' => &["`/", "φ", "¥", "'/"],
        'Z' => &["≥", "7_", ">_"],
        _ => return None,
    };
    Some(variants)
}
