//! Filename cleanup: ordered pattern substitution on the name stem.
//!
//! Downloaded recordings carry junk tokens ("(Official Video)", tool
//! suffixes like `_trimmed`) in their names. Cleanup applies a fixed,
//! ordered list of case-insensitive pattern→replacement rules to the stem
//! only, then strips the stray separators and whitespace the removals leave
//! behind. The order matters: later rules clean up after earlier ones, so
//! they must run exactly as declared.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Junk tokens removed from the stem, in application order.
    static ref JUNK_RULES: Vec<(Regex, &'static str)> = vec![
        (Regex::new(r"(?i)\(official audio\)").unwrap(), ""),
        (Regex::new(r"(?i)\(official hd video\)").unwrap(), ""),
        (Regex::new(r"(?i)\(official video\)").unwrap(), ""),
        (Regex::new(r"(?i)\(official lyric video\)").unwrap(), ""),
        (Regex::new(r"(?i)\(official music video\)").unwrap(), ""),
        (Regex::new(r"(?i)\(lyrics\)").unwrap(), ""),
        (Regex::new(r"(?i)\(clip officiel\)").unwrap(), ""),
        (Regex::new(r"(?i)_trimmed").unwrap(), ""),
        (Regex::new(r"(?i)_soundincreased").unwrap(), ""),
        // Removals can leave doubled spaces behind.
        (Regex::new(r"  +").unwrap(), " "),
    ];

    /// Stray separators and whitespace at either end of the stem.
    static ref EDGE_JUNK_RE: Regex = Regex::new(r"^[\s\-_.]+|[\s\-_.]+$").unwrap();
}

/// Clean a file name, preserving its extension.
///
/// Every rule is total: a pattern that does not match leaves the stem
/// unchanged, so cleanup never fails. Returns the input unchanged when no
/// rule applies.
pub fn clean_name(name: &str) -> String {
    let (stem, ext) = split_extension(name);

    let mut stem = stem.to_string();
    for (pattern, replacement) in JUNK_RULES.iter() {
        stem = pattern.replace_all(&stem, *replacement).to_string();
    }
    let stem = EDGE_JUNK_RE.replace_all(&stem, "");

    format!("{stem}{ext}")
}

/// Split `name` into stem and extension (extension includes the dot).
///
/// A leading dot is part of the stem, matching hidden-file convention.
fn split_extension(name: &str) -> (&str, &str) {
    match name.rfind('.') {
        Some(i) if i > 0 => (&name[..i], &name[i..]),
        _ => (name, ""),
    }
}
