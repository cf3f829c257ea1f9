//! Slugging seam
//!
//! The upload service derives the human-readable part of a generated
//! filename through this trait. Any Unicode-aware slugifier satisfies the
//! contract; [`AsciiSlugger`] is the built-in default.

/// Turns an arbitrary string into a filesystem-safe slug
pub trait Slugger {
    /// Slug `input`, joining word runs with `separator`
    ///
    /// `locale` is a hint for locale-sensitive transliteration;
    /// implementations may ignore it.
    fn slug(&self, input: &str, separator: char, locale: Option<&str>) -> String;
}

/// Default slugifier
///
/// Lowercases, keeps alphanumeric runs, and collapses every other run into a
/// single separator. Output contains no path separators or reserved
/// characters.
#[derive(Debug, Default, Clone, Copy)]
pub struct AsciiSlugger;

impl Slugger for AsciiSlugger {
    fn slug(&self, input: &str, separator: char, _locale: Option<&str>) -> String {
        let mut out = String::with_capacity(input.len());
        let mut pending_separator = false;

        for c in input.chars() {
            if c.is_alphanumeric() {
                if pending_separator && !out.is_empty() {
                    out.push(separator);
                }
                pending_separator = false;
                out.extend(c.to_lowercase());
            } else {
                pending_separator = true;
            }
        }

        out
    }
}
