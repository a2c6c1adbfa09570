//! Stylesheet text normalization
//!
//! A pattern-based transform, not a parser: block comments and `@import url(...)`
//! statements are dropped, whitespace is collapsed, and spacing around structural
//! punctuation is removed. String literals are not protected, so comment-like
//! sequences inside `content: "..."` are stripped like any other comment.
//!
//! Whitespace here is Unicode whitespace plus the information separators
//! U+001C..U+001F, in every step including the final trim.

use lazy_static::lazy_static;
use regex::{NoExpand, Regex};

lazy_static! {
    /// Block comment, non-greedy, may span lines.
    static ref BLOCK_COMMENT: Regex = Regex::new(r"(?s)/\*.*?\*/").unwrap();
    /// `@import url(...);` plus any whitespace after it.
    static ref IMPORT_URL: Regex =
        Regex::new(r"@import[\s\x1C-\x1F]+url\([^)]+\);[\s\x1C-\x1F]*").unwrap();
    static ref WHITESPACE: Regex = Regex::new(r"[\s\x1C-\x1F]+").unwrap();
    /// Structural punctuation with the whitespace on either side.
    static ref PUNCTUATION: Regex =
        Regex::new(r"[\s\x1C-\x1F]*([{}:;,])[\s\x1C-\x1F]*").unwrap();
}

fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Remove every block comment from `css`.
pub fn strip_comments(css: &str) -> String {
    BLOCK_COMMENT.replace_all(css, NoExpand("")).into_owned()
}

/// Normalize concatenated stylesheet text.
///
/// Steps run in a fixed order: comments, imports, whitespace collapse,
/// punctuation spacing, trim.
pub fn normalize(css: &str) -> String {
    let css = strip_comments(css);
    let css = IMPORT_URL.replace_all(&css, NoExpand(""));
    let css = WHITESPACE.replace_all(&css, NoExpand(" "));
    let css = PUNCTUATION.replace_all(&css, "$1");
    css.trim_matches(is_separator).to_string()
}
