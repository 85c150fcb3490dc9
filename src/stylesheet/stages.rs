//! The text-to-text stages of stylesheet normalization.
//!
//! Each stage is a pure function over the whole text. The pipeline in
//! [`super::normalize_with`] runs them in a fixed order: comments go first so
//! that punctuation inside a comment never affects the surrounding spacing,
//! and punctuation collapsing runs before the block split so that no block
//! keeps a trailing space.
//!
//! Known limitations, kept on purpose since this is text rewriting and not a
//! parser:
//! - `/*` inside a quoted string still opens a comment.
//! - `}` inside a quoted string still ends a block.

use std::borrow::Cow;

use lazy_static::lazy_static;
use regex::{NoExpand, Regex};

lazy_static! {
    static ref COMMENT: Regex = Regex::new(r"(?s)/\*.*?\*/").unwrap();

    /// Structural punctuation and its collapsed form, in rewrite order.
    static ref PUNCTUATION: Vec<(Regex, &'static str)> = vec![
        (Regex::new(r"\s*\{\s*").unwrap(), "{"),
        (Regex::new(r"\s*\}\s*").unwrap(), "}"),
        (Regex::new(r"\s*;\s*").unwrap(), ";"),
        (Regex::new(r"\s*:\s*").unwrap(), ":"),
        (Regex::new(r"\s*,\s*").unwrap(), ","),
    ];

    static ref NEWLINE_RUN: Regex = Regex::new(r"\n+").unwrap();
    static ref SPACE_BEFORE_NEWLINE: Regex = Regex::new(r"\s+\n").unwrap();
    static ref SPACE_AFTER_NEWLINE: Regex = Regex::new(r"\n\s+").unwrap();
}

/// Removes every `/* ... */` span, delimiters included. Spans may cross lines.
/// An unterminated `/*` is left untouched.
///
/// Repeats until nothing matches, since the text on either side of a removed
/// span can join into a new span (`//**/*x*/`).
pub fn strip_comments(css: &str) -> String {
    let mut text = css.to_string();
    loop {
        let next = match COMMENT.replace_all(&text, "") {
            Cow::Borrowed(_) => break,
            Cow::Owned(next) => next,
        };
        text = next;
    }
    text
}

/// Removes whitespace on both sides of `{`, `}`, `;`, `:` and `,`.
pub fn collapse_punctuation_whitespace(css: &str) -> String {
    PUNCTUATION
        .iter()
        .fold(css.to_string(), |text, (pattern, replacement)| {
            pattern.replace_all(&text, NoExpand(replacement)).into_owned()
        })
}

/// Collapses runs of newlines into a single newline.
pub fn collapse_blank_lines(css: &str) -> String {
    NEWLINE_RUN.replace_all(css, "\n").into_owned()
}

/// Strips whitespace hugging a newline on either side.
pub fn trim_line_edges(css: &str) -> String {
    let text = SPACE_BEFORE_NEWLINE.replace_all(css, "\n");
    SPACE_AFTER_NEWLINE.replace_all(&text, "\n").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_single_and_multiline_comments() {
        assert_eq!(strip_comments("a/* x */b"), "ab");
        assert_eq!(strip_comments(".a{}\n/* one\n two {;}\n*/\n.b{}"), ".a{}\n\n.b{}");
    }

    #[test]
    fn comment_match_is_lazy() {
        assert_eq!(strip_comments("/*a*/keep/*b*/"), "keep");
    }

    #[test]
    fn spans_joined_by_removal_are_removed_too() {
        assert_eq!(strip_comments(".a{}//**/*x*/"), ".a{}/");
        assert_eq!(strip_comments("a//**/**/b"), "ab");
    }

    #[test]
    fn unterminated_comment_is_kept() {
        assert_eq!(strip_comments(".a{} /* open"), ".a{} /* open");
    }

    #[test]
    fn comment_marker_inside_string_is_not_special_cased() {
        assert_eq!(
            strip_comments(r#".a{content:"/*";} .b{} /* x */"#),
            r#".a{content:""#
        );
    }

    #[test]
    fn collapses_space_around_punctuation() {
        assert_eq!(
            collapse_punctuation_whitespace(".a , .b {\n  color : red ;\n}\n"),
            ".a,.b{color:red;}"
        );
    }

    #[test]
    fn keeps_space_between_plain_tokens() {
        assert_eq!(
            collapse_punctuation_whitespace(".a .b { margin : 0 auto ; }"),
            ".a .b{margin:0 auto;}"
        );
    }

    #[test]
    fn collapses_newline_runs() {
        assert_eq!(collapse_blank_lines("a\n\n\nb\nc"), "a\nb\nc");
    }

    #[test]
    fn trims_around_newlines() {
        assert_eq!(trim_line_edges("a  \n   b\t\n c"), "a\nb\nc");
    }
}
