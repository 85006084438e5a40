//! Escaping of reserved MarkdownV2 characters
//!
//! Plain text and code content are escaped by different rules. Plain text
//! only has reserved characters prefixed with a backslash, and a character
//! that already follows an unescaped backslash is left alone, so escaping is
//! idempotent. Code content always doubles backslashes, since the target
//! dialect reads them literally inside code.

use crate::ir::CodeKind;

/// Characters that carry meaning in the target dialect and must be escaped
/// when they appear as literal text.
pub const RESERVED: &[char] = &[
    '_', '*', '[', ']', '(', ')', '~', '`', '>', '#', '+', '-', '=', '|', '{', '}', '.', '!',
];

pub fn is_reserved(ch: char) -> bool {
    RESERVED.contains(&ch)
}

/// How code spans are escaped on output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CodeEscape {
    /// Double backslashes and escape backticks; delimiters stay literal.
    #[default]
    Minimal,
    /// Also escape every reserved character, and emit pre-escaped delimiters.
    Strict,
}

impl CodeEscape {
    /// The delimiter written on both sides of a code span.
    pub fn delimiter(&self, kind: CodeKind) -> &'static str {
        match (self, kind) {
            (CodeEscape::Minimal, CodeKind::Fenced) => "```",
            (CodeEscape::Minimal, CodeKind::Inline) => "`",
            (CodeEscape::Strict, CodeKind::Fenced) => "\\`\\`\\`",
            (CodeEscape::Strict, CodeKind::Inline) => "\\`",
        }
    }
}

/// Escape every reserved character that is not already escaped.
///
/// A character counts as escaped when it follows an odd number of
/// consecutive backslashes.
///
/// # Example
///
/// ```ignore
/// assert_eq!(escape_text("Hello world!"), "Hello world\\!");
/// assert_eq!(escape_text("already \\*escaped"), "already \\*escaped");
/// ```
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + text.len() / 8);
    let mut backslashes = 0usize;
    for ch in text.chars() {
        if is_reserved(ch) && backslashes % 2 == 0 {
            out.push('\\');
        }
        out.push(ch);
        if ch == '\\' {
            backslashes += 1;
        } else {
            backslashes = 0;
        }
    }
    out
}

/// Escape the content of a code span.
pub fn escape_code(content: &str, mode: CodeEscape) -> String {
    let mut out = String::with_capacity(content.len() + 8);
    for ch in content.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '`' => out.push_str("\\`"),
            c if mode == CodeEscape::Strict && is_reserved(c) => {
                out.push('\\');
                out.push(c);
            }
            c => out.push(c),
        }
    }
    out
}
