//! Rendering of parsed nodes into the target dialect.

use crate::escape::{escape_code, escape_text, CodeEscape};
use crate::ir::{Inline, Style};

/// Opening and closing markers for a style.
pub fn style_markers(style: Style) -> (&'static str, &'static str) {
    match style {
        Style::BoldItalic => ("*_", "_*"),
        Style::Bold => ("*", "*"),
        Style::Italic => ("_", "_"),
        Style::Strike => ("~", "~"),
        Style::Underline => ("__", "__"),
        Style::Spoiler => ("||", "||"),
    }
}

/// Render a node sequence.
///
/// Text runs are escaped exactly once, here. Entity content was parsed as its
/// own sequence, so its text is escaped in that sequence's context and is
/// never seen by the escaper a second time.
pub fn render(nodes: &[Inline], code_escape: CodeEscape) -> String {
    let mut out = String::new();
    render_into(&mut out, nodes, code_escape);
    out
}

fn render_into(out: &mut String, nodes: &[Inline], code_escape: CodeEscape) {
    for node in nodes {
        match node {
            Inline::Text(text) => out.push_str(&escape_text(text)),
            Inline::Code(span) => {
                let delimiter = code_escape.delimiter(span.kind);
                out.push_str(delimiter);
                out.push_str(&escape_code(&span.content, code_escape));
                out.push_str(delimiter);
            }
            Inline::Link { text, url } => {
                out.push('[');
                render_into(out, text, code_escape);
                out.push_str("](");
                out.push_str(url);
                out.push(')');
            }
            Inline::Styled { style, content } => {
                let (open, close) = style_markers(*style);
                out.push_str(open);
                render_into(out, content, code_escape);
                out.push_str(close);
            }
        }
    }
}
