//! Intermediate representation produced by the parser.
//!
//! A converted document is a flat sequence of [`Inline`] nodes. Entities own
//! their recursively parsed children, so the renderer never has to look up
//! placeholder strings: every node carries exactly what it renders.

use serde::Serialize;

/// A single node in a parsed sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Inline {
    /// Literal text, not yet escaped.
    Text(String),
    /// A code span, kept verbatim.
    Code(CodeSpan),
    /// `[text](url)`. The text is parsed, the url is taken as-is.
    Link { text: Vec<Inline>, url: String },
    /// An emphasis-like entity wrapping parsed content.
    Styled { style: Style, content: Vec<Inline> },
}

impl Inline {
    /// The entity kind of this node, if it is an entity.
    pub fn entity_kind(&self) -> Option<EntityKind> {
        match self {
            Inline::Link { .. } => Some(EntityKind::Link),
            Inline::Styled { style, .. } => Some(EntityKind::from(*style)),
            Inline::Text(_) | Inline::Code(_) => None,
        }
    }
}

/// A code span captured before any markup interpretation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeSpan {
    pub kind: CodeKind,
    /// Text between the delimiters, unescaped.
    pub content: String,
}

/// Fenced (triple backtick) or inline (single backtick) code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CodeKind {
    Fenced,
    Inline,
}

/// Styles that wrap their content in a pair of target-dialect delimiters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Style {
    BoldItalic,
    Bold,
    Italic,
    Strike,
    Underline,
    Spoiler,
}

/// Every markup entity the parser recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Link,
    BoldItalic,
    Bold,
    Italic,
    Strike,
    Underline,
    Spoiler,
}

impl EntityKind {
    pub fn name(&self) -> &'static str {
        match self {
            EntityKind::Link => "link",
            EntityKind::BoldItalic => "bold_italic",
            EntityKind::Bold => "bold",
            EntityKind::Italic => "italic",
            EntityKind::Strike => "strike",
            EntityKind::Underline => "underline",
            EntityKind::Spoiler => "spoiler",
        }
    }
}

impl From<Style> for EntityKind {
    fn from(style: Style) -> Self {
        match style {
            Style::BoldItalic => EntityKind::BoldItalic,
            Style::Bold => EntityKind::Bold,
            Style::Italic => EntityKind::Italic,
            Style::Strike => EntityKind::Strike,
            Style::Underline => EntityKind::Underline,
            Style::Spoiler => EntityKind::Spoiler,
        }
    }
}

/// Appends `ch` to the sequence, extending a trailing text run if present.
pub(crate) fn push_char(nodes: &mut Vec<Inline>, ch: char) {
    match nodes.last_mut() {
        Some(Inline::Text(text)) => text.push(ch),
        _ => nodes.push(Inline::Text(ch.to_string())),
    }
}
