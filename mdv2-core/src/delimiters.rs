//! Markup delimiters and the priority order they are matched in.
//!
//! Each rule runs as one left-to-right pass over a piece sequence: characters
//! interleaved with nodes already isolated by earlier passes. Longer emphasis
//! delimiters run first so that `***x***` is never read as italic inside bold
//! inside italic, and a lone `*` can't split a `**bold**` pair.

use crate::ir::{EntityKind, Inline, Style};
use std::ops::Range;

/// One unit of a sequence that is still being parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Piece {
    Char(char),
    Node(Inline),
}

impl Piece {
    pub(crate) fn is_char(&self, ch: char) -> bool {
        matches!(self, Piece::Char(c) if *c == ch)
    }

    pub(crate) fn as_char(&self) -> Option<char> {
        match self {
            Piece::Char(c) => Some(*c),
            Piece::Node(_) => None,
        }
    }
}

/// A markup construct and how to recognize it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityRule {
    /// `[text](url)`
    Link,
    /// The same delimiter opens and closes the span.
    Paired {
        style: Style,
        delimiter: &'static str,
    },
}

/// Entity rules in priority order.
pub const ENTITY_RULES: &[EntityRule] = &[
    EntityRule::Link,
    EntityRule::Paired {
        style: Style::BoldItalic,
        delimiter: "***",
    },
    EntityRule::Paired {
        style: Style::Bold,
        delimiter: "**",
    },
    EntityRule::Paired {
        style: Style::Italic,
        delimiter: "*",
    },
    EntityRule::Paired {
        style: Style::Strike,
        delimiter: "~~",
    },
    EntityRule::Paired {
        style: Style::Underline,
        delimiter: "__",
    },
    EntityRule::Paired {
        style: Style::Spoiler,
        delimiter: "||",
    },
];

/// Location of one match inside a piece sequence.
///
/// All ranges are absolute indices into the scanned sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RuleMatch {
    pub start: usize,
    pub end: usize,
    /// The part that gets parsed recursively.
    pub inner: Range<usize>,
    /// Link target, verbatim. Always `None` for paired rules.
    pub url: Option<Range<usize>>,
}

impl EntityRule {
    pub fn kind(&self) -> EntityKind {
        match self {
            EntityRule::Link => EntityKind::Link,
            EntityRule::Paired { style, .. } => EntityKind::from(*style),
        }
    }

    /// All non-overlapping matches, leftmost first.
    pub(crate) fn find_matches(&self, pieces: &[Piece]) -> Vec<RuleMatch> {
        match self {
            EntityRule::Link => link_matches(pieces),
            EntityRule::Paired { delimiter, .. } => paired_matches(pieces, delimiter),
        }
    }
}

/// True when the piece at `index` follows an odd run of backslashes.
pub(crate) fn is_escaped(pieces: &[Piece], index: usize) -> bool {
    let run = pieces[..index]
        .iter()
        .rev()
        .take_while(|p| p.is_char('\\'))
        .count();
    run % 2 == 1
}

fn starts_with(pieces: &[Piece], index: usize, delimiter: &str) -> bool {
    let mut pos = index;
    for ch in delimiter.chars() {
        match pieces.get(pos) {
            Some(piece) if piece.is_char(ch) => pos += 1,
            _ => return false,
        }
    }
    true
}

fn delimiter_at(pieces: &[Piece], index: usize, delimiter: &str) -> bool {
    starts_with(pieces, index, delimiter) && !is_escaped(pieces, index)
}

fn paired_matches(pieces: &[Piece], delimiter: &str) -> Vec<RuleMatch> {
    let width = delimiter.chars().count();
    let mut matches = Vec::new();
    let mut start = 0;

    while start + width <= pieces.len() {
        if !delimiter_at(pieces, start, delimiter) {
            start += 1;
            continue;
        }

        let body = start + width;
        // Interior must be non-empty, so the earliest close is one past the body.
        let close = (body + 1..=pieces.len().saturating_sub(width))
            .find(|&pos| delimiter_at(pieces, pos, delimiter));

        match close {
            Some(close) => {
                matches.push(RuleMatch {
                    start,
                    end: close + width,
                    inner: body..close,
                    url: None,
                });
                start = close + width;
            }
            // Any later opener would only see a subset of these candidates.
            None => break,
        }
    }

    matches
}

/// For every index, the position of the first piece at or after it whose
/// index satisfies `pred`, or `len` when there is none.
fn next_positions(len: usize, pred: impl Fn(usize) -> bool) -> Vec<usize> {
    let mut next = vec![len; len + 1];
    for index in (0..len).rev() {
        next[index] = if pred(index) { index } else { next[index + 1] };
    }
    next
}

fn link_matches(pieces: &[Piece]) -> Vec<RuleMatch> {
    let len = pieces.len();
    let mut matches = Vec::new();
    if !pieces.iter().any(|p| p.is_char('[')) {
        return matches;
    }

    // Escaped closers belong to the text or url they appear in.
    let next_bracket = next_positions(len, |i| delimiter_at(pieces, i, "]"));
    let next_paren = next_positions(len, |i| delimiter_at(pieces, i, ")"));
    let next_node = next_positions(len, |i| matches!(pieces[i], Piece::Node(_)));

    let mut start = 0;
    while start < len {
        if !pieces[start].is_char('[') || is_escaped(pieces, start) {
            start += 1;
            continue;
        }

        let text_start = start + 1;
        let bracket = next_bracket[text_start];
        if bracket == len {
            break;
        }

        let opens_url = pieces.get(bracket + 1).is_some_and(|p| p.is_char('('));
        if bracket > text_start && opens_url {
            let url_start = bracket + 2;
            let paren = next_paren[url_start];
            // The url must be plain, non-empty text.
            if paren < len && paren > url_start && next_node[url_start] > paren {
                matches.push(RuleMatch {
                    start,
                    end: paren + 1,
                    inner: text_start..bracket,
                    url: Some(url_start..paren),
                });
                start = paren + 1;
                continue;
            }
        }

        start += 1;
    }

    matches
}
