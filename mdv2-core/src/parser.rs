//! Code isolation and entity isolation.
//!
//! Parsing happens in two stages. Code spans are cut out first, so their
//! content is never read as markup. The remaining pieces then go through the
//! entity rules in priority order; each match has its interior parsed
//! recursively and is replaced by a single node that later passes treat as an
//! opaque atom.

use crate::converter::DepthPolicy;
use crate::delimiters::{is_escaped, EntityRule, Piece, RuleMatch, ENTITY_RULES};
use crate::error::ConvertError;
use crate::ir::{push_char, CodeKind, CodeSpan, Inline};
use tracing::{trace, warn};

const FENCE: &str = "```";

pub(crate) struct Parser {
    max_depth: usize,
    depth_policy: DepthPolicy,
}

impl Parser {
    pub(crate) fn new(max_depth: usize, depth_policy: DepthPolicy) -> Self {
        Parser {
            max_depth,
            depth_policy,
        }
    }

    pub(crate) fn parse(&self, text: &str) -> Result<Vec<Inline>, ConvertError> {
        let pieces = isolate_inline_code(isolate_fenced_code(text));
        self.parse_entities(pieces, 0)
    }

    /// `depth` counts the entities enclosing `pieces`.
    fn parse_entities(
        &self,
        mut pieces: Vec<Piece>,
        depth: usize,
    ) -> Result<Vec<Inline>, ConvertError> {
        if depth >= self.max_depth {
            if ENTITY_RULES
                .iter()
                .any(|rule| !rule.find_matches(&pieces).is_empty())
            {
                match self.depth_policy {
                    DepthPolicy::Error => {
                        return Err(ConvertError::NestingTooDeep {
                            limit: self.max_depth,
                        })
                    }
                    DepthPolicy::Literal => {
                        warn!(limit = self.max_depth, "markup nested too deep, kept as text");
                    }
                }
            }
            return Ok(into_inlines(pieces));
        }

        for rule in ENTITY_RULES {
            pieces = self.apply_rule(pieces, rule, depth)?;
        }
        Ok(into_inlines(pieces))
    }

    fn apply_rule(
        &self,
        pieces: Vec<Piece>,
        rule: &EntityRule,
        depth: usize,
    ) -> Result<Vec<Piece>, ConvertError> {
        let matches = rule.find_matches(&pieces);
        if matches.is_empty() {
            return Ok(pieces);
        }

        let mut out = Vec::with_capacity(pieces.len());
        let mut rest = pieces.into_iter();
        let mut cursor = 0;
        for found in matches {
            out.extend(rest.by_ref().take(found.start - cursor));
            let span: Vec<Piece> = rest.by_ref().take(found.end - found.start).collect();
            cursor = found.end;

            trace!(kind = rule.kind().name(), depth, "isolated entity");
            let node = self.build_entity(rule, span, &found, depth)?;
            out.push(Piece::Node(node));
        }
        out.extend(rest);
        Ok(out)
    }

    fn build_entity(
        &self,
        rule: &EntityRule,
        mut span: Vec<Piece>,
        found: &RuleMatch,
        depth: usize,
    ) -> Result<Inline, ConvertError> {
        let offset = found.start;
        let url: String = found
            .url
            .as_ref()
            .map(|range| {
                span[range.start - offset..range.end - offset]
                    .iter()
                    .filter_map(Piece::as_char)
                    .collect()
            })
            .unwrap_or_default();
        let inner: Vec<Piece> = span
            .drain(found.inner.start - offset..found.inner.end - offset)
            .collect();
        let children = self.parse_entities(inner, depth + 1)?;

        Ok(match rule {
            EntityRule::Link => Inline::Link {
                text: children,
                url,
            },
            EntityRule::Paired { style, .. } => Inline::Styled {
                style: *style,
                content: children,
            },
        })
    }
}

/// Collapse pieces into nodes, merging characters into text runs.
fn into_inlines(pieces: Vec<Piece>) -> Vec<Inline> {
    let mut nodes = Vec::with_capacity(pieces.len().min(16));
    for piece in pieces {
        match piece {
            Piece::Char(ch) => push_char(&mut nodes, ch),
            Piece::Node(node) => nodes.push(node),
        }
    }
    nodes
}

/// Cut out ```` ```fenced``` ```` spans. Content may cross lines.
///
/// An opening fence after an unescaped backslash does not open a span; the
/// closing fence is the nearest one after at least one content character.
fn isolate_fenced_code(text: &str) -> Vec<Piece> {
    let pieces: Vec<Piece> = text.chars().map(Piece::Char).collect();
    if !text.contains(FENCE) {
        return pieces;
    }

    let mut out = Vec::with_capacity(pieces.len());
    let mut index = 0;
    let mut searching = true;
    while index < pieces.len() {
        if searching && fence_at(&pieces, index) && !is_escaped(&pieces, index) {
            let body = index + 3;
            let close = (body + 1..pieces.len()).find(|&pos| fence_at(&pieces, pos));
            match close {
                Some(close) => {
                    out.push(Piece::Node(Inline::Code(CodeSpan {
                        kind: CodeKind::Fenced,
                        content: collect_chars(&pieces[body..close]),
                    })));
                    index = close + 3;
                    continue;
                }
                None => searching = false,
            }
        }
        out.push(pieces[index].clone());
        index += 1;
    }
    out
}

/// Cut out `` `inline` `` spans. A span ends at the first backtick on the
/// same line and never reaches across a fenced block.
fn isolate_inline_code(pieces: Vec<Piece>) -> Vec<Piece> {
    if !pieces.iter().any(|p| p.is_char('`')) {
        return pieces;
    }

    let mut out = Vec::with_capacity(pieces.len());
    let mut index = 0;
    while index < pieces.len() {
        if pieces[index].is_char('`') && !is_escaped(&pieces, index) {
            let body = index + 1;
            let stop = pieces[body..]
                .iter()
                .position(|p| p.is_char('`') || p.is_char('\n') || matches!(p, Piece::Node(_)))
                .map(|offset| body + offset);

            match stop {
                Some(close) if close > body && pieces[close].is_char('`') => {
                    out.push(Piece::Node(Inline::Code(CodeSpan {
                        kind: CodeKind::Inline,
                        content: collect_chars(&pieces[body..close]),
                    })));
                    index = close + 1;
                    continue;
                }
                // Back-to-back backticks: the second may still open a span.
                Some(close) if close == body && pieces[close].is_char('`') => {}
                // Nothing closes this span before the barrier, nor any span
                // opened between here and there.
                Some(barrier) => {
                    out.extend(pieces[index..barrier].iter().cloned());
                    index = barrier;
                    continue;
                }
                None => {
                    out.extend(pieces[index..].iter().cloned());
                    break;
                }
            }
        }
        out.push(pieces[index].clone());
        index += 1;
    }
    out
}

fn fence_at(pieces: &[Piece], index: usize) -> bool {
    index + 3 <= pieces.len() && pieces[index..index + 3].iter().all(|p| p.is_char('`'))
}

fn collect_chars(pieces: &[Piece]) -> String {
    pieces.iter().filter_map(Piece::as_char).collect()
}
