//! The public conversion entry points.

use crate::error::ConvertError;
use crate::escape::CodeEscape;
use crate::ir::Inline;
use crate::parser::Parser;
use crate::render::render;
use tracing::debug;

/// Default limit on how many entities may enclose one another.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// What to do when markup is nested deeper than `max_depth`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DepthPolicy {
    /// Keep the excess markup as escaped literal text.
    #[default]
    Literal,
    /// Fail with [`ConvertError::NestingTooDeep`].
    Error,
}

/// Knobs for a [`Converter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertOptions {
    /// How many recursive entity parses may be stacked. Entities found at
    /// this depth are kept as text.
    pub max_depth: usize,
    pub code_escape: CodeEscape,
    pub depth_policy: DepthPolicy,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        ConvertOptions {
            max_depth: DEFAULT_MAX_DEPTH,
            code_escape: CodeEscape::default(),
            depth_policy: DepthPolicy::default(),
        }
    }
}

/// Converts Markdown-ish text into escaped MarkdownV2.
///
/// A converter holds only its options, so one instance can be shared freely
/// between threads.
///
/// # Examples
///
/// ```ignore
/// let converter = Converter::default();
/// assert_eq!(converter.convert("**bold** text!"), "*bold* text\\!");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Converter {
    options: ConvertOptions,
}

impl Converter {
    pub fn new(options: ConvertOptions) -> Self {
        Converter { options }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Parse text into nodes without rendering.
    ///
    /// Fails only when `depth_policy` is [`DepthPolicy::Error`] and the
    /// nesting limit is exceeded.
    pub fn parse(&self, text: &str) -> Result<Vec<Inline>, ConvertError> {
        Parser::new(self.options.max_depth, self.options.depth_policy).parse(text)
    }

    /// Convert text, honoring the configured depth policy.
    pub fn try_convert(&self, text: &str) -> Result<String, ConvertError> {
        let nodes = self.parse(text)?;
        let output = render(&nodes, self.options.code_escape);
        debug!(
            input_len = text.len(),
            output_len = output.len(),
            nodes = nodes.len(),
            "converted text"
        );
        Ok(output)
    }

    /// Convert text. Never fails: excess nesting is always kept as text.
    pub fn convert(&self, text: &str) -> String {
        let nodes = Parser::new(self.options.max_depth, DepthPolicy::Literal)
            .parse(text)
            .unwrap_or_else(|_| vec![Inline::Text(text.to_string())]);
        let output = render(&nodes, self.options.code_escape);
        debug!(
            input_len = text.len(),
            output_len = output.len(),
            nodes = nodes.len(),
            "converted text"
        );
        output
    }
}
