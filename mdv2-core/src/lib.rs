//! Markdown to MarkdownV2 conversion
//!
//!     This crate turns free-form, Markdown-flavoured text into the stricter MarkdownV2 dialect,
//!     where every reserved punctuation character must be escaped unless it is part of a
//!     recognized, balanced construct. The output can be handed straight to a renderer (a chat
//!     client, typically) without breaking its wire format or letting stray markup through.
//!
//!     This is a pure lib: no printing, no env vars, no file I/O. The mdv2 CLI is a thin shell
//!     around it.
//!
//! Architecture
//!
//!     Conversion is a four stage pipeline over one input string:
//!
//!     1. Code isolation: fenced then inline code spans are cut out verbatim.
//!     2. Entity isolation: links and emphasis are found in a fixed priority order
//!        (see ./delimiters.rs). Each match has its interior parsed recursively.
//!     3. Escaping: every reserved character in the remaining text is escaped, once.
//!     4. Rendering: nodes are written back out in the target syntax.
//!
//!     Stages 1 and 2 produce the node sequence in ./ir.rs, stages 3 and 4 walk it (./render.rs).
//!     There are no placeholder strings, so input that happens to look like one is just text.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── ir.rs                   # Node sequence
//!     ├── delimiters.rs           # Entity rules, in priority order
//!     ├── parser.rs               # Code and entity isolation
//!     ├── escape.rs               # Reserved characters, text and code escaping
//!     ├── render.rs               # Node sequence → MarkdownV2
//!     ├── converter.rs            # Converter, options, depth policy
//!     └── lib.rs
//!
//! Degradation
//!
//!     Conversion never fails on malformed input. An opener without a closer is literal text and
//!     gets escaped. Markup nested deeper than `max_depth` is literal text as well, unless the
//!     caller opts into [`DepthPolicy::Error`] through [`Converter::try_convert`].
//!
//! Testing
//!     tests
//!     ├── lib.rs
//!     └── convert
//!         ├── mod.rs
//!         ├── <area>.rs
//!
//!     Rust does not discover tests in subdirectories by default, so they are included from lib.rs.

pub mod converter;
pub mod delimiters;
pub mod error;
pub mod escape;
pub mod ir;
mod parser;
pub mod render;

pub use converter::{ConvertOptions, Converter, DepthPolicy, DEFAULT_MAX_DEPTH};
pub use error::ConvertError;
pub use escape::{escape_text, CodeEscape, RESERVED};
pub use ir::{CodeKind, CodeSpan, EntityKind, Inline, Style};

/// Convert text with the default options.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(mdv2_core::convert_markdown("**bold**"), "*bold*");
/// assert_eq!(mdv2_core::convert_markdown("Hello world!"), "Hello world\\!");
/// ```
pub fn convert_markdown(text: &str) -> String {
    Converter::default().convert(text)
}
