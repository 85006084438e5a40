//! Inspection transforms
//!
//! Each transform renders one stage of the conversion for a source text:
//!
//! - `ir-treeviz`: the parsed node sequence as a tree (default)
//! - `ir-json`: the parsed node sequence as JSON
//! - `output`: the final MarkdownV2 text
//!
//! Example: `mdv2 inspect message.md ir-json`

use mdv2_core::{CodeKind, Converter, Inline};

/// All available inspect transforms
pub const AVAILABLE_TRANSFORMS: &[&str] = &["ir-treeviz", "ir-json", "output"];

/// Longest label printed for a text node before truncation.
const LABEL_WIDTH: usize = 30;

/// Execute a named transform on a source text.
///
/// # Examples
///
/// ```ignore
/// let converter = Converter::default();
/// let tree = execute_transform("**hi**", "ir-treeviz", &converter)?;
/// assert_eq!(tree, "└─ 𝐁 bold\n  └─ ◦ hi\n");
/// ```
pub fn execute_transform(
    source: &str,
    transform_name: &str,
    converter: &Converter,
) -> Result<String, String> {
    match transform_name {
        "ir-treeviz" => {
            let nodes = converter.parse(source).map_err(|e| e.to_string())?;
            Ok(to_treeviz_str(&nodes))
        }
        "ir-json" => {
            let nodes = converter.parse(source).map_err(|e| e.to_string())?;
            serde_json::to_string_pretty(&nodes)
                .map_err(|e| format!("JSON serialization failed: {e}"))
        }
        "output" => converter.try_convert(source).map_err(|e| e.to_string()),
        other => Err(format!("Unknown transform '{other}'")),
    }
}

/// Render nodes as a tree, two columns per level of nesting.
pub fn to_treeviz_str(nodes: &[Inline]) -> String {
    let mut output = String::new();
    format_nodes(&mut output, nodes, "");
    output
}

fn format_nodes(output: &mut String, nodes: &[Inline], prefix: &str) {
    for (index, node) in nodes.iter().enumerate() {
        let is_last = index == nodes.len() - 1;
        let connector = if is_last { "└─" } else { "├─" };
        output.push_str(&format!("{prefix}{connector} {}\n", node_label(node)));

        let child_prefix = format!("{}{}", prefix, if is_last { "  " } else { "│ " });
        match node {
            Inline::Link { text, .. } => format_nodes(output, text, &child_prefix),
            Inline::Styled { content, .. } => format_nodes(output, content, &child_prefix),
            Inline::Text(_) | Inline::Code(_) => {}
        }
    }
}

fn node_label(node: &Inline) -> String {
    match node {
        Inline::Text(text) => format!("◦ {}", truncate(text)),
        Inline::Code(span) => {
            let kind = match span.kind {
                CodeKind::Fenced => "fenced",
                CodeKind::Inline => "inline",
            };
            format!("ƒ {kind} {}", truncate(&span.content))
        }
        Inline::Link { url, .. } => format!("⊕ link {url}"),
        Inline::Styled { .. } => {
            let kind = node.entity_kind().map(|k| k.name()).unwrap_or_default();
            format!("{} {kind}", style_icon(kind))
        }
    }
}

fn style_icon(kind: &str) -> &'static str {
    match kind {
        "bold_italic" => "𝑩",
        "bold" => "𝐁",
        "italic" => "𝐼",
        "strike" => "∼",
        "underline" => "_",
        "spoiler" => "▒",
        _ => "?",
    }
}

fn truncate(text: &str) -> String {
    let escaped = text.replace('\n', "↵");
    if escaped.chars().count() > LABEL_WIDTH {
        let head: String = escaped.chars().take(LABEL_WIDTH - 1).collect();
        format!("{head}…")
    } else {
        escaped
    }
}
