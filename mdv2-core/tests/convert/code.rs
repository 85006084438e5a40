//! Code spans: opaque to markup, escaped by their own rules.

use mdv2_core::{convert_markdown, CodeEscape, ConvertOptions, Converter};

fn strict() -> Converter {
    Converter::new(ConvertOptions {
        code_escape: CodeEscape::Strict,
        ..ConvertOptions::default()
    })
}

#[test]
fn test_inline_code() {
    assert_eq!(convert_markdown("This is `inline code`."), r"This is `inline code`\.");
    assert_eq!(convert_markdown("`code`"), "`code`");
}

#[test]
fn test_code_block() {
    assert_eq!(convert_markdown("```\ncode block\n```"), "```\ncode block\n```");
    assert_eq!(
        convert_markdown("```\ncode block\nwith multiple lines\n```"),
        "```\ncode block\nwith multiple lines\n```"
    );
}

#[test]
fn test_code_with_special_chars() {
    assert_eq!(convert_markdown("`code with * and _`"), "`code with * and _`");
    assert_eq!(
        convert_markdown("```\n**bold in code block**\n```"),
        "```\n**bold in code block**\n```"
    );
    assert_eq!(
        convert_markdown("Characters to escape: `*_~|`"),
        "Characters to escape: `*_~|`"
    );
}

#[test]
fn test_backslashes_in_code_are_doubled() {
    assert_eq!(convert_markdown(r"`C:\temp`"), r"`C:\\temp`");
}

#[test]
fn test_backticks_in_fenced_code_are_escaped() {
    assert_eq!(
        convert_markdown("```\nlet s = `x`;\n```"),
        "```\nlet s = \\`x\\`;\n```"
    );
}

#[test]
fn test_code_inside_entity() {
    assert_eq!(
        convert_markdown("**This is bold with *nested italic* and `code`** - amazing!"),
        r"*This is bold with _nested italic_ and `code`* \- amazing\!"
    );
}

#[test]
fn test_unclosed_backtick_is_escaped() {
    assert_eq!(convert_markdown("a ` b"), r"a \` b");
    assert_eq!(convert_markdown("`a\nb`"), "\\`a\nb\\`");
}

#[test]
fn test_code_in_url_breaks_link() {
    assert_eq!(convert_markdown("[a](`x`)"), r"\[a\]\(`x`\)");
}

#[test]
fn test_strict_code_escaping() {
    assert_eq!(strict().convert("`a.b`"), r"\`a\.b\`");
    assert_eq!(
        strict().convert("```\n1 + 1\n```"),
        "\\`\\`\\`\n1 \\+ 1\n\\`\\`\\`"
    );
}

#[test]
fn test_strict_mode_leaves_entities_alone() {
    assert_eq!(strict().convert("**bold** `x`"), r"*bold* \`x\`");
}
