//! Built-in inputs for the `examples`, `verify` and `bench` commands.

/// Inputs shown by `mdv2 examples`.
pub const EXAMPLES: &[&str] = &[
    // Basic formatting
    "**Bold text**",
    "*Italic text*",
    "***Bold and italic***",
    "~~Strikethrough~~",
    "__Underline__",
    "||Spoiler text||",
    // Links
    "[Example](https://example.com)",
    "[**Bold link**](https://example.com)",
    // Code
    "`inline code`",
    "```\ncode block\nwith multiple lines\n```",
    // Mixed content
    "This is **bold**, this is *italic*, and this has `code`!",
    "Check out [this **amazing** page](https://example.com/docs)",
    // Special characters
    "Characters that need escaping: . ! - = + ( ) { } [ ]",
    // Nesting
    "**This is bold with *nested italic* and `code`** - amazing!",
];

/// Input and expected output pairs checked by `mdv2 verify`.
pub const VERIFY_CASES: &[(&str, &str)] = &[
    ("**bold**", "*bold*"),
    ("*italic*", "_italic_"),
    ("Hello world!", "Hello world\\!"),
    ("`code`", "`code`"),
    ("[link](https://example.com)", "[link](https://example.com)"),
];

const BENCH_DOCUMENT: &str = r#"
# This is a header

This is **bold text** with _italic text_ and __underlined text__.

Here's some code: `print("Hello, world!")` and here's a block:

```python
def example_function():
    return "This is a **test** with special chars: [](){}#+-=|.!"
```

> This is a blockquote with **bold** and _italic_ text.

Some text with ~~strikethrough~~ and ||spoiler|| content.

[Link text](https://example.com) with **bold** inside.

More special characters: _*[]()~`>#+-=|{}.!
And escaped characters: \_\*\[\]\(\)\~\`\>\#\+\-\=\|\{\}\.\!

Complex formatting: ***bold and italic*** and ___underlined italic___.
"#;

/// The benchmark document repeated `multiplier` times.
pub fn bench_text(multiplier: usize) -> String {
    BENCH_DOCUMENT.repeat(multiplier)
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdv2_core::convert_markdown;

    #[test]
    fn verify_cases_hold() {
        for (input, expected) in VERIFY_CASES {
            assert_eq!(convert_markdown(input), *expected, "{input}");
        }
    }

    #[test]
    fn bench_text_scales() {
        assert_eq!(bench_text(3).len(), BENCH_DOCUMENT.len() * 3);
        assert!(bench_text(0).is_empty());
    }

    #[test]
    fn bench_document_converts() {
        let output = convert_markdown(&bench_text(1));
        assert!(output.contains("\\# This is a header"));
        assert!(output.contains("*bold text*"));
        assert!(output.contains("```python\ndef example_function():"));
        assert!(output.contains("*_bold and italic_*"));
    }
}
