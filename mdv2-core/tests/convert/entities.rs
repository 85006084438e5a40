//! Entity recognition, priority and nesting.

use mdv2_core::convert_markdown;

#[test]
fn test_simple_entities() {
    assert_eq!(convert_markdown("**bold text**"), "*bold text*");
    assert_eq!(convert_markdown("*italic text*"), "_italic text_");
    assert_eq!(convert_markdown("~~strikethrough text~~"), "~strikethrough text~");
    assert_eq!(convert_markdown("__underline text__"), "__underline text__");
    assert_eq!(convert_markdown("||spoiler text||"), "||spoiler text||");
}

#[test]
fn test_bold_italic() {
    assert_eq!(convert_markdown("***Bold and italic***"), "*_Bold and italic_*");
}

#[test]
fn test_nested_markdown() {
    assert_eq!(
        convert_markdown("**bold and *italic* text**"),
        "*bold and _italic_ text*"
    );
    assert_eq!(
        convert_markdown("*italic and __underline__ text*"),
        "_italic and __underline__ text_"
    );
}

#[test]
fn test_bold_inside_italic() {
    assert_eq!(convert_markdown("*a **b** c*"), "_a *b* c_");
}

#[test]
fn test_entities_span_lines() {
    assert_eq!(convert_markdown("**one\ntwo**"), "*one\ntwo*");
}

#[test]
fn test_link() {
    assert_eq!(
        convert_markdown("[link](https://google.com)"),
        "[link](https://google.com)"
    );
}

#[test]
fn test_link_with_markdown() {
    assert_eq!(
        convert_markdown("[**bold link**](https://google.com)"),
        "[*bold link*](https://google.com)"
    );
    assert_eq!(
        convert_markdown("Check out [this **amazing** repository](https://example.com/repo)"),
        "Check out [this *amazing* repository](https://example.com/repo)"
    );
}

#[test]
fn test_link_url_is_verbatim() {
    assert_eq!(
        convert_markdown("[a.b](https://example.com/x_y-z.html)"),
        r"[a\.b](https://example.com/x_y-z.html)"
    );
}

#[test]
fn test_emphasis_inside_url_is_not_markup() {
    assert_eq!(
        convert_markdown("[docs](https://example.com/*draft*)"),
        "[docs](https://example.com/*draft*)"
    );
}

#[test]
fn test_reserved_chars_inside_entities_are_escaped() {
    assert_eq!(convert_markdown("||a|b||"), r"||a\|b||");
    assert_eq!(convert_markdown("**1+1=2**"), r"*1\+1\=2*");
}

#[test]
fn test_single_underscore_is_not_italic() {
    assert_eq!(convert_markdown("_not italic_"), r"\_not italic\_");
}
