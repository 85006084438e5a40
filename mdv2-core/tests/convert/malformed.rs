//! Unbalanced and mixed markup degrades to escaped literal text.

use mdv2_core::{convert_markdown, ConvertError, ConvertOptions, Converter, DepthPolicy};

#[test]
fn test_unclosed_delimiters() {
    assert_eq!(convert_markdown("**unclosed bold"), r"\*\*unclosed bold");
    assert_eq!(convert_markdown("~~a"), r"\~\~a");
    assert_eq!(convert_markdown("||a"), r"\|\|a");
    assert_eq!(convert_markdown("[text](no close"), r"\[text\]\(no close");
}

#[test]
fn test_empty_pairs_are_literal() {
    assert_eq!(convert_markdown("**"), r"\*\*");
    assert_eq!(convert_markdown("~~~~"), r"\~\~\~\~");
}

#[test]
fn test_four_stars_become_italic_star() {
    // Pairs need content, so only the single-star rule can match here.
    assert_eq!(convert_markdown("****"), r"_\*_\*");
}

#[test]
fn test_escaped_link_closers() {
    assert_eq!(convert_markdown(r"[a\](b)"), r"\[a\]\(b\)");
    assert_eq!(convert_markdown(r"[a\]b](u)"), r"[a\]b](u)");
}

#[test]
fn test_escaped_link_opener() {
    assert_eq!(convert_markdown(r"\[not a link](x)"), r"\[not a link\]\(x\)");
}

#[test]
fn test_mixed_nesting_prefers_longer_delimiter() {
    // The bold pair closes at the first `**`; the stray single stars stay literal.
    assert_eq!(convert_markdown("**a*b**c*"), r"*a\*b*c\*");
}

#[test]
fn test_overlapping_pairs() {
    assert_eq!(convert_markdown("**a ~~b** c~~"), r"*a \~\~b* c\~\~");
}

#[test]
fn test_depth_limit_degrades_to_text() {
    let converter = Converter::new(ConvertOptions {
        max_depth: 1,
        ..ConvertOptions::default()
    });
    let input = "*a **b *c* d** e*";
    assert_eq!(convert_markdown(input), "_a *b _c_ d* e_");
    assert_eq!(converter.convert(input), r"_a *b \*c\* d* e_");
}

#[test]
fn test_depth_limit_can_be_reported() {
    let converter = Converter::new(ConvertOptions {
        max_depth: 1,
        depth_policy: DepthPolicy::Error,
        ..ConvertOptions::default()
    });
    assert_eq!(
        converter.try_convert("*a **b *c* d** e*"),
        Err(ConvertError::NestingTooDeep { limit: 1 })
    );
    assert_eq!(converter.try_convert("*a **b** c*").as_deref(), Ok("_a *b* c_"));
}
