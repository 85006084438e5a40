//! Plain text escaping and simple entity remapping.

use insta::assert_snapshot;
use mdv2_core::convert_markdown;

#[test]
fn test_no_markdown() {
    assert_eq!(convert_markdown("Hello world."), r"Hello world\.");
    assert_eq!(convert_markdown("Hello world!"), r"Hello world\!");
}

#[test]
fn test_empty_string() {
    assert_eq!(convert_markdown(""), "");
}

#[test]
fn test_special_characters() {
    assert_eq!(
        convert_markdown("Characters to escape: .!-=+"),
        r"Characters to escape: \.\!\-\=\+"
    );
    assert_eq!(
        convert_markdown("Characters that need escaping: . ! - = + ( ) { } [ ]"),
        r"Characters that need escaping: \. \! \- \= \+ \( \) \{ \} \[ \]"
    );
}

#[test]
fn test_block_markup_is_plain_punctuation() {
    assert_eq!(convert_markdown("# Title"), r"\# Title");
    assert_eq!(convert_markdown("> quoted"), r"\> quoted");
    assert_eq!(convert_markdown("1. first\n- second"), "1\\. first\n\\- second");
    assert_eq!(convert_markdown("| a | b |"), r"\| a \| b \|");
}

#[test]
fn test_already_escaped() {
    assert_eq!(
        convert_markdown(r"This is \*already escaped\*"),
        r"This is \*already escaped\*"
    );
}

#[test]
fn test_unicode_is_untouched() {
    assert_eq!(convert_markdown("héllo *wörld* 🎉!"), "héllo _wörld_ 🎉\\!");
}

#[test]
fn test_placeholder_shaped_text_is_plain() {
    assert_eq!(
        convert_markdown("PLACEHOLDERMD0 and PLACEHOLDERCODE0"),
        "PLACEHOLDERMD0 and PLACEHOLDERCODE0"
    );
}

#[test]
fn test_mixed_message() {
    let output = convert_markdown(
        "Release *v1.2* is out! See [notes](https://example.com/notes) or run `mdv2 --help`.",
    );
    assert_snapshot!(output, @r"Release _v1\.2_ is out\! See [notes](https://example.com/notes) or run `mdv2 --help`\.");
}

#[test]
fn test_mixed_content() {
    assert_eq!(
        convert_markdown("This is **bold**, this is *italic*, and this has `code`!"),
        r"This is *bold*, this is _italic_, and this has `code`\!"
    );
}
