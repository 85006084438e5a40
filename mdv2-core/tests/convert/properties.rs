//! Property tests over generated input.

use mdv2_core::{convert_markdown, escape_text, ConvertOptions, Converter, DepthPolicy};
use proptest::prelude::*;

proptest! {
    // Characters that can never pair up into markup on their own.
    #[test]
    fn reserved_only_input_gains_one_backslash_per_char(input in "[\\]()>#+={}.!-]{0,64}") {
        let output = convert_markdown(&input);
        prop_assert_eq!(output.chars().count(), input.chars().count() * 2);
        prop_assert!(output.chars().step_by(2).all(|c| c == '\\'));
    }

    #[test]
    fn plain_text_is_unchanged(input in "[a-zA-Z0-9 ,:;?\n]{0,64}") {
        prop_assert_eq!(convert_markdown(&input), input);
    }

    #[test]
    fn escaped_output_is_a_fixed_point(input in "[a-z .!#+=-]{0,64}") {
        let once = convert_markdown(&input);
        prop_assert_eq!(convert_markdown(&once), once.clone());
        prop_assert_eq!(escape_text(&once), once);
    }

    #[test]
    fn conversion_is_total(input in "[a-z*_~|\\[\\]()`\\\\ \n]{0,128}") {
        let converter = Converter::new(ConvertOptions {
            max_depth: 3,
            depth_policy: DepthPolicy::Error,
            ..ConvertOptions::default()
        });
        let _ = convert_markdown(&input);
        let _ = converter.try_convert(&input);
        let _ = converter.convert(&input);
    }

    #[test]
    fn arbitrary_unicode_never_panics(input in any::<String>()) {
        let _ = convert_markdown(&input);
    }
}
