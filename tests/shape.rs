mod common;

#[cfg(test)]
mod shape_tests {
    use crate::common::check;

    use persian_shaper::error::ShapingError;
    use persian_shaper::{shape_text, Shaper};

    #[test]
    fn construction() {
        assert_eq!(Shaper::new("").unwrap_err(), ShapingError::EmptyInput);
        assert_eq!(
            Shaper::new("").unwrap_err().to_string(),
            "input is not specified"
        );
        assert!(Shaper::new(" ").is_ok());
    }

    #[test]
    fn identity_without_table_characters() {
        check(&[
            ("hello, world", "hello, world"),
            (" ", " "),
            ("\u{0660}\u{0661}", "\u{0660}\u{0661}"),
            ("\u{FEFB}", "\u{FEFB}"),
            ("\u{064E}", "\u{064E}"),
        ]);
    }

    #[test]
    fn digits() {
        check(&[
            ("\u{06F1}\u{06F2}\u{06F3}", "123"),
            ("\u{06F4}\u{06F5}\u{06F6}\u{06F7}\u{06F8}\u{06F9}", "456789"),
            ("\u{06F0}", "\u{0660}"),
        ]);
    }

    #[test]
    fn question_mark() {
        check(&[("?", "\u{061F}"), ("\u{0628}?", "\u{FE8F}\u{061F}")]);
    }

    #[test]
    fn isolated_letter() {
        check(&[("\u{0628}", "\u{FE8F}"), ("a\u{0628} ", "a\u{FE8F} ")]);
    }

    #[test]
    fn medial_joining() {
        check(&[(
            "\u{0628}\u{062A}\u{062B}",
            "\u{FE91}\u{FE98}\u{FE9A}",
        )]);
    }

    #[test]
    fn right_joining_only() {
        check(&[
            // Dal, Beh
            ("\u{062F}\u{0628}", "\u{FEA9}\u{FE8F}"),
            // Dal, Beh, Teh
            ("\u{062F}\u{0628}\u{062A}", "\u{FEA9}\u{FE91}\u{FE96}"),
            // Beh, Reh
            ("\u{0628}\u{0631}", "\u{FE91}\u{FEAE}"),
            // Waw, Waw
            ("\u{0648}\u{0648}", "\u{FEED}\u{FEED}"),
        ]);
    }

    #[test]
    fn lam_alef() {
        check(&[
            // Beh, Lam, Alef
            ("\u{0628}\u{0644}\u{0627}", "\u{FE91}\u{FEFC}"),
            // Lam, Alef
            ("\u{0644}\u{0627}", "\u{FEFB}"),
            // Dal, Lam, Alef with Hamza above
            ("\u{062F}\u{0644}\u{0623}", "\u{FEA9}\u{FEF7}"),
            // Space, Lam, Alef with Hamza below
            (" \u{0644}\u{0625}", " \u{FEF9}"),
            // Meem, Lam, Alef with Madda above
            ("\u{0645}\u{0644}\u{0622}", "\u{FEE3}\u{FEF6}"),
        ]);
        assert_eq!(shape_text("\u{0628}\u{0644}\u{0627}").chars().count(), 2);
    }

    #[test]
    fn teh_marbuta() {
        check(&[
            ("\u{0629}\u{0629}", "\u{FE93}\u{FE93}"),
            // Meem, Teh Marbuta
            ("\u{0645}\u{0629}", "\u{FEE3}\u{FE94}"),
        ]);
    }

    #[test]
    fn hamza() {
        // Sheen, Yeh, Hamza
        check(&[("\u{0634}\u{064A}\u{0621}", "\u{FEB7}\u{FEF2}\u{FE80}")]);
    }

    #[test]
    fn persian_words() {
        check(&[
            // salam
            (
                "\u{0633}\u{0644}\u{0627}\u{0645}",
                "\u{FEB3}\u{FEFC}\u{FEE1}",
            ),
            // ketab
            (
                "\u{06A9}\u{062A}\u{0627}\u{0628}",
                "\u{FEDB}\u{FE98}\u{FE8E}\u{FE8F}",
            ),
            // two words separated by a space
            (
                "\u{0646}\u{0627}\u{0645} \u{0645}\u{0646}",
                "\u{FEE7}\u{FE8E}\u{FEE1} \u{FEE3}\u{FEE6}",
            ),
        ]);
    }

    #[test]
    fn output_is_never_longer() {
        let inputs = [
            "\u{0644}\u{0627}\u{0644}\u{0623}\u{0644}\u{0625}\u{0644}\u{0622}",
            "abc \u{0628}\u{062A}\u{062B} \u{06F1}\u{06F2}",
            "\u{0629}\u{0621}\u{0644}",
        ];
        for input in inputs.iter() {
            assert!(shape_text(input).chars().count() <= input.chars().count());
        }
        assert_eq!(
            shape_text("\u{0644}\u{0627}\u{0644}\u{0623}\u{0644}\u{0625}\u{0644}\u{0622}")
                .chars()
                .count(),
            4
        );
    }
}
