use std::fmt::Write;

/// Format the code points of `text` for readable assertion failures.
pub fn codepoints(text: &str) -> String {
    let mut s = String::new();
    for (i, ch) in text.chars().enumerate() {
        if i > 0 {
            s.push(' ');
        }
        write!(s, "U+{:04X}", ch as u32).unwrap();
    }
    s
}

/// Shape each input and compare with the expected output.
pub fn check(cases: &[(&str, &str)]) {
    for &(input, expected) in cases {
        let actual = persian_shaper::shape_text(input);
        assert_eq!(
            codepoints(&actual),
            codepoints(expected),
            "shaping {}",
            codepoints(input)
        );
    }
}
