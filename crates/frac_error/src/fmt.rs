/// Flags, argument kinds and the like, as they appear in error messages.
pub trait RenderError {
    fn render_error(&self) -> String;
}

/// `trim_long_string("a very very long string".to_string(), 4, 4)` is `"a ve...ring"`.
pub fn trim_long_string(s: String, head: usize, tail: usize) -> String {
    let chars = s.chars().collect::<Vec<char>>();

    if chars.len() <= head + tail + 3 {
        s
    }

    else {
        format!(
            "{}...{}",
            chars[..head].iter().collect::<String>(),
            chars[(chars.len() - tail)..].iter().collect::<String>(),
        )
    }
}
