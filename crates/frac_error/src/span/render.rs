use crate::SpanRange;
use colored::*;

#[derive(Clone, Copy)]
enum Color {
    None,
    Red,
    Blue,
    Yellow,
}

#[derive(Clone, Copy)]
pub struct ColorScheme {
    line_no: Color,
    underline: Color,
}

impl ColorScheme {
    pub fn none() -> Self {
        ColorScheme {
            line_no: Color::None,
            underline: Color::None,
        }
    }

    pub fn error() -> Self {
        ColorScheme {
            line_no: Color::Blue,
            underline: Color::Red,
        }
    }

    pub fn warning() -> Self {
        ColorScheme {
            line_no: Color::Blue,
            underline: Color::Yellow,
        }
    }

    fn paint(color: Color, s: &str) -> String {
        match color {
            Color::None => s.to_string(),
            Color::Red => format!("{}", s.red()),
            Color::Blue => format!("{}", s.blue()),
            Color::Yellow => format!("{}", s.yellow()),
        }
    }

    pub(crate) fn bar(&self) -> String {
        ColorScheme::paint(self.line_no, "│")
    }

    pub(crate) fn dots(&self) -> String {
        ColorScheme::paint(self.line_no, "...")
    }

    pub(crate) fn underline(&self) -> String {
        ColorScheme::paint(self.underline, "^")
    }

    pub(crate) fn render_num(&self, n: usize) -> String {
        let n = format!("{n}");
        let pre = " ".repeat(8usize.saturating_sub(n.len()));

        // do not color whitespaces!
        format!("{pre}{}", ColorScheme::paint(self.line_no, &n))
    }
}

const MAX_LINE_LEN: usize = 80;

// render spans for error messages
// (line numbers and underlines)
//
// Only the lines that have a highlighted character are rendered. A span that
// starts at the end of a line (an unexpected end of input) underlines the
// position right after the last character.
pub fn render_spans(source: &str, spans: &[SpanRange], color: ColorScheme) -> String {
    let bar = color.bar();
    let underline = color.underline();
    let mut result = vec![];
    let mut line_start = 0;
    let mut skipped_lines = false;

    for (line_no, line) in source.split('\n').enumerate() {
        let line_end = line_start + line.len();
        let mut rendered_line = String::with_capacity(line.len());
        let mut mask = String::with_capacity(line.len());
        let mut has_highlighted_char = false;
        let mut need_dots = false;

        for (col, (i, c)) in line.char_indices().enumerate() {
            if col == MAX_LINE_LEN - 3 {
                need_dots = true;
                break;
            }

            let index = line_start + i;

            if is_highlighted(index, spans) {
                mask.push_str(&underline);
                has_highlighted_char = true;
            }

            else {
                mask.push(' ');
            }

            rendered_line.push(c);
        }

        if !need_dots && is_highlighted(line_end, spans) {
            mask.push_str(&underline);
            has_highlighted_char = true;
        }

        if has_highlighted_char {
            if skipped_lines && result.is_empty() {
                result.push(format!("         {bar} {}", color.dots()));
            }

            result.push(format!(
                "{} {bar} {rendered_line}{}",
                color.render_num(line_no + 1),  // human index starts with 1
                if need_dots { color.dots() } else { String::new() },
            ));
            result.push(format!("         {bar} {}", mask.trim_end()));
        }

        else {
            skipped_lines = true;
        }

        // `\n`
        line_start = line_end + 1;
    }

    result.join("\n")
}

fn is_highlighted(index: usize, spans: &[SpanRange]) -> bool {
    spans.iter().any(
        |span| span.start() <= index && index < span.end().max(span.start() + 1)
    )
}
