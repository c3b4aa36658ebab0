use crate::*;

struct TypoError {
    spans: Vec<SpanRange>,
    note: ErrorNote,
}

struct Typo;

impl FracError for TypoError {
    type Kind = Typo;

    fn kind(&self) -> &Typo {
        &Typo
    }

    fn spans(&self) -> &[SpanRange] {
        &self.spans
    }

    fn note(&self) -> &ErrorNote {
        &self.note
    }

    fn origin(&self) -> Origin {
        Origin::Expression
    }
}

impl FracErrorKind for Typo {
    fn msg(&self) -> String {
        String::from("there's a typo")
    }

    fn help(&self) -> String {
        String::new()
    }

    fn index(&self) -> u32 {
        7
    }
}

fn typo(start: usize, end: usize) -> TypoError {
    TypoError {
        spans: vec![SpanRange::new(start, end)],
        note: ErrorNote::new(ErrorContext::ParsingExpression),
    }
}

#[test]
fn render_spans_test() {
    // (source, span, underline)
    let samples = vec![
        ("1 + foo(2)", SpanRange::new(4, 7), "    ^^^"),
        ("1 +", SpanRange::new(3, 3), "   ^"),
        ("(1", SpanRange::at(0), "^"),
    ];

    for (source, span, underline) in samples.into_iter() {
        let rendered = render_spans(source, &[span], ColorScheme::none());
        let lines = rendered.lines().collect::<Vec<&str>>();

        assert_eq!(lines.len(), 2, "{rendered}");
        assert_eq!(lines[0], format!("       1 │ {source}"));
        assert_eq!(lines[1], format!("         │ {underline}"));
    }
}

#[test]
fn render_multi_line_test() {
    let rendered = render_spans("1\n2 + x\n3", &[SpanRange::at(6)], ColorScheme::none());
    let lines = rendered.lines().collect::<Vec<&str>>();

    assert_eq!(lines.len(), 3, "{rendered}");
    assert!(lines[0].ends_with("..."));
    assert_eq!(lines[1], "       2 │ 2 + x");
    assert_eq!(lines[2], "         │     ^");
}

#[test]
fn render_error_test() {
    let mut error = typo(4, 8);
    error.note = error.note.with_hint(String::from("Do you mean `floor`?"));

    assert_eq!(error.code(), "E207");

    let rendered = error.render_error("1 + flor(2)", false);

    assert!(rendered.starts_with("E207: there's a typo\nNote: Do you mean `floor`?\n"), "{rendered}");
    assert!(rendered.contains("1 + flor(2)"));

    error.note = error.note.without_source();
    assert_eq!(error.render_error("1 + flor(2)", false), "E207: there's a typo\nNote: Do you mean `floor`?");

    let with_title = error.render_error("1 + flor(2)", true);
    assert!(with_title.contains("[Error while parsing an expression]"), "{with_title}");
}

#[test]
fn universal_error_hash_test() {
    let e1 = typo(0, 1).to_universal("x + 1");
    let e2 = typo(0, 1).to_universal("x + 1");
    let e3 = typo(0, 1).to_universal("y + 1");
    let e4 = typo(1, 2).to_universal("x + 1");

    assert_eq!(e1.hash(), e2.hash());
    assert_ne!(e1.hash(), e3.hash());
    assert_ne!(e1.hash(), e4.hash());
    assert!(!e1.is_warning());
    assert_eq!(e1.first_span(), Some(SpanRange::new(0, 1)));
}

#[test]
fn edit_distance_test() {
    let samples = vec![
        ("--verbose", "--verbose", 0),
        ("--verbos", "--verbose", 0),
        ("--verbsoe", "--verbose", 1),
        ("--VERBOSE", "--verbose", 0),
        ("flor", "floor", 1),
        ("pwo", "pow", 1),
        ("--xyz", "--help", 3),
    ];

    for (sub, s, dist) in samples.into_iter() {
        assert_eq!(substr_edit_distance(sub.as_bytes(), s.as_bytes()), dist, "{sub} vs {s}");
    }
}

#[test]
fn concat_commas_test() {
    let list = vec![String::from("a"), String::from("b"), String::from("c")];

    assert_eq!(concat_commas(&list[..1], "or", "`", "`"), "`a`");
    assert_eq!(concat_commas(&list[..2], "or", "`", "`"), "`a` or `b`");
    assert_eq!(concat_commas(&list, "and", "<", ">"), "<a>, <b> and <c>");
    assert_eq!(concat_commas(&[], "or", "`", "`"), "");
}

#[test]
fn trim_long_string_test() {
    assert_eq!(trim_long_string(String::from("short"), 4, 4), "short");
    assert_eq!(trim_long_string(String::from("a very very long string"), 4, 4), "a ve...ring");
}
