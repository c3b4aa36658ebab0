use crate::*;
use frac_error::{FracError, SpanRange};
use frac_number::Fraction;
use num_bigint::BigInt;

fn calc_big(source: &str) -> Fraction<BigInt> {
    calc::<BigInt>(source).unwrap()
}

#[test]
fn calc_test() {
    let samples = vec![
        ("1/3 + 0.5", "5/6"),
        ("0.75", "3/4"),
        ("12.50", "25/2"),
        ("1 - 2 - 3", "-4"),
        ("2 * 3 + 4", "10"),
        ("2 * (3 + 4)", "14"),
        ("-2 * 3", "-6"),
        ("2 * -3", "-6"),
        ("--3", "3"),
        ("+3", "3"),
        ("6/-4", "-3/2"),
        ("1 / 2 / 3", "1/6"),
        ("99999999999999999999 + 1", "100000000000000000000"),

        ("1/0", "inf"),
        ("-1/0", "-inf"),
        ("0/0", "NaN"),
        ("inf - inf", "NaN"),
        ("inf * 0", "NaN"),
        ("inf + 3", "inf"),
        ("-inf * -inf", "inf"),
        ("1/inf", "0"),
        ("nan * 0", "NaN"),
        ("NaN", "NaN"),

        ("recip(0)", "inf"),
        ("recip(-inf)", "0"),
        ("recip(recip(-inf))", "inf"),
        ("abs(-3/4)", "3/4"),
        ("floor(-7/2)", "-4"),
        ("ceil(-7/2)", "-3"),
        ("trunc(-7/2)", "-3"),
        ("round(5/2)", "3"),
        ("round(-5/2)", "-3"),
        ("pow(2/3, 3)", "8/27"),
        ("pow(2, -3)", "1/8"),
        ("pow(0, -1)", "inf"),
        ("pow(-inf, 3)", "-inf"),
        ("pow(2, 100)", "1267650600228229401496703205376"),
        ("pow(2, 1 - 3)", "1/4"),
        ("pow(-1, 65536)", "1"),
        ("pow(-1, -65535)", "-1"),
    ];

    for (source, expected) in samples.into_iter() {
        assert_eq!(calc_big(source).to_string(), expected, "{source}");
    }
}

#[test]
fn fixed_width_domain_test() {
    assert_eq!(calc::<i64>("1/3 + 1/6").unwrap(), Fraction::new(1, 2));
    assert_eq!(calc::<i32>("recip(0) * -1").unwrap(), Fraction::neg_inf());

    let errors = calc::<i64>("99999999999999999999").unwrap_err();

    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].kind(), &EvalErrorKind::IntegerOverflow(String::from("99999999999999999999")));
}

#[test]
fn precedence_test() {
    let samples = vec![
        ("1 + 2 * 3", "(1 + (2 * 3))"),
        ("1 * 2 + 3", "((1 * 2) + 3)"),
        ("1 - 2 - 3", "((1 - 2) - 3)"),
        ("1 / 2 / 3", "((1 / 2) / 3)"),
        ("-2 * 3", "((-2) * 3)"),
        ("(1 + 2) * 3", "((1 + 2) * 3)"),
        ("pow(2, 1 - 3)", "pow(2, (1 - 3))"),
        ("-inf", "(-inf)"),
    ];

    for (source, tree) in samples.into_iter() {
        assert_eq!(parse_expression(source).unwrap().to_string(), tree, "{source}");
    }
}

#[test]
fn lex_test() {
    let tokens = lex("12.5*x_1 ( ,").unwrap();

    assert_eq!(
        tokens,
        vec![
            Token { kind: TokenKind::Number(String::from("12.5")), span: SpanRange::new(0, 4) },
            Token { kind: TokenKind::Punct(Punct::Mul), span: SpanRange::new(4, 5) },
            Token { kind: TokenKind::Identifier(String::from("x_1")), span: SpanRange::new(5, 8) },
            Token { kind: TokenKind::Punct(Punct::OpenParen), span: SpanRange::new(9, 10) },
            Token { kind: TokenKind::Punct(Punct::Comma), span: SpanRange::new(11, 12) },
        ],
    );

    let errors = lex("1 $ 2 #").unwrap_err();

    assert_eq!(
        errors.iter().map(|e| e.kind().clone()).collect::<Vec<_>>(),
        vec![EvalErrorKind::UnexpectedChar('$'), EvalErrorKind::UnexpectedChar('#')],
    );
}

#[test]
fn eval_error_test() {
    let samples = vec![
        ("1 + $", EvalErrorKind::UnexpectedChar('$'), SpanRange::new(4, 5)),
        ("1.", EvalErrorKind::UnexpectedChar('.'), SpanRange::new(1, 2)),
        ("1 +", EvalErrorKind::UnexpectedEof(ExpectedToken::AnyExpression), SpanRange::new(3, 3)),
        ("", EvalErrorKind::UnexpectedEof(ExpectedToken::AnyExpression), SpanRange::new(0, 0)),
        ("(1 + 2", EvalErrorKind::UnclosedParenthesis, SpanRange::new(0, 1)),
        ("abs(1", EvalErrorKind::UnclosedParenthesis, SpanRange::new(3, 4)),
        (
            "1 2",
            EvalErrorKind::UnexpectedToken { got: String::from("2"), expected: ExpectedToken::Operator },
            SpanRange::new(2, 3),
        ),
        (
            "(1 2)",
            EvalErrorKind::UnexpectedToken { got: String::from("2"), expected: ExpectedToken::CloseParen },
            SpanRange::new(3, 4),
        ),
        (
            "1 + )",
            EvalErrorKind::UnexpectedToken { got: String::from(")"), expected: ExpectedToken::AnyExpression },
            SpanRange::new(4, 5),
        ),
        (
            "abs(1 2)",
            EvalErrorKind::UnexpectedToken { got: String::from("2"), expected: ExpectedToken::CommaOrCloseParen },
            SpanRange::new(6, 7),
        ),
        ("flor(2)", EvalErrorKind::UnknownFunction(String::from("flor")), SpanRange::new(0, 4)),
        ("x + 1", EvalErrorKind::UnknownName(String::from("x")), SpanRange::new(0, 1)),
        (
            "pow(2)",
            EvalErrorKind::WrongNumberOfArguments { func: Func::Pow, expected: 2, given: 1 },
            SpanRange::new(0, 6),
        ),
        (
            "abs(1, 2)",
            EvalErrorKind::WrongNumberOfArguments { func: Func::Abs, expected: 1, given: 2 },
            SpanRange::new(0, 9),
        ),
        (
            "abs()",
            EvalErrorKind::WrongNumberOfArguments { func: Func::Abs, expected: 1, given: 0 },
            SpanRange::new(0, 5),
        ),
        ("pow(2, 1/2)", EvalErrorKind::InvalidExponent(String::from("1/2")), SpanRange::new(7, 10)),
        ("pow(2, inf)", EvalErrorKind::InvalidExponent(String::from("inf")), SpanRange::new(7, 10)),
        ("pow(2, 3000000000)", EvalErrorKind::InvalidExponent(String::from("3000000000")), SpanRange::new(7, 17)),
        ("pow(2, 65537)", EvalErrorKind::InvalidExponent(String::from("65537")), SpanRange::new(7, 12)),
        ("pow(2, -65537)", EvalErrorKind::InvalidExponent(String::from("-65537")), SpanRange::new(7, 13)),
    ];

    for (source, kind, span) in samples.into_iter() {
        let errors = calc::<BigInt>(source).unwrap_err();

        assert_eq!(errors.len(), 1, "{source}");
        assert_eq!(errors[0].kind(), &kind, "{source}");
        assert_eq!(errors[0].first_span(), Some(span), "{source}");
    }
}

#[test]
fn suggestion_test() {
    let errors = calc::<BigInt>("flor(2)").unwrap_err();
    let rendered = errors[0].render_error("flor(2)", false);

    assert!(rendered.contains("Do you mean `floor`?"), "{rendered}");
    assert!(rendered.contains("Available functions are"), "{rendered}");

    let errors = calc::<BigInt>("x + 1").unwrap_err();
    let rendered = errors[0].render_error("x + 1", false);

    assert!(!rendered.contains("Do you mean"), "{rendered}");
}

#[test]
fn depth_limit_test() {
    let deep_parens = format!("{}1", "(".repeat(100_000));
    let deep_negs = format!("1+{}1", "-".repeat(60_000));
    let long_sum = format!("1{}", "+1".repeat(10_000));

    let samples = vec![
        (deep_parens.as_str(), SpanRange::new(MAX_EXPR_DEPTH, MAX_EXPR_DEPTH + 1)),
        (deep_negs.as_str(), SpanRange::new(MAX_EXPR_DEPTH + 1, MAX_EXPR_DEPTH + 2)),

        // the node that has `MAX_EXPR_DEPTH + 1` levels
        (long_sum.as_str(), SpanRange::new(0, (MAX_EXPR_DEPTH + 1) * 2 - 1)),
    ];

    for (source, span) in samples.into_iter() {
        let errors = calc::<BigInt>(source).unwrap_err();

        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].kind(), &EvalErrorKind::TooDeep);
        assert_eq!(errors[0].first_span(), Some(span));
    }

    let nested = format!("{}1{}", "(".repeat(200), ")".repeat(200));
    let sum = format!("1{}", "+1".repeat(199));
    let negs = format!("{}1", "-".repeat(200));

    assert_eq!(calc_big(&nested).to_string(), "1");
    assert_eq!(calc_big(&sum).to_string(), "200");
    assert_eq!(calc_big(&negs).to_string(), "1");
}
