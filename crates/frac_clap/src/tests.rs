use crate::*;
use frac_config::SpecialOutput;
use frac_error::{FracError, SpanRange};
use num_bigint::BigInt;

fn args(args: &[&str]) -> Vec<String> {
    args.iter().map(|arg| arg.to_string()).collect()
}

#[test]
fn valid_args_test() {
    let session = parse_args(&args(&["1/2", "-e", "-3/4", "--verbose", "2", "--category", "--decimal", "5", "-inf"]));

    assert!(!session.has_error());
    assert!(session.warnings.is_empty());
    assert_eq!(session.result.expressions, vec!["1/2", "-3/4", "-inf"]);
    assert_eq!(session.result.verbosity, 2);
    assert!(session.result.show_category);
    assert_eq!(session.result.decimal_digits, Some(5));
    assert!(session.result.show_warnings);
    assert_eq!(session.result.do_not_calc_and_do_this, None);

    let session = parse_args(&args(&["-e", "1", "--expr", "2", "--hide-warnings", "3"]));

    assert!(!session.has_error());
    assert_eq!(session.result.expressions, vec!["1", "2", "3"]);
    assert!(!session.result.show_warnings);
}

#[test]
fn special_output_test() {
    let samples = vec![
        (vec!["-h"], SpecialOutput::HelpMessage),
        (vec!["--help"], SpecialOutput::HelpMessage),
        (vec!["-v"], SpecialOutput::VersionInfo),
        (vec!["--version"], SpecialOutput::VersionInfo),
    ];

    for (given, expected) in samples.into_iter() {
        let session = parse_args(&args(&given));

        assert!(!session.has_error(), "{given:?}");
        assert_eq!(session.result.do_not_calc_and_do_this, Some(expected));
    }
}

#[test]
fn clap_error_test() {
    let samples = vec![
        (vec![], ClapErrorKind::NoArguments),
        (vec!["--category"], ClapErrorKind::NoInputExpression),
        (vec!["--verbos", "1"], ClapErrorKind::UnknownFlag(String::from("--verbos"))),
        (vec!["-x", "1"], ClapErrorKind::UnknownFlag(String::from("-x"))),
        (vec!["1", "--verbose"], ClapErrorKind::MissingArgument(ArgKind::Integer)),
        (vec!["-e"], ClapErrorKind::MissingArgument(ArgKind::Expression)),
        (vec!["--decimal", "abc", "1"], ClapErrorKind::InvalidArgument(ArgKind::Integer, String::from("abc"))),
        (vec!["--category", "--category", "1"], ClapErrorKind::DuplicateFlag(Flag::Category)),
        (vec!["--help", "--category"], ClapErrorKind::IncompatibleFlags(Flag::Help, Flag::Category)),
        (vec!["--version", "--decimal", "3"], ClapErrorKind::IncompatibleFlags(Flag::Version, Flag::Decimal)),
        (vec!["--show-warnings", "--hide-warnings", "1"], ClapErrorKind::IncompatibleFlags(Flag::ShowWarnings, Flag::HideWarnings)),
        (
            vec!["--verbose", "3", "1"],
            ClapErrorKind::IntegerOutOfRange {
                min: BigInt::from(0),
                max: BigInt::from(2),
                given: BigInt::from(3),
            },
        ),
        (
            vec!["--decimal", "-1", "1"],
            ClapErrorKind::IntegerOutOfRange {
                min: BigInt::from(0),
                max: BigInt::from(64),
                given: BigInt::from(-1),
            },
        ),
    ];

    for (given, expected) in samples.into_iter() {
        let session = parse_args(&args(&given));

        assert_eq!(session.errors.len(), 1, "{given:?}");
        assert_eq!(session.errors[0].kind(), &expected, "{given:?}");
    }
}

#[test]
fn typo_suggestion_test() {
    let session = parse_args(&args(&["--verbos", "1"]));
    let rendered = session.errors[0].render_error(&session.command_line, false);

    assert!(rendered.contains("Do you mean `--verbose`?"), "{rendered}");

    let session = parse_args(&args(&["--zzzzzzzzzz", "1"]));
    let rendered = session.errors[0].render_error(&session.command_line, false);

    assert!(!rendered.contains("Do you mean"), "{rendered}");
}

#[test]
fn clap_warning_test() {
    let session = parse_args(&args(&["--decimal", "0", "1", ""]));

    assert!(!session.has_error());
    assert_eq!(session.result.expressions, vec!["1"]);
    assert_eq!(session.result.decimal_digits, Some(0));
    assert_eq!(
        session.warnings.iter().map(|w| w.kind()).collect::<Vec<_>>(),
        vec![&ClapWarningKind::ZeroDecimalDigits, &ClapWarningKind::EmptyExpression],
    );
    assert!(session.warnings.iter().all(|w| w.is_warning()));
}

#[test]
fn command_line_span_test() {
    let session = parse_args(&args(&["1 + 2", "--foo"]));

    assert_eq!(session.command_line, "\"1 + 2\" --foo");
    assert_eq!(session.errors[0].first_span(), Some(SpanRange::new(8, 13)));

    let session = parse_args(&args(&["--category", "--category", "1"]));

    assert_eq!(
        session.errors[0].spans(),
        &[SpanRange::new(0, 10), SpanRange::new(11, 21)],
    );
}

#[test]
fn error_code_test() {
    let session = parse_args(&args(&["--foo", "1"]));
    assert_eq!(session.errors[0].code(), "E100");

    let session = parse_args(&args(&["1", ""]));
    assert_eq!(session.warnings[0].code(), "W101");

    let session = parse_args(&args(&["--verbose", "5", "1"]));
    let rendered = session.errors[0].render_error(&session.command_line, false);

    assert!(rendered.starts_with("E107: expected an integer in range 0..=2, got 5"), "{rendered}");
}
