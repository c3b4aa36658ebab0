use crate::*;
use frac_clap::parse_args;
use frac_config::CalcOption;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn run_expressions(expressions: &[&str]) -> CalcOutput {
    run(
        CalcOption::with_expressions(expressions.iter().map(|e| e.to_string()).collect()),
        None,
    )
}

#[test]
fn run_test() {
    let output = run_expressions(&["1/3 + 1/6", "1/0", " -1/0 ", "0/0", "inf - inf", "0.75"]);

    assert!(!output.has_error());
    assert_eq!(
        output.stdout(),
        &[
            "1/3 + 1/6 = 1/2",
            "1/0 = inf",
            "-1/0 = -inf",
            "0/0 = NaN",
            "inf - inf = NaN",
            "0.75 = 3/4",
        ],
    );
}

#[test]
fn category_and_decimal_test() {
    let option = CalcOption {
        show_category: true,
        decimal_digits: Some(4),
        ..CalcOption::with_expressions(vec![
            String::from("1/3"),
            String::from("-1/3"),
            String::from("recip(0)"),
            String::from("-inf"),
            String::from("nan"),
        ])
    };

    let output = run(option, None);

    assert_eq!(
        output.stdout(),
        &[
            "1/3 = 1/3  [finite]  ≈ 0.3333",
            "-1/3 = -1/3  [finite]  ≈ -0.3333",
            "recip(0) = inf  [+inf]",
            "-inf = -inf  [-inf]",
            "nan = NaN  [NaN]",
        ],
    );
}

#[test]
fn error_test() {
    let output = run_expressions(&["1 +", "2", "1 +", "flor(1)"]);

    assert!(output.has_error());
    assert_eq!(output.stdout(), &["2 = 2"]);

    // the same error in the same expression is reported once
    assert_eq!(output.errors().len(), 2);

    let (stdout, stderr) = output.concat_results();

    assert_eq!(stdout, "2 = 2");
    assert!(stderr.contains("expected an expression, got nothing"), "{stderr}");
    assert!(stderr.contains("Do you mean `floor`?"), "{stderr}");
}

#[test]
fn special_output_test() {
    let output = run(CalcOption::help_message(), None);
    assert_eq!(output.stdout(), &[HELP_MESSAGE]);

    let output = run(CalcOption::version_info(), None);
    assert_eq!(output.stdout(), &[version_info()]);
}

#[test]
fn clap_to_output_test() {
    let session = parse_args(&[
        String::from("--decimal"),
        String::from("0"),
        String::from("7/2"),
    ]);
    let mut output = CalcOutput::new();

    for warning in session.warnings.iter() {
        output.push_warning(warning.to_universal(&session.command_line));
    }

    let output = run(session.result, Some(output));

    assert_eq!(output.stdout(), &["7/2 = 7/2  ≈ 3"]);
    assert_eq!(output.warnings().len(), 1);
    assert!(!output.concat_results().1.is_empty());

    // `--hide-warnings`
    let mut output = output;
    output.show_warnings = false;

    assert!(output.concat_results().1.is_empty());
}

#[test]
fn failure_summary_test() {
    let output = run_expressions(&["1", "2"]);
    assert_eq!(output.failure_summary(), None);

    let output = run_expressions(&["1 +"]);
    assert_eq!(output.failure_summary().as_deref(), Some("1 of 1 expression failed"));

    let output = run_expressions(&["1", "1 +", "flor(2)"]);
    assert_eq!(output.failure_summary().as_deref(), Some("2 of 3 expressions failed"));
    assert!(output.concat_results().1.ends_with("2 of 3 expressions failed"));

    // command line errors are not failures of an expression
    let session = parse_args(&[String::from("--foo"), String::from("1")]);
    let mut output = CalcOutput::new();

    for error in session.errors.iter() {
        output.push_error(error.to_universal(&session.command_line));
    }

    assert!(output.has_error());
    assert_eq!(output.failure_summary(), None);
}

#[test]
fn verbosity_test() {
    assert_eq!(logger::verbosity_to_level(0), log::LevelFilter::Error);
    assert_eq!(logger::verbosity_to_level(1), log::LevelFilter::Warn);
    assert_eq!(logger::verbosity_to_level(2), log::LevelFilter::Trace);
}

// the only test that installs a logger
#[test]
fn init_logger_test() {
    assert!(logger::init_logger(0).is_ok());
    assert_eq!(log::max_level(), log::LevelFilter::Error);

    // there can be only one
    assert!(logger::init_logger(2).is_err());
}

// the calculator agrees with `Fraction` arithmetic
#[test]
fn random_expression_test() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..256 {
        let (a, b, c, d) = (
            rng.gen_range(-50..50i64),
            rng.gen_range(-5..50i64),
            rng.gen_range(-50..50i64),
            rng.gen_range(-5..50i64),
        );
        let op = ['+', '-', '*', '/'][rng.gen_range(0..4)];
        let expression = format!("(({a})/({b})) {op} (({c})/({d}))");

        let p = Fraction::new(BigInt::from(a), BigInt::from(b));
        let q = Fraction::new(BigInt::from(c), BigInt::from(d));
        let expected = match op {
            '+' => p + q,
            '-' => p - q,
            '*' => p * q,
            _ => p / q,
        };

        let output = run_expressions(&[&expression]);

        assert_eq!(output.stdout(), &[format!("{expression} = {expected}")]);
    }
}
