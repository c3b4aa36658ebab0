#![deny(unused_imports)]
//! Command Line Argument Parser
//!
//! It emits errors in the same format as the expression errors, with spans
//! pointing into the command line. That's why it doesn't use [`clap`][clap].
//!
//! [clap]: https://crates.io/crates/clap

use frac_config::{
    CalcOption,
    MAX_DECIMAL_DIGITS,
    MAX_VERBOSITY,
    MIN_VERBOSITY,
    SpecialOutput,
};
use frac_error::SpanRange;
use num_bigint::BigInt;
use std::collections::HashMap;

mod arg;
mod error;
mod flag;
mod lex;
mod parse;
mod session;
mod warn;

#[cfg(test)]
mod tests;

pub use arg::{Arg, ArgKind};
pub use error::{ClapError, ClapErrorKind};
pub use flag::{Flag, FLAGS};
use lex::into_source;
use parse::{FlagWithArg, parse_cli};
pub use session::ClapSession;
pub use warn::{ClapWarning, ClapWarningKind};

pub fn parse_cli_args() -> ClapSession {
    // first argument is the path to the binary
    let args = std::env::args().skip(1).collect::<Vec<String>>();

    parse_args(&args)
}

pub fn parse_args(args: &[String]) -> ClapSession {
    let (command_line, tokens) = into_source(args);

    if tokens.is_empty() {
        return ClapSession::with_errors(vec![ClapError::no_arguments()], command_line);
    }

    let parsed_flags = match parse_cli(&tokens) {
        Ok(parsed_flags) => parsed_flags,
        Err(e) => {
            return ClapSession::with_errors(e, command_line);
        },
    };

    // it helps generating errors and warnings
    let mut previous_spans = HashMap::new();

    let mut errors = vec![];
    let mut warnings = vec![];
    let mut result = CalcOption::default();

    for FlagWithArg {
        flag,
        flag_span,
        arg,
        arg_span,
    } in parsed_flags.into_iter() {
        let flag_span = flag_span.unwrap_or_else(|| arg_span.unwrap_or(SpanRange::at(0)));

        if let Some(flag) = &flag {
            if let Some(previous_span) = previous_spans.get(flag) {
                if !flag.can_repeat() {
                    errors.push(ClapError::duplicate_flag(*flag, *previous_span, flag_span));
                    continue;
                }
            }

            else {
                previous_spans.insert(*flag, flag_span);
            }
        }

        // `parse_cli` guarantees that args have correct types
        match (flag, arg) {
            (Some(Flag::Verbose), Arg::Integer(verbosity)) => {
                if verbosity < BigInt::from(MIN_VERBOSITY) || verbosity > BigInt::from(MAX_VERBOSITY) {
                    errors.push(ClapError::integer_out_of_range(
                        BigInt::from(MIN_VERBOSITY),
                        BigInt::from(MAX_VERBOSITY),
                        verbosity,
                        arg_span.unwrap_or(flag_span),
                    ));
                }

                else {
                    result.verbosity = u8::try_from(&verbosity).unwrap_or(MAX_VERBOSITY);
                }
            },
            (Some(Flag::Decimal), Arg::Integer(digits)) => {
                let arg_span = arg_span.unwrap_or(flag_span);

                if digits < BigInt::from(0) || digits > BigInt::from(MAX_DECIMAL_DIGITS) {
                    errors.push(ClapError::integer_out_of_range(
                        BigInt::from(0),
                        BigInt::from(MAX_DECIMAL_DIGITS),
                        digits,
                        arg_span,
                    ));
                }

                else {
                    let digits = u32::try_from(&digits).unwrap_or(MAX_DECIMAL_DIGITS);

                    if digits == 0 {
                        warnings.push(ClapWarning::zero_decimal_digits(arg_span));
                    }

                    result.decimal_digits = Some(digits);
                }
            },
            (Some(Flag::Expr), Arg::Expression(expression))
            | (None, Arg::Expression(expression)) => {
                if expression.trim().is_empty() {
                    warnings.push(ClapWarning::empty_expression(arg_span.unwrap_or(flag_span)));
                }

                else {
                    result.expressions.push(expression);
                }
            },
            (Some(Flag::Help), _) => {
                result.do_not_calc_and_do_this = Some(SpecialOutput::HelpMessage);
            },
            (Some(Flag::Version), _) => {
                result.do_not_calc_and_do_this = Some(SpecialOutput::VersionInfo);
            },
            (Some(Flag::Category), _) => {
                result.show_category = true;
            },
            (Some(Flag::ShowWarnings), _) => {
                result.show_warnings = true;
            },
            (Some(Flag::HideWarnings), _) => {
                result.show_warnings = false;
            },
            (flag, arg) => unreachable!("{flag:?} {arg:?}"),
        }
    }

    for error in check_incompatible_flags(&previous_spans) {
        errors.push(error);
    }

    if result.do_not_calc_and_do_this.is_none() && result.expressions.is_empty() && errors.is_empty() {
        errors.push(ClapError::no_input_expression());
    }

    ClapSession {
        errors,
        warnings,
        result,
        command_line,
    }
}

fn check_incompatible_flags(flags: &HashMap<Flag, SpanRange>) -> Vec<ClapError> {
    let mut result = vec![];

    for special in [Flag::Help, Flag::Version] {
        if let Some(special_span) = flags.get(&special) {
            // the first one in the command line, so that the error message is deterministic
            if let Some((other, other_span)) = flags.iter().filter(
                |(flag, _)| **flag != special
            ).min_by_key(
                |(_, span)| **span
            ) {
                result.push(ClapError::incompatible_flags((special, *special_span), (*other, *other_span)));
            }

            // `--help --version` is reported only once
            break;
        }
    }

    if let (Some(show_span), Some(hide_span)) = (flags.get(&Flag::ShowWarnings), flags.get(&Flag::HideWarnings)) {
        result.push(ClapError::incompatible_flags(
            (Flag::ShowWarnings, *show_span),
            (Flag::HideWarnings, *hide_span),
        ));
    }

    result
}
