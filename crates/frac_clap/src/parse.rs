use crate::arg::{Arg, ArgKind};
use crate::error::ClapError;
use crate::flag::Flag;
use crate::lex::Token;
use frac_error::SpanRange;

pub struct FlagWithArg {
    // `None` for a bare expression
    pub flag: Option<Flag>,
    pub flag_span: Option<SpanRange>,
    pub arg: Arg,
    pub arg_span: Option<SpanRange>,
}

pub fn parse_cli(tokens: &[Token]) -> Result<Vec<FlagWithArg>, Vec<ClapError>> {
    let mut result = vec![];
    let mut errors = vec![];
    let mut tokens = tokens.iter();

    while let Some(token) = tokens.next() {
        match Flag::try_parse(token.buffer.as_bytes()) {
            Some(flag) => match flag.param_type() {
                ArgKind::None => {
                    result.push(FlagWithArg {
                        flag: Some(flag),
                        flag_span: Some(token.span),
                        arg: Arg::None,
                        arg_span: None,
                    });
                },
                kind => match tokens.next() {
                    Some(arg_token) => match kind.parse_arg(&arg_token.buffer) {
                        Some(arg) => {
                            result.push(FlagWithArg {
                                flag: Some(flag),
                                flag_span: Some(token.span),
                                arg,
                                arg_span: Some(arg_token.span),
                            });
                        },
                        None => {
                            errors.push(ClapError::invalid_argument(kind, &arg_token.buffer, arg_token.span));
                        },
                    },
                    None => {
                        errors.push(ClapError::missing_argument(kind, token.span));
                    },
                },
            },
            None if looks_like_flag(&token.buffer) => {
                errors.push(ClapError::unknown_flag(&token.buffer, token.span));
            },
            None => {
                result.push(FlagWithArg {
                    flag: None,
                    flag_span: None,
                    arg: Arg::Expression(token.buffer.to_string()),
                    arg_span: Some(token.span),
                });
            },
        }
    }

    if errors.is_empty() {
        Ok(result)
    }

    else {
        Err(errors)
    }
}

// `--foo` and `-x` are flags, but `-3/4`, `-inf` and `-(1+2)` are expressions
fn looks_like_flag(s: &str) -> bool {
    let bytes = s.as_bytes();

    match bytes {
        [b'-', b'-', ..] => true,
        [b'-', c] => c.is_ascii_alphabetic(),
        _ => false,
    }
}
