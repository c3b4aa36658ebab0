use crate::eval::MAX_EXPONENT;
use crate::expr::{Func, FUNCS};
use crate::parse::MAX_EXPR_DEPTH;
use crate::token::TokenKind;
use frac_error::{
    ErrorContext,
    ErrorNote,
    FracError,
    FracErrorKind,
    Origin,
    SpanRange,
    concat_commas,
    substr_edit_distance,
    trim_long_string,
};
use smallvec::{smallvec, SmallVec};

#[derive(Debug)]
pub struct EvalError {
    kind: EvalErrorKind,
    spans: SmallVec<[SpanRange; 1]>,
    note: ErrorNote,
}

impl EvalError {
    pub fn unexpected_char(c: char, span: SpanRange) -> Self {
        EvalError {
            kind: EvalErrorKind::UnexpectedChar(c),
            spans: smallvec![span],
            note: ErrorNote::new(ErrorContext::LexingExpression),
        }
    }

    pub fn unexpected_token(token: &TokenKind, expected: ExpectedToken, span: SpanRange) -> Self {
        EvalError {
            kind: EvalErrorKind::UnexpectedToken {
                got: token.to_string(),
                expected,
            },
            spans: smallvec![span],
            note: ErrorNote::new(ErrorContext::ParsingExpression),
        }
    }

    /// `span` points to the end of the expression
    pub fn unexpected_eof(expected: ExpectedToken, span: SpanRange) -> Self {
        EvalError {
            kind: EvalErrorKind::UnexpectedEof(expected),
            spans: smallvec![span],
            note: ErrorNote::new(ErrorContext::ParsingExpression),
        }
    }

    pub fn unclosed_parenthesis(open_span: SpanRange) -> Self {
        EvalError {
            kind: EvalErrorKind::UnclosedParenthesis,
            spans: smallvec![open_span],
            note: ErrorNote::new(ErrorContext::ParsingExpression),
        }
    }

    pub fn unknown_function(name: &str, span: SpanRange) -> Self {
        let mut note = ErrorNote::new(ErrorContext::ParsingExpression);

        if let Some(suggestion) = closest_name(name, FUNCS.iter().map(|f| f.name())) {
            note = note.with_hint(format!("Do you mean `{suggestion}`?"));
        }

        EvalError {
            kind: EvalErrorKind::UnknownFunction(name.to_string()),
            spans: smallvec![span],
            note,
        }
    }

    pub fn unknown_name(name: &str, span: SpanRange) -> Self {
        let mut note = ErrorNote::new(ErrorContext::ParsingExpression);

        if let Some(suggestion) = closest_name(name, ["inf", "nan"].into_iter()) {
            note = note.with_hint(format!("Do you mean `{suggestion}`?"));
        }

        EvalError {
            kind: EvalErrorKind::UnknownName(name.to_string()),
            spans: smallvec![span],
            note,
        }
    }

    pub fn wrong_number_of_arguments(func: Func, given: usize, span: SpanRange) -> Self {
        EvalError {
            kind: EvalErrorKind::WrongNumberOfArguments {
                func,
                expected: func.arg_count(),
                given,
            },
            spans: smallvec![span],
            note: ErrorNote::new(ErrorContext::ParsingExpression),
        }
    }

    /// `value` is the rendered exponent
    pub fn invalid_exponent(value: String, span: SpanRange) -> Self {
        EvalError {
            kind: EvalErrorKind::InvalidExponent(value),
            spans: smallvec![span],
            note: ErrorNote::new(ErrorContext::EvaluatingExpression),
        }
    }

    pub fn too_deep(span: SpanRange) -> Self {
        EvalError {
            kind: EvalErrorKind::TooDeep,
            spans: smallvec![span],
            note: ErrorNote::new(ErrorContext::ParsingExpression),
        }
    }

    pub fn integer_overflow(literal: &str, span: SpanRange) -> Self {
        EvalError {
            kind: EvalErrorKind::IntegerOverflow(literal.to_string()),
            spans: smallvec![span],
            note: ErrorNote::new(ErrorContext::EvaluatingExpression),
        }
    }
}

// the closest one, if it's close enough
fn closest_name<'a, I: Iterator<Item = &'a str>>(name: &str, candidates: I) -> Option<&'a str> {
    let (candidate, dist) = candidates.map(
        |candidate| (candidate, substr_edit_distance(name.as_bytes(), candidate.as_bytes()))
    ).min_by_key(
        |(_, dist)| *dist
    )?;

    if (name.len() > 3 && dist < 3) || dist < 2 {
        Some(candidate)
    }

    else {
        None
    }
}

impl FracError for EvalError {
    type Kind = EvalErrorKind;

    fn kind(&self) -> &EvalErrorKind {
        &self.kind
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

#[derive(Clone, Debug, PartialEq)]
pub enum ExpectedToken {
    AnyExpression,
    Operator,
    CloseParen,
    CommaOrCloseParen,
}

impl ExpectedToken {
    fn render(&self) -> String {
        match self {
            ExpectedToken::AnyExpression => String::from("an expression"),
            ExpectedToken::Operator => String::from("an operator"),
            ExpectedToken::CloseParen => String::from("`)`"),
            ExpectedToken::CommaOrCloseParen => String::from("`,` or `)`"),
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum EvalErrorKind {
    UnexpectedChar(char),
    UnexpectedToken {
        got: String,
        expected: ExpectedToken,
    },
    UnexpectedEof(ExpectedToken),
    UnclosedParenthesis,
    UnknownFunction(String),
    UnknownName(String),
    WrongNumberOfArguments {
        func: Func,
        expected: usize,
        given: usize,
    },
    InvalidExponent(String),

    // a literal that doesn't fit in a fixed-width domain
    IntegerOverflow(String),
    TooDeep,
}

impl FracErrorKind for EvalErrorKind {
    fn msg(&self) -> String {
        match self {
            EvalErrorKind::UnexpectedChar(c) => format!("unexpected character `{}`", c.escape_default()),
            EvalErrorKind::UnexpectedToken { got, expected } => format!(
                "expected {}, got `{}`",
                expected.render(),
                trim_long_string(got.to_string(), 16, 16),
            ),
            EvalErrorKind::UnexpectedEof(expected) => format!("expected {}, got nothing", expected.render()),
            EvalErrorKind::UnclosedParenthesis => String::from("unclosed parenthesis"),
            EvalErrorKind::UnknownFunction(name) => format!("unknown function `{}`", trim_long_string(name.to_string(), 16, 16)),
            EvalErrorKind::UnknownName(name) => format!("unknown name `{}`", trim_long_string(name.to_string(), 16, 16)),
            EvalErrorKind::WrongNumberOfArguments { func, expected, given } => format!(
                "`{}` takes {expected} argument{}, but {given} {} given",
                func.name(),
                if *expected == 1 { "" } else { "s" },
                if *given == 1 { "was" } else { "were" },
            ),
            EvalErrorKind::InvalidExponent(value) => format!("invalid exponent `{value}`"),
            EvalErrorKind::IntegerOverflow(literal) => format!("`{}` is too large", trim_long_string(literal.to_string(), 16, 16)),
            EvalErrorKind::TooDeep => String::from("expression is nested too deeply"),
        }
    }

    fn help(&self) -> String {
        match self {
            EvalErrorKind::UnknownFunction(_) => format!(
                "Available functions are {}.",
                concat_commas(
                    &FUNCS.iter().map(|f| f.name().to_string()).collect::<Vec<String>>(),
                    "and",
                    "`",
                    "`",
                ),
            ),
            EvalErrorKind::InvalidExponent(_) => format!("An exponent must be an integer in range {}..={}.", -MAX_EXPONENT, MAX_EXPONENT),
            EvalErrorKind::TooDeep => format!("The depth of an expression is limited to {MAX_EXPR_DEPTH}."),
            EvalErrorKind::UnexpectedChar(_)
            | EvalErrorKind::UnexpectedToken { .. }
            | EvalErrorKind::UnexpectedEof(_)
            | EvalErrorKind::UnclosedParenthesis
            | EvalErrorKind::UnknownName(_)
            | EvalErrorKind::WrongNumberOfArguments { .. }
            | EvalErrorKind::IntegerOverflow(_) => String::new(),
        }
    }

    fn index(&self) -> u32 {
        match self {
            EvalErrorKind::UnexpectedChar(_) => 0,
            EvalErrorKind::UnexpectedToken { .. } => 1,
            EvalErrorKind::UnexpectedEof(_) => 2,
            EvalErrorKind::UnclosedParenthesis => 3,
            EvalErrorKind::UnknownFunction(_) => 4,
            EvalErrorKind::UnknownName(_) => 5,
            EvalErrorKind::WrongNumberOfArguments { .. } => 6,
            EvalErrorKind::InvalidExponent(_) => 7,
            EvalErrorKind::IntegerOverflow(_) => 8,
            EvalErrorKind::TooDeep => 9,
        }
    }
}
