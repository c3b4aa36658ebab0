use std::fmt;

/// What the calculator was doing when it found an error. It's shown in the title.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorContext {
    ParsingCommandLine,
    LexingExpression,
    ParsingExpression,
    EvaluatingExpression,
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let s = match self {
            ErrorContext::ParsingCommandLine => "parsing command line arguments",
            ErrorContext::LexingExpression => "lexing an expression",
            ErrorContext::ParsingExpression => "parsing an expression",
            ErrorContext::EvaluatingExpression => "evaluating an expression",
        };

        write!(fmt, "{s}")
    }
}
