use std::fmt;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseFractionError {
    Empty,

    // the part that's not an integer
    InvalidInteger(String),
}

impl fmt::Display for ParseFractionError {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        match self {
            ParseFractionError::Empty => write!(fmt, "cannot parse a fraction from an empty string"),
            ParseFractionError::InvalidInteger(s) => write!(fmt, "invalid integer: `{s}`"),
        }
    }
}

impl std::error::Error for ParseFractionError {}
