use frac_error::RenderError;
use num_bigint::BigInt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ArgKind {
    None,
    Integer,
    Expression,
}

impl RenderError for ArgKind {
    fn render_error(&self) -> String {
        match self {
            ArgKind::None => "nothing",
            ArgKind::Integer => "an integer",
            ArgKind::Expression => "an expression",
        }.to_string()
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum Arg {
    None,
    Integer(BigInt),
    Expression(String),
}

impl ArgKind {
    /// `None` if `s` is not a valid argument of this kind.
    pub fn parse_arg(&self, s: &str) -> Option<Arg> {
        match self {
            ArgKind::None => Some(Arg::None),
            ArgKind::Integer => s.parse::<BigInt>().ok().map(Arg::Integer),
            ArgKind::Expression => Some(Arg::Expression(s.to_string())),
        }
    }
}
