use crate::arg::ArgKind;
use frac_error::RenderError;

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Flag {
    Help,
    Version,
    Verbose,
    Expr,
    Category,
    Decimal,
    ShowWarnings,
    HideWarnings,
}

pub const FLAGS: [Flag; 8] = [
    Flag::Help,
    Flag::Version,
    Flag::Verbose,
    Flag::Expr,
    Flag::Category,
    Flag::Decimal,
    Flag::ShowWarnings,
    Flag::HideWarnings,
];

impl Flag {
    /// what kind of param this flag takes
    pub fn param_type(&self) -> ArgKind {
        match self {
            Flag::Verbose
            | Flag::Decimal => ArgKind::Integer,
            Flag::Expr => ArgKind::Expression,
            Flag::Help
            | Flag::Version
            | Flag::Category
            | Flag::ShowWarnings
            | Flag::HideWarnings => ArgKind::None,
        }
    }

    pub fn short(&self) -> Option<&'static [u8]> {
        match self {
            Flag::Help => Some(b"-h"),
            Flag::Version => Some(b"-v"),
            Flag::Expr => Some(b"-e"),
            Flag::Verbose
            | Flag::Category
            | Flag::Decimal
            | Flag::ShowWarnings
            | Flag::HideWarnings => None,
        }
    }

    pub fn long(&self) -> &'static [u8] {
        match self {
            Flag::Help => b"--help",
            Flag::Version => b"--version",
            Flag::Verbose => b"--verbose",
            Flag::Expr => b"--expr",
            Flag::Category => b"--category",
            Flag::Decimal => b"--decimal",
            Flag::ShowWarnings => b"--show-warnings",
            Flag::HideWarnings => b"--hide-warnings",
        }
    }

    /// `-e` can be given multiple times, each with a different expression.
    pub fn can_repeat(&self) -> bool {
        matches!(self, Flag::Expr)
    }

    pub fn try_parse(s: &[u8]) -> Option<Self> {
        for flag in FLAGS.iter() {
            if let Some(short) = flag.short() {
                if s == short {
                    return Some(*flag);
                }
            }

            if s == flag.long() {
                return Some(*flag);
            }
        }

        None
    }
}

impl RenderError for Flag {
    fn render_error(&self) -> String {
        String::from_utf8_lossy(self.long()).to_string()
    }
}
