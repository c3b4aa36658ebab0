use crate::arg::ArgKind;
use crate::flag::{Flag, FLAGS};
use frac_error::{
    ErrorContext,
    ErrorNote,
    FracError,
    FracErrorKind,
    Origin,
    RenderError,
    SpanRange,
    substr_edit_distance,
    trim_long_string,
};
use num_bigint::BigInt;
use smallvec::{smallvec, SmallVec};

#[derive(Debug)]
pub struct ClapError {
    kind: ClapErrorKind,
    spans: SmallVec<[SpanRange; 2]>,
    note: ErrorNote,
}

impl ClapError {
    fn new(kind: ClapErrorKind, spans: SmallVec<[SpanRange; 2]>) -> Self {
        ClapError {
            kind,
            spans,
            note: ErrorNote::new(ErrorContext::ParsingCommandLine),
        }
    }

    // nothing on the command line to point at
    fn without_span(kind: ClapErrorKind) -> Self {
        let mut e = ClapError::new(kind, smallvec![]);
        e.note = e.note.without_source();

        e
    }

    pub fn unknown_flag(token: &str, span: SpanRange) -> Self {
        let mut e = ClapError::new(ClapErrorKind::UnknownFlag(token.to_string()), smallvec![span]);

        if let Some(flag) = closest_flag(token) {
            e.note = e.note.with_hint(format!("Do you mean `{flag}`?"));
        }

        e
    }

    pub fn invalid_argument(kind: ArgKind, argument: &str, span: SpanRange) -> Self {
        ClapError::new(ClapErrorKind::InvalidArgument(kind, argument.to_string()), smallvec![span])
    }

    pub fn missing_argument(kind: ArgKind, flag_span: SpanRange) -> Self {
        ClapError::new(ClapErrorKind::MissingArgument(kind), smallvec![flag_span])
    }

    pub fn no_arguments() -> Self {
        ClapError::without_span(ClapErrorKind::NoArguments)
    }

    pub fn no_input_expression() -> Self {
        ClapError::without_span(ClapErrorKind::NoInputExpression)
    }

    pub fn duplicate_flag(flag: Flag, first: SpanRange, second: SpanRange) -> Self {
        ClapError::new(ClapErrorKind::DuplicateFlag(flag), smallvec![first, second])
    }

    pub fn incompatible_flags(flag1: (Flag, SpanRange), flag2: (Flag, SpanRange)) -> Self {
        ClapError::new(
            ClapErrorKind::IncompatibleFlags(flag1.0, flag2.0),
            smallvec![flag1.1, flag2.1],
        )
    }

    /// `min` and `max` are inclusive.
    pub fn integer_out_of_range(min: BigInt, max: BigInt, given: BigInt, span: SpanRange) -> Self {
        debug_assert!(given < min || max < given);

        ClapError::new(ClapErrorKind::IntegerOutOfRange { min, max, given }, smallvec![span])
    }
}

// `--verrbose` -> `--verbose`, but `--xx` is not close to anything
fn closest_flag(token: &str) -> Option<String> {
    let (name, dist) = FLAGS.iter().flat_map(
        |flag| std::iter::once(flag.long()).chain(flag.short())
    ).map(
        |name| (name, substr_edit_distance(token.as_bytes(), name))
    ).min_by_key(|(_, dist)| *dist)?;

    if dist < 2 || (token.len() > 4 && dist < 3) {
        Some(String::from_utf8_lossy(name).to_string())
    }

    else {
        None
    }
}

impl FracError for ClapError {
    type Kind = ClapErrorKind;

    fn kind(&self) -> &ClapErrorKind {
        &self.kind
    }

    fn spans(&self) -> &[SpanRange] {
        &self.spans
    }

    fn note(&self) -> &ErrorNote {
        &self.note
    }

    fn origin(&self) -> Origin {
        Origin::CommandLine
    }
}

#[derive(Debug, PartialEq)]
pub enum ClapErrorKind {
    UnknownFlag(String),
    InvalidArgument(ArgKind, String),
    MissingArgument(ArgKind),
    NoArguments,
    NoInputExpression,
    DuplicateFlag(Flag),
    IncompatibleFlags(Flag, Flag),
    IntegerOutOfRange {
        min: BigInt,
        max: BigInt,
        given: BigInt,
    },
}

impl FracErrorKind for ClapErrorKind {
    fn msg(&self) -> String {
        match self {
            ClapErrorKind::UnknownFlag(flag) => format!("unknown flag `{}`", trim_long_string(flag.to_string(), 16, 16)),
            ClapErrorKind::InvalidArgument(kind, arg) => format!(
                "expected {}, got `{}`",
                kind.render_error(),
                trim_long_string(arg.to_string(), 16, 16),
            ),
            ClapErrorKind::MissingArgument(kind) => format!("expected {} after this flag", kind.render_error()),
            ClapErrorKind::NoArguments => String::from("nothing to calculate"),
            ClapErrorKind::NoInputExpression => String::from("no input expression"),
            ClapErrorKind::DuplicateFlag(flag) => format!("`{}` is given more than once", flag.render_error()),
            ClapErrorKind::IncompatibleFlags(flag1, flag2) => format!(
                "`{}` cannot be used with `{}`",
                flag1.render_error(),
                flag2.render_error(),
            ),
            ClapErrorKind::IntegerOutOfRange { min, max, given } => format!(
                "expected an integer in range {min}..={max}, got {given}"
            ),
        }
    }

    fn help(&self) -> String {
        match self {
            ClapErrorKind::UnknownFlag(_)
            | ClapErrorKind::NoArguments => String::from("Try `frac --help` to see available options."),
            ClapErrorKind::NoInputExpression => String::from("An expression that starts with `-` has to be given with `-e`, like `frac -e \"-1/2\"`."),
            ClapErrorKind::IncompatibleFlags(Flag::ShowWarnings | Flag::HideWarnings, Flag::ShowWarnings | Flag::HideWarnings) => String::from("Use only one of them."),
            ClapErrorKind::IncompatibleFlags(Flag::Help | Flag::Version, _) => String::from("`--help` and `--version` print something and quit, without calculating anything."),
            ClapErrorKind::IncompatibleFlags(_, _)
            | ClapErrorKind::InvalidArgument(_, _)
            | ClapErrorKind::MissingArgument(_)
            | ClapErrorKind::DuplicateFlag(_)
            | ClapErrorKind::IntegerOutOfRange { .. } => String::new(),
        }
    }

    fn index(&self) -> u32 {
        match self {
            ClapErrorKind::UnknownFlag(_) => 0,
            ClapErrorKind::InvalidArgument(_, _) => 1,
            ClapErrorKind::MissingArgument(_) => 2,
            ClapErrorKind::NoArguments => 3,
            ClapErrorKind::NoInputExpression => 4,
            ClapErrorKind::DuplicateFlag(_) => 5,
            ClapErrorKind::IncompatibleFlags(_, _) => 6,
            ClapErrorKind::IntegerOutOfRange { .. } => 7,
        }
    }
}
