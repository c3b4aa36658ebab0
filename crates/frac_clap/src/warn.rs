use frac_error::{
    ErrorContext,
    ErrorNote,
    FracError,
    FracErrorKind,
    Origin,
    SpanRange,
};

/// The command line is still usable, but probably not what the user meant.
#[derive(Debug)]
pub struct ClapWarning {
    kind: ClapWarningKind,
    span: SpanRange,
    note: ErrorNote,
}

impl ClapWarning {
    fn new(kind: ClapWarningKind, span: SpanRange) -> Self {
        ClapWarning {
            kind,
            span,
            note: ErrorNote::new(ErrorContext::ParsingCommandLine),
        }
    }

    pub fn zero_decimal_digits(span: SpanRange) -> Self {
        ClapWarning::new(ClapWarningKind::ZeroDecimalDigits, span)
    }

    pub fn empty_expression(span: SpanRange) -> Self {
        ClapWarning::new(ClapWarningKind::EmptyExpression, span)
    }
}

impl FracError for ClapWarning {
    type Kind = ClapWarningKind;

    fn kind(&self) -> &ClapWarningKind {
        &self.kind
    }

    fn spans(&self) -> &[SpanRange] {
        std::slice::from_ref(&self.span)
    }

    fn note(&self) -> &ErrorNote {
        &self.note
    }

    fn origin(&self) -> Origin {
        Origin::CommandLine
    }

    fn is_warning(&self) -> bool {
        true
    }
}

#[derive(Debug, PartialEq)]
pub enum ClapWarningKind {
    ZeroDecimalDigits,
    EmptyExpression,
}

impl FracErrorKind for ClapWarningKind {
    fn msg(&self) -> String {
        match self {
            ClapWarningKind::ZeroDecimalDigits => String::from("`--decimal 0` truncates the approximation to an integer"),
            ClapWarningKind::EmptyExpression => String::from("empty expression"),
        }
    }

    fn help(&self) -> String {
        match self {
            ClapWarningKind::ZeroDecimalDigits => String::new(),
            ClapWarningKind::EmptyExpression => String::from("It's skipped."),
        }
    }

    // warnings have their own numbers: `W100`, `W101`
    fn index(&self) -> u32 {
        match self {
            ClapWarningKind::ZeroDecimalDigits => 0,
            ClapWarningKind::EmptyExpression => 1,
        }
    }
}
