use crate::SpanRange;

/// An error or a warning, already rendered against its source.
/// The driver doesn't need to know which crate it came from.
#[derive(Clone, Debug)]
pub struct UniversalError {
    pub(crate) rendered: String,
    pub(crate) is_warning: bool,
    pub(crate) first_span: Option<SpanRange>,

    // two diagnostics with the same hash are duplicates
    pub(crate) hash: u64,
}

impl UniversalError {
    pub fn rendered(&self) -> &str {
        &self.rendered
    }

    pub fn is_warning(&self) -> bool {
        self.is_warning
    }

    pub fn first_span(&self) -> Option<SpanRange> {
        self.first_span
    }

    pub fn hash(&self) -> u64 {
        self.hash
    }
}
