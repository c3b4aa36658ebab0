use crate::ErrorContext;

/// Everything an error carries besides its kind and spans.
#[derive(Clone, Debug)]
pub struct ErrorNote {
    context: ErrorContext,

    // "Do you mean `floor`?"
    hint: Option<String>,

    // errors about a missing input have nothing to point at
    hide_source: bool,
}

impl ErrorNote {
    pub fn new(context: ErrorContext) -> Self {
        ErrorNote {
            context,
            hint: None,
            hide_source: false,
        }
    }

    pub fn with_hint(mut self, hint: String) -> Self {
        self.hint = Some(hint);
        self
    }

    pub fn without_source(mut self) -> Self {
        self.hide_source = true;
        self
    }

    pub fn context(&self) -> ErrorContext {
        self.context
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    pub fn shows_source(&self) -> bool {
        !self.hide_source
    }
}
