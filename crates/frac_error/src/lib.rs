#![deny(unused_imports)]
//! Errors and warnings of the `frac` calculator.
//!
//! Every error type implements [`FracError`], which knows how to render itself
//! with the source it points to. The driver converts them into [`UniversalError`]s
//! and doesn't have to know where they came from.

use colored::Colorize;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

mod ctxt;
mod dist;
mod fmt;
mod note;
mod span;
mod universal;

#[cfg(test)]
mod tests;

pub use ctxt::ErrorContext;
pub use dist::substr_edit_distance;
pub use fmt::{RenderError, trim_long_string};
pub use note::ErrorNote;
pub use span::{ColorScheme, SpanRange, render_spans};
pub use universal::UniversalError;

/// The part of the calculator that reports an error.
/// It's the first digit of an error code: `E1xx` is a command line error.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Origin {
    CommandLine,
    Expression,
}

impl Origin {
    fn digit(self) -> u32 {
        match self {
            Origin::CommandLine => 1,
            Origin::Expression => 2,
        }
    }
}

pub trait FracError {
    type Kind: FracErrorKind;

    fn kind(&self) -> &Self::Kind;

    /// They point into the `source` given to [`FracError::render_error`].
    fn spans(&self) -> &[SpanRange];

    fn note(&self) -> &ErrorNote;

    fn origin(&self) -> Origin;

    fn is_warning(&self) -> bool {
        false
    }

    fn first_span(&self) -> Option<SpanRange> {
        self.spans().first().copied()
    }

    /// `E201`, `W101`, ...
    fn code(&self) -> String {
        format!(
            "{}{}{:02}",
            if self.is_warning() { 'W' } else { 'E' },
            self.origin().digit(),
            self.kind().index(),
        )
    }

    fn render_error(&self, source: &str, with_title: bool) -> String {
        let note = self.note();
        let kind = self.kind();
        let mut lines = vec![];

        if with_title {
            lines.push(render_error_title(note.context(), self.is_warning()));
        }

        lines.push(format!("{}: {}", self.code(), kind.msg()));

        let help = kind.help();

        if !help.is_empty() {
            lines.push(format!("Help: {help}"));
        }

        if let Some(hint) = note.hint() {
            lines.push(format!("Note: {hint}"));
        }

        if note.shows_source() && !self.spans().is_empty() {
            let color = if self.is_warning() { ColorScheme::warning() } else { ColorScheme::error() };
            lines.push(render_spans(source, self.spans(), color));
        }

        lines.join("\n")
    }

    /// `source` is the string that the spans point to. The same error in
    /// a different source is not a duplicate.
    fn to_universal(&self, source: &str) -> UniversalError {
        let mut hasher = DefaultHasher::new();
        (source, self.first_span(), self.is_warning(), self.origin(), self.kind().index()).hash(&mut hasher);

        UniversalError {
            rendered: self.render_error(source, true),
            is_warning: self.is_warning(),
            first_span: self.first_span(),
            hash: hasher.finish(),
        }
    }
}

pub trait FracErrorKind {
    /// lowercase, without a trailing dot
    fn msg(&self) -> String;

    /// full sentences; an empty string means no help
    fn help(&self) -> String;

    /// unique within an `Origin`, below 100
    fn index(&self) -> u32;
}

/// `concat_commas(&["a", "b", "c"], "or", "`", "`")` is "`a`, `b` or `c`".
pub fn concat_commas(list: &[String], term: &str, prefix: &str, suffix: &str) -> String {
    let quoted = list.iter().map(|s| format!("{prefix}{s}{suffix}")).collect::<Vec<String>>();

    match quoted.split_last() {
        None => String::new(),
        Some((last, [])) => last.to_string(),
        Some((last, init)) => format!("{} {term} {last}", init.join(", ")),
    }
}

fn render_error_title(context: ErrorContext, is_warning: bool) -> String {
    if is_warning {
        "[Warning]".yellow().to_string()
    }

    else {
        format!("[Error while {context}]").red().to_string()
    }
}
