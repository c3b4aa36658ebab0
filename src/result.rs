use frac_error::UniversalError;
use log::error;
use std::collections::HashSet;

/// Everything a run of the calculator prints: result lines go to stdout,
/// errors and warnings go to stderr.
pub struct CalcOutput {
    stdout: Vec<String>,
    errors: Diagnostics,
    warnings: Diagnostics,

    // number of expressions evaluated, and how many of them failed
    evaluated: usize,
    failed: usize,

    pub show_warnings: bool,
}

impl Default for CalcOutput {
    fn default() -> Self {
        CalcOutput::new()
    }
}

impl CalcOutput {
    pub fn new() -> Self {
        CalcOutput {
            stdout: vec![],
            errors: Diagnostics::default(),
            warnings: Diagnostics::default(),
            evaluated: 0,
            failed: 0,
            show_warnings: true,
        }
    }

    /// `line` is a rendered result of an expression.
    pub fn push_result(&mut self, line: String) {
        self.evaluated += 1;
        self.stdout.push(line);
    }

    /// An expression that could not be evaluated.
    pub fn push_failure(&mut self, errors: Vec<UniversalError>) {
        self.evaluated += 1;
        self.failed += 1;

        for e in errors.into_iter() {
            self.push_error(e);
        }
    }

    pub fn push_error(&mut self, e: UniversalError) {
        if e.is_warning() {
            error!("a warning is pushed as an error: {}", e.rendered());
        }

        self.errors.push(e);
    }

    pub fn push_warning(&mut self, w: UniversalError) {
        if !w.is_warning() {
            error!("an error is pushed as a warning: {}", w.rendered());
        }

        self.warnings.push(w);
    }

    /// Help messages and version info: not results of any expression.
    pub fn dump_to_stdout(&mut self, message: String) {
        self.stdout.push(message);
    }

    pub fn has_error(&self) -> bool {
        !self.errors.items.is_empty()
    }

    pub fn errors(&self) -> &[UniversalError] {
        &self.errors.items
    }

    pub fn warnings(&self) -> &[UniversalError] {
        &self.warnings.items
    }

    pub fn stdout(&self) -> &[String] {
        &self.stdout
    }

    /// `2 of 3 expressions failed`. `None` if nothing failed.
    pub fn failure_summary(&self) -> Option<String> {
        if self.failed == 0 {
            return None;
        }

        Some(format!(
            "{} of {} expression{} failed",
            self.failed,
            self.evaluated,
            if self.evaluated == 1 { "" } else { "s" },
        ))
    }

    /// (stdout, stderr)
    pub fn concat_results(&self) -> (String, String) {
        let mut stderr = vec![];

        if self.show_warnings {
            stderr.extend(self.warnings.render());
        }

        stderr.extend(self.errors.render());
        stderr.extend(self.failure_summary());

        (self.stdout.join("\n"), stderr.join("\n\n"))
    }

    pub fn concat_and_dump_results(&self) {
        let (stdout, stderr) = self.concat_results();

        if !stdout.is_empty() {
            println!("{stdout}");
        }

        if !stderr.is_empty() {
            eprintln!("{stderr}");
        }
    }
}

// Errors of different expressions point to different sources, so they're kept in
// the order of the expressions instead of being sorted by span.
#[derive(Default)]
struct Diagnostics {
    items: Vec<UniversalError>,

    // the same message at the same span of the same source is reported once
    seen: HashSet<u64>,
}

impl Diagnostics {
    fn push(&mut self, d: UniversalError) {
        if self.seen.insert(d.hash()) {
            self.items.push(d);
        }
    }

    fn render(&self) -> Option<String> {
        if self.items.is_empty() {
            None
        }

        else {
            Some(self.items.iter().map(
                |d| d.rendered()
            ).collect::<Vec<&str>>().join("\n\n"))
        }
    }
}
