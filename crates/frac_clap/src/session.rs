use crate::CalcOption;
use crate::error::ClapError;
use crate::warn::ClapWarning;

pub struct ClapSession {
    pub errors: Vec<ClapError>,
    pub warnings: Vec<ClapWarning>,
    pub result: CalcOption,

    /// The joined command line. Spans of the errors and warnings point to this string.
    pub command_line: String,
}

impl ClapSession {
    pub fn with_result(result: CalcOption, command_line: String) -> Self {
        ClapSession {
            errors: vec![],
            warnings: vec![],
            result,
            command_line,
        }
    }

    pub fn with_errors(errors: Vec<ClapError>, command_line: String) -> Self {
        ClapSession {
            errors,
            warnings: vec![],
            result: CalcOption::default(),
            command_line,
        }
    }

    pub fn has_error(&self) -> bool {
        !self.errors.is_empty()
    }
}
