#![deny(unused_imports)]

pub const MIN_VERBOSITY: u8 = 0;
pub const MAX_VERBOSITY: u8 = 2;

/// `--decimal` doesn't take a larger number than this.
pub const MAX_DECIMAL_DIGITS: u32 = 64;

#[derive(Clone, Debug)]
pub struct CalcOption {
    pub do_not_calc_and_do_this: Option<SpecialOutput>,

    // evaluated in order
    pub expressions: Vec<String>,

    pub verbosity: u8,

    // `[finite]`, `[+inf]`, `[-inf]` or `[NaN]` after each result
    pub show_category: bool,

    // `≈ 0.3333` after each result
    pub decimal_digits: Option<u32>,

    pub show_warnings: bool,
}

impl CalcOption {
    pub fn help_message() -> Self {
        CalcOption::do_this_and_quit(SpecialOutput::HelpMessage)
    }

    pub fn version_info() -> Self {
        CalcOption::do_this_and_quit(SpecialOutput::VersionInfo)
    }

    pub fn do_this_and_quit(s: SpecialOutput) -> Self {
        CalcOption {
            do_not_calc_and_do_this: Some(s),
            ..CalcOption::default()
        }
    }

    pub fn with_expressions(expressions: Vec<String>) -> Self {
        CalcOption {
            expressions,
            ..CalcOption::default()
        }
    }
}

impl Default for CalcOption {
    fn default() -> Self {
        CalcOption {
            do_not_calc_and_do_this: None,
            expressions: vec![],
            verbosity: 1,
            show_category: false,
            decimal_digits: None,
            show_warnings: true,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SpecialOutput {
    HelpMessage,
    VersionInfo,
}
