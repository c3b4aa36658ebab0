#![deny(unused_imports)]

use frac_config::{CalcOption, SpecialOutput};
use frac_error::FracError;
use frac_eval::calc;
use frac_number::{Category, Fraction};
use log::{debug, info};
use num_bigint::BigInt;

pub mod logger;
pub mod result;

#[cfg(test)]
mod tests;

use result::CalcOutput;

/// Evaluates every expression in `option`, in order. Results, errors and warnings
/// are appended to `output`, if there is one.
pub fn run(option: CalcOption, output: Option<CalcOutput>) -> CalcOutput {
    let mut output = output.unwrap_or_default();
    output.show_warnings = option.show_warnings;

    match option.do_not_calc_and_do_this {
        Some(SpecialOutput::HelpMessage) => {
            output.dump_to_stdout(HELP_MESSAGE.to_string());
            return output;
        },
        Some(SpecialOutput::VersionInfo) => {
            output.dump_to_stdout(version_info());
            return output;
        },
        None => {},
    }

    for expression in option.expressions.iter() {
        info!("evaluating `{expression}`");

        match calc::<BigInt>(expression) {
            Ok(value) => {
                debug!("`{expression}` => {value:?}");
                output.push_result(render_result(expression, &value, &option));
            },
            Err(errors) => {
                output.push_failure(errors.iter().map(|e| e.to_universal(expression)).collect());
            },
        }
    }

    output
}

/// `1/3 = 1/3  [finite]  ≈ 0.3333`
pub fn render_result(expression: &str, value: &Fraction<BigInt>, option: &CalcOption) -> String {
    let mut result = format!("{} = {value}", expression.trim());

    if option.show_category {
        result = format!("{result}  {}", render_category(value.category()));
    }

    if let Some(digits) = option.decimal_digits {
        // `≈ inf` says nothing
        if value.is_finite() {
            result = format!("{result}  ≈ {}", value.to_decimal_string(digits));
        }
    }

    result
}

pub fn render_category(category: Category) -> &'static str {
    match category {
        Category::Finite => "[finite]",
        Category::PosInf => "[+inf]",
        Category::NegInf => "[-inf]",
        Category::NaN => "[NaN]",
    }
}

pub fn version_info() -> String {
    format!("frac {MAJOR_VERSION}.{MINOR_VERSION}.{PATCH_VERSION}")
}

pub const HELP_MESSAGE: &str =
"Usage: frac [OPTIONS] [EXPRESSIONS]

Evaluates arithmetic expressions over exact fractions, with `inf`, `-inf` and `NaN`.
Nothing fails: `1/0` is `inf` and `0/0` is `NaN`.

Examples:
    frac \"1/3 + 0.5\"
        1/3 + 0.5 = 5/6
    frac --decimal 4 \"pow(2/3, 3)\"
        pow(2/3, 3) = 8/27  ≈ 0.2962
    frac -e \"-1/0\" --category
        -1/0 = -inf  [-inf]

Expressions:
    numbers                         `42`, `0.75`, `inf`, `nan`
    operators                       `+`, `-`, `*`, `/` and parentheses
    functions                       `recip`, `abs`, `floor`, `ceil`, `trunc`, `round`, `pow(x, k)`

Options:
    -h, --help                      Display this message
    -v, --version                   Display the version
    -e, --expr EXPR                 Evaluate EXPR (use it when EXPR starts with `-`)
    --category                      Show the category of each result
    --decimal INT                   Show a decimal approximation with INT digits (0..=64)
    --verbose INT                   Set verbosity of the logs (0..=2, default: 1)
    --show-warnings                 Show warnings (default)
    --hide-warnings                 Hide warnings
";

pub const MAJOR_VERSION: u8 = 0;
pub const MINOR_VERSION: u8 = 0;
pub const PATCH_VERSION: u8 = 0;
