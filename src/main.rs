#![deny(unused_imports)]

use frac::logger::init_logger;
use frac::result::CalcOutput;
use frac::run;
use frac_clap::parse_cli_args;
use frac_error::FracError;

fn main() {
    let clap_result = parse_cli_args();

    if let Err(e) = init_logger(clap_result.result.verbosity) {
        eprintln!("failed to initialize the logger: {e}");
    }

    let mut calc_output = CalcOutput::new();
    calc_output.show_warnings = clap_result.result.show_warnings;

    for warning in clap_result.warnings.iter() {
        calc_output.push_warning(warning.to_universal(&clap_result.command_line));
    }

    for error in clap_result.errors.iter() {
        calc_output.push_error(error.to_universal(&clap_result.command_line));
    }

    let calc_output = if clap_result.has_error() {
        calc_output
    }

    else {
        run(clap_result.result, Some(calc_output))
    };

    calc_output.concat_and_dump_results();

    if calc_output.has_error() {
        std::process::exit(1);
    }
}
