use std::process;

mod cli;

use crate::cli::output;
use workmate_core::{ReportRegistry, WorkmateError};

fn main() {
    // Reports are registered before arguments are parsed so `--report`
    // can be validated against the registered names
    let registry = ReportRegistry::builtin();
    let cli = cli::parse(&registry);

    cli::logging::init(cli.verbose);

    if let Err(e) = cli::commands::report::run(&cli, &registry) {
        output::error(&e.to_string());

        // Use appropriate exit codes based on error type
        let exit_code = match e.downcast_ref::<WorkmateError>() {
            Some(err) => err.exit_code(),
            None => 1,
        };
        process::exit(exit_code);
    }
}
