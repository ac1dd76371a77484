use std::process::ExitCode;

use clap::Parser;
use phrasekit::cli::{Arguments, ExitStatus};

fn main() -> ExitCode {
    let args = Arguments::parse();
    phrasekit::cli::init_logging(args.verbose());

    match phrasekit::cli::run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
