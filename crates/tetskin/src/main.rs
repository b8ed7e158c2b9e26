use std::process::ExitCode;

use clap::Parser;
use tetskin_rs::cli::Cli;

fn main() -> ExitCode {
    tetskin_rs::init_logging();

    let cli = Cli::parse();
    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
