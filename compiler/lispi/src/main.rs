//! Lispi command-line interface.

use std::path::Path;
use std::process::ExitCode;

use lispi::cli::{parse_args, Command, USAGE};
use lispi::{format_results, init_tracing, run_file, Config};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match parse_args(&args) {
        Ok(Command::Run { path, config }) => run(&path, config),
        Ok(Command::Help) => {
            println!("{USAGE}");
            ExitCode::SUCCESS
        }
        Ok(Command::Version) => {
            println!("lispi {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!();
            eprintln!("{USAGE}");
            ExitCode::FAILURE
        }
    }
}

fn run(path: &Path, config: Config) -> ExitCode {
    match run_file(path, config) {
        Ok(values) => {
            println!("{}", format_results(&values));
            ExitCode::SUCCESS
        }
        Err(e) => {
            match e.code() {
                Some(code) => eprintln!("error[{code}]: {e}"),
                None => eprintln!("error: {e}"),
            }
            ExitCode::FAILURE
        }
    }
}
