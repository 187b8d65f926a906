mod args;
mod console;

use std::env;
use std::process::ExitCode;

use engine_logging::engine_debug;
use log::LevelFilter;
use page2pdf_engine::Driver;

use crate::args::{parse_args, Command};
use crate::console::ConsoleReporter;

fn main() -> ExitCode {
    engine_logging::initialize_stderr(LevelFilter::Warn);

    let args: Vec<String> = env::args().skip(1).collect();
    let command = match parse_args(&args) {
        Ok(command) => command,
        Err(usage) => {
            println!("{usage}");
            return ExitCode::FAILURE;
        }
    };

    match run(command) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> anyhow::Result<ExitCode> {
    engine_debug!("running {:?}", command);
    let reporter = ConsoleReporter;

    match command {
        Command::Single { url, output } => {
            let driver = Driver::with_defaults()?;
            driver.process_single(&url, &output, &reporter)?;
        }
        Command::Bulk { list, output_dir } => {
            if !list.is_file() {
                println!("Error: The file {} does not exist.", list.display());
                return Ok(ExitCode::FAILURE);
            }
            let driver = Driver::with_defaults()?;
            driver.process_bulk(&list, &output_dir, &reporter)?;
        }
    }
    Ok(ExitCode::SUCCESS)
}
