use clap::Parser;
use file_tasks::config::cli::CopyArgs;
use file_tasks::utils::{error::exit_with, logger};
use file_tasks::{CopyTask, TaskRunner};

fn main() {
    let args = CopyArgs::parse();

    logger::init_cli_logger(args.common.verbose, args.common.log_format);

    let config = match args.resolve() {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };
    tracing::debug!("Copy config: {:?}", config);

    let runner = TaskRunner::new(CopyTask::from_config(&config));
    match runner.run() {
        Ok(bytes) => {
            println!("✅ Copied {} bytes to {}", bytes, config.destination);
        }
        Err(e) => exit_with(&e),
    }
}
