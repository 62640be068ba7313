use clap::Parser;
use file_tasks::config::cli::CountArgs;
use file_tasks::utils::{error::exit_with, logger};
use file_tasks::{CountCharTask, TaskRunner};

fn main() {
    let args = CountArgs::parse();

    logger::init_cli_logger(args.common.verbose, args.common.log_format);

    let (target, config) = match args.resolve() {
        Ok(resolved) => resolved,
        Err(e) => exit_with(&e),
    };

    match TaskRunner::new(CountCharTask::from_config(target, &config)).run() {
        Ok(count) => println!("{}", count),
        Err(e) => exit_with(&e),
    }
}
