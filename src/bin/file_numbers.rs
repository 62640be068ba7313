use clap::Parser;
use file_tasks::config::cli::NumbersArgs;
use file_tasks::core::numbers::render_report;
use file_tasks::utils::{error::exit_with, logger};
use file_tasks::{NumbersTask, TaskError, TaskRunner};

// Sample session:
//   43.12 4533 231 1.23 321.2 0.123
//   120 32 24 250 64 -127
//   exit

fn main() {
    let args = NumbersArgs::parse();

    logger::init_cli_logger(args.common.verbose, args.common.log_format);

    let config = match args.resolve() {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };
    tracing::debug!("Numbers config: {:?}", config);

    let task = NumbersTask::from_config(&config).analyze_only(args.analyze_only);
    let report = match TaskRunner::new(task).run() {
        Ok(report) => report,
        Err(e) => exit_with(&e),
    };

    if args.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{}", json),
            Err(e) => exit_with(&TaskError::from(e)),
        }
    } else {
        print!("{}", render_report(&report));
    }
}
