use clap::Parser;
use file_tasks::config::cli::FilterArgs;
use file_tasks::utils::{error::exit_with, logger};
use file_tasks::{KeywordFilterTask, TaskRunner};

fn main() {
    let args = FilterArgs::parse();

    logger::init_cli_logger(args.common.verbose, args.common.log_format);

    let config = match args.resolve() {
        Ok(config) => config,
        Err(e) => exit_with(&e),
    };
    tracing::debug!("Filter config: {:?}", config);

    let runner = TaskRunner::new(KeywordFilterTask::from_config(&config));
    match runner.run() {
        Ok(report) => {
            println!(
                "✅ {} characters written to {}, '{}' seen {} times{}",
                report.chars_written,
                config.output,
                config.keyword,
                report.occurrences,
                if report.stopped_early { " (stopped early)" } else { "" }
            );
        }
        Err(e) => exit_with(&e),
    }
}
