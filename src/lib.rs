pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::TasksConfig;
pub use crate::core::{
    char_counter::{count_char, count_char_in_file, CountCharTask},
    duplicator::{copy_file, CopyTask},
    keyword_filter::{filter_file, KeywordFilter, KeywordFilterTask},
    numbers::{analyze, analyze_file, capture, classify, three_quarters_mean, NumbersTask},
    runner::TaskRunner,
};
pub use domain::ports::Task;
pub use utils::error::{Result, TaskError};
