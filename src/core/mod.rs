pub mod char_counter;
pub mod duplicator;
pub mod keyword_filter;
pub mod numbers;
pub mod runner;

pub use crate::domain::model::{AnalysisReport, FilterReport, Number, NumberBuckets};
pub use crate::domain::ports::Task;
pub use crate::utils::error::Result;
