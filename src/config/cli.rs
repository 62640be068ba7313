use crate::config::toml_config::{
    CopyConfig, CountConfig, FilterConfig, NumbersConfig, TasksConfig,
};
use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{first_char, Validate};
use clap::{Args, Parser};

/// Flags shared by every binary.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Log output format
    #[arg(long, value_enum, default_value_t = LogFormat::Compact)]
    pub log_format: LogFormat,
}

impl CommonArgs {
    pub fn load_config(&self) -> Result<TasksConfig> {
        TasksConfig::load(self.config.as_deref())
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "copy-file")]
#[command(about = "Copy a file, overwriting the destination")]
pub struct CopyArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// File to copy
    #[arg(long)]
    pub source: Option<String>,

    /// Where to write the copy
    #[arg(long)]
    pub destination: Option<String>,
}

impl CopyArgs {
    /// Merges flags over the loaded configuration and validates the result.
    pub fn resolve(&self) -> Result<CopyConfig> {
        let mut config = self.common.load_config()?.copy;
        if let Some(source) = &self.source {
            config.source = source.clone();
        }
        if let Some(destination) = &self.destination {
            config.destination = destination.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "file-numbers")]
#[command(about = "Capture numbers from stdin into a file, then report their statistics")]
pub struct NumbersArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// File the captured lines are written to and analyzed from
    #[arg(long)]
    pub file: Option<String>,

    /// Line that ends console capture
    #[arg(long)]
    pub sentinel: Option<String>,

    /// Skip capture and analyze the existing file
    #[arg(long)]
    pub analyze_only: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl NumbersArgs {
    pub fn resolve(&self) -> Result<NumbersConfig> {
        let mut config = self.common.load_config()?.numbers;
        if let Some(file) = &self.file {
            config.file = file.clone();
        }
        if let Some(sentinel) = &self.sentinel {
            config.sentinel = sentinel.clone();
        }
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "keyword-filter")]
#[command(about = "Copy text until a keyword has appeared a number of times")]
pub struct FilterArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Text file to read
    #[arg(long)]
    pub input: Option<String>,

    /// File to write the filtered text to
    #[arg(long)]
    pub output: Option<String>,

    /// Substring to look for in each word (case-insensitive)
    #[arg(long)]
    pub keyword: Option<String>,

    /// Stop copying once the keyword has been seen this many times
    #[arg(long)]
    pub limit: Option<usize>,
}

impl FilterArgs {
    pub fn resolve(&self) -> Result<FilterConfig> {
        let mut config = self.common.load_config()?.filter;
        if let Some(input) = &self.input {
            config.input = input.clone();
        }
        if let Some(output) = &self.output {
            config.output = output.clone();
        }
        if let Some(keyword) = &self.keyword {
            config.keyword = keyword.clone();
        }
        if let Some(limit) = self.limit {
            config.max_occurrences = limit;
        }
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "count-char")]
#[command(about = "Count how many times a character appears in a file")]
pub struct CountArgs {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Character to count; only the first character is used
    pub character: String,

    /// Text file to read
    #[arg(long)]
    pub input: Option<String>,
}

impl CountArgs {
    pub fn resolve(&self) -> Result<(char, CountConfig)> {
        let target = first_char("character", &self.character)?;
        let mut config = self.common.load_config()?.count;
        if let Some(input) = &self.input {
            config.input = input.clone();
        }
        config.validate()?;
        Ok((target, config))
    }
}
