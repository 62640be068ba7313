use crate::utils::error::{Result, TaskError};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_positive_number, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

pub const DEFAULT_COPY_SOURCE: &str = "src/bin/copy_file.rs";
pub const DEFAULT_COPY_DESTINATION: &str = "copied_file.rs";
pub const DEFAULT_NUMBERS_FILE: &str = "data/numbers.txt";
pub const DEFAULT_SENTINEL: &str = "exit";
pub const DEFAULT_TEXT_INPUT: &str = "data/java_doc.txt";
pub const DEFAULT_FILTER_OUTPUT: &str = "data/text.txt";
pub const DEFAULT_KEYWORD: &str = "java";
pub const DEFAULT_MAX_OCCURRENCES: usize = 3;

/// Settings for all four utilities. Every section and key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TasksConfig {
    pub copy: CopyConfig,
    pub numbers: NumbersConfig,
    pub filter: FilterConfig,
    pub count: CountConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CopyConfig {
    pub source: String,
    pub destination: String,
}

impl Default for CopyConfig {
    fn default() -> Self {
        Self {
            source: DEFAULT_COPY_SOURCE.to_string(),
            destination: DEFAULT_COPY_DESTINATION.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NumbersConfig {
    pub file: String,
    pub sentinel: String,
}

impl Default for NumbersConfig {
    fn default() -> Self {
        Self {
            file: DEFAULT_NUMBERS_FILE.to_string(),
            sentinel: DEFAULT_SENTINEL.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub input: String,
    pub output: String,
    pub keyword: String,
    pub max_occurrences: usize,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            input: DEFAULT_TEXT_INPUT.to_string(),
            output: DEFAULT_FILTER_OUTPUT.to_string(),
            keyword: DEFAULT_KEYWORD.to_string(),
            max_occurrences: DEFAULT_MAX_OCCURRENCES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountConfig {
    pub input: String,
}

impl Default for CountConfig {
    fn default() -> Self {
        Self {
            input: DEFAULT_TEXT_INPUT.to_string(),
        }
    }
}

impl TasksConfig {
    /// Loads and parses a TOML configuration file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content =
            std::fs::read_to_string(&path).map_err(|e| TaskError::file(path.as_ref(), e))?;
        Self::from_toml_str(&content)
    }

    /// Loads `path` when given, otherwise returns the built-in defaults.
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => {
                tracing::debug!("Loading configuration from {}", path);
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| TaskError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the environment value; unset variables stay verbatim.
    fn substitute_env_vars(content: &str) -> String {
        static ENV_VAR: OnceLock<Regex> = OnceLock::new();
        let re = ENV_VAR.get_or_init(|| {
            Regex::new(r"\$\{([^}]+)\}").unwrap_or_else(|e| panic!("invalid env var pattern: {e}"))
        });

        re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        })
        .into_owned()
    }
}

impl Validate for CopyConfig {
    fn validate(&self) -> Result<()> {
        validate_path("copy.source", &self.source)?;
        validate_path("copy.destination", &self.destination)
    }
}

impl Validate for NumbersConfig {
    fn validate(&self) -> Result<()> {
        validate_path("numbers.file", &self.file)?;
        validate_non_empty_string("numbers.sentinel", &self.sentinel)
    }
}

impl Validate for FilterConfig {
    fn validate(&self) -> Result<()> {
        validate_path("filter.input", &self.input)?;
        validate_path("filter.output", &self.output)?;
        validate_non_empty_string("filter.keyword", &self.keyword)?;
        validate_positive_number("filter.max_occurrences", self.max_occurrences, 1)
    }
}

impl Validate for CountConfig {
    fn validate(&self) -> Result<()> {
        validate_path("count.input", &self.input)
    }
}

impl Validate for TasksConfig {
    fn validate(&self) -> Result<()> {
        self.copy.validate()?;
        self.numbers.validate()?;
        self.filter.validate()?;
        self.count.validate()
    }
}
