use crate::config::NumbersConfig;
use crate::core::Task;
use crate::domain::model::{AnalysisReport, Number, NumberBuckets, BYTE_RANGE_MAX, BYTE_RANGE_MIN};
use crate::utils::error::{Result, TaskError};
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

/// Reads lines from `input` until a line equal to `sentinel`, then writes
/// them to `target`, each terminated by `\n`, replacing any previous content.
///
/// End of stream also ends capture. Returns the number of lines written.
pub fn capture<R: BufRead>(input: R, target: impl AsRef<Path>, sentinel: &str) -> Result<usize> {
    let target = target.as_ref();
    let mut captured = String::new();
    let mut line_count = 0;
    let mut saw_sentinel = false;

    for line in input.lines() {
        let line = line?;
        if line == sentinel {
            saw_sentinel = true;
            break;
        }
        captured.push_str(&line);
        captured.push('\n');
        line_count += 1;
    }

    if !saw_sentinel {
        tracing::warn!("Input closed before '{}' was entered", sentinel);
    }

    fs::write(target, captured.as_bytes()).map_err(|e| TaskError::file(target, e))?;
    tracing::info!("Captured {} lines into {}", line_count, target.display());

    Ok(line_count)
}

/// Splits on runs of whitespace, keeping order.
pub fn tokenize(content: &str) -> Vec<String> {
    content.split_whitespace().map(str::to_string).collect()
}

/// Classifies a single token.
///
/// Tokens containing `.` are parsed as `f32`. Anything else must be an
/// integer; values in `-127..=128` go to the byte bucket.
pub fn classify(token: &str) -> Result<Number> {
    if token.contains('.') {
        let value = token.parse::<f32>().map_err(|e| parse_error(token, e))?;
        return Ok(Number::Fractional(value));
    }

    let value = token.parse::<i64>().map_err(|e| parse_error(token, e))?;
    if (BYTE_RANGE_MIN..=BYTE_RANGE_MAX).contains(&value) {
        Ok(Number::Byte(value as i16))
    } else {
        Ok(Number::Integer(value))
    }
}

fn parse_error(token: &str, err: impl std::fmt::Display) -> TaskError {
    TaskError::ParseError {
        token: token.to_string(),
        reason: err.to_string(),
    }
}

/// Classifies every token; the first unparsable token aborts.
pub fn classify_all<S: AsRef<str>>(tokens: &[S]) -> Result<NumberBuckets> {
    tokens.iter().map(|t| classify(t.as_ref())).collect()
}

/// Drops the first half of `tokens`, then the second half of what is left.
///
/// With `n` tokens and `m = n - n/2`, the survivors are the original indices
/// `n/2 .. n/2 + m/2`.
pub fn three_quarters_slice<T>(tokens: &[T]) -> &[T] {
    let rest = &tokens[tokens.len() / 2..];
    &rest[..rest.len() / 2]
}

/// Mean of the tokens kept by [`three_quarters_slice`]. NaN when none survive.
pub fn three_quarters_mean<S: AsRef<str>>(tokens: &[S]) -> Result<f64> {
    let survivors = three_quarters_slice(tokens);
    tracing::debug!(
        "Three-quarters slice keeps {} of {} tokens",
        survivors.len(),
        tokens.len()
    );
    Ok(classify_all(survivors)?.mean())
}

pub fn analyze(content: &str) -> Result<AnalysisReport> {
    let tokens = tokenize(content);
    let buckets = classify_all(&tokens)?;
    let mean = buckets.mean();
    let integer_count = buckets.integer_count();
    let three_quarters_mean = three_quarters_mean(&tokens)?;

    tracing::debug!(
        "Classified {} tokens: {} bytes, {} integers, {} fractionals",
        tokens.len(),
        buckets.bytes.len(),
        integer_count,
        buckets.fractionals.len()
    );

    Ok(AnalysisReport {
        buckets,
        mean,
        integer_count,
        three_quarters_mean,
    })
}

pub fn analyze_file(path: impl AsRef<Path>) -> Result<AnalysisReport> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| TaskError::file(path, e))?;
    let mut reader = BufReader::new(file);
    let mut content = String::new();
    reader
        .read_to_string(&mut content)
        .map_err(|e| TaskError::file(path, e))?;

    // Closing a read handle has no observable failure here; the close status is discarded by Drop.
    drop(reader);
    tracing::trace!("Released reader for {}", path.display());

    analyze(&content)
}

pub struct NumbersTask {
    file: PathBuf,
    sentinel: String,
    analyze_only: bool,
}

impl NumbersTask {
    pub fn new(file: impl Into<PathBuf>, sentinel: impl Into<String>) -> Self {
        Self {
            file: file.into(),
            sentinel: sentinel.into(),
            analyze_only: false,
        }
    }

    pub fn from_config(config: &NumbersConfig) -> Self {
        Self::new(&config.file, &config.sentinel)
    }

    pub fn analyze_only(mut self, analyze_only: bool) -> Self {
        self.analyze_only = analyze_only;
        self
    }

    /// Captures from `input` (unless analyze-only) and analyzes the file.
    pub fn run_with<R: BufRead>(&self, input: R) -> Result<AnalysisReport> {
        if !self.analyze_only {
            capture(input, &self.file, &self.sentinel)?;
        }
        analyze_file(&self.file)
    }
}

impl Task for NumbersTask {
    type Output = AnalysisReport;

    fn name(&self) -> &'static str {
        "numeric file analyzer"
    }

    fn run(&self) -> Result<AnalysisReport> {
        if !self.analyze_only {
            eprintln!("Enter numbers separated by spaces, '{}' to finish:", self.sentinel);
        }
        self.run_with(io::stdin().lock())
    }
}

/// Formats the report the way the `file-numbers` binary prints it.
pub fn render_report(report: &AnalysisReport) -> String {
    format!(
        "integers: {:?}\nbytes: {:?}\nfloats: {:?}\nmean: {}\nint count: {}\nthree-quarters mean: {}\n",
        report.buckets.integers,
        report.buckets.bytes,
        report.buckets.fractionals,
        report.mean,
        report.integer_count,
        report.three_quarters_mean
    )
}
