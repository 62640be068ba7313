use crate::config::toml_config::{FilterConfig, DEFAULT_KEYWORD, DEFAULT_MAX_OCCURRENCES};
use crate::core::Task;
use crate::domain::model::FilterReport;
use crate::utils::chars::read_char;
use crate::utils::error::{Result, TaskError};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

/// Copies text while counting space-delimited words that contain `keyword`,
/// case-insensitively, and stops once `limit` such words were seen.
///
/// Only U+0020 separates words. Tabs and newlines stay part of the pending
/// word, and a final word with no space after it is never checked.
#[derive(Debug, Clone)]
pub struct KeywordFilter {
    keyword: String,
    limit: usize,
}

impl Default for KeywordFilter {
    fn default() -> Self {
        Self::new(DEFAULT_KEYWORD, DEFAULT_MAX_OCCURRENCES)
    }
}

impl KeywordFilter {
    pub fn new(keyword: &str, limit: usize) -> Self {
        Self {
            keyword: keyword.to_lowercase(),
            limit,
        }
    }

    pub fn keyword(&self) -> &str {
        &self.keyword
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn run<R: Read, W: Write>(&self, source: R, mut destination: W) -> Result<FilterReport<W>> {
        let mut reader = BufReader::new(source);
        let mut word = String::new();
        let mut occurrences = 0;
        let mut chars_written = 0;
        let mut buf = [0u8; 4];

        let stopped_early = loop {
            if occurrences >= self.limit {
                break true;
            }
            let Some(c) = read_char(&mut reader)? else {
                break false;
            };

            if c == ' ' {
                if word.to_lowercase().contains(&self.keyword) {
                    occurrences += 1;
                    tracing::debug!("Occurrence {} of '{}' in '{}'", occurrences, self.keyword, word);
                }
                word.clear();
            } else {
                word.push(c);
            }

            destination.write_all(c.encode_utf8(&mut buf).as_bytes())?;
            chars_written += 1;
        };

        destination.flush()?;

        Ok(FilterReport {
            output: destination,
            occurrences,
            chars_written,
            stopped_early,
        })
    }
}

/// Runs `filter` from the file at `input` into the file at `output`.
///
/// Both files are closed when this returns, whichever way it returns.
pub fn filter_file(
    input: impl AsRef<Path>,
    output: impl AsRef<Path>,
    filter: &KeywordFilter,
) -> Result<FilterReport<()>> {
    let input = input.as_ref();
    let output = output.as_ref();

    let source = File::open(input).map_err(|e| TaskError::file(input, e))?;
    let destination = File::create(output).map_err(|e| TaskError::file(output, e))?;

    let report = filter.run(source, BufWriter::new(destination))?;
    tracing::info!(
        "Wrote {} characters to {} ({} occurrences of '{}'{})",
        report.chars_written,
        output.display(),
        report.occurrences,
        filter.keyword(),
        if report.stopped_early { ", stopped early" } else { "" }
    );

    Ok(FilterReport {
        output: (),
        occurrences: report.occurrences,
        chars_written: report.chars_written,
        stopped_early: report.stopped_early,
    })
}

pub struct KeywordFilterTask {
    input: PathBuf,
    output: PathBuf,
    filter: KeywordFilter,
}

impl KeywordFilterTask {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>, filter: KeywordFilter) -> Self {
        Self {
            input: input.into(),
            output: output.into(),
            filter,
        }
    }

    pub fn from_config(config: &FilterConfig) -> Self {
        Self::new(
            &config.input,
            &config.output,
            KeywordFilter::new(&config.keyword, config.max_occurrences),
        )
    }
}

impl Task for KeywordFilterTask {
    type Output = FilterReport<()>;

    fn name(&self) -> &'static str {
        "keyword filter"
    }

    fn run(&self) -> Result<FilterReport<()>> {
        filter_file(&self.input, &self.output, &self.filter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::io::{self, Cursor};
    use tempfile::TempDir;

    fn filter_str(filter: &KeywordFilter, input: &str) -> (String, FilterReport<Vec<u8>>) {
        let report = filter.run(Cursor::new(input), Vec::new()).unwrap();
        (String::from_utf8(report.output.clone()).unwrap(), report)
    }

    #[test]
    fn test_stops_after_third_occurrence() {
        let (output, report) =
            filter_str(&KeywordFilter::default(), "I love Java and also java and JAVA now");

        assert_eq!(output, "I love Java and also java and JAVA ");
        assert!(!output.contains("now"));
        assert_eq!(report.occurrences, 3);
        assert!(report.stopped_early);
    }

    #[test]
    fn test_copies_everything_below_limit() {
        let input = "Javascript is not java";
        let (output, report) = filter_str(&KeywordFilter::default(), input);

        assert_eq!(output, input);
        // the last word has no trailing space and is never checked
        assert_eq!(report.occurrences, 1);
        assert!(!report.stopped_early);
        assert_eq!(report.chars_written, input.chars().count());
    }

    #[test]
    fn test_only_spaces_split_words() {
        let (output, report) = filter_str(&KeywordFilter::default(), "java\njava\tjava end");

        assert_eq!(output, "java\njava\tjava end");
        assert_eq!(report.occurrences, 1);
    }

    #[test]
    fn test_substring_match_inside_word() {
        let (_, report) = filter_str(&KeywordFilter::default(), "JavaDoc myJAVA(x) jav a ");
        assert_eq!(report.occurrences, 2);
    }

    #[test]
    fn test_custom_keyword_is_case_insensitive() {
        let filter = KeywordFilter::new("Rust", 1);
        let (output, report) = filter_str(&filter, "ok RUSTy code here");

        assert_eq!(filter.keyword(), "rust");
        assert_eq!(output, "ok RUSTy ");
        assert_eq!(report.occurrences, 1);
    }

    #[test]
    fn test_multibyte_text_is_preserved() {
        let (output, report) = filter_str(&KeywordFilter::default(), "héllo wörld ");
        assert_eq!(output, "héllo wörld ");
        assert_eq!(report.chars_written, 12);
    }

    #[test]
    fn test_empty_input() {
        let (output, report) = filter_str(&KeywordFilter::default(), "");
        assert!(output.is_empty());
        assert_eq!(report.occurrences, 0);
        assert!(!report.stopped_early);
    }

    /// Returns `Interrupted` once after two bytes, then reads one byte at a time.
    struct HiccupReader {
        data: Cursor<Vec<u8>>,
        hiccuped: bool,
    }

    impl Read for HiccupReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if !self.hiccuped && self.data.position() == 2 {
                self.hiccuped = true;
                return Err(io::Error::new(io::ErrorKind::Interrupted, "signal"));
            }
            let n = buf.len().min(1);
            self.data.read(&mut buf[..n])
        }
    }

    #[test]
    fn test_interrupted_read_is_retried() {
        let source = HiccupReader {
            data: Cursor::new(b"java java java tail".to_vec()),
            hiccuped: false,
        };

        let report = KeywordFilter::default().run(source, Vec::new()).unwrap();

        assert_eq!(String::from_utf8(report.output).unwrap(), "java java java ");
        assert_eq!(report.occurrences, 3);
    }

    #[test]
    fn test_invalid_utf8_is_an_error() {
        let err = KeywordFilter::default()
            .run(Cursor::new(vec![b'a', 0xFF, b' ']), Vec::new())
            .unwrap_err();
        assert!(matches!(err, TaskError::IoError(ref e) if e.kind() == io::ErrorKind::InvalidData));
    }

    #[test]
    fn test_filter_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("doc.txt");
        let output = dir.path().join("text.txt");
        fs::write(&input, "Java java JAVA java tail").unwrap();

        let report = filter_file(&input, &output, &KeywordFilter::default()).unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "Java java JAVA ");
        assert_eq!(report.occurrences, 3);
    }

    #[test]
    fn test_filter_file_missing_input() {
        let dir = TempDir::new().unwrap();
        let err = filter_file(
            dir.path().join("missing.txt"),
            dir.path().join("out.txt"),
            &KeywordFilter::default(),
        )
        .unwrap_err();

        assert!(matches!(err, TaskError::FileError { ref path, .. } if path.ends_with("missing.txt")));
    }
}
