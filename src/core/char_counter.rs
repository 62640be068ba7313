use crate::config::CountConfig;
use crate::core::Task;
use crate::utils::chars::read_char;
use crate::utils::error::{Result, TaskError};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

/// Counts characters in `source` equal to `target`.
///
/// Best effort: a read error is logged and the count gathered so far is
/// returned.
pub fn count_char<R: Read>(target: char, source: R) -> usize {
    let mut reader = BufReader::new(source);
    let mut count = 0;

    loop {
        match read_char(&mut reader) {
            Ok(Some(c)) => {
                if c == target {
                    count += 1;
                }
            }
            Ok(None) => break,
            Err(e) => {
                tracing::error!(
                    "Read failed while counting '{}', returning partial count {}: {}",
                    target,
                    count,
                    e
                );
                break;
            }
        }
    }

    count
}

/// Opens `path` and counts `target` in it. Only a failed open is an error.
pub fn count_char_in_file(target: char, path: impl AsRef<Path>) -> Result<usize> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| TaskError::file(path, e))?;
    let count = count_char(target, file);
    tracing::info!("Found {} occurrences of '{}' in {}", count, target, path.display());
    Ok(count)
}

pub struct CountCharTask {
    target: char,
    input: PathBuf,
}

impl CountCharTask {
    pub fn new(target: char, input: impl Into<PathBuf>) -> Self {
        Self {
            target,
            input: input.into(),
        }
    }

    pub fn from_config(target: char, config: &CountConfig) -> Self {
        Self::new(target, &config.input)
    }
}

impl Task for CountCharTask {
    type Output = usize;

    fn name(&self) -> &'static str {
        "character counter"
    }

    fn run(&self) -> Result<usize> {
        count_char_in_file(self.target, &self.input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor};
    use tempfile::TempDir;

    /// Yields its data, then fails every later read.
    struct FailingReader {
        data: Cursor<Vec<u8>>,
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.data.read(buf)? {
                0 => Err(io::Error::new(io::ErrorKind::Other, "disk on fire")),
                n => Ok(n),
            }
        }
    }

    /// Returns `Interrupted` once after `after` bytes, then reads one byte at a time.
    struct HiccupReader {
        data: Cursor<Vec<u8>>,
        after: u64,
        hiccuped: bool,
    }

    impl Read for HiccupReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if !self.hiccuped && self.data.position() == self.after {
                self.hiccuped = true;
                return Err(io::Error::new(io::ErrorKind::Interrupted, "signal"));
            }
            let n = buf.len().min(1);
            self.data.read(&mut buf[..n])
        }
    }

    #[test]
    fn test_interrupted_read_does_not_truncate_count() {
        let reader = HiccupReader {
            data: Cursor::new(b"banana".to_vec()),
            after: 2,
            hiccuped: false,
        };
        assert_eq!(count_char('a', reader), 3);
    }

    #[test]
    fn test_counts_banana() {
        assert_eq!(count_char('a', Cursor::new("banana")), 3);
        assert_eq!(count_char('b', Cursor::new("banana")), 1);
        assert_eq!(count_char('z', Cursor::new("banana")), 0);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(count_char('a', Cursor::new("")), 0);
    }

    #[test]
    fn test_case_sensitive_and_multibyte() {
        assert_eq!(count_char('a', Cursor::new("AaAa")), 2);
        assert_eq!(count_char('é', Cursor::new("été, café")), 3);
        assert_eq!(count_char(' ', Cursor::new("a b c")), 2);
    }

    #[test]
    fn test_read_error_returns_partial_count() {
        let reader = FailingReader {
            data: Cursor::new(b"aaxa".to_vec()),
        };
        assert_eq!(count_char('a', reader), 3);
    }

    #[test]
    fn test_invalid_utf8_returns_partial_count() {
        assert_eq!(count_char('a', Cursor::new(vec![b'a', b'a', 0xFF, b'a'])), 2);
    }

    #[test]
    fn test_count_in_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.txt");
        std::fs::write(&path, "java is java\n").unwrap();

        assert_eq!(count_char_in_file('a', &path).unwrap(), 4);
        assert_eq!(CountCharTask::new('j', &path).run().unwrap(), 2);
    }

    #[test]
    fn test_missing_file_is_fatal() {
        let err = count_char_in_file('a', "missing/doc.txt").unwrap_err();
        assert!(matches!(err, TaskError::FileError { .. }));
    }
}
