use serde::{Deserialize, Serialize};

/// Lowest value accepted into the byte bucket.
pub const BYTE_RANGE_MIN: i64 = -127;
/// Highest value accepted into the byte bucket. Inclusive, so `128` lands
/// here even though it does not fit a signed byte.
pub const BYTE_RANGE_MAX: i64 = 128;

/// A classified numeric token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Byte(i16),
    Integer(i64),
    Fractional(f32),
}

/// Classified tokens in encounter order, one list per class.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NumberBuckets {
    pub bytes: Vec<i16>,
    pub integers: Vec<i64>,
    pub fractionals: Vec<f32>,
}

impl NumberBuckets {
    pub fn push(&mut self, number: Number) {
        match number {
            Number::Byte(v) => self.bytes.push(v),
            Number::Integer(v) => self.integers.push(v),
            Number::Fractional(v) => self.fractionals.push(v),
        }
    }

    pub fn len(&self) -> usize {
        self.bytes.len() + self.integers.len() + self.fractionals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn integer_count(&self) -> usize {
        self.integers.len()
    }

    /// Mean over all three buckets.
    ///
    /// Sums fractionals, then integers, then bytes, in `f64`. An empty set
    /// divides zero by zero and yields NaN.
    pub fn mean(&self) -> f64 {
        let mut sum = 0.0f64;
        for v in &self.fractionals {
            sum += f64::from(*v);
        }
        for v in &self.integers {
            sum += *v as f64;
        }
        for v in &self.bytes {
            sum += f64::from(*v);
        }
        sum / self.len() as f64
    }
}

impl FromIterator<Number> for NumberBuckets {
    fn from_iter<I: IntoIterator<Item = Number>>(iter: I) -> Self {
        let mut buckets = NumberBuckets::default();
        for number in iter {
            buckets.push(number);
        }
        buckets
    }
}

/// Result of the numeric file analysis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    #[serde(flatten)]
    pub buckets: NumberBuckets,
    pub mean: f64,
    pub integer_count: usize,
    pub three_quarters_mean: f64,
}

/// Outcome of a keyword filter pass. `output` is the destination handed
/// back to the caller after flushing.
#[derive(Debug)]
pub struct FilterReport<W> {
    pub output: W,
    pub occurrences: usize,
    pub chars_written: usize,
    pub stopped_early: bool,
}
