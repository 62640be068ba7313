use crate::utils::error::Result;

/// A single-pass file utility.
pub trait Task {
    type Output;

    fn name(&self) -> &'static str;
    fn run(&self) -> Result<Self::Output>;
}
