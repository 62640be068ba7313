pub mod chars;
pub mod error;
pub mod logger;
pub mod validation;
