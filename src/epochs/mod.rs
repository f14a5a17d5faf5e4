pub mod processor;
pub mod prompt;
pub mod range;
pub mod types;
