pub mod explorer;
pub mod node;
pub mod prediction;
pub mod types;
pub mod units;

#[cfg(test)]
pub mod mock;
