use clap::Parser;

use crate::epochs::range::RangeRequest;

/// Fetch PancakeSwap prediction round results and export them to CSV
#[derive(Parser, Debug)]
#[command(name = "prediction-rounds")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Get results for the latest N settled epochs
    #[arg(long = "latest_n", value_name = "N")]
    pub latest_n: Option<u64>,

    /// Start epoch number
    #[arg(long = "start_epoch", value_name = "EPOCH")]
    pub start_epoch: Option<u64>,

    /// End epoch number (inclusive)
    #[arg(long = "end_epoch", value_name = "EPOCH")]
    pub end_epoch: Option<u64>,

    /// Path to configuration file
    #[arg(long, default_value = "config.toml")]
    pub config: String,

    /// CSV output path (overrides the config file)
    #[arg(long)]
    pub output: Option<String>,
}

impl Cli {
    /// Range requested on the command line; `None` means ask interactively.
    /// `--latest_n` wins over an explicit range.
    pub fn range_request(&self) -> Option<RangeRequest> {
        if let Some(n) = self.latest_n {
            return Some(RangeRequest::Latest(n));
        }

        match (self.start_epoch, self.end_epoch) {
            (Some(start), Some(end)) => Some(RangeRequest::Explicit { start, end }),
            _ => None,
        }
    }
}
