use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::epochs::types::EpochRow;

const HEADER: &str = "Epoch,Result,Bull Odds,Bear Odds";

pub struct CsvExporter {
    path: PathBuf,
}

impl CsvExporter {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write header and rows, replacing any existing file
    pub fn write_rows(&self, rows: &[EpochRow]) -> Result<()> {
        let file = File::create(&self.path)
            .with_context(|| format!("Failed to create {}", self.path.display()))?;
        let mut writer = BufWriter::new(file);

        writeln!(writer, "{}", HEADER)?;
        for row in rows {
            writeln!(
                writer,
                "{},{},{},{}",
                row.epoch, row.result, row.bull_odds, row.bear_odds
            )?;
        }

        writer.flush()
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        Ok(())
    }
}
