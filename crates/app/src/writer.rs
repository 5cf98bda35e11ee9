//! Training-table CSV output.
//!
//! One row per window. The `vad_list` column holds the nested per-speaker
//! clip lists as JSON, the shape the VAP training loader expects. Rows only
//! reach this writer after the windower has validated its input, so an
//! invalid session never leaves a partially written table behind.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

use vapgen_core::DatasetRow;

pub const CSV_HEADER: [&str; 6] = ["audio_path", "start", "end", "vad_list", "session", "dataset"];

pub struct DatasetWriter<W: Write> {
    inner: csv::Writer<W>,
    rows_written: usize,
}

impl DatasetWriter<File> {
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path.as_ref())
            .with_context(|| format!("failed to create {}", path.as_ref().display()))?;
        Self::from_writer(file)
    }
}

impl<W: Write> DatasetWriter<W> {
    pub fn from_writer(writer: W) -> Result<Self> {
        let mut inner = csv::Writer::from_writer(writer);
        inner
            .write_record(CSV_HEADER)
            .context("failed to write CSV header")?;
        Ok(Self {
            inner,
            rows_written: 0,
        })
    }

    pub fn write_row(&mut self, row: &DatasetRow) -> Result<()> {
        let vad_list =
            serde_json::to_string(&row.vad_list).context("failed to serialize vad_list")?;
        self.inner
            .write_record([
                row.audio_path.as_str(),
                &row.start.to_string(),
                &row.end.to_string(),
                &vad_list,
                &row.session.to_string(),
                &row.dataset,
            ])
            .with_context(|| format!("failed to write row for window at {}", row.start))?;
        self.rows_written += 1;
        Ok(())
    }

    /// Flushes and returns the number of data rows written.
    pub fn finish(mut self) -> Result<usize> {
        self.inner.flush().context("failed to flush CSV output")?;
        Ok(self.rows_written)
    }
}
