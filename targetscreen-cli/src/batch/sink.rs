/// Destinations for finished screening reports
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use targetscreen_bio::ScreeningReport;
use targetscreen_core::{ScreenerResult, TableFormat};
use targetscreen_utils::write_screening_table;

/// Receives one report per screening direction
pub trait ResultSink {
    /// `pair` groups the two directions of a comparison, `table` names one direction
    fn accept(&mut self, pair: &str, table: &str, report: &ScreeningReport)
        -> ScreenerResult<()>;
}

/// Writes `<root>/<pair>/<table>.<ext>` with the fixed screening header
pub struct CsvDirectorySink {
    root: PathBuf,
    format: TableFormat,
    written: Vec<PathBuf>,
}

impl CsvDirectorySink {
    pub fn new(root: impl Into<PathBuf>, format: TableFormat) -> ScreenerResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self {
            root,
            format,
            written: Vec::new(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Files written so far, in write order
    pub fn written(&self) -> &[PathBuf] {
        &self.written
    }
}

impl ResultSink for CsvDirectorySink {
    fn accept(
        &mut self,
        pair: &str,
        table: &str,
        report: &ScreeningReport,
    ) -> ScreenerResult<()> {
        let dir = self.root.join(pair);
        fs::create_dir_all(&dir)?;

        let path = dir.join(format!("{}.{}", table, self.format.extension()));
        let file = File::create(&path)?;
        write_screening_table(BufWriter::new(file), &report.records, self.format)?;

        tracing::debug!("Wrote {} record(s) to {}", report.len(), path.display());
        self.written.push(path);
        Ok(())
    }
}

/// Keeps reports in memory, keyed by `(pair, table)`
#[derive(Debug, Default)]
pub struct MemorySink {
    pub tables: Vec<(String, String, ScreeningReport)>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, pair: &str, table: &str) -> Option<&ScreeningReport> {
        self.tables
            .iter()
            .find(|(p, t, _)| p == pair && t == table)
            .map(|(_, _, report)| report)
    }
}

impl ResultSink for MemorySink {
    fn accept(
        &mut self,
        pair: &str,
        table: &str,
        report: &ScreeningReport,
    ) -> ScreenerResult<()> {
        self.tables
            .push((pair.to_string(), table.to_string(), report.clone()));
        Ok(())
    }
}
