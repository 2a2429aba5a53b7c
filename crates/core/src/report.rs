use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize)]
pub struct ProcessedEntry {
    pub path: PathBuf,
    pub outcome: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SkipEntry {
    pub path: PathBuf,
    pub reason: String,
}

// A file lands in exactly one of the two lists, in scan order.
#[derive(Debug, Clone, Default, Serialize)]
pub struct OutcomeLedger {
    processed: Vec<ProcessedEntry>,
    skipped: Vec<SkipEntry>,
}

impl OutcomeLedger {
    pub fn record_processed(&mut self, path: &Path, outcome: impl Into<String>) {
        self.processed.push(ProcessedEntry {
            path: path.to_path_buf(),
            outcome: outcome.into(),
        });
    }

    pub fn record_skip(&mut self, path: &Path, reason: impl Into<String>) {
        self.skipped.push(SkipEntry {
            path: path.to_path_buf(),
            reason: reason.into(),
        });
    }

    pub fn processed(&self) -> &[ProcessedEntry] {
        &self.processed
    }

    pub fn skipped(&self) -> &[SkipEntry] {
        &self.skipped
    }
}

pub fn print_skip_report(ledger: &OutcomeLedger) {
    println!("\nFiles skipped: {}:", ledger.skipped().len());
    for entry in ledger.skipped() {
        println!("{} -> {}", entry.path.display(), entry.reason);
    }
}

pub fn print_shift_summary(ledger: &OutcomeLedger) {
    println!("\nFiles adjusted: {}", ledger.processed().len());
    println!("Files skipped: {}", ledger.skipped().len());
}
