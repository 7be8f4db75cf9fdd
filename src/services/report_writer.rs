use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::domain::errors::AuditResult;
use crate::domain::models::{Bucket, Classification};

/// Writes one sorted username file per bucket and logs the summary.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    output_dir: PathBuf,
}

impl ReportWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn path(&self, bucket: Bucket) -> PathBuf {
        self.output_dir.join(bucket.file_name())
    }

    /// Remove report files left by a previous run. Best-effort.
    pub fn clear_previous(&self) {
        for bucket in Bucket::ALL {
            let path = self.path(bucket);
            match std::fs::remove_file(&path) {
                Ok(()) => debug!(path = %path.display(), "removed previous report"),
                Err(err) if err.kind() == io::ErrorKind::NotFound => {}
                Err(err) => debug!(path = %path.display(), error = %err, "could not remove previous report"),
            }
        }
    }

    /// Write all three buckets and log their summaries.
    pub fn write(&self, classification: &Classification) -> AuditResult<()> {
        info!(
            "Total unique users across GitHub orgs : {} (100.0%)",
            classification.total()
        );
        for bucket in Bucket::ALL {
            let users = classification.sorted(bucket);
            info!(
                "    {} : {} ({}%)",
                bucket.label(),
                users.len(),
                format_percentage(classification.percentage(bucket))
            );
            for user in &users {
                info!("        {user}");
            }
            write_lines(&self.path(bucket), &users)?;
        }
        Ok(())
    }
}

fn write_lines(path: &Path, lines: &[String]) -> io::Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    for line in lines {
        writeln!(writer, "{line}")?;
    }
    writer.flush()
}

/// Round to three decimals, dropping trailing zeros but keeping one
/// decimal place: `33.333`, `50.0`, `100.0`.
pub fn format_percentage(pct: f64) -> String {
    let rounded = format!("{pct:.3}");
    let trimmed = rounded.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{trimmed}0")
    } else {
        trimmed.to_string()
    }
}
