//! Report export. Lays out the summary and writes one timestamped file per call.

use crate::domain::{DomainError, ReportDocument};
use crate::ports::ReportWriterPort;
use chrono::{DateTime, Local};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::fs;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tracing::{info, warn};

/// Filename prefix for exported reports.
pub const REPORT_PREFIX: &str = "ShopGPT_Summary";

/// Upper bound on same-second name suffixes.
const MAX_NAME_ATTEMPTS: u32 = 1000;

/// Source of the current time, injectable for tests.
pub type Clock = Arc<dyn Fn() -> DateTime<Local> + Send + Sync>;

/// Exports reports into `reports_dir`.
///
/// Stateless between calls. Same-second exports get `_2`, `_3`, ... suffixes;
/// existing files are never overwritten.
pub struct ReportService {
    writer: Arc<dyn ReportWriterPort>,
    reports_dir: PathBuf,
    clock: Clock,
}

impl ReportService {
    pub fn new(writer: Arc<dyn ReportWriterPort>, reports_dir: PathBuf) -> Self {
        Self::with_clock(writer, reports_dir, Arc::new(Local::now))
    }

    pub fn with_clock(
        writer: Arc<dyn ReportWriterPort>,
        reports_dir: PathBuf,
        clock: Clock,
    ) -> Self {
        Self {
            writer,
            reports_dir,
            clock,
        }
    }

    /// Export one report. Returns the path of the created file.
    pub async fn export(
        &self,
        category: &str,
        min_price: f64,
        max_price: f64,
        summary: &str,
    ) -> Result<PathBuf, DomainError> {
        let document = ReportDocument::new(category, min_price, max_price, summary);
        let bytes = self.writer.render(&document.layout())?;

        fs::create_dir_all(&self.reports_dir).await.map_err(|e| {
            DomainError::Write(format!("create {}: {}", self.reports_dir.display(), e))
        })?;

        let stamp = (self.clock)().format("%Y%m%d_%H%M%S").to_string();
        let (path, mut file) = self.create_unique(&stamp).await?;

        let written = match write_report(&mut file, &bytes).await {
            Ok(()) => file.sync_all().await,
            Err(e) => Err(e),
        };
        drop(file);
        remove_on_error(&path, written).await?;

        info!(
            path = %path.display(),
            bytes = bytes.len(),
            category,
            "report exported"
        );
        Ok(path)
    }

    fn file_name(&self, stamp: &str, attempt: u32) -> String {
        let ext = self.writer.extension();
        if attempt <= 1 {
            format!("{}_{}.{}", REPORT_PREFIX, stamp, ext)
        } else {
            format!("{}_{}_{}.{}", REPORT_PREFIX, stamp, attempt, ext)
        }
    }

    /// Create the first free name for `stamp`, atomically.
    async fn create_unique(&self, stamp: &str) -> Result<(PathBuf, fs::File), DomainError> {
        for attempt in 1..=MAX_NAME_ATTEMPTS {
            let path = self.reports_dir.join(self.file_name(stamp, attempt));
            match create_new(&path).await {
                Ok(file) => return Ok((path, file)),
                Err(e) if e.kind() == ErrorKind::AlreadyExists => continue,
                Err(e) => {
                    return Err(DomainError::Write(format!("create {}: {}", path.display(), e)));
                }
            }
        }
        Err(DomainError::Write(format!(
            "no free report name for timestamp {}",
            stamp
        )))
    }
}

async fn create_new(path: &Path) -> std::io::Result<fs::File> {
    fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await
}

async fn write_report<W: AsyncWrite + Unpin>(out: &mut W, bytes: &[u8]) -> std::io::Result<()> {
    out.write_all(bytes).await?;
    out.flush().await
}

/// Delete the report at `path` if writing it failed, so no partial file stays behind.
async fn remove_on_error(path: &Path, written: std::io::Result<()>) -> Result<(), DomainError> {
    match written {
        Ok(()) => Ok(()),
        Err(e) => {
            if let Err(remove_err) = fs::remove_file(path).await {
                warn!(path = %path.display(), error = %remove_err, "failed to remove partial report");
            }
            Err(DomainError::Write(format!("write {}: {}", path.display(), e)))
        }
    }
}
