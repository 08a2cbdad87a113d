//! High-level pipeline: lists published pages and writes each one as Markdown.
//!
//! This module drives one full batch run:
//!   - Lists every page of the configured database whose publish checkbox is ticked
//!   - Converts each page with [`convert`](crate::convert::convert)
//!   - Writes the result to `<output_dir>/<file name>.md`
//!   - Aggregates and returns a report of what succeeded and failed.
//!
//! # Error Handling
//! Listing pages or creating the output directory aborts the run with an
//! [`ExportError`]. A page that fails to convert or write is logged, recorded in
//! the report, and skipped; the run carries on with the next page.
//!
//! # Ordering
//! Pages are processed one at a time, in the order the database returns them.

use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{error, info, warn};

use crate::config::ExportConfig;
use crate::contract::{BlockSource, FetchError, PageSource};
use crate::convert::convert_on;
use crate::fetch::fetch_published_pages;
use crate::metadata::today;
use crate::model::Page;

/// File stem used when a page has no usable title.
pub const UNTITLED: &str = "untitled";

const FORBIDDEN_FILENAME_CHARS: [char; 9] = ['/', '\\', ':', '*', '?', '"', '<', '>', '|'];

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to list published pages: {0}")]
    Listing(#[from] FetchError),

    #[error("failed to prepare {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Debug, Default)]
pub struct ExportReport {
    pub written: Vec<ExportedPage>,
    pub failed: Vec<FailedPage>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExportedPage {
    pub page_id: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FailedPage {
    pub page_id: String,
    pub reason: String,
}

/// Export every published page, dating front matter today.
pub async fn export_pages<P, B>(
    pages: &P,
    blocks: &B,
    config: &ExportConfig,
) -> Result<ExportReport, ExportError>
where
    P: PageSource + ?Sized,
    B: BlockSource + ?Sized,
{
    export_pages_on(pages, blocks, config, today()).await
}

/// Export every published page, dating front matter `date`.
pub async fn export_pages_on<P, B>(
    pages: &P,
    blocks: &B,
    config: &ExportConfig,
    date: NaiveDate,
) -> Result<ExportReport, ExportError>
where
    P: PageSource + ?Sized,
    B: BlockSource + ?Sized,
{
    info!(database_id = %config.database_id, "[EXPORT] Starting export");

    let published =
        fetch_published_pages(pages, &config.database_id, &config.publish_property).await?;

    ensure_dir(&config.output_dir)?;

    let mut report = ExportReport::default();
    for page in &published {
        let path = config.output_dir.join(format!("{}.md", page_file_stem(page)));
        match export_page(blocks, page, &path, date).await {
            Ok(()) => {
                info!(page_id = %page.id, path = %path.display(), "[EXPORT] Wrote page");
                report.written.push(ExportedPage {
                    page_id: page.id.clone(),
                    path,
                });
            }
            Err(reason) => {
                error!(page_id = %page.id, error = %reason, "[EXPORT][ERROR] Skipping page");
                report.failed.push(FailedPage {
                    page_id: page.id.clone(),
                    reason,
                });
            }
        }
    }

    if !report.failed.is_empty() {
        warn!(
            failed = report.failed.len(),
            written = report.written.len(),
            "[EXPORT] Some pages were skipped"
        );
    }
    info!(written = report.written.len(), "[EXPORT] Export complete");
    Ok(report)
}

async fn export_page<B>(blocks: &B, page: &Page, path: &Path, date: NaiveDate) -> Result<(), String>
where
    B: BlockSource + ?Sized,
{
    let markdown = convert_on(blocks, page, date)
        .await
        .map_err(|e| format!("conversion failed: {e}"))?;
    fs::write(path, markdown).map_err(|e| format!("writing {} failed: {e}", path.display()))
}

fn ensure_dir(dir: &Path) -> Result<(), ExportError> {
    if dir.exists() {
        return Ok(());
    }
    fs::create_dir_all(dir).map_err(|source| {
        error!(error = ?source, path = %dir.display(), "Failed to create output directory");
        ExportError::Io {
            path: dir.to_path_buf(),
            source,
        }
    })?;
    info!(path = %dir.display(), "Created output directory");
    Ok(())
}

/// File stem for a page: its title with path-unsafe characters replaced by `-`.
pub fn page_file_stem(page: &Page) -> String {
    page.title_text()
        .map(|title| sanitize_file_stem(&title))
        .unwrap_or_else(|| UNTITLED.to_string())
}

/// Replace characters that are not allowed in file names with `-`, keeping
/// case and inner spaces. Blank input becomes [`UNTITLED`].
pub fn sanitize_file_stem(title: &str) -> String {
    let sanitized = title.replace(&FORBIDDEN_FILENAME_CHARS[..], "-");
    let trimmed = sanitized.trim();
    if trimmed.is_empty() {
        UNTITLED.to_string()
    } else {
        trimmed.to_string()
    }
}
