use std::path::PathBuf;
use tracing::{debug, info};

/// Default checkbox property that marks a page as published.
pub const DEFAULT_PUBLISH_PROPERTY: &str = "publish";

/// Default directory of the Astro blog collection.
pub const DEFAULT_OUTPUT_DIR: &str = "src/content/blog";

/// What to export and where to write it.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportConfig {
    pub database_id: String,
    pub output_dir: PathBuf,
    pub publish_property: String,
}

impl ExportConfig {
    pub fn new(database_id: impl Into<String>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            database_id: database_id.into(),
            output_dir: output_dir.into(),
            publish_property: DEFAULT_PUBLISH_PROPERTY.to_string(),
        }
    }

    pub fn trace_loaded(&self) {
        info!(
            database_id = %self.database_id,
            output_dir = %self.output_dir.display(),
            publish_property = %self.publish_property,
            "Loaded ExportConfig"
        );
        debug!(?self, "ExportConfig loaded (full debug)");
    }
}
