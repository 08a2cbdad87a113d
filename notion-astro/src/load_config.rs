/// `load_config` module: builds the [`ExportConfig`] and Notion credentials from an optional YAML file and the environment.
///
/// This module is the only place where user-supplied YAML and environment variables are read.
///
/// # Sources, in order of precedence
/// - `OUTPUT_DIR` overrides `output_dir` from the file
/// - `database_id` from the file, else `NOTION_DATABASE_ID`
/// - `publish_property` from the file, else `publish`
/// - `NOTION_TOKEN` is a secret and is only ever read from the environment
/// - `NOTION_API_BASE_URL` optionally points the client somewhere other than api.notion.com
///
/// # Errors
/// All errors use `anyhow::Error` and are surfaced at the CLI boundary.
use crate::notion::DEFAULT_BASE_URL;
use anyhow::Result;
use notion_astro_core::config::{ExportConfig, DEFAULT_OUTPUT_DIR, DEFAULT_PUBLISH_PROPERTY};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Fully resolved settings for one export run.
#[derive(Debug)]
pub struct CliConfig {
    pub export: ExportConfig,
    pub token: String,
    pub api_base_url: String,
}

/// The YAML file schema. Every key is optional.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    pub output_dir: Option<PathBuf>,
    pub database_id: Option<String>,
    pub publish_property: Option<String>,
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Reads and parses a YAML config file.
pub fn read_file_config<P: AsRef<Path>>(path: P) -> Result<FileConfig> {
    let path_ref = path.as_ref();
    info!(config_path = ?path_ref, "Loading configuration from file");

    let config_content = match fs::read_to_string(path_ref) {
        Ok(content) => content,
        Err(e) => {
            error!(error = ?e, config_path = ?path_ref, "Failed to read config file");
            return Err(anyhow::anyhow!(
                "Failed to read config file {:?}: {}",
                path_ref,
                e
            ));
        }
    };

    // An empty file is a valid, empty config.
    if config_content.trim().is_empty() {
        return Ok(FileConfig::default());
    }

    match serde_yaml::from_str(&config_content) {
        Ok(conf) => {
            info!(config_path = ?path_ref, "Parsed config YAML successfully");
            Ok(conf)
        }
        Err(e) => {
            error!(error = ?e, config_path = ?path_ref, "Failed to parse config YAML");
            Err(anyhow::anyhow!("Failed to parse config YAML: {e}"))
        }
    }
}

/// Merges the optional config file with the environment.
pub fn load_config(path: Option<&Path>) -> Result<CliConfig> {
    let file = match path {
        Some(path) => read_file_config(path)?,
        None => FileConfig::default(),
    };

    let token = match non_empty_env("NOTION_TOKEN") {
        Some(token) => {
            info!("NOTION_TOKEN found in env");
            token
        }
        None => {
            error!("NOTION_TOKEN environment variable not set");
            anyhow::bail!("Please set NOTION_TOKEN in the environment or .env file");
        }
    };

    let database_id = match file.database_id.or_else(|| non_empty_env("NOTION_DATABASE_ID")) {
        Some(id) => id,
        None => {
            error!("No database id in config file or NOTION_DATABASE_ID");
            anyhow::bail!(
                "Please set database_id in the config file or NOTION_DATABASE_ID in the environment"
            );
        }
    };

    let output_dir = non_empty_env("OUTPUT_DIR")
        .map(PathBuf::from)
        .or(file.output_dir)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR));

    let publish_property = file
        .publish_property
        .unwrap_or_else(|| DEFAULT_PUBLISH_PROPERTY.to_string());

    let export = ExportConfig {
        database_id,
        output_dir,
        publish_property,
    };
    export.trace_loaded();

    let api_base_url =
        non_empty_env("NOTION_API_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    Ok(CliConfig {
        export,
        token,
        api_base_url,
    })
}
