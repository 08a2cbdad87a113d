//! # contract: collaborators the conversion pipeline depends on
//!
//! The core never talks HTTP. It asks a [`BlockSource`] for the children of a
//! page and a [`PageSource`] for the rows of a database, one cursor-delimited
//! batch at a time. The CLI crate implements both against the Notion API; tests
//! use the `mockall` mocks generated here.
//!
//! ## Pagination contract
//! - The first call passes `cursor = None`.
//! - Each response carries `has_more` and, when more remain, the opaque
//!   `next_cursor` to pass on the following call.
//! - Implementations must be idempotent per cursor and must eventually report
//!   `has_more = false` for a finite listing.
//!
//! ## Mocking
//! The traits carry `automock` under `cfg(test)` or the `test-export-mocks`
//! feature, so dependents can script deterministic responses.

use async_trait::async_trait;
use mockall::automock;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::model::{Block, Page};

/// One batch of a cursor-paginated listing, as returned by Notion list endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Batch<T> {
    pub results: Vec<T>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub next_cursor: Option<String>,
}

impl<T> Batch<T> {
    /// The final batch of a listing.
    pub fn last(results: Vec<T>) -> Self {
        Self {
            results,
            has_more: false,
            next_cursor: None,
        }
    }

    /// A batch followed by more under `cursor`.
    pub fn more(results: Vec<T>, cursor: impl Into<String>) -> Self {
        Self {
            results,
            has_more: true,
            next_cursor: Some(cursor.into()),
        }
    }
}

/// Failure of a listing call. Never retried by the core.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("content API returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("request to content API failed: {0}")]
    Transport(String),

    #[error("could not decode content API response: {0}")]
    Decode(String),

    #[error("listing reported more results but no next cursor")]
    MissingCursor,
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::Decode(e.to_string())
    }
}

/// Lists the direct child blocks of a page.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait BlockSource: Send + Sync {
    /// Fetch one batch of children of `page_id`, starting after `cursor`.
    async fn list_children(
        &self,
        page_id: &str,
        cursor: Option<String>,
    ) -> Result<Batch<Block>, FetchError>;
}

/// Lists the pages of a database that match a publication filter.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch one batch of pages of `database_id` whose checkbox property
    /// `publish_property` is ticked, starting after `cursor`.
    async fn query_pages(
        &self,
        database_id: &str,
        publish_property: &str,
        cursor: Option<String>,
    ) -> Result<Batch<Page>, FetchError>;
}
