#![doc = "Notion API client: implements the core listing contracts over HTTP."]
//
//! # Notion client (CLI <-> Core)
//!
//! Bridges [`notion_astro_core::contract`] to the Notion REST API with `reqwest`.
//!
//! - Construct with the integration token; the base URL is overridable for
//!   proxies and tests.
//! - `list_children` calls `GET /blocks/{id}/children`.
//! - `query_pages` calls `POST /databases/{id}/query` with a checkbox filter.
//!
//! No retries: a failed request surfaces as a [`FetchError`] and the export
//! loop decides what to do with it.

use async_trait::async_trait;
use notion_astro_core::contract::{Batch, BlockSource, FetchError, PageSource};
use notion_astro_core::model::{Block, Page};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};

pub const DEFAULT_BASE_URL: &str = "https://api.notion.com/v1";
pub const NOTION_VERSION: &str = "2022-06-28";
const PAGE_SIZE: u32 = 100;

pub struct NotionClient {
    http: Client,
    base_url: String,
    token: String,
}

impl NotionClient {
    pub fn new(token: impl Into<String>) -> Self {
        Self::with_base_url(token, DEFAULT_BASE_URL)
    }

    pub fn with_base_url(token: impl Into<String>, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string(); // avoid "//"
        Self {
            http: Client::new(),
            base_url,
            token: token.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .bearer_auth(&self.token)
            .header("Notion-Version", NOTION_VERSION)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<Batch<T>, FetchError> {
        let response = self.authorized(request).send().await.map_err(|e| {
            tracing::error!(error = ?e, "Failed to reach Notion API");
            FetchError::Transport(e.to_string())
        })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;
        if !status.is_success() {
            tracing::error!(status = %status, "Notion API returned error. Response body: {text}");
            return Err(FetchError::Status {
                status: status.as_u16(),
                body: text,
            });
        }

        decode_batch(&text)
    }
}

/// Decodes a Notion list envelope.
pub fn decode_batch<T: DeserializeOwned>(body: &str) -> Result<Batch<T>, FetchError> {
    serde_json::from_str(body).map_err(|e| {
        tracing::error!(error = ?e, "Failed to decode Notion list response");
        FetchError::from(e)
    })
}

/// Request body for a database query restricted to published pages.
pub fn query_body(publish_property: &str, cursor: Option<&str>) -> Value {
    let mut body = json!({
        "filter": {
            "property": publish_property,
            "checkbox": { "equals": true },
        },
        "page_size": PAGE_SIZE,
    });
    if let Some(cursor) = cursor {
        body["start_cursor"] = Value::from(cursor);
    }
    body
}

#[async_trait]
impl BlockSource for NotionClient {
    async fn list_children(
        &self,
        page_id: &str,
        cursor: Option<String>,
    ) -> Result<Batch<Block>, FetchError> {
        tracing::debug!(page_id, cursor = ?cursor, "Listing block children");
        let url = format!("{}/blocks/{}/children", self.base_url, page_id);
        let mut query = vec![("page_size", PAGE_SIZE.to_string())];
        if let Some(cursor) = cursor {
            query.push(("start_cursor", cursor));
        }
        self.send(self.http.get(&url).query(&query)).await
    }
}

#[async_trait]
impl PageSource for NotionClient {
    async fn query_pages(
        &self,
        database_id: &str,
        publish_property: &str,
        cursor: Option<String>,
    ) -> Result<Batch<Page>, FetchError> {
        tracing::debug!(database_id, cursor = ?cursor, "Querying database");
        let url = format!("{}/databases/{}/query", self.base_url, database_id);
        let body = query_body(publish_property, cursor.as_deref());
        self.send(self.http.post(&url).json(&body)).await
    }
}
