//! Page → Markdown conversion pipeline.
//!
//! fetch blocks → extract metadata → render body → derive description when
//! missing → front matter + body. Only the block fetch can fail; nothing is
//! returned unless the whole page converts.

use chrono::NaiveDate;
use tracing::{info, instrument};

use crate::contract::{BlockSource, FetchError};
use crate::description::derive_description;
use crate::fetch::fetch_all_blocks;
use crate::front_matter::generate_front_matter;
use crate::metadata::{extract_metadata_on, today};
use crate::model::Page;
use crate::render::render_blocks;

/// Convert a page to Markdown with front matter dated today.
pub async fn convert<S>(source: &S, page: &Page) -> Result<String, FetchError>
where
    S: BlockSource + ?Sized,
{
    convert_on(source, page, today()).await
}

/// Convert a page to Markdown with front matter dated `date`.
#[instrument(skip_all, fields(page_id = %page.id))]
pub async fn convert_on<S>(source: &S, page: &Page, date: NaiveDate) -> Result<String, FetchError>
where
    S: BlockSource + ?Sized,
{
    let blocks = fetch_all_blocks(source, &page.id).await?;
    let mut metadata = extract_metadata_on(page, date);
    let body = render_blocks(&blocks);

    if !metadata.has_description() {
        metadata.description = Some(derive_description(&body));
    }

    let mut markdown = generate_front_matter(&metadata);
    markdown.push_str(&body);

    info!(
        blocks = blocks.len(),
        bytes = markdown.len(),
        "Converted page to markdown"
    );
    Ok(markdown)
}
