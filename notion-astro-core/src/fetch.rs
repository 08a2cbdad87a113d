//! Cursor-paginated retrieval of blocks and pages.
//!
//! Listings are exposed as lazy streams of batches: one call per batch, strictly
//! in order, ending after the first batch that reports `has_more = false`.
//! Callers that need everything collect the stream; tests can bound it with
//! `StreamExt::take` to catch a collaborator that never reports exhaustion.

use futures::stream::{self, Stream, TryStreamExt};
use std::future::Future;
use tracing::{debug, info};

use crate::contract::{Batch, BlockSource, FetchError, PageSource};
use crate::model::{Block, Page};

enum Cursor {
    Start,
    After(String),
}

impl Cursor {
    fn into_token(self) -> Option<String> {
        match self {
            Cursor::Start => None,
            Cursor::After(token) => Some(token),
        }
    }
}

/// Turn a batch-listing call into a stream of batch results.
///
/// `call` receives the cursor for each request (`None` first). A batch that
/// claims `has_more` without a `next_cursor` ends the stream with
/// [`FetchError::MissingCursor`].
pub fn paginate<T, F, Fut>(call: F) -> impl Stream<Item = Result<Vec<T>, FetchError>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Batch<T>, FetchError>>,
{
    stream::try_unfold(
        (call, Some(Cursor::Start), 0usize),
        |(mut call, cursor, index)| async move {
            let Some(cursor) = cursor else {
                return Ok(None);
            };
            let batch = call(cursor.into_token()).await?;
            debug!(
                batch = index,
                results = batch.results.len(),
                has_more = batch.has_more,
                "Fetched batch"
            );
            let next = match (batch.has_more, batch.next_cursor) {
                (false, _) => None,
                (true, Some(token)) => Some(Cursor::After(token)),
                (true, None) => return Err(FetchError::MissingCursor),
            };
            Ok::<_, FetchError>(Some((batch.results, (call, next, index + 1))))
        },
    )
}

/// Every direct child block of `page_id`, in source order.
pub async fn fetch_all_blocks<S>(source: &S, page_id: &str) -> Result<Vec<Block>, FetchError>
where
    S: BlockSource + ?Sized,
{
    let blocks: Vec<Block> = paginate(move |cursor| source.list_children(page_id, cursor))
        .try_concat()
        .await?;
    debug!(page_id, blocks = blocks.len(), "Fetched all blocks for page");
    Ok(blocks)
}

/// Every page of `database_id` whose `publish_property` checkbox is ticked.
pub async fn fetch_published_pages<S>(
    source: &S,
    database_id: &str,
    publish_property: &str,
) -> Result<Vec<Page>, FetchError>
where
    S: PageSource + ?Sized,
{
    let pages: Vec<Page> =
        paginate(move |cursor| source.query_pages(database_id, publish_property, cursor))
            .try_concat()
            .await?;
    info!(
        database_id,
        publish_property,
        pages = pages.len(),
        "Listed published pages"
    );
    Ok(pages)
}
