use chrono::{NaiveDate, Utc};
use tracing::debug;

use crate::model::{plain_text, Page, PropertyValue};

/// Front-matter fields for one page.
///
/// Built fresh for every conversion and consumed by
/// [`generate_front_matter`](crate::front_matter::generate_front_matter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub title: String,
    /// `None` until a description property is read or one is derived.
    pub description: Option<String>,
    pub date: NaiveDate,
    pub draft: bool,
    pub tags: Option<Vec<String>>,
}

impl Metadata {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            title: String::new(),
            description: None,
            date,
            draft: false,
            tags: None,
        }
    }

    pub fn has_description(&self) -> bool {
        self.description.as_deref().is_some_and(|d| !d.is_empty())
    }
}

/// Today's date in UTC, as stamped into front matter.
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Read the page's properties into [`Metadata`], dated today.
pub fn extract_metadata(page: &Page) -> Metadata {
    extract_metadata_on(page, today())
}

/// Read the page's properties into [`Metadata`] with a fixed date.
///
/// - `title`: plain text of a non-empty title property.
/// - `description`: plain text of a rich-text property named "description",
///   compared case-insensitively.
/// - `tags`: option names of a multi-select property, in source order.
///
/// Later matches overwrite earlier ones.
pub fn extract_metadata_on(page: &Page, date: NaiveDate) -> Metadata {
    let mut metadata = Metadata::new(date);

    for (name, property) in &page.properties {
        match property {
            PropertyValue::Title { title } if !title.is_empty() => {
                metadata.title = plain_text(title);
            }
            PropertyValue::RichText { rich_text } if name.eq_ignore_ascii_case("description") => {
                metadata.description = Some(plain_text(rich_text));
            }
            PropertyValue::MultiSelect { multi_select } => {
                metadata.tags = Some(multi_select.iter().map(|tag| tag.name.clone()).collect());
            }
            _ => {}
        }
    }

    debug!(
        page_id = %page.id,
        title = %metadata.title,
        has_description = metadata.has_description(),
        tags = metadata.tags.as_ref().map_or(0, Vec::len),
        "Extracted page metadata"
    );
    metadata
}
