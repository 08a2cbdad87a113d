//! Notion objects as the converter sees them.
//!
//! These types deserialize straight from Notion API JSON. Decoding happens once,
//! at the client boundary; everything downstream pattern-matches on the variants
//! instead of probing the `type` discriminator by hand.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A database row fetched from Notion. Content is not owned: child blocks are
/// listed separately through a [`BlockSource`](crate::contract::BlockSource).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub id: String,
    #[serde(default)]
    pub properties: BTreeMap<String, PropertyValue>,
}

impl Page {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            properties: BTreeMap::new(),
        }
    }

    pub fn with_property(mut self, name: impl Into<String>, value: PropertyValue) -> Self {
        self.properties.insert(name.into(), value);
        self
    }

    /// Plain text of the page's title property, or `None` if it has none.
    pub fn title_text(&self) -> Option<String> {
        self.properties.values().find_map(|property| match property {
            PropertyValue::Title { title } => Some(plain_text(title)),
            _ => None,
        })
    }
}

/// One typed entry of a page's property bag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PropertyValue {
    Title { title: Vec<RichText> },
    RichText { rich_text: Vec<RichText> },
    MultiSelect { multi_select: Vec<SelectOption> },
    Checkbox { checkbox: bool },
    #[serde(other)]
    Unsupported,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectOption {
    pub name: String,
}

/// A styled run of text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RichText {
    pub plain_text: String,
    #[serde(default)]
    pub annotations: Annotations,
    #[serde(default)]
    pub href: Option<String>,
}

impl RichText {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            plain_text: text.into(),
            ..Self::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.annotations.bold = true;
        self
    }

    pub fn italic(mut self) -> Self {
        self.annotations.italic = true;
        self
    }

    pub fn code(mut self) -> Self {
        self.annotations.code = true;
        self
    }

    pub fn strikethrough(mut self) -> Self {
        self.annotations.strikethrough = true;
        self
    }

    pub fn link(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }
}

/// Inline style flags. Notion also sends `underline` and `color`; neither has a
/// Markdown rendering, so they are not kept.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub strikethrough: bool,
    pub code: bool,
}

/// Rich-text payload shared by every text-bearing block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextBlock {
    #[serde(default)]
    pub rich_text: Vec<RichText>,
}

impl TextBlock {
    pub fn new(rich_text: Vec<RichText>) -> Self {
        Self { rich_text }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CodeBlock {
    #[serde(default)]
    pub rich_text: Vec<RichText>,
    #[serde(default)]
    pub language: String,
}

/// A content block. Block kinds without a Markdown rendering decode to
/// [`Block::Unsupported`] and are dropped when rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Paragraph {
        paragraph: TextBlock,
    },
    #[serde(rename = "heading_1")]
    Heading1 {
        heading_1: TextBlock,
    },
    #[serde(rename = "heading_2")]
    Heading2 {
        heading_2: TextBlock,
    },
    #[serde(rename = "heading_3")]
    Heading3 {
        heading_3: TextBlock,
    },
    BulletedListItem {
        bulleted_list_item: TextBlock,
    },
    NumberedListItem {
        numbered_list_item: TextBlock,
    },
    Code {
        code: CodeBlock,
    },
    Quote {
        quote: TextBlock,
    },
    #[serde(other)]
    Unsupported,
}

impl Block {
    pub fn paragraph(rich_text: Vec<RichText>) -> Self {
        Block::Paragraph {
            paragraph: TextBlock::new(rich_text),
        }
    }

    pub fn heading(level: u8, rich_text: Vec<RichText>) -> Self {
        let text = TextBlock::new(rich_text);
        match level {
            1 => Block::Heading1 { heading_1: text },
            2 => Block::Heading2 { heading_2: text },
            _ => Block::Heading3 { heading_3: text },
        }
    }

    pub fn bulleted(rich_text: Vec<RichText>) -> Self {
        Block::BulletedListItem {
            bulleted_list_item: TextBlock::new(rich_text),
        }
    }

    pub fn numbered(rich_text: Vec<RichText>) -> Self {
        Block::NumberedListItem {
            numbered_list_item: TextBlock::new(rich_text),
        }
    }

    pub fn code(language: impl Into<String>, rich_text: Vec<RichText>) -> Self {
        Block::Code {
            code: CodeBlock {
                rich_text,
                language: language.into(),
            },
        }
    }

    pub fn quote(rich_text: Vec<RichText>) -> Self {
        Block::Quote {
            quote: TextBlock::new(rich_text),
        }
    }
}

/// Concatenated plain text of the spans, ignoring all styling.
pub fn plain_text(spans: &[RichText]) -> String {
    spans.iter().map(|span| span.plain_text.as_str()).collect()
}
