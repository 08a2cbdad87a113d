//! Markdown rendering of rich text and blocks.
//!
//! Output is not escaped: span text is emitted exactly as Notion stores it.

use crate::model::{Block, RichText};

/// Render spans into one Markdown string, concatenated with no separator.
///
/// Markers nest in a fixed order, innermost first: code, bold, italic,
/// strikethrough, then the link wraps everything.
pub fn render_rich_text(spans: &[RichText]) -> String {
    spans.iter().map(render_span).collect()
}

fn render_span(span: &RichText) -> String {
    let styles = &span.annotations;
    let mut content = span.plain_text.clone();

    if styles.code {
        content = format!("`{content}`");
    }
    if styles.bold {
        content = format!("**{content}**");
    }
    if styles.italic {
        content = format!("*{content}*");
    }
    if styles.strikethrough {
        content = format!("~~{content}~~");
    }
    if let Some(href) = &span.href {
        content = format!("[{content}]({href})");
    }

    content
}

/// Render one block, including its trailing newlines. Unsupported blocks
/// render to the empty string.
pub fn render_block(block: &Block) -> String {
    match block {
        Block::Paragraph { paragraph } => {
            format!("{}\n\n", render_rich_text(&paragraph.rich_text))
        }
        Block::Heading1 { heading_1 } => {
            format!("# {}\n\n", render_rich_text(&heading_1.rich_text))
        }
        Block::Heading2 { heading_2 } => {
            format!("## {}\n\n", render_rich_text(&heading_2.rich_text))
        }
        Block::Heading3 { heading_3 } => {
            format!("### {}\n\n", render_rich_text(&heading_3.rich_text))
        }
        Block::BulletedListItem { bulleted_list_item } => {
            format!("- {}\n", render_rich_text(&bulleted_list_item.rich_text))
        }
        // Always `1.`: Markdown renderers renumber ordered lists themselves.
        Block::NumberedListItem { numbered_list_item } => {
            format!("1. {}\n", render_rich_text(&numbered_list_item.rich_text))
        }
        Block::Code { code } => format!(
            "```{}\n{}\n```\n\n",
            code.language,
            render_rich_text(&code.rich_text)
        ),
        Block::Quote { quote } => format!("> {}\n\n", render_rich_text(&quote.rich_text)),
        Block::Unsupported => String::new(),
    }
}

/// Render blocks in order and concatenate the fragments.
pub fn render_blocks(blocks: &[Block]) -> String {
    blocks.iter().map(render_block).collect()
}
