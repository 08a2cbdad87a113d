use chrono::NaiveDate;
use regex::Regex;

use notion_astro_core::contract::{Batch, FetchError, MockBlockSource};
use notion_astro_core::convert::{convert, convert_on};
use notion_astro_core::model::{Block, Page, PropertyValue, RichText, SelectOption};

fn frozen_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
}

fn test_page() -> Page {
    Page::new("page-id").with_property(
        "title",
        PropertyValue::Title {
            title: vec![RichText::plain("Test Page")],
        },
    )
}

fn source_with(blocks: Vec<Block>) -> MockBlockSource {
    let mut source = MockBlockSource::new();
    source
        .expect_list_children()
        .withf(|page_id, cursor| page_id == "page-id" && cursor.is_none())
        .returning(move |_, _| Ok(Batch::last(blocks.clone())));
    source
}

#[tokio::test]
async fn simple_page_with_title_and_no_blocks() {
    let source = source_with(vec![]);
    let markdown = convert(&source, &test_page()).await.expect("convert");

    assert!(markdown.starts_with("---\ntitle: \"Test Page\"\n"));
    assert!(markdown.contains("draft: false\n"));
    assert!(Regex::new(r"(?m)^date: \d{4}-\d{2}-\d{2}$")
        .unwrap()
        .is_match(&markdown));
    assert!(
        markdown.ends_with("---\n\n"),
        "body should be empty: {markdown:?}"
    );
}

#[tokio::test]
async fn exact_output_for_empty_page() {
    let source = source_with(vec![]);
    let markdown = convert_on(&source, &test_page(), frozen_date())
        .await
        .unwrap();
    assert_eq!(
        markdown,
        "---\ntitle: \"Test Page\"\ndescription: \"...\"\ndate: 2024-06-01\ndraft: false\n---\n\n"
    );
}

#[tokio::test]
async fn rich_text_formatting_in_body() {
    let source = source_with(vec![Block::paragraph(vec![
        RichText::plain("Bold text").bold(),
        RichText::plain(" and "),
        RichText::plain("italic text").italic(),
    ])]);

    let markdown = convert_on(&source, &test_page(), frozen_date())
        .await
        .unwrap();
    let body = markdown.split_once("---\n\n").map(|(_, body)| body).unwrap();
    assert!(body.starts_with("**Bold text** and *italic text*\n\n"));
}

#[tokio::test]
async fn various_block_types_render_in_order() {
    let source = source_with(vec![
        Block::paragraph(vec![RichText::plain("Normal text")]),
        Block::heading(1, vec![RichText::plain("Heading 1")]),
        Block::Unsupported,
        Block::code("ts", vec![RichText::plain("let x = 1;")]),
    ]);

    let markdown = convert_on(&source, &test_page(), frozen_date())
        .await
        .unwrap();
    assert!(markdown.ends_with("Normal text\n\n# Heading 1\n\n```ts\nlet x = 1;\n```\n\n"));
}

#[tokio::test]
async fn description_is_derived_from_body_when_missing() {
    let long = format!("Some *styled* text that runs very long {}", "x".repeat(100));
    let source = source_with(vec![
        Block::heading(1, vec![RichText::plain("Heading")]),
        Block::paragraph(vec![RichText::plain(long)]),
    ]);

    let markdown = convert_on(&source, &test_page(), frozen_date())
        .await
        .unwrap();
    let line = markdown
        .lines()
        .find(|line| line.starts_with("description: "))
        .expect("description line");
    let value: String = serde_json::from_str(line.trim_start_matches("description: ")).unwrap();

    assert!(value.ends_with("..."));
    assert_eq!(value.chars().count(), 73);
    assert!(value.starts_with("Heading Some styled text that runs very long x"));
    assert!(!value.contains(['#', '*', '\n']));
}

#[tokio::test]
async fn explicit_description_is_kept() {
    let page = test_page().with_property(
        "Description",
        PropertyValue::RichText {
            rich_text: vec![RichText::plain("Hand written")],
        },
    );
    let source = source_with(vec![Block::paragraph(vec![RichText::plain("ignored")])]);

    let markdown = convert_on(&source, &page, frozen_date()).await.unwrap();
    assert!(markdown.contains("description: \"Hand written\"\n"));
}

#[tokio::test]
async fn empty_explicit_description_is_derived() {
    let page = test_page().with_property(
        "description",
        PropertyValue::RichText { rich_text: vec![] },
    );
    let source = source_with(vec![Block::paragraph(vec![RichText::plain("Body")])]);

    let markdown = convert_on(&source, &page, frozen_date()).await.unwrap();
    assert!(markdown.contains("description: \"Body...\"\n"));
}

#[tokio::test]
async fn full_front_matter_layout() {
    let page = test_page().with_property(
        "Tags",
        PropertyValue::MultiSelect {
            multi_select: vec![
                SelectOption { name: "a".into() },
                SelectOption { name: "b".into() },
            ],
        },
    );
    let source = source_with(vec![Block::quote(vec![RichText::plain("Quoted")])]);

    let markdown = convert_on(&source, &page, frozen_date()).await.unwrap();
    assert_eq!(
        markdown,
        "---\n\
         title: \"Test Page\"\n\
         description: \"Quoted...\"\n\
         date: 2024-06-01\n\
         draft: false\n\
         tags: [\"a\", \"b\"]\n\
         ---\n\n\
         > Quoted\n\n"
    );
}

#[tokio::test]
async fn empty_title_is_emitted_literally() {
    let page = Page::new("page-id").with_property("title", PropertyValue::Title { title: vec![] });
    let source = source_with(vec![]);

    let markdown = convert_on(&source, &page, frozen_date()).await.unwrap();
    assert!(markdown.starts_with("---\ntitle: \"\"\n"));
}

#[tokio::test]
async fn conversion_is_idempotent_with_a_frozen_date() {
    let blocks = vec![
        Block::heading(2, vec![RichText::plain("Same")]),
        Block::bulleted(vec![RichText::plain("input").code()]),
    ];
    let first = convert_on(&source_with(blocks.clone()), &test_page(), frozen_date())
        .await
        .unwrap();
    let second = convert_on(&source_with(blocks), &test_page(), frozen_date())
        .await
        .unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn fetch_failure_fails_the_whole_conversion() {
    let mut source = MockBlockSource::new();
    source
        .expect_list_children()
        .returning(|_, _| Err(FetchError::Transport("connection reset".into())));

    let err = convert_on(&source, &test_page(), frozen_date())
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Transport(_)));
}
