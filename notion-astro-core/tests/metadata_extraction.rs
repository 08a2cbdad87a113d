use chrono::NaiveDate;

use notion_astro_core::metadata::{extract_metadata, extract_metadata_on, today};
use notion_astro_core::model::{Page, PropertyValue, RichText, SelectOption};

fn date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()
}

fn title(text: &str) -> PropertyValue {
    PropertyValue::Title {
        title: vec![RichText::plain(text)],
    }
}

#[test]
fn defaults_for_a_bare_page() {
    let metadata = extract_metadata_on(&Page::new("p"), date());
    assert_eq!(metadata.title, "");
    assert_eq!(metadata.description, None);
    assert_eq!(metadata.date, date());
    assert!(!metadata.draft);
    assert_eq!(metadata.tags, None);
}

#[test]
fn title_is_plain_text_of_all_spans() {
    let page = Page::new("p").with_property(
        "Name",
        PropertyValue::Title {
            title: vec![
                RichText::plain("Hello ").bold(),
                RichText::plain("World").link("https://example.com"),
            ],
        },
    );
    assert_eq!(extract_metadata_on(&page, date()).title, "Hello World");
}

#[test]
fn empty_title_property_keeps_default() {
    let page = Page::new("p").with_property("title", PropertyValue::Title { title: vec![] });
    assert_eq!(extract_metadata_on(&page, date()).title, "");
}

#[test]
fn description_property_name_is_case_insensitive() {
    for name in ["description", "Description", "DESCRIPTION"] {
        let page = Page::new("p").with_property(
            name,
            PropertyValue::RichText {
                rich_text: vec![RichText::plain("About "), RichText::plain("it").italic()],
            },
        );
        assert_eq!(
            extract_metadata_on(&page, date()).description.as_deref(),
            Some("About it"),
            "property named {name}"
        );
    }
}

#[test]
fn other_rich_text_properties_are_ignored() {
    let page = Page::new("p").with_property(
        "Summary",
        PropertyValue::RichText {
            rich_text: vec![RichText::plain("not a description")],
        },
    );
    assert_eq!(extract_metadata_on(&page, date()).description, None);
}

#[test]
fn tags_keep_source_order() {
    let page = Page::new("p").with_property(
        "Tags",
        PropertyValue::MultiSelect {
            multi_select: ["zeta", "alpha", "mid"]
                .into_iter()
                .map(|name| SelectOption {
                    name: name.to_string(),
                })
                .collect(),
        },
    );
    assert_eq!(
        extract_metadata_on(&page, date()).tags,
        Some(vec!["zeta".to_string(), "alpha".to_string(), "mid".to_string()])
    );
}

#[test]
fn checkbox_and_unsupported_properties_do_not_touch_metadata() {
    let page = Page::new("p")
        .with_property("publish", PropertyValue::Checkbox { checkbox: true })
        .with_property("Created", PropertyValue::Unsupported)
        .with_property("title", title("Kept"));
    let metadata = extract_metadata_on(&page, date());
    assert_eq!(metadata.title, "Kept");
    assert!(!metadata.draft);
}

#[test]
fn undated_extraction_uses_today() {
    let page = Page::new("p").with_property("title", title("Today"));
    let before = today();
    let date = extract_metadata(&page).date;
    let after = today();
    // The run may cross midnight UTC between the two readings.
    assert!(before <= date && date <= after, "{before} <= {date} <= {after}");
}

#[test]
fn page_decodes_from_notion_json() {
    let json = r#"{
        "object": "page",
        "id": "page-id",
        "archived": false,
        "properties": {
            "title": {"id": "title", "type": "title",
                      "title": [{"type": "text", "text": {"content": "Test Page"},
                                 "plain_text": "Test Page", "annotations": {}}]},
            "Description": {"id": "d", "type": "rich_text",
                            "rich_text": [{"plain_text": "Short", "href": null}]},
            "Tags": {"id": "t", "type": "multi_select",
                     "multi_select": [{"id": "1", "name": "rust", "color": "red"}]},
            "publish": {"id": "p", "type": "checkbox", "checkbox": true},
            "Date": {"id": "x", "type": "date", "date": {"start": "2024-01-01"}}
        }
    }"#;

    let page: Page = serde_json::from_str(json).expect("page should decode");
    assert_eq!(page.id, "page-id");
    assert_eq!(page.title_text().as_deref(), Some("Test Page"));
    assert_eq!(
        page.properties.get("publish"),
        Some(&PropertyValue::Checkbox { checkbox: true })
    );
    assert_eq!(page.properties.get("Date"), Some(&PropertyValue::Unsupported));

    let metadata = extract_metadata_on(&page, date());
    assert_eq!(metadata.title, "Test Page");
    assert_eq!(metadata.description.as_deref(), Some("Short"));
    assert_eq!(metadata.tags, Some(vec!["rust".to_string()]));
}
