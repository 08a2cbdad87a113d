//! YAML-style front matter for Astro content collections.
//!
//! The textual layout is a compatibility surface for the site build: keys are
//! emitted in a fixed order (`title`, `description`, `date`, `draft`, `tags`)
//! with per-key quoting.

use serde_json::Value;

use crate::metadata::Metadata;

/// A front-matter value, tagged by how it must be printed.
#[derive(Debug, Clone, PartialEq)]
pub enum FrontMatterValue {
    /// Printed as a JSON literal: strings quoted, booleans bare.
    Literal(Value),
    /// Printed raw, unquoted.
    Date(String),
    /// Printed as `["a", "b"]`.
    List(Vec<String>),
}

impl Metadata {
    /// Front-matter entries in emission order. `description` and `tags` are
    /// present only when set.
    pub fn entries(&self) -> Vec<(&'static str, FrontMatterValue)> {
        let mut entries = vec![(
            "title",
            FrontMatterValue::Literal(Value::from(self.title.as_str())),
        )];
        if let Some(description) = &self.description {
            entries.push((
                "description",
                FrontMatterValue::Literal(Value::from(description.as_str())),
            ));
        }
        entries.push((
            "date",
            FrontMatterValue::Date(self.date.format("%Y-%m-%d").to_string()),
        ));
        entries.push(("draft", FrontMatterValue::Literal(Value::Bool(self.draft))));
        if let Some(tags) = &self.tags {
            entries.push(("tags", FrontMatterValue::List(tags.clone())));
        }
        entries
    }
}

impl FrontMatterValue {
    fn render(&self) -> String {
        match self {
            FrontMatterValue::Literal(value) => value.to_string(),
            FrontMatterValue::Date(date) => date.clone(),
            FrontMatterValue::List(items) => {
                let quoted: Vec<String> = items
                    .iter()
                    .map(|item| Value::from(item.as_str()).to_string())
                    .collect();
                format!("[{}]", quoted.join(", "))
            }
        }
    }
}

/// Serialize metadata into a `---` delimited header, followed by a blank line.
pub fn generate_front_matter(metadata: &Metadata) -> String {
    let mut front_matter = String::from("---\n");
    for (key, value) in metadata.entries() {
        front_matter.push_str(&format!("{key}: {}\n", value.render()));
    }
    front_matter.push_str("---\n\n");
    front_matter
}
