use regex::Regex;
use std::sync::LazyLock;

/// Characters of the derived description, before the ellipsis.
pub const DESCRIPTION_LENGTH: usize = 70;

static MARKDOWN_SYNTAX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[#*`>-]").expect("markdown syntax pattern is valid"));
static NEWLINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n+").expect("newline pattern is valid"));
static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Derive a short description from a rendered Markdown body.
///
/// Strips `#`, `*`, `` ` ``, `>` and `-` wherever they occur, folds all
/// whitespace into single spaces, keeps the first 70 characters and appends
/// `...`. An empty body yields `"..."`.
pub fn derive_description(body: &str) -> String {
    let stripped = MARKDOWN_SYNTAX.replace_all(body, "");
    let single_line = NEWLINES.replace_all(&stripped, " ");
    let collapsed = WHITESPACE.replace_all(&single_line, " ");

    let mut description: String = collapsed.trim().chars().take(DESCRIPTION_LENGTH).collect();
    description.push_str("...");
    description
}
