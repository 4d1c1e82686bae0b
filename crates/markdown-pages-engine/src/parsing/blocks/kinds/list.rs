use std::sync::LazyLock;

use regex::Regex;

static UNORDERED_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^- (.+)$").unwrap());
static ORDERED_ITEM: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+\. (.+)$").unwrap());

/// `- item` lists.
pub struct UnorderedList;

impl UnorderedList {
    pub const MARKER: &'static str = "- ";
    pub const TAG: &'static str = "ul";

    pub fn is_item_line(line: &str) -> bool {
        UNORDERED_ITEM.is_match(line)
    }

    /// The item text with its marker removed; unmarked lines are kept whole.
    pub fn item_text(line: &str) -> &str {
        line.strip_prefix(Self::MARKER).unwrap_or(line)
    }
}

/// `1. item` lists. Numbering is syntactic only; it need not be sequential.
pub struct OrderedList;

impl OrderedList {
    pub const TAG: &'static str = "ol";

    pub fn is_item_line(line: &str) -> bool {
        ORDERED_ITEM.is_match(line)
    }

    /// The item text with its `<digits>. ` marker removed; unmarked lines are kept whole.
    pub fn item_text(line: &str) -> &str {
        ORDERED_ITEM
            .captures(line)
            .and_then(|caps| caps.get(1))
            .map_or(line, |m| m.as_str())
    }
}

/// The `<li>` tag shared by both list kinds.
pub const LIST_ITEM_TAG: &str = "li";
