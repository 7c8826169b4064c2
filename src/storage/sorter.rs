//! Item ordering by text, section or data field.
//!
//! [`sort_order`] computes a new item order for a [`SortKey`] and a
//! [`SortDirection`]. Comparison is case-insensitive and stable.
//!
//! The direction flag is applied inverted: the items are first sorted
//! ascending, then the whole sequence is reversed when the direction is
//! [`SortDirection::Asc`]. `Asc` therefore yields a descending list and
//! `Desc` an ascending one.

use crate::domain::Item;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::convert::Infallible;
use std::str::FromStr;

/// Value an item is sorted by.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "name", rename_all = "snake_case")]
pub enum SortKey {
    /// The item's full text content.
    Text,
    /// The text of a named section of the item.
    Section(String),
    /// A named data field.
    Field(String),
}

/// Parses the compact key form used by hosts.
///
/// - `"text"` selects the full text
/// - a key containing `.` selects the section named by the key without dots
///   (`".title"` → `title`)
/// - anything else names a data field
///
/// # Examples
///
/// ```
/// use facetpage::storage::SortKey;
///
/// assert_eq!("text".parse::<SortKey>().unwrap(), SortKey::Text);
/// assert_eq!(".title".parse::<SortKey>().unwrap(), SortKey::Section("title".into()));
/// assert_eq!("price".parse::<SortKey>().unwrap(), SortKey::Field("price".into()));
/// ```
impl FromStr for SortKey {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s.contains('.') {
            Self::Section(s.replace('.', ""))
        } else if s == "text" {
            Self::Text
        } else {
            Self::Field(s.to_string())
        })
    }
}

/// Requested sort direction. See the module docs for how it is applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

/// `"asc"` maps to [`SortDirection::Asc`]; every other string to `Desc`.
impl FromStr for SortDirection {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(if s == "asc" { Self::Asc } else { Self::Desc })
    }
}

/// Comparison value extracted from an item.
///
/// Missing or blank field values order first, like the empty string, then
/// numbers, then text.
#[derive(Debug, Clone, PartialEq)]
enum SortValue {
    Empty,
    Number(f64),
    Text(String),
}

impl SortValue {
    fn extract(item: &Item, key: &SortKey) -> Self {
        match key {
            SortKey::Text => Self::Text(item.text.to_lowercase()),
            SortKey::Section(name) => Self::Text(
                item.sections
                    .get(name)
                    .map(|text| text.to_lowercase())
                    .unwrap_or_default(),
            ),
            SortKey::Field(name) => {
                let raw = item.fields.get(name).map(String::as_str).unwrap_or_default();
                if raw.trim().is_empty() {
                    return Self::Empty;
                }
                raw.trim()
                    .parse::<f64>()
                    .ok()
                    .filter(|n| n.is_finite())
                    .map_or_else(|| Self::Text(raw.to_lowercase()), Self::Number)
            }
        }
    }

    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Empty, Self::Empty) => Ordering::Equal,
            (Self::Empty, _) => Ordering::Less,
            (_, Self::Empty) => Ordering::Greater,
            (Self::Number(a), Self::Number(b)) => a.partial_cmp(b).unwrap_or(Ordering::Equal),
            (Self::Number(_), Self::Text(_)) => Ordering::Less,
            (Self::Text(_), Self::Number(_)) => Ordering::Greater,
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
        }
    }
}

/// Computes the ids of `items` in sorted order.
///
/// # Examples
///
/// ```
/// use facetpage::domain::{Item, ItemRecord};
/// use facetpage::storage::{sort_order, SortDirection, SortKey};
///
/// let items: Vec<Item> = ["b", "a", "c"]
///     .iter()
///     .enumerate()
///     .map(|(order, text)| Item::from_record(ItemRecord::new(*text, *text), order))
///     .collect();
///
/// assert_eq!(sort_order(&items, &SortKey::Text, SortDirection::Desc), vec!["a", "b", "c"]);
/// assert_eq!(sort_order(&items, &SortKey::Text, SortDirection::Asc), vec!["c", "b", "a"]);
/// ```
#[must_use]
pub fn sort_order(items: &[Item], key: &SortKey, direction: SortDirection) -> Vec<String> {
    let _span = tracing::debug_span!("sort_order",
        item_count = items.len(),
        key = ?key,
        direction = ?direction
    ).entered();

    let mut keyed: Vec<(SortValue, &Item)> = items
        .iter()
        .map(|item| (SortValue::extract(item, key), item))
        .collect();

    keyed.sort_by(|(a, _), (b, _)| a.compare(b));

    if direction == SortDirection::Asc {
        keyed.reverse();
    }

    keyed.into_iter().map(|(_, item)| item.id.clone()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemRecord;

    fn items(records: Vec<ItemRecord>) -> Vec<Item> {
        records
            .into_iter()
            .enumerate()
            .map(|(order, record)| Item::from_record(record, order))
            .collect()
    }

    #[test]
    fn text_sort_ignores_case() {
        let items = items(vec![
            ItemRecord::new("1", "banana"),
            ItemRecord::new("2", "Apple"),
            ItemRecord::new("3", "cherry"),
        ]);
        assert_eq!(sort_order(&items, &SortKey::Text, SortDirection::Desc), vec!["2", "1", "3"]);
    }

    #[test]
    fn ties_keep_insertion_order() {
        let items = items(vec![
            ItemRecord::new("first", "same"),
            ItemRecord::new("second", "SAME"),
            ItemRecord::new("third", "a"),
        ]);
        assert_eq!(
            sort_order(&items, &SortKey::Text, SortDirection::Desc),
            vec!["third", "first", "second"]
        );
    }

    #[test]
    fn numeric_fields_compare_as_numbers() {
        let items = items(vec![
            ItemRecord::new("ten", "").with_field("price", "10"),
            ItemRecord::new("nine", "").with_field("price", "9"),
            ItemRecord::new("hundred", "").with_field("price", "100"),
        ]);
        assert_eq!(
            sort_order(&items, &SortKey::Field("price".into()), SortDirection::Desc),
            vec!["nine", "ten", "hundred"]
        );
    }

    #[test]
    fn missing_fields_sort_first_then_numbers_then_text() {
        let items = items(vec![
            ItemRecord::new("ten", "").with_field("price", "10"),
            ItemRecord::new("missing", ""),
            ItemRecord::new("nine", "").with_field("price", "9"),
            ItemRecord::new("ask", "").with_field("price", "Ask"),
            ItemRecord::new("blank", "").with_field("price", "  "),
        ]);
        let price = SortKey::Field("price".into());

        assert_eq!(
            sort_order(&items, &price, SortDirection::Desc),
            vec!["missing", "blank", "nine", "ten", "ask"]
        );
        assert_eq!(
            sort_order(&items, &price, SortDirection::Asc),
            vec!["ask", "ten", "nine", "blank", "missing"]
        );
    }

    #[test]
    fn missing_section_sorts_as_empty_text() {
        let items = items(vec![
            ItemRecord::new("titled", "").with_section("title", "Zed"),
            ItemRecord::new("untitled", ""),
        ]);
        assert_eq!(
            sort_order(&items, &SortKey::Section("title".into()), SortDirection::Desc),
            vec!["untitled", "titled"]
        );
    }

    #[test]
    fn direction_parsing_treats_unknown_as_desc() {
        assert_eq!("asc".parse::<SortDirection>().unwrap(), SortDirection::Asc);
        assert_eq!("desc".parse::<SortDirection>().unwrap(), SortDirection::Desc);
        assert_eq!("sideways".parse::<SortDirection>().unwrap(), SortDirection::Desc);
    }
}
