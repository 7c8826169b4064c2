//! Item domain model and facet identifiers.
//!
//! An [`Item`] is one entry of the paged collection. It carries the text used
//! for searching and sorting, a set of named data fields, and one value per
//! declared [`FacetId`]. Items are built from [`ItemRecord`]s, the load-time
//! representation supplied by the host.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Identifier of one independently filterable dimension.
///
/// A facet is declared as a `(category, field)` pair by the caller. Two facets
/// with the same field name in different categories are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FacetId {
    pub category: String,
    pub field: String,
}

impl FacetId {
    /// Creates a facet identifier from a category and a field name.
    ///
    /// # Examples
    ///
    /// ```
    /// use facetpage::domain::FacetId;
    ///
    /// let color = FacetId::new("style", "color");
    /// assert_eq!(color.to_string(), "style.color");
    /// ```
    #[must_use]
    pub fn new(category: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            field: field.into(),
        }
    }
}

impl fmt::Display for FacetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.category, self.field)
    }
}

/// Load-time representation of an item.
///
/// Facet values are nested by category, then field, which keeps the JSON
/// form readable:
///
/// ```json
/// {
///   "id": "shirt-1",
///   "text": "Red shirt, size M",
///   "sections": { "title": "Red shirt" },
///   "fields": { "price": "19" },
///   "facets": { "style": { "color": "red", "size": "M" } }
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: String,

    /// Full text content, used by text search and the `text` sort key.
    #[serde(default)]
    pub text: String,

    /// Text of named sub-elements, used by section sort keys.
    #[serde(default)]
    pub sections: BTreeMap<String, String>,

    /// Named data fields, used by field sort keys.
    #[serde(default)]
    pub fields: BTreeMap<String, String>,

    /// Facet values keyed by category, then by field.
    #[serde(default)]
    pub facets: BTreeMap<String, BTreeMap<String, String>>,
}

impl ItemRecord {
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            ..Self::default()
        }
    }

    /// Adds a facet value and returns the record.
    #[must_use]
    pub fn with_facet(
        mut self,
        category: impl Into<String>,
        field: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.facets
            .entry(category.into())
            .or_default()
            .insert(field.into(), value.into());
        self
    }

    /// Adds a named data field and returns the record.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Adds a named section text and returns the record.
    #[must_use]
    pub fn with_section(mut self, name: impl Into<String>, text: impl Into<String>) -> Self {
        self.sections.insert(name.into(), text.into());
        self
    }
}

/// One entry of the paged collection.
///
/// `order` is the item's position in the store and defines page membership.
/// `active` is derived by the filter engine and is never set by callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: String,
    pub order: usize,
    pub text: String,
    pub sections: BTreeMap<String, String>,
    pub fields: BTreeMap<String, String>,
    pub facets: BTreeMap<FacetId, String>,
    pub(crate) active: bool,
}

impl Item {
    /// Builds an active item from a record at the given position.
    #[must_use]
    pub fn from_record(record: ItemRecord, order: usize) -> Self {
        let facets = record
            .facets
            .into_iter()
            .flat_map(|(category, fields)| {
                fields
                    .into_iter()
                    .map(move |(field, value)| (FacetId::new(category.clone(), field), value))
            })
            .collect();

        Self {
            id: record.id,
            order,
            text: record.text,
            sections: record.sections,
            fields: record.fields,
            facets,
            active: true,
        }
    }

    /// Whether the item passes the current filter.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Returns the item's value for a facet, if it carries one.
    #[must_use]
    pub fn facet(&self, facet: &FacetId) -> Option<&str> {
        self.facets.get(facet).map(String::as_str)
    }
}
