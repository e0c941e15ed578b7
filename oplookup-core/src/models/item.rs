//! Item, section and field models.

use serde::{Deserialize, Serialize};

use super::vault::VaultRef;

/// An item summary as returned by the item list endpoint (no field values)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemSummary {
    /// Item identifier
    pub id: String,
    /// Item title
    pub title: String,
}

/// A full item with its sections and fields.
///
/// Sections and fields keep the order the service returned them in; field
/// resolution relies on that order when labels collide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Item identifier
    pub id: String,
    /// Item title
    pub title: String,
    /// Owning vault
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vault: Option<VaultRef>,
    /// Item category, e.g. `LOGIN` or `DATABASE`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Sections in service order
    #[serde(default)]
    pub sections: Vec<Section>,
    /// Fields in service order
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Item {
    /// Creates an empty item with the given id and title
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            vault: None,
            category: None,
            sections: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Appends a section
    #[must_use]
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Appends a field
    #[must_use]
    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }
}

/// A named group of fields inside one item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section identifier
    pub id: String,
    /// Section label; the built-in unnamed section has none
    #[serde(default)]
    pub label: String,
}

impl Section {
    /// Creates a section
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
        }
    }
}

/// Reference from a field to the section it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionRef {
    /// Section identifier
    pub id: String,
}

/// A single field of an item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Field identifier
    pub id: String,
    /// Field label
    #[serde(default)]
    pub label: String,
    /// Field value; absent for empty fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    /// Field type, e.g. `STRING` or `CONCEALED`
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Designated purpose, e.g. `USERNAME`, `PASSWORD` or `NOTES`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    /// Owning section, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<SectionRef>,
}

impl Field {
    /// Creates an unscoped field
    #[must_use]
    pub fn new(id: impl Into<String>, label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            value: Some(value.into()),
            kind: None,
            purpose: None,
            section: None,
        }
    }

    /// Places the field in the section with the given id
    #[must_use]
    pub fn in_section(mut self, section_id: impl Into<String>) -> Self {
        self.section = Some(SectionRef {
            id: section_id.into(),
        });
        self
    }

    /// Returns the id of the owning section, if any
    #[must_use]
    pub fn section_id(&self) -> Option<&str> {
        self.section.as_ref().map(|s| s.id.as_str())
    }
}
