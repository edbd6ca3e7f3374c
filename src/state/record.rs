/// Core data model for the inventory
///
/// A `FileRecord` describes one physical item being tracked: a file,
/// folder, box or binder, where it lives, and when it was added.
/// Records are serialized to JSON and stored as one snapshot document.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of physical item a record describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    File,
    Folder,
    Box,
    Binder,
}

impl FileType {
    pub const ALL: [FileType; 4] = [
        FileType::File,
        FileType::Folder,
        FileType::Box,
        FileType::Binder,
    ];

    /// Capitalized label for display on cards and in pickers
    pub fn label(&self) -> &'static str {
        match self {
            FileType::File => "File",
            FileType::Folder => "Folder",
            FileType::Box => "Box",
            FileType::Binder => "Binder",
        }
    }

    /// Glyph shown in the card header
    pub fn icon(&self) -> &'static str {
        match self {
            FileType::File => "📄",
            FileType::Folder => "📁",
            FileType::Box => "📦",
            FileType::Binder => "📒",
        }
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Fixed category vocabulary offered by the form and the facet filter.
/// Stored on the record as a plain lowercase string so that records
/// without a category stay representable as an empty string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Personal,
    Work,
    Financial,
    Medical,
    Legal,
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Personal,
        Category::Work,
        Category::Financial,
        Category::Medical,
        Category::Legal,
        Category::Other,
    ];

    /// The lowercase value stored on the record
    pub fn value(&self) -> &'static str {
        match self {
            Category::Personal => "personal",
            Category::Work => "work",
            Category::Financial => "financial",
            Category::Medical => "medical",
            Category::Legal => "legal",
            Category::Other => "other",
        }
    }

    /// Capitalized label for display
    pub fn label(&self) -> &'static str {
        match self {
            Category::Personal => "Personal",
            Category::Work => "Work",
            Category::Financial => "Financial",
            Category::Medical => "Medical",
            Category::Legal => "Legal",
            Category::Other => "Other",
        }
    }

    /// Look a category up from its stored value
    pub fn from_value(value: &str) -> Option<Category> {
        Category::ALL.iter().copied().find(|c| c.value() == value)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One inventory entry
///
/// `category` and `notes` are optional in practice: snapshots written by
/// older versions may omit them, so they default to the empty string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileRecord {
    /// Opaque unique token
    pub id: String,
    #[serde(rename = "type")]
    pub file_type: FileType,
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub notes: String,
    pub date_added: NaiveDate,
}

impl FileRecord {
    /// Generate a fresh opaque id for a new record
    pub fn new_id() -> String {
        uuid::Uuid::new_v4().simple().to_string()
    }

    /// Capitalized category label, or None when the record has no category
    pub fn category_label(&self) -> Option<&'static str> {
        Category::from_value(&self.category).map(|c| c.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FileRecord {
        FileRecord {
            id: FileRecord::new_id(),
            file_type: FileType::Binder,
            name: "Tax returns 2024".into(),
            location: "Shelf B, row 3".into(),
            category: "financial".into(),
            notes: "Keep until 2031".into(),
            date_added: NaiveDate::from_ymd_opt(2025, 4, 12).unwrap(),
        }
    }

    #[test]
    fn test_type_serializes_lowercase() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert!(json.contains("\"type\":\"binder\""));
        assert!(json.contains("\"dateAdded\":\"2025-04-12\""));
    }

    #[test]
    fn test_roundtrip() {
        let record = sample();
        let json = serde_json::to_string(&record).unwrap();
        let restored: FileRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, restored);
    }

    #[test]
    fn test_missing_optional_fields_default_to_empty() {
        let json = r#"{
            "id": "abc123",
            "type": "box",
            "name": "Old invoices",
            "location": "Basement",
            "dateAdded": "2023-11-02"
        }"#;
        let record: FileRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.category, "");
        assert_eq!(record.notes, "");
        assert_eq!(record.category_label(), None);
    }

    #[test]
    fn test_ids_are_unique() {
        let a = FileRecord::new_id();
        let b = FileRecord::new_id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_category_lookup() {
        assert_eq!(Category::from_value("legal"), Some(Category::Legal));
        assert_eq!(Category::from_value("unknown"), None);
        assert_eq!(Category::Legal.label(), "Legal");
    }
}
