/// The filter → sort pipeline that projects the collection into the view
///
/// Filtering is one conjunctive predicate: free-text search over the
/// selected scope, plus exact-match facets on type and category. Sorting
/// is a single-key comparator; direction is selectable for date and name.

use std::cmp::Ordering;
use std::fmt;

use super::record::{Category, FileRecord, FileType};

/// Which field(s) the free-text search inspects
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SearchScope {
    #[default]
    All,
    Name,
    Location,
    Category,
}

impl SearchScope {
    pub const ALL: [SearchScope; 4] = [
        SearchScope::All,
        SearchScope::Name,
        SearchScope::Location,
        SearchScope::Category,
    ];
}

impl fmt::Display for SearchScope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SearchScope::All => "All Fields",
            SearchScope::Name => "Name",
            SearchScope::Location => "Location",
            SearchScope::Category => "Category",
        })
    }
}

/// Exact-match facet on the record type
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TypeFilter {
    #[default]
    Any,
    Is(FileType),
}

impl TypeFilter {
    pub const ALL: [TypeFilter; 5] = [
        TypeFilter::Any,
        TypeFilter::Is(FileType::File),
        TypeFilter::Is(FileType::Folder),
        TypeFilter::Is(FileType::Box),
        TypeFilter::Is(FileType::Binder),
    ];

    fn matches(&self, record: &FileRecord) -> bool {
        match self {
            TypeFilter::Any => true,
            TypeFilter::Is(t) => record.file_type == *t,
        }
    }
}

impl fmt::Display for TypeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeFilter::Any => f.write_str("All Types"),
            TypeFilter::Is(t) => f.write_str(t.label()),
        }
    }
}

/// Exact-match facet on the record category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    Any,
    Is(Category),
}

impl CategoryFilter {
    pub const ALL: [CategoryFilter; 7] = [
        CategoryFilter::Any,
        CategoryFilter::Is(Category::Personal),
        CategoryFilter::Is(Category::Work),
        CategoryFilter::Is(Category::Financial),
        CategoryFilter::Is(Category::Medical),
        CategoryFilter::Is(Category::Legal),
        CategoryFilter::Is(Category::Other),
    ];

    fn matches(&self, record: &FileRecord) -> bool {
        match self {
            CategoryFilter::Any => true,
            CategoryFilter::Is(c) => record.category == c.value(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::Any => f.write_str("All Categories"),
            CategoryFilter::Is(c) => f.write_str(c.label()),
        }
    }
}

/// Sort order for the card list
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    DateNewest,
    DateOldest,
    NameAsc,
    NameDesc,
    Type,
    Category,
}

impl SortKey {
    pub const ALL: [SortKey; 6] = [
        SortKey::DateNewest,
        SortKey::DateOldest,
        SortKey::NameAsc,
        SortKey::NameDesc,
        SortKey::Type,
        SortKey::Category,
    ];

    fn compare(&self, a: &FileRecord, b: &FileRecord) -> Ordering {
        match self {
            SortKey::DateNewest => b.date_added.cmp(&a.date_added),
            SortKey::DateOldest => a.date_added.cmp(&b.date_added),
            SortKey::NameAsc => compare_text(&a.name, &b.name),
            SortKey::NameDesc => compare_text(&b.name, &a.name),
            SortKey::Type => compare_text(a.file_type.label(), b.file_type.label()),
            SortKey::Category => compare_text(&a.category, &b.category),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortKey::DateNewest => "Date Added (Newest)",
            SortKey::DateOldest => "Date Added (Oldest)",
            SortKey::NameAsc => "Name (A-Z)",
            SortKey::NameDesc => "Name (Z-A)",
            SortKey::Type => "Type",
            SortKey::Category => "Category",
        })
    }
}

/// Case-insensitive text comparison, a stand-in for locale collation
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// The complete view query: search + facets + sort
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    pub search: String,
    pub scope: SearchScope,
    pub type_filter: TypeFilter,
    pub category_filter: CategoryFilter,
    pub sort: SortKey,
}

impl Query {
    /// Whether one record passes the search and both facets
    pub fn matches(&self, record: &FileRecord) -> bool {
        let needle = self.search.trim().to_lowercase();
        if !needle.is_empty() {
            let hit = match self.scope {
                SearchScope::Name => contains(&record.name, &needle),
                SearchScope::Location => contains(&record.location, &needle),
                SearchScope::Category => contains(&record.category, &needle),
                SearchScope::All => {
                    contains(&record.name, &needle)
                        || contains(&record.location, &needle)
                        || contains(&record.category, &needle)
                        || contains(&record.notes, &needle)
                }
            };
            if !hit {
                return false;
            }
        }

        self.type_filter.matches(record) && self.category_filter.matches(record)
    }

    /// Project the collection through the pipeline: linear filter, then
    /// a comparator sort on the selected key.
    pub fn apply<'a>(&self, records: &'a [FileRecord]) -> Vec<&'a FileRecord> {
        let mut visible: Vec<&FileRecord> =
            records.iter().filter(|r| self.matches(r)).collect();
        visible.sort_by(|a, b| self.sort.compare(a, b));
        visible
    }
}

/// Case-insensitive substring test (needle is already lowercased)
fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(
        name: &str,
        location: &str,
        category: &str,
        notes: &str,
        file_type: FileType,
        date: (i32, u32, u32),
    ) -> FileRecord {
        FileRecord {
            id: FileRecord::new_id(),
            file_type,
            name: name.into(),
            location: location.into(),
            category: category.into(),
            notes: notes.into(),
            date_added: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
        }
    }

    fn collection() -> Vec<FileRecord> {
        vec![
            record(
                "Insurance policy",
                "Cabinet A",
                "legal",
                "renewed yearly",
                FileType::File,
                (2025, 3, 1),
            ),
            record(
                "Holiday photos",
                "Attic box 2",
                "personal",
                "",
                FileType::Box,
                (2024, 7, 20),
            ),
            record(
                "payroll records",
                "Cabinet B",
                "work",
                "contains insurance stubs",
                FileType::Binder,
                (2025, 1, 5),
            ),
        ]
    }

    #[test]
    fn test_empty_query_matches_everything() {
        let records = collection();
        let query = Query::default();
        assert_eq!(query.apply(&records).len(), 3);
    }

    #[test]
    fn test_search_scope_name() {
        let records = collection();
        let query = Query {
            search: "photos".into(),
            scope: SearchScope::Name,
            ..Query::default()
        };
        let visible = query.apply(&records);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Holiday photos");
    }

    #[test]
    fn test_search_scope_location() {
        let records = collection();
        let query = Query {
            search: "cabinet".into(),
            scope: SearchScope::Location,
            ..Query::default()
        };
        assert_eq!(query.apply(&records).len(), 2);
    }

    #[test]
    fn test_search_scope_category() {
        let records = collection();
        let query = Query {
            search: "leg".into(),
            scope: SearchScope::Category,
            ..Query::default()
        };
        let visible = query.apply(&records);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].category, "legal");
    }

    #[test]
    fn test_search_all_fields_includes_notes() {
        let records = collection();
        let query = Query {
            search: "insurance".into(),
            scope: SearchScope::All,
            ..Query::default()
        };
        // Matches "Insurance policy" by name and the payroll binder by notes
        assert_eq!(query.apply(&records).len(), 2);
    }

    #[test]
    fn test_narrow_scope_ignores_notes() {
        let records = collection();
        let query = Query {
            search: "insurance".into(),
            scope: SearchScope::Name,
            ..Query::default()
        };
        assert_eq!(query.apply(&records).len(), 1);
    }

    #[test]
    fn test_search_is_trimmed_and_case_insensitive() {
        let records = collection();
        let query = Query {
            search: "  PAYROLL  ".into(),
            scope: SearchScope::Name,
            ..Query::default()
        };
        assert_eq!(query.apply(&records).len(), 1);
    }

    #[test]
    fn test_type_facet_is_exact() {
        let records = collection();
        let query = Query {
            type_filter: TypeFilter::Is(FileType::Box),
            ..Query::default()
        };
        let visible = query.apply(&records);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].file_type, FileType::Box);
    }

    #[test]
    fn test_category_facet_is_exact() {
        let records = collection();
        let query = Query {
            category_filter: CategoryFilter::Is(Category::Work),
            ..Query::default()
        };
        assert_eq!(query.apply(&records).len(), 1);
    }

    #[test]
    fn test_search_and_facets_are_conjunctive() {
        let records = collection();
        let query = Query {
            search: "insurance".into(),
            scope: SearchScope::All,
            type_filter: TypeFilter::Is(FileType::Binder),
            ..Query::default()
        };
        // "insurance" alone matches two records; the type facet narrows to one
        let visible = query.apply(&records);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "payroll records");
    }

    #[test]
    fn test_sort_date_directions() {
        let records = collection();
        let newest = Query {
            sort: SortKey::DateNewest,
            ..Query::default()
        };
        let names: Vec<_> = newest.apply(&records).iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Insurance policy", "payroll records", "Holiday photos"]);

        let oldest = Query {
            sort: SortKey::DateOldest,
            ..Query::default()
        };
        let names: Vec<_> = oldest.apply(&records).iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Holiday photos", "payroll records", "Insurance policy"]);
    }

    #[test]
    fn test_sort_name_is_case_insensitive() {
        let records = collection();
        let query = Query {
            sort: SortKey::NameAsc,
            ..Query::default()
        };
        let names: Vec<_> = query.apply(&records).iter().map(|r| r.name.as_str()).collect();
        // "payroll records" sorts after "Holiday photos" despite its lowercase p
        assert_eq!(names, ["Holiday photos", "Insurance policy", "payroll records"]);

        let reversed = Query {
            sort: SortKey::NameDesc,
            ..Query::default()
        };
        let names: Vec<_> = reversed.apply(&records).iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["payroll records", "Insurance policy", "Holiday photos"]);
    }

    #[test]
    fn test_sort_type_and_category_ascend() {
        let records = collection();
        let by_type = Query {
            sort: SortKey::Type,
            ..Query::default()
        };
        let types: Vec<_> = by_type
            .apply(&records)
            .iter()
            .map(|r| r.file_type)
            .collect();
        assert_eq!(types, [FileType::Binder, FileType::Box, FileType::File]);

        let by_category = Query {
            sort: SortKey::Category,
            ..Query::default()
        };
        let cats: Vec<_> = by_category
            .apply(&records)
            .iter()
            .map(|r| r.category.as_str())
            .collect();
        assert_eq!(cats, ["legal", "personal", "work"]);
    }
}
