//! The browsable directory of gives.
//!
//! Filtering runs on raw records, so a search can match a contact field
//! the viewer will only ever see masked. Disclosure is applied afterwards,
//! row by row, through [`resolve_contact_visibility_with`].

pub mod watch;

pub use watch::QueryWatch;

use crate::core::{Category, GiveId, ReferralRecord, ViewerRole};
use crate::disclosure::{resolve_contact_visibility_with, ContactView, MaskStyle};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Search text and category chosen by the viewer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DirectoryFilter {
    pub search: String,
    pub category: Option<Category>,
    pub include_inactive: bool,
}

impl DirectoryFilter {
    pub fn matches(&self, record: &ReferralRecord) -> bool {
        (self.include_inactive || record.is_active)
            && self.matches_category(record)
            && self.matches_search(record)
    }

    fn matches_category(&self, record: &ReferralRecord) -> bool {
        self.category
            .as_ref()
            .is_none_or(|category| *category == record.category)
    }

    fn matches_search(&self, record: &ReferralRecord) -> bool {
        let needle = self.search.to_lowercase();
        record
            .searchable_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// One listing row, contact fields already disclosed for the viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirectoryRow {
    pub id: GiveId,
    pub name: String,
    pub company: Option<String>,
    pub category: Category,
    pub city: Option<String>,
    pub state: Option<String>,
    pub contributor: String,
    pub contact: ContactView,
    pub created_at: Option<DateTime<Utc>>,
}

impl DirectoryRow {
    fn disclose(record: &ReferralRecord, role: ViewerRole, style: MaskStyle) -> Self {
        Self {
            id: record.id,
            name: record.name.clone().unwrap_or_default(),
            company: record.company.clone(),
            category: record.category.clone(),
            city: record.city.clone(),
            state: record.state.clone(),
            contributor: record.contributor_display_name().to_string(),
            contact: resolve_contact_visibility_with(record, role, style),
            created_at: record.created_at,
        }
    }
}

/// Filters records and discloses contacts for `role`. Input order is kept.
pub fn list_directory(
    records: &[ReferralRecord],
    filter: &DirectoryFilter,
    role: ViewerRole,
    style: MaskStyle,
) -> Vec<DirectoryRow> {
    records
        .iter()
        .filter(|record| filter.matches(record))
        .map(|record| DirectoryRow::disclose(record, role, style))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::GiveBuilder;

    fn listing() -> Vec<ReferralRecord> {
        vec![
            GiveBuilder::new()
                .id(1)
                .by(1)
                .title("Sharma Tiles")
                .city("Pune")
                .email("sales@sharmatiles.in")
                .phone("9822012345")
                .category(Category::Construction)
                .build(),
            GiveBuilder::new()
                .id(2)
                .by(2)
                .title("Green Leaf Cafe")
                .description("Organic catering for events")
                .category(Category::FoodBeverage)
                .build(),
            GiveBuilder::new()
                .id(3)
                .by(2)
                .title("Closed Shop")
                .category(Category::Retail)
                .active(false)
                .build(),
        ]
    }

    fn ids(rows: &[DirectoryRow]) -> Vec<u64> {
        rows.iter().map(|r| r.id.0).collect()
    }

    #[test]
    fn test_empty_filter_lists_active_records() {
        let rows = list_directory(
            &listing(),
            &DirectoryFilter::default(),
            ViewerRole::Standard,
            MaskStyle::Directory,
        );
        assert_eq!(ids(&rows), vec![1, 2]);
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let filter = DirectoryFilter {
            search: "CATERING".into(),
            ..Default::default()
        };
        let rows = list_directory(&listing(), &filter, ViewerRole::Standard, MaskStyle::Directory);
        assert_eq!(ids(&rows), vec![2]);

        let by_city = DirectoryFilter {
            search: "pune".into(),
            ..Default::default()
        };
        assert_eq!(
            ids(&list_directory(&listing(), &by_city, ViewerRole::Standard, MaskStyle::Directory)),
            vec![1]
        );
    }

    #[test]
    fn test_search_sees_raw_contact_fields() {
        let filter = DirectoryFilter {
            search: "sharmatiles".into(),
            ..Default::default()
        };
        let rows = list_directory(&listing(), &filter, ViewerRole::Standard, MaskStyle::Directory);
        assert_eq!(ids(&rows), vec![1]);
        assert_eq!(rows[0].contact.email, "*****@****");
    }

    #[test]
    fn test_category_filter() {
        let filter = DirectoryFilter {
            category: Some(Category::FoodBeverage),
            ..Default::default()
        };
        let rows = list_directory(&listing(), &filter, ViewerRole::Standard, MaskStyle::Directory);
        assert_eq!(ids(&rows), vec![2]);
    }

    #[test]
    fn test_include_inactive() {
        let filter = DirectoryFilter {
            include_inactive: true,
            ..Default::default()
        };
        let rows = list_directory(&listing(), &filter, ViewerRole::Elevated, MaskStyle::Directory);
        assert_eq!(ids(&rows), vec![1, 2, 3]);
    }

    #[test]
    fn test_elevated_rows_carry_raw_contacts() {
        let rows = list_directory(
            &listing(),
            &DirectoryFilter::default(),
            ViewerRole::Elevated,
            MaskStyle::Directory,
        );
        assert_eq!(rows[0].contact.email, "sales@sharmatiles.in");
        assert_eq!(rows[0].contact.phone, "9822012345");
    }
}
