pub mod category;
pub mod errors;
mod lenient;

pub use category::Category;
pub use errors::{Error, Result};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fallback display name when a contributor has neither a first name nor a username.
pub const ANONYMOUS_DISPLAY_NAME: &str = "User";

/// Identifier of a member who authored gives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContributorId(pub u64);

impl fmt::Display for ContributorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a single give.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct GiveId(pub u64);

impl fmt::Display for GiveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The member embedded in a give listing (`user` in the API payload).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contributor {
    #[serde(deserialize_with = "lenient::contributor_id")]
    pub id: Option<ContributorId>,
    #[serde(deserialize_with = "lenient::text")]
    pub username: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub first_name: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub last_name: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub profile_picture: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub mobile: Option<String>,
}

impl Contributor {
    /// First name, else username, else [`ANONYMOUS_DISPLAY_NAME`].
    pub fn display_name(&self) -> &str {
        non_empty(&self.first_name)
            .or_else(|| non_empty(&self.username))
            .unwrap_or(ANONYMOUS_DISPLAY_NAME)
    }

    pub fn avatar_url(&self) -> Option<&str> {
        non_empty(&self.profile_picture)
    }
}

/// A give as returned by the directory listing endpoints.
///
/// Deserialization is lenient: missing, null or wrongly typed fields fall
/// back to defaults (numbers are accepted as text) and an unparseable
/// `created_at` is treated as absent, so a single malformed record never
/// rejects a whole listing.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReferralRecord {
    #[serde(deserialize_with = "lenient::give_id")]
    pub id: GiveId,
    #[serde(rename = "user", deserialize_with = "lenient::contributor")]
    pub contributor: Option<Contributor>,
    #[serde(deserialize_with = "lenient::text")]
    pub name: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub company: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub department: Option<String>,
    #[serde(deserialize_with = "lenient::category")]
    pub category: Category,
    #[serde(deserialize_with = "lenient::text")]
    pub state: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub city: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub email: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub phone: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient::text")]
    pub website: Option<String>,
    #[serde(deserialize_with = "lenient::active_flag")]
    pub is_active: bool,
    #[serde(deserialize_with = "lenient::timestamp")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Default for ReferralRecord {
    fn default() -> Self {
        Self {
            id: GiveId::default(),
            contributor: None,
            name: None,
            company: None,
            department: None,
            category: Category::default(),
            state: None,
            city: None,
            email: None,
            phone: None,
            description: None,
            website: None,
            is_active: true,
            created_at: None,
        }
    }
}

impl ReferralRecord {
    pub fn contributor_id(&self) -> Option<ContributorId> {
        self.contributor.as_ref().and_then(|c| c.id)
    }

    pub fn contributor_display_name(&self) -> &str {
        self.contributor
            .as_ref()
            .map(Contributor::display_name)
            .unwrap_or(ANONYMOUS_DISPLAY_NAME)
    }

    pub fn contributor_avatar_url(&self) -> Option<&str> {
        self.contributor.as_ref().and_then(Contributor::avatar_url)
    }

    pub fn email(&self) -> &str {
        self.email.as_deref().unwrap_or("")
    }

    pub fn phone(&self) -> &str {
        self.phone.as_deref().unwrap_or("")
    }

    /// Free-text fields the directory search looks at, in display order.
    pub fn searchable_fields(&self) -> [&str; 9] {
        [
            self.name.as_deref().unwrap_or(""),
            self.company.as_deref().unwrap_or(""),
            self.city.as_deref().unwrap_or(""),
            self.state.as_deref().unwrap_or(""),
            self.email(),
            self.phone(),
            self.category.slug(),
            self.department.as_deref().unwrap_or(""),
            self.description.as_deref().unwrap_or(""),
        ]
    }
}

/// Visibility capability of whoever is looking at the directory.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewerRole {
    #[default]
    Standard,
    /// Unrestricted visibility (super admins).
    Elevated,
}

impl ViewerRole {
    pub fn from_superadmin(is_superadmin: bool) -> Self {
        if is_superadmin {
            ViewerRole::Elevated
        } else {
            ViewerRole::Standard
        }
    }
}

impl fmt::Display for ViewerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewerRole::Standard => write!(f, "standard"),
            ViewerRole::Elevated => write!(f, "elevated"),
        }
    }
}

/// A viewer: role plus, when signed in, the member id.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewer {
    pub id: Option<ContributorId>,
    pub role: ViewerRole,
}

impl Viewer {
    pub fn new(id: Option<ContributorId>, role: ViewerRole) -> Self {
        Self { id, role }
    }

    pub fn is_elevated(&self) -> bool {
        self.role == ViewerRole::Elevated
    }

    /// Whether the viewer authored the record. Unattributed records are owned by nobody.
    pub fn owns(&self, record: &ReferralRecord) -> bool {
        match (self.id, record.contributor_id()) {
            (Some(viewer), Some(author)) => viewer == author,
            _ => false,
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_display_name_prefers_first_name() {
        let contributor = Contributor {
            first_name: Some("Asha".into()),
            username: Some("asha_k".into()),
            ..Default::default()
        };
        assert_eq!(contributor.display_name(), "Asha");
    }

    #[test]
    fn test_display_name_falls_back_to_username_then_literal() {
        let by_username = Contributor {
            first_name: Some(String::new()),
            username: Some("asha_k".into()),
            ..Default::default()
        };
        assert_eq!(by_username.display_name(), "asha_k");
        assert_eq!(Contributor::default().display_name(), "User");
    }

    #[test]
    fn test_record_from_api_payload() {
        let json = r#"{
            "id": 12,
            "user": {"id": 3, "username": "ravi", "first_name": "Ravi", "profile_picture": "/media/p.png"},
            "name": "Sharma Tiles",
            "email": "ravi@tiles.in",
            "phone": "9876543210",
            "category": "construction",
            "created_at": "2025-03-01T10:15:00Z",
            "is_active": true
        }"#;
        let record: ReferralRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, GiveId(12));
        assert_eq!(record.contributor_id(), Some(ContributorId(3)));
        assert_eq!(record.contributor_display_name(), "Ravi");
        assert_eq!(record.contributor_avatar_url(), Some("/media/p.png"));
        assert_eq!(record.category, Category::Construction);
        assert_eq!(
            record.created_at,
            Some(Utc.with_ymd_and_hms(2025, 3, 1, 10, 15, 0).unwrap())
        );
    }

    #[test]
    fn test_record_tolerates_nulls_and_garbage() {
        let json = r#"{
            "id": null,
            "user": null,
            "email": null,
            "category": null,
            "is_active": null,
            "created_at": "last tuesday"
        }"#;
        let record: ReferralRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, GiveId(0));
        assert_eq!(record.contributor_id(), None);
        assert_eq!(record.contributor_display_name(), "User");
        assert_eq!(record.email(), "");
        assert_eq!(record.category, Category::Other);
        assert!(record.is_active);
        assert_eq!(record.created_at, None);
    }

    #[test]
    fn test_record_tolerates_wrongly_typed_fields() {
        let json = r#"{
            "id": "41",
            "user": {"id": "5", "first_name": 7, "mobile": 9123456789},
            "phone": 9876543210,
            "email": ["not", "an", "email"],
            "category": 3,
            "is_active": "yes",
            "created_at": 1718000000
        }"#;
        let record: ReferralRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, GiveId(41));
        assert_eq!(record.contributor_id(), Some(ContributorId(5)));
        assert_eq!(record.contributor_display_name(), "7");
        assert_eq!(record.phone(), "9876543210");
        assert_eq!(record.email(), "");
        assert_eq!(record.category, Category::from_slug("3"));
        assert!(record.is_active);
        assert_eq!(record.created_at, None);
    }

    #[test]
    fn test_user_given_as_primary_key() {
        let record: ReferralRecord = serde_json::from_str(r#"{"id": 1, "user": 9}"#).unwrap();
        assert_eq!(record.contributor_id(), Some(ContributorId(9)));
        assert_eq!(record.contributor_display_name(), "User");
    }

    #[test]
    fn test_viewer_ownership() {
        let record = ReferralRecord {
            contributor: Some(Contributor {
                id: Some(ContributorId(5)),
                ..Default::default()
            }),
            ..Default::default()
        };
        assert!(Viewer::new(Some(ContributorId(5)), ViewerRole::Standard).owns(&record));
        assert!(!Viewer::new(Some(ContributorId(6)), ViewerRole::Elevated).owns(&record));
        assert!(!Viewer::default().owns(&record));
        assert!(!Viewer::new(Some(ContributorId(5)), ViewerRole::Standard)
            .owns(&ReferralRecord::default()));
    }
}
