//! Factories for test records.
//!
//! | Helper | Purpose |
//! |--------|---------|
//! | [`day`] | Noon UTC on a day of June 2025 |
//! | [`GiveBuilder`] | Build a [`ReferralRecord`] fluently |
//! | [`sample_listing`] | Deterministic listing of `n` gives spread over contributors |

use crate::core::{Category, Contributor, ContributorId, GiveId, ReferralRecord};
use chrono::{DateTime, TimeZone, Utc};

/// Noon UTC on the given day of June 2025. Days outside 1..=30 panic.
pub fn day(d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 6, d, 12, 0, 0)
        .single()
        .unwrap_or_else(|| panic!("June 2025 has no day {d}"))
}

/// Fluent builder for [`ReferralRecord`].
///
/// Contributor setters create the embedded contributor on first use.
#[derive(Debug, Clone, Default)]
pub struct GiveBuilder {
    record: ReferralRecord,
}

impl GiveBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    fn contributor(&mut self) -> &mut Contributor {
        self.record.contributor.get_or_insert_with(Contributor::default)
    }

    pub fn id(mut self, id: u64) -> Self {
        self.record.id = GiveId(id);
        self
    }

    pub fn by(mut self, contributor: u64) -> Self {
        self.contributor().id = Some(ContributorId(contributor));
        self
    }

    /// Contributor object present but without an id.
    pub fn anonymous_user(mut self) -> Self {
        self.contributor().id = None;
        self
    }

    pub fn named(mut self, first_name: &str) -> Self {
        self.contributor().first_name = Some(first_name.to_string());
        self
    }

    pub fn username(mut self, username: &str) -> Self {
        self.contributor().username = Some(username.to_string());
        self
    }

    pub fn avatar(mut self, url: &str) -> Self {
        self.contributor().profile_picture = Some(url.to_string());
        self
    }

    pub fn creator_contact(mut self, mobile: &str, email: &str) -> Self {
        let contributor = self.contributor();
        contributor.mobile = Some(mobile.to_string());
        contributor.email = Some(email.to_string());
        self
    }

    pub fn title(mut self, name: &str) -> Self {
        self.record.name = Some(name.to_string());
        self
    }

    pub fn company(mut self, company: &str) -> Self {
        self.record.company = Some(company.to_string());
        self
    }

    pub fn city(mut self, city: &str) -> Self {
        self.record.city = Some(city.to_string());
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.record.description = Some(description.to_string());
        self
    }

    pub fn email(mut self, email: &str) -> Self {
        self.record.email = Some(email.to_string());
        self
    }

    pub fn phone(mut self, phone: &str) -> Self {
        self.record.phone = Some(phone.to_string());
        self
    }

    pub fn category(mut self, category: Category) -> Self {
        self.record.category = category;
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.record.is_active = is_active;
        self
    }

    pub fn created(mut self, at: DateTime<Utc>) -> Self {
        self.record.created_at = Some(at);
        self
    }

    pub fn build(self) -> ReferralRecord {
        self.record
    }
}

/// `n` gives spread unevenly over `contributors` members, dated across June 2025.
pub fn sample_listing(n: usize, contributors: u64) -> Vec<ReferralRecord> {
    let contributors = contributors.max(1);
    (0..n)
        .map(|i| {
            let i = i as u64;
            let contributor = (i * 7 + i / 3) % contributors + 1;
            GiveBuilder::new()
                .id(i + 1)
                .by(contributor)
                .named(&format!("Member {contributor}"))
                .email(&format!("lead{i}@example.com"))
                .phone("9876543210")
                .category(Category::KNOWN[(i % 29) as usize].clone())
                .created(day((i % 30) as u32 + 1))
                .build()
        })
        .collect()
}
