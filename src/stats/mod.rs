//! Contribution statistics scoped to the viewer.
//!
//! Elevated viewers get figures over every give; standard viewers only over
//! the gives they authored.

use crate::core::{Category, ReferralRecord, Viewer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GiveStats {
    pub total_gives: usize,
    pub active_gives: usize,
    /// Active gives per known category slug, zero-filled.
    pub category_stats: BTreeMap<String, usize>,
}

impl GiveStats {
    /// Categories with at least one active give, busiest first.
    pub fn busiest_categories(&self) -> Vec<(&str, usize)> {
        let mut busy: Vec<(&str, usize)> = self
            .category_stats
            .iter()
            .filter(|(_, count)| **count > 0)
            .map(|(slug, count)| (slug.as_str(), *count))
            .collect();
        busy.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        busy
    }
}

pub fn compute_stats(records: &[ReferralRecord], viewer: &Viewer) -> GiveStats {
    let visible: Vec<&ReferralRecord> = records
        .iter()
        .filter(|record| viewer.is_elevated() || viewer.owns(record))
        .collect();

    let mut category_stats: BTreeMap<String, usize> = Category::KNOWN
        .iter()
        .map(|category| (category.slug().to_string(), 0))
        .collect();

    for record in visible.iter().filter(|r| r.is_active) {
        if let Some(count) = category_stats.get_mut(record.category.slug()) {
            *count += 1;
        }
    }

    let stats = GiveStats {
        total_gives: visible.len(),
        active_gives: visible.iter().filter(|r| r.is_active).count(),
        category_stats,
    };
    debug!(
        role = %viewer.role,
        total = stats.total_gives,
        active = stats.active_gives,
        "Computed give stats"
    );
    stats
}
