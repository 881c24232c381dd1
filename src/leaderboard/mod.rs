//! Contribution leaderboards.
//!
//! Pure aggregation of gives into per-contributor counts:
//! filter by window → group by contributor → sort → slice.
//!
//! The same function serves the all-time and the trailing-week boards; the
//! caller only changes the [`TimeWindow`]. Nothing here performs I/O or keeps
//! state between calls, so identical input always yields an identical board.

pub mod dashboard;
pub mod standing;
pub mod window;

pub use dashboard::{build_dashboard, Dashboard};
pub use standing::{member_standing, MemberStanding};
pub use window::TimeWindow;

use crate::core::{ContributorId, ReferralRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// Number of entries shown on the podium.
pub const DEFAULT_PODIUM_SIZE: usize = 3;

/// Which record supplies a contributor's name and avatar when they differ
/// across that contributor's gives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IdentityPolicy {
    /// The most recently created give; later input position wins ties and
    /// undated gives count as oldest.
    #[default]
    Latest,
    /// The first give in input order.
    FirstSeen,
}

impl IdentityPolicy {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "latest" => Some(Self::Latest),
            "first-seen" | "first_seen" => Some(Self::FirstSeen),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct LeaderboardConfig {
    #[serde(default = "default_window_days")]
    pub window_days: u32, // Length of the trailing board
    #[serde(default = "default_podium_size")]
    pub podium_size: usize,
    #[serde(default)]
    pub identity: IdentityPolicy,
}

fn default_window_days() -> u32 {
    7
}

fn default_podium_size() -> usize {
    DEFAULT_PODIUM_SIZE
}

impl Default for LeaderboardConfig {
    fn default() -> Self {
        Self {
            window_days: default_window_days(),
            podium_size: default_podium_size(),
            identity: IdentityPolicy::default(),
        }
    }
}

impl LeaderboardConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.window_days == 0 {
            return Err("leaderboard.window_days must be at least 1".to_string());
        }
        if self.podium_size == 0 {
            return Err("leaderboard.podium_size must be at least 1".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    pub contributor_id: ContributorId,
    pub display_name: String,
    pub avatar_url: Option<String>,
    pub contribution_count: usize,
}

/// Medal shown next to a rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankBadge {
    Gold,
    Silver,
    Bronze,
    Numbered(usize),
}

impl RankBadge {
    /// `rank` is 1-based.
    pub fn for_rank(rank: usize) -> Self {
        match rank {
            1 => RankBadge::Gold,
            2 => RankBadge::Silver,
            3 => RankBadge::Bronze,
            n => RankBadge::Numbered(n),
        }
    }
}

impl fmt::Display for RankBadge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RankBadge::Gold => write!(f, "🏆"),
            RankBadge::Silver => write!(f, "🥈"),
            RankBadge::Bronze => write!(f, "🥉"),
            RankBadge::Numbered(n) => write!(f, "#{n}"),
        }
    }
}

/// Ranked contributors, highest count first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<LeaderboardEntry> {
        self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// First [`DEFAULT_PODIUM_SIZE`] entries, or fewer.
    ///
    /// Always the top three regardless of `leaderboard.podium_size`; use
    /// [`Leaderboard::split_podium`] with the configured size instead.
    pub fn podium(&self) -> &[LeaderboardEntry] {
        self.split_podium(DEFAULT_PODIUM_SIZE).0
    }

    /// Everything after the top three.
    pub fn remainder(&self) -> &[LeaderboardEntry] {
        self.split_podium(DEFAULT_PODIUM_SIZE).1
    }

    pub fn split_podium(&self, size: usize) -> (&[LeaderboardEntry], &[LeaderboardEntry]) {
        self.entries.split_at(size.min(self.entries.len()))
    }

    /// Entries paired with their 1-based rank.
    pub fn ranked(&self) -> impl Iterator<Item = (usize, &LeaderboardEntry)> {
        self.entries.iter().enumerate().map(|(i, e)| (i + 1, e))
    }

    pub fn total_contributions(&self) -> usize {
        self.entries.iter().map(|e| e.contribution_count).sum()
    }

    pub fn truncated(mut self, limit: Option<usize>) -> Self {
        if let Some(limit) = limit {
            self.entries.truncate(limit);
        }
        self
    }

    /// Competition rank: 1 + the number of contributors with a strictly
    /// higher count. `None` when the contributor is not on the board.
    pub fn rank_of(&self, contributor: ContributorId) -> Option<usize> {
        let count = self
            .entries
            .iter()
            .find(|e| e.contributor_id == contributor)?
            .contribution_count;
        let ahead = self
            .entries
            .iter()
            .take_while(|e| e.contribution_count > count)
            .count();
        Some(ahead + 1)
    }
}

struct Tally<'a> {
    count: usize,
    identity: &'a ReferralRecord,
}

/// Builds a leaderboard using the default [`IdentityPolicy`].
pub fn build_leaderboard(records: &[ReferralRecord], window: &TimeWindow) -> Leaderboard {
    build_leaderboard_with(records, window, IdentityPolicy::default())
}

/// Groups in-window, attributable gives by contributor.
///
/// Records without a contributor id are skipped. Entries are sorted by
/// descending count, then ascending contributor id.
pub fn build_leaderboard_with(
    records: &[ReferralRecord],
    window: &TimeWindow,
    policy: IdentityPolicy,
) -> Leaderboard {
    let tallies = tally_contributors(records, window, policy);

    let mut entries: Vec<LeaderboardEntry> = tallies
        .into_iter()
        .map(|(contributor_id, tally)| to_entry(contributor_id, &tally))
        .collect();
    entries.sort_by(|a, b| {
        b.contribution_count
            .cmp(&a.contribution_count)
            .then_with(|| a.contributor_id.cmp(&b.contributor_id))
    });

    debug!(
        records = records.len(),
        contributors = entries.len(),
        bounded = window.is_bounded(),
        "Built leaderboard"
    );

    Leaderboard { entries }
}

fn tally_contributors<'a>(
    records: &'a [ReferralRecord],
    window: &TimeWindow,
    policy: IdentityPolicy,
) -> BTreeMap<ContributorId, Tally<'a>> {
    let mut tallies: BTreeMap<ContributorId, Tally<'a>> = BTreeMap::new();

    let attributable = records
        .iter()
        .filter(|record| window.contains(record.created_at))
        .filter_map(|record| record.contributor_id().map(|id| (id, record)));

    for (id, record) in attributable {
        tallies
            .entry(id)
            .and_modify(|tally| {
                tally.count += 1;
                if supersedes(policy, record, tally.identity) {
                    tally.identity = record;
                }
            })
            .or_insert(Tally {
                count: 1,
                identity: record,
            });
    }

    tallies
}

// Called in input order, so `>=` lets the later record win equal timestamps.
fn supersedes(policy: IdentityPolicy, candidate: &ReferralRecord, current: &ReferralRecord) -> bool {
    match policy {
        IdentityPolicy::Latest => candidate.created_at >= current.created_at,
        IdentityPolicy::FirstSeen => false,
    }
}

fn to_entry(contributor_id: ContributorId, tally: &Tally<'_>) -> LeaderboardEntry {
    LeaderboardEntry {
        contributor_id,
        display_name: tally.identity.contributor_display_name().to_string(),
        avatar_url: tally.identity.contributor_avatar_url().map(str::to_string),
        contribution_count: tally.count,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit::{day, GiveBuilder};
    use proptest::prelude::*;

    fn give(contributor: u64, d: u32) -> ReferralRecord {
        GiveBuilder::new().by(contributor).created(day(d)).build()
    }

    #[test]
    fn test_groups_and_orders_by_count() {
        let records = vec![give(1, 1), give(1, 1), give(2, 1)];
        let board = build_leaderboard(&records, &TimeWindow::all_time());

        let summary: Vec<(u64, usize)> = board
            .entries()
            .iter()
            .map(|e| (e.contributor_id.0, e.contribution_count))
            .collect();
        assert_eq!(summary, vec![(1, 2), (2, 1)]);
    }

    #[test]
    fn test_window_excluding_all_records_is_empty() {
        let records = vec![give(1, 1), give(1, 1), give(2, 1)];
        let board = build_leaderboard(&records, &TimeWindow::between(day(5), day(12)));
        assert!(board.is_empty());
    }

    #[test]
    fn test_window_filters_partially() {
        let records = vec![give(1, 1), give(1, 8), give(2, 9), give(2, 10)];
        let board = build_leaderboard(&records, &TimeWindow::between(day(5), day(12)));

        assert_eq!(board.entries()[0].contributor_id, ContributorId(2));
        assert_eq!(board.entries()[0].contribution_count, 2);
        assert_eq!(board.entries()[1].contribution_count, 1);
    }

    #[test]
    fn test_unattributed_records_are_skipped() {
        let records = vec![
            GiveBuilder::new().created(day(1)).build(),
            GiveBuilder::new().anonymous_user().created(day(1)).build(),
            give(4, 1),
        ];
        let board = build_leaderboard(&records, &TimeWindow::all_time());
        assert_eq!(board.len(), 1);
        assert_eq!(board.total_contributions(), 1);
    }

    #[test]
    fn test_ties_break_by_ascending_contributor_id() {
        let records = vec![give(9, 1), give(3, 1), give(5, 1), give(5, 2)];
        let board = build_leaderboard(&records, &TimeWindow::all_time());
        let ids: Vec<u64> = board.entries().iter().map(|e| e.contributor_id.0).collect();
        assert_eq!(ids, vec![5, 3, 9]);
    }

    #[test]
    fn test_latest_identity_wins_by_default() {
        let records = vec![
            GiveBuilder::new().by(1).named("Old Name").created(day(5)).build(),
            GiveBuilder::new().by(1).named("New Name").avatar("/new.png").created(day(9)).build(),
            GiveBuilder::new().by(1).named("Stale").created(day(2)).build(),
        ];
        let board = build_leaderboard(&records, &TimeWindow::all_time());
        let entry = &board.entries()[0];
        assert_eq!(entry.display_name, "New Name");
        assert_eq!(entry.avatar_url.as_deref(), Some("/new.png"));
    }

    #[test]
    fn test_first_seen_identity_policy() {
        let records = vec![
            GiveBuilder::new().by(1).named("First").created(day(5)).build(),
            GiveBuilder::new().by(1).named("Second").created(day(9)).build(),
        ];
        let board =
            build_leaderboard_with(&records, &TimeWindow::all_time(), IdentityPolicy::FirstSeen);
        assert_eq!(board.entries()[0].display_name, "First");
    }

    #[test]
    fn test_display_name_falls_back_to_user() {
        let records = vec![GiveBuilder::new().by(2).build()];
        let board = build_leaderboard(&records, &TimeWindow::all_time());
        assert_eq!(board.entries()[0].display_name, "User");
    }

    #[test]
    fn test_podium_and_remainder() {
        let records: Vec<ReferralRecord> = (1..=5)
            .flat_map(|id| (0..id).map(move |_| give(id, 1)))
            .collect();
        let board = build_leaderboard(&records, &TimeWindow::all_time());

        let podium: Vec<u64> = board.podium().iter().map(|e| e.contributor_id.0).collect();
        let rest: Vec<u64> = board.remainder().iter().map(|e| e.contributor_id.0).collect();
        assert_eq!(podium, vec![5, 4, 3]);
        assert_eq!(rest, vec![2, 1]);
    }

    #[test]
    fn test_short_board_has_empty_remainder() {
        let board = build_leaderboard(&[give(1, 1)], &TimeWindow::all_time());
        assert_eq!(board.podium().len(), 1);
        assert!(board.remainder().is_empty());
    }

    #[test]
    fn test_rank_badges() {
        assert_eq!(RankBadge::for_rank(1), RankBadge::Gold);
        assert_eq!(RankBadge::for_rank(3), RankBadge::Bronze);
        assert_eq!(RankBadge::for_rank(4).to_string(), "#4");
    }

    #[test]
    fn test_rank_of_shares_ranks_between_ties() {
        let records = vec![
            give(1, 1),
            give(2, 1),
            give(2, 2),
            give(3, 1),
            give(4, 1),
            give(4, 2),
        ];
        let board = build_leaderboard(&records, &TimeWindow::all_time());
        assert_eq!(board.rank_of(ContributorId(2)), Some(1));
        assert_eq!(board.rank_of(ContributorId(4)), Some(1));
        assert_eq!(board.rank_of(ContributorId(1)), Some(3));
        assert_eq!(board.rank_of(ContributorId(3)), Some(3));
        assert_eq!(board.rank_of(ContributorId(99)), None);
    }

    #[test]
    fn test_config_validation() {
        assert!(LeaderboardConfig::default().validate().is_ok());
        let zero_window = LeaderboardConfig {
            window_days: 0,
            ..Default::default()
        };
        assert!(zero_window.validate().is_err());
    }

    fn arb_record() -> impl Strategy<Value = ReferralRecord> {
        (proptest::option::of(0u64..6), 1u32..28).prop_map(|(contributor, d)| {
            let builder = GiveBuilder::new().created(day(d));
            match contributor {
                Some(id) => builder.by(id).build(),
                None => builder.build(),
            }
        })
    }

    proptest! {
        #[test]
        fn prop_unattributed_records_yield_empty_board(days in proptest::collection::vec(1u32..28, 0..40)) {
            let records: Vec<ReferralRecord> = days
                .into_iter()
                .map(|d| GiveBuilder::new().created(day(d)).build())
                .collect();
            prop_assert!(build_leaderboard(&records, &TimeWindow::all_time()).is_empty());
        }

        #[test]
        fn prop_counts_sum_to_attributable_in_window(
            records in proptest::collection::vec(arb_record(), 0..60),
            start in 1u32..28,
            len in 0u32..28,
        ) {
            let window = TimeWindow::between(day(start), day((start + len).min(28)));
            let expected = records
                .iter()
                .filter(|r| r.contributor_id().is_some() && window.contains(r.created_at))
                .count();
            prop_assert_eq!(build_leaderboard(&records, &window).total_contributions(), expected);

            let all_time = records.iter().filter(|r| r.contributor_id().is_some()).count();
            prop_assert_eq!(
                build_leaderboard(&records, &TimeWindow::all_time()).total_contributions(),
                all_time
            );
        }

        #[test]
        fn prop_build_is_idempotent(records in proptest::collection::vec(arb_record(), 0..60)) {
            let first = build_leaderboard(&records, &TimeWindow::all_time());
            let second = build_leaderboard(&records, &TimeWindow::all_time());
            prop_assert_eq!(first, second);
        }

        #[test]
        fn prop_entries_sorted_descending(records in proptest::collection::vec(arb_record(), 0..60)) {
            let board = build_leaderboard(&records, &TimeWindow::all_time());
            for pair in board.entries().windows(2) {
                prop_assert!(pair[0].contribution_count >= pair[1].contribution_count);
                if pair[0].contribution_count == pair[1].contribution_count {
                    prop_assert!(pair[0].contributor_id < pair[1].contributor_id);
                }
            }
        }

        #[test]
        fn prop_podium_and_remainder_partition(
            records in proptest::collection::vec(arb_record(), 0..60),
            size in 1usize..6,
        ) {
            let board = build_leaderboard(&records, &TimeWindow::all_time());
            let (podium, rest) = board.split_podium(size);
            prop_assert!(podium.len() <= size);
            prop_assert_eq!(podium.len() + rest.len(), board.len());
        }
    }
}
