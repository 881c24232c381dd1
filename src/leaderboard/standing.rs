use super::{build_leaderboard, TimeWindow};
use crate::core::{ContributorId, ReferralRecord, Viewer};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A signed-in member's own figures, shown above the leaderboards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberStanding {
    pub contributor_id: Option<ContributorId>,
    pub total_gives: usize,
    pub window_days: u32,
    /// Gives created within the last `window_days`.
    pub window_gives: usize,
    /// Competition rank on the all-time board; `None` until the member has a give.
    pub rank: Option<usize>,
}

/// Standing of `viewer` among all contributors.
///
/// Members tied on count share a rank, and the next distinct count skips
/// accordingly (1, 1, 3). Viewers without an id have no gives and no rank.
pub fn member_standing(
    records: &[ReferralRecord],
    viewer: &Viewer,
    now: DateTime<Utc>,
    window_days: u32,
) -> MemberStanding {
    let Some(member) = viewer.id else {
        return MemberStanding {
            contributor_id: None,
            total_gives: 0,
            window_days,
            window_gives: 0,
            rank: None,
        };
    };

    let board = build_leaderboard(records, &TimeWindow::all_time());
    let total_gives = board
        .entries()
        .iter()
        .find(|e| e.contributor_id == member)
        .map_or(0, |e| e.contribution_count);

    let window = TimeWindow::trailing_days(now, window_days);
    let window_gives = records
        .iter()
        .filter(|r| r.contributor_id() == Some(member) && window.contains(r.created_at))
        .count();

    MemberStanding {
        contributor_id: Some(member),
        total_gives,
        window_days,
        window_gives,
        rank: board.rank_of(member),
    }
}
