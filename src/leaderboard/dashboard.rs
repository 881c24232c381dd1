use super::{build_leaderboard_with, Leaderboard, LeaderboardConfig, TimeWindow};
use crate::core::ReferralRecord;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The two boards shown side by side: all-time and the trailing window.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dashboard {
    pub generated_at: DateTime<Utc>,
    pub window_days: u32,
    pub window: TimeWindow,
    pub podium_size: usize,
    pub all_time: Leaderboard,
    pub trailing: Leaderboard,
}

/// Aggregates the same records twice, once unbounded and once over
/// `[now - window_days, now]`.
pub fn build_dashboard(
    records: &[ReferralRecord],
    now: DateTime<Utc>,
    config: &LeaderboardConfig,
) -> Dashboard {
    let window = TimeWindow::trailing_days(now, config.window_days);

    Dashboard {
        generated_at: now,
        window_days: config.window_days,
        window,
        podium_size: config.podium_size,
        all_time: build_leaderboard_with(records, &TimeWindow::all_time(), config.identity),
        trailing: build_leaderboard_with(records, &window, config.identity),
    }
}

impl Dashboard {
    /// Caps both boards, podium included.
    pub fn truncated(self, limit: Option<usize>) -> Self {
        Self {
            all_time: self.all_time.truncated(limit),
            trailing: self.trailing.truncated(limit),
            ..self
        }
    }
}
