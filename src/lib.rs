// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod directory;
pub mod disclosure;
pub mod io;
pub mod leaderboard;
pub mod observability;
pub mod session;
pub mod stats;
pub mod testkit;

// Re-export commonly used types
pub use crate::core::{
    Category, Contributor, ContributorId, Error, GiveId, ReferralRecord, Result, Viewer,
    ViewerRole,
};

pub use crate::leaderboard::{
    build_dashboard, build_leaderboard, build_leaderboard_with, member_standing, Dashboard,
    IdentityPolicy, Leaderboard, LeaderboardConfig, LeaderboardEntry, MemberStanding, RankBadge,
    TimeWindow,
};

pub use crate::disclosure::{
    mask_email, mask_email_partial, mask_phone, mask_phone_partial, resolve_contact_visibility,
    resolve_contact_visibility_with, reveal_creator_contact, ContactView, CreatorContact,
    MaskStyle,
};

pub use crate::directory::{list_directory, DirectoryFilter, DirectoryRow, QueryWatch};
pub use crate::session::{Session, SessionState, SessionUser, TokenPair};
pub use crate::stats::{compute_stats, GiveStats};
