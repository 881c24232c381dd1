//! Testing infrastructure for givebank.
//!
//! Builders and assertion macros shared by unit tests, the integration
//! tests under `tests/`, and the benchmarks.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use givebank::testkit::{day, GiveBuilder};
//! use givebank::{assert_board, build_leaderboard, TimeWindow};
//!
//! #[test]
//! fn test_two_contributors() {
//!     let records = vec![
//!         GiveBuilder::new().by(1).created(day(1)).build(),
//!         GiveBuilder::new().by(1).created(day(2)).build(),
//!         GiveBuilder::new().by(2).created(day(2)).build(),
//!     ];
//!     assert_board!(build_leaderboard(&records, &TimeWindow::all_time()), [(1, 2), (2, 1)]);
//! }
//! ```

pub mod assertions;
pub mod helpers;

// Assertion macros are exported at crate root via #[macro_export]
pub use helpers::{day, sample_listing, GiveBuilder};
