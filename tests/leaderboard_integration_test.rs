use chrono::{DateTime, Utc};
use givebank::assert_board;
use givebank::io::parse_listing;
use givebank::testkit::{day, GiveBuilder};
use givebank::{
    build_dashboard, build_leaderboard, build_leaderboard_with, member_standing, ContributorId,
    IdentityPolicy, LeaderboardConfig, ReferralRecord, TimeWindow, Viewer, ViewerRole,
};
use pretty_assertions::assert_eq;

fn fixture() -> Vec<ReferralRecord> {
    parse_listing(include_str!("data/gives.json")).unwrap()
}

fn at(text: &str) -> DateTime<Utc> {
    text.parse().unwrap()
}

#[test]
fn test_all_time_board_from_two_contributors() {
    let records = vec![
        GiveBuilder::new().by(1).created(day(1)).build(),
        GiveBuilder::new().by(1).created(day(1)).build(),
        GiveBuilder::new().by(2).created(day(1)).build(),
    ];
    let board = build_leaderboard(&records, &TimeWindow::all_time());
    assert_board!(board, [(1, 2), (2, 1)]);
}

#[test]
fn test_window_that_excludes_every_record() {
    let records = vec![
        GiveBuilder::new().by(1).created(day(1)).build(),
        GiveBuilder::new().by(1).created(day(1)).build(),
        GiveBuilder::new().by(2).created(day(1)).build(),
    ];
    let board = build_leaderboard(&records, &TimeWindow::between(day(5), day(12)));
    assert!(board.is_empty());
}

#[test]
fn test_fixture_all_time_board() {
    let board = build_leaderboard(&fixture(), &TimeWindow::all_time());
    assert_board!(board, [(1, 2), (3, 2), (2, 1)]);

    let names: Vec<&str> = board.entries().iter().map(|e| e.display_name.as_str()).collect();
    assert_eq!(names, vec!["Asha", "Meera", "ravi"]);
}

#[test]
fn test_fixture_identity_follows_latest_give() {
    let records = fixture();

    let latest = build_leaderboard(&records, &TimeWindow::all_time());
    assert_eq!(latest.entries()[0].avatar_url, None);

    let first_seen =
        build_leaderboard_with(&records, &TimeWindow::all_time(), IdentityPolicy::FirstSeen);
    assert_eq!(
        first_seen.entries()[0].avatar_url.as_deref(),
        Some("/media/asha.png")
    );
}

#[test]
fn test_fixture_dashboard_trailing_week() {
    let dashboard = build_dashboard(
        &fixture(),
        at("2025-06-20T12:00:00Z"),
        &LeaderboardConfig::default(),
    );

    assert_board!(dashboard.all_time, [(1, 2), (3, 2), (2, 1)]);
    assert_board!(dashboard.trailing, [(2, 1), (3, 1)]);
    assert_eq!(dashboard.window.start, Some(at("2025-06-13T12:00:00Z")));
    assert_eq!(dashboard.window.end, Some(at("2025-06-20T12:00:00Z")));
}

#[test]
fn test_window_bounds_are_inclusive() {
    let records = vec![
        GiveBuilder::new().by(1).created(day(5)).build(),
        GiveBuilder::new().by(2).created(day(12)).build(),
    ];
    let board = build_leaderboard(&records, &TimeWindow::between(day(5), day(12)));
    assert_board!(board, [(1, 1), (2, 1)]);
}

#[test]
fn test_podium_and_remainder_over_fixture() {
    let board = build_leaderboard(&fixture(), &TimeWindow::all_time());
    let (podium, rest) = board.split_podium(2);
    assert_eq!(podium.len(), 2);
    assert_eq!(rest.len(), 1);
    assert_eq!(rest[0].display_name, "ravi");
}

#[test]
fn test_large_listing_counts_every_attributed_give() {
    let records = givebank::testkit::sample_listing(500, 12);
    let board = build_leaderboard(&records, &TimeWindow::all_time());
    assert_eq!(board.total_contributions(), 500);
    assert!(board.len() <= 12);
}

#[test]
fn test_fixture_member_standings() {
    let records = fixture();
    let now = at("2025-06-20T12:00:00Z");
    let standing = |id| {
        let viewer = Viewer::new(Some(ContributorId(id)), ViewerRole::Standard);
        member_standing(&records, &viewer, now, 7)
    };

    let asha = standing(1);
    let meera = standing(3);
    assert_eq!((asha.total_gives, asha.window_gives, asha.rank), (2, 0, Some(1)));
    assert_eq!((meera.total_gives, meera.window_gives, meera.rank), (2, 1, Some(1)));
    assert_eq!(standing(2).rank, Some(3));
    assert_eq!(standing(42).rank, None);
}
