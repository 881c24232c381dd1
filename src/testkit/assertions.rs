//! Assertion macros for leaderboard and error checks.
//!
//! - [`crate::assert_board!`] - compare a leaderboard against `(id, count)` pairs
//! - [`crate::assert_contains_error!`] - assert a `Result` failed with a message fragment
//!
//! # Example
//!
//! ```rust,ignore
//! use givebank::assert_board;
//!
//! let board = build_leaderboard(&records, &TimeWindow::all_time());
//! assert_board!(board, [(1, 2), (2, 1)]);
//! ```

/// Assert a leaderboard's `(contributor id, count)` sequence, in rank order.
#[macro_export]
macro_rules! assert_board {
    ($board:expr, [$(($id:expr, $count:expr)),* $(,)?]) => {{
        let actual: Vec<(u64, usize)> = $board
            .entries()
            .iter()
            .map(|e| (e.contributor_id.0, e.contribution_count))
            .collect();
        let expected: Vec<(u64, usize)> = vec![$(($id, $count)),*];
        assert_eq!(
            actual, expected,
            "leaderboard mismatch\n  at {}:{}:{}",
            file!(),
            line!(),
            column!()
        );
    }};
}

/// Assert that a `Result` is `Err` and its message contains `pattern`.
///
/// Returns the error for further inspection.
#[macro_export]
macro_rules! assert_contains_error {
    ($result:expr, $pattern:expr) => {{
        match $result {
            Ok(value) => panic!(
                "Expected Err containing '{}', got Ok: {:?}\n  at {}:{}:{}",
                $pattern,
                value,
                file!(),
                line!(),
                column!()
            ),
            Err(err) => {
                let message = err.to_string();
                assert!(
                    message.contains($pattern),
                    "Error '{}' does not contain '{}'\n  at {}:{}:{}",
                    message,
                    $pattern,
                    file!(),
                    line!(),
                    column!()
                );
                err
            }
        }
    }};
}
