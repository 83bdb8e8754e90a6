//! Property-based tests for round point allocation.
//!
//! Developer notes:
//! - Increase cases locally with: PROPTEST_CASES=800 cargo test --test allocation_props
//! - The oracle below ranks independently of `allocate_points` to catch
//!   regressions in tie handling.
//!
//! All tests are pure (no DB, no HTTP) and deterministic.

mod common;

use proptest::prelude::*;
use scoreboard::domain::{allocate_points, place_points, round_multiplier, TeamSubmission};

fn submission_strategy() -> impl Strategy<Value = TeamSubmission> {
    (
        1i64..50,
        any::<bool>(),
        // coarse grid so ties are common
        (0u32..40).prop_map(|t| f64::from(t) * 0.5),
        any::<bool>(),
    )
        .prop_map(|(team_id, is_correct, time, blitz)| {
            TeamSubmission::new(team_id, is_correct, time).with_blitz(blitz)
        })
}

fn batch_strategy() -> impl Strategy<Value = Vec<TeamSubmission>> {
    prop::collection::vec(submission_strategy(), 0..10)
}

/// Rank of each input position: count of entries strictly faster, plus
/// earlier entries with the same time.
fn oracle_ranks(batch: &[TeamSubmission]) -> Vec<usize> {
    batch
        .iter()
        .enumerate()
        .map(|(i, s)| {
            batch
                .iter()
                .enumerate()
                .filter(|(j, o)| {
                    o.time_seconds < s.time_seconds
                        || (o.time_seconds == s.time_seconds && *j < i)
                })
                .count()
        })
        .collect()
}

proptest! {
    #![proptest_config(common::proptest_config())]

    #[test]
    fn allocation_is_deterministic(round in 0i32..8, batch in batch_strategy()) {
        prop_assert_eq!(allocate_points(round, &batch), allocate_points(round, &batch));
    }

    #[test]
    fn one_allocation_per_submission_in_input_order(round in 0i32..8, batch in batch_strategy()) {
        let allocations = allocate_points(round, &batch);

        prop_assert_eq!(allocations.len(), batch.len());
        for (i, allocation) in allocations.iter().enumerate() {
            prop_assert_eq!(allocation.index, i);
            prop_assert_eq!(allocation.team_id, batch[i].team_id);
        }
    }

    #[test]
    fn ranks_follow_time_with_stable_ties(round in 0i32..8, batch in batch_strategy()) {
        let allocations = allocate_points(round, &batch);
        let expected = oracle_ranks(&batch);

        for (allocation, rank) in allocations.iter().zip(expected) {
            prop_assert_eq!(allocation.rank, rank);
            prop_assert_eq!(allocation.place_points, place_points(rank));
        }
    }

    #[test]
    fn incorrect_submissions_never_score(round in 0i32..8, batch in batch_strategy()) {
        for allocation in allocate_points(round, &batch) {
            if !batch[allocation.index].is_correct {
                prop_assert_eq!(allocation.points, 0);
            }
        }
    }

    #[test]
    fn correct_points_are_tier_times_multiplier_times_blitz(
        round in 0i32..8,
        batch in batch_strategy(),
    ) {
        let multiplier = round_multiplier(round);

        for allocation in allocate_points(round, &batch) {
            let submission = &batch[allocation.index];
            if submission.is_correct {
                let blitz = if submission.has_blitz { 2 } else { 1 };
                prop_assert_eq!(allocation.points, allocation.place_points * multiplier * blitz);
                prop_assert!([0, 25, 50, 75, 100].contains(&allocation.place_points));
            }
        }
    }
}
