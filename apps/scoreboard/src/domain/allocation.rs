//! Point allocation for a single round.
//!
//! Every submission in the batch is ranked by completion time, fastest
//! first, before correctness is looked at. Incorrect teams therefore still
//! occupy a rank (and burn that tier's place-points) even though they score
//! nothing themselves. Equal times keep their input order.

use std::cmp::Ordering;

use super::rules::{place_points, round_multiplier, BLITZ_FACTOR};

/// One team's result for a round, as submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamSubmission {
    pub team_id: i64,
    pub is_correct: bool,
    pub time_seconds: f64,
    pub has_blitz: bool,
}

impl TeamSubmission {
    pub fn new(team_id: i64, is_correct: bool, time_seconds: f64) -> Self {
        Self {
            team_id,
            is_correct,
            time_seconds,
            has_blitz: false,
        }
    }

    pub fn with_blitz(mut self, has_blitz: bool) -> Self {
        self.has_blitz = has_blitz;
        self
    }

    fn award(&self, place_points: i32, multiplier: i32) -> i32 {
        if !self.is_correct {
            return 0;
        }
        let points = place_points * multiplier;
        if self.has_blitz {
            points * BLITZ_FACTOR
        } else {
            points
        }
    }
}

/// Computed outcome for one submission, tied back to its position in the batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Allocation {
    /// Position of the submission in the input batch.
    pub index: usize,
    pub team_id: i64,
    /// Zero-based rank by completion time across the whole batch.
    pub rank: usize,
    /// Place-points for `rank`, before multiplier and blitz.
    pub place_points: i32,
    /// Final value to persist.
    pub points: i32,
}

/// Rank the batch by time and compute the points each team earns.
///
/// The result has one entry per submission, in input order, each carrying
/// its input `index` and `team_id`.
pub fn allocate_points(round_number: i32, submissions: &[TeamSubmission]) -> Vec<Allocation> {
    let multiplier = round_multiplier(round_number);

    // sort_by is stable: ties keep input order
    let mut by_time: Vec<usize> = (0..submissions.len()).collect();
    by_time.sort_by(|&a, &b| {
        submissions[a]
            .time_seconds
            .partial_cmp(&submissions[b].time_seconds)
            .unwrap_or(Ordering::Equal)
    });

    let mut ranks = vec![0usize; submissions.len()];
    for (rank, &index) in by_time.iter().enumerate() {
        ranks[index] = rank;
    }

    submissions
        .iter()
        .enumerate()
        .map(|(index, submission)| {
            let rank = ranks[index];
            let place_points = place_points(rank);
            Allocation {
                index,
                team_id: submission.team_id,
                rank,
                place_points,
                points: submission.award(place_points, multiplier),
            }
        })
        .collect()
}
