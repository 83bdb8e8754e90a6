//! Scoreboard reads and round submissions.

use sea_orm::{ConnectionTrait, DatabaseTransaction};
use tracing::{debug, info};

use crate::domain::allocation::{allocate_points, Allocation, TeamSubmission};
use crate::error::AppError;
use crate::repos::rounds::{self, RoundRecord, RoundResultData};
use crate::repos::teams::{self, TeamStanding};

/// Everything the scoreboard page shows.
#[derive(Debug, Clone, PartialEq)]
pub struct Scoreboard {
    pub teams: Vec<TeamStanding>,
    pub rounds: Vec<RoundRecord>,
}

/// Result of scoring and persisting one round.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmissionOutcome {
    pub round_number: i32,
    pub allocations: Vec<Allocation>,
    pub rows_written: u64,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ScoreboardService;

impl ScoreboardService {
    pub fn new() -> Self {
        Self
    }

    /// Team totals plus every stored round result.
    pub async fn read_scoreboard<C: ConnectionTrait + Send + Sync>(
        &self,
        conn: &C,
    ) -> Result<Scoreboard, AppError> {
        let teams = teams::standings(conn).await?;
        let rounds = rounds::list_with_team_names(conn).await?;

        debug!(
            teams = teams.len(),
            rounds = rounds.len(),
            "scoreboard loaded"
        );
        Ok(Scoreboard { teams, rounds })
    }

    /// Score a round's batch and upsert one row per team.
    ///
    /// Must run inside a transaction: the caller commits only if every
    /// upsert succeeds, so a round is never left partially scored.
    pub async fn submit_round(
        &self,
        txn: &DatabaseTransaction,
        round_number: i32,
        submissions: &[TeamSubmission],
    ) -> Result<SubmissionOutcome, AppError> {
        let allocations = allocate_points(round_number, submissions);

        let mut rows_written = 0;
        for allocation in &allocations {
            let submission = &submissions[allocation.index];
            debug!(
                round_number,
                team_id = allocation.team_id,
                rank = allocation.rank,
                place_points = allocation.place_points,
                points = allocation.points,
                "allocated round points"
            );

            rows_written += rounds::upsert_result(
                txn,
                RoundResultData {
                    round_number,
                    team_id: allocation.team_id,
                    is_correct: submission.is_correct,
                    time_seconds: submission.time_seconds,
                    has_blitz: submission.has_blitz,
                    points: allocation.points,
                },
            )
            .await?;
        }

        info!(
            round_number,
            teams = submissions.len(),
            rows_written,
            "round results saved"
        );

        Ok(SubmissionOutcome {
            round_number,
            allocations,
            rows_written,
        })
    }
}
