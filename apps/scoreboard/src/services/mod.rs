pub mod scoreboard;

pub use scoreboard::{Scoreboard, ScoreboardService, SubmissionOutcome};
