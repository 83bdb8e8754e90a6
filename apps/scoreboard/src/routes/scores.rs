//! `/api/scores`: one resource, the HTTP method picks the action.

use actix_web::http::header::{
    ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS, ACCESS_CONTROL_ALLOW_ORIGIN,
    ACCESS_CONTROL_MAX_AGE,
};
use actix_web::http::Method;
use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::db::txn::with_txn;
use crate::domain::allocation::TeamSubmission;
use crate::error::AppError;
use crate::http::headers::{
    ANY_ORIGIN, PREFLIGHT_ALLOW_HEADERS, PREFLIGHT_ALLOW_METHODS, PREFLIGHT_MAX_AGE_SECS,
};
use crate::http::json_body::decode_json;
use crate::repos::rounds::RoundRecord;
use crate::repos::teams::TeamStanding;
use crate::services::scoreboard::{Scoreboard, ScoreboardService};
use crate::state::app_state::AppState;

pub const SCORES_PATH: &str = "/api/scores";

/// What a request to the scores resource asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreAction {
    ReadScoreboard,
    SubmitRound,
    Preflight,
    Unsupported,
}

impl ScoreAction {
    pub fn from_method(method: &Method) -> Self {
        match *method {
            Method::GET => ScoreAction::ReadScoreboard,
            Method::POST => ScoreAction::SubmitRound,
            Method::OPTIONS => ScoreAction::Preflight,
            _ => ScoreAction::Unsupported,
        }
    }

    /// Stable name used in request logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            ScoreAction::ReadScoreboard => "read_scoreboard",
            ScoreAction::SubmitRound => "submit_round",
            ScoreAction::Preflight => "preflight",
            ScoreAction::Unsupported => "unsupported",
        }
    }
}

/// Body of a round submission.
#[derive(Debug, Deserialize)]
pub struct SubmitRoundRequest {
    pub round_number: i32,
    #[serde(default)]
    pub team_results: Vec<TeamResultPayload>,
}

#[derive(Debug, Deserialize)]
pub struct TeamResultPayload {
    pub team_id: i64,
    pub is_correct: bool,
    pub time_seconds: f64,
    /// Missing or `null` means no blitz.
    pub has_blitz: Option<bool>,
}

impl From<TeamResultPayload> for TeamSubmission {
    fn from(payload: TeamResultPayload) -> Self {
        TeamSubmission::new(payload.team_id, payload.is_correct, payload.time_seconds)
            .with_blitz(payload.has_blitz.unwrap_or(false))
    }
}

#[derive(Debug, Serialize)]
pub struct TeamTotalResponse {
    pub id: i64,
    pub name: String,
    pub total_points: i64,
}

#[derive(Debug, Serialize)]
pub struct RoundResponse {
    pub round_number: i32,
    pub team_id: i64,
    pub team_name: String,
    pub is_correct: bool,
    pub time_seconds: f64,
    pub has_blitz: bool,
    pub points: i32,
}

#[derive(Debug, Serialize)]
pub struct ScoreboardResponse {
    pub teams: Vec<TeamTotalResponse>,
    pub rounds: Vec<RoundResponse>,
}

#[derive(Debug, Serialize)]
pub struct SubmitRoundResponse {
    pub success: bool,
    pub message: String,
}

impl From<TeamStanding> for TeamTotalResponse {
    fn from(team: TeamStanding) -> Self {
        Self {
            id: team.id,
            name: team.name,
            total_points: team.total_points,
        }
    }
}

impl From<RoundRecord> for RoundResponse {
    fn from(round: RoundRecord) -> Self {
        Self {
            round_number: round.round_number,
            team_id: round.team_id,
            team_name: round.team_name,
            is_correct: round.is_correct,
            time_seconds: round.time_seconds,
            has_blitz: round.has_blitz,
            points: round.points,
        }
    }
}

impl From<Scoreboard> for ScoreboardResponse {
    fn from(board: Scoreboard) -> Self {
        Self {
            teams: board.teams.into_iter().map(Into::into).collect(),
            rounds: board.rounds.into_iter().map(Into::into).collect(),
        }
    }
}

/// GET /api/scores
async fn read_scoreboard(app_state: &AppState) -> Result<HttpResponse, AppError> {
    let board = with_txn(app_state, |txn| {
        Box::pin(async move { ScoreboardService::new().read_scoreboard(txn).await })
    })
    .await?;

    Ok(HttpResponse::Ok()
        .insert_header((ACCESS_CONTROL_ALLOW_ORIGIN, ANY_ORIGIN))
        .json(ScoreboardResponse::from(board)))
}

/// POST /api/scores
async fn submit_round(app_state: &AppState, body: &[u8]) -> Result<HttpResponse, AppError> {
    let request: SubmitRoundRequest = decode_json(body)?;
    let round_number = request.round_number;
    let submissions: Vec<TeamSubmission> = request
        .team_results
        .into_iter()
        .map(TeamSubmission::from)
        .collect();

    with_txn(app_state, move |txn| {
        Box::pin(async move {
            ScoreboardService::new()
                .submit_round(txn, round_number, &submissions)
                .await
        })
    })
    .await?;

    Ok(HttpResponse::Ok()
        .insert_header((ACCESS_CONTROL_ALLOW_ORIGIN, ANY_ORIGIN))
        .json(SubmitRoundResponse {
            success: true,
            message: "Results saved".to_string(),
        }))
}

/// OPTIONS /api/scores
fn preflight() -> HttpResponse {
    HttpResponse::Ok()
        .insert_header((ACCESS_CONTROL_ALLOW_ORIGIN, ANY_ORIGIN))
        .insert_header((ACCESS_CONTROL_ALLOW_METHODS, PREFLIGHT_ALLOW_METHODS))
        .insert_header((ACCESS_CONTROL_ALLOW_HEADERS, PREFLIGHT_ALLOW_HEADERS))
        .insert_header((ACCESS_CONTROL_MAX_AGE, PREFLIGHT_MAX_AGE_SECS.to_string()))
        .finish()
}

async fn scores(
    req: HttpRequest,
    body: web::Bytes,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    match ScoreAction::from_method(req.method()) {
        ScoreAction::ReadScoreboard => read_scoreboard(app_state.get_ref()).await,
        ScoreAction::SubmitRound => submit_round(app_state.get_ref(), &body).await,
        ScoreAction::Preflight => Ok(preflight()),
        ScoreAction::Unsupported => Err(AppError::method_not_allowed(req.method().as_str())),
    }
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource(SCORES_PATH).route(web::route().to(scores)));
}
