//! Axum route handlers for the profile tuner: the HTML form and the JSON API.

use axum::{
    extract::State,
    http::StatusCode,
    response::Html,
    Form, Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::MODEL;
use crate::render::{FormPage, ResultView, EMPTY_INPUT_WARNING};
use crate::state::AppState;
use crate::tuner::sections::ProfileSections;
use crate::tuner::service::{tune_profile, TuneOutcome};

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// Body of both the form post and the JSON request. Absent fields count as blank.
#[derive(Debug, Default, Deserialize)]
pub struct TuneRequest {
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub job_description: String,
}

impl TuneRequest {
    /// Name of the first field that is empty after trimming.
    fn blank_field(&self) -> Option<&'static str> {
        if self.summary.trim().is_empty() {
            Some("summary")
        } else if self.job_description.trim().is_empty() {
            Some("job_description")
        } else {
            None
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TuneResponse {
    pub tuned_profile: String,
    pub sections: Option<ProfileSections>,
    pub model: &'static str,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /
pub async fn handle_form(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    Ok(Html(state.pages.form(&FormPage::default())?))
}

/// POST /tune
///
/// Blank input re-renders the form with a warning and never reaches the LLM.
/// A failed completion still renders the page, with the error text in place
/// of the result, under a 502.
pub async fn handle_tune_form(
    State(state): State<AppState>,
    Form(request): Form<TuneRequest>,
) -> Result<(StatusCode, Html<String>), AppError> {
    let mut page = FormPage {
        summary: &request.summary,
        job_description: &request.job_description,
        ..Default::default()
    };

    if request.blank_field().is_some() {
        page.warning = Some(EMPTY_INPUT_WARNING);
        let html = state.pages.form(&page)?;
        return Ok((StatusCode::UNPROCESSABLE_ENTITY, Html(html)));
    }

    log_request(&request);
    let outcome = tune_profile(
        state.llm.as_ref(),
        &request.summary,
        &request.job_description,
    )
    .await;

    let status = if outcome.is_success() {
        StatusCode::OK
    } else {
        StatusCode::BAD_GATEWAY
    };
    page.result = Some(ResultView::from(&outcome));

    Ok((status, Html(state.pages.form(&page)?)))
}

/// POST /api/v1/tune
pub async fn handle_tune_json(
    State(state): State<AppState>,
    Json(request): Json<TuneRequest>,
) -> Result<Json<TuneResponse>, AppError> {
    if let Some(field) = request.blank_field() {
        return Err(AppError::Validation(format!("{field} cannot be empty")));
    }

    log_request(&request);
    match tune_profile(
        state.llm.as_ref(),
        &request.summary,
        &request.job_description,
    )
    .await
    {
        TuneOutcome::Success { text } => Ok(Json(TuneResponse {
            sections: ProfileSections::parse(&text),
            tuned_profile: text,
            model: MODEL,
        })),
        TuneOutcome::Failure { kind, message } => Err(AppError::Completion { kind, message }),
    }
}

fn log_request(request: &TuneRequest) {
    info!(
        summary_len = request.summary.len(),
        job_description_len = request.job_description.len(),
        "Tune request received"
    );
}
