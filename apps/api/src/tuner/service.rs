//! Profile tuning: prompt construction plus one completion call.
//!
//! Flow: build_prompt → CompletionClient::complete → TuneOutcome.
//!
//! Every failure stops here. Callers get a `TuneOutcome` they can branch on,
//! and `display_text()` gives the single message a user should see.

use tracing::{info, warn};

use crate::llm_client::{CompletionClient, FailureKind};
use crate::tuner::prompts::{build_prompt, PROFILE_TUNER_SYSTEM};

/// Prefix of the message shown when a completion fails.
pub const ERROR_PREFIX: &str = "An error occurred: ";

/// Result of one tuning request.
#[derive(Debug, Clone, PartialEq)]
pub enum TuneOutcome {
    /// First choice's text, exactly as the provider returned it.
    Success { text: String },
    Failure { kind: FailureKind, message: String },
}

impl TuneOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, TuneOutcome::Success { .. })
    }

    /// What the user sees: the model text, or `"An error occurred: <details>"`.
    pub fn display_text(&self) -> String {
        match self {
            TuneOutcome::Success { text } => text.clone(),
            TuneOutcome::Failure { message, .. } => format!("{ERROR_PREFIX}{message}"),
        }
    }
}

/// Sends `prompt` as the user message, behind the fixed system message.
/// Exactly one attempt.
pub async fn request_completion(client: &dyn CompletionClient, prompt: &str) -> TuneOutcome {
    match client.complete(PROFILE_TUNER_SYSTEM, prompt).await {
        Ok(text) => {
            info!(response_len = text.len(), "Completion succeeded");
            TuneOutcome::Success { text }
        }
        Err(e) => {
            let kind = e.kind();
            warn!(?kind, "Completion failed: {e}");
            TuneOutcome::Failure {
                kind,
                message: e.to_string(),
            }
        }
    }
}

pub async fn tune_profile(
    client: &dyn CompletionClient,
    summary: &str,
    job_description: &str,
) -> TuneOutcome {
    let prompt = build_prompt(summary, job_description);
    request_completion(client, &prompt).await
}
