//! Shared form-submission endpoint.
//!
//! One endpoint serves every form on the site; the `intent` field names
//! the action to run. The waitlist join is currently the only one.

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Form, Json};
use serde::{Deserialize, Serialize};

use crate::domains::waitlist::actions::join_waitlist;
use crate::server::app::AxumAppState;

/// Raw submission as posted by the form.
///
/// Both fields default to empty so a missing field flows through the
/// action's own checks instead of failing extraction.
#[derive(Debug, Deserialize)]
pub struct FormSubmission {
    #[serde(default)]
    pub intent: String,
    #[serde(default)]
    pub email: String,
}

/// Structured result returned to the form.
#[derive(Debug, Serialize, Deserialize)]
pub struct FormResponse {
    pub ok: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Handle a form submission.
///
/// 400 for client input errors (unknown intent, malformed email), 500 when
/// the server is unconfigured or the record store fails. The body always
/// carries a well-formed `FormResponse`.
pub async fn form_handler(
    State(state): State<AxumAppState>,
    Form(submission): Form<FormSubmission>,
) -> (StatusCode, Json<FormResponse>) {
    match join_waitlist(&submission.intent, &submission.email, &state.deps).await {
        Ok(()) => (
            StatusCode::OK,
            Json(FormResponse {
                ok: true,
                error: None,
            }),
        ),
        Err(error) => {
            let status = if error.is_client_error() {
                StatusCode::BAD_REQUEST
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (
                status,
                Json(FormResponse {
                    ok: false,
                    error: Some(error.to_string()),
                }),
            )
        }
    }
}
