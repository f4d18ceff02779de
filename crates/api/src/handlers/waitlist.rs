//! Handlers for the launch waitlist.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use famous_db::models::waitlist::{CreateWaitlistEntry, WaitlistEntry};
use famous_db::repositories::WaitlistRepo;
use serde::Deserialize;
use validator::Validate;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::response::{data, DataResponse};
use crate::state::AppState;

/// Request body for `POST /waitlist`.
#[derive(Debug, Deserialize, Validate)]
pub struct SubscribeRequest {
    #[validate(email(message = "email must be a valid address"))]
    pub email: String,
    #[validate(length(max = 200, message = "name must be at most 200 characters"))]
    pub name: Option<String>,
}

/// POST /api/v1/waitlist
///
/// Public signup. Emails are stored trimmed and lowercased; signing up twice
/// is a 409.
pub async fn subscribe(
    State(state): State<AppState>,
    Json(mut input): Json<SubscribeRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<WaitlistEntry>>)> {
    input.email = input.email.trim().to_lowercase();
    input.validate()?;

    let entry = WaitlistRepo::subscribe(
        &state.pool,
        &CreateWaitlistEntry {
            email: input.email,
            name: input
                .name
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
        },
    )
    .await?;

    tracing::info!(waitlist_id = entry.id, "Waitlist signup");
    Ok((StatusCode::CREATED, data(entry)))
}

/// GET /api/v1/admin/waitlist
///
/// All signups, newest first. Admin only.
pub async fn list(
    State(state): State<AppState>,
    RequireAdmin(admin): RequireAdmin,
) -> AppResult<Json<DataResponse<Vec<WaitlistEntry>>>> {
    let entries = WaitlistRepo::list_recent(&state.pool).await?;
    tracing::debug!(user_id = %admin.user_id, count = entries.len(), "Listed waitlist");
    Ok(data(entries))
}
