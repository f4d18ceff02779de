//! Row-store connectivity diagnostics.

use axum::extract::{Query, State};
use axum::Json;
use famous_db::models::consultation::Consultation;
use famous_db::repositories::ConsultationRepo;
use serde::Serialize;

use crate::error::AppResult;
use crate::middleware::rbac::RequireAdmin;
use crate::query::LimitParams;
use crate::response::{data, DataResponse};
use crate::state::AppState;

const DEFAULT_SAMPLE: i64 = 5;
const MAX_SAMPLE: i64 = 50;

#[derive(Debug, Serialize)]
pub struct DatabaseDiagnostics {
    pub connected: bool,
    pub consultation_count: i64,
    pub sample: Vec<Consultation>,
}

/// GET /api/v1/admin/diagnostics/database
///
/// Reads from `consultations` to prove the row-store is reachable with the
/// deployed credentials. A failing query surfaces as a 500. Admin only,
/// since consultations contain contact details.
pub async fn database(
    State(state): State<AppState>,
    RequireAdmin(_admin): RequireAdmin,
    Query(params): Query<LimitParams>,
) -> AppResult<Json<DataResponse<DatabaseDiagnostics>>> {
    let limit = params.limit.unwrap_or(DEFAULT_SAMPLE).clamp(0, MAX_SAMPLE);

    let consultation_count = ConsultationRepo::count(&state.pool).await?;
    let sample = ConsultationRepo::list(&state.pool, limit).await?;

    Ok(data(DatabaseDiagnostics {
        connected: true,
        consultation_count,
        sample,
    }))
}
