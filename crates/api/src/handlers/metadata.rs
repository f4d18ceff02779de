//! Handlers for link-preview metadata and slug previews.

use axum::extract::{Query, State};
use axum::http::Uri;
use axum::Json;
use famous_core::metadata::{build_page_metadata, PageMetadata};
use famous_core::slug::composite_slug;
use serde::Serialize;

use crate::error::AppResult;
use crate::query::SlugParams;
use crate::response::{data, DataResponse};
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SlugResponse {
    pub slug: String,
}

/// GET /api/v1/metadata/{description}
///
/// The segment is read from the raw URI rather than through `Path`, which
/// would percent-decode it before the canonical URL is built.
pub async fn page_metadata(
    State(state): State<AppState>,
    uri: Uri,
) -> AppResult<Json<DataResponse<PageMetadata>>> {
    let segment = uri.path().rsplit('/').next().unwrap_or_default();
    Ok(data(build_page_metadata(&state.config.site, segment)))
}

/// GET /api/v1/slugs?text=&qualifier=
///
/// Preview the slug the storefront would derive. An empty `slug` means none
/// could be derived from the input.
pub async fn preview_slug(Query(params): Query<SlugParams>) -> Json<DataResponse<SlugResponse>> {
    data(SlugResponse {
        slug: composite_slug(&params.text, params.qualifier.as_deref()),
    })
}
