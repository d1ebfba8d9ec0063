//! Axum route handlers for the search page and the JSON search API.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    Json,
};
use serde::Deserialize;
use tracing::warn;

use crate::errors::AppError;
use crate::models::CompanyProfile;
use crate::render::render_page;
use crate::search::{run_search, SearchOutcome, SearchRequest};
use crate::state::AppState;

/// Query string submitted by the search form.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SearchQuery {
    pub keyword: String,
    pub company_name: String,
    pub experience: String,
    pub capabilities: String,
    pub certifications: String,
    pub past_performance: String,
    pub competitive_advantages: String,
}

impl From<SearchQuery> for SearchRequest {
    fn from(query: SearchQuery) -> Self {
        let profile = CompanyProfile {
            company_name: query.company_name,
            experience: query.experience,
            capabilities: query.capabilities,
            certifications: query.certifications,
            past_performance: query.past_performance,
            competitive_advantages: query.competitive_advantages,
        };
        SearchRequest {
            keyword: query.keyword,
            company_profile: Some(profile),
        }
    }
}

/// GET /
pub async fn handle_index() -> Html<String> {
    Html(render_page(&SearchRequest::default(), None, None))
}

/// GET /search
///
/// Runs a search and renders the comparison page. A configuration problem is
/// shown as a banner and no backend is called.
pub async fn handle_search_page(
    State(state): State<AppState>,
    Query(query): Query<SearchQuery>,
) -> (StatusCode, Html<String>) {
    let request = SearchRequest::from(query);

    match state.backends() {
        Ok(backends) => {
            let outcome = run_search(backends, &request).await;
            (
                StatusCode::OK,
                Html(render_page(&request, Some(&outcome), None)),
            )
        }
        Err(err) => {
            warn!("Search refused: {err}");
            (
                err.status(),
                Html(render_page(&request, None, Some(&err.user_message()))),
            )
        }
    }
}

/// POST /api/v1/search
///
/// Same pipeline as the page, returned as JSON.
pub async fn handle_search_api(
    State(state): State<AppState>,
    Json(request): Json<SearchRequest>,
) -> Result<Json<SearchOutcome>, AppError> {
    let backends = state.backends()?;
    Ok(Json(run_search(backends, &request).await))
}
