use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use std::sync::Arc;
use std::time::Instant;

use crate::search_client::BlogSearch;
use crate::service::KeywordService;

use super::models::{ErrorResponse, MISSING_QUERY_MESSAGE, SearchParams, SearchResponse};

pub async fn search_handler<S: BlogSearch + 'static>(
    State(service): State<Arc<KeywordService<S>>>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, (StatusCode, Json<ErrorResponse>)> {
    let start = Instant::now();

    let Some(request) = params.into_request() else {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse {
                error: MISSING_QUERY_MESSAGE.to_string(),
            }),
        ));
    };

    log::info!(
        "search query={:?} display={} start={}",
        request.query,
        request.display,
        request.start
    );

    let result = service.analyze(&request).await;
    log::info!(
        "search query={:?} done: {} keywords, demo={}, {}ms",
        result.query,
        result.keywords.len(),
        result.is_demo,
        start.elapsed().as_millis()
    );

    Ok(Json(result.into()))
}

/// Plain `OPTIONS` requests get an empty 200. Real CORS preflights are answered by the
/// CORS layer before reaching this.
pub async fn preflight_handler() -> StatusCode {
    StatusCode::OK
}
