// SPDX-License-Identifier: Apache-2.0

use crate::{AppState, CRATE_NAME};
use axum::extract::{Query, State};
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use bestiary_api::{
    parse_list_creatures_params_with_limits, ApiError, CreatureDto, CreaturePageDto,
};
use bestiary_query::run_query;
use serde_json::json;
use std::collections::BTreeMap;

pub(crate) fn api_error_response(status: StatusCode, err: ApiError) -> Response {
    (status, Json(json!({"error": err}))).into_response()
}

pub(crate) fn if_none_match(headers: &HeaderMap) -> Option<&str> {
    headers.get(header::IF_NONE_MATCH).and_then(|v| v.to_str().ok())
}

pub(crate) fn etag_for(fingerprint: &str) -> String {
    format!("\"{fingerprint}\"")
}

pub(crate) fn wants_pretty(params: &BTreeMap<String, String>) -> bool {
    params
        .get("pretty")
        .is_some_and(|v| v == "1" || v.eq_ignore_ascii_case("true"))
}

fn json_response(
    status: StatusCode,
    payload: &impl serde::Serialize,
    pretty: bool,
) -> Result<Response, ApiError> {
    let body = if pretty {
        serde_json::to_string_pretty(payload)
    } else {
        serde_json::to_string(payload)
    }
    .map_err(|e| {
        ApiError::new(
            bestiary_api::ApiErrorCode::Internal,
            "json serialization failed",
            json!({"message": e.to_string()}),
        )
    })?;
    Ok((
        status,
        [(header::CONTENT_TYPE, HeaderValue::from_static("application/json"))],
        body,
    )
        .into_response())
}

pub(crate) async fn healthz_handler() -> impl IntoResponse {
    (StatusCode::OK, "ok")
}

pub(crate) async fn readyz_handler(State(state): State<AppState>) -> impl IntoResponse {
    if state.is_ready() {
        (StatusCode::OK, "ready")
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, "dataset unavailable")
    }
}

pub(crate) async fn version_handler() -> impl IntoResponse {
    let payload = json!({
        "name": CRATE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
    });
    let mut response = Json(payload).into_response();
    if let Ok(value) = HeaderValue::from_str("public, max-age=30") {
        response.headers_mut().insert(header::CACHE_CONTROL, value);
    }
    response
}

/// The read endpoint: the full record set as one JSON array. ETagged with
/// the dataset fingerprint; a failed dataset load surfaces as 404 with
/// the error envelope, no retry.
///
/// Unlike the search endpoint this one takes no query inputs, so it does
/// not run the strict parameter parse: `pretty` is honored and anything
/// else is ignored.
pub(crate) async fn creatures_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(params): Query<BTreeMap<String, String>>,
) -> Response {
    let dataset = match state.dataset() {
        Ok(dataset) => dataset,
        Err(reason) => {
            return api_error_response(StatusCode::NOT_FOUND, ApiError::dataset_unavailable(reason))
        }
    };

    let etag = etag_for(dataset.fingerprint());
    if if_none_match(&headers) == Some(etag.as_str()) {
        let mut response = StatusCode::NOT_MODIFIED.into_response();
        if let Ok(value) = HeaderValue::from_str(&etag) {
            response.headers_mut().insert(header::ETAG, value);
        }
        return response;
    }

    let payload: Vec<CreatureDto> = dataset.records().iter().map(CreatureDto::from).collect();
    let mut response = match json_response(StatusCode::OK, &payload, wants_pretty(&params)) {
        Ok(response) => response,
        Err(err) => return api_error_response(StatusCode::INTERNAL_SERVER_ERROR, err),
    };
    if let Ok(value) = HeaderValue::from_str(&etag) {
        response.headers_mut().insert(header::ETAG, value);
    }
    if let Ok(value) = HeaderValue::from_str("public, max-age=300") {
        response.headers_mut().insert(header::CACHE_CONTROL, value);
    }
    response
}

/// Server-side pipeline run: strict params, then filter → sort → slice.
pub(crate) async fn creatures_search_handler(
    State(state): State<AppState>,
    Query(params): Query<BTreeMap<String, String>>,
) -> Response {
    let dataset = match state.dataset() {
        Ok(dataset) => dataset,
        Err(reason) => {
            return api_error_response(StatusCode::NOT_FOUND, ApiError::dataset_unavailable(reason))
        }
    };

    let parsed = match parse_list_creatures_params_with_limits(
        &params,
        state.config.default_per_page,
        state.config.max_per_page,
    ) {
        Ok(parsed) => parsed,
        Err(err) => return api_error_response(StatusCode::BAD_REQUEST, err),
    };

    let page = run_query(dataset.records(), &parsed.to_query_state());
    tracing::debug!(
        query = %parsed.query,
        dimension = parsed.dimension.as_str(),
        page = parsed.page,
        matches = page.total_matches,
        "creature search"
    );
    let payload = CreaturePageDto::from_page(&page);
    match json_response(StatusCode::OK, &payload, parsed.pretty) {
        Ok(response) => response,
        Err(err) => api_error_response(StatusCode::INTERNAL_SERVER_ERROR, err),
    }
}
