use crate::infra::{ApiState, MetricsState};
use axum::extract::{Query, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Extension, Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use vot_romania::content::{ContentAction, ContentSessionState};
use vot_romania::data::ApplicationDataSnapshot;
use vot_romania::error::AppError;
use vot_romania::search::{AddressQuery, RankedStation, SearchError};

/// Structured fields win; `q` is only parsed when all of them are missing.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct SearchParams {
    #[serde(default)]
    pub(crate) locality: Option<String>,
    #[serde(default)]
    pub(crate) street: Option<String>,
    #[serde(default)]
    pub(crate) number: Option<String>,
    #[serde(default)]
    pub(crate) q: Option<String>,
}

impl SearchParams {
    pub(crate) fn into_query(self) -> AddressQuery {
        let SearchParams {
            locality,
            street,
            number,
            q,
        } = self;

        match q {
            Some(text) if locality.is_none() && street.is_none() && number.is_none() => {
                AddressQuery::parse(&text)
            }
            _ => AddressQuery {
                locality,
                street,
                number,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct SearchResponse {
    pub(crate) query: AddressQuery,
    pub(crate) resolver: &'static str,
    pub(crate) results: Vec<RankedStation>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SessionParams {
    #[serde(default)]
    pub(crate) language: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ReloadResponse {
    pub(crate) languages: Vec<String>,
    pub(crate) stations: usize,
    pub(crate) loaded_at: DateTime<Utc>,
}

pub(crate) struct SnapshotBody(Arc<ApplicationDataSnapshot>);

impl IntoResponse for SnapshotBody {
    fn into_response(self) -> Response {
        Json(&*self.0).into_response()
    }
}

pub(crate) fn api_router(state: ApiState) -> Router {
    Router::new()
        .route("/api/v1/application-content", get(application_content))
        .route("/api/v1/application-content/session", get(content_session))
        .route(
            "/api/v1/polling-stations/search",
            get(search_stations_query).post(search_stations_body),
        )
        .route("/api/v1/data/reload", post(reload_data))
        .with_state(state)
}

pub(crate) fn with_metrics_route(router: Router) -> Router {
    router.route("/metrics", get(metrics_endpoint))
}

pub(crate) async fn application_content(
    State(state): State<ApiState>,
) -> Result<SnapshotBody, AppError> {
    let snapshot = state.store.current().ok_or(SearchError::DataUnavailable)?;
    Ok(SnapshotBody(snapshot))
}

/// Content view for one language, derived the same way the client derives it.
pub(crate) async fn content_session(
    State(state): State<ApiState>,
    Query(params): Query<SessionParams>,
) -> Result<Json<ContentSessionState>, AppError> {
    let snapshot = state.store.current().ok_or(SearchError::DataUnavailable)?;

    let mut session = ContentSessionState::new(state.default_language.as_ref())
        .reduce(ContentAction::LoadDataDone(snapshot));
    if let Some(language) = params.language {
        session = session.reduce(ContentAction::ChangeLanguage(language));
    }

    Ok(Json(session))
}

pub(crate) async fn search_stations_query(
    State(state): State<ApiState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, AppError> {
    run_search(&state, params)
}

pub(crate) async fn search_stations_body(
    State(state): State<ApiState>,
    Json(params): Json<SearchParams>,
) -> Result<Json<SearchResponse>, AppError> {
    run_search(&state, params)
}

fn run_search(state: &ApiState, params: SearchParams) -> Result<Json<SearchResponse>, AppError> {
    let query = params.into_query();
    let results = state.search.search(&query)?;

    Ok(Json(SearchResponse {
        query,
        resolver: state.search.resolver_name(),
        results,
    }))
}

pub(crate) async fn reload_data(
    State(state): State<ApiState>,
) -> Result<Json<ReloadResponse>, AppError> {
    let snapshot = state.store.reload(state.provider.as_ref())?;

    Ok(Json(ReloadResponse {
        languages: snapshot.static_texts.languages(),
        stations: snapshot.polling_stations_info.len(),
        loaded_at: snapshot.loaded_at,
    }))
}

pub(crate) async fn metrics_endpoint(
    Extension(state): Extension<MetricsState>,
) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}
