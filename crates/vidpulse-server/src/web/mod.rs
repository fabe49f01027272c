mod page;

use std::sync::Arc;

use axum::{
    extract::{rejection::FormRejection, State},
    response::Html,
    routing::get,
    Extension, Form, Json, Router,
};
use serde::{Deserialize, Serialize};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;
use vidpulse_core::{CategoryMap, VideoRecord};
use vidpulse_youtube::{aggregate_category, YoutubeClient};

use crate::middleware::{request_id, RequestId};

#[derive(Clone)]
pub struct AppState {
    pub client: Arc<YoutubeClient>,
    /// Resolved once at startup and read-only afterwards.
    pub categories: Arc<CategoryMap>,
}

impl AppState {
    pub fn new(client: YoutubeClient, categories: CategoryMap) -> Self {
        Self {
            client: Arc::new(client),
            categories: Arc::new(categories),
        }
    }
}

#[derive(Debug, Deserialize)]
struct IndexForm {
    #[serde(default)]
    vc_selected: Option<String>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
    categories: usize,
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index).post(submit))
        .route("/health", get(health))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn index(State(state): State<AppState>) -> Html<String> {
    Html(page::render_index(&state.categories, None, &[]))
}

/// Handles a category submission.
///
/// Every failure, from a malformed form to an API outage, renders the form
/// again with no results and a 200 status.
async fn submit(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    form: Result<Form<IndexForm>, FormRejection>,
) -> Html<String> {
    let selected = match form {
        Ok(Form(form)) => form.vc_selected,
        Err(rejection) => {
            tracing::warn!(request_id = %req_id.0, error = %rejection, "rejected category form");
            None
        }
    };

    let records = match trending_for(&state, selected.as_deref()).await {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!(
                request_id = %req_id.0,
                category = selected.as_deref().unwrap_or_default(),
                error = %e,
                "trending lookup failed; rendering empty results"
            );
            Vec::new()
        }
    };

    Html(page::render_index(
        &state.categories,
        selected.as_deref(),
        &records,
    ))
}

async fn trending_for(
    state: &AppState,
    selected: Option<&str>,
) -> anyhow::Result<Vec<VideoRecord>> {
    let name = selected.ok_or_else(|| anyhow::anyhow!("no category submitted"))?;
    let category_id = state
        .categories
        .id_for(name)
        .ok_or_else(|| anyhow::anyhow!("unknown category '{name}'"))?;

    let records = aggregate_category(&state.client, category_id).await?;
    tracing::info!(
        category = name,
        category_id,
        video_count = records.len(),
        "rendered trending videos"
    );
    Ok(records)
}

async fn health(State(state): State<AppState>) -> Json<HealthData> {
    Json(HealthData {
        status: "ok",
        categories: state.categories.len(),
    })
}
