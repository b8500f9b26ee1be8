//! The single-page web front end.
pub mod form;
pub mod page;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::extract::{Form, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower_http::services::ServeFile;

use diabetes_classifiers::{encode, PredictionError, Predictor, RawSelections};

use crate::input::ServeConfig;
use form::SubmittedForm;
use page::{render_page, Outcome, PageConfig};

/// Shared, read-only state of the running server.
pub struct AppState {
    pub predictor: Predictor,
    pub page: PageConfig,
    pub sidebar_image: Option<String>,
}

impl AppState {
    pub fn new(predictor: Predictor, config: &ServeConfig) -> Self {
        AppState {
            predictor,
            page: PageConfig {
                sidebar_text: config.sidebar_text.clone(),
                sidebar_credit: config.sidebar_credit.clone(),
                has_sidebar_image: config.sidebar_image.is_some(),
            },
            sidebar_image: config.sidebar_image.clone(),
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    let app = Router::new()
        .route("/", get(index))
        .route("/predict", get(index).post(predict))
        .route("/health", get(health));

    let app = match &state.sidebar_image {
        Some(path) => app.route_service("/sidebar-image", ServeFile::new(path)),
        None => app,
    };

    app.with_state(state)
}

/// Bind and serve until the process is stopped. The predictor is loaded by
/// the caller so model failures surface before the socket is opened.
pub async fn serve(config: ServeConfig, predictor: Predictor) -> Result<()> {
    let addr = config.socket_addr()?;
    let state = Arc::new(AppState::new(predictor, &config));
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    log::info!("[Diabetes::Web] Listening on http://{}", addr);
    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}

async fn health() -> &'static str {
    "ok"
}

async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    Html(render_page(&state.page, &RawSelections::default(), None).into_string())
}

async fn predict(State(state): State<Arc<AppState>>, Form(form): Form<SubmittedForm>) -> Response {
    let selections = match form.into_selections() {
        Ok(selections) => selections,
        Err(e) => {
            log::warn!("[Diabetes::Web] Rejected submission: {}", e);
            return rejected(&state, &form.best_effort_selections(), e);
        }
    };

    let vector = encode(&selections);
    match state.predictor.predict_with_probability(&vector) {
        Ok(prediction) => {
            log::info!(
                "[Diabetes::Web] Prediction {} (p={:.3})",
                prediction.label,
                prediction.probability
            );
            let outcome = Outcome::Prediction(prediction);
            Html(render_page(&state.page, &selections, Some(&outcome)).into_string()).into_response()
        }
        Err(e) => {
            log::warn!("[Diabetes::Web] Prediction refused: {}", e);
            rejected(&state, &selections, e)
        }
    }
}

fn rejected(state: &AppState, values: &RawSelections, error: PredictionError) -> Response {
    let status = match error {
        PredictionError::Configuration { .. } => StatusCode::BAD_REQUEST,
        PredictionError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
    };
    let outcome = Outcome::Rejected(error.to_string());
    let body = render_page(&state.page, values, Some(&outcome)).into_string();
    (status, Html(body)).into_response()
}
