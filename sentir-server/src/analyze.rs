use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sentir::{AnalysisError, AnalysisRequest, AnalysisResponse, Error, PolarityAnalyzer, Sentiment};

/// Built once at startup and shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<dyn PolarityAnalyzer>,
}

impl AppState {
    pub fn new(analyzer: impl PolarityAnalyzer + 'static) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
        }
    }
}

pub enum ApiError {
    Rejected(JsonRejection),
    Analysis(AnalysisError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            ApiError::Rejected(rejection) => (
                rejection.status(),
                Error::new("INVALID_REQUEST", rejection.body_text()),
            ),
            ApiError::Analysis(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Error::new("ANALYSIS_FAILED", err.to_string()),
            ),
        };

        (status, Json(error)).into_response()
    }
}

pub async fn analyze_sentiment(
    State(state): State<AppState>,
    payload: Result<Json<AnalysisRequest>, JsonRejection>,
) -> Result<Json<AnalysisResponse>, ApiError> {
    let Json(req) = payload.map_err(ApiError::Rejected)?;

    let score = state.analyzer.polarity(&req.content).map_err(|err| {
        tracing::error!(post_id = req.post_id, "sentiment analysis failed: {err}");
        ApiError::Analysis(err)
    })?;

    let sentiment = Sentiment::from_score(score);

    tracing::info!(
        post_id = req.post_id,
        %sentiment,
        "Post ID: {} - Sentimiento: {}",
        req.post_id,
        sentiment
    );

    Ok(Json(AnalysisResponse::new(&req, sentiment)))
}
