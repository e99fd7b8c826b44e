use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use std::{net::SocketAddr, sync::Arc};
use tower_http::services::{ServeDir, ServeFile};
use tracing::{debug, info};

use crate::api::{
    ApiError, ApiGenerateRequest, ApiGenerateResponse, ApiPredictRequest, ApiPredictResponse,
};
use likecast::catalog::TemplateCatalog;
use likecast::generator::{self, RngSelector};
use likecast::prediction::LikePredictor;
use likecast::RequestError;

#[derive(Clone)]
struct AppState {
    predictor: Arc<LikePredictor>,
    catalog: Arc<TemplateCatalog>,
}

pub async fn serve(
    args: crate::ServeArgs,
    predictor: LikePredictor,
    catalog: TemplateCatalog,
) -> Result<(), String> {
    let state = AppState {
        predictor: Arc::new(predictor),
        catalog: Arc::new(catalog),
    };

    let web_root = args.web_root;
    let index_path = format!("{}/index.html", web_root.trim_end_matches('/'));
    let static_service = ServeDir::new(web_root).not_found_service(ServeFile::new(index_path));

    let app = Router::new()
        .route("/api/health", get(health))
        .route("/predict", post(predict_handler))
        .route("/generate", post(generate_handler))
        .nest_service("/", static_service)
        .with_state(state);

    let addr: SocketAddr = format!("{}:{}", args.host, args.port)
        .parse()
        .map_err(|err| format!("invalid bind address: {}", err))?;

    info!(%addr, "listening");

    axum::serve(
        tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|err| format!("failed to bind server: {}", err))?,
        app,
    )
    .await
    .map_err(|err| format!("server error: {}", err))?;

    Ok(())
}

async fn health() -> impl IntoResponse {
    StatusCode::OK
}

async fn predict_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiPredictRequest>,
) -> Result<Json<ApiPredictResponse>, (StatusCode, Json<ApiError>)> {
    let request = request.into_request();
    debug!(content_len = request.content.len(), "predict request");
    let result = state.predictor.score(&request).map_err(error_response)?;
    Ok(Json(ApiPredictResponse::from_result(result)))
}

async fn generate_handler(
    State(state): State<AppState>,
    Json(request): Json<ApiGenerateRequest>,
) -> Result<Json<ApiGenerateResponse>, (StatusCode, Json<ApiError>)> {
    let request = request.into_request();
    debug!(industry = %request.industry, voice = %request.brand_voice, "generate request");
    let mut selector = RngSelector::from_entropy();
    let tweet =
        generator::compose(&request, &state.catalog, &mut selector).map_err(error_response)?;
    Ok(Json(ApiGenerateResponse::from_tweet(tweet, &request)))
}

fn error_response(err: RequestError) -> (StatusCode, Json<ApiError>) {
    let status = if err.is_validation() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, Json(ApiError::new(err.message())))
}
