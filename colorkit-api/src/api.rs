use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use colorkit::{algorithms, Color, ColorError, ColorRegistry};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{debug, warn};

use crate::config::{ServerConfig, DEFAULT_MAX_STEPS};

/// Shared state handed to every handler
#[derive(Debug, Clone)]
pub struct AppState {
    /// The single recent-colors registry for this service
    pub registry: Arc<ColorRegistry>,
    /// Largest accepted interpolation step count
    pub max_steps: i64,
}

impl AppState {
    pub fn new(registry: Arc<ColorRegistry>, max_steps: i64) -> Self {
        Self {
            registry,
            max_steps,
        }
    }

    pub fn from_config(config: &ServerConfig) -> Self {
        Self::new(Arc::new(ColorRegistry::new()), config.max_steps)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(ColorRegistry::new()), DEFAULT_MAX_STEPS)
    }
}

/// Query for endpoints taking a single `color` parameter
#[derive(Debug, Default, Deserialize)]
pub struct ColorQuery {
    pub color: Option<String>,
}

/// Query for endpoints comparing two colors
#[derive(Debug, Default, Deserialize)]
pub struct ColorPairQuery {
    pub color1: Option<String>,
    pub color2: Option<String>,
}

/// Query for the interpolation endpoint
#[derive(Debug, Default, Deserialize)]
pub struct InterpolateQuery {
    pub color1: Option<String>,
    pub color2: Option<String>,
    pub steps: Option<String>,
}

/// `{"color": ...}` response body
#[derive(Debug, Serialize, Deserialize)]
pub struct ColorResponse<T> {
    pub color: T,
}

/// Response for the recent-colors list
#[derive(Debug, Serialize, Deserialize)]
pub struct ColorListResponse {
    /// Hex colors, oldest first
    pub colors: Vec<String>,
}

/// Response for the interpolation endpoint
#[derive(Debug, Serialize, Deserialize)]
pub struct InterpolateResponse {
    /// Intermediate colors from near-start to near-end
    pub steps: Vec<Color>,
}

/// Standard error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable error message describing what went wrong
    pub error: String,
}

/// Errors surfaced to API clients
#[derive(Debug, Error)]
pub enum AppError {
    /// Missing or unparseable request parameter
    #[error("Bad request. {0}")]
    BadRequest(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let error = self.to_string();
        warn!(%error, "rejecting request");

        (StatusCode::BAD_REQUEST, Json(ErrorResponse { error })).into_response()
    }
}

impl From<ColorError> for AppError {
    fn from(err: ColorError) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

/// Treats an absent or empty parameter as missing.
fn required(value: Option<String>, message: &str) -> Result<String, AppError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::BadRequest(message.to_string()))
}

/// Build the application router with all routes configured
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/color/random", get(random_color))
        .route("/api/color/to-rgb", get(to_rgb))
        .route("/api/color/to-hex", get(to_hex))
        .route("/api/color/brightest", get(brightest))
        .route("/api/color/list", get(color_list))
        .route("/api/color/dealers-choice", get(dealers_choice))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Health check endpoint for monitoring and load balancing
pub async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "colorkit API",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Return a random color in hex format
pub async fn random_color(State(state): State<AppState>) -> Json<ColorResponse<Color>> {
    let color = state.registry.random_color();
    debug!(%color, "generated random color");

    Json(ColorResponse { color })
}

/// Convert `?color=B4DA55` into `[180, 218, 85]`
pub async fn to_rgb(
    Query(query): Query<ColorQuery>,
) -> Result<Json<ColorResponse<[u8; 3]>>, AppError> {
    let hex = required(
        query.color,
        "Provide a color parameter to the query string in hex format (ie: FFFFFF)",
    )?;
    let components = algorithms::hex_to_rgb(&hex)?;

    Ok(Json(ColorResponse { color: components }))
}

/// Convert `?color=180-218-85` into `#b4da55`
pub async fn to_hex(
    Query(query): Query<ColorQuery>,
) -> Result<Json<ColorResponse<String>>, AppError> {
    let triple = required(
        query.color,
        "Provide a color parameter to the query string in this format: 255-255-255 (r-g-b)",
    )?;
    let hex = algorithms::rgb_to_hex(&triple)?;

    Ok(Json(ColorResponse { color: hex }))
}

/// Return whichever of `color1` and `color2` has the higher average
pub async fn brightest(
    Query(query): Query<ColorPairQuery>,
) -> Result<Json<ColorResponse<Color>>, AppError> {
    const MISSING: &str =
        "You should provide 2 colors (color1, color2) in the query string in hex format";
    let first = Color::from_hex(&required(query.color1, MISSING)?)?;
    let second = Color::from_hex(&required(query.color2, MISSING)?)?;

    Ok(Json(ColorResponse {
        color: algorithms::brightest(first, second),
    }))
}

/// List recent colors, or record one when `?color=` is given
pub async fn color_list(
    State(state): State<AppState>,
    Query(query): Query<ColorQuery>,
) -> Result<Response, AppError> {
    match query.color.filter(|c| !c.is_empty()) {
        None => Ok(Json(ColorListResponse {
            colors: state.registry.list(),
        })
        .into_response()),
        Some(hex) => {
            let color = Color::from_hex(&hex)?;
            state.registry.push_color(color);
            debug!(%color, "recorded color");

            Ok(StatusCode::NO_CONTENT.into_response())
        }
    }
}

/// Interpolate between two colors, returning the `steps - 1` colors in between
pub async fn dealers_choice(
    State(state): State<AppState>,
    Query(query): Query<InterpolateQuery>,
) -> Result<Json<InterpolateResponse>, AppError> {
    const MISSING: &str = "You should pass in color1 and color2 (as hex) and how many steps";
    let first = required(query.color1, MISSING)?;
    let second = required(query.color2, MISSING)?;
    let steps = required(query.steps, MISSING)?;

    let first = Color::from_hex(&first)?;
    let second = Color::from_hex(&second)?;
    let steps = algorithms::parse_steps(&steps)?;

    if steps > state.max_steps {
        return Err(ColorError::TooManySteps {
            steps,
            max: state.max_steps,
        }
        .into());
    }

    let ramp = algorithms::interpolate(first, second, steps)?;
    debug!(%first, %second, steps, produced = ramp.len(), "interpolated colors");

    Ok(Json(InterpolateResponse { steps: ramp }))
}
