//! # colorkit-api
//!
//! REST API server for the colorkit library
//!

mod api;
pub mod config;

pub use api::{
    app, brightest, color_list, dealers_choice, health_check, random_color, to_hex, to_rgb,
    AppError, AppState, ColorListResponse, ColorPairQuery, ColorQuery, ColorResponse,
    ErrorResponse, InterpolateQuery, InterpolateResponse,
};
pub use config::ServerConfig;
