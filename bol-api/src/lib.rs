//! # bol-api
//!
//! REST API that renders Bill of Lading drafts as PDF
//!

mod api;
pub mod config;


pub use api::{
    app, app_with_config, generate_bill_of_lading, health_check, read_root, router, AppError,
    AppState, ErrorResponse, RootResponse, DRAFT_FILENAME, GENERATION_FAILED, LIVENESS_MESSAGE,
};
pub use config::{ConfigError, ServiceConfig};
