//! Request client for the analysis service.
//!
//! Keep the public surface small: one trait seam, one HTTP implementation,
//! one builder. Implementation details live in submodules under `src/client/`.

pub mod builder;
pub mod core;
pub mod service;

pub use builder::AnalysisClientBuilder;
pub use core::{AnalysisClient, ANALYZE_PATH, HEALTH_PATH, REQUEST_ID_HEADER};
pub use service::AnalysisService;
