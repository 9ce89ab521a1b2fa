//! # agentic-compliance
//!
//! 合规分析服务的客户端运行时：提交合规场景、等待结构化结论并安全展示。
//!
//! Client runtime for the Agentic Compliance analysis service. A user describes
//! a compliance scenario in free text; the service answers with a structured
//! verdict (risk level, executive summary, regulatory reasoning steps, and an
//! approval decision). This crate invokes the service, tracks the request
//! lifecycle, and renders the verdict. It does not judge the verdict itself.
//!
//! ## Components
//!
//! - **Request client**: [`AnalysisClient`] posts a query to `/analyze` and
//!   normalizes every outcome into [`Result<ComplianceResponse>`](Result).
//! - **Interaction controller**: [`InteractionController`] owns the query text
//!   and an explicit `Idle / Pending / Success / Failed` state machine, allowing
//!   one request in flight at a time.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use agentic_compliance::{AnalysisClient, ClientConfig, InteractionController, StateTag};
//!
//! #[tokio::main]
//! async fn main() -> agentic_compliance::Result<()> {
//!     let client = AnalysisClient::new(ClientConfig::from_env()?)?;
//!     let controller = InteractionController::new(client);
//!
//!     if let Some(pending) = controller.submit_query("We lost patient data containing SSNs.") {
//!         pending.wait().await;
//!     }
//!     match controller.state_tag() {
//!         StateTag::Success => println!("{:?}", controller.result()),
//!         StateTag::Failed => eprintln!("{:?}", controller.error_message()),
//!         _ => {}
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Module Organization
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`types`] | Wire data model (requests, verdicts, health) |
//! | [`client`] | HTTP request client and the service trait |
//! | [`controller`] | Interaction state machine |
//! | [`config`] | Endpoint configuration from the environment |
//! | [`report`] | Plain-text rendering of a verdict |

pub mod client;
pub mod config;
pub mod controller;
pub mod report;
pub mod types;

pub use client::{AnalysisClient, AnalysisClientBuilder, AnalysisService};
pub use config::ClientConfig;
pub use controller::{
    ControllerSnapshot, ControllerState, InteractionController, PendingRequest, StateTag,
};
pub use types::{
    AnalysisOutput, ComplianceResponse, Decision, HealthStatus, ReasoningNode, Regulation,
    RiskLevel,
};

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for the library
pub mod error;
pub use error::{Error, ErrorContext, ErrorKind};
