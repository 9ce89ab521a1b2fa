//! 类型模块：合规分析服务的请求与响应数据结构。
//!
//! # Types Module
//!
//! Strongly-typed representations of everything exchanged with the analysis
//! service. The JSON shape is owned by the service; these types decode it
//! structurally and do not judge whether the content is legally sound.
//!
//! ## Key Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`ComplianceResponse`] | Top-level verdict: analysis plus decision |
//! | [`AnalysisOutput`] | Risk level, confidence, summary, reasoning map |
//! | [`ReasoningNode`] | One fact-to-regulation inference step |
//! | [`AnalysisRequest`] | Body of `POST /analyze` |
//! | [`HealthStatus`] | Body of `GET /health` |
//!
//! ## Example
//!
//! ```rust
//! use agentic_compliance::types::{ComplianceResponse, Decision, RiskLevel};
//!
//! let json = r#"{"analysis":{"reasoning_map":[],"risk_level":"Low","confidence":0.4,"summary":"Nothing found."},"decision":"AUTO_APPROVED"}"#;
//! let resp: ComplianceResponse = serde_json::from_str(json).unwrap();
//! assert_eq!(resp.analysis.risk_level, RiskLevel::Low);
//! assert_eq!(resp.decision, Decision::AutoApproved);
//! ```

pub mod analysis;
pub mod wire;

pub use analysis::{AnalysisOutput, ComplianceResponse, Decision, ReasoningNode, Regulation, RiskLevel};
pub use wire::{
    service_error_message, AnalysisRequest, HealthStatus, ServiceErrorBody, FALLBACK_ERROR_MESSAGE,
};
