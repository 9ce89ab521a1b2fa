//! Structured verdict returned by the analysis service.
//!
//! Field names follow the service's JSON schema exactly (snake_case); the enum
//! tags keep their wire spellings (`GDPR`, `High`, `REVIEW_REQUIRED`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;

/// Regulatory regime a reasoning step maps onto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Regulation {
    #[serde(rename = "GDPR")]
    Gdpr,
    #[serde(rename = "CCPA")]
    Ccpa,
    #[serde(rename = "FDA")]
    Fda,
    #[serde(rename = "IRS")]
    Irs,
    Other,
}

impl Regulation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gdpr => "GDPR",
            Self::Ccpa => "CCPA",
            Self::Fda => "FDA",
            Self::Irs => "IRS",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for Regulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity tag attached to an analysis.
///
/// The ordering (`Low < Medium < High`) is for comparison and presentation only;
/// it says nothing about which [`Decision`] the service will return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Final disposition produced by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Decision {
    AutoApproved,
    ReviewRequired,
    Blocked,
}

impl Decision {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AutoApproved => "AUTO_APPROVED",
            Self::ReviewRequired => "REVIEW_REQUIRED",
            Self::Blocked => "BLOCKED",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One fact-to-regulation inference step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReasoningNode {
    pub fact: String,
    pub legal_meaning: String,
    pub regulation: Regulation,
    /// Clause reference as reported by the service; not checked against any registry.
    pub article: String,
    pub justification: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regulation_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub effective_date: Option<String>,
}

/// Aggregate judgment over a query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOutput {
    /// Reasoning steps in the order the service produced them.
    pub reasoning_map: Vec<ReasoningNode>,
    pub risk_level: RiskLevel,
    /// Opaque score; the service documents no bounds.
    pub confidence: f64,
    pub summary: String,
}

/// Top-level payload of a successful `/analyze` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComplianceResponse {
    pub analysis: AnalysisOutput,
    pub decision: Decision,
}
