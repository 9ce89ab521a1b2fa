//! Plain-text rendering of a verdict for terminals and logs.
//!
//! All free text comes from the remote service, so it is passed through
//! [`sanitize`] before it reaches the output.

use crate::types::{ComplianceResponse, Decision, ReasoningNode, RiskLevel};
use std::fmt::Write as _;

/// Drop control characters (escape sequences included) except newline and tab.
pub fn sanitize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_control() || *c == '\n' || *c == '\t')
        .collect()
}

pub fn risk_badge(level: RiskLevel) -> &'static str {
    match level {
        RiskLevel::Low => "[LOW RISK]",
        RiskLevel::Medium => "[MEDIUM RISK]",
        RiskLevel::High => "[HIGH RISK]",
    }
}

pub fn decision_label(decision: Decision) -> &'static str {
    match decision {
        Decision::AutoApproved => "Auto-approved",
        Decision::ReviewRequired => "Review required",
        Decision::Blocked => "Blocked",
    }
}

/// Render the full verdict: decision, risk, summary, then the reasoning steps
/// in the order the service produced them.
pub fn render_report(resp: &ComplianceResponse) -> String {
    let analysis = &resp.analysis;
    let mut out = String::new();

    let _ = writeln!(
        out,
        "Decision:   {} ({})",
        decision_label(resp.decision),
        resp.decision
    );
    let _ = writeln!(
        out,
        "Risk level: {} {}",
        analysis.risk_level,
        risk_badge(analysis.risk_level)
    );
    let _ = writeln!(out, "Confidence: {}", analysis.confidence);
    out.push('\n');

    out.push_str("Executive Summary\n");
    let _ = writeln!(out, "  {}", indent(&sanitize(&analysis.summary), "  "));
    out.push('\n');

    out.push_str("Regulatory Analysis\n");
    if analysis.reasoning_map.is_empty() {
        out.push_str("  (no reasoning steps reported)\n");
    }
    for (i, node) in analysis.reasoning_map.iter().enumerate() {
        render_node(&mut out, i + 1, node);
    }
    out
}

fn render_node(out: &mut String, index: usize, node: &ReasoningNode) {
    let _ = writeln!(
        out,
        "  {}. {} {}",
        index,
        node.regulation,
        sanitize(&node.article)
    );
    let _ = writeln!(out, "     Fact:          {}", sanitize(&node.fact));
    let _ = writeln!(out, "     Legal meaning: {}", sanitize(&node.legal_meaning));
    let _ = writeln!(out, "     Justification: {}", sanitize(&node.justification));
    if let Some(version) = &node.regulation_version {
        let _ = writeln!(out, "     Version:       {}", sanitize(version));
    }
    if let Some(date) = &node.effective_date {
        let _ = writeln!(out, "     Effective:     {}", sanitize(date));
    }
}

fn indent(text: &str, prefix: &str) -> String {
    text.lines().collect::<Vec<_>>().join(&format!("\n{}", prefix))
}
