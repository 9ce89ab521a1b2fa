//! 交互控制器模块：管理查询文本与单个分析请求的生命周期。
//!
//! # Interaction Controller
//!
//! Drives the [`AnalysisService`](crate::client::AnalysisService) on behalf of a
//! front end and exposes the result as an explicit state machine:
//!
//! | State | Meaning |
//! |-------|---------|
//! | `Idle` | Nothing in flight, nothing to show |
//! | `Pending` | One request in flight; further submits are ignored |
//! | `Success` | The last request returned a [`ComplianceResponse`](crate::types::ComplianceResponse) |
//! | `Failed` | The last request failed; a display message is held |
//!
//! Outcomes of requests that were superseded (by [`InteractionController::reset`])
//! are dropped instead of overwriting newer state.

mod interaction;
mod state;

pub use interaction::{InteractionController, PendingRequest, UNEXPECTED_ERROR_MESSAGE};
pub use state::{ControllerSnapshot, ControllerState, StateTag};
