use crate::types::ComplianceResponse;

/// Lifecycle of the current request.
///
/// A result and an error can never be held at the same time, and neither can
/// coexist with an in-flight request.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ControllerState {
    #[default]
    Idle,
    /// A request is in flight. `request_id` identifies it so that late
    /// completions of older requests can be told apart.
    Pending { request_id: u64 },
    Success(ComplianceResponse),
    Failed { message: String },
}

/// Payload-free tag of a [`ControllerState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StateTag {
    Idle,
    Pending,
    Success,
    Failed,
}

impl ControllerState {
    pub fn tag(&self) -> StateTag {
        match self {
            Self::Idle => StateTag::Idle,
            Self::Pending { .. } => StateTag::Pending,
            Self::Success(_) => StateTag::Success,
            Self::Failed { .. } => StateTag::Failed,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending { .. })
    }

    pub fn result(&self) -> Option<&ComplianceResponse> {
        match self {
            Self::Success(resp) => Some(resp),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Failed { message } => Some(message),
            _ => None,
        }
    }
}

/// Everything the rendering layer reads, captured at one instant.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ControllerSnapshot {
    pub query: String,
    pub state: ControllerState,
    /// `true` exactly while a request is pending; used to disable resubmission.
    pub busy: bool,
}

impl ControllerSnapshot {
    pub(crate) fn capture(query: &str, state: &ControllerState) -> Self {
        Self {
            query: query.to_string(),
            state: state.clone(),
            busy: state.is_pending(),
        }
    }

    /// Whether `submit` would currently start a request.
    pub fn can_submit(&self) -> bool {
        !self.busy && !self.query.trim().is_empty()
    }
}
