use serde::{Deserialize, Serialize};

/// The gate's view of the persisted session flag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionState {
    pub unlocked: bool,
}

/// Input for an unlock attempt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnlockRequest {
    pub secret: String,
}
