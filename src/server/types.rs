use serde::Serialize;

/// How the panel should style the outcome it displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeKind {
    Success,
    Warning,
    Error,
}

/// Panel outcome for both endpoints. Always delivered with HTTP 200: the
/// console round-trip itself succeeded, the kind carries the upstream
/// verdict.
#[derive(Debug, Serialize)]
pub struct OutcomeResponse {
    pub kind: OutcomeKind,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub predictions: Option<Vec<String>>,
}

impl OutcomeResponse {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: OutcomeKind::Success,
            message: message.into(),
            predictions: None,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: OutcomeKind::Warning,
            message: message.into(),
            predictions: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: OutcomeKind::Error,
            message: message.into(),
            predictions: None,
        }
    }

    pub fn predictions(predictions: Vec<String>) -> Self {
        Self {
            kind: OutcomeKind::Success,
            message: predictions.join(", "),
            predictions: Some(predictions),
        }
    }
}
