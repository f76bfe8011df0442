use thiserror::Error;

/// Why a completion request could not produce model text. The client never
/// surfaces these to the wizard; it substitutes a fallback value and keeps the
/// reason for logging and session artifacts.
#[derive(Error, Debug)]
pub enum CompletionError {
    #[error("no API key configured (or placeholder value)")]
    MissingCredential,
    #[error("transport error: {0}")]
    Transport(String),
    #[error("completion API error ({status}): {body}")]
    BadStatus { status: u16, body: String },
    #[error("malformed completion response: {0}")]
    MalformedResponse(String),
}

impl CompletionError {
    /// Short tag used in debug lines and artifact filenames.
    pub fn tag(&self) -> &'static str {
        match self {
            CompletionError::MissingCredential => "missing-credential",
            CompletionError::Transport(_) => "transport",
            CompletionError::BadStatus { .. } => "bad-status",
            CompletionError::MalformedResponse(_) => "malformed-response",
        }
    }
}
