use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("API error{}: {description}", code.map(|c| format!(" {}", c)).unwrap_or_default())]
    Api {
        code: Option<i64>,
        description: String,
    },

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),

    #[error("Config error: {0}")]
    Config(String),
}

/// HTTP-level failures, kept apart from API-level (`ok: false`) failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP status {status}: {body}")]
    Status { status: u16, body: String },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("malformed payload: {0}")]
    Malformed(String),

    #[error("update has no readable update_id")]
    MissingUpdateId,

    #[error("update {update_id} carries more than one kind: {}", kinds.join(", "))]
    Ambiguous {
        update_id: i64,
        kinds: Vec<&'static str>,
    },
}

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Unauthorized access")]
    Unauthorized,
}

pub type Result<T> = std::result::Result<T, BotError>;
