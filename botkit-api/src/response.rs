//! Response envelope: `{ "ok": bool, "result": ..., "description": ..., "error_code": ... }`.

use botkit_core::{BotError, DecodeError, Result};
use serde::de::DeserializeOwned;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub description: Option<String>,
    pub error_code: Option<i64>,
}

impl<T> ApiResponse<T> {
    /// `ok: false` becomes [`BotError::Api`].
    pub fn into_result(self) -> Result<Option<T>> {
        if self.ok {
            Ok(self.result)
        } else {
            Err(BotError::Api {
                code: self.error_code,
                description: self
                    .description
                    .unwrap_or_else(|| "request rejected without description".to_string()),
            })
        }
    }
}

impl<T: DeserializeOwned> ApiResponse<T> {
    pub fn parse(body: &str) -> Result<Self> {
        serde_json::from_str(body).map_err(|e| DecodeError::Malformed(e.to_string()).into())
    }
}
