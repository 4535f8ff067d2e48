//! Lenient decoding of raw update payloads into [`Update`].
//!
//! Each sub-shape is decoded on its own; one that fails is treated as absent and never fails
//! the rest of the update. Unknown extra fields are ignored.

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::DecodeError;
use crate::types::{CallbackQuery, ChatMemberUpdated, Message, Update, UpdateKind};

/// What to do when more than one sub-shape is populated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecodePolicy {
    /// Keep the first by precedence: `message`, then `callback_query`, then `chat_member`.
    #[default]
    Precedence,
    /// Reject the update with [`DecodeError::Ambiguous`].
    Strict,
}

fn decode_part<T: DeserializeOwned>(raw: &Value, field: &'static str) -> Option<T> {
    let part = raw.get(field)?;
    if part.is_null() {
        return None;
    }
    match serde_json::from_value(part.clone()) {
        Ok(v) => Some(v),
        Err(e) => {
            debug!(field, error = %e, "sub-shape failed to decode; treated as absent");
            None
        }
    }
}

/// Reads `update_id` as an integer, an integral float or a numeric string.
fn read_update_id(raw: &Value) -> Option<i64> {
    match raw.get("update_id")? {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

impl Update {
    /// Decodes one update from an already-parsed JSON value.
    pub fn from_value(raw: &Value, policy: DecodePolicy) -> Result<Update, DecodeError> {
        let update_id = read_update_id(raw).ok_or(DecodeError::MissingUpdateId)?;

        let mut kinds: Vec<UpdateKind> = Vec::with_capacity(1);
        if let Some(m) = decode_part::<Message>(raw, "message") {
            kinds.push(UpdateKind::Message(m));
        }
        if let Some(q) = decode_part::<CallbackQuery>(raw, "callback_query") {
            kinds.push(UpdateKind::CallbackQuery(q));
        }
        if let Some(c) = decode_part::<ChatMemberUpdated>(raw, "chat_member") {
            kinds.push(UpdateKind::ChatMember(c));
        }

        if kinds.len() > 1 && policy == DecodePolicy::Strict {
            return Err(DecodeError::Ambiguous {
                update_id,
                kinds: kinds.iter().map(UpdateKind::name).collect(),
            });
        }

        let kind = kinds.into_iter().next().unwrap_or(UpdateKind::Unrecognized);
        Ok(Update { update_id, kind })
    }

    /// Decodes one update from raw bytes.
    pub fn from_slice(bytes: &[u8], policy: DecodePolicy) -> Result<Update, DecodeError> {
        let raw: Value =
            serde_json::from_slice(bytes).map_err(|e| DecodeError::Malformed(e.to_string()))?;
        Update::from_value(&raw, policy)
    }
}

/// Decodes a polled batch element by element.
///
/// Elements without a readable `update_id` are dropped: nothing places them in the sequence, so
/// the cursor moves past the highest id that is readable. Elements rejected for any other reason
/// become [`UpdateKind::Unrecognized`] so the cursor still moves past them.
pub fn decode_batch(raw: &[Value], policy: DecodePolicy) -> Vec<Update> {
    let mut updates = Vec::with_capacity(raw.len());
    for value in raw {
        match Update::from_value(value, policy) {
            Ok(update) => updates.push(update),
            Err(DecodeError::MissingUpdateId) => {
                warn!(payload = %value, "dropping update without update_id");
            }
            Err(e) => {
                warn!(error = %e, "update rejected; kept as unrecognized");
                if let Some(update_id) = read_update_id(value) {
                    updates.push(Update::new(update_id, UpdateKind::Unrecognized));
                }
            }
        }
    }
    updates
}
