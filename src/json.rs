//! OneBot array-format messages: `[{"type": "...", "data": {...}}, ...]`.
//!
//! Events carry their message either as a CQ-code string or as an array, depending on the
//! implementation's `message_format` setting. [`event_message`] accepts both.

use crate::codec::{decode, encode};
use crate::error::EventError;
use crate::segment::Message;
use serde_json::Value;

/// Both forms of an event's message.
#[derive(Debug, Clone, PartialEq)]
pub struct EventMessage {
    pub segments: Message,
    pub raw: String,
}

/// Parse array-format JSON into a message.
pub fn parse_array(json: &str) -> Result<Message, EventError> {
    Ok(serde_json::from_str(json)?)
}

/// Serialize a message to array-format JSON.
pub fn to_array_string(message: &Message) -> Result<String, EventError> {
    Ok(serde_json::to_string(message)?)
}

/// Read the `message` field of an event as segments plus raw CQ text.
///
/// An array message is re-encoded to get the raw form; a string message is decoded.
pub fn event_message(event: &Value) -> Result<EventMessage, EventError> {
    match event.get("message") {
        Some(array @ Value::Array(_)) => {
            let segments: Message = serde_json::from_value(array.clone())?;
            let raw = encode(&segments);
            Ok(EventMessage { segments, raw })
        }
        Some(Value::String(raw)) => Ok(EventMessage {
            segments: decode(raw)?,
            raw: raw.clone(),
        }),
        _ => Err(EventError::MissingMessage),
    }
}
