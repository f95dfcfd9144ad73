//! Pluggable event serialization for transport publishers and consumers.
//!
//! This module provides the [`EventSerializer`] trait and its built-in
//! JSON implementation. Publishers accept any `Arc<dyn EventSerializer>`
//! so the wire format can be chosen at construction time without changing
//! downstream code.

use thiserror::Error;

use crate::orderbook::events::EngineEvent;

/// Errors that can occur during event serialization or deserialization.
#[derive(Debug, Error)]
#[error("event serialization error: {message}")]
pub struct SerializationError {
    /// Human-readable description of the failure.
    pub message: String,
}

/// A pluggable serializer for engine events.
///
/// Implementations convert [`EngineEvent`]s to and from byte buffers. The
/// format is an implementation detail, allowing publishers and consumers to
/// negotiate the most efficient wire format.
///
/// # Thread Safety
///
/// Implementations must be `Send + Sync` so they can be shared across
/// task boundaries via `Arc<dyn EventSerializer>`.
pub trait EventSerializer: Send + Sync + std::fmt::Debug {
    /// Serialize an [`EngineEvent`] into a byte buffer.
    ///
    /// # Errors
    ///
    /// Returns [`SerializationError`] if the event cannot be serialized.
    fn serialize_event(&self, event: &EngineEvent) -> Result<Vec<u8>, SerializationError>;

    /// Deserialize an [`EngineEvent`] from a byte buffer.
    ///
    /// # Errors
    ///
    /// Returns [`SerializationError`] if the bytes are malformed or
    /// incompatible with the expected format.
    fn deserialize_event(&self, data: &[u8]) -> Result<EngineEvent, SerializationError>;

    /// Returns the MIME-like content type identifier for this format.
    ///
    /// Consumers can use this value to select the correct deserializer.
    #[must_use]
    fn content_type(&self) -> &'static str;
}

/// JSON event serializer using `serde_json`.
///
/// This is the default serializer, producing human-readable JSON payloads.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonEventSerializer;

impl JsonEventSerializer {
    /// Create a new JSON event serializer.
    #[must_use]
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl EventSerializer for JsonEventSerializer {
    fn serialize_event(&self, event: &EngineEvent) -> Result<Vec<u8>, SerializationError> {
        serde_json::to_vec(event).map_err(|e| SerializationError {
            message: e.to_string(),
        })
    }

    fn deserialize_event(&self, data: &[u8]) -> Result<EngineEvent, SerializationError> {
        serde_json::from_slice(data).map_err(|e| SerializationError {
            message: e.to_string(),
        })
    }

    fn content_type(&self) -> &'static str {
        "application/json"
    }
}
