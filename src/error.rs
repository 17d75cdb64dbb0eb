//! Error types for acn-pdu.

use thiserror::Error;

/// Main error type for all PDU encode, decode and transport operations.
#[derive(Debug, Error)]
pub enum AcnError {
    /// I/O error while reading or writing a stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration could not be parsed.
    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    /// Output buffer can't hold the encoded PDU.
    #[error("Buffer too small: required {required}, available {available}")]
    BufferTooSmall { required: usize, available: usize },

    /// Flags and length field is truncated or declares an impossible length.
    ///
    /// The rest of the enclosing PDU block can't be framed after this.
    #[error("Malformed length: {0}")]
    MalformedLength(String),

    /// Vector flag is clear and there is no previous vector to inherit.
    #[error("Vector not set and no field to inherit from")]
    MissingVector,

    /// Vector flag is set but the PDU is too short to hold the vector.
    #[error("Truncated vector: required {required}, available {available}")]
    TruncatedVector { required: usize, available: usize },

    /// Header flag is set but the PDU is too short to hold the header.
    #[error("Truncated {layer} header: required {required}, available {available}")]
    TruncatedHeader {
        layer: &'static str,
        required: usize,
        available: usize,
    },

    /// Header flag is clear and there is no previous header to inherit.
    #[error("{0} header not set and no field to inherit from")]
    MissingHeader(&'static str),

    /// No child inflator or leaf handler accepted this vector.
    #[error("No handler for vector {0}")]
    UnhandledVector(u32),

    /// Protocol error (bad preamble, oversized block, etc.).
    #[error("Protocol error: {0}")]
    Protocol(String),

    /// Connection closed before a complete PDU block arrived.
    #[error("Connection closed")]
    ConnectionClosed,
}

/// Result type alias using AcnError.
pub type Result<T> = std::result::Result<T, AcnError>;
