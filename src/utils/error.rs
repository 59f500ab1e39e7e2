use std::io::ErrorKind;
use std::time::Duration;
use thiserror::Error;
use tokio_tungstenite::tungstenite;

#[derive(Error, Debug)]
pub enum RadarError {
    #[error("GPIO error: {0}")]
    Gpio(#[from] rppal::gpio::Error),

    #[error("WebSocket error: {0}")]
    WebSocket(#[from] tungstenite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Echo pulse timed out after {waited:?}")]
    EchoTimeout { waited: Duration },

    #[error("Angle {0} outside servo range 0-180")]
    AngleOutOfRange(u8),

    #[error("Invalid value for {field}: {reason}")]
    InvalidConfig { field: String, reason: String },
}

pub type Result<T> = std::result::Result<T, RadarError>;

impl RadarError {
    /// True when the error means the peer went away, which ends a session
    /// gracefully instead of taking the process down.
    pub fn is_disconnect(&self) -> bool {
        match self {
            RadarError::WebSocket(e) => match e {
                tungstenite::Error::ConnectionClosed | tungstenite::Error::AlreadyClosed => true,
                tungstenite::Error::Protocol(
                    tungstenite::error::ProtocolError::ResetWithoutClosingHandshake,
                ) => true,
                tungstenite::Error::Io(io) => is_disconnect_kind(io.kind()),
                _ => false,
            },
            RadarError::Io(io) => is_disconnect_kind(io.kind()),
            _ => false,
        }
    }
}

fn is_disconnect_kind(kind: ErrorKind) -> bool {
    matches!(
        kind,
        ErrorKind::BrokenPipe
            | ErrorKind::ConnectionReset
            | ErrorKind::ConnectionAborted
            | ErrorKind::UnexpectedEof
    )
}
