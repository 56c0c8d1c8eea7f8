mod channel;
pub use channel::{PacketChannel, PacketChannelReceiver};

use thiserror::Error;

use crate::ObserverKey;

/// The observer's connection rejected a packet
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("could not deliver packet to {observer}")]
pub struct SendError {
    pub observer: ObserverKey,
}

pub struct RecvError;

/// Delivers raw, unframed packets to one observer's connection. Framing and
/// compression are the transport's business.
pub trait PacketSender: Send + Sync {
    fn send(&self, observer: &ObserverKey, payload: &[u8]) -> Result<(), SendError>;
}

pub trait PacketReceiver: Send + Sync {
    /// Next packet queued for an observer, if any
    fn receive(&mut self) -> Result<Option<(ObserverKey, &[u8])>, RecvError>;
}
