use smol::{
    channel,
    channel::{Receiver, Sender, TryRecvError},
};

use crate::ObserverKey;

use super::{PacketReceiver, PacketSender, RecvError, SendError};

/// Moves packet delivery off the simulation thread. The sender half goes to
/// the `PhantomServer`; the receiver half is drained by the host's I/O thread.
pub struct PacketChannel;

impl PacketChannel {
    pub fn unbounded() -> (Box<dyn PacketSender>, PacketChannelReceiver) {
        let (packet_sender, packet_receiver) = channel::unbounded();
        (
            Box::new(packet_sender),
            PacketChannelReceiver::new(packet_receiver),
        )
    }
}

impl PacketSender for Sender<(ObserverKey, Box<[u8]>)> {
    fn send(&self, observer: &ObserverKey, payload: &[u8]) -> Result<(), SendError> {
        self.try_send((*observer, payload.into()))
            .map_err(|_| SendError {
                observer: *observer,
            })
    }
}

#[derive(Clone)]
pub struct PacketChannelReceiver {
    receiver: Receiver<(ObserverKey, Box<[u8]>)>,
    current_payload: Option<Box<[u8]>>,
}

impl PacketChannelReceiver {
    fn new(receiver: Receiver<(ObserverKey, Box<[u8]>)>) -> Self {
        Self {
            receiver,
            current_payload: None,
        }
    }

    /// Blocks the calling I/O thread until a packet arrives. Returns `None`
    /// once the server side has been dropped and the queue is empty.
    pub fn recv_blocking(&self) -> Option<(ObserverKey, Box<[u8]>)> {
        self.receiver.recv_blocking().ok()
    }

    pub fn len(&self) -> usize {
        self.receiver.len()
    }

    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }
}

impl PacketReceiver for PacketChannelReceiver {
    fn receive(&mut self) -> Result<Option<(ObserverKey, &[u8])>, RecvError> {
        match self.receiver.try_recv() {
            Ok((observer, payload)) => {
                let payload = self.current_payload.insert(payload);
                Ok(Some((observer, &**payload)))
            }
            Err(TryRecvError::Empty) => Ok(None),
            Err(TryRecvError::Closed) => Err(RecvError),
        }
    }
}
