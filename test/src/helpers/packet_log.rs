use std::sync::{Arc, Mutex};

use holo_server::{
    transport::{PacketSender, SendError},
    ObserverKey,
};
use holo_shared::{EntityId, Revision};

use super::PacketKind;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SentPacket {
    pub observer: ObserverKey,
    pub payload: Vec<u8>,
}

/// Records every packet a server sends, in order. Clones share the record.
#[derive(Clone)]
pub struct PacketLog {
    revision: Revision,
    packets: Arc<Mutex<Vec<SentPacket>>>,
}

impl PacketLog {
    pub fn new(revision: Revision) -> Self {
        Self {
            revision,
            packets: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn sender(&self) -> Box<dyn PacketSender> {
        Box::new(RecordingSender { log: self.clone() })
    }

    /// Everything recorded so far; the log is left empty
    pub fn take(&self) -> Vec<SentPacket> {
        std::mem::take(&mut *self.packets.lock().unwrap())
    }

    pub fn len(&self) -> usize {
        self.packets.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Kinds of the packets sent to `observer`, in order, without draining
    pub fn kinds_for(&self, observer: &ObserverKey) -> Vec<PacketKind> {
        self.packets
            .lock()
            .unwrap()
            .iter()
            .filter(|packet| packet.observer == *observer)
            .filter_map(|packet| PacketKind::classify(self.revision, &packet.payload))
            .collect()
    }

    /// Kinds of the packets about `entity` sent to `observer`, without draining
    pub fn kinds_for_entity(&self, observer: &ObserverKey, entity: &EntityId) -> Vec<PacketKind> {
        self.packets
            .lock()
            .unwrap()
            .iter()
            .filter(|packet| packet.observer == *observer)
            .filter(|packet| {
                PacketKind::entity_of(self.revision, &packet.payload) == Some(*entity)
            })
            .filter_map(|packet| PacketKind::classify(self.revision, &packet.payload))
            .collect()
    }

    pub fn payloads_for(&self, observer: &ObserverKey) -> Vec<Vec<u8>> {
        self.packets
            .lock()
            .unwrap()
            .iter()
            .filter(|packet| packet.observer == *observer)
            .map(|packet| packet.payload.clone())
            .collect()
    }
}

struct RecordingSender {
    log: PacketLog,
}

impl PacketSender for RecordingSender {
    fn send(&self, observer: &ObserverKey, payload: &[u8]) -> Result<(), SendError> {
        self.log.packets.lock().unwrap().push(SentPacket {
            observer: *observer,
            payload: payload.to_vec(),
        });
        Ok(())
    }
}
