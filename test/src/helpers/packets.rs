use holo_shared::{ByteReader, EntityId, Revision, Serde, VarInt};

/// What a recorded packet does, recognised from its leading packet id
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PacketKind {
    Spawn,
    Destroy,
    Teleport,
    Metadata,
    Mount,
}

impl PacketKind {
    fn packet_id(&self, revision: Revision) -> i32 {
        match (revision, self) {
            (Revision::V1_8_R3, PacketKind::Spawn) => 0x0E,
            (Revision::V1_8_R3, PacketKind::Destroy) => 0x13,
            (Revision::V1_8_R3, PacketKind::Teleport) => 0x18,
            (Revision::V1_8_R3, PacketKind::Metadata) => 0x1C,
            (Revision::V1_8_R3, PacketKind::Mount) => 0x1B,
            (Revision::V1_12_R1, PacketKind::Spawn) => 0x00,
            (Revision::V1_12_R1, PacketKind::Destroy) => 0x32,
            (Revision::V1_12_R1, PacketKind::Teleport) => 0x4C,
            (Revision::V1_12_R1, PacketKind::Metadata) => 0x3C,
            (Revision::V1_12_R1, PacketKind::Mount) => 0x43,
            (Revision::V1_16_R3, PacketKind::Spawn) => 0x00,
            (Revision::V1_16_R3, PacketKind::Destroy) => 0x36,
            (Revision::V1_16_R3, PacketKind::Teleport) => 0x56,
            (Revision::V1_16_R3, PacketKind::Metadata) => 0x44,
            (Revision::V1_16_R3, PacketKind::Mount) => 0x4B,
        }
    }

    pub fn classify(revision: Revision, payload: &[u8]) -> Option<PacketKind> {
        let mut reader = ByteReader::new(payload);
        let packet_id = VarInt::de(&mut reader).ok()?.0;
        [
            PacketKind::Spawn,
            PacketKind::Destroy,
            PacketKind::Teleport,
            PacketKind::Metadata,
            PacketKind::Mount,
        ]
        .into_iter()
        .find(|kind| kind.packet_id(revision) == packet_id)
    }

    /// The phantom entity a packet is about. For mounts, the passenger.
    pub fn entity_of(revision: Revision, payload: &[u8]) -> Option<EntityId> {
        let kind = Self::classify(revision, payload)?;
        let mut reader = ByteReader::new(payload);
        VarInt::de(&mut reader).ok()?;

        let id = match (kind, revision) {
            (PacketKind::Destroy, _) => {
                VarInt::de(&mut reader).ok()?;
                VarInt::de(&mut reader).ok()?.0
            }
            (PacketKind::Mount, Revision::V1_8_R3) => i32::de(&mut reader).ok()?,
            (PacketKind::Mount, _) => {
                VarInt::de(&mut reader).ok()?;
                VarInt::de(&mut reader).ok()?;
                VarInt::de(&mut reader).ok()?.0
            }
            _ => VarInt::de(&mut reader).ok()?.0,
        };
        Some(EntityId::new(id))
    }
}
