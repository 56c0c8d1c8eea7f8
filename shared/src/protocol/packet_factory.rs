use uuid::Uuid;

use crate::{
    EntityId, ItemAppearance, PhantomKind, Position, Revision, RevisionError, Text,
    V1_12R1Factory, V1_16R3Factory, V1_8R3Factory,
};

/// Builds the raw packets that make a phantom entity exist on a client.
///
/// Every returned buffer starts with the revision's VarInt packet id and has no
/// length prefix; framing belongs to the transport.
pub trait PacketBuilder {
    fn revision(&self) -> Revision;

    /// Spawns the entity at `position` with zero rotation and zero velocity
    fn build_spawn(
        &self,
        id: EntityId,
        uuid: &Uuid,
        kind: PhantomKind,
        position: &Position,
    ) -> Vec<u8>;

    fn build_destroy(&self, id: EntityId) -> Vec<u8>;

    fn build_teleport(&self, id: EntityId, position: &Position) -> Vec<u8>;

    /// Metadata for a text holder: invisible marker armor stand showing `text`.
    /// Empty text hides the name tag instead of sending an empty name.
    fn build_name_update(&self, id: EntityId, text: &Text) -> Vec<u8>;

    /// Metadata for an item holder showing `appearance`
    fn build_item_update(&self, id: EntityId, appearance: &ItemAppearance) -> Vec<u8>;

    /// Seats `passenger` on `vehicle`
    fn build_mount(&self, passenger: EntityId, vehicle: EntityId) -> Vec<u8>;
}

/// The packet factory bound at startup, one variant per supported revision
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PacketFactory {
    V1_8_R3(V1_8R3Factory),
    V1_12_R1(V1_12R1Factory),
    V1_16_R3(V1_16R3Factory),
}

impl PacketFactory {
    pub fn new(revision: Revision) -> Self {
        match revision {
            Revision::V1_8_R3 => PacketFactory::V1_8_R3(V1_8R3Factory),
            Revision::V1_12_R1 => PacketFactory::V1_12_R1(V1_12R1Factory),
            Revision::V1_16_R3 => PacketFactory::V1_16_R3(V1_16R3Factory),
        }
    }

    pub fn detect(host_revision: &str) -> Result<Self, RevisionError> {
        Revision::detect(host_revision).map(Self::new)
    }

    fn inner(&self) -> &dyn PacketBuilder {
        match self {
            PacketFactory::V1_8_R3(factory) => factory,
            PacketFactory::V1_12_R1(factory) => factory,
            PacketFactory::V1_16_R3(factory) => factory,
        }
    }
}

impl PacketBuilder for PacketFactory {
    fn revision(&self) -> Revision {
        self.inner().revision()
    }

    fn build_spawn(
        &self,
        id: EntityId,
        uuid: &Uuid,
        kind: PhantomKind,
        position: &Position,
    ) -> Vec<u8> {
        self.inner().build_spawn(id, uuid, kind, position)
    }

    fn build_destroy(&self, id: EntityId) -> Vec<u8> {
        self.inner().build_destroy(id)
    }

    fn build_teleport(&self, id: EntityId, position: &Position) -> Vec<u8> {
        self.inner().build_teleport(id, position)
    }

    fn build_name_update(&self, id: EntityId, text: &Text) -> Vec<u8> {
        self.inner().build_name_update(id, text)
    }

    fn build_item_update(&self, id: EntityId, appearance: &ItemAppearance) -> Vec<u8> {
        self.inner().build_item_update(id, appearance)
    }

    fn build_mount(&self, passenger: EntityId, vehicle: EntityId) -> Vec<u8> {
        self.inner().build_mount(passenger, vehicle)
    }
}
