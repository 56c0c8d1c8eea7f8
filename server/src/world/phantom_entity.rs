use uuid::{Builder, Uuid};

use holo_shared::{
    CarrierId, EntityId, ItemAppearance, PacketBuilder, PhantomKind, Position, Text, Tick,
};

use super::{line_key::LineKey, suppression::SuppressionFlags};

/// A piece of state that observers need to hear about when it changes
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum StateUpdate {
    Position,
    Name,
    Appearance,
    Mount,
}

#[derive(Default)]
struct PendingUpdates {
    position: bool,
    name: bool,
    appearance: bool,
    mount: bool,
}

impl PendingUpdates {
    fn mark(&mut self, update: StateUpdate) {
        match update {
            StateUpdate::Position => self.position = true,
            StateUpdate::Name => self.name = true,
            StateUpdate::Appearance => self.appearance = true,
            StateUpdate::Mount => self.mount = true,
        }
    }

    fn drain(&mut self) -> Vec<StateUpdate> {
        let pending = std::mem::take(self);
        let mut output = Vec::new();
        if pending.position {
            output.push(StateUpdate::Position);
        }
        if pending.name {
            output.push(StateUpdate::Name);
        }
        if pending.appearance {
            output.push(StateUpdate::Appearance);
        }
        if pending.mount {
            output.push(StateUpdate::Mount);
        }
        output
    }
}

/// Server-side record of one client-only entity. It never exists in the
/// host's simulation; observers only learn about it through packets.
pub struct PhantomEntity {
    id: EntityId,
    uuid: Uuid,
    kind: PhantomKind,
    position: Position,
    text: Text,
    appearance: Option<ItemAppearance>,
    carrier: Option<CarrierId>,
    owner: Option<LineKey>,
    flags: SuppressionFlags,
    ticks_lived: Tick,
    pending: PendingUpdates,
}

impl PhantomEntity {
    pub(crate) fn new_text(id: EntityId, position: Position) -> Self {
        Self::new(id, PhantomKind::Text, position, None)
    }

    pub(crate) fn new_item(id: EntityId, position: Position, appearance: ItemAppearance) -> Self {
        Self::new(id, PhantomKind::Item, position, Some(appearance))
    }

    fn new(
        id: EntityId,
        kind: PhantomKind,
        position: Position,
        appearance: Option<ItemAppearance>,
    ) -> Self {
        Self {
            id,
            uuid: random_uuid(),
            kind,
            position: position.with_offset_y(kind.offset_y()),
            text: Text::new(),
            appearance,
            carrier: None,
            owner: None,
            flags: SuppressionFlags::phantom(),
            ticks_lived: 0,
            pending: PendingUpdates::default(),
        }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn uuid(&self) -> &Uuid {
        &self.uuid
    }

    pub fn kind(&self) -> PhantomKind {
        self.kind
    }

    /// Position including the kind's vertical offset
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Text currently rendered by a text holder. Always empty for items.
    pub fn text(&self) -> &Text {
        &self.text
    }

    pub fn appearance(&self) -> Option<&ItemAppearance> {
        self.appearance.as_ref()
    }

    pub fn carrier(&self) -> Option<CarrierId> {
        self.carrier
    }

    pub fn owner(&self) -> Option<LineKey> {
        self.owner
    }

    pub fn flags(&self) -> SuppressionFlags {
        self.flags
    }

    pub fn ticks_lived(&self) -> Tick {
        self.ticks_lived
    }

    pub fn is_tick_locked(&self) -> bool {
        self.flags.contains(SuppressionFlags::TICK_LOCKED)
    }

    /// Every packet an observer needs to see the entity in its current state,
    /// in send order
    pub(crate) fn spawn_packets(&self, factory: &dyn PacketBuilder) -> Vec<Vec<u8>> {
        let mut packets = vec![factory.build_spawn(self.id, &self.uuid, self.kind, &self.position)];
        match self.kind {
            PhantomKind::Text => {
                packets.push(factory.build_name_update(self.id, &self.text));
            }
            PhantomKind::Item => {
                if let Some(appearance) = &self.appearance {
                    packets.push(factory.build_item_update(self.id, appearance));
                }
            }
        }
        if let Some(carrier) = self.carrier {
            packets.push(factory.build_mount(self.id, carrier.into()));
        }
        packets
    }

    /// The packet telling observers about `update`, if there is anything to say
    pub(crate) fn update_packet(
        &self,
        factory: &dyn PacketBuilder,
        update: StateUpdate,
    ) -> Option<Vec<u8>> {
        match update {
            StateUpdate::Position => Some(factory.build_teleport(self.id, &self.position)),
            StateUpdate::Name => match self.kind {
                PhantomKind::Text => Some(factory.build_name_update(self.id, &self.text)),
                PhantomKind::Item => None,
            },
            StateUpdate::Appearance => self
                .appearance
                .as_ref()
                .map(|appearance| factory.build_item_update(self.id, appearance)),
            StateUpdate::Mount => self
                .carrier
                .map(|carrier| factory.build_mount(self.id, carrier.into())),
        }
    }

    /// Returns whether observers must hear about the new text right now.
    /// Setting the text already rendered changes nothing.
    pub(crate) fn set_text(&mut self, text: Text) -> bool {
        if self.text == text {
            return false;
        }
        self.text = text;
        self.stage(StateUpdate::Name)
    }

    /// `position` is the logical position; the kind's offset is applied here
    pub(crate) fn set_position(&mut self, position: Position) -> bool {
        let position = position.with_offset_y(self.kind.offset_y());
        if self.position.same_as(&position) {
            return false;
        }
        self.position = position;
        self.stage(StateUpdate::Position)
    }

    pub(crate) fn set_appearance(&mut self, appearance: ItemAppearance) -> bool {
        if self.appearance == Some(appearance) {
            return false;
        }
        self.appearance = Some(appearance);
        self.stage(StateUpdate::Appearance)
    }

    /// Clearing the carrier leaves the entity to die at the next anchor
    /// check; observers keep seeing it seated until then.
    pub(crate) fn set_carrier(&mut self, carrier: Option<CarrierId>) -> bool {
        if self.carrier == carrier {
            return false;
        }
        self.carrier = carrier;
        carrier.is_some() && self.stage(StateUpdate::Mount)
    }

    pub(crate) fn set_owner(&mut self, owner: Option<LineKey>) {
        self.owner = owner;
    }

    /// Locking holds back broadcasts. Unlocking returns everything that
    /// changed while locked.
    pub(crate) fn set_tick_locked(&mut self, locked: bool) -> Vec<StateUpdate> {
        self.flags.set(SuppressionFlags::TICK_LOCKED, locked);
        if locked {
            Vec::new()
        } else {
            self.pending.drain()
        }
    }

    /// Advance one simulation step. Returns whether the anchor is due to be
    /// checked this step. Only item holders are anchored; one without a
    /// carrier fails its check.
    pub(crate) fn advance(&mut self, anchor_check_period: Tick) -> bool {
        self.ticks_lived = self.ticks_lived.wrapping_add(1);
        self.kind == PhantomKind::Item && self.ticks_lived % anchor_check_period.max(1) == 0
    }

    fn stage(&mut self, update: StateUpdate) -> bool {
        if self.is_tick_locked() {
            self.pending.mark(update);
            return false;
        }
        true
    }
}

fn random_uuid() -> Uuid {
    Builder::from_random_bytes(fastrand::u128(..).to_be_bytes()).into_uuid()
}
