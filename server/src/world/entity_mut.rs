use holo_shared::{CarrierId, EntityId, ItemAppearance, PhantomKind, Position, Text};

use crate::{
    events::PickupAttempt, world::line_key::LineKey, HoloServerError, ObserverKey,
    PhantomServer, RefreshError,
};

// PhantomEntityMut
pub struct PhantomEntityMut<'s> {
    server: &'s mut PhantomServer,
    id: EntityId,
}

impl<'s> PhantomEntityMut<'s> {
    pub(crate) fn new(server: &'s mut PhantomServer, id: &EntityId) -> Self {
        Self { server, id: *id }
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn kind(&self) -> PhantomKind {
        self.server.entity_record(&self.id).kind()
    }

    pub fn position(&self) -> &Position {
        self.server.entity_record(&self.id).position()
    }

    pub fn text(&self) -> &Text {
        self.server.entity_record(&self.id).text()
    }

    /// Observers that currently see the entity
    pub fn observers(&self) -> Vec<ObserverKey> {
        self.server.entity_observers(&self.id)
    }

    // Text holders

    /// Sends a name update to every observer that sees the entity. Setting
    /// the text already shown sends nothing.
    ///
    /// # Panics
    /// Panics if the entity is an item holder
    pub fn set_text(&mut self, text: impl Into<Text>) -> &mut Self {
        if let Err(error) = self.try_set_text(text) {
            panic!("{}", error);
        }

        self
    }

    pub fn try_set_text(&mut self, text: impl Into<Text>) -> Result<(), HoloServerError> {
        self.server.entity_set_text(&self.id, text.into())
    }

    /// Replaces the text every `text_refresh_period` steps with what
    /// `refresher` returns. A failing or panicking refresher is logged and
    /// the text is left as it was.
    ///
    /// # Panics
    /// Panics if the entity is an item holder
    pub fn set_text_refresher<F>(&mut self, refresher: F) -> &mut Self
    where
        F: FnMut() -> Result<Text, RefreshError> + 'static,
    {
        if let Err(error) = self.try_set_text_refresher(refresher) {
            panic!("{}", error);
        }

        self
    }

    pub fn try_set_text_refresher<F>(&mut self, refresher: F) -> Result<(), HoloServerError>
    where
        F: FnMut() -> Result<Text, RefreshError> + 'static,
    {
        self.server
            .entity_set_text_refresher(&self.id, Box::new(refresher))
    }

    // Item holders

    /// # Panics
    /// Panics if the entity is a text holder
    pub fn set_appearance(&mut self, appearance: ItemAppearance) -> &mut Self {
        if let Err(error) = self.try_set_appearance(appearance) {
            panic!("{}", error);
        }

        self
    }

    pub fn try_set_appearance(&mut self, appearance: ItemAppearance) -> Result<(), HoloServerError> {
        self.server.entity_set_appearance(&self.id, appearance)
    }

    /// Seats the item holder on `carrier`. From then on the holder destroys
    /// itself once the host reports the carrier gone.
    ///
    /// # Panics
    /// Panics if the entity is a text holder
    pub fn set_carrier(&mut self, carrier: CarrierId) -> &mut Self {
        if let Err(error) = self.try_set_carrier(Some(carrier)) {
            panic!("{}", error);
        }

        self
    }

    pub fn try_set_carrier(&mut self, carrier: Option<CarrierId>) -> Result<(), HoloServerError> {
        self.server.entity_set_carrier(&self.id, carrier)
    }

    /// Called once for every pickup attempt on this item holder. A second
    /// handler replaces the first.
    ///
    /// # Panics
    /// Panics if the entity is a text holder
    pub fn on_pickup_attempt<F>(&mut self, handler: F) -> &mut Self
    where
        F: FnMut(&PickupAttempt) + 'static,
    {
        if let Err(error) = self.try_on_pickup_attempt(handler) {
            panic!("{}", error);
        }

        self
    }

    pub fn try_on_pickup_attempt<F>(&mut self, handler: F) -> Result<(), HoloServerError>
    where
        F: FnMut(&PickupAttempt) + 'static,
    {
        self.server
            .entity_set_pickup_handler(&self.id, Box::new(handler))
    }

    // Any kind

    /// `position` is the logical position of the line; the kind's vertical
    /// offset is added here
    pub fn move_to(&mut self, position: Position) -> &mut Self {
        if let Err(error) = self.server.entity_move_to(&self.id, position) {
            panic!("{}", error);
        }

        self
    }

    pub fn set_owner(&mut self, owner: LineKey) -> &mut Self {
        self.server.entity_set_owner(&self.id, Some(owner));

        self
    }

    /// While locked, changes are recorded but not broadcast. Unlocking
    /// broadcasts the latest state of everything that changed.
    pub fn set_tick_locked(&mut self, locked: bool) -> &mut Self {
        self.server.entity_set_tick_locked(&self.id, locked);

        self
    }

    /// Shows the entity to `observer` right away, ahead of the next scope
    /// update. Returns false if the observer already sees it, or if the
    /// entity is tick-locked; it is then shown when the lock ends.
    pub fn spawn(&mut self, observer: &ObserverKey) -> bool {
        self.server.entity_spawn_for(&self.id, observer)
    }

    /// Hides the entity from `observer` right away. Returns false if the
    /// observer did not see it.
    pub fn despawn(&mut self, observer: &ObserverKey) -> bool {
        self.server.entity_despawn_for(&self.id, observer)
    }

    /// Destroys the entity for everyone and releases its identity
    pub fn destroy(self) {
        self.server.destroy_entity(&self.id);
    }
}
