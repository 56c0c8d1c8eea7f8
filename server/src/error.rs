use thiserror::Error;

use holo_shared::{AllocatorError, EntityId, PhantomKind, RevisionError};

#[derive(Debug, Error)]
pub enum HoloServerError {
    /// The host runs a revision no packet factory exists for
    #[error(transparent)]
    Revision(#[from] RevisionError),
    #[error(transparent)]
    Allocator(#[from] AllocatorError),
    /// The entity was destroyed, or never spawned by this server
    #[error("Phantom entity {id} does not exist")]
    EntityDoesNotExist { id: EntityId },
    /// A text operation on an item holder, or an item operation on a text holder
    #[error("`{operation}` only applies to {expected} holders, but {id} is of kind {actual}")]
    WrongKind {
        id: EntityId,
        operation: &'static str,
        expected: &'static str,
        actual: &'static str,
    },
}

impl HoloServerError {
    pub(crate) fn wrong_kind(
        id: EntityId,
        operation: &'static str,
        expected: PhantomKind,
        actual: PhantomKind,
    ) -> Self {
        Self::WrongKind {
            id,
            operation,
            expected: expected.name(),
            actual: actual.name(),
        }
    }
}
