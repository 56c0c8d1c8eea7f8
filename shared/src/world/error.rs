use thiserror::Error;

use crate::EntityId;

/// Errors raised by the entity identity allocator. Both indicate a broken
/// contract with the caller or the host rather than a transient condition.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AllocatorError {
    /// The identity was released while not live
    #[error("Entity identity {id} was released twice or was never allocated")]
    DoubleRelease {
        id: EntityId,
    },

    /// The host counter handed out an identity that is still live
    #[error("Host entity counter returned identity {id}, which is still held by a phantom entity")]
    Collision {
        id: EntityId,
    },
}
