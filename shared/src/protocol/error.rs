use thiserror::Error;

/// Errors raised while binding to the host's protocol revision
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RevisionError {
    /// The host reported a revision with no packet factory. There is no
    /// degraded mode: a mismatched byte layout can corrupt client connections.
    #[error("Host revision '{found}' is not supported. Supported versions: {supported}")]
    Unsupported {
        found: String,
        supported: String,
    },
}
