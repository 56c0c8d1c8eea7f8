use thiserror::Error;

/// Errors raised while reading wire data back out of a byte buffer
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SerdeErr {
    /// The buffer ended before the value was complete
    #[error("Unexpected end of buffer: needed {needed} more byte(s) at offset {offset}")]
    UnexpectedEnd {
        offset: usize,
        needed: usize,
    },

    /// A VarInt ran past its maximum encoded length
    #[error("VarInt at offset {offset} does not fit in 32 bits")]
    VarIntTooLong {
        offset: usize,
    },

    /// A length-prefixed string was not valid UTF-8
    #[error("String at offset {offset} is not valid UTF-8")]
    InvalidUtf8 {
        offset: usize,
    },

    /// A string length prefix was negative
    #[error("String at offset {offset} has negative length {length}")]
    NegativeLength {
        offset: usize,
        length: i32,
    },
}
