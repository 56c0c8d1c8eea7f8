//! # Holo Serde
//! Byte-oriented encoding primitives matching the host game's wire format.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

mod byte_counter;
mod byte_reader;
mod byte_writer;
mod error;
mod impls;
mod integer;
mod pool;
mod serde;

pub use byte_counter::ByteCounter;
pub use byte_reader::ByteReader;
pub use byte_writer::{ByteWrite, ByteWriter};
pub use error::SerdeErr;
pub use impls::ser_str;
pub use integer::{VarInt, VAR_INT_MAX_BYTES};
pub use pool::with_pooled_writer;
pub use serde::Serde;
