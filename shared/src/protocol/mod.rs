pub mod error;
mod metadata;
pub mod packet_factory;
pub mod revision;
pub mod v1_12_r1;
pub mod v1_16_r3;
pub mod v1_8_r3;
