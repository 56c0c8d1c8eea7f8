pub mod test_host;

pub use helpers::*;
pub use test_host::TestHost;
