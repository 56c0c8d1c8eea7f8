mod phantom_server;
pub use phantom_server::{PhantomServer, PickupHandler, RefreshError, TextRefresher};

mod server_config;
pub use server_config::ServerConfig;
