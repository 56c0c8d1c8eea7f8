mod observer_key;
pub use observer_key::ObserverKey;
