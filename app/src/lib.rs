//! Agri-Pro application crate
//!
//! Wires the shared domain core to its collaborators: configuration, the
//! injected key-value store, the external estimate/weather/geolocation
//! providers, the project service and the interactive zone session.

pub mod config;
pub mod error;
pub mod external;
pub mod services;
pub mod store;

pub use config::Config;
