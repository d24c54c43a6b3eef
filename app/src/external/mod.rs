//! External collaborators
//!
//! The estimate, weather and geolocation providers are the only suspension
//! points in the system. All three are trait objects with deterministic
//! stand-in implementations; real integrations plug in behind the same
//! traits.

pub mod estimate;
pub mod geolocation;
pub mod weather;
