//! Shared types and computation for the Agri-Pro field planning platform
//!
//! This crate contains the domain models and the pure calculations shared
//! between the application crate and the browser (via WASM): derived field
//! metrics, the growth schedule, the task timeline, and zone geometry.

pub mod metrics;
pub mod models;
pub mod schedule;
pub mod timeline;
pub mod types;
pub mod validation;

pub use metrics::*;
pub use models::*;
pub use schedule::*;
pub use timeline::*;
pub use types::*;
pub use validation::*;
