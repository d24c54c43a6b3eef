//! Domain models for the Agri-Pro field planning platform

mod estimate;
mod project;
mod weather;
mod zone;

pub use estimate::*;
pub use project::*;
pub use weather::*;
pub use zone::*;
