//! Application services

pub mod projects;
pub mod zones;
