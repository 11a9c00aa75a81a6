//! CLI library components for the credits sequence editor.

pub mod commands;
pub mod logging;
pub mod summary;
