//! Core types for credits sequence handling.
//!
//! This module provides the data structures for representing decoded
//! credits sequences: the command variants, the file slot list, and the
//! ordered sequence container.

mod command;
mod sequence;
mod slot;

pub use command::Command;
pub use sequence::CreditsSequence;
pub use slot::FileSlot;
