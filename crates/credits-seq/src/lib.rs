//! Credits sequence binary format reader and writer.
//!
//! This crate decodes and encodes the game's credits cutscene file: a
//! headerless stream of length-prefixed command records terminated by a
//! fixed 2-byte zero-opcode record. Each record is
//! `[length, opcode, payload...]`, little-endian, zero-padded so the total
//! record length is a multiple of 4.
//!
//! Decode and encode are pure transformations over in-memory buffers;
//! either yields a complete result or fails outright, with no partial
//! recovery.
//!
//! # Example
//!
//! ```
//! use credits_seq::{Command, CreditsSequence, decode, encode};
//!
//! let mut sequence = CreditsSequence::new();
//! sequence.push(Command::Wait { delay: 30 });
//! sequence.push(Command::SetHeaderText {
//!     text: "Directed by".to_string(),
//! });
//! sequence.push(Command::ExitStage);
//!
//! let data = encode(&sequence).unwrap();
//! assert_eq!(decode(&data).unwrap(), sequence);
//! ```
//!
//! # Serde
//!
//! With the `serde` feature enabled, [`Command`], [`FileSlot`], and
//! [`CreditsSequence`] derive `Serialize`/`Deserialize`, so a file can be
//! round-tripped through an editable JSON representation.

mod error;
mod reader;
mod text;
mod types;
mod writer;

// Re-export error types
pub use error::{CreditsError, Result};

// Re-export core types
pub use types::{Command, CreditsSequence, FileSlot};

// Re-export reader functionality
pub use reader::{CreditsReader, decode, read_credits};

// Re-export writer functionality
pub use writer::{CreditsWriter, TERMINATOR, encode, write_credits};

// Re-export text limits
pub use text::MAX_TEXT_LEN;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
