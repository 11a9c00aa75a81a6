//! Credits sequence file writer.
//!
//! Encodes a [`CreditsSequence`] back into the record stream.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{CreditsError, Result};
use crate::text::encode_latin1;
use crate::types::{Command, CreditsSequence};

/// The fixed 2-byte terminator record: length 2, opcode 0.
pub const TERMINATOR: [u8; 2] = [0x02, 0x00];

/// Credits sequence file writer.
pub struct CreditsWriter<W: Write> {
    writer: BufWriter<W>,
}

impl<W: Write> CreditsWriter<W> {
    /// Create a new writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer: BufWriter::new(writer),
        }
    }

    /// Encode and write the full command sequence.
    pub fn write_sequence(mut self, sequence: &CreditsSequence) -> Result<()> {
        let data = encode(sequence)?;
        self.writer.write_all(&data)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl CreditsWriter<File> {
    /// Create a credits sequence file for writing.
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)?;
        Ok(Self::new(file))
    }
}

/// Write a credits sequence to a path.
///
/// This is a convenience function that creates the file and writes the
/// encoded sequence.
pub fn write_credits(path: &Path, sequence: &CreditsSequence) -> Result<()> {
    CreditsWriter::create(path)?.write_sequence(sequence)
}

/// Encode a command sequence into a raw buffer.
///
/// Each record is `[length, opcode, payload...]` with the payload
/// zero-padded so the total record length is a multiple of 4; the length
/// byte is recomputed on every encode, never carried over from a decode.
/// The fixed terminator record is appended last.
pub fn encode(sequence: &CreditsSequence) -> Result<Vec<u8>> {
    let mut out = Vec::new();

    for command in &sequence.commands {
        let mut payload = encode_fields(command)?;
        while !(payload.len() + 2).is_multiple_of(4) {
            payload.push(0);
        }

        let total = payload.len() + 2;
        if total > usize::from(u8::MAX) {
            return Err(CreditsError::RecordTooLong {
                opcode: command.opcode(),
                length: total,
            });
        }

        out.push(total as u8);
        out.push(command.opcode());
        out.extend_from_slice(&payload);
    }

    out.extend_from_slice(&TERMINATOR);
    Ok(out)
}

/// Serialize one command's fields, little-endian, without padding.
fn encode_fields(command: &Command) -> Result<Vec<u8>> {
    let mut out = Vec::new();

    match command {
        Command::Wait { delay } => {
            out.extend_from_slice(&delay.to_le_bytes());
        }
        Command::SwitchScene {
            area_id,
            entrance_id,
            bg_top,
            bg_bottom,
            tileset_slot,
            is_ending,
        } => {
            out.extend_from_slice(&area_id.to_le_bytes());
            out.extend_from_slice(&entrance_id.to_le_bytes());
            out.push(*bg_top);
            out.push(*bg_bottom);
            out.push(*tileset_slot);
            out.push(u8::from(*is_ending));
        }
        Command::SetHeaderText { text } | Command::SetBodyText { text } => {
            let bytes = encode_latin1(text)?;
            out.push(bytes.len() as u8);
            out.extend_from_slice(&bytes);
        }
        Command::LoadAndPlacePeach { x, y } => {
            out.extend_from_slice(&[0, 0]);
            out.extend_from_slice(&x.to_le_bytes());
            out.extend_from_slice(&y.to_le_bytes());
        }
        Command::LoadFile { file_id, slot } => {
            out.extend_from_slice(&file_id.to_le_bytes());
            out.push(slot.index());
        }
        Command::UnloadFile { slot } => {
            out.push(slot.index());
        }
        // Everything else carries no fields.
        _ => {}
    }

    Ok(out)
}
