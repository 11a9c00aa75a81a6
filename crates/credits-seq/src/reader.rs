//! Credits sequence file reader.
//!
//! Decodes the raw record stream into a [`CreditsSequence`].

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{CreditsError, Result};
use crate::text::decode_latin1;
use crate::types::{Command, CreditsSequence, FileSlot};

/// Credits sequence file reader.
///
/// Reads the whole file into memory and decodes it; the format has no
/// outer header or record count, so the only termination signal is the
/// embedded zero-opcode record.
pub struct CreditsReader<R: Read> {
    reader: BufReader<R>,
}

impl<R: Read> CreditsReader<R> {
    /// Create a new reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader: BufReader::new(reader),
        }
    }

    /// Read and decode the full command sequence.
    pub fn read_sequence(mut self) -> Result<CreditsSequence> {
        let mut data = Vec::new();
        self.reader.read_to_end(&mut data)?;
        decode(&data)
    }
}

impl CreditsReader<File> {
    /// Open a credits sequence file for reading.
    pub fn open(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CreditsError::FileNotFound {
                    path: path.to_path_buf(),
                }
            } else {
                CreditsError::Io(e)
            }
        })?;
        Ok(Self::new(file))
    }
}

/// Read a credits sequence file from a path.
///
/// This is a convenience function that opens and decodes the file.
pub fn read_credits(path: &Path) -> Result<CreditsSequence> {
    CreditsReader::open(path)?.read_sequence()
}

/// Decode a raw buffer into a command sequence.
///
/// Walks length-prefixed records until the zero-opcode terminator. Fails
/// on an unknown opcode, on any record that runs past the end of the
/// buffer, and on a buffer that ends without a terminator. The terminator
/// itself is consumed and discarded.
pub fn decode(data: &[u8]) -> Result<CreditsSequence> {
    let mut commands = Vec::new();
    let mut offset = 0usize;

    loop {
        let record_start = offset;
        let Some(&length) = data.get(offset) else {
            return Err(CreditsError::MissingTerminator);
        };
        let length = usize::from(length);
        // The length byte counts itself and the opcode byte.
        if length < 2 {
            return Err(CreditsError::InvalidLength {
                length: length as u8,
                offset: record_start,
            });
        }
        offset += 1;

        let payload =
            data.get(offset..offset + length - 1)
                .ok_or(CreditsError::TruncatedRecord {
                    offset: record_start,
                })?;
        offset += length - 1;

        let opcode = payload[0];
        if opcode == 0 {
            break;
        }
        commands.push(decode_command(opcode, &payload[1..], record_start)?);
    }

    Ok(CreditsSequence { commands })
}

/// Decode one command from its opcode and field bytes.
///
/// `fields` is everything after the opcode byte, including any alignment
/// padding; trailing bytes beyond the command's fields are ignored.
fn decode_command(opcode: u8, fields: &[u8], offset: usize) -> Result<Command> {
    let mut fields = FieldReader::new(opcode, fields);

    let command = match opcode {
        1 => Command::Wait {
            delay: fields.u16()?,
        },
        2 => {
            let area_id = fields.u16()?;
            let entrance_id = fields.u16()?;
            let bg_top = fields.u8()?;
            let bg_bottom = fields.u8()?;
            let tileset_slot = fields.u8()?;
            let is_ending = fields.bool()?;
            Command::SwitchScene {
                area_id,
                entrance_id,
                bg_top,
                bg_bottom,
                tileset_slot,
                is_ending,
            }
        }
        3 => Command::FadeLogoIn,
        4 => Command::DropLogo,
        5 => Command::FadeToBlack,
        6 => Command::FadeFromBlack,
        7 => Command::FadeToWhite,
        8 => Command::FadeFromWhite,
        9 => Command::ShowText,
        10 => Command::HideText,
        11 => Command::SetHeaderText {
            text: fields.text()?,
        },
        12 => Command::ShowHeaderText,
        13 => Command::HideHeaderText,
        14 => Command::SetBodyText {
            text: fields.text()?,
        },
        15 => Command::ShowBodyText,
        16 => Command::HideBodyText,
        17 => Command::DisablePlayerControl,
        18 => Command::EnablePlayerControl,
        19 => Command::EnableLowGravityPhysics,
        20 => Command::DisableLowGravityPhysics,
        21 => Command::UnlockInactiveCharacter,
        22 => Command::SetPlayersFacingScreen,
        23 => {
            // Two reserved bytes precede the coordinates.
            fields.skip(2)?;
            let x = fields.u32()?;
            let y = fields.u32()?;
            Command::LoadAndPlacePeach { x, y }
        }
        24 => Command::PlayCharacterWinAnimations,
        25 => Command::BeginFireworks,
        26 => Command::EndFireworks,
        27 => Command::ShowDarknessOverlay,
        28 => Command::ShowTheEnd,
        29 => Command::HideTheEnd,
        30 => Command::ShowCoinCounter,
        31 => Command::HideCoinCounter,
        32 => {
            let file_id = fields.u16()?;
            let slot = fields.slot()?;
            Command::LoadFile { file_id, slot }
        }
        33 => Command::UnloadFile {
            slot: fields.slot()?,
        },
        34 => Command::ExitStage,
        _ => return Err(CreditsError::UnknownOpcode { opcode, offset }),
    };

    Ok(command)
}

/// Cursor over one record's field bytes, little-endian.
struct FieldReader<'a> {
    opcode: u8,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> FieldReader<'a> {
    fn new(opcode: u8, bytes: &'a [u8]) -> Self {
        Self {
            opcode,
            bytes,
            pos: 0,
        }
    }

    fn take(&mut self, len: usize) -> Result<&'a [u8]> {
        let slice =
            self.bytes
                .get(self.pos..self.pos + len)
                .ok_or(CreditsError::PayloadTooShort {
                    opcode: self.opcode,
                    expected: self.pos + len,
                    actual: self.bytes.len(),
                })?;
        self.pos += len;
        Ok(slice)
    }

    fn skip(&mut self, len: usize) -> Result<()> {
        self.take(len).map(|_| ())
    }

    fn u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    fn u16(&mut self) -> Result<u16> {
        let bytes = self.take(2)?;
        Ok(u16::from_le_bytes([bytes[0], bytes[1]]))
    }

    fn u32(&mut self) -> Result<u32> {
        let bytes = self.take(4)?;
        Ok(u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    fn bool(&mut self) -> Result<bool> {
        Ok(self.u8()? != 0)
    }

    fn slot(&mut self) -> Result<FileSlot> {
        let value = self.u8()?;
        FileSlot::from_index(value).ok_or(CreditsError::InvalidSlot { value })
    }

    fn text(&mut self) -> Result<String> {
        let len = usize::from(self.u8()?);
        let bytes = self.take(len)?;
        Ok(decode_latin1(bytes))
    }
}
