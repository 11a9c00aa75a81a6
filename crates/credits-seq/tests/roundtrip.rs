//! Round-trip and wire-shape tests for the credits sequence codec.

use credits_seq::{Command, CreditsSequence, FileSlot, TERMINATOR, decode, encode};

/// One command of every variant, with representative field values.
fn every_command() -> Vec<Command> {
    vec![
        Command::Wait { delay: 300 },
        Command::SwitchScene {
            area_id: 1,
            entrance_id: 7,
            bg_top: 2,
            bg_bottom: 3,
            tileset_slot: 4,
            is_ending: true,
        },
        Command::FadeLogoIn,
        Command::DropLogo,
        Command::FadeToBlack,
        Command::FadeFromBlack,
        Command::FadeToWhite,
        Command::FadeFromWhite,
        Command::ShowText,
        Command::HideText,
        Command::SetHeaderText {
            text: "Directed by".to_string(),
        },
        Command::ShowHeaderText,
        Command::HideHeaderText,
        Command::SetBodyText {
            text: "Some Person\nAnother Person".to_string(),
        },
        Command::ShowBodyText,
        Command::HideBodyText,
        Command::DisablePlayerControl,
        Command::EnablePlayerControl,
        Command::EnableLowGravityPhysics,
        Command::DisableLowGravityPhysics,
        Command::UnlockInactiveCharacter,
        Command::SetPlayersFacingScreen,
        Command::LoadAndPlacePeach {
            x: 0x0001_8000,
            y: 0x0002_4000,
        },
        Command::PlayCharacterWinAnimations,
        Command::BeginFireworks,
        Command::EndFireworks,
        Command::ShowDarknessOverlay,
        Command::ShowTheEnd,
        Command::HideTheEnd,
        Command::ShowCoinCounter,
        Command::HideCoinCounter,
        Command::LoadFile {
            file_id: 2848,
            slot: FileSlot::Darkness,
        },
        Command::UnloadFile {
            slot: FileSlot::HeaderFont,
        },
        Command::ExitStage,
    ]
}

#[test]
fn roundtrip_every_command() {
    let sequence = CreditsSequence::from_commands(every_command());
    let data = encode(&sequence).unwrap();
    let decoded = decode(&data).unwrap();
    assert_eq!(decoded, sequence);
}

#[test]
fn terminator_is_last_and_unique() {
    let sequence = CreditsSequence::from_commands(every_command());
    let data = encode(&sequence).unwrap();
    assert_eq!(&data[data.len() - 2..], &TERMINATOR);

    // Walking the records reaches the terminator exactly at the end.
    let mut offset = 0usize;
    loop {
        let length = usize::from(data[offset]);
        if data[offset + 1] == 0 {
            assert_eq!(length, 2);
            assert_eq!(offset + length, data.len());
            break;
        }
        offset += length;
    }
}

#[test]
fn record_lengths_are_padded_multiples_of_four() {
    let sequence = CreditsSequence::from_commands(every_command());
    let data = encode(&sequence).unwrap();

    let mut offset = 0usize;
    while offset < data.len() - TERMINATOR.len() {
        let length = usize::from(data[offset]);
        assert!(length >= 2);
        assert_eq!(length % 4, 0, "record at {offset} has length {length}");
        offset += length;
    }
}

#[test]
fn empty_sequence_is_just_the_terminator() {
    let data = encode(&CreditsSequence::new()).unwrap();
    assert_eq!(data, TERMINATOR);

    let decoded = decode(&TERMINATOR).unwrap();
    assert!(decoded.is_empty());
}

#[test]
fn wait_then_exit_stage_bytes() {
    let sequence = CreditsSequence::from_commands(vec![
        Command::Wait { delay: 1 },
        Command::ExitStage,
    ]);
    let data = encode(&sequence).unwrap();
    // Wait: length 4, opcode 1, delay 0x0001 little-endian.
    // Exit Stage: no fields, padded to length 4, opcode 0x22.
    assert_eq!(
        data,
        [0x04, 0x01, 0x01, 0x00, 0x04, 0x22, 0x00, 0x00, 0x02, 0x00]
    );
}

#[test]
fn decode_accepts_unpadded_records() {
    // A fieldless record written without padding (length 2) still decodes;
    // the length byte is recomputed on encode, normalizing the padding.
    let data = [0x02, 0x22, 0x02, 0x00];
    let decoded = decode(&data).unwrap();
    assert_eq!(decoded.commands, vec![Command::ExitStage]);

    let normalized = encode(&decoded).unwrap();
    assert_eq!(normalized, [0x04, 0x22, 0x00, 0x00, 0x02, 0x00]);
}

#[test]
fn roundtrip_preserves_latin1_text() {
    let sequence = CreditsSequence::from_commands(vec![Command::SetBodyText {
        text: "Música: José".to_string(),
    }]);
    let data = encode(&sequence).unwrap();
    assert_eq!(decode(&data).unwrap(), sequence);
}

#[test]
fn roundtrip_field_extremes() {
    let sequence = CreditsSequence::from_commands(vec![
        Command::Wait { delay: u16::MAX },
        Command::SwitchScene {
            area_id: u16::MAX,
            entrance_id: 0,
            bg_top: u8::MAX,
            bg_bottom: 0,
            tileset_slot: u8::MAX,
            is_ending: false,
        },
        Command::LoadAndPlacePeach {
            x: u32::MAX,
            y: u32::MAX,
        },
        Command::SetHeaderText {
            text: String::new(),
        },
    ]);
    let data = encode(&sequence).unwrap();
    assert_eq!(decode(&data).unwrap(), sequence);
}
