//! End-to-end tests for the editor's file workflow: new, import, export.

use credits_cli::commands::{run_import, run_new, sequence_from_json, sequence_to_json};
use credits_seq::{Command, CreditsSequence, FileSlot, read_credits};

#[test]
fn new_file_decodes_to_empty_sequence() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fresh.bin");

    run_new(&path).unwrap();

    let raw = std::fs::read(&path).unwrap();
    assert_eq!(raw, [0x02, 0x00]);
    assert!(read_credits(&path).unwrap().is_empty());
}

#[test]
fn import_writes_game_consumable_binary() {
    let dir = tempfile::tempdir().unwrap();
    let json_path = dir.path().join("credits.json");
    let bin_path = dir.path().join("credits.bin");

    let sequence = CreditsSequence::from_commands(vec![
        Command::LoadFile {
            file_id: 2848,
            slot: FileSlot::Logo,
        },
        Command::FadeLogoIn,
        Command::Wait { delay: 90 },
        Command::SetHeaderText {
            text: "Directed by".to_string(),
        },
        Command::ShowHeaderText,
        Command::ExitStage,
    ]);
    let json = sequence_to_json(&sequence).unwrap();
    std::fs::write(&json_path, json).unwrap();

    run_import(&json_path, &bin_path).unwrap();

    assert_eq!(read_credits(&bin_path).unwrap(), sequence);
}

#[test]
fn import_rejects_malformed_json() {
    let dir = tempfile::tempdir().unwrap();
    let json_path = dir.path().join("broken.json");
    let bin_path = dir.path().join("out.bin");

    std::fs::write(&json_path, r#"[{"command": "wait"}]"#).unwrap();

    // Wait requires a delay field.
    let err = run_import(&json_path, &bin_path).unwrap_err();
    assert!(format!("{err:#}").contains("parse command sequence JSON"));
    assert!(!bin_path.exists());
}

#[test]
fn json_roundtrip_preserves_every_field() {
    let sequence = CreditsSequence::from_commands(vec![
        Command::SwitchScene {
            area_id: 3,
            entrance_id: 1,
            bg_top: 10,
            bg_bottom: 11,
            tileset_slot: 2,
            is_ending: true,
        },
        Command::LoadAndPlacePeach {
            x: 0x0001_2345,
            y: 0x0000_8000,
        },
        Command::UnloadFile {
            slot: FileSlot::CoinCounterFont,
        },
    ]);

    let json = sequence_to_json(&sequence).unwrap();
    assert_eq!(sequence_from_json(&json).unwrap(), sequence);
}
