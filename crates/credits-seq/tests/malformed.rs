//! Decode failure tests: every malformed buffer aborts the whole decode.

use credits_seq::{Command, CreditsError, CreditsSequence, decode, encode};

#[test]
fn rejects_unknown_opcode() {
    // Record shaped like a fieldless command, but opcode 35 is unassigned.
    let data = [0x04, 0x23, 0x00, 0x00, 0x02, 0x00];
    let err = decode(&data).unwrap_err();
    assert!(matches!(
        err,
        CreditsError::UnknownOpcode {
            opcode: 35,
            offset: 0,
        }
    ));
}

#[test]
fn rejects_opcode_255() {
    let data = [0x04, 0xFF, 0x00, 0x00, 0x02, 0x00];
    let err = decode(&data).unwrap_err();
    assert!(matches!(
        err,
        CreditsError::UnknownOpcode { opcode: 255, .. }
    ));
}

#[test]
fn rejects_record_past_end_of_buffer() {
    // Length byte claims 8 bytes but only 4 remain.
    let data = [0x08, 0x01, 0x01, 0x00];
    let err = decode(&data).unwrap_err();
    assert!(matches!(err, CreditsError::TruncatedRecord { offset: 0 }));
}

#[test]
fn rejects_missing_terminator() {
    // One valid Wait record, then the buffer just ends.
    let data = [0x04, 0x01, 0x01, 0x00];
    let err = decode(&data).unwrap_err();
    assert!(matches!(err, CreditsError::MissingTerminator));
}

#[test]
fn rejects_empty_buffer() {
    let err = decode(&[]).unwrap_err();
    assert!(matches!(err, CreditsError::MissingTerminator));
}

#[test]
fn rejects_zero_length_byte() {
    let data = [0x00, 0x00];
    let err = decode(&data).unwrap_err();
    assert!(matches!(
        err,
        CreditsError::InvalidLength {
            length: 0,
            offset: 0,
        }
    ));
}

#[test]
fn rejects_length_byte_without_room_for_opcode() {
    let data = [0x01, 0x00];
    let err = decode(&data).unwrap_err();
    assert!(matches!(err, CreditsError::InvalidLength { length: 1, .. }));
}

#[test]
fn rejects_payload_too_short_for_fields() {
    // Wait needs 2 field bytes; this record carries none.
    let data = [0x02, 0x01, 0x02, 0x00];
    let err = decode(&data).unwrap_err();
    assert!(matches!(
        err,
        CreditsError::PayloadTooShort {
            opcode: 1,
            expected: 2,
            actual: 0,
        }
    ));
}

#[test]
fn rejects_text_length_past_payload() {
    // Set Header Text claiming 10 text bytes with only 1 present.
    let data = [0x04, 0x0B, 0x0A, 0x41, 0x02, 0x00];
    let err = decode(&data).unwrap_err();
    assert!(matches!(err, CreditsError::PayloadTooShort { opcode: 11, .. }));
}

#[test]
fn rejects_slot_index_out_of_range() {
    // Unload File with slot index 6; the slot list has entries 0..=5.
    let data = [0x04, 0x21, 0x06, 0x00, 0x02, 0x00];
    let err = decode(&data).unwrap_err();
    assert!(matches!(err, CreditsError::InvalidSlot { value: 6 }));
}

#[test]
fn error_offset_points_at_failing_record() {
    // Valid Wait record followed by an unknown opcode.
    let data = [0x04, 0x01, 0x01, 0x00, 0x04, 0x28, 0x00, 0x00, 0x02, 0x00];
    let err = decode(&data).unwrap_err();
    assert!(matches!(
        err,
        CreditsError::UnknownOpcode {
            opcode: 40,
            offset: 4,
        }
    ));
}

#[test]
fn encode_rejects_non_latin1_text() {
    let sequence = CreditsSequence::from_commands(vec![Command::SetHeaderText {
        text: "クレジット".to_string(),
    }]);
    let err = encode(&sequence).unwrap_err();
    assert!(matches!(err, CreditsError::TextNotLatin1 { .. }));
}

#[test]
fn encode_rejects_text_over_255_bytes() {
    let sequence = CreditsSequence::from_commands(vec![Command::SetBodyText {
        text: "x".repeat(300),
    }]);
    let err = encode(&sequence).unwrap_err();
    assert!(matches!(err, CreditsError::TextTooLong { len: 300, .. }));
}
