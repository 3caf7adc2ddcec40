use pretty_assertions::assert_eq;
use smfparse::prelude::*;

fn chunk(tag: &[u8; 4], body: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(8 + body.len());
    bytes.extend_from_slice(tag);
    bytes.extend_from_slice(&(body.len() as u32).to_be_bytes());
    bytes.extend_from_slice(body);
    bytes
}

fn file_with_track(track_body: &[u8]) -> Vec<u8> {
    let mut bytes = chunk(b"MThd", &[0x00, 0x00, 0x00, 0x01, 0x00, 0x60]);
    bytes.extend_from_slice(&chunk(b"MTrk", track_body));
    bytes
}

fn kind_of(bytes: &[u8]) -> ErrorKind {
    Document::parse(bytes).unwrap_err().kind().clone()
}

#[test]
fn unrecognized_first_chunk_is_missing_header() {
    let mut bytes = file_with_track(&[0x00, 0xFF, 0x2F, 0x00]);
    bytes[3] = b'X'; // "MThX": a valid but unrecognized tag
    assert_eq!(kind_of(&bytes), ErrorKind::MissingHeaderChunk);
}

#[test]
fn non_ascii_tag_is_bad_magic() {
    let mut bytes = file_with_track(&[0x00, 0xFF, 0x2F, 0x00]);
    bytes[0] = 0x01;
    let err = Document::parse(&bytes).unwrap_err();
    assert_eq!(err.position(), 0);
    assert!(matches!(err.kind(), ErrorKind::BadMagic(_)));
}

#[test]
fn invalid_header_format() {
    let mut bytes = file_with_track(&[0x00, 0xFF, 0x2F, 0x00]);
    bytes[9] = 0x07; // format field becomes 7
    assert_eq!(kind_of(&bytes), ErrorKind::InvalidFormat(7));
}

#[test]
fn truncated_header_body() {
    let bytes = b"MThd\x00\x00\x00\x06\x00\x00\x00";
    assert_eq!(kind_of(bytes), ErrorKind::UnexpectedEndOfBuffer);
}

#[test]
fn track_without_end_of_track() {
    let bytes = file_with_track(&[0x00, 0x90, 60, 100, 0x00, 0x80, 60, 0]);
    assert_eq!(kind_of(&bytes), ErrorKind::MissingEndOfTrack);
}

#[test]
fn delta_time_vlq_overflow() {
    let bytes = file_with_track(&[0xFF, 0xFF, 0xFF, 0xFF, 0x7F, 0xFF, 0x2F, 0x00]);
    assert_eq!(kind_of(&bytes), ErrorKind::VlqOverflow);
}

#[test]
fn unsupported_system_status() {
    let bytes = file_with_track(&[0x00, 0xF4, 0x00, 0xFF, 0x2F, 0x00]);
    assert_eq!(kind_of(&bytes), ErrorKind::UnsupportedStatusByte(0xF4));
}

#[test]
fn data_byte_at_track_start() {
    let bytes = file_with_track(&[0x00, 0x40, 0x40, 0x00, 0xFF, 0x2F, 0x00]);
    assert_eq!(kind_of(&bytes), ErrorKind::NoRunningStatus);
}

#[test]
fn running_status_does_not_cross_tracks() {
    // first track establishes a status; second starts with a data byte
    let mut bytes = chunk(b"MThd", &[0x00, 0x01, 0x00, 0x02, 0x00, 0x60]);
    bytes.extend_from_slice(&chunk(
        b"MTrk",
        &[0x00, 0x90, 60, 100, 0x00, 0xFF, 0x2F, 0x00],
    ));
    bytes.extend_from_slice(&chunk(b"MTrk", &[0x00, 64, 100, 0x00, 0xFF, 0x2F, 0x00]));
    assert_eq!(kind_of(&bytes), ErrorKind::NoRunningStatus);
}

#[test]
fn declared_track_length_longer_than_events() {
    let mut bytes = chunk(b"MThd", &[0x00, 0x00, 0x00, 0x01, 0x00, 0x60]);
    // declared length 8, but end-of-track lands at byte 4
    bytes.extend_from_slice(b"MTrk\x00\x00\x00\x08");
    bytes.extend_from_slice(&[0x00, 0xFF, 0x2F, 0x00, 0x00, 0xFF, 0x2F, 0x00]);
    assert_eq!(
        kind_of(&bytes),
        ErrorKind::TrackLengthMismatch {
            declared: 8,
            consumed: 4,
        }
    );
}

#[test]
fn truncated_track_body() {
    let mut bytes = chunk(b"MThd", &[0x00, 0x00, 0x00, 0x01, 0x00, 0x60]);
    bytes.extend_from_slice(b"MTrk\x00\x00\x00\x10");
    bytes.extend_from_slice(&[0x00, 0x90, 60]);
    assert_eq!(kind_of(&bytes), ErrorKind::UnexpectedEndOfBuffer);
}

#[test]
fn empty_buffer() {
    assert_eq!(kind_of(&[]), ErrorKind::UnexpectedEndOfBuffer);
}

#[test]
fn error_positions_point_into_the_buffer() {
    // the bad status byte sits 4 bytes into the track body
    let bytes = file_with_track(&[0x00, 0x90, 60, 100, 0x00, 0xF4, 0xFF, 0x2F, 0x00]);
    let err = Document::parse(&bytes).unwrap_err();
    let track_body_start = 14 + 8;
    assert_eq!(err.position(), track_body_start + 5);
    assert_eq!(
        err.to_string(),
        format!(
            "decode error at byte {}: unsupported status byte 0xf4",
            track_body_start + 5
        )
    );
}
