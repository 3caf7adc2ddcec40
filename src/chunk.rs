#![doc = r#"
Chunk framing for Standard MIDI Files.

A MIDI file is a sequence of chunks, each a 4-character ASCII tag followed
by a big-endian 32-bit byte length and that many bytes of body. The SMF
specification defines `MThd` (header) and `MTrk` (track); any other tag is
a vendor chunk that a decoder must be able to skip by its declared length
rather than reject, so files carrying proprietary chunks stay readable.
"#]

use crate::{DecodeError, DecodeResult, ErrorKind, Reader};

/// Classification of a chunk by its 4-byte tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChunkKind {
    /// An `MThd` header chunk
    Header,
    /// An `MTrk` track chunk
    Track,
    /// Any other tag; the body is skippable by declared length
    Unknown([u8; 4]),
}

/// A framed chunk: its kind and the byte length of its body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
    kind: ChunkKind,
    length: u32,
}

impl ChunkHeader {
    /// Read the tag and length framing for the chunk at the reader's
    /// position, leaving the reader at the first body byte.
    ///
    /// Fails with [`ErrorKind::BadMagic`] only when the tag bytes are not
    /// ASCII letters; an unrecognized letter tag is [`ChunkKind::Unknown`].
    pub fn read(reader: &mut Reader<'_>) -> DecodeResult<Self> {
        let tag_position = reader.position();
        let tag = reader.read_array::<4>()?;
        if !tag.iter().all(u8::is_ascii_alphabetic) {
            return Err(DecodeError::new(tag_position, ErrorKind::BadMagic(tag)));
        }
        let kind = match &tag {
            b"MThd" => ChunkKind::Header,
            b"MTrk" => ChunkKind::Track,
            _ => ChunkKind::Unknown(tag),
        };
        let length = reader.read_u32()?;
        Ok(Self { kind, length })
    }

    /// The chunk's classification
    pub const fn kind(&self) -> ChunkKind {
        self.kind
    }

    /// The declared byte length of the chunk body
    pub const fn length(&self) -> u32 {
        self.length
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn frames_header_chunk() {
        let mut reader = Reader::new(b"MThd\x00\x00\x00\x06rest");
        let chunk = ChunkHeader::read(&mut reader).unwrap();
        assert_eq!(chunk.kind(), ChunkKind::Header);
        assert_eq!(chunk.length(), 6);
        assert_eq!(reader.position(), 8);
    }

    #[test]
    fn frames_track_chunk() {
        let mut reader = Reader::new(b"MTrk\x00\x00\x01\x00");
        let chunk = ChunkHeader::read(&mut reader).unwrap();
        assert_eq!(chunk.kind(), ChunkKind::Track);
        assert_eq!(chunk.length(), 256);
    }

    #[test]
    fn unrecognized_letter_tag_is_unknown_not_an_error() {
        let mut reader = Reader::new(b"XTRA\x00\x00\x00\x0A");
        let chunk = ChunkHeader::read(&mut reader).unwrap();
        assert_eq!(chunk.kind(), ChunkKind::Unknown(*b"XTRA"));
        assert_eq!(chunk.length(), 10);
    }

    #[test]
    fn non_letter_tag_is_bad_magic() {
        let mut reader = Reader::new(b"MT\x00k\x00\x00\x00\x04");
        let err = ChunkHeader::read(&mut reader).unwrap_err();
        assert_eq!(err.position(), 0);
        assert_eq!(*err.kind(), ErrorKind::BadMagic(*b"MT\x00k"));
    }

    #[test]
    fn truncated_length_field() {
        let mut reader = Reader::new(b"MTrk\x00\x00");
        let err = ChunkHeader::read(&mut reader).unwrap_err();
        assert!(err.is_unexpected_end());
    }
}
