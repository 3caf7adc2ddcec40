use crate::{ChunkHeader, ChunkKind, DecodeError, DecodeResult, ErrorKind, Header, Reader, Track};

#[doc = r#"
A fully decoded Standard MIDI File.

Produced in one pass by [`Document::parse`] and immutable afterwards.
Event payloads borrow from the input buffer, so the buffer must outlive
the document.
"#]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Document<'a> {
    header: Header,
    #[cfg_attr(feature = "serde", serde(borrow))]
    tracks: Vec<Track<'a>>,
}

impl<'a> Document<'a> {
    /// Decode a complete MIDI file from a byte buffer.
    ///
    /// The first chunk must be an `MThd` header; after it, exactly as
    /// many `MTrk` chunks as the header declares are decoded, and any
    /// interleaved unrecognized chunks are skipped by their declared
    /// length. Anything after the final expected track is ignored.
    ///
    /// Decoding is all-or-nothing: either every declared track decodes
    /// cleanly or the first violation is returned as a [`DecodeError`].
    pub fn parse(bytes: &'a [u8]) -> DecodeResult<Self> {
        let mut reader = Reader::new(bytes);

        let first = ChunkHeader::read(&mut reader)?;
        if first.kind() != ChunkKind::Header {
            return Err(DecodeError::new(0, ErrorKind::MissingHeaderChunk));
        }
        let header = Header::read(&mut reader, first.length())?;

        let expected = header.track_count();
        let mut tracks = Vec::with_capacity(expected as usize);
        while tracks.len() < expected as usize {
            if reader.remaining() == 0 {
                return Err(DecodeError::new(
                    reader.position(),
                    ErrorKind::TrackCountMismatch {
                        expected,
                        found: tracks.len() as u16,
                    },
                ));
            }
            let chunk = ChunkHeader::read(&mut reader)?;
            match chunk.kind() {
                ChunkKind::Track => tracks.push(Track::read(&mut reader, chunk.length())?),
                // duplicate headers and vendor chunks are skipped, not errors
                ChunkKind::Header | ChunkKind::Unknown(_) => {
                    reader.skip(chunk.length() as usize)?;
                }
            }
        }

        Ok(Self { header, tracks })
    }

    /// The decoded header
    pub const fn header(&self) -> &Header {
        &self.header
    }

    /// The decoded tracks, in file order
    pub fn tracks(&self) -> &[Track<'a>] {
        &self.tracks
    }
}
