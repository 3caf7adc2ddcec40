use thiserror::Error;

#[doc = r#"
An error produced while decoding a Standard MIDI File buffer.

Every error carries the byte offset at which decoding stopped, plus an
[`ErrorKind`] naming the violated contract. Decoding is all-or-nothing:
no partial document is ever returned alongside one of these.
"#]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("decode error at byte {position}: {kind}")]
pub struct DecodeError {
    position: usize,
    kind: ErrorKind,
}

impl DecodeError {
    /// Create an error at the given buffer offset
    pub const fn new(position: usize, kind: ErrorKind) -> Self {
        Self { position, kind }
    }

    /// The byte offset at which decoding failed
    pub const fn position(&self) -> usize {
        self.position
    }

    /// The specific contract that was violated
    pub const fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// True if the buffer ended mid-read
    pub const fn is_unexpected_end(&self) -> bool {
        matches!(self.kind, ErrorKind::UnexpectedEndOfBuffer)
    }
}

/// The kinds of structural violations a MIDI byte buffer can exhibit.
///
/// Unknown chunk tags and unrecognized meta-event subtypes are deliberately
/// absent: both are valid, skippable content, not errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// A chunk tag contained bytes that are not ASCII letters
    #[error("chunk tag {0:?} is not four ASCII letters")]
    BadMagic([u8; 4]),

    /// A read ran past the end of the buffer
    #[error("unexpected end of buffer")]
    UnexpectedEndOfBuffer,

    /// A variable-length quantity continued past four encoded bytes
    #[error("variable-length quantity exceeds four bytes")]
    VlqOverflow,

    /// The header's format field was not 0, 1 or 2
    #[error("invalid header format {0}")]
    InvalidFormat(u16),

    /// A system common/real-time status byte this decoder does not handle
    #[error("unsupported status byte {0:#04x}")]
    UnsupportedStatusByte(u8),

    /// A data byte appeared with no channel-voice status to reuse
    #[error("data byte with no running status in effect")]
    NoRunningStatus,

    /// Track events did not consume exactly the chunk's declared length
    #[error("track consumed {consumed} bytes of a declared {declared}")]
    TrackLengthMismatch {
        /// Length declared by the track chunk
        declared: u32,
        /// Bytes actually consumed decoding its events
        consumed: u32,
    },

    /// A track chunk ended without an end-of-track meta event
    #[error("track ended without an end-of-track event")]
    MissingEndOfTrack,

    /// The first chunk in the buffer was not an `MThd` header
    #[error("first chunk is not an MThd header")]
    MissingHeaderChunk,

    /// The buffer ran out of chunks before the declared track count was met
    #[error("header declared {expected} tracks but only {found} were found")]
    TrackCountMismatch {
        /// Track count declared by the header
        expected: u16,
        /// Track chunks actually present
        found: u16,
    },
}

/// The decode result type (see [`DecodeError`])
pub type DecodeResult<T> = Result<T, DecodeError>;
