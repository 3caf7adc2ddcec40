#![doc = r#"
The `MThd` header chunk body.

The header carries three big-endian 16-bit fields: the playback format,
the number of track chunks that follow, and the time division that gives
delta-ticks their meaning. The body is nominally 6 bytes; longer declared
lengths are accepted for forward compatibility and the extra bytes are
skipped uninterpreted.
"#]

use num_enum::TryFromPrimitive;

use crate::{DecodeError, DecodeResult, ErrorKind, Reader};

/// How the file's tracks relate during playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u16)]
pub enum Format {
    /// Format 0: one track carrying all channels
    SingleMultiChannel = 0,
    /// Format 1: multiple tracks played simultaneously
    Simultaneous = 1,
    /// Format 2: multiple independent single-track sequences
    SequentiallyIndependent = 2,
}

/// The four SMPTE frame rates the MIDI specification defines.
///
/// Stored in the header as a negative two's-complement byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(i8)]
pub enum SmpteFps {
    /// 24 frames per second, the film standard
    TwentyFour = -24,
    /// 25 frames per second, PAL/SECAM video
    TwentyFive = -25,
    /// 29.97 frames per second, NTSC drop-frame
    TwentyNine = -29,
    /// 30 frames per second, NTSC black and white
    Thirty = -30,
}

impl SmpteFps {
    /// The nominal integer frame rate (drop-frame 29.97 reports 30,
    /// the rate MIDI timing math uses).
    pub const fn as_division(&self) -> u8 {
        match self {
            Self::TwentyFour => 24,
            Self::TwentyFive => 25,
            Self::TwentyNine | Self::Thirty => 30,
        }
    }
}

/// How delta-ticks map onto time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Division {
    /// Musical timing: ticks per quarter note (15-bit)
    TicksPerQuarterNote(u16),
    /// Absolute timing: SMPTE frames per second and ticks per frame
    Smpte {
        /// Frame rate as stored, a negative two's-complement count
        frames_per_second: i8,
        /// Subdivisions of each frame
        ticks_per_frame: u8,
    },
}

impl Division {
    /// Returns Some if delta-ticks are defined per quarter note
    pub const fn ticks_per_quarter_note(&self) -> Option<u16> {
        match self {
            Self::TicksPerQuarterNote(tpqn) => Some(*tpqn),
            Self::Smpte { .. } => None,
        }
    }

    /// Returns Some if the frame rate is one of the four SMPTE rates
    /// the specification defines
    pub fn smpte_fps(&self) -> Option<SmpteFps> {
        match self {
            Self::TicksPerQuarterNote(_) => None,
            Self::Smpte {
                frames_per_second, ..
            } => SmpteFps::try_from(*frames_per_second).ok(),
        }
    }

    fn from_raw(raw: u16) -> Self {
        if raw & 0x8000 == 0 {
            Self::TicksPerQuarterNote(raw & 0x7FFF)
        } else {
            Self::Smpte {
                frames_per_second: (raw >> 8) as u8 as i8,
                ticks_per_frame: (raw & 0x00FF) as u8,
            }
        }
    }
}

/// The decoded `MThd` body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Header {
    format: Format,
    track_count: u16,
    division: Division,
}

impl Header {
    /// Decode a header chunk body of the given declared length.
    ///
    /// The first 6 bytes are interpreted; any declared remainder is
    /// skipped so extended headers do not desynchronize the reader.
    pub fn read(reader: &mut Reader<'_>, declared_length: u32) -> DecodeResult<Self> {
        if declared_length < 6 {
            return Err(reader.err(ErrorKind::UnexpectedEndOfBuffer));
        }
        let format_position = reader.position();
        let raw_format = reader.read_u16()?;
        let format = Format::try_from(raw_format)
            .map_err(|_| DecodeError::new(format_position, ErrorKind::InvalidFormat(raw_format)))?;
        let track_count = reader.read_u16()?;
        let division = Division::from_raw(reader.read_u16()?);
        reader.skip(declared_length as usize - 6)?;
        Ok(Self {
            format,
            track_count,
            division,
        })
    }

    /// The playback format
    pub const fn format(&self) -> Format {
        self.format
    }

    /// The number of track chunks the header declares
    pub const fn track_count(&self) -> u16 {
        self.track_count
    }

    /// The time division for delta-ticks
    pub const fn division(&self) -> Division {
        self.division
    }
}
