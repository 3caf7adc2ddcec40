use std::borrow::Cow;

use num_enum::TryFromPrimitive;

#[doc = r#"
A meta event: file-only annotation data that is never sent over a wire.

The payload's declared length is always authoritative for how many bytes
the decoder consumes, so a subtype this library does not recognize (or a
recognized subtype carrying a nonstandard payload size) becomes
[`MetaEvent::Unknown`] with its bytes preserved verbatim, and decoding
continues at the right offset.
"#]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MetaEvent<'a> {
    /// 0x01: free text
    Text(Cow<'a, str>),
    /// 0x02: copyright notice
    Copyright(Cow<'a, str>),
    /// 0x03: sequence or track name
    TrackName(Cow<'a, str>),
    /// 0x04: instrument name
    InstrumentName(Cow<'a, str>),
    /// 0x05: lyric syllable
    Lyric(Cow<'a, str>),
    /// 0x06: rehearsal/section marker
    Marker(Cow<'a, str>),
    /// 0x07: cue point description
    CuePoint(Cow<'a, str>),
    /// 0x51: tempo in microseconds per quarter note (24-bit)
    SetTempo(u32),
    /// 0x58: time signature
    TimeSignature {
        /// Numerator of the signature
        numerator: u8,
        /// Denominator as a power of two (3 means 1/8)
        denominator_pow2: u8,
        /// MIDI clocks per metronome click
        clocks_per_click: u8,
        /// Notated 32nd notes per MIDI quarter note
        thirty_seconds_per_quarter: u8,
    },
    /// 0x59: key signature
    KeySignature {
        /// Accidental count, -7 (flats) through 7 (sharps)
        accidentals: i8,
        /// Major or minor
        mode: KeyMode,
    },
    /// 0x2F: terminates the track
    EndOfTrack,
    /// Anything else, payload retained verbatim
    Unknown {
        /// The subtype byte as stored
        subtype: u8,
        /// The declared payload, uninterpreted
        data: &'a [u8],
    },
}

/// The mode byte of a key signature.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum KeyMode {
    /// Major key
    Major = 0,
    /// Minor key
    Minor = 1,
}

impl<'a> MetaEvent<'a> {
    /// Classify a meta event from its subtype byte and payload.
    ///
    /// Never fails: the payload was already sized by its declared length,
    /// and anything unrecognized is preserved as [`MetaEvent::Unknown`].
    pub(crate) fn from_parts(subtype: u8, payload: &'a [u8]) -> Self {
        let unknown = || Self::Unknown {
            subtype,
            data: payload,
        };
        match subtype {
            0x01 => Self::Text(String::from_utf8_lossy(payload)),
            0x02 => Self::Copyright(String::from_utf8_lossy(payload)),
            0x03 => Self::TrackName(String::from_utf8_lossy(payload)),
            0x04 => Self::InstrumentName(String::from_utf8_lossy(payload)),
            0x05 => Self::Lyric(String::from_utf8_lossy(payload)),
            0x06 => Self::Marker(String::from_utf8_lossy(payload)),
            0x07 => Self::CuePoint(String::from_utf8_lossy(payload)),
            0x2F => {
                if payload.is_empty() {
                    Self::EndOfTrack
                } else {
                    unknown()
                }
            }
            0x51 => match payload {
                &[a, b, c] => Self::SetTempo(u32::from_be_bytes([0, a, b, c])),
                _ => unknown(),
            },
            0x58 => match payload {
                &[numerator, denominator_pow2, clocks_per_click, thirty_seconds_per_quarter] => {
                    Self::TimeSignature {
                        numerator,
                        denominator_pow2,
                        clocks_per_click,
                        thirty_seconds_per_quarter,
                    }
                }
                _ => unknown(),
            },
            0x59 => match payload {
                &[accidentals, mode] => match KeyMode::try_from(mode) {
                    Ok(mode) => Self::KeySignature {
                        accidentals: accidentals as i8,
                        mode,
                    },
                    Err(_) => unknown(),
                },
                _ => unknown(),
            },
            _ => unknown(),
        }
    }

    /// Returns the text for the seven text-family variants
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(t)
            | Self::Copyright(t)
            | Self::TrackName(t)
            | Self::InstrumentName(t)
            | Self::Lyric(t)
            | Self::Marker(t)
            | Self::CuePoint(t) => Some(t),
            _ => None,
        }
    }
}
