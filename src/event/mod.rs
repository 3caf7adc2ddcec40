#![doc = r#"
Track event decoding.

An event starts at a status byte, or at a data byte when running status is
in effect. [`Event::read`] decodes exactly one event, advances the reader
past it, and updates the running-status context the caller threads through
the track's decode loop.

# Dispatch by leading byte

```text
< 0x80        data byte of a running-status channel-voice event
0x80 - 0xEF   channel-voice status (high nibble: kind, low nibble: channel)
0xF0 / 0xF7   system exclusive (VLQ length + payload)
0xFF          meta event (subtype + VLQ length + payload)
anything else unsupported system common/real-time status
```
"#]

mod meta;
pub use meta::*;

use crate::{vlq, DecodeError, DecodeResult, ErrorKind, Reader};

/// One decoded track event.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Event<'a> {
    /// A channel-voice message
    Channel(ChannelEvent),
    /// A system-exclusive payload, kept verbatim
    SysEx(&'a [u8]),
    /// A meta event
    Meta(#[cfg_attr(feature = "serde", serde(borrow))] MetaEvent<'a>),
}

/// A channel-voice message together with the channel it addresses.
///
/// The channel is the low nibble of the status byte. It is retained on
/// every message; playback is meaningless without it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChannelEvent {
    channel: u8,
    message: VoiceMessage,
}

impl ChannelEvent {
    /// Pair a message with a channel (0-15)
    pub const fn new(channel: u8, message: VoiceMessage) -> Self {
        Self { channel, message }
    }

    /// The channel this message addresses (0-15)
    pub const fn channel(&self) -> u8 {
        self.channel
    }

    /// The voice message itself
    pub const fn message(&self) -> VoiceMessage {
        self.message
    }
}

/// The channel-voice message kinds, selected by the status byte's high
/// nibble.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VoiceMessage {
    /// 0x8n: release a key
    NoteOff {
        /// Key number (0-127)
        key: u8,
        /// Release velocity
        velocity: u8,
    },
    /// 0x9n: press a key (velocity 0 conventionally means release)
    NoteOn {
        /// Key number (0-127)
        key: u8,
        /// Strike velocity
        velocity: u8,
    },
    /// 0xAn: per-key pressure change
    PolyphonicAftertouch {
        /// Key number (0-127)
        key: u8,
        /// Pressure amount
        pressure: u8,
    },
    /// 0xBn: controller value change
    ControlChange {
        /// Controller number
        controller: u8,
        /// New controller value
        value: u8,
    },
    /// 0xCn: instrument selection
    ProgramChange {
        /// Program (patch) number
        program: u8,
    },
    /// 0xDn: whole-channel pressure change
    ChannelAftertouch {
        /// Pressure amount
        pressure: u8,
    },
    /// 0xEn: pitch wheel position
    PitchBend {
        /// 14-bit wheel position, 0x2000 is centered
        value: u16,
    },
}

impl<'a> Event<'a> {
    /// Decode one event at the reader's position.
    ///
    /// `running_status` is the most recent channel-voice status byte seen
    /// in this track, if any. A leading data byte reuses it; a fresh
    /// channel-voice status replaces it; a system-exclusive event clears
    /// it. Fails with [`ErrorKind::NoRunningStatus`] on a data byte with
    /// no status to reuse.
    pub fn read(
        reader: &mut Reader<'a>,
        running_status: &mut Option<u8>,
    ) -> DecodeResult<Event<'a>> {
        let status_position = reader.position();
        let lead = reader.peek()?;

        let status = if lead < 0x80 {
            // Running status: the lead byte is this event's first data
            // byte, so it stays unconsumed here.
            running_status
                .ok_or_else(|| DecodeError::new(status_position, ErrorKind::NoRunningStatus))?
        } else {
            reader.skip(1)?;
            lead
        };

        match status {
            0x80..=0xEF => {
                *running_status = Some(status);
                let message = VoiceMessage::read(status, reader)?;
                Ok(Event::Channel(ChannelEvent::new(status & 0x0F, message)))
            }
            0xF0 | 0xF7 => {
                *running_status = None;
                let (length, _) = vlq::read(reader)?;
                let payload = reader.read_bytes(length as usize)?;
                Ok(Event::SysEx(payload))
            }
            0xFF => {
                let subtype = reader.read_u8()?;
                let (length, _) = vlq::read(reader)?;
                let payload = reader.read_bytes(length as usize)?;
                Ok(Event::Meta(MetaEvent::from_parts(subtype, payload)))
            }
            _ => Err(DecodeError::new(
                status_position,
                ErrorKind::UnsupportedStatusByte(status),
            )),
        }
    }
}

impl VoiceMessage {
    /// Decode the data bytes of a channel-voice message whose status byte
    /// (full or running) is already known.
    fn read(status: u8, reader: &mut Reader<'_>) -> DecodeResult<Self> {
        Ok(match status >> 4 {
            0x8 => Self::NoteOff {
                key: reader.read_u8()?,
                velocity: reader.read_u8()?,
            },
            0x9 => Self::NoteOn {
                key: reader.read_u8()?,
                velocity: reader.read_u8()?,
            },
            0xA => Self::PolyphonicAftertouch {
                key: reader.read_u8()?,
                pressure: reader.read_u8()?,
            },
            0xB => Self::ControlChange {
                controller: reader.read_u8()?,
                value: reader.read_u8()?,
            },
            0xC => Self::ProgramChange {
                program: reader.read_u8()?,
            },
            0xD => Self::ChannelAftertouch {
                pressure: reader.read_u8()?,
            },
            0xE => {
                // Least significant 7 bits arrive first.
                let lsb = reader.read_u8()?;
                let msb = reader.read_u8()?;
                Self::PitchBend {
                    value: u16::from(lsb & 0x7F) | (u16::from(msb & 0x7F) << 7),
                }
            }
            _ => unreachable!("caller dispatches only channel-voice statuses"),
        })
    }
}
