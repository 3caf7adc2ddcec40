use crate::{vlq, DecodeError, DecodeResult, ErrorKind, Event, MetaEvent, Reader};

/// An event and the delta-ticks separating it from its predecessor.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimedEvent<'a> {
    /// Ticks since the previous event in the same track (0 means
    /// simultaneous)
    pub delta_ticks: u32,
    /// The event itself
    #[cfg_attr(feature = "serde", serde(borrow))]
    pub event: Event<'a>,
}

#[doc = r#"
One `MTrk` chunk body: an ordered sequence of timed events.

A well-formed track ends with exactly one end-of-track meta event, and its
events consume exactly the byte length the chunk declared. Running status
is scoped to a single track; it starts absent and is never carried across
track boundaries.
"#]
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Track<'a> {
    #[cfg_attr(feature = "serde", serde(borrow))]
    events: Vec<TimedEvent<'a>>,
}

impl<'a> Track<'a> {
    /// Decode a track chunk body of the given declared length.
    ///
    /// Alternates a VLQ delta-time with one event until end-of-track.
    /// Fails with [`ErrorKind::TrackLengthMismatch`] when event decoding
    /// does not land exactly on the declared length, and with
    /// [`ErrorKind::MissingEndOfTrack`] when the declared length runs out
    /// first.
    pub fn read(reader: &mut Reader<'a>, declared_length: u32) -> DecodeResult<Self> {
        let body_start = reader.position();
        let mut running_status: Option<u8> = None;
        let mut events = Vec::new();

        loop {
            if (reader.position() - body_start) as u32 >= declared_length {
                return Err(reader.err(ErrorKind::MissingEndOfTrack));
            }

            let (delta_ticks, _) = vlq::read(reader)?;
            let event = Event::read(reader, &mut running_status)?;
            let ended = matches!(event, Event::Meta(MetaEvent::EndOfTrack));
            events.push(TimedEvent { delta_ticks, event });

            let consumed = (reader.position() - body_start) as u32;
            if consumed > declared_length || (ended && consumed != declared_length) {
                return Err(DecodeError::new(
                    reader.position(),
                    ErrorKind::TrackLengthMismatch {
                        declared: declared_length,
                        consumed,
                    },
                ));
            }
            if ended {
                return Ok(Self { events });
            }
        }
    }

    /// The track's events in file order
    pub fn events(&self) -> &[TimedEvent<'a>] {
        &self.events
    }
}

impl<'a> IntoIterator for Track<'a> {
    type Item = TimedEvent<'a>;
    type IntoIter = std::vec::IntoIter<TimedEvent<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}
