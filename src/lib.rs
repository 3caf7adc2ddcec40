#![doc = r#"
# smfparse

Decodes a Standard MIDI File byte buffer into a structured [`Document`]:
a [`Header`] describing playback format and timing, followed by the
file's [`Track`]s, each an ordered sequence of timed events.

The decoder works over a fully materialized byte buffer (reading the file
is the caller's job), performs no I/O and never prints, and returns either
a complete document or a single [`DecodeError`] carrying the byte offset
of the first violation. Event payloads and text borrow from the input
buffer.

```rust
use smfparse::{Document, Event, MetaEvent};

let bytes: &[u8] = &[
    0x4D, 0x54, 0x68, 0x64, 0x00, 0x00, 0x00, 0x06, // MThd, length 6
    0x00, 0x00, 0x00, 0x01, 0x00, 0x60, // format 0, 1 track, 96 tpqn
    0x4D, 0x54, 0x72, 0x6B, 0x00, 0x00, 0x00, 0x04, // MTrk, length 4
    0x00, 0xFF, 0x2F, 0x00, // end of track
];

let doc = Document::parse(bytes).unwrap();
assert_eq!(doc.header().division().ticks_per_quarter_note(), Some(96));
assert_eq!(
    doc.tracks()[0].events()[0].event,
    Event::Meta(MetaEvent::EndOfTrack),
);
```

Unknown chunk tags and unrecognized meta-event subtypes are not errors:
both are skipped or preserved verbatim by their declared lengths, so files
carrying vendor extensions still decode.
"#]
#![warn(missing_docs)]

mod chunk;
pub use chunk::*;

mod document;
pub use document::*;

mod error;
pub use error::*;

mod event;
pub use event::*;

mod header;
pub use header::*;

mod reader;
pub use reader::*;

mod track;
pub use track::*;

pub mod vlq;

/// Common imports for working with decoded MIDI files
pub mod prelude {
    pub use crate::{
        ChannelEvent, ChunkHeader, ChunkKind, DecodeError, DecodeResult, Division, Document,
        ErrorKind, Event, Format, Header, KeyMode, MetaEvent, Reader, SmpteFps, TimedEvent, Track,
        VoiceMessage,
    };
}
