#![doc = r#"
MIDI variable-length quantities.

Delta-times and event payload lengths are stored as a big-endian sequence
of 7-bit groups, most significant first, with the top bit of each byte
flagging continuation. A conforming value fits in four encoded bytes
(28 bits of payload); anything longer is malformed input.
"#]

use crate::{DecodeResult, ErrorKind, Reader};

/// The most encoded bytes a conforming quantity may occupy.
const MAX_ENCODED_LEN: usize = 4;

/// Decode one variable-length quantity from the reader.
///
/// Returns the value and the number of bytes consumed. Fails with
/// [`ErrorKind::VlqOverflow`] on a fifth continuation byte, so malformed
/// input can never loop unboundedly.
pub fn read(reader: &mut Reader<'_>) -> DecodeResult<(u32, usize)> {
    let mut value: u32 = 0;
    for consumed in 1..=MAX_ENCODED_LEN {
        let byte = reader.read_u8()?;
        value = (value << 7) | u32::from(byte & 0x7F);
        if byte & 0x80 == 0 {
            return Ok((value, consumed));
        }
    }
    Err(reader.err(ErrorKind::VlqOverflow))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn decode(bytes: &[u8]) -> DecodeResult<(u32, usize)> {
        read(&mut Reader::new(bytes))
    }

    #[test]
    fn single_byte() {
        assert_eq!(decode(&[0x40]).unwrap(), (64, 1));
        assert_eq!(decode(&[0x00]).unwrap(), (0, 1));
        assert_eq!(decode(&[0x7F]).unwrap(), (127, 1));
    }

    #[test]
    fn multi_byte() {
        assert_eq!(decode(&[0x81, 0x7F]).unwrap(), (255, 2));
        assert_eq!(decode(&[0x81, 0x80, 0x00]).unwrap(), (16384, 3));
        assert_eq!(
            decode(&[0xFF, 0xFF, 0xFF, 0x7F]).unwrap(),
            (0x0FFF_FFFF, 4)
        );
    }

    #[test]
    fn trailing_bytes_are_untouched() {
        let mut reader = Reader::new(&[0x81, 0x00, 0x55]);
        assert_eq!(read(&mut reader).unwrap(), (128, 2));
        assert_eq!(reader.read_u8().unwrap(), 0x55);
    }

    #[test]
    fn fifth_continuation_byte_overflows() {
        let err = decode(&[0xFF, 0xFF, 0xFF, 0xFF, 0x7F]).unwrap_err();
        assert_eq!(*err.kind(), ErrorKind::VlqOverflow);
    }

    #[test]
    fn truncated_quantity_is_end_of_buffer() {
        let err = decode(&[0x81]).unwrap_err();
        assert_eq!(*err.kind(), ErrorKind::UnexpectedEndOfBuffer);
    }
}
