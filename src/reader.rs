use crate::{DecodeError, DecodeResult, ErrorKind};

#[doc = r#"
A bounds-checked, forward-only cursor over a MIDI byte buffer.

Every read either yields a value and advances the position, or fails with
[`ErrorKind::UnexpectedEndOfBuffer`] at the current offset without moving.
The buffer itself is never mutated; callers snapshot [`Reader::position`]
to cross-check chunk length accounting.
"#]
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> Reader<'a> {
    /// Create a reader over the start of a byte slice
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self { bytes, position: 0 }
    }

    /// The current offset from the start of the buffer
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Bytes left between the position and the end of the buffer
    pub const fn remaining(&self) -> usize {
        self.bytes.len() - self.position
    }

    /// Look at the next byte without consuming it
    pub fn peek(&self) -> DecodeResult<u8> {
        self.bytes
            .get(self.position)
            .copied()
            .ok_or_else(|| self.end_of_buffer())
    }

    /// Read one byte
    pub fn read_u8(&mut self) -> DecodeResult<u8> {
        let byte = self.peek()?;
        self.position += 1;
        Ok(byte)
    }

    /// Read a big-endian u16
    pub fn read_u16(&mut self) -> DecodeResult<u16> {
        let bytes = self.read_array::<2>()?;
        Ok(u16::from_be_bytes(bytes))
    }

    /// Read a big-endian 24-bit value into a u32
    pub fn read_u24(&mut self) -> DecodeResult<u32> {
        let [a, b, c] = self.read_array::<3>()?;
        Ok(u32::from_be_bytes([0, a, b, c]))
    }

    /// Read a big-endian u32
    pub fn read_u32(&mut self) -> DecodeResult<u32> {
        let bytes = self.read_array::<4>()?;
        Ok(u32::from_be_bytes(bytes))
    }

    /// Read `n` raw bytes as a slice borrowing from the buffer
    pub fn read_bytes(&mut self, n: usize) -> DecodeResult<&'a [u8]> {
        if self.remaining() < n {
            return Err(self.end_of_buffer());
        }
        let slice = &self.bytes[self.position..self.position + n];
        self.position += n;
        Ok(slice)
    }

    /// Advance past `n` bytes without yielding them
    pub fn skip(&mut self, n: usize) -> DecodeResult<()> {
        if self.remaining() < n {
            return Err(self.end_of_buffer());
        }
        self.position += n;
        Ok(())
    }

    /// Read a fixed-size array of bytes
    pub fn read_array<const N: usize>(&mut self) -> DecodeResult<[u8; N]> {
        let slice = self.read_bytes(N)?;
        // read_bytes returned exactly N bytes
        Ok(slice.try_into().unwrap())
    }

    /// Construct an error at the current position
    pub(crate) const fn err(&self, kind: ErrorKind) -> DecodeError {
        DecodeError::new(self.position, kind)
    }

    const fn end_of_buffer(&self) -> DecodeError {
        self.err(ErrorKind::UnexpectedEndOfBuffer)
    }
}
