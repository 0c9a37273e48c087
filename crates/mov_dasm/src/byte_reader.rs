/*
    mov_dasm
    Copyright 2022-2025 Daniel Balsom
    https://github.com/dbalsom/mov_dasm

    Permission is hereby granted, free of charge, to any person obtaining a
    copy of this software and associated documentation files (the “Software”),
    to deal in the Software without restriction, including without limitation
    the rights to use, copy, modify, merge, publish, distribute, sublicense,
    and/or sell copies of the Software, and to permit persons to whom the
    Software is furnished to do so, subject to the following conditions:

    The above copyright notice and this permission notice shall be included in
    all copies or substantial portions of the Software.

    THE SOFTWARE IS PROVIDED “AS IS”, WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
    IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
    FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
    AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
    LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING
    FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER
    DEALINGS IN THE SOFTWARE.
*/
use std::io::{self, BufRead};

/// The [ByteReader] trait extends [BufRead] with methods for reading fixed-length
/// little-endian values. Exhaustion is reported as [io::ErrorKind::UnexpectedEof];
/// the decoder decides whether that means a clean end of stream or a truncated
/// instruction.
pub trait ByteReader: BufRead {
    /// Reads a single u8 from the stream.
    fn read_u8(&mut self) -> io::Result<u8> {
        let buf = self.fill_buf()?;
        if buf.is_empty() {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "read_u8(): EOF"));
        }
        let b = buf[0];
        self.consume(1);
        Ok(b)
    }

    /// Reads a single i8 from the stream.
    fn read_i8(&mut self) -> io::Result<i8> {
        Ok(self.read_u8()? as i8)
    }

    /// Reads a little-endian u16 from the stream.
    fn read_u16(&mut self) -> io::Result<u16> {
        let lo = self.read_u8()?;
        let hi = self.read_u8()?;
        Ok(u16::from_le_bytes([lo, hi]))
    }

    /// Reads a little-endian i16 from the stream.
    fn read_i16(&mut self) -> io::Result<i16> {
        Ok(i16::from_le_bytes(self.read_u16()?.to_le_bytes()))
    }
}

// Allow any BufRead to be used as a ByteReader
impl<T: BufRead + ?Sized> ByteReader for T {}
