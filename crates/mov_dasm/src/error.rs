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
use std::io;
use thiserror::Error;

/// Errors produced while decoding a single instruction.
///
/// `EndOfStream` and `UnsupportedOpcode` are recoverable from the caller's
/// perspective; `Truncated` is not, since the cursor may be misaligned.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The stream ended cleanly at an instruction boundary.
    #[error("end of instruction stream")]
    EndOfStream,
    /// The stream ended in the middle of an instruction encoding.
    #[error("unexpected end of stream while decoding opcode {opcode:#04X}")]
    Truncated { opcode: u8 },
    /// The opcode byte is not one of the supported MOV encodings.
    /// Exactly one byte has been consumed.
    #[error("unsupported opcode {0:#04X}")]
    UnsupportedOpcode(u8),
    #[error("read error: {0}")]
    Io(#[from] io::Error),
}
