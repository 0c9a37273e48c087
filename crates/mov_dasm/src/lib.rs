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

//! A disassembler for the 16-bit x86 MOV instruction family.
//!
//! The decoder consumes raw machine-code bytes through a [byte_reader::ByteReader]
//! cursor, classifies each opcode into one of the supported MOV encodings, and
//! produces [instruction::Instruction] values. Rendering to NASM-style text is a
//! separate concern handled by the [formatter] module.

pub mod byte_reader;
pub mod cpu_common;
pub mod decoder;
pub mod error;
pub mod formatter;
pub mod instruction;
pub mod modrm16;

pub use crate::{
    decoder::{decode_one, disassemble, Decoder},
    error::DecodeError,
    formatter::{format_instruction, Format, FormatOptions, FormatterOutput, NasmFormatter},
    instruction::{Instruction, Mnemonic},
};

pub mod prelude {
    pub use crate::{
        byte_reader::ByteReader,
        cpu_common::{
            Displacement, EaBase, EffectiveAddress, OperandSize, OperandType, Register16,
            Register8,
        },
        decoder::{decode_one, disassemble, Decoder},
        error::DecodeError,
        formatter::{
            format_instruction, DecoratorToken, Format, FormatOptions, FormatterOutput,
            NasmFormatter, SemanticToken, TokenItem, TokenStream,
        },
        instruction::{Instruction, Mnemonic},
        modrm16::{AddressingMode, ModRmByte16},
    };
}
