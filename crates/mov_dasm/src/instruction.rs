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
use crate::cpu_common::{OperandSize, OperandType};
use std::fmt;

/// Mnemonics the decoder can produce. Only the MOV family is supported.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum Mnemonic {
    #[default]
    MOV,
}

impl Mnemonic {
    pub fn to_str(self) -> &'static str {
        match self {
            Mnemonic::MOV => "MOV",
        }
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_str())
    }
}

/// A single decoded instruction. Operand 1 is the destination.
#[derive(Clone, Debug, Default)]
pub struct Instruction {
    pub opcode: u8,
    pub mnemonic: Mnemonic,
    /// Every byte consumed while decoding, in stream order. Its length is
    /// the instruction's encoded length.
    pub instruction_bytes: Vec<u8>,
    pub operand_size: OperandSize,
    /// Emit a `byte`/`word` keyword before the immediate; set when the
    /// destination is a memory operand whose width the text cannot imply.
    pub disambiguate: bool,
    pub operand1_type: OperandType,
    pub operand2_type: OperandType,
}

impl Instruction {
    pub fn has_operands(&self) -> bool {
        self.operand1_type != OperandType::NoOperand || self.operand2_type != OperandType::NoOperand
    }

    /// Encoded length in bytes.
    pub fn len(&self) -> usize {
        self.instruction_bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruction_bytes.is_empty()
    }
}
