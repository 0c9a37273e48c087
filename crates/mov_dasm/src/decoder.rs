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
use crate::{
    byte_reader::ByteReader,
    cpu_common::{
        EffectiveAddress, OperandSize, OperandType, Register16, REGISTER16_LUT, REGISTER8_LUT,
    },
    error::DecodeError,
    formatter::{format_instruction, FormatOptions},
    instruction::{Instruction, Mnemonic},
    modrm16::ModRmByte16,
};
use std::io::{self, BufReader, Read};

/// Map byte-level exhaustion inside an instruction body to a truncation error.
fn truncated(opcode: u8) -> impl Fn(io::Error) -> DecodeError {
    move |e| match e.kind() {
        io::ErrorKind::UnexpectedEof => DecodeError::Truncated { opcode },
        _ => DecodeError::Io(e),
    }
}

/// A decoder that consumes bytes from any [Read] and produces [Instruction]s.
/// The reader is the only cursor; every decode advances it by exactly the
/// instruction's encoded length.
pub struct Decoder<R: Read> {
    reader: BufReader<R>,
}

impl<R: Read> Decoder<R> {
    pub fn new(inner: R) -> Self {
        Self {
            reader: BufReader::new(inner),
        }
    }

    /// Decode the next instruction from the stream.
    ///
    /// Opcode ranges overlap numerically, so classification is a single
    /// exhaustive match: every byte value maps to exactly one handler or
    /// the unsupported-opcode fallback, which consumes exactly one byte.
    pub fn decode_next(&mut self) -> Result<Instruction, DecodeError> {
        let opcode = self.reader.read_u8().map_err(|e| match e.kind() {
            io::ErrorKind::UnexpectedEof => DecodeError::EndOfStream,
            _ => DecodeError::Io(e),
        })?;

        let mut inst = Instruction {
            opcode,
            mnemonic: Mnemonic::MOV,
            instruction_bytes: vec![opcode],
            ..Default::default()
        };

        match opcode {
            0x88..=0x8B => self.register_rm_mov(&mut inst)?,
            0xA1 | 0xA3 => self.accumulator_mov(&mut inst)?,
            0xB0..=0xBF => self.immediate_to_register(&mut inst)?,
            0xC6 | 0xC7 => self.immediate_to_rm(&mut inst)?,
            unknown => return Err(DecodeError::UnsupportedOpcode(unknown)),
        }
        Ok(inst)
    }

    /// MOV r/m8,r8 / r/m16,r16 / r8,r/m8 / r16,r/m16 (0x88-0x8B).
    /// Opcode bit 1 is the direction flag: set means the REG field is the
    /// destination. Bit 0 is the width flag.
    fn register_rm_mov(&mut self, inst: &mut Instruction) -> Result<(), DecodeError> {
        let d = inst.opcode & 0x02 != 0;
        let wide = inst.opcode & 0x01 != 0;
        let modrm = ModRmByte16::read(&mut self.reader, &mut inst.instruction_bytes)
            .map_err(truncated(inst.opcode))?;

        inst.operand_size = if wide {
            OperandSize::Operand16
        }
        else {
            OperandSize::Operand8
        };

        let reg_operand = if wide {
            OperandType::Register16(modrm.op2_reg16())
        }
        else {
            OperandType::Register8(modrm.op2_reg8())
        };
        let rm_operand = match modrm.effective_address() {
            Some(ea) => OperandType::AddressingMode16(ea, inst.operand_size),
            None if wide => OperandType::Register16(modrm.op1_reg16()),
            None => OperandType::Register8(modrm.op1_reg8()),
        };

        if d {
            inst.operand1_type = reg_operand;
            inst.operand2_type = rm_operand;
        }
        else {
            inst.operand1_type = rm_operand;
            inst.operand2_type = reg_operand;
        }
        Ok(())
    }

    /// MOV AX,moffs16 (0xA1) and MOV moffs16,AX (0xA3): a 16-bit absolute
    /// address follows the opcode directly, with no modrm byte.
    fn accumulator_mov(&mut self, inst: &mut Instruction) -> Result<(), DecodeError> {
        let addr = self.reader.read_u16().map_err(truncated(inst.opcode))?;
        inst.instruction_bytes.extend_from_slice(&addr.to_le_bytes());
        inst.operand_size = OperandSize::Operand16;

        let memory =
            OperandType::AddressingMode16(EffectiveAddress::Absolute(addr), inst.operand_size);
        let accumulator = OperandType::Register16(Register16::AX);
        if inst.opcode == 0xA1 {
            inst.operand1_type = accumulator;
            inst.operand2_type = memory;
        }
        else {
            inst.operand1_type = memory;
            inst.operand2_type = accumulator;
        }
        Ok(())
    }

    /// MOV reg,imm (0xB0-0xBF): the low three opcode bits select the
    /// register, bit 3 the width. Byte immediates are sign-extended.
    fn immediate_to_register(&mut self, inst: &mut Instruction) -> Result<(), DecodeError> {
        let reg = (inst.opcode & 0x07) as usize;
        let wide = inst.opcode & 0x08 != 0;

        if wide {
            let imm = self.reader.read_i16().map_err(truncated(inst.opcode))?;
            inst.instruction_bytes.extend_from_slice(&imm.to_le_bytes());
            inst.operand_size = OperandSize::Operand16;
            inst.operand1_type = OperandType::Register16(REGISTER16_LUT[reg]);
            inst.operand2_type = OperandType::Immediate16(imm);
        }
        else {
            let imm = self.reader.read_i8().map_err(truncated(inst.opcode))?;
            inst.instruction_bytes.push(imm as u8);
            inst.operand_size = OperandSize::Operand8;
            inst.operand1_type = OperandType::Register8(REGISTER8_LUT[reg]);
            inst.operand2_type = OperandType::Immediate8s(imm);
        }
        Ok(())
    }

    /// MOV r/m,imm (0xC6 byte, 0xC7 word). A memory destination cannot imply
    /// the operand width, so those encodings carry the `byte`/`word` keyword.
    fn immediate_to_rm(&mut self, inst: &mut Instruction) -> Result<(), DecodeError> {
        let wide = inst.opcode == 0xC7;
        let modrm = ModRmByte16::read(&mut self.reader, &mut inst.instruction_bytes)
            .map_err(truncated(inst.opcode))?;

        inst.operand_size = if wide {
            OperandSize::Operand16
        }
        else {
            OperandSize::Operand8
        };

        inst.operand1_type = match modrm.effective_address() {
            Some(ea) => {
                inst.disambiguate = true;
                OperandType::AddressingMode16(ea, inst.operand_size)
            }
            None if wide => OperandType::Register16(modrm.op1_reg16()),
            None => OperandType::Register8(modrm.op1_reg8()),
        };

        inst.operand2_type = if wide {
            let imm = self.reader.read_i16().map_err(truncated(inst.opcode))?;
            inst.instruction_bytes.extend_from_slice(&imm.to_le_bytes());
            OperandType::Immediate16(imm)
        }
        else {
            let imm = self.reader.read_i8().map_err(truncated(inst.opcode))?;
            inst.instruction_bytes.push(imm as u8);
            OperandType::Immediate8s(imm)
        };
        Ok(())
    }
}

/// Convenience helper to decode a single instruction from a Read.
pub fn decode_one<R: Read>(reader: R) -> Result<Instruction, DecodeError> {
    let mut dec = Decoder::new(reader);
    dec.decode_next()
}

/// Disassemble an entire buffer into an assembly listing.
///
/// The listing starts with a `bits 16` directive and a blank line; every
/// instruction or diagnostic line after that is tab-indented. Unsupported
/// opcodes produce a comment diagnostic and decoding resumes at the next
/// byte; a truncated trailing instruction produces a diagnostic and stops
/// the scan, preserving output already emitted.
pub fn disassemble(bytes: &[u8]) -> String {
    let mut listing = String::from("bits 16\n\n");
    let mut decoder = Decoder::new(bytes);
    let opts = FormatOptions::default();

    loop {
        match decoder.decode_next() {
            Ok(inst) => {
                listing.push('\t');
                listing.push_str(&format_instruction(&inst, &opts));
                listing.push('\n');
            }
            Err(DecodeError::UnsupportedOpcode(opcode)) => {
                listing.push_str(&format!("\t; unsupported opcode 0x{opcode:02X}\n"));
            }
            Err(DecodeError::EndOfStream) => break,
            Err(DecodeError::Truncated { .. }) => {
                listing.push_str("\t; unexpected end of stream\n");
                break;
            }
            Err(DecodeError::Io(e)) => {
                listing.push_str(&format!("\t; read error: {e}\n"));
                break;
            }
        }
    }
    listing
}
