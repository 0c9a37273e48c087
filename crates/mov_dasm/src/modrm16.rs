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
use crate::byte_reader::ByteReader;
use crate::cpu_common::{
    Displacement, EaBase, EffectiveAddress, Register8, Register16, EA_BASE_LUT, REGISTER8_LUT,
    REGISTER16_LUT,
};
use std::io;

/// The addressing form selected by the combination of the Mod and R/M bitfields.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum AddressingMode {
    /// mod == 11: the R/M field selects a register, no memory access.
    Register,
    /// mod == 00, r/m == 110: 16-bit direct address, no base register.
    Direct,
    /// mod == 00: base expression, no displacement.
    Indirect(EaBase),
    /// mod == 01: base expression plus sign-extended 8-bit displacement.
    Disp8(EaBase),
    /// mod == 10: base expression plus 16-bit displacement.
    Disp16(EaBase),
}

#[derive(Copy, Clone, Debug)]
pub struct ModRmByte16 {
    byte: u8,
    b_mod: u8,
    b_reg: u8,
    b_rm: u8,
    mode: AddressingMode,
    disp: Displacement,
}

/// Every field of the modrm byte except the displacement value is a pure
/// function of the byte itself, so the whole decode is precalculated.
const MODRM16_TABLE: [ModRmByte16; 256] = {
    let mut table: [ModRmByte16; 256] = [ModRmByte16 {
        byte: 0,
        b_mod: 0,
        b_reg: 0,
        b_rm: 0,
        mode: AddressingMode::Indirect(EaBase::BxSi),
        disp: Displacement::NoDisp,
    }; 256];

    let mut byte: usize = 0;
    while byte < 256 {
        let b = byte as u8;
        let b_mod = b >> 6;
        let b_reg = (b >> 3) & 0x07;
        let b_rm = b & 0x07;

        let mode = match b_mod {
            0b00 => {
                if b_rm == 0b110 {
                    AddressingMode::Direct
                }
                else {
                    AddressingMode::Indirect(EA_BASE_LUT[b_rm as usize])
                }
            }
            0b01 => AddressingMode::Disp8(EA_BASE_LUT[b_rm as usize]),
            0b10 => AddressingMode::Disp16(EA_BASE_LUT[b_rm as usize]),
            _ => AddressingMode::Register,
        };

        table[byte] = ModRmByte16 {
            byte: b,
            b_mod,
            b_reg,
            b_rm,
            mode,
            disp: Displacement::NoDisp,
        };
        byte += 1;
    }

    table
};

impl ModRmByte16 {
    #[inline(always)]
    pub fn from_byte(byte: u8) -> ModRmByte16 {
        MODRM16_TABLE[byte as usize]
    }

    /// Read the modrm byte, look up the decoded fields, and consume any
    /// displacement bytes the addressing mode requires. Consumed bytes are
    /// appended to `instruction_bytes`.
    pub fn read(bytes: &mut impl ByteReader, instruction_bytes: &mut Vec<u8>) -> io::Result<ModRmByte16> {
        let raw_modrm_byte = bytes.read_u8()?;
        let mut modrm = ModRmByte16::from_byte(raw_modrm_byte);
        instruction_bytes.push(raw_modrm_byte);

        match modrm.mode {
            AddressingMode::Disp8(_) => {
                let disp = bytes.read_i8()?;
                instruction_bytes.push(disp as u8);
                modrm.disp = Displacement::Disp8(disp);
            }
            // The direct address is encoded exactly like a 16-bit displacement.
            AddressingMode::Direct | AddressingMode::Disp16(_) => {
                let disp = bytes.read_i16()?;
                instruction_bytes.extend_from_slice(&disp.to_le_bytes());
                modrm.disp = Displacement::Disp16(disp);
            }
            AddressingMode::Register | AddressingMode::Indirect(_) => {}
        }
        Ok(modrm)
    }

    /// Return the 'mod' field (top two bits) of the modrm byte.
    #[inline(always)]
    pub fn mod_value(&self) -> u8 {
        self.b_mod
    }

    #[inline(always)]
    pub fn reg_value(&self) -> u8 {
        self.b_reg
    }

    #[inline(always)]
    pub fn rm_value(&self) -> u8 {
        self.b_rm
    }

    // Interpret the 'R/M' field as an 8 bit register selector
    #[inline(always)]
    pub fn op1_reg8(&self) -> Register8 {
        REGISTER8_LUT[self.b_rm as usize]
    }

    // Interpret the 'R/M' field as a 16 bit register selector
    #[inline(always)]
    pub fn op1_reg16(&self) -> Register16 {
        REGISTER16_LUT[self.b_rm as usize]
    }

    // Interpret the 'REG' field as an 8 bit register selector
    #[inline(always)]
    pub fn op2_reg8(&self) -> Register8 {
        REGISTER8_LUT[self.b_reg as usize]
    }

    // Interpret the 'REG' field as a 16 bit register selector
    #[inline(always)]
    pub fn op2_reg16(&self) -> Register16 {
        REGISTER16_LUT[self.b_reg as usize]
    }

    // Return whether the modrm byte specifies a memory addressing mode
    #[inline(always)]
    pub fn is_addressing_mode(&self) -> bool {
        self.b_mod != 0b11
    }

    /// Resolve the memory-operand expression, or `None` for register-direct
    /// mode. A zero displacement collapses to the bare base expression.
    pub fn effective_address(&self) -> Option<EffectiveAddress> {
        let disp: i16 = self.disp.into();
        match self.mode {
            AddressingMode::Register => None,
            AddressingMode::Direct => Some(EffectiveAddress::Direct(disp)),
            AddressingMode::Indirect(base) => Some(EffectiveAddress::Base(base)),
            AddressingMode::Disp8(base) | AddressingMode::Disp16(base) => {
                if disp == 0 {
                    Some(EffectiveAddress::Base(base))
                }
                else {
                    Some(EffectiveAddress::BaseDisp(base, disp))
                }
            }
        }
    }

    #[inline(always)]
    pub fn displacement(&self) -> Displacement {
        self.disp
    }

    #[inline(always)]
    pub fn raw_byte(&self) -> u8 {
        self.byte
    }
}
