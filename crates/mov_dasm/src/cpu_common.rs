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
use std::fmt::{Display, Formatter};

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Register8 {
    AL,
    CL,
    DL,
    BL,
    AH,
    CH,
    DH,
    BH,
}

impl Display for Register8 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Register8::AL => write!(f, "al"),
            Register8::CL => write!(f, "cl"),
            Register8::DL => write!(f, "dl"),
            Register8::BL => write!(f, "bl"),
            Register8::AH => write!(f, "ah"),
            Register8::CH => write!(f, "ch"),
            Register8::DH => write!(f, "dh"),
            Register8::BH => write!(f, "bh"),
        }
    }
}

pub const REGISTER8_LUT: [Register8; 8] = [
    Register8::AL,
    Register8::CL,
    Register8::DL,
    Register8::BL,
    Register8::AH,
    Register8::CH,
    Register8::DH,
    Register8::BH,
];

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Register16 {
    AX,
    CX,
    DX,
    BX,
    SP,
    BP,
    SI,
    DI,
}

impl Display for Register16 {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Register16::AX => write!(f, "ax"),
            Register16::CX => write!(f, "cx"),
            Register16::DX => write!(f, "dx"),
            Register16::BX => write!(f, "bx"),
            Register16::SP => write!(f, "sp"),
            Register16::BP => write!(f, "bp"),
            Register16::SI => write!(f, "si"),
            Register16::DI => write!(f, "di"),
        }
    }
}

pub const REGISTER16_LUT: [Register16; 8] = [
    Register16::AX,
    Register16::CX,
    Register16::DX,
    Register16::BX,
    Register16::SP,
    Register16::BP,
    Register16::SI,
    Register16::DI,
];

/// Base expression of a 16-bit effective address, selected by the R/M field.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum EaBase {
    BxSi,
    BxDi,
    BpSi,
    BpDi,
    Si,
    Di,
    Bp,
    Bx,
}

pub const EA_BASE_LUT: [EaBase; 8] = [
    EaBase::BxSi,
    EaBase::BxDi,
    EaBase::BpSi,
    EaBase::BpDi,
    EaBase::Si,
    EaBase::Di,
    EaBase::Bp,
    EaBase::Bx,
];

impl Display for EaBase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            EaBase::BxSi => write!(f, "bx + si"),
            EaBase::BxDi => write!(f, "bx + di"),
            EaBase::BpSi => write!(f, "bp + si"),
            EaBase::BpDi => write!(f, "bp + di"),
            EaBase::Si => write!(f, "si"),
            EaBase::Di => write!(f, "di"),
            EaBase::Bp => write!(f, "bp"),
            EaBase::Bx => write!(f, "bx"),
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum OperandSize {
    #[default]
    NoOperand,
    Operand8,
    Operand16,
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Displacement {
    NoDisp,
    Disp8(i8),
    Disp16(i16),
}

impl Displacement {
    pub fn is_some(&self) -> bool {
        !matches!(self, Displacement::NoDisp)
    }

    pub fn len(&self) -> usize {
        match self {
            Displacement::NoDisp => 0,
            Displacement::Disp8(_) => 1,
            Displacement::Disp16(_) => 2,
        }
    }
}

/// Sign-extend a displacement to 16 bits.
impl From<Displacement> for i16 {
    fn from(value: Displacement) -> Self {
        match value {
            Displacement::NoDisp => 0,
            Displacement::Disp8(v) => v as i16,
            Displacement::Disp16(v) => v,
        }
    }
}

/// A resolved memory-operand expression. `Direct` is the mod=00, r/m=110
/// special case (signed 16-bit address, no base register); `Absolute` is the
/// unsigned address of the accumulator moffs forms.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum EffectiveAddress {
    Base(EaBase),
    BaseDisp(EaBase, i16),
    Direct(i16),
    Absolute(u16),
}

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub enum OperandType {
    #[default]
    NoOperand,
    Register8(Register8),
    Register16(Register16),
    /// Sign-extended byte immediate.
    Immediate8s(i8),
    Immediate16(i16),
    AddressingMode16(EffectiveAddress, OperandSize),
}

impl OperandType {
    #[inline(always)]
    pub fn is_address(&self) -> bool {
        matches!(self, OperandType::AddressingMode16(_, _))
    }

    #[inline(always)]
    pub fn is_register(&self) -> bool {
        matches!(self, OperandType::Register8(_) | OperandType::Register16(_))
    }

    #[inline(always)]
    pub fn is_immediate(&self) -> bool {
        matches!(self, OperandType::Immediate8s(_) | OperandType::Immediate16(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_tables_follow_index_convention() {
        let reg16: Vec<String> = REGISTER16_LUT.iter().map(|r| r.to_string()).collect();
        assert_eq!(reg16, ["ax", "cx", "dx", "bx", "sp", "bp", "si", "di"]);

        let reg8: Vec<String> = REGISTER8_LUT.iter().map(|r| r.to_string()).collect();
        assert_eq!(reg8, ["al", "cl", "dl", "bl", "ah", "ch", "dh", "bh"]);
    }

    #[test]
    fn ea_base_table_follows_rm_convention() {
        let ea: Vec<String> = EA_BASE_LUT.iter().map(|e| e.to_string()).collect();
        assert_eq!(
            ea,
            ["bx + si", "bx + di", "bp + si", "bp + di", "si", "di", "bp", "bx"]
        );
    }

    #[test]
    fn displacement_sign_extends() {
        assert_eq!(i16::from(Displacement::Disp8(-6)), -6);
        assert_eq!(i16::from(Displacement::Disp16(-300)), -300);
        assert_eq!(i16::from(Displacement::NoDisp), 0);
        assert_eq!(Displacement::Disp8(1).len(), 1);
        assert_eq!(Displacement::Disp16(1).len(), 2);
    }
}
