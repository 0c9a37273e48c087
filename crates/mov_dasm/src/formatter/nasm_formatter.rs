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
use crate::cpu_common::{EaBase, EffectiveAddress, OperandSize, OperandType};
use crate::formatter::{Format, FormatOptions, FormatterOutput};
use crate::instruction::Instruction;

/// NASM-style formatter. Immediates and displacements render as signed
/// decimal; the accumulator moffs address renders unsigned.
#[derive(Copy, Clone, Debug, Default)]
pub struct NasmFormatter;

impl Format for NasmFormatter {
    fn format_mnemonic(&self, inst: &Instruction, opts: &FormatOptions, out: &mut dyn FormatterOutput) {
        let m = inst.mnemonic.to_str();
        if opts.uppercase_mnemonic {
            out.write_mnemonic(m);
        }
        else {
            out.write_mnemonic(&m.to_ascii_lowercase());
        }
    }

    fn format_operands(&self, inst: &Instruction, _opts: &FormatOptions, out: &mut dyn FormatterOutput) {
        self.format_operand(inst.operand1_type, out);

        if !matches!(inst.operand2_type, OperandType::NoOperand) {
            out.write_separator(", ");
            if inst.disambiguate {
                match inst.operand_size {
                    OperandSize::Operand8 => {
                        out.write_text("byte");
                        out.write_separator(" ");
                    }
                    OperandSize::Operand16 => {
                        out.write_text("word");
                        out.write_separator(" ");
                    }
                    OperandSize::NoOperand => {}
                }
            }
            self.format_operand(inst.operand2_type, out);
        }
    }
}

impl NasmFormatter {
    fn format_operand(&self, operand: OperandType, out: &mut dyn FormatterOutput) {
        match operand {
            OperandType::Register8(reg) => out.write_register(&reg.to_string()),
            OperandType::Register16(reg) => out.write_register(&reg.to_string()),
            OperandType::Immediate8s(imm) => out.write_immediate(&(imm as i16).to_string()),
            OperandType::Immediate16(imm) => out.write_immediate(&imm.to_string()),
            OperandType::AddressingMode16(ea, _) => self.format_effective_address(ea, out),
            OperandType::NoOperand => {}
        }
    }

    fn format_effective_address(&self, ea: EffectiveAddress, out: &mut dyn FormatterOutput) {
        out.write_separator("[");
        match ea {
            EffectiveAddress::Base(base) => Self::format_base(base, out),
            EffectiveAddress::BaseDisp(base, disp) => {
                Self::format_base(base, out);
                out.write_separator(" ");
                out.write_symbol(if disp < 0 { "-" } else { "+" });
                out.write_separator(" ");
                out.write_displacement(&disp.unsigned_abs().to_string());
            }
            EffectiveAddress::Direct(addr) => out.write_displacement(&addr.to_string()),
            EffectiveAddress::Absolute(addr) => out.write_displacement(&addr.to_string()),
        }
        out.write_separator("]");
    }

    fn format_base(base: EaBase, out: &mut dyn FormatterOutput) {
        let (first, second) = match base {
            EaBase::BxSi => ("bx", Some("si")),
            EaBase::BxDi => ("bx", Some("di")),
            EaBase::BpSi => ("bp", Some("si")),
            EaBase::BpDi => ("bp", Some("di")),
            EaBase::Si => ("si", None),
            EaBase::Di => ("di", None),
            EaBase::Bp => ("bp", None),
            EaBase::Bx => ("bx", None),
        };
        out.write_register(first);
        if let Some(index) = second {
            out.write_separator(" ");
            out.write_symbol("+");
            out.write_separator(" ");
            out.write_register(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::decode_one;
    use crate::formatter::format_instruction;
    use std::io::Cursor;

    fn fmt(bytes: &[u8]) -> String {
        let inst = decode_one(Cursor::new(bytes)).expect("decode ok");
        format_instruction(&inst, &FormatOptions::default())
    }

    #[test]
    fn memory_source_with_positive_displacement() {
        // 0x8A d=1 w=0, modrm 01 100 000: mov ah, [bx + si + 4]
        assert_eq!(fmt(&[0x8A, 0b01_100_000, 0x04]), "mov ah, [bx + si + 4]");
    }

    #[test]
    fn memory_destination_with_negative_displacement() {
        // 0x88 d=0 w=0, modrm 01 101 110: mov [bp - 7], ch
        assert_eq!(fmt(&[0x88, 0b01_101_110, 0xF9]), "mov [bp - 7], ch");
    }

    #[test]
    fn direct_address_renders_decimal() {
        assert_eq!(fmt(&[0x8B, 0b00_000_110, 0x34, 0x12]), "mov ax, [4660]");
    }

    #[test]
    fn accumulator_address_is_unsigned() {
        assert_eq!(fmt(&[0xA1, 0xFE, 0xFF]), "mov ax, [65534]");
        assert_eq!(fmt(&[0xA3, 0x10, 0x00]), "mov [16], ax");
    }

    #[test]
    fn immediate_to_memory_carries_size_keyword() {
        // 0xC6, modrm 00 000 011: mov [bp + di], byte 7
        assert_eq!(fmt(&[0xC6, 0b00_000_011, 0x07]), "mov [bp + di], byte 7");
        // 0xC7, modrm 00 000 001: mov [bx + di], word 347
        assert_eq!(fmt(&[0xC7, 0b00_000_001, 0x5B, 0x01]), "mov [bx + di], word 347");
    }

    #[test]
    fn immediate_to_register_omits_size_keyword() {
        // 0xC6 with mod=11 targets a register, so no keyword is needed.
        assert_eq!(fmt(&[0xC6, 0b11_000_001, 0x05]), "mov cl, 5");
    }

    #[test]
    fn signed_immediates() {
        assert_eq!(fmt(&[0xB1, 0xF4]), "mov cl, -12");
        assert_eq!(fmt(&[0xB9, 0xF4, 0xFF]), "mov cx, -12");
        assert_eq!(fmt(&[0xB9, 0x0C, 0x00]), "mov cx, 12");
    }
}
