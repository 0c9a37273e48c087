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
use std::io::Cursor;

use mov_dasm::prelude::*;
use pretty_assertions::assert_eq;

fn listing(lines: &[&str]) -> String {
    let mut all = vec!["bits 16", ""];
    all.extend_from_slice(lines);
    all.push("");
    all.join("\n")
}

#[test]
fn register_to_register_pairs_decode_in_two_bytes() {
    for opcode in 0x88u8..=0x8B {
        for modrm in 0xC0u8..=0xFF {
            let bytes = [opcode, modrm];
            let inst = decode_one(Cursor::new(&bytes[..])).expect("decode ok");
            assert_eq!(inst.instruction_bytes, bytes);
            assert!(inst.operand1_type.is_register());
            assert!(inst.operand2_type.is_register());

            let line = format_instruction(&inst, &FormatOptions::default());
            assert!(line.starts_with("mov "), "unexpected line: {line}");
        }
    }
}

#[test]
fn immediate_to_register_consumes_per_width_flag() {
    for opcode in 0xB0u8..=0xBF {
        let wide = opcode & 0x08 != 0;
        let bytes: Vec<u8> = if wide {
            vec![opcode, 0x80, 0xFF]
        }
        else {
            vec![opcode, 0x80]
        };
        let inst = decode_one(Cursor::new(&bytes[..])).expect("decode ok");
        assert_eq!(inst.len(), if wide { 3 } else { 2 });

        // The byte form sign-extends; both forms here carry the value -128.
        match inst.operand2_type {
            OperandType::Immediate8s(v) => assert_eq!(v as i16, -128),
            OperandType::Immediate16(v) => assert_eq!(v, -128),
            other => panic!("expected immediate operand, got {other:?}"),
        }
        let line = format_instruction(&inst, &FormatOptions::default());
        assert!(line.ends_with(", -128"), "unexpected line: {line}");
    }
}

#[test]
fn register_order_follows_direction_flag() {
    // 0x89 (d=0): the REG field (ax) is the source.
    assert_eq!(disassemble(&[0x89, 0b11_000_001]), listing(&["\tmov cx, ax"]));
    // 0x8B (d=1): the REG field (ax) is the destination.
    assert_eq!(disassemble(&[0x8B, 0b11_000_001]), listing(&["\tmov ax, cx"]));
}

#[test]
fn direct_address_special_case() {
    // mod=00 rm=110 is a bare 16-bit address, not [bp].
    assert_eq!(
        disassemble(&[0x8B, 0b00_000_110, 0x34, 0x12]),
        listing(&["\tmov ax, [4660]"])
    );
}

#[test]
fn accumulator_forms() {
    assert_eq!(disassemble(&[0xA1, 0x34, 0x12]), listing(&["\tmov ax, [4660]"]));
    assert_eq!(disassemble(&[0xA3, 0x34, 0x12]), listing(&["\tmov [4660], ax"]));
}

#[test]
fn truncated_modrm_instruction_stops_the_scan() {
    assert_eq!(disassemble(&[0x89]), listing(&["\t; unexpected end of stream"]));
}

#[test]
fn truncated_immediate_stops_the_scan() {
    // modrm and displacement decode fine; the word immediate is one byte short.
    assert_eq!(
        disassemble(&[0xC7, 0b00_000_001, 0x5B]),
        listing(&["\t; unexpected end of stream"])
    );
}

#[test]
fn unsupported_opcode_skips_one_byte_and_resumes() {
    assert_eq!(
        disassemble(&[0xFF, 0x88, 0b11_000_011]),
        listing(&["\t; unsupported opcode 0xFF", "\tmov bl, al"])
    );
}

#[test]
fn mixed_listing() {
    let bytes = [
        0x89, 0b11_011_001, // mov cx, bx
        0xB1, 0x0C, // mov cl, 12
        0xB9, 0xF4, 0xFF, // mov cx, -12
        0x8A, 0b01_100_000, 0x04, // mov ah, [bx + si + 4]
        0x88, 0b10_101_110, 0x00, 0xFF, // mov [bp - 256], ch
        0xC6, 0b00_000_011, 0x07, // mov [bp + di], byte 7
        0xC7, 0b00_000_110, 0xE8, 0x03, 0x5B, 0x01, // mov [1000], word 347
        0xA1, 0xFB, 0x09, // mov ax, [2555]
        0xA3, 0x0F, 0x00, // mov [15], ax
    ];
    assert_eq!(
        disassemble(&bytes),
        listing(&[
            "\tmov cx, bx",
            "\tmov cl, 12",
            "\tmov cx, -12",
            "\tmov ah, [bx + si + 4]",
            "\tmov [bp - 256], ch",
            "\tmov [bp + di], byte 7",
            "\tmov [1000], word 347",
            "\tmov ax, [2555]",
            "\tmov [15], ax",
        ])
    );
}

#[test]
fn decoding_is_deterministic() {
    let bytes = [0x89, 0xD9, 0xB1, 0x0C, 0xA1, 0x10, 0x00, 0xFE];
    assert_eq!(disassemble(&bytes), disassemble(&bytes));
}
