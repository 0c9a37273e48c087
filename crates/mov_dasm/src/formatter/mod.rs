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

pub mod nasm_formatter;
pub mod tokens;

/// Re-export the formatter implementation and token types at the formatter
/// module root for convenient access
pub use crate::formatter::nasm_formatter::NasmFormatter;
pub use tokens::{DecoratorToken, SemanticToken, TokenItem, TokenStream};

use crate::instruction::Instruction;

/// Options controlling disassembly formatting
#[derive(Copy, Clone, Debug, Default)]
pub struct FormatOptions {
    /// If true, render mnemonic in uppercase; otherwise lowercase.
    pub uppercase_mnemonic: bool,
    /// If true, only output the mnemonic, no operands
    pub mnemonic_only: bool,
}

/// Output sink for formatting tokens. Implement this to capture rich tokens
/// (e.g., for colorizing) or to accumulate plain text.
pub trait FormatterOutput {
    /// Fallback text writer for any token type
    fn write_text(&mut self, s: &str);

    /// Specific token helpers (default to write_text)
    fn write_mnemonic(&mut self, s: &str) {
        self.write_text(s)
    }

    fn write_register(&mut self, s: &str) {
        self.write_text(s)
    }

    fn write_immediate(&mut self, s: &str) {
        self.write_text(s)
    }

    fn write_displacement(&mut self, s: &str) {
        self.write_text(s)
    }

    fn write_separator(&mut self, s: &str) {
        self.write_text(s)
    }

    fn write_symbol(&mut self, s: &str) {
        self.write_text(s)
    }
}

/// Provide a basic String sink implementation
impl FormatterOutput for String {
    fn write_text(&mut self, s: &str) {
        self.push_str(s);
    }
}

/// Trait for disassembly formatting styles
pub trait Format {
    /// Emit the mnemonic token without leading/trailing spaces.
    fn format_mnemonic(&self, inst: &Instruction, opts: &FormatOptions, out: &mut dyn FormatterOutput);
    /// Emit operands, destination first.
    fn format_operands(&self, inst: &Instruction, opts: &FormatOptions, out: &mut dyn FormatterOutput);

    /// Compose the full instruction from parts (default behavior)
    fn format_instruction(&self, inst: &Instruction, opts: &FormatOptions, out: &mut dyn FormatterOutput) {
        self.format_mnemonic(inst, opts, out);
        if opts.mnemonic_only {
            return;
        }
        if inst.has_operands() {
            out.write_separator(" ");
            self.format_operands(inst, opts, out);
        }
    }
}

/// Convenience helper using NASM-style by default; returns a flat String
pub fn format_instruction(inst: &Instruction, opts: &FormatOptions) -> String {
    let mut s = String::new();
    NasmFormatter.format_instruction(inst, opts, &mut s);
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::decode_one;
    use std::io::Cursor;

    #[test]
    fn format_mov_lowercase() {
        let bytes = [0x89u8, 0b11_011_001];
        let inst = decode_one(Cursor::new(&bytes[..])).expect("decode ok");
        let mut s = String::new();
        NasmFormatter.format_instruction(&inst, &FormatOptions::default(), &mut s);
        assert_eq!(s, "mov cx, bx");
    }

    #[test]
    fn format_mov_uppercase_mnemonic_only() {
        let bytes = [0x89u8, 0b11_011_001];
        let inst = decode_one(Cursor::new(&bytes[..])).expect("decode ok");
        let mut s = String::new();
        NasmFormatter.format_instruction(
            &inst,
            &FormatOptions {
                uppercase_mnemonic: true,
                mnemonic_only: true,
            },
            &mut s,
        );
        assert_eq!(s, "MOV");
    }
}
