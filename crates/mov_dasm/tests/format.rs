use std::io::Cursor;

use mov_dasm::prelude::*;

#[test]
pub fn format_mnemonic() {
    let bytes = vec![0x89, 0b11_011_001];

    let mut dec = Decoder::new(bytes.as_slice());
    let ins = dec.decode_next().expect("decode ok");
    assert_eq!(ins.mnemonic.to_string(), "MOV");

    // make mnemonic-only formatter
    let options = FormatOptions {
        uppercase_mnemonic: true,
        mnemonic_only: true,
    };

    let mut output_string = String::new();
    NasmFormatter.format_instruction(&ins, &options, &mut output_string);

    assert_eq!(output_string, "MOV");
}

#[test]
fn formatter_is_reachable_from_the_crate_root() {
    let bytes = [0x89u8, 0b11_011_001];
    let inst = decode_one(Cursor::new(&bytes[..])).expect("decode ok");

    let mut s = String::new();
    mov_dasm::NasmFormatter.format_instruction(&inst, &mov_dasm::FormatOptions::default(), &mut s);
    assert_eq!(s, "mov cx, bx");

    let mut s2 = String::new();
    mov_dasm::formatter::NasmFormatter.format_instruction(
        &inst,
        &FormatOptions::default(),
        &mut s2,
    );
    assert_eq!(s2, s);
}

#[test]
fn token_stream_flat_render_matches_plain_text() {
    let bytes = [0x8A, 0b01_100_000, 0x04]; // mov ah, [bx + si + 4]
    let inst = decode_one(Cursor::new(&bytes[..])).expect("decode ok");
    let opts = FormatOptions::default();

    let mut stream = TokenStream::new();
    NasmFormatter.format_instruction(&inst, &opts, &mut stream);

    assert_eq!(stream.to_string_flat(), format_instruction(&inst, &opts));
    assert_eq!(stream.to_string_flat(), "mov ah, [bx + si + 4]");
}

#[test]
fn token_stream_classifies_operand_parts() {
    let bytes = [0x8A, 0b01_100_000, 0xFC]; // mov ah, [bx + si - 4]
    let inst = decode_one(Cursor::new(&bytes[..])).expect("decode ok");

    let mut stream = TokenStream::new();
    NasmFormatter.format_instruction(&inst, &FormatOptions::default(), &mut stream);

    let registers: Vec<&str> = stream
        .iter()
        .filter_map(|t| match t {
            TokenItem::Semantic(SemanticToken::Register(r)) => Some(r.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(registers, ["ah", "bx", "si"]);

    assert!(stream
        .iter()
        .any(|t| matches!(t, TokenItem::Decorator(DecoratorToken::OpenBracket))));
    assert!(stream
        .iter()
        .any(|t| matches!(t, TokenItem::Decorator(DecoratorToken::Minus))));
    assert!(stream
        .iter()
        .any(|t| matches!(t, TokenItem::Semantic(SemanticToken::Displacement(d)) if d == "4")));
}

#[test]
fn size_keyword_is_plain_text_between_comma_and_immediate() {
    let bytes = [0xC6, 0b00_000_011, 0x07]; // mov [bp + di], byte 7
    let inst = decode_one(Cursor::new(&bytes[..])).expect("decode ok");

    let mut stream = TokenStream::new();
    NasmFormatter.format_instruction(&inst, &FormatOptions::default(), &mut stream);

    assert_eq!(stream.to_string_flat(), "mov [bp + di], byte 7");
    assert!(stream
        .iter()
        .any(|t| matches!(t, TokenItem::Decorator(DecoratorToken::Text(s)) if s == "byte")));
    assert!(stream
        .iter()
        .any(|t| matches!(t, TokenItem::Semantic(SemanticToken::Immediate(i)) if i == "7")));
}
