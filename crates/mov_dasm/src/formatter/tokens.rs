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
use crate::formatter::FormatterOutput;
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Tokens carrying assembly meaning (mnemonics, registers, values)
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SemanticToken {
    Mnemonic(String),
    Register(String),
    Immediate(String),
    Displacement(String),
}

impl Display for SemanticToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            SemanticToken::Mnemonic(s)
            | SemanticToken::Register(s)
            | SemanticToken::Immediate(s)
            | SemanticToken::Displacement(s) => f.write_str(s),
        }
    }
}

/// Tokens describing presentation/decoration (punctuation, whitespace, raw text)
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DecoratorToken {
    OpenBracket,
    CloseBracket,
    Plus,
    Minus,
    Comma,
    Whitespace(String),
    Text(String),
}

impl Display for DecoratorToken {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DecoratorToken::OpenBracket => f.write_str("["),
            DecoratorToken::CloseBracket => f.write_str("]"),
            DecoratorToken::Plus => f.write_str("+"),
            DecoratorToken::Minus => f.write_str("-"),
            DecoratorToken::Comma => f.write_str(","),
            DecoratorToken::Whitespace(s) => f.write_str(s),
            DecoratorToken::Text(s) => f.write_str(s),
        }
    }
}

/// Unified token stream item
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TokenItem {
    Semantic(SemanticToken),
    Decorator(DecoratorToken),
}

impl Display for TokenItem {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            TokenItem::Semantic(t) => Display::fmt(t, f),
            TokenItem::Decorator(t) => Display::fmt(t, f),
        }
    }
}

/// A simple collector of tokens that can also be rendered to a flat string
#[derive(Default, Debug)]
pub struct TokenStream {
    pub tokens: Vec<TokenItem>,
}

impl TokenStream {
    pub fn new() -> Self {
        Self { tokens: Vec::new() }
    }

    /// Iterate over collected tokens
    pub fn iter(&self) -> impl Iterator<Item = &TokenItem> {
        self.tokens.iter()
    }

    /// Render collected tokens into a single String
    pub fn to_string_flat(&self) -> String {
        let mut s = String::new();
        for t in &self.tokens {
            s.push_str(&t.to_string());
        }
        s
    }
}

impl FormatterOutput for TokenStream {
    fn write_text(&mut self, s: &str) {
        self.tokens.push(TokenItem::Decorator(DecoratorToken::Text(s.to_string())));
    }

    fn write_mnemonic(&mut self, s: &str) {
        self.tokens.push(TokenItem::Semantic(SemanticToken::Mnemonic(s.to_string())));
    }

    fn write_register(&mut self, s: &str) {
        self.tokens.push(TokenItem::Semantic(SemanticToken::Register(s.to_string())));
    }

    fn write_immediate(&mut self, s: &str) {
        self.tokens.push(TokenItem::Semantic(SemanticToken::Immediate(s.to_string())));
    }

    fn write_displacement(&mut self, s: &str) {
        self.tokens.push(TokenItem::Semantic(SemanticToken::Displacement(s.to_string())));
    }

    fn write_symbol(&mut self, s: &str) {
        let token = match s {
            "+" => DecoratorToken::Plus,
            "-" => DecoratorToken::Minus,
            other => DecoratorToken::Text(other.to_string()),
        };
        self.tokens.push(TokenItem::Decorator(token));
    }

    fn write_separator(&mut self, s: &str) {
        match s {
            "[" => self.tokens.push(TokenItem::Decorator(DecoratorToken::OpenBracket)),
            "]" => self.tokens.push(TokenItem::Decorator(DecoratorToken::CloseBracket)),
            ", " => {
                self.tokens.push(TokenItem::Decorator(DecoratorToken::Comma));
                self.tokens
                    .push(TokenItem::Decorator(DecoratorToken::Whitespace(" ".into())));
            }
            " " => self
                .tokens
                .push(TokenItem::Decorator(DecoratorToken::Whitespace(" ".into()))),
            other => self
                .tokens
                .push(TokenItem::Decorator(DecoratorToken::Text(other.to_string()))),
        }
    }
}
