use super::{Token, TokenKind};
use crate::{stmt::CompareOp, Error, Result};

/// Characters that cannot appear in a field name. Everything else,
/// whitespace included, belongs to the ident.
const IDENT_TERMINATORS: &[char] = &['=', '!', '>', '<', '*', '^', '$', '(', ')', '|', ','];

/// Scans a filter string into tokens.
///
/// The scanner is modal: a field name is followed by exactly one
/// two-character operator, and the operator by a greedy value run. There is
/// no quoting; a value ends at the first `,`, `|`, or `)`.
pub struct Tokenizer<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Tokenizer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    pub fn tokenize(mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();

        while let Some(c) = self.peek() {
            let offset = self.pos;

            match c {
                '(' => {
                    self.pos += 1;
                    tokens.push(Token {
                        kind: TokenKind::LParen,
                        offset,
                    });
                }
                ')' => {
                    self.pos += 1;
                    tokens.push(Token {
                        kind: TokenKind::RParen,
                        offset,
                    });
                }
                ',' => {
                    self.pos += 1;
                    tokens.push(Token {
                        kind: TokenKind::And,
                        offset,
                    });
                }
                '|' => {
                    self.pos += 1;
                    tokens.push(Token {
                        kind: TokenKind::Or,
                        offset,
                    });
                }
                _ => {
                    tokens.push(self.scan_ident()?);
                    tokens.push(self.scan_op()?);
                    tokens.push(self.scan_value());
                }
            }
        }

        Ok(tokens)
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn scan_ident(&mut self) -> Result<Token> {
        let start = self.pos;

        while let Some(c) = self.peek() {
            if IDENT_TERMINATORS.contains(&c) {
                break;
            }
            self.pos += c.len_utf8();
        }

        if self.pos == start {
            return Err(Error::invalid_filter(start, "expected field name"));
        }

        Ok(Token {
            kind: TokenKind::Ident(self.src[start..self.pos].to_owned()),
            offset: start,
        })
    }

    /// Operator recognition is positional: whatever two characters follow
    /// the field name must spell an operator.
    fn scan_op(&mut self) -> Result<Token> {
        let start = self.pos;
        let rest = &self.src[start..];

        let mut chars = rest.char_indices();
        let (Some(_), Some((second_at, second))) = (chars.next(), chars.next()) else {
            return Err(Error::invalid_filter(start, "expected comparison operator"));
        };

        let end = second_at + second.len_utf8();
        let Some(op) = CompareOp::from_symbol(&rest[..end]) else {
            return Err(Error::invalid_filter(start, "expected comparison operator"));
        };

        self.pos += end;

        Ok(Token {
            kind: TokenKind::Op(op),
            offset: start,
        })
    }

    fn scan_value(&mut self) -> Token {
        let start = self.pos;

        while let Some(c) = self.peek() {
            if matches!(c, ',' | '|' | ')') {
                break;
            }
            self.pos += c.len_utf8();
        }

        Token {
            kind: TokenKind::Value(self.src[start..self.pos].to_owned()),
            offset: start,
        }
    }
}
