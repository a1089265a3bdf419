use super::{Token, TokenKind};
use crate::{
    stmt::{CompareOp, Expr},
    Error, Result,
};

use std::iter::Peekable;
use std::vec;

/// Recursive descent over the filter grammar:
///
/// ```text
/// expr    := or
/// or      := and ( "|" and )*
/// and     := atom ( "," atom )*
/// atom    := "(" expr ")" | IDENT OP VALUE
/// ```
///
/// `,` binds tighter than `|`; both levels associate to the left.
pub(crate) struct Parser {
    tokens: Peekable<vec::IntoIter<Token>>,

    /// Total input length, for end-of-filter error offsets.
    end: usize,
}

impl Parser {
    pub(crate) fn new(tokens: Vec<Token>, end: usize) -> Self {
        Self {
            tokens: tokens.into_iter().peekable(),
            end,
        }
    }

    pub(crate) fn parse(mut self) -> Result<Expr> {
        if self.tokens.peek().is_none() {
            return Err(Error::invalid_filter(0, "empty filter"));
        }

        let expr = self.or_expr()?;

        if let Some(token) = self.tokens.next() {
            let message = match token.kind {
                TokenKind::RParen => "unmatched `)`",
                _ => "unexpected trailing input",
            };
            return Err(Error::invalid_filter(token.offset, message));
        }

        Ok(expr)
    }

    fn or_expr(&mut self) -> Result<Expr> {
        let mut expr = self.and_expr()?;

        while self.eat(&TokenKind::Or) {
            expr = Expr::or(expr, self.and_expr()?);
        }

        Ok(expr)
    }

    fn and_expr(&mut self) -> Result<Expr> {
        let mut expr = self.atom()?;

        while self.eat(&TokenKind::And) {
            expr = Expr::and(expr, self.atom()?);
        }

        Ok(expr)
    }

    fn atom(&mut self) -> Result<Expr> {
        let Some(token) = self.tokens.next() else {
            return Err(Error::invalid_filter(self.end, "unexpected end of filter"));
        };

        match token.kind {
            TokenKind::LParen => {
                let expr = self.or_expr()?;

                if !self.eat(&TokenKind::RParen) {
                    return Err(Error::invalid_filter(token.offset, "unmatched `(`"));
                }

                Ok(expr)
            }
            TokenKind::Ident(field) => {
                let op = self.expect_op()?;
                let value = self.expect_value()?;
                Ok(Expr::compare(field, op, value))
            }
            _ => Err(Error::invalid_filter(
                token.offset,
                "expected a comparison or `(`",
            )),
        }
    }

    fn expect_op(&mut self) -> Result<CompareOp> {
        match self.tokens.next() {
            Some(Token {
                kind: TokenKind::Op(op),
                ..
            }) => Ok(op),
            Some(token) => Err(Error::invalid_filter(
                token.offset,
                "expected comparison operator",
            )),
            None => Err(Error::invalid_filter(
                self.end,
                "expected comparison operator",
            )),
        }
    }

    fn expect_value(&mut self) -> Result<String> {
        match self.tokens.next() {
            Some(Token {
                kind: TokenKind::Value(value),
                ..
            }) => Ok(value),
            Some(token) => Err(Error::invalid_filter(token.offset, "expected a value")),
            None => Err(Error::invalid_filter(self.end, "expected a value")),
        }
    }

    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.tokens.peek().map(|token| &token.kind) == Some(kind) {
            self.tokens.next();
            true
        } else {
            false
        }
    }
}
