mod parser;
use parser::Parser;

mod token;
pub use token::{Token, TokenKind};

mod tokenizer;
pub use tokenizer::Tokenizer;

use crate::{stmt::Expr, Result};

/// Parses a filter string into an expression tree.
///
/// Empty and whitespace-only input is rejected. Callers that want to treat
/// an empty filter as "no filter" check before parsing; see
/// `GridifyQueryable::apply_filtering` in the `gridify` crate.
pub fn parse_filter(input: &str) -> Result<Expr> {
    let tokens = Tokenizer::new(input).tokenize()?;
    Parser::new(tokens, input.len()).parse()
}
