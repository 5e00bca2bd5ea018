//! Recursive-descent parser for the source dialect

use crate::ast::source::{CallExpression, Node, Program};
use crate::ast::NumberLiteral;
use crate::error::ParseError;
use crate::lexer::Token;
use crate::parser::cursor::TokenCursor;

/// Call nesting accepted by [parse]. Every stage recurses once per level.
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Parse a token sequence into a source [Program].
///
/// Takes ownership of the tokens; the program body holds one node per
/// top-level expression.
pub fn parse(tokens: Vec<Token>) -> Result<Program, ParseError> {
    parse_with_max_depth(tokens, DEFAULT_MAX_DEPTH)
}

/// Like [parse], failing with [ParseError::NestingTooDeep] once calls nest
/// deeper than `max_depth`.
pub fn parse_with_max_depth(
    tokens: Vec<Token>,
    max_depth: usize,
) -> Result<Program, ParseError> {
    let mut parser = Parser::with_max_depth(tokens, max_depth);
    let program = parser.parse_program()?;
    tracing::debug!(
        tokens = parser.consumed(),
        expressions = program.body.len(),
        "parsed program"
    );
    Ok(program)
}

pub struct Parser {
    cursor: TokenCursor,
    depth: usize,
    max_depth: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self::with_max_depth(tokens, DEFAULT_MAX_DEPTH)
    }

    pub fn with_max_depth(tokens: Vec<Token>, max_depth: usize) -> Self {
        Parser {
            cursor: TokenCursor::new(tokens),
            depth: 0,
            max_depth,
        }
    }

    /// Tokens consumed so far
    pub fn consumed(&self) -> usize {
        self.cursor.consumed()
    }

    /// Read expressions until the tokens run out
    pub fn parse_program(&mut self) -> Result<Program, ParseError> {
        let mut body = Vec::new();
        while !self.cursor.is_exhausted() {
            body.push(self.read_expression()?);
        }
        Ok(Program { body })
    }

    /// Read exactly one expression starting at the current token
    pub fn read_expression(&mut self) -> Result<Node, ParseError> {
        match self.cursor.advance() {
            None => Err(ParseError::UnexpectedEndOfInput),
            Some(Token::Number(value)) => Ok(Node::NumberLiteral(NumberLiteral { value })),
            Some(Token::Paren('(')) => self.read_call().map(Node::CallExpression),
            Some(found) => Err(ParseError::UnexpectedToken { found }),
        }
    }

    // Called with the opening paren already consumed
    fn read_call(&mut self) -> Result<CallExpression, ParseError> {
        if self.depth == self.max_depth {
            return Err(ParseError::NestingTooDeep {
                limit: self.max_depth,
            });
        }
        self.depth += 1;
        let call = self.read_call_body();
        self.depth -= 1;
        call
    }

    fn read_call_body(&mut self) -> Result<CallExpression, ParseError> {
        let name = match self.cursor.advance() {
            Some(Token::Name(name)) => name,
            Some(found) => return Err(ParseError::MalformedCallHead { found }),
            None => return Err(ParseError::UnexpectedEndOfInput),
        };

        let mut params = Vec::new();
        loop {
            match self.cursor.peek().map(Token::is_close_paren) {
                None => return Err(ParseError::UnterminatedCall { name }),
                Some(true) => {
                    self.cursor.advance();
                    tracing::trace!(%name, params = params.len(), "closed call");
                    return Ok(CallExpression { name, params });
                }
                Some(false) => params.push(self.read_expression()?),
            }
        }
    }
}
