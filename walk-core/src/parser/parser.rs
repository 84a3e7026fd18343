use crate::{lexer::prelude::{tokenize, Spanned, Token, TokenKind}, utils::prelude::SrcSpan};
use super::error::{ParseError, ParseErrorType};
use super::ast::{Expression, Program};

pub trait Parse<T: Iterator<Item = Spanned>>
    where Self: Sized,
{
    fn parse(
        parser: &mut Parser<T>,
        precedence: Option<Precedence>
    ) -> Result<Self, ParseError>;
}

pub trait InfixParse<T: Iterator<Item = Spanned>>
    where Self: Sized,
{
    fn parse(
        parser: &mut Parser<T>,
        left: Expression,
        precedence: Option<Precedence>
    ) -> Result<Self, ParseError>;
}

/// Recursive descent parser with a single token of lookahead.
///
/// `current_token` is the token under inspection. Once the token source is
/// exhausted it stays `None`, which every rule treats as end of file.
pub struct Parser<T: Iterator<Item = Spanned>> {
    pub current_token: Option<Spanned>,

    tokens: T,
}

impl<T: Iterator<Item = Spanned>> Parser<T> {
    pub fn new(input: T) -> Self {
        let mut parser = Self {
            current_token: None,

            tokens: input,
        };

        parser.step();

        parser
    }

    pub fn step(&mut self) {
        let _ = self.next_token();
    }

    pub fn next_token(&mut self) -> Option<Spanned> {
        std::mem::replace(&mut self.current_token, self.tokens.next())
    }

    pub fn current_kind(&self) -> TokenKind {
        match &self.current_token {
            Some((_, token, _)) => token.kind,
            None => TokenKind::Eof,
        }
    }

    pub fn current_span(&self) -> SrcSpan {
        match &self.current_token {
            Some((start, _, end)) => SrcSpan { start: *start, end: *end },
            None => SrcSpan::default(),
        }
    }

    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    pub fn is_at_end(&self) -> bool {
        self.check(TokenKind::Eof)
    }

    /// Consumes the current token if it is of `kind`.
    pub fn eat(&mut self, kind: TokenKind) -> Option<Spanned> {
        if self.check(kind) {
            self.next_token()
        } else {
            None
        }
    }

    pub fn skip_newlines(&mut self) {
        while self.eat(TokenKind::Newline).is_some() {}
    }

    pub fn current_precedence(&self) -> Precedence {
        Precedence::from(self.current_kind())
    }

    pub fn expect_one(&mut self, kind: TokenKind, error: ParseErrorType) -> Result<Spanned, ParseError> {
        match self.eat(kind) {
            Some(spanned) => Ok(spanned),
            None => Err(self.unexpected(error)),
        }
    }

    pub fn expect_ident(&mut self, error: ParseErrorType) -> Result<(u32, String, u32), ParseError> {
        let (start, Token { lexeme, .. }, end) = self.expect_one(TokenKind::Ident, error)?;

        Ok((start, lexeme, end))
    }

    /// Error for the current token. A lexer `INVALID` token always reports
    /// its own message instead of `error`.
    pub fn unexpected(&self, error: ParseErrorType) -> ParseError {
        let error = match &self.current_token {
            Some((_, token, _)) if token.is(TokenKind::Invalid) => ParseErrorType::InvalidToken {
                message: token.lexeme.clone()
            },
            _ => error,
        };

        ParseError { error, span: self.current_span() }
    }

    pub fn parse(&mut self) -> Result<Program, ParseError> {
        use super::ast::Statement;

        let mut statements = vec![];

        loop {
            self.skip_newlines();

            if self.is_at_end() {
                break;
            }

            if self.check(TokenKind::RBrace) {
                return parse_error(ParseErrorType::UnexpectedRBrace, self.current_span());
            }

            statements.push(Statement::parse(self, None)?);

            self.expect_one(TokenKind::Newline, ParseErrorType::ExpectedNewline)?;
        }

        Ok(Program { statements })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum Precedence {
    Lowest,
    Sum,
    Product,
}

impl From<TokenKind> for Precedence {
    fn from(value: TokenKind) -> Self {
        match value {
            TokenKind::Plus | TokenKind::Minus => Self::Sum,
            TokenKind::Star | TokenKind::Slash => Self::Product,
            _ => Self::Lowest,
        }
    }
}

pub fn parse_program(tokens: impl IntoIterator<Item = Spanned>) -> Result<Program, ParseError> {
    let mut parser = Parser::new(tokens.into_iter());

    parser.parse()
}

pub fn parse_source(src: &str) -> Result<Program, ParseError> {
    parse_program(tokenize(src))
}

pub fn parse_error<T>(error: ParseErrorType, span: SrcSpan) -> Result<T, ParseError> {
    Err(ParseError { error, span })
}
