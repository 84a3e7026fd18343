use crate::{
    lexer::prelude::{Spanned, TokenKind},
    utils::prelude::SrcSpan,
};

use super::{
    ast::{Assign, Binary, BinaryOperator, Block, Expression, Identifier, Print, Statement, VarDecl},
    error::{ParseError, ParseErrorType},
    parser::{parse_error, InfixParse, Parse, Parser, Precedence},
};

impl<T: Iterator<Item = Spanned>> Parse<T> for Statement {
    fn parse(
        parser: &mut Parser<T>,
        _precedence: Option<Precedence>
    ) -> Result<Self, ParseError> {
        let res = match parser.current_kind() {
            TokenKind::Print => Self::Print(Print::parse(parser, None)?),
            TokenKind::Var => Self::VarDecl(VarDecl::parse(parser, None)?),
            TokenKind::LBrace => Self::Block(Block::parse(parser, None)?),
            TokenKind::Ident => Self::Assign(Assign::parse(parser, None)?),
            _ => return Err(parser.unexpected(ParseErrorType::ExpectedStatement)),
        };

        Ok(res)
    }
}

// print -> print <expression>
impl<T: Iterator<Item = Spanned>> Parse<T> for Print {
    fn parse(
        parser: &mut Parser<T>,
        _precedence: Option<Precedence>
    ) -> Result<Self, ParseError> {
        let (start, _, _) = parser.expect_one(TokenKind::Print, ParseErrorType::ExpectedStatement)?;

        let value = Expression::parse(parser, None)?;
        let end = value.location().end;

        Ok(Self {
            value,
            location: SrcSpan { start, end }
        })
    }
}

// var_decl -> var <identifier> = <expression>
impl<T: Iterator<Item = Spanned>> Parse<T> for VarDecl {
    fn parse(
        parser: &mut Parser<T>,
        _precedence: Option<Precedence>
    ) -> Result<Self, ParseError> {
        let (start, _, _) = parser.expect_one(TokenKind::Var, ParseErrorType::ExpectedStatement)?;

        let name = Identifier::from(parser.expect_ident(ParseErrorType::ExpectedIdent)?);

        parser.expect_one(TokenKind::Assign, ParseErrorType::ExpectedDeclarationAssign)?;

        let initializer = Expression::parse(parser, None)?;
        let end = initializer.location().end;

        Ok(Self {
            name,
            initializer,
            location: SrcSpan { start, end }
        })
    }
}

// assignment -> <identifier> = <expression>
impl<T: Iterator<Item = Spanned>> Parse<T> for Assign {
    fn parse(
        parser: &mut Parser<T>,
        _precedence: Option<Precedence>
    ) -> Result<Self, ParseError> {
        let name = Identifier::from(parser.expect_ident(ParseErrorType::ExpectedStatement)?);

        parser.expect_one(TokenKind::Assign, ParseErrorType::ExpectedAssign)?;

        let value = Expression::parse(parser, None)?;
        let location = name.location.to(value.location());

        Ok(Self {
            name,
            value,
            location
        })
    }
}

// block -> { \n { <statement> \n } }
impl<T: Iterator<Item = Spanned>> Parse<T> for Block {
    fn parse(
        parser: &mut Parser<T>,
        _precedence: Option<Precedence>
    ) -> Result<Self, ParseError> {
        let (start, _, _) = parser.expect_one(TokenKind::LBrace, ParseErrorType::ExpectedStatement)?;

        parser.expect_one(TokenKind::Newline, ParseErrorType::ExpectedNewlineAfterLBrace)?;

        let mut body = vec![];

        let end = loop {
            parser.skip_newlines();

            if let Some((_, _, end)) = parser.eat(TokenKind::RBrace) {
                break end;
            }

            if parser.is_at_end() {
                return parse_error(ParseErrorType::UnterminatedBlock, parser.current_span());
            }

            body.push(Statement::parse(parser, None)?);

            parser.expect_one(TokenKind::Newline, ParseErrorType::ExpectedNewline)?;
        };

        Ok(Self {
            body,
            location: SrcSpan { start, end }
        })
    }
}

// expression -> <primary> { <operator> <primary> }, `*` and `/` bind tighter than `+` and `-`
impl<T: Iterator<Item = Spanned>> Parse<T> for Expression {
    fn parse(
        parser: &mut Parser<T>,
        precedence: Option<Precedence>
    ) -> Result<Self, ParseError> {
        let mut expr = parse_primary(parser)?;

        while precedence.unwrap_or(Precedence::Lowest) < parser.current_precedence() {
            expr = Self::Binary(Binary::parse(parser, expr, precedence)?);
        }

        Ok(expr)
    }
}

// primary -> <number> | <identifier> | ( <expression> )
fn parse_primary<T: Iterator<Item = Spanned>>(parser: &mut Parser<T>) -> Result<Expression, ParseError> {
    match parser.current_kind() {
        TokenKind::Number => {
            let (start, token, end) = parser.expect_one(TokenKind::Number, ParseErrorType::ExpectedExpression)?;

            // lexer output always parses; hand-built token streams may not
            let value = token.lexeme.parse::<f64>().map_err(|_| ParseError {
                error: ParseErrorType::InvalidNumber { lexeme: token.lexeme.clone() },
                span: SrcSpan { start, end }
            })?;

            Ok(Expression::Number {
                value,
                location: SrcSpan { start, end }
            })
        },
        TokenKind::Ident => {
            let ident = parser.expect_ident(ParseErrorType::ExpectedExpression)?;

            Ok(Expression::Variable(Identifier::from(ident)))
        },
        TokenKind::LParen => {
            parser.step();

            let expression = Expression::parse(parser, None)?;

            parser.expect_one(TokenKind::RParen, ParseErrorType::ExpectedRParen)?;

            Ok(expression)
        },
        _ => Err(parser.unexpected(ParseErrorType::ExpectedExpression)),
    }
}

impl<T: Iterator<Item = Spanned>> InfixParse<T> for Binary {
    fn parse(
        parser: &mut Parser<T>,
        left: Expression,
        _precedence: Option<Precedence>
    ) -> Result<Self, ParseError> {
        let precedence = parser.current_precedence();

        let operator = match BinaryOperator::from_token(parser.current_kind()) {
            Some(operator) => operator,
            None => return Err(parser.unexpected(ParseErrorType::ExpectedExpression)),
        };

        parser.step();

        let right = Expression::parse(parser, Some(precedence))?;
        let location = left.location().to(right.location());

        Ok(Self {
            left: Box::new(left),
            operator,
            right: Box::new(right),
            location
        })
    }
}
