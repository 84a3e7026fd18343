use std::fmt::{Display, Formatter};

use crate::{lexer::prelude::TokenKind, utils::prelude::SrcSpan};

const INDENT: &str = "    ";

// program -> { <statement> \n }
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    pub statements: Vec<Statement>,
}

impl Display for Program {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for statement in &self.statements {
            statement.write_indented(f, 0)?;
        }

        Ok(())
    }
}

// statement -> <print> | <var_decl> | <block> | <assignment>
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Assign(Assign),
    VarDecl(VarDecl),
    Print(Print),
    Block(Block),
}

impl Statement {
    pub fn location(&self) -> SrcSpan {
        match self {
            Self::Assign(assign) => assign.location,
            Self::VarDecl(decl) => decl.location,
            Self::Print(print) => print.location,
            Self::Block(block) => block.location,
        }
    }

    fn write_indented(&self, f: &mut Formatter<'_>, depth: usize) -> std::fmt::Result {
        let indent = INDENT.repeat(depth);

        match self {
            Self::Block(block) => {
                writeln!(f, "{indent}{{")?;

                for statement in &block.body {
                    statement.write_indented(f, depth + 1)?;
                }

                writeln!(f, "{indent}}}")
            },
            Self::Assign(assign) => writeln!(f, "{indent}{assign}"),
            Self::VarDecl(decl) => writeln!(f, "{indent}{decl}"),
            Self::Print(print) => writeln!(f, "{indent}{print}"),
        }
    }
}

impl Display for Statement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.write_indented(f, 0)
    }
}

// assignment -> <identifier> = <expression>
#[derive(Debug, Clone, PartialEq)]
pub struct Assign {
    pub name: Identifier,
    pub value: Expression,
    pub location: SrcSpan
}

impl Display for Assign {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.name, self.value)
    }
}

// var_decl -> var <identifier> = <expression>
#[derive(Debug, Clone, PartialEq)]
pub struct VarDecl {
    pub name: Identifier,
    pub initializer: Expression,
    pub location: SrcSpan
}

impl Display for VarDecl {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "var {} = {}", self.name, self.initializer)
    }
}

// print -> print <expression>
#[derive(Debug, Clone, PartialEq)]
pub struct Print {
    pub value: Expression,
    pub location: SrcSpan
}

impl Display for Print {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "print {}", self.value)
    }
}

// block -> { \n { <statement> \n } }
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub body: Vec<Statement>,
    pub location: SrcSpan
}

// expression -> <number> | <identifier> | <binary>
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Number {
        value: f64,
        location: SrcSpan
    },
    Variable(Identifier),
    Binary(Binary),
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number { value, .. } => write!(f, "{value}"),
            Self::Variable(ident) => write!(f, "{ident}"),
            Self::Binary(binary) => write!(f, "{binary}"),
        }
    }
}

impl Expression {
    pub fn location(&self) -> SrcSpan {
        match self {
            Self::Number { location, .. } => *location,
            Self::Variable(ident) => ident.location,
            Self::Binary(binary) => binary.location,
        }
    }
}

// identifier -> (<letter> | _) { <letter> | <digit> | _ }
#[derive(Debug, Clone, PartialEq)]
pub struct Identifier {
    pub value: String,
    pub location: SrcSpan
}

impl Display for Identifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl From<(u32, String, u32)> for Identifier {
    fn from(value: (u32, String, u32)) -> Self {
        Identifier {
            value: value.1,
            location: SrcSpan { start: value.0, end: value.2 }
        }
    }
}

// binary -> <expression> <operator> <expression>
#[derive(Debug, Clone, PartialEq)]
pub struct Binary {
    pub left: Box<Expression>,
    pub operator: BinaryOperator,
    pub right: Box<Expression>,
    pub location: SrcSpan
}

impl Display for Binary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "({} {} {})", self.left, self.operator, self.right)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOperator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl BinaryOperator {
    pub fn from_token(kind: TokenKind) -> Option<Self> {
        Some(match kind {
            TokenKind::Plus => Self::Add,
            TokenKind::Minus => Self::Subtract,
            TokenKind::Star => Self::Multiply,
            TokenKind::Slash => Self::Divide,
            _ => return None,
        })
    }

    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Self::Add => left + right,
            Self::Subtract => left - right,
            Self::Multiply => left * right,
            Self::Divide => left / right,
        }
    }
}

impl Display for BinaryOperator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        };

        write!(f, "{operator}")
    }
}
