pub mod error;


use std::io::Write;

use crate::{
    environment::prelude::Environment,
    parser::prelude::{Assign, Block, Expression, Print, Program, Statement, VarDecl},
};

pub use error::{RuntimeError, RuntimeErrorType};

/// Tree-walk evaluator for one program.
///
/// Owns the scope stack and the output sink. [`Interpreter::execute`] takes
/// `self` by value, so an instance runs exactly one program and every run
/// starts from a fresh global scope.
pub struct Interpreter<W: Write> {
    env: Environment,
    out: W,
}

impl<W: Write> Interpreter<W> {
    pub fn new(out: W) -> Self {
        Self {
            env: Environment::new(),
            out,
        }
    }

    /// Runs the statements in order, stopping at the first error. Output
    /// written before the error is flushed and kept.
    pub fn execute(mut self, program: &Program) -> Result<(), RuntimeError> {
        tracing::debug!(statements = program.statements.len(), "executing program");

        let result = program.statements.iter()
            .try_for_each(|statement| execute_statement(statement, &mut self.env, &mut self.out));

        let flushed = self.out.flush();

        result?;
        flushed.map_err(|err| RuntimeError {
            error: RuntimeErrorType::Output { err: err.kind() },
            location: Default::default(),
        })
    }
}

fn execute_statement<W: Write>(
    statement: &Statement,
    env: &mut Environment,
    out: &mut W
) -> Result<(), RuntimeError> {
    match statement {
        Statement::Assign(assign) => execute_assign(assign, env),
        Statement::VarDecl(decl) => execute_var_decl(decl, env),
        Statement::Print(print) => execute_print(print, env, out),
        Statement::Block(block) => execute_block(block, env, out),
    }
}

fn execute_assign(assign: &Assign, env: &mut Environment) -> Result<(), RuntimeError> {
    let value = evaluate(&assign.value, env)?;

    match env.get_mut(&assign.name.value) {
        Some(slot) => {
            *slot = value;
            Ok(())
        },
        None => Err(RuntimeError {
            error: RuntimeErrorType::UndefinedVariable { name: assign.name.value.clone() },
            location: assign.name.location,
        })
    }
}

fn execute_var_decl(decl: &VarDecl, env: &mut Environment) -> Result<(), RuntimeError> {
    let value = evaluate(&decl.initializer, env)?;

    if env.declare(&decl.name.value, value) {
        Ok(())
    } else {
        Err(RuntimeError {
            error: RuntimeErrorType::Redeclaration { name: decl.name.value.clone() },
            location: decl.name.location,
        })
    }
}

fn execute_print<W: Write>(print: &Print, env: &Environment, out: &mut W) -> Result<(), RuntimeError> {
    let value = evaluate(&print.value, env)?;

    writeln!(out, "{value}").map_err(|err| RuntimeError {
        error: RuntimeErrorType::Output { err: err.kind() },
        location: print.location,
    })
}

fn execute_block<W: Write>(block: &Block, env: &mut Environment, out: &mut W) -> Result<(), RuntimeError> {
    let mut scope = env.enter_scope();

    for statement in &block.body {
        execute_statement(statement, &mut scope, out)?;
    }

    Ok(())
}

/// Evaluates `expression` against `env`. Operands are evaluated left to
/// right; arithmetic is plain IEEE-754, so dividing by zero gives `inf` or
/// `NaN` rather than an error.
pub fn evaluate(expression: &Expression, env: &Environment) -> Result<f64, RuntimeError> {
    match expression {
        Expression::Number { value, .. } => Ok(*value),
        Expression::Variable(ident) => env.get(&ident.value).ok_or_else(|| RuntimeError {
            error: RuntimeErrorType::UndefinedVariable { name: ident.value.clone() },
            location: ident.location,
        }),
        Expression::Binary(binary) => {
            let left = evaluate(&binary.left, env)?;
            let right = evaluate(&binary.right, env)?;

            Ok(binary.operator.apply(left, right))
        }
    }
}
