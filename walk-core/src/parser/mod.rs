pub mod error;
pub mod parser;
pub mod ast;
mod grammar;

pub mod prelude {
    pub use super::{
        error::*,
        parser::*,
        ast::*
    };
}
