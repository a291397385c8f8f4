//! Lexer, Pratt parser and tree-walking evaluator for the Monkey language.
//!
//! The two entry points an embedding front end needs are [`parser::parse`]
//! and [`evaluator::evaluate`]; [`interpreter`] wires them into a REPL.

pub mod interpreter;

pub mod error;
pub mod token;
pub mod lexer;
pub mod ast;
pub mod parser;
pub mod object;
pub mod evaluator;
pub mod builtin;
pub mod environment;

pub use error::{Error, Result};
