//! A line-oriented command language for building and dumping a graph.
//!
//! ```text
//! vertex A B C   # add vertices
//! edge A B       # add an undirected edge
//! print          # dump the graph
//! ```

pub use error::ScriptError;
pub use interpreter::Interpreter;

pub mod ast;
mod error;
mod interpreter;
mod lexer;
mod parser;

use crate::document::Spanned;
use lexer::Token;

/// Parses a script, reporting every invalid token, or else the parser's errors.
pub fn parse(source: &str) -> Result<ast::Script, Vec<ScriptError>> {
    let tokens = lexer::tokenize(source);

    let invalid: Vec<ScriptError> = tokens
        .iter()
        .filter_map(|Spanned { value, span }| match value {
            Token::Invalid(text) => Some(ScriptError::Syntax {
                message: format!("Invalid token: {text}"),
                span: *span,
            }),
            _ => None,
        })
        .collect();
    if !invalid.is_empty() {
        return Err(invalid);
    }

    parser::parse(tokens, source.len()).map_err(|errors| {
        errors
            .iter()
            .map(|error| ScriptError::Syntax {
                message: parser::describe(error),
                span: error.span(),
            })
            .collect()
    })
}

/// Parses and runs a script, returning everything it printed.
pub fn run(source: &str) -> Result<String, Vec<ScriptError>> {
    let script = parse(source)?;

    let mut interpreter = Interpreter::new();
    interpreter.run(&script).map_err(|error| vec![error])?;

    Ok(interpreter.output().to_string())
}
