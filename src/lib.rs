pub use document::{Position, Span, Spanned};
pub use graph::{Graph, GraphError};
pub use script::{parse, run, Interpreter, ScriptError};
pub use tree::Tree;

pub mod cli;
mod document;
pub mod graph;
pub mod script;
pub mod tree;
