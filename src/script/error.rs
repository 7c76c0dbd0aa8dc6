use thiserror::Error;

use crate::{document::Span, graph::GraphError};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScriptError {
    #[error("{message}")]
    Syntax { message: String, span: Span },

    #[error("{source}")]
    Graph { source: GraphError, span: Span },
}

impl ScriptError {
    pub fn span(&self) -> Span {
        match self {
            ScriptError::Syntax { span, .. } | ScriptError::Graph { span, .. } => *span,
        }
    }
}
