use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Vertex not found: {label}")]
    VertexNotFound { label: String },

    #[error("Duplicate vertex: {label}")]
    DuplicateVertex { label: String },
}
