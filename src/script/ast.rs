use crate::document::Spanned;

#[derive(Debug, PartialEq, Clone)]
pub struct Script(pub Vec<Spanned<Command>>);

#[derive(Debug, PartialEq, Clone)]
pub enum Command {
    /// `vertex A B ...`
    Vertex(Vec<Spanned<Label>>),

    /// `edge A B`
    Edge(Spanned<Label>, Spanned<Label>),

    /// `print`
    Print,
}

#[derive(Debug, PartialEq, Eq, Hash, Clone)]
pub struct Label(pub String);

impl Label {
    pub fn new(name: &str) -> Self {
        Label(name.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
