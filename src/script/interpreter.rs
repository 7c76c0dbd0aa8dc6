use super::{ast::*, error::ScriptError};
use crate::{document::Spanned, graph::Graph};

/// Runs parsed commands against a graph of string labels.
///
/// Every `print` appends the current dump to the output buffer.
#[derive(Debug, Default)]
pub struct Interpreter {
    graph: Graph<String>,
    output: String,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn graph(&self) -> &Graph<String> {
        &self.graph
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    /// Runs the commands in order and stops at the first one that fails.
    pub fn run(&mut self, script: &Script) -> Result<(), ScriptError> {
        let Script(commands) = script;
        commands.iter().try_for_each(|command| self.execute(command))
    }

    fn execute(&mut self, command: &Spanned<Command>) -> Result<(), ScriptError> {
        tracing::trace!(command = ?command.value, span = %command.span, "execute");

        match &command.value {
            Command::Vertex(labels) => {
                for label in labels {
                    self.graph
                        .add_vertex(label.value.0.clone())
                        .map_err(|source| ScriptError::Graph {
                            source,
                            span: label.span,
                        })?;
                }
            }

            Command::Edge(v, w) => {
                // Point the error at whichever endpoint is missing.
                let span = if self.graph.contains_vertex(v.value.as_str()) {
                    w.span
                } else {
                    v.span
                };
                self.graph
                    .add_edge(v.value.as_str(), w.value.as_str())
                    .map_err(|source| ScriptError::Graph { source, span })?;
            }

            Command::Print => self.output.push_str(&self.graph.dump()),
        }

        Ok(())
    }
}
