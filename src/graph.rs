use std::{borrow::Borrow, collections::HashMap, fmt::Display, hash::Hash};

pub use error::GraphError;

mod error;

/// An undirected graph stored as adjacency lists.
///
/// Vertices are kept in the order they were added, and each adjacency list
/// keeps its neighbors in the order the edges were added. An edge is nothing
/// more than a pair of reciprocal entries in its endpoints' lists, so adding
/// the same edge twice leaves two entries on each side.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    /// Position of each vertex in `entries`.
    index: HashMap<V, usize>,

    /// Vertices in the order of their insertion.
    entries: Vec<Entry<V>>,

    edges: usize,
}

#[derive(Debug, Clone)]
struct Entry<V> {
    label: V,
    neighbors: Vec<V>,
}

impl<V> Graph<V> {
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
            entries: vec![],
            edges: 0,
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.entries.len()
    }

    /// Number of edges added so far, parallel edges and self-loops included.
    pub fn edge_count(&self) -> usize {
        self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|entry| &entry.label)
    }

    /// Iterates over every vertex together with its adjacency list.
    pub fn iter(&self) -> impl Iterator<Item = (&V, &[V])> {
        self.entries
            .iter()
            .map(|entry| (&entry.label, entry.neighbors.as_slice()))
    }
}

impl<V> Default for Graph<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: Eq + Hash> Graph<V> {
    pub fn contains_vertex<Q>(&self, label: &Q) -> bool
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index.contains_key(label)
    }

    /// Returns the adjacency list of `label`, or `None` if there is no such vertex.
    pub fn neighbors<Q>(&self, label: &Q) -> Option<&[V]>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.index
            .get(label)
            .map(|&i| self.entries[i].neighbors.as_slice())
    }
}

impl<V: Eq + Hash + Clone + Display> Graph<V> {
    /// Adds a vertex with no neighbors.
    ///
    /// A label that is already present is rejected and its edges are kept.
    pub fn add_vertex(&mut self, label: V) -> Result<(), GraphError> {
        if self.index.contains_key(&label) {
            tracing::warn!(%label, "rejected duplicate vertex");
            return Err(GraphError::DuplicateVertex {
                label: label.to_string(),
            });
        }

        tracing::debug!(%label, "add vertex");
        self.index.insert(label.clone(), self.entries.len());
        self.entries.push(Entry {
            label,
            neighbors: vec![],
        });
        Ok(())
    }

    /// Adds an undirected edge between `v` and `w`.
    ///
    /// Both endpoints must already exist. On error nothing is modified.
    pub fn add_edge<Q>(&mut self, v: &Q, w: &Q) -> Result<(), GraphError>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        let i = self.position(v)?;
        let j = self.position(w)?;

        let v = self.entries[i].label.clone();
        let w = self.entries[j].label.clone();
        tracing::debug!(%v, %w, "add edge");

        self.entries[i].neighbors.push(w);
        self.entries[j].neighbors.push(v);
        self.edges += 1;
        Ok(())
    }

    /// Renders one line per vertex: `A -> B, C`.
    ///
    /// An isolated vertex renders as `A -> ` with nothing after the arrow.
    pub fn dump(&self) -> String {
        self.to_string()
    }

    /// Writes the dump to stdout.
    pub fn print(&self) {
        print!("{self}");
    }

    fn position<Q>(&self, label: &Q) -> Result<usize, GraphError>
    where
        V: Borrow<Q>,
        Q: Hash + Eq + Display + ?Sized,
    {
        self.index.get(label).copied().ok_or_else(|| {
            tracing::warn!(%label, "vertex not found");
            GraphError::VertexNotFound {
                label: label.to_string(),
            }
        })
    }
}

impl<V: Display> Display for Graph<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for entry in &self.entries {
            write!(f, "{} -> ", entry.label)?;
            for (i, neighbor) in entry.neighbors.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{neighbor}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    fn graph_of(labels: &[&str]) -> Graph<String> {
        let mut graph = Graph::new();
        for label in labels {
            graph.add_vertex(label.to_string()).unwrap();
        }
        graph
    }

    #[test]
    fn new_vertex_has_no_neighbors() {
        let graph = graph_of(&["A"]);
        assert_eq!(graph.neighbors("A"), Some(&[][..]));
        assert_eq!(graph.vertex_count(), 1);
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn edge_is_recorded_on_both_endpoints() {
        let mut graph = graph_of(&["A", "B"]);
        graph.add_edge("A", "B").unwrap();

        assert_eq!(graph.neighbors("A").unwrap(), ["B".to_string()]);
        assert_eq!(graph.neighbors("B").unwrap(), ["A".to_string()]);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn neighbors_keep_edge_insertion_order() {
        let mut graph = graph_of(&["A", "B", "C", "D"]);
        graph.add_edge("A", "D").unwrap();
        graph.add_edge("A", "B").unwrap();
        graph.add_edge("C", "A").unwrap();

        assert_eq!(graph.neighbors("A").unwrap(), ["D", "B", "C"].map(String::from));
    }

    #[test]
    fn missing_source_vertex_is_reported() {
        let mut graph = graph_of(&["A"]);
        let result = graph.add_edge("X", "A");
        assert_eq!(
            result,
            Err(GraphError::VertexNotFound {
                label: "X".to_string()
            })
        );
    }

    #[test]
    fn missing_target_vertex_leaves_graph_unmodified() {
        let mut graph = graph_of(&["A", "B"]);
        graph.add_edge("A", "B").unwrap();
        let before = graph.dump();

        let result = graph.add_edge("A", "Z");

        assert_eq!(
            result,
            Err(GraphError::VertexNotFound {
                label: "Z".to_string()
            })
        );
        assert_eq!(graph.dump(), before);
        assert_eq!(graph.neighbors("A").unwrap().len(), 1);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn duplicate_vertex_is_rejected_and_edges_survive() {
        let mut graph = graph_of(&["A", "B"]);
        graph.add_edge("A", "B").unwrap();

        let result = graph.add_vertex("A".to_string());

        assert_eq!(
            result,
            Err(GraphError::DuplicateVertex {
                label: "A".to_string()
            })
        );
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.neighbors("A").unwrap(), ["B".to_string()]);
    }

    #[test]
    fn parallel_edges_are_kept() {
        let mut graph = graph_of(&["A", "B"]);
        graph.add_edge("A", "B").unwrap();
        graph.add_edge("B", "A").unwrap();

        assert_eq!(graph.neighbors("A").unwrap(), ["B", "B"].map(String::from));
        assert_eq!(graph.neighbors("B").unwrap(), ["A", "A"].map(String::from));
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn self_loop_appears_twice() {
        let mut graph = graph_of(&["A"]);
        graph.add_edge("A", "A").unwrap();

        assert_eq!(graph.dump(), "A -> A, A\n");
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn dump_follows_vertex_insertion_order() {
        let mut graph = graph_of(&["A", "B", "C"]);
        graph.add_edge("A", "B").unwrap();
        graph.add_edge("A", "C").unwrap();

        let expected = indoc! {"
            A -> B, C
            B -> A
            C -> A
        "};
        assert_eq!(graph.dump(), expected);
    }

    #[test]
    fn dump_is_not_sorted() {
        let graph = graph_of(&["zeta", "alpha", "mu"]);
        assert_eq!(graph.dump(), "zeta -> \nalpha -> \nmu -> \n");
    }

    #[test]
    fn isolated_vertex_has_empty_list() {
        let graph = graph_of(&["A"]);
        assert_eq!(graph.dump(), "A -> \n");
    }

    #[test]
    fn empty_graph_dumps_nothing() {
        let graph: Graph<String> = Graph::default();
        assert!(graph.is_empty());
        assert_eq!(graph.dump(), "");
    }

    #[test]
    fn dump_does_not_mutate() {
        let mut graph = graph_of(&["A", "B"]);
        graph.add_edge("A", "B").unwrap();
        let first = graph.dump();
        graph.print();
        assert_eq!(graph.dump(), first);
    }

    #[test]
    fn works_with_non_string_labels() {
        let mut graph = Graph::new();
        graph.add_vertex(1u32).unwrap();
        graph.add_vertex(2).unwrap();
        graph.add_edge(&1, &2).unwrap();

        assert!(graph.contains_vertex(&2));
        assert!(!graph.contains_vertex(&3));
        assert_eq!(
            graph.iter().collect::<Vec<_>>(),
            vec![(&1, &[2][..]), (&2, &[1][..])]
        );
    }
}
