use std::fmt::Display;

/// A node with an ordered list of children.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree<T> {
    value: T,
    children: Vec<Tree<T>>,
}

impl<T> Tree<T> {
    pub fn new(value: T) -> Self {
        Tree {
            value,
            children: vec![],
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn children(&self) -> &[Tree<T>] {
        &self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Appends a new leaf and returns it, so that the caller can keep building below it.
    pub fn add_child(&mut self, value: T) -> &mut Tree<T> {
        self.children.push(Tree::new(value));
        let last = self.children.len() - 1;
        &mut self.children[last]
    }

    /// Appends an already built subtree.
    pub fn push(&mut self, child: Tree<T>) {
        self.children.push(child);
    }

    /// Number of nodes in this subtree, including `self`.
    pub fn node_count(&self) -> usize {
        1 + self.children.iter().map(Tree::node_count).sum::<usize>()
    }

    /// Length of the longest path from `self` down to a leaf.
    pub fn depth(&self) -> usize {
        self.children
            .iter()
            .map(|child| child.depth() + 1)
            .max()
            .unwrap_or(0)
    }
}

impl<T: Display> Tree<T> {
    fn fmt_children(&self, f: &mut std::fmt::Formatter<'_>, prefix: &str) -> std::fmt::Result {
        for (i, child) in self.children.iter().enumerate() {
            let last = i + 1 == self.children.len();
            let (branch, indent) = if last { ("└─ ", "   ") } else { ("├─ ", "│  ") };

            writeln!(f, "{prefix}{branch}{}", child.value)?;
            child.fmt_children(f, &format!("{prefix}{indent}"))?;
        }
        Ok(())
    }
}

/// Draws the tree with box characters:
///
/// ```text
/// Root
/// ├─ Child 1
/// └─ Child 2
/// ```
impl<T: Display> Display for Tree<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.value)?;
        self.fmt_children(f, "")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    #[test]
    fn single_node() {
        let tree = Tree::new("Root");
        assert!(tree.is_leaf());
        assert_eq!(tree.node_count(), 1);
        assert_eq!(tree.depth(), 0);
        assert_eq!(tree.to_string(), "Root\n");
    }

    #[test]
    fn root_with_two_children() {
        let mut root = Tree::new("Root");
        root.add_child("Child 1");
        root.add_child("Child 2");

        let expected = indoc! {"
            Root
            ├─ Child 1
            └─ Child 2
        "};
        assert_eq!(root.to_string(), expected);
    }

    #[test]
    fn nested_children_are_indented() {
        let mut root = Tree::new("Root");
        let first = root.add_child("a");
        first.add_child("a1").add_child("a1x");
        first.add_child("a2");
        root.add_child("b").add_child("b1");

        let expected = indoc! {"
            Root
            ├─ a
            │  ├─ a1
            │  │  └─ a1x
            │  └─ a2
            └─ b
               └─ b1
        "};
        assert_eq!(root.to_string(), expected);
        assert_eq!(root.node_count(), 7);
        assert_eq!(root.depth(), 3);
    }

    #[test]
    fn push_keeps_subtree() {
        let mut sub = Tree::new(2);
        sub.add_child(3);
        let mut root = Tree::new(1);
        root.push(sub.clone());

        assert_eq!(root.children(), &[sub]);
        assert_eq!(*root.children()[0].value(), 2);
    }
}
