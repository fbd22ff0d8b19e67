//! Node implementation for the prefix index.
//!
//! Nodes own their children outright; the tree has no shared or cyclic links.

use fnv::FnvHashMap;

/// A node in the prefix tree.
///
/// Each node stands for the prefix spelled by the edges from the root to it.
#[derive(Debug, Default)]
pub(crate) struct TrieNode {
    /// Map of case-folded characters to child nodes. Unordered.
    pub(crate) children: FnvHashMap<char, TrieNode>,

    /// Whether the path to this node spells a complete word
    pub(crate) is_terminal: bool,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Returns the child reached over `c`, creating it if needed.
    pub(crate) fn child_or_insert(&mut self, c: char) -> &mut TrieNode {
        self.children.entry(c).or_default()
    }

    /// Follows `path` from this node, returning `None` at the first missing edge.
    pub(crate) fn descend(&self, path: &str) -> Option<&TrieNode> {
        let mut node = self;
        for c in path.chars() {
            node = node.children.get(&c)?;
        }
        Some(node)
    }

    /// Children in ascending character order.
    ///
    /// The hash map iterates in arbitrary order, so every traversal that
    /// produces user-visible output goes through here.
    pub(crate) fn sorted_children(&self) -> Vec<(char, &TrieNode)> {
        let mut children: Vec<(char, &TrieNode)> =
            self.children.iter().map(|(&c, node)| (c, node)).collect();
        children.sort_unstable_by_key(|(c, _)| *c);
        children
    }
}

impl Drop for TrieNode {
    // Detaches descendants onto a heap stack so dropping a long chain does
    // not recurse once per character.
    fn drop(&mut self) {
        let mut pending: Vec<TrieNode> = self.children.drain().map(|(_, child)| child).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descend_stops_at_missing_edge() {
        let mut root = TrieNode::new();
        root.child_or_insert('a').child_or_insert('b').is_terminal = true;

        assert!(root.descend("ab").is_some_and(|n| n.is_terminal));
        assert!(root.descend("a").is_some_and(|n| !n.is_terminal));
        assert!(root.descend("ac").is_none());
        assert!(root.descend("").is_some());
    }

    #[test]
    fn test_sorted_children_order() {
        let mut root = TrieNode::new();
        for c in ['z', 'b', 'm', 'a'] {
            root.child_or_insert(c);
        }

        let keys: Vec<char> = root.sorted_children().into_iter().map(|(c, _)| c).collect();
        assert_eq!(keys, vec!['a', 'b', 'm', 'z']);
    }

    #[test]
    fn test_drop_long_chain() {
        let mut root = TrieNode::new();
        let mut node = &mut root;
        for _ in 0..200_000 {
            node = node.child_or_insert('a');
        }
        node.is_terminal = true;

        assert!(root.descend(&"a".repeat(200_000)).is_some_and(|n| n.is_terminal));
        drop(root);
    }
}
