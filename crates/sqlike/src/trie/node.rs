//! Arena-backed trie nodes.
//!
//! Every node lives in a single `Vec` owned by the arena and is addressed by
//! its index. A node records the indices of its children; since indices are
//! only handed out when a child is created under exactly one parent, no node
//! is ever reachable from two parents.

use std::collections::HashMap;

/// Index of a node inside its arena.
pub(crate) type NodeId = usize;

/// The root is always the first node allocated.
pub(crate) const ROOT: NodeId = 0;

/// How a node was reached from its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NodeKind {
    /// The single root node. Owns no edge and is never terminal.
    Root,
    /// Reached by consuming the given literal character.
    Literal(char),
    /// Reached through the unlabeled wildcard edge; stands for a `%` span.
    Wildcard,
}

/// The pattern that ends at a node, with its payload.
#[derive(Debug, Clone)]
pub(crate) struct Terminal<V> {
    /// The pattern exactly as it was registered.
    pub(crate) pattern: String,
    /// The caller's payload.
    pub(crate) payload: V,
}

/// A single trie node.
#[derive(Debug)]
pub(crate) struct Node<V> {
    pub(crate) kind: NodeKind,
    children: HashMap<char, NodeId>,
    wildcard: Option<NodeId>,
    pub(crate) terminal: Option<Terminal<V>>,
}

impl<V> Node<V> {
    fn new(kind: NodeKind) -> Self {
        Self {
            kind,
            children: HashMap::new(),
            wildcard: None,
            terminal: None,
        }
    }

    /// The literal child reached by `c`, if any.
    #[inline]
    pub(crate) fn literal_child(&self, c: char) -> Option<NodeId> {
        self.children.get(&c).copied()
    }

    /// The wildcard child, if any.
    #[inline]
    pub(crate) const fn wildcard_child(&self) -> Option<NodeId> {
        self.wildcard
    }

    /// The character consumed to reach this node, if it is a literal node.
    #[cfg(test)]
    pub(crate) const fn edge_char(&self) -> Option<char> {
        match self.kind {
            NodeKind::Literal(c) => Some(c),
            NodeKind::Root | NodeKind::Wildcard => None,
        }
    }
}

/// Owner of every node of one trie.
#[derive(Debug)]
pub(crate) struct Arena<V> {
    nodes: Vec<Node<V>>,
    patterns: usize,
}

impl<V> Default for Arena<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Arena<V> {
    /// Create an arena holding only the root node.
    pub(crate) fn new() -> Self {
        Self {
            nodes: vec![Node::new(NodeKind::Root)],
            patterns: 0,
        }
    }

    /// Borrow a node.
    ///
    /// Ids are only produced by this arena and nodes are never removed, so
    /// every id handed out stays valid.
    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &Node<V> {
        &self.nodes[id]
    }

    /// Number of nodes, root included.
    pub(crate) fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of distinct terminal nodes.
    pub(crate) const fn pattern_count(&self) -> usize {
        self.patterns
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = self.nodes.len();
        self.nodes.push(Node::new(kind));
        id
    }

    /// Return the literal child of `parent` for `c`, creating it on first use.
    pub(crate) fn ensure_literal_child(&mut self, parent: NodeId, c: char) -> NodeId {
        if let Some(id) = self.nodes[parent].literal_child(c) {
            return id;
        }
        let id = self.push(NodeKind::Literal(c));
        self.nodes[parent].children.insert(c, id);
        id
    }

    /// Return the wildcard child of `parent`, creating it on first use.
    pub(crate) fn ensure_wildcard_child(&mut self, parent: NodeId) -> NodeId {
        if let Some(id) = self.nodes[parent].wildcard {
            return id;
        }
        let id = self.push(NodeKind::Wildcard);
        self.nodes[parent].wildcard = Some(id);
        id
    }

    /// Mark `id` terminal, replacing whatever pattern ended there before.
    ///
    /// Returns the previous terminal, if any. The root is never marked.
    pub(crate) fn set_terminal(&mut self, id: NodeId, terminal: Terminal<V>) -> Option<Terminal<V>> {
        debug_assert_ne!(id, ROOT, "the root node can never be terminal");
        let previous = self.nodes[id].terminal.replace(terminal);
        if previous.is_none() {
            self.patterns += 1;
        }
        previous
    }
}
