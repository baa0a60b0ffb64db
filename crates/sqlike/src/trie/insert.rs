//! Pattern insertion.
//!
//! A pattern is scanned once, left to right. `%` outside a protected region
//! follows (or creates) the wildcard edge. A `[` opens a protected region only
//! when some `]` appears anywhere after it; the first `]` then closes it.
//! Neither bracket leaves an edge behind. Inside a protected region every
//! character, `%` included, is literal.

use super::node::{Arena, NodeId, ROOT, Terminal};

/// What a registration did to the trie.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Registration {
    /// A new terminal node was created or marked.
    Added,
    /// The same normalized path was already terminal; its pattern and payload
    /// were replaced.
    Replaced,
    /// The pattern reduced to no edges at all, so nothing was stored.
    Ignored,
}

/// Walk `pattern` into `arena`, creating missing nodes, and mark the final
/// node terminal.
pub(crate) fn insert<V>(arena: &mut Arena<V>, pattern: &str, payload: V) -> Registration {
    let cursor = build_path(arena, pattern);
    if cursor == ROOT {
        return Registration::Ignored;
    }

    let terminal = Terminal {
        pattern: pattern.to_string(),
        payload,
    };
    match arena.set_terminal(cursor, terminal) {
        Some(_) => Registration::Replaced,
        None => Registration::Added,
    }
}

fn build_path<V>(arena: &mut Arena<V>, pattern: &str) -> NodeId {
    let chars: Vec<char> = pattern.chars().collect();
    let mut cursor = ROOT;
    let last_close = chars.iter().rposition(|&c| c == ']');
    let mut protected = false;

    for (i, &c) in chars.iter().enumerate() {
        match c {
            '%' if !protected => cursor = arena.ensure_wildcard_child(cursor),
            // Any later `]` will do, not just a balanced one.
            '[' if !protected && last_close.is_some_and(|close| close > i) => protected = true,
            ']' if protected => protected = false,
            _ => cursor = arena.ensure_literal_child(cursor, c),
        }
    }

    cursor
}
