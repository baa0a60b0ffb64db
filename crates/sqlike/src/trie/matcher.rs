//! Backtracking search of the trie against an input text.
//!
//! The search walks a node cursor and the unconsumed suffix of the text
//! together and returns the first terminal it reaches. Whichever node is
//! being visited, the first character of the suffix is the one that selected
//! it (for literal nodes) or the next one the open `%` span may swallow (for
//! wildcard nodes). The order in which edges are tried decides which pattern
//! wins when several match:
//!
//! - at the root: the literal edge for the first character, then the
//!   wildcard edge, both with the suffix unchanged;
//! - at a literal node: the literal edge for the second character, then the
//!   wildcard edge, both with the first character dropped;
//! - at a wildcard node: close the span before the first character, close it
//!   after the first character, and only then widen the span by one.
//!
//! The search keeps its pending alternatives on a heap-allocated stack
//! rather than the call stack, so pattern and text length are bounded only
//! by memory. There is no memoization. Pathological pattern sets can make the
//! search exponential in the text length.

use super::node::{Arena, NodeId, NodeKind, ROOT, Terminal};

/// A node to visit and the offset of the first unconsumed character.
type Frame = (NodeId, usize);

/// Find a terminal whose pattern matches all of `text`.
///
/// Empty text never matches.
pub(crate) fn find<'a, V>(arena: &'a Arena<V>, text: &[char]) -> Option<&'a Terminal<V>> {
    let mut pending: Vec<Frame> = vec![(ROOT, 0)];

    // Alternatives are pushed lowest priority first so the highest is popped next.
    while let Some((id, start)) = pending.pop() {
        let Some(&first) = text.get(start) else {
            continue;
        };
        let next = text.get(start + 1).copied();
        let node = arena.node(id);

        let literal = |c: char, at: usize| node.literal_child(c).map(|child| (child, at));
        let wildcard = |at: usize| node.wildcard_child().map(|child| (child, at));

        match node.kind {
            NodeKind::Root => {
                pending.extend(wildcard(start));
                pending.extend(literal(first, start));
            }

            NodeKind::Literal(edge) => {
                debug_assert_eq!(edge, first, "literal node entered with a different character");
                match next {
                    None => {
                        if let Some(terminal) = node.terminal.as_ref() {
                            return Some(terminal);
                        }
                    }
                    Some(next) => {
                        pending.extend(wildcard(start + 1));
                        pending.extend(literal(next, start + 1));
                    }
                }
            }

            NodeKind::Wildcard => match next {
                // The span swallows the last character, or ends right before it.
                None => {
                    if let Some(terminal) = node.terminal.as_ref() {
                        return Some(terminal);
                    }
                    pending.extend(literal(first, start));
                }
                Some(next) => {
                    pending.push((id, start + 1));
                    pending.extend(literal(next, start + 1));
                    pending.extend(literal(first, start));
                }
            },
        }
    }

    None
}
