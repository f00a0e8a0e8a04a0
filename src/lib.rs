//! A binary code trie mapping dot/dash sequences to characters.
//!
//! This crate provides [`CodeTrie`], a strict binary tree whose edges are
//! labeled [`Signal::Dot`] (left) or [`Signal::Dash`] (right). Each node may
//! carry a symbol, and the path from the root to that node is its code. The
//! trie supports insertion, forward lookup (code → symbol), reverse lookup
//! (symbol → code), whole-message decoding and encoding, and pre-order walks
//! for diagnostics.
//!
//! # Quick start
//!
//! ```
//! use morse_trie::CodeTrie;
//!
//! let trie = CodeTrie::standard();
//! assert_eq!(trie.lookup("..."), Some('S'));
//! assert_eq!(trie.lookup_code('O').as_deref(), Some("---"));
//! assert_eq!(trie.decode_message("... --- ..."), "SOS");
//! ```

#![warn(missing_docs)]

mod alphabet;
mod codec;
mod node;
mod search;
mod signal;
mod trie;
mod walk;

pub use alphabet::STANDARD_ALPHABET;
pub use codec::DecodeOptions;
pub use node::Node;
pub use signal::{Signal, DASH, DOT};
pub use walk::{
    Branch, Hierarchy, HierarchyDisplay, HierarchyEntry, PathEntry, Paths, PathsDisplay,
};

/// Errors that can occur during strict trie operations.
///
/// The lenient operations ([`CodeTrie::insert`], [`CodeTrie::lookup`],
/// [`CodeTrie::remove`]) never fail; they degrade to a no-op or `None`.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MorseError {
    /// A code contained a character that is neither `.` nor `-`.
    #[error("invalid signal {ch:?} at position {pos}")]
    InvalidSignal {
        /// The offending character.
        ch: char,
        /// Char position of the offending character within the code.
        pos: usize,
    },
    /// No node in the trie holds the symbol.
    #[error("no code for symbol {0:?}")]
    UnknownSymbol(char),
    /// The symbol is stored at the root and has no token representation.
    #[error("symbol {0:?} is stored under the empty code")]
    EmptyCode(char),
}

/// Result type for strict trie operations.
pub type Result<T> = std::result::Result<T, MorseError>;

/// A binary code trie over the [`Signal`] alphabet.
///
/// The trie owns exactly one root node from construction onward. Every other
/// node is owned by its parent and created on demand by [`insert`](Self::insert).
/// Nodes are never pruned individually: [`remove`](Self::remove) clears a
/// value but keeps the path, and only [`clear`](Self::clear) or dropping the
/// trie releases structure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeTrie {
    pub(crate) root: Node,
    pub(crate) num_nodes: usize,
    pub(crate) len: usize,
}

impl CodeTrie {
    /// Creates a trie holding a single empty root.
    pub fn new() -> Self {
        Self {
            root: Node::default(),
            num_nodes: 1,
            len: 0,
        }
    }

    /// Returns the number of allocated nodes, root included.
    pub fn num_nodes(&self) -> usize {
        self.num_nodes
    }

    /// Returns the number of nodes currently holding a symbol.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no node holds a symbol.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the root node.
    pub fn root(&self) -> &Node {
        &self.root
    }
}

impl Default for CodeTrie {
    fn default() -> Self {
        Self::new()
    }
}
