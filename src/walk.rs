use std::fmt;

use crate::{CodeTrie, Node, Signal};

/// A valued node found by [`CodeTrie::paths`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PathEntry {
    /// The code leading to the node.
    pub code: String,
    /// The symbol stored at the node.
    pub symbol: char,
}

impl fmt::Display for PathEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} => {}", self.code, self.symbol)
    }
}

/// The edge through which a node was reached.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Branch {
    /// The root, reached by no edge.
    Root,
    /// Reached through a [`Signal::Dot`] edge.
    Dot,
    /// Reached through a [`Signal::Dash`] edge.
    Dash,
}

impl From<Signal> for Branch {
    fn from(signal: Signal) -> Self {
        match signal {
            Signal::Dot => Branch::Dot,
            Signal::Dash => Branch::Dash,
        }
    }
}

impl fmt::Display for Branch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Branch::Root => "root",
            Branch::Dot => "dot(.)",
            Branch::Dash => "dash(-)",
        })
    }
}

/// A node found by [`CodeTrie::hierarchy`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HierarchyEntry {
    /// Distance from the root; the root itself is at depth 0.
    pub depth: usize,
    /// The edge leading to this node.
    pub branch: Branch,
    /// The symbol stored at the node.
    pub value: Option<char>,
}

impl HierarchyEntry {
    /// Placeholder shown for nodes without a symbol.
    pub const EMPTY: char = '-';

    /// Returns the stored symbol, or [`Self::EMPTY`] if there is none.
    pub fn displayed_value(&self) -> char {
        self.value.unwrap_or(Self::EMPTY)
    }
}

impl fmt::Display for HierarchyEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:indent$}{} : {}",
            "",
            self.branch,
            self.displayed_value(),
            indent = self.depth * 2
        )
    }
}

impl CodeTrie {
    /// Returns an iterator over every valued node as a `(code, symbol)` entry.
    ///
    /// Nodes are visited in pre-order, dot branch before dash branch. Each
    /// call starts a fresh walk.
    pub fn paths(&self) -> Paths<'_> {
        Paths {
            stack: vec![(&self.root, 0, None)],
            code: String::new(),
        }
    }

    /// Returns an iterator over every node with its depth and incoming edge,
    /// root first, in the same order as [`paths`](Self::paths).
    pub fn hierarchy(&self) -> Hierarchy<'_> {
        Hierarchy {
            stack: vec![(&self.root, 0, Branch::Root)],
        }
    }

    /// Formats one `"<code> => <symbol>"` line per valued node.
    pub fn display_paths(&self) -> PathsDisplay<'_> {
        PathsDisplay { trie: self }
    }

    /// Formats one indented `"<branch> : <value>"` line per node.
    pub fn display_hierarchy(&self) -> HierarchyDisplay<'_> {
        HierarchyDisplay { trie: self }
    }
}

/// Iterator returned by [`CodeTrie::paths`].
#[derive(Clone, Debug)]
pub struct Paths<'a> {
    /// DFS stack: (node, parent code length, signal to append).
    /// `None` signal = root entry.
    stack: Vec<(&'a Node, usize, Option<Signal>)>,
    /// Shared code buffer, truncated back to the parent's length on each pop.
    code: String,
}

impl Iterator for Paths<'_> {
    type Item = PathEntry;

    fn next(&mut self) -> Option<PathEntry> {
        while let Some((node, parent_len, signal)) = self.stack.pop() {
            self.code.truncate(parent_len);
            if let Some(s) = signal {
                self.code.push(s.as_char());
            }
            let len = self.code.len();

            // pushed in reverse so the dot child pops first
            for s in [Signal::Dash, Signal::Dot] {
                if let Some(child) = node.child(s) {
                    self.stack.push((child, len, Some(s)));
                }
            }

            if let Some(symbol) = node.value() {
                return Some(PathEntry {
                    code: self.code.clone(),
                    symbol,
                });
            }
        }
        None
    }
}

/// Iterator returned by [`CodeTrie::hierarchy`].
#[derive(Clone, Debug)]
pub struct Hierarchy<'a> {
    stack: Vec<(&'a Node, usize, Branch)>,
}

impl Iterator for Hierarchy<'_> {
    type Item = HierarchyEntry;

    fn next(&mut self) -> Option<HierarchyEntry> {
        let (node, depth, branch) = self.stack.pop()?;
        for s in [Signal::Dash, Signal::Dot] {
            if let Some(child) = node.child(s) {
                self.stack.push((child, depth + 1, s.into()));
            }
        }
        Some(HierarchyEntry {
            depth,
            branch,
            value: node.value(),
        })
    }
}

/// Display adapter returned by [`CodeTrie::display_paths`].
#[derive(Clone, Copy, Debug)]
pub struct PathsDisplay<'a> {
    trie: &'a CodeTrie,
}

impl fmt::Display for PathsDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in self.trie.paths() {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}

/// Display adapter returned by [`CodeTrie::display_hierarchy`].
#[derive(Clone, Copy, Debug)]
pub struct HierarchyDisplay<'a> {
    trie: &'a CodeTrie,
}

impl fmt::Display for HierarchyDisplay<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for entry in self.trie.hierarchy() {
            writeln!(f, "{entry}")?;
        }
        Ok(())
    }
}
