use std::fmt;

use crate::Signal;

/// A node in the code trie.
///
/// - `value`: the symbol terminating at this node, if any
/// - `dot`: subtree reached by appending [`Signal::Dot`]
/// - `dash`: subtree reached by appending [`Signal::Dash`]
///
/// Children are exclusively owned, so the structure is always a strict tree.
/// `Clone`, `PartialEq` and `Drop` walk the subtree with an explicit stack, so
/// arbitrarily long codes never exhaust the call stack. `Debug` shows this
/// node only, with children reduced to presence flags.
#[derive(Default)]
pub struct Node {
    value: Option<char>,
    dot: Option<Box<Node>>,
    dash: Option<Box<Node>>,
}

impl Node {
    /// Returns the symbol stored at this node.
    #[inline]
    pub fn value(&self) -> Option<char> {
        self.value
    }

    /// Returns the child reached by `signal`, if it exists.
    #[inline]
    pub fn child(&self, signal: Signal) -> Option<&Node> {
        match signal {
            Signal::Dot => self.dot.as_deref(),
            Signal::Dash => self.dash.as_deref(),
        }
    }

    /// Returns the child reached by `signal` mutably, if it exists.
    #[inline]
    pub(crate) fn child_mut(&mut self, signal: Signal) -> Option<&mut Node> {
        match signal {
            Signal::Dot => self.dot.as_deref_mut(),
            Signal::Dash => self.dash.as_deref_mut(),
        }
    }

    /// Returns the child reached by `signal`, creating an empty one if absent.
    /// The flag is true when a node was created.
    pub(crate) fn child_or_insert(&mut self, signal: Signal) -> (&mut Node, bool) {
        let slot = match signal {
            Signal::Dot => &mut self.dot,
            Signal::Dash => &mut self.dash,
        };
        let created = slot.is_none();
        (&mut **slot.get_or_insert_with(Box::default), created)
    }

    /// Returns true if this node has no children.
    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.dot.is_none() && self.dash.is_none()
    }

    /// Stores `symbol`, returning the previous value.
    #[inline]
    pub(crate) fn set_value(&mut self, symbol: char) -> Option<char> {
        self.value.replace(symbol)
    }

    /// Clears the stored symbol, returning it.
    #[inline]
    pub(crate) fn take_value(&mut self) -> Option<char> {
        self.value.take()
    }
}

impl Drop for Node {
    fn drop(&mut self) {
        // Detach children before they drop so each box frees a childless node.
        let mut stack: Vec<Box<Node>> = Vec::new();
        stack.extend(self.dot.take());
        stack.extend(self.dash.take());
        while let Some(mut node) = stack.pop() {
            stack.extend(node.dot.take());
            stack.extend(node.dash.take());
        }
    }
}

impl Clone for Node {
    fn clone(&self) -> Self {
        // Pre-order listing: every child lands after its parent, so building
        // in reverse always finds the children already cloned.
        let mut order: Vec<&Node> = Vec::new();
        let mut links: Vec<[Option<usize>; 2]> = Vec::new();
        let mut stack: Vec<(&Node, Option<(usize, usize)>)> = vec![(self, None)];
        while let Some((node, parent)) = stack.pop() {
            let idx = order.len();
            order.push(node);
            links.push([None, None]);
            if let Some((parent_idx, slot)) = parent {
                links[parent_idx][slot] = Some(idx);
            }
            if let Some(child) = node.dash.as_deref() {
                stack.push((child, Some((idx, 1))));
            }
            if let Some(child) = node.dot.as_deref() {
                stack.push((child, Some((idx, 0))));
            }
        }

        let mut built: Vec<Option<Node>> = (0..order.len()).map(|_| None).collect();
        for idx in (0..order.len()).rev() {
            let [dot, dash] = links[idx];
            let node = Node {
                value: order[idx].value,
                dot: dot.and_then(|c| built[c].take()).map(Box::new),
                dash: dash.and_then(|c| built[c].take()).map(Box::new),
            };
            built[idx] = Some(node);
        }
        built[0].take().unwrap_or_default()
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self, other)];
        while let Some((a, b)) = stack.pop() {
            if a.value != b.value {
                return false;
            }
            for signal in [Signal::Dot, Signal::Dash] {
                match (a.child(signal), b.child(signal)) {
                    (Some(x), Some(y)) => stack.push((x, y)),
                    (None, None) => {}
                    _ => return false,
                }
            }
        }
        true
    }
}

impl Eq for Node {}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("value", &self.value)
            .field("dot", &self.dot.is_some())
            .field("dash", &self.dash.is_some())
            .finish()
    }
}
