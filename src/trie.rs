use crate::{CodeTrie, Result, Signal};

impl CodeTrie {
    /// Resets the trie to a single empty root, releasing every other node.
    pub fn clear(&mut self) {
        tracing::debug!(
            num_nodes = self.num_nodes,
            len = self.len,
            "resetting code trie"
        );
        *self = Self::new();
    }

    /// Stores `symbol` at the node reached by `code`, creating missing nodes
    /// along the way. An empty code stores the symbol at the root.
    ///
    /// Characters other than `.` and `-` are skipped without advancing, so
    /// `insert("a.b-c", 'X')` behaves like `insert(".-", 'X')`. Use
    /// [`try_insert`](Self::try_insert) to reject such codes instead.
    ///
    /// Returns the symbol previously stored at that code.
    pub fn insert(&mut self, code: &str, symbol: char) -> Option<char> {
        let signals = code.chars().enumerate().filter_map(|(pos, ch)| {
            let signal = Signal::from_char(ch);
            if signal.is_none() {
                tracing::debug!(code, pos, ch = %ch, "skipping non-signal character");
            }
            signal
        });
        self.insert_signals(signals, symbol)
    }

    /// Like [`insert`](Self::insert), but fails on the first character that is
    /// not a signal. The trie is left untouched on error.
    pub fn try_insert(&mut self, code: &str, symbol: char) -> Result<Option<char>> {
        let signals = Signal::parse_code(code)?;
        Ok(self.insert_signals(signals, symbol))
    }

    fn insert_signals(
        &mut self,
        signals: impl IntoIterator<Item = Signal>,
        symbol: char,
    ) -> Option<char> {
        let mut node = &mut self.root;
        let mut created = 0usize;
        for signal in signals {
            let (child, new) = node.child_or_insert(signal);
            created += usize::from(new);
            node = child;
        }
        let previous = node.set_value(symbol);

        self.num_nodes += created;
        if previous.is_none() {
            self.len += 1;
        }
        tracing::trace!(symbol = %symbol, created, replaced = ?previous, "inserted symbol");
        previous
    }

    /// Clears the symbol stored at `code`, keeping the path in place.
    ///
    /// The walk fails fast like [`lookup`](Self::lookup): a missing child or a
    /// non-signal character makes this a no-op. Returns the removed symbol.
    pub fn remove(&mut self, code: &str) -> Option<char> {
        let removed = self.traverse_mut(code)?.take_value();
        if let Some(symbol) = removed {
            self.len -= 1;
            tracing::trace!(code, symbol = %symbol, "removed symbol");
        }
        removed
    }
}

impl<'a> Extend<(&'a str, char)> for CodeTrie {
    fn extend<I: IntoIterator<Item = (&'a str, char)>>(&mut self, iter: I) {
        for (code, symbol) in iter {
            self.insert(code, symbol);
        }
    }
}

impl<'a> FromIterator<(&'a str, char)> for CodeTrie {
    fn from_iter<I: IntoIterator<Item = (&'a str, char)>>(iter: I) -> Self {
        let mut trie = CodeTrie::new();
        trie.extend(iter);
        trie
    }
}
