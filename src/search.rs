use crate::{CodeTrie, Node, Signal};

impl CodeTrie {
    /// Walks from the root following `code`.
    /// Returns None on the first missing child or non-signal character.
    pub(crate) fn traverse(&self, code: &str) -> Option<&Node> {
        let mut node = &self.root;
        for ch in code.chars() {
            node = node.child(Signal::from_char(ch)?)?;
        }
        Some(node)
    }

    pub(crate) fn traverse_mut(&mut self, code: &str) -> Option<&mut Node> {
        let mut node = &mut self.root;
        for ch in code.chars() {
            node = node.child_mut(Signal::from_char(ch)?)?;
        }
        Some(node)
    }

    /// Returns the symbol stored at `code`.
    ///
    /// Returns `None` if the path does not exist, if `code` contains a
    /// character other than `.` or `-`, or if no symbol is stored there.
    pub fn lookup(&self, code: &str) -> Option<char> {
        self.traverse(code)?.value()
    }

    /// Returns true if a node exists at `code`, whether or not it holds a symbol.
    pub fn contains_code(&self, code: &str) -> bool {
        self.traverse(code).is_some()
    }

    /// Reverse lookup. Returns the code of the first node holding `symbol`.
    ///
    /// Nodes are visited in pre-order with the dot branch before the dash
    /// branch, so when a symbol is stored more than once the shallowest,
    /// leftmost occurrence wins. A symbol stored at the root yields
    /// `Some("")`.
    pub fn lookup_code(&self, symbol: char) -> Option<String> {
        // Same walk as `Paths`, but the shared buffer is only handed out on a match.
        let mut code = String::new();
        let mut stack: Vec<(&Node, usize, Option<Signal>)> = vec![(&self.root, 0, None)];
        while let Some((node, parent_len, signal)) = stack.pop() {
            code.truncate(parent_len);
            if let Some(s) = signal {
                code.push(s.as_char());
            }
            if node.value() == Some(symbol) {
                return Some(code);
            }
            let len = code.len();
            for s in [Signal::Dash, Signal::Dot] {
                if let Some(child) = node.child(s) {
                    stack.push((child, len, Some(s)));
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use crate::{CodeTrie, STANDARD_ALPHABET};

    // === lookup tests ===

    #[test]
    fn lookup_empty_trie() {
        let trie = CodeTrie::new();
        assert_eq!(trie.lookup(""), None);
        assert_eq!(trie.lookup("."), None);
        assert_eq!(trie.lookup("-.-"), None);
    }

    #[test]
    fn lookup_standard_round_trip() {
        let trie = CodeTrie::standard();
        for (code, symbol) in STANDARD_ALPHABET {
            assert_eq!(
                trie.lookup(code),
                Some(symbol),
                "code {code:?} should map to {symbol:?}"
            );
        }
    }

    #[test]
    fn lookup_not_inserted() {
        let trie = CodeTrie::standard();
        assert_eq!(trie.lookup("......."), None);
        assert_eq!(trie.lookup("..--"), None); // path exists, no symbol
        assert_eq!(trie.lookup(""), None);
    }

    #[test]
    fn lookup_fails_fast_on_non_signal() {
        let mut trie = CodeTrie::new();
        trie.insert(".-", 'A');
        assert_eq!(trie.lookup(".x-"), None);
        assert_eq!(trie.lookup(".- "), None);
    }

    #[test]
    fn contains_code_ignores_value() {
        let mut trie = CodeTrie::new();
        trie.insert("...", 'S');
        assert!(trie.contains_code(""));
        assert!(trie.contains_code(".."));
        assert!(trie.contains_code("..."));
        assert!(!trie.contains_code("-"));
        assert!(!trie.contains_code(".?"));
    }

    // === lookup_code tests ===

    #[test]
    fn lookup_code_standard_inverse() {
        let trie = CodeTrie::standard();
        for (code, symbol) in STANDARD_ALPHABET {
            assert_eq!(trie.lookup_code(symbol).as_deref(), Some(code));
        }
    }

    #[test]
    fn lookup_code_not_found() {
        let trie = CodeTrie::standard();
        assert_eq!(trie.lookup_code('a'), None);
        assert_eq!(trie.lookup_code('@'), None);
        assert_eq!(CodeTrie::new().lookup_code('A'), None);
    }

    #[test]
    fn lookup_code_root_is_distinct_from_not_found() {
        let mut trie = CodeTrie::new();
        trie.insert("", '#');
        assert_eq!(trie.lookup_code('#').as_deref(), Some(""));
    }

    #[test]
    fn lookup_code_nul_symbol() {
        let mut trie = CodeTrie::new();
        trie.insert("-", '\0');
        assert_eq!(trie.lookup_code('\0').as_deref(), Some("-"));
    }

    #[test]
    fn lookup_code_prefers_dot_branch() {
        let mut trie = CodeTrie::new();
        trie.insert("-", 'X');
        trie.insert("...", 'X');
        // dot subtree is searched entirely before the shallower dash node
        assert_eq!(trie.lookup_code('X').as_deref(), Some("..."));
    }

    #[test]
    fn lookup_code_prefers_shallower_on_same_branch() {
        let mut trie = CodeTrie::new();
        trie.insert(".-.", 'X');
        trie.insert(".", 'X');
        assert_eq!(trie.lookup_code('X').as_deref(), Some("."));
    }

    #[test]
    fn lookup_code_matches_first_path_entry() {
        let mut trie = CodeTrie::standard();
        trie.insert("..--", 'E');
        trie.insert("-.-.-", 'A');
        for symbol in ['E', 'A', 'Q', '0'] {
            let first = trie.paths().find(|e| e.symbol == symbol).map(|e| e.code);
            assert_eq!(trie.lookup_code(symbol), first);
        }
    }

    #[test]
    fn lookup_code_after_remove() {
        let mut trie = CodeTrie::standard();
        trie.remove("...");
        assert_eq!(trie.lookup_code('S'), None);
    }
}
