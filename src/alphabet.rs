use crate::CodeTrie;

/// International Morse codes for `A`–`Z` and `1`–`9`, `0`.
pub const STANDARD_ALPHABET: [(&str, char); 36] = [
    (".-", 'A'),
    ("-...", 'B'),
    ("-.-.", 'C'),
    ("-..", 'D'),
    (".", 'E'),
    ("..-.", 'F'),
    ("--.", 'G'),
    ("....", 'H'),
    ("..", 'I'),
    (".---", 'J'),
    ("-.-", 'K'),
    (".-..", 'L'),
    ("--", 'M'),
    ("-.", 'N'),
    ("---", 'O'),
    (".--.", 'P'),
    ("--.-", 'Q'),
    (".-.", 'R'),
    ("...", 'S'),
    ("-", 'T'),
    ("..-", 'U'),
    ("...-", 'V'),
    (".--", 'W'),
    ("-..-", 'X'),
    ("-.--", 'Y'),
    ("--..", 'Z'),
    (".----", '1'),
    ("..---", '2'),
    ("...--", '3'),
    ("....-", '4'),
    (".....", '5'),
    ("-....", '6'),
    ("--...", '7'),
    ("---..", '8'),
    ("----.", '9'),
    ("-----", '0'),
];

impl CodeTrie {
    /// Builds a trie holding [`STANDARD_ALPHABET`].
    pub fn standard() -> Self {
        let mut trie = Self::new();
        trie.load_standard();
        trie
    }

    /// Resets the trie, then inserts [`STANDARD_ALPHABET`].
    pub fn load_standard(&mut self) {
        self.clear();
        self.extend(STANDARD_ALPHABET);
        tracing::debug!(
            num_nodes = self.num_nodes,
            len = self.len,
            "loaded standard alphabet"
        );
    }
}
