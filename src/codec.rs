use std::collections::HashMap;

use crate::{CodeTrie, MorseError, Result};

/// Options for [`CodeTrie::decode_message_with`] and
/// [`CodeTrie::encode_message_with`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeOptions {
    /// Character separating code tokens. Defaults to `' '`.
    pub separator: char,
    /// Character emitted for a token that decodes to nothing. Defaults to `'?'`.
    pub placeholder: char,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            separator: ' ',
            placeholder: '?',
        }
    }
}

impl CodeTrie {
    /// Decodes a message of space-separated codes using default options.
    ///
    /// ```
    /// use morse_trie::CodeTrie;
    ///
    /// let trie = CodeTrie::standard();
    /// assert_eq!(trie.decode_message("... --- ..."), "SOS");
    /// assert_eq!(trie.decode_message(".......   ."), "? E");
    /// ```
    pub fn decode_message(&self, text: &str) -> String {
        self.decode_message_with(text, &DecodeOptions::default())
    }

    /// Decodes a message of separator-delimited codes.
    ///
    /// Each token is resolved with [`lookup`](Self::lookup); tokens that
    /// resolve to nothing become `options.placeholder`. A separator met with
    /// an empty token buffer emits a space only if the next character is a
    /// separator too. Two separators in a row therefore emit nothing, three
    /// emit one space, and every further separator adds one more.
    pub fn decode_message_with(&self, text: &str, options: &DecodeOptions) -> String {
        let mut out = String::new();
        let mut token = String::new();
        let mut chars = text.chars().peekable();

        while let Some(ch) = chars.next() {
            if ch != options.separator {
                token.push(ch);
            } else if !token.is_empty() {
                out.push(self.lookup(&token).unwrap_or(options.placeholder));
                token.clear();
            } else if chars.peek() == Some(&options.separator) {
                out.push(' ');
            }
        }
        if !token.is_empty() {
            out.push(self.lookup(&token).unwrap_or(options.placeholder));
        }
        out
    }

    /// Encodes plain text into space-separated codes using default options.
    pub fn encode_message(&self, text: &str) -> Result<String> {
        self.encode_message_with(text, &DecodeOptions::default())
    }

    /// Encodes plain text into separator-delimited codes.
    ///
    /// The output decodes back to `text`. Adjacent symbols are joined by one
    /// separator. A run of `k` spaces is written as `k + 2` separators when it
    /// follows a symbol and as `k + 1` separators at the start of the text.
    ///
    /// # Errors
    ///
    /// Returns [`MorseError::UnknownSymbol`] for a character no node holds and
    /// [`MorseError::EmptyCode`] for a character stored at the root.
    pub fn encode_message_with(&self, text: &str, options: &DecodeOptions) -> Result<String> {
        let mut codes: HashMap<char, String> = HashMap::new();
        if !text.is_empty() {
            // first occurrence wins, matching lookup_code
            for entry in self.paths() {
                codes.entry(entry.symbol).or_insert(entry.code);
            }
        }

        let mut out = String::new();
        let mut spaces = 0usize;
        let mut after_symbol = false;
        for ch in text.chars() {
            if ch == ' ' {
                spaces += 1;
                continue;
            }
            let code = match codes.get(&ch) {
                None => return Err(MorseError::UnknownSymbol(ch)),
                Some(code) if code.is_empty() => return Err(MorseError::EmptyCode(ch)),
                Some(code) => code,
            };
            push_gap(&mut out, options.separator, spaces, after_symbol);
            out.push_str(code);
            spaces = 0;
            after_symbol = true;
        }
        if spaces > 0 {
            push_gap(&mut out, options.separator, spaces, after_symbol);
        }
        Ok(out)
    }
}

/// Writes the separators that decode to `spaces` spaces at this position.
fn push_gap(out: &mut String, separator: char, spaces: usize, after_symbol: bool) {
    let count = match (spaces, after_symbol) {
        (0, false) => 0,
        (0, true) => 1,
        (k, false) => k + 1,
        (k, true) => k + 2,
    };
    out.extend(std::iter::repeat_n(separator, count));
}

#[cfg(test)]
mod tests {
    use super::*;

    // === decode tests ===

    #[test]
    fn decode_sos() {
        let trie = CodeTrie::standard();
        assert_eq!(trie.decode_message("... --- ..."), "SOS");
    }

    #[test]
    fn decode_unknown_token() {
        let trie = CodeTrie::standard();
        assert_eq!(trie.decode_message("......."), "?");
        assert_eq!(trie.decode_message("... ..-- ..."), "S?S");
    }

    #[test]
    fn decode_malformed_token() {
        let trie = CodeTrie::standard();
        assert_eq!(trie.decode_message(".-x -"), "?T");
        // only the space character separates tokens
        assert_eq!(trie.decode_message(".-\t-"), "?");
    }

    #[test]
    fn decode_empty() {
        let trie = CodeTrie::standard();
        assert_eq!(trie.decode_message(""), "");
        assert_eq!(trie.decode_message(" "), "");
        assert_eq!(CodeTrie::new().decode_message("... ---"), "??");
    }

    #[test]
    fn decode_two_spaces_emit_nothing() {
        let trie = CodeTrie::standard();
        assert_eq!(trie.decode_message("...  ---"), "SO");
    }

    #[test]
    fn decode_three_spaces_emit_one() {
        let trie = CodeTrie::standard();
        assert_eq!(trie.decode_message("...   ---"), "S O");
        assert_eq!(trie.decode_message(".... ..   - .... . .-. ."), "HI THERE");
    }

    #[test]
    fn decode_longer_runs_emit_per_pair() {
        let trie = CodeTrie::standard();
        assert_eq!(trie.decode_message("...    ---"), "S  O");
        assert_eq!(trie.decode_message("...     ---"), "S   O");
    }

    #[test]
    fn decode_leading_and_trailing_spaces() {
        let trie = CodeTrie::standard();
        assert_eq!(trie.decode_message("  ..."), " S");
        assert_eq!(trie.decode_message(" ..."), "S");
        assert_eq!(trie.decode_message("...  "), "S");
        assert_eq!(trie.decode_message("...   "), "S ");
    }

    #[test]
    fn decode_with_options() {
        let trie = CodeTrie::standard();
        let options = DecodeOptions {
            separator: '/',
            placeholder: '*',
        };
        assert_eq!(
            trie.decode_message_with("...././.-../.--.///---/.......", &options),
            "HELP O*"
        );
    }

    // === encode tests ===

    #[test]
    fn encode_sos() {
        let trie = CodeTrie::standard();
        assert_eq!(trie.encode_message("SOS").as_deref(), Ok("... --- ..."));
    }

    #[test]
    fn encode_word_gap() {
        let trie = CodeTrie::standard();
        assert_eq!(trie.encode_message("E T").as_deref(), Ok(".   -"));
    }

    #[test]
    fn encode_decode_message() {
        let trie = CodeTrie::standard();
        let text = "HELLO WORLD 2026";
        let encoded = trie.encode_message(text).unwrap();
        assert_eq!(trie.decode_message(&encoded), text);
    }

    #[test]
    fn encode_space_runs() {
        let trie = CodeTrie::standard();
        assert_eq!(trie.encode_message("E  T").as_deref(), Ok(".    -"));
        assert_eq!(trie.encode_message("E ").as_deref(), Ok(".   "));
        assert_eq!(trie.encode_message(" E").as_deref(), Ok("  ."));
        assert_eq!(trie.encode_message(" ").as_deref(), Ok("  "));
    }

    #[test]
    fn encode_decode_with_space_runs() {
        let trie = CodeTrie::standard();
        for text in [
            "E  T",
            "E ",
            " E",
            "  SOS   SOS  ",
            " ",
            "   ",
            "A B  C   D",
        ] {
            let encoded = trie.encode_message(text).unwrap();
            assert_eq!(trie.decode_message(&encoded), text, "encoded as {encoded:?}");
        }
    }

    #[test]
    fn encode_decode_custom_separator() {
        let trie = CodeTrie::standard();
        let options = DecodeOptions {
            separator: '/',
            placeholder: '*',
        };
        let text = " HELP  ME ";
        let encoded = trie.encode_message_with(text, &options).unwrap();
        assert!(!encoded.contains(' '));
        assert_eq!(trie.decode_message_with(&encoded, &options), text);
    }

    #[test]
    fn encode_unknown_symbol() {
        let trie = CodeTrie::standard();
        assert_eq!(
            trie.encode_message("Hi"),
            Err(MorseError::UnknownSymbol('i'))
        );
    }

    #[test]
    fn encode_root_symbol() {
        let mut trie = CodeTrie::standard();
        trie.insert("", '#');
        assert_eq!(trie.encode_message("A#"), Err(MorseError::EmptyCode('#')));
    }

    #[test]
    fn encode_empty() {
        assert_eq!(CodeTrie::new().encode_message("").as_deref(), Ok(""));
    }
}
