//! Prefix trie over IPA symbols for greedy longest-match tokenization.
use std::collections::HashMap;

/// A simple trie storing the multi-code-point symbols the tokenizer knows.
///
/// The tokenizer walks it from each input position and keeps the longest
/// symbol found, so `t͡ɕ` wins over `t` and `ɡʲ` over `ɡ`.
///
/// # Example
/// ```
/// use minpair_core::trie::SymbolTrie;
///
/// let mut trie = SymbolTrie::new();
/// trie.insert("t");
/// trie.insert("ts");
///
/// let input: Vec<char> = "tsa".chars().collect();
/// assert_eq!(trie.longest_match(&input, 0), Some((2, "ts")));
/// assert_eq!(trie.longest_match(&input, 2), None);
/// ```
#[derive(Debug, Default)]
pub struct SymbolTrie {
    children: HashMap<char, Box<SymbolTrie>>,
    /// Set when a symbol ends at this node.
    symbol: Option<String>,
}

impl SymbolTrie {
    pub fn new() -> Self {
        Self {
            children: HashMap::new(),
            symbol: None,
        }
    }

    /// Build a trie holding every symbol in `symbols`.
    pub fn from_symbols<S: AsRef<str>>(symbols: &[S]) -> Self {
        let mut trie = Self::new();
        for symbol in symbols {
            trie.insert(symbol.as_ref());
        }
        trie
    }

    /// Insert a symbol. Empty strings are ignored.
    pub fn insert(&mut self, symbol: &str) {
        if symbol.is_empty() {
            return;
        }
        let mut node = self;
        for ch in symbol.chars() {
            node = node
                .children
                .entry(ch)
                .or_insert_with(|| Box::new(SymbolTrie::new()));
        }
        node.symbol = Some(symbol.to_string());
    }

    /// True only if `symbol` was inserted as a whole, not merely as a prefix.
    pub fn contains(&self, symbol: &str) -> bool {
        let mut node = self;
        for ch in symbol.chars() {
            match node.children.get(&ch) {
                Some(child) => node = child,
                None => return false,
            }
        }
        node.symbol.is_some()
    }

    /// Walk the trie from `start` and return every symbol matched on the way.
    ///
    /// Each entry is `(end, symbol)` where `end` is the exclusive character
    /// index after the match. Results are ordered by increasing length.
    pub fn walk_prefixes(&self, input: &[char], start: usize) -> Vec<(usize, &str)> {
        let mut res = Vec::new();
        let mut node = self;
        let mut idx = start;
        while idx < input.len() {
            match node.children.get(&input[idx]) {
                Some(child) => {
                    node = child;
                    idx += 1;
                    if let Some(symbol) = &node.symbol {
                        res.push((idx, symbol.as_str()));
                    }
                }
                None => break,
            }
        }
        res
    }

    /// Longest symbol starting at `start`, if any.
    pub fn longest_match(&self, input: &[char], start: usize) -> Option<(usize, &str)> {
        self.walk_prefixes(input, start).pop()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }
}
