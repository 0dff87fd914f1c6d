use crate::utils::error::{Result, ToolkitError};
use serde::Serialize;
use std::collections::{HashMap, HashSet};

pub const DEFAULT_DICTIONARY: [&str; 43] = [
    "act", "ant", "art", "bat", "bet", "boss", "cat", "cap", "cop", "dear", "dog", "dip", "ear",
    "end", "eel", "fad", "fat", "fog", "gap", "god", "hat", "hit", "hot", "ink", "irk", "jot",
    "jab", "lap", "lip", "lot", "man", "nan", "nat", "net", "pat", "pet", "tap", "tar", "ten",
    "rat", "woo", "yoo", "zoo",
];

/// Characters of `word` in code point order.
pub fn signature(word: &str) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    chars.sort_unstable();
    chars.into_iter().collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordSignature {
    pub word: String,
    pub signature: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnagramGroup {
    pub key: String,
    pub words: Vec<String>,
}

/// Words grouped by signature, keeping only signatures that are dictionary words.
#[derive(Debug, Clone)]
pub struct AnagramIndex {
    signatures: Vec<WordSignature>,
    groups: Vec<AnagramGroup>,
    group_positions: HashMap<String, usize>,
}

impl AnagramIndex {
    pub fn build<I, W>(words: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<String>,
    {
        let mut members = HashSet::new();
        let mut signatures = Vec::new();
        for word in words {
            let word = word.into();
            if members.insert(word.clone()) {
                let signature = signature(&word);
                signatures.push(WordSignature { word, signature });
            }
        }

        let mut groups: Vec<AnagramGroup> = Vec::new();
        let mut group_positions = HashMap::new();
        for pair in &signatures {
            if !members.contains(&pair.signature) {
                continue;
            }
            let position = *group_positions
                .entry(pair.signature.clone())
                .or_insert_with(|| {
                    groups.push(AnagramGroup {
                        key: pair.signature.clone(),
                        words: Vec::new(),
                    });
                    groups.len() - 1
                });
            groups[position].words.push(pair.word.clone());
        }

        tracing::debug!(
            "Indexed {} words into {} anagram groups",
            signatures.len(),
            groups.len()
        );

        Self {
            signatures,
            groups,
            group_positions,
        }
    }

    pub fn signatures(&self) -> &[WordSignature] {
        &self.signatures
    }

    pub fn groups(&self) -> &[AnagramGroup] {
        &self.groups
    }

    pub fn group(&self, key: &str) -> Option<&AnagramGroup> {
        self.group_positions.get(key).map(|&i| &self.groups[i])
    }

    /// Other dictionary words sharing `word`'s signature, whether or not
    /// that signature is itself a dictionary word.
    pub fn anagrams_of(&self, word: &str) -> Vec<&str> {
        let target = signature(word);
        self.signatures
            .iter()
            .filter(|pair| pair.signature == target && pair.word != word)
            .map(|pair| pair.word.as_str())
            .collect()
    }
}

impl Default for AnagramIndex {
    fn default() -> Self {
        Self::build(DEFAULT_DICTIONARY)
    }
}

/// Whitespace-separated words, in file order.
pub fn load_dictionary(text: &str) -> Result<Vec<String>> {
    let words: Vec<String> = text.split_whitespace().map(str::to_string).collect();
    if words.is_empty() {
        return Err(ToolkitError::ValidationError {
            message: "dictionary contains no words".to_string(),
        });
    }
    Ok(words)
}

pub fn render_report(index: &AnagramIndex) -> String {
    let mut lines = vec!["---------- Signatures ----------".to_string()];
    lines.extend(
        index
            .signatures()
            .iter()
            .map(|pair| format!("{} {}", pair.word, pair.signature)),
    );

    lines.push("---------- Anagram groups ----------".to_string());
    lines.extend(
        index
            .groups()
            .iter()
            .map(|group| format!("{}: {}", group.key, group.words.join(", "))),
    );

    lines.join("\n") + "\n"
}
