use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::GtResult;

/// Ordered wordlist. File order is meaningful: suggestion ranking breaks
/// edit-distance ties by it.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    pub fn new(words: Vec<String>) -> Self {
        Self { words }
    }

    /// Loads a plain wordlist: one word per line, lowercased. Blank lines
    /// and `#` comments are skipped.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> GtResult<Self> {
        let content = fs::read_to_string(path)?;
        let words: Vec<String> = content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_lowercase)
            .collect();

        debug!(count = words.len(), "dictionary loaded");
        Ok(Self { words })
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }
}
