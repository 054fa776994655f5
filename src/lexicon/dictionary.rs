use crate::error::{LexiscoreError, Result};
use std::collections::HashSet;
use std::path::Path;

/// Case-insensitive membership test for natural-language words.
pub trait WordLookup {
    fn contains_word(&self, word: &str) -> bool;
}

#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    /// Loads a newline-delimited word list.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            LexiscoreError::DictionaryNotFound(format!("{}: {}", path.display(), e))
        })?;
        let dictionary = Self::from_words(content.lines());
        tracing::info!(path = %path.display(), words = dictionary.len(), "dictionary loaded");
        Ok(dictionary)
    }

    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|word| word.as_ref().trim().to_lowercase())
                .filter(|word| !word.is_empty())
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordLookup for Dictionary {
    fn contains_word(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }
}
