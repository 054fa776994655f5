pub mod classify;

use crate::types::config::LanguageConfig;
use classify::{classify, LineKind};
use indexmap::IndexSet;

/// The three corpora gathered from one file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Symbols {
    /// Assigned names, first occurrence wins.
    pub identifiers: IndexSet<String>,
    /// Defined function names, every definition kept.
    pub functions: Vec<String>,
    pub comments: String,
}

pub fn extract<S: AsRef<str>>(lines: &[S], language: &LanguageConfig) -> Symbols {
    let mut symbols = Symbols::default();
    for line in lines {
        let tokens: Vec<&str> = line.as_ref().split_whitespace().collect();
        match classify(&tokens, language) {
            LineKind::Assignment(name) => {
                if !symbols.identifiers.contains(name) {
                    symbols.identifiers.insert(name.to_string());
                }
            }
            LineKind::FunctionDef(name) => symbols.functions.push(name.to_string()),
            LineKind::Comment(words) => {
                symbols.comments.push_str(&words.join(" "));
                symbols.comments.push(' ');
            }
            LineKind::Other => {}
        }
    }
    symbols
}
