pub mod dictionary;
pub mod tagger;

pub use dictionary::{Dictionary, WordLookup};
pub use tagger::{LexiconTagger, SentenceAnalyzer};
