//! Lexicon-driven part-of-speech tagging for comment sentences.
//!
//! Closed word classes come from lists. Open classes come from lists plus
//! suffix rules. Words that are both nouns and verbs ("returns", "set",
//! "update") are resolved from the previous tag.

use crate::error::{LexiscoreError, Result};
use regex::Regex;
use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use std::sync::LazyLock;

const BUILTIN_MODEL: &str = include_str!("../../assets/lexicon.toml");

static WORD_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\w+(?:['’-]\w+)*|[^\w\s]").expect("word token pattern is valid")
});

static SENTENCE_END: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[.!?]+["')\]]*(?:\s+|$)"#).expect("sentence end pattern is valid")
});

/// Sentence segmentation and per-sentence grammatical signals.
pub trait SentenceAnalyzer {
    fn sentences(&self, text: &str) -> Vec<String>;
    fn has_noun_phrase(&self, sentence: &str) -> bool;
    fn has_verb(&self, sentence: &str) -> bool;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pos {
    Noun,
    ProperNoun,
    Pronoun,
    Verb,
    Aux,
    Adj,
    Adv,
    Det,
    Adp,
    Conj,
    Num,
    Punct,
}

impl Pos {
    fn heads_noun_phrase(self) -> bool {
        matches!(self, Pos::Noun | Pos::ProperNoun | Pos::Pronoun)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    pub text: String,
    pub pos: Pos,
}

#[derive(Debug, Default, Deserialize)]
struct LexiconModel {
    #[serde(default)]
    abbreviations: Vec<String>,
    #[serde(default)]
    determiners: Vec<String>,
    #[serde(default)]
    pronouns: Vec<String>,
    #[serde(default)]
    prepositions: Vec<String>,
    #[serde(default)]
    conjunctions: Vec<String>,
    #[serde(default)]
    auxiliaries: Vec<String>,
    #[serde(default)]
    adverbs: Vec<String>,
    #[serde(default)]
    adjectives: Vec<String>,
    #[serde(default)]
    verbs: Vec<String>,
    #[serde(default)]
    nouns: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct LexiconTagger {
    abbreviations: HashSet<String>,
    determiners: HashSet<String>,
    pronouns: HashSet<String>,
    prepositions: HashSet<String>,
    conjunctions: HashSet<String>,
    auxiliaries: HashSet<String>,
    adverbs: HashSet<String>,
    adjectives: HashSet<String>,
    verbs: HashSet<String>,
    nouns: HashSet<String>,
}

fn word_set(words: Vec<String>) -> HashSet<String> {
    words.into_iter().map(|word| word.to_lowercase()).collect()
}

impl LexiconTagger {
    pub fn builtin() -> Result<Self> {
        Self::from_toml(BUILTIN_MODEL)
            .map_err(|e| LexiscoreError::ModelLoad(format!("built-in lexicon: {e}")))
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| LexiscoreError::ModelLoad(format!("{}: {}", path.display(), e)))?;
        let tagger = Self::from_toml(&content)
            .map_err(|e| LexiscoreError::ModelLoad(format!("{}: {}", path.display(), e)))?;
        tracing::info!(path = %path.display(), "language model loaded");
        Ok(tagger)
    }

    pub fn from_toml(content: &str) -> std::result::Result<Self, toml::de::Error> {
        let model: LexiconModel = toml::from_str(content)?;
        Ok(Self {
            abbreviations: word_set(model.abbreviations),
            determiners: word_set(model.determiners),
            pronouns: word_set(model.pronouns),
            prepositions: word_set(model.prepositions),
            conjunctions: word_set(model.conjunctions),
            auxiliaries: word_set(model.auxiliaries),
            adverbs: word_set(model.adverbs),
            adjectives: word_set(model.adjectives),
            verbs: word_set(model.verbs),
            nouns: word_set(model.nouns),
        })
    }

    pub fn tag(&self, sentence: &str) -> Vec<TaggedToken> {
        let mut tagged: Vec<TaggedToken> = Vec::new();
        for token in WORD_TOKEN.find_iter(sentence) {
            let text = token.as_str();
            let previous = tagged.last();
            let pos = self.tag_word(text, previous, tagged.is_empty());
            tagged.push(TaggedToken {
                text: text.to_string(),
                pos,
            });
        }
        tagged
    }

    fn tag_word(&self, text: &str, previous: Option<&TaggedToken>, initial: bool) -> Pos {
        if !text.chars().any(char::is_alphanumeric) {
            return Pos::Punct;
        }
        if text.chars().all(|c| c.is_ascii_digit() || c == '-') {
            return Pos::Num;
        }

        let lower = text.to_lowercase();
        if let Some(pos) = self.closed_class(&lower) {
            return pos;
        }
        if let Some(pos) = self.open_class(&lower, previous) {
            return pos;
        }
        if let Some(pos) = self.inflected(&lower, previous) {
            return pos;
        }
        if !initial && text.chars().next().is_some_and(char::is_uppercase) {
            return Pos::ProperNoun;
        }
        suffix_guess(&lower, previous)
    }

    fn closed_class(&self, lower: &str) -> Option<Pos> {
        if self.determiners.contains(lower) {
            Some(Pos::Det)
        } else if self.pronouns.contains(lower) {
            Some(Pos::Pronoun)
        } else if self.auxiliaries.contains(lower) {
            Some(Pos::Aux)
        } else if self.prepositions.contains(lower) {
            Some(Pos::Adp)
        } else if self.conjunctions.contains(lower) {
            Some(Pos::Conj)
        } else {
            None
        }
    }

    fn open_class(&self, lower: &str, previous: Option<&TaggedToken>) -> Option<Pos> {
        let is_verb = self.verbs.contains(lower);
        let is_noun = self.nouns.contains(lower);
        let is_adjective = self.adjectives.contains(lower);

        if is_verb && is_noun {
            return Some(resolve_noun_or_verb(previous));
        }
        if is_verb {
            if is_adjective && follows_modifier(previous) {
                return Some(Pos::Adj);
            }
            return Some(Pos::Verb);
        }
        if is_noun {
            return Some(Pos::Noun);
        }
        if is_adjective {
            return Some(Pos::Adj);
        }
        if self.adverbs.contains(lower) {
            return Some(Pos::Adv);
        }
        None
    }

    /// Tags regular inflections ("returns", "computed", "splitting") of listed words.
    fn inflected(&self, lower: &str, previous: Option<&TaggedToken>) -> Option<Pos> {
        for base in plural_or_third_person_bases(lower) {
            let is_verb = self.verbs.contains(&base);
            let is_noun = self.nouns.contains(&base);
            match (is_verb, is_noun) {
                (true, true) => return Some(resolve_noun_or_verb(previous)),
                (true, false) => return Some(Pos::Verb),
                (false, true) => return Some(Pos::Noun),
                (false, false) => {}
            }
        }
        for base in participle_bases(lower) {
            if self.verbs.contains(&base) {
                if follows_modifier(previous) {
                    return Some(Pos::Adj);
                }
                return Some(Pos::Verb);
            }
        }
        None
    }

    fn ends_with_abbreviation(&self, candidate: &str) -> bool {
        candidate
            .split_whitespace()
            .last()
            .is_some_and(|word| self.abbreviations.contains(&word.to_lowercase()))
    }

    /// A lowercase content word after which a capitalized word opens a new sentence.
    fn ends_clause(&self, word: &str) -> bool {
        if !word.chars().next().is_some_and(char::is_lowercase) {
            return false;
        }
        let lower = word.to_lowercase();
        !(self.determiners.contains(&lower)
            || self.prepositions.contains(&lower)
            || self.conjunctions.contains(&lower)
            || self.auxiliaries.contains(&lower))
    }

    /// Splits an unpunctuated run, such as joined comment lines, at capitalized
    /// words that follow a clause-ending word.
    fn push_clauses(&self, sentences: &mut Vec<String>, chunk: &str) {
        let mut start = 0;
        let mut previous: Option<&str> = None;
        for token in WORD_TOKEN.find_iter(chunk) {
            let word = token.as_str();
            if previous.is_some_and(|prev| self.ends_clause(prev)) && opens_sentence(word) {
                push_sentence(sentences, &chunk[start..token.start()]);
                start = token.start();
            }
            previous = Some(word);
        }
        push_sentence(sentences, &chunk[start..]);
    }
}

impl SentenceAnalyzer for LexiconTagger {
    fn sentences(&self, text: &str) -> Vec<String> {
        let mut sentences = Vec::new();
        let mut start = 0;
        for boundary in SENTENCE_END.find_iter(text) {
            let candidate = &text[start..boundary.end()];
            // "e.g. a list" continues the sentence; "max. Return" does not.
            let next_word = text[boundary.end()..].split_whitespace().next();
            if self.ends_with_abbreviation(candidate) && !next_word.is_some_and(opens_sentence) {
                continue;
            }
            self.push_clauses(&mut sentences, candidate);
            start = boundary.end();
        }
        self.push_clauses(&mut sentences, &text[start..]);
        sentences
    }

    fn has_noun_phrase(&self, sentence: &str) -> bool {
        self.tag(sentence)
            .iter()
            .any(|token| token.pos.heads_noun_phrase())
    }

    fn has_verb(&self, sentence: &str) -> bool {
        self.tag(sentence).iter().any(|token| token.pos == Pos::Verb)
    }
}

fn opens_sentence(word: &str) -> bool {
    let pronoun_i = word == "I" || word.starts_with("I'") || word.starts_with("I’");
    !pronoun_i && word.chars().next().is_some_and(char::is_uppercase)
}

fn push_sentence(sentences: &mut Vec<String>, candidate: &str) {
    let trimmed = candidate.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}

fn follows_modifier(previous: Option<&TaggedToken>) -> bool {
    matches!(previous.map(|token| token.pos), Some(Pos::Det | Pos::Adj))
}

fn resolve_noun_or_verb(previous: Option<&TaggedToken>) -> Pos {
    let Some(previous) = previous else {
        return Pos::Verb;
    };
    if previous.text.eq_ignore_ascii_case("to") {
        return Pos::Verb;
    }
    match previous.pos {
        Pos::Pronoun
        | Pos::Noun
        | Pos::ProperNoun
        | Pos::Aux
        | Pos::Adv
        | Pos::Conj
        | Pos::Punct => Pos::Verb,
        _ => Pos::Noun,
    }
}

fn plural_or_third_person_bases(lower: &str) -> Vec<String> {
    let mut bases = Vec::new();
    if let Some(stem) = lower.strip_suffix("ies") {
        bases.push(format!("{stem}y"));
    }
    if let Some(stem) = lower.strip_suffix("es") {
        bases.push(stem.to_string());
    }
    if let Some(stem) = lower.strip_suffix('s') {
        if !stem.ends_with('s') {
            bases.push(stem.to_string());
        }
    }
    bases
}

fn participle_bases(lower: &str) -> Vec<String> {
    let mut bases = Vec::new();
    for suffix in ["ing", "ed"] {
        let Some(stem) = lower.strip_suffix(suffix) else {
            continue;
        };
        if stem.len() < 2 {
            continue;
        }
        bases.push(stem.to_string());
        bases.push(format!("{stem}e"));
        let mut chars = stem.chars().rev();
        if let (Some(last), Some(before)) = (chars.next(), chars.next()) {
            if last == before {
                bases.push(stem[..stem.len() - last.len_utf8()].to_string());
            }
        }
        if suffix == "ed" {
            if let Some(root) = stem.strip_suffix('i') {
                bases.push(format!("{root}y"));
            }
        }
    }
    bases
}

fn suffix_guess(lower: &str, previous: Option<&TaggedToken>) -> Pos {
    const ADVERB: &[&str] = &["ly"];
    const VERB: &[&str] = &["ize", "ise", "ify", "ing", "ed"];
    const ADJECTIVE: &[&str] = &["ous", "ful", "ive", "able", "ible", "less", "ical", "ic"];

    let ends_with_any = |suffixes: &[&str]| suffixes.iter().any(|suffix| lower.ends_with(suffix));
    if ends_with_any(ADVERB) {
        Pos::Adv
    } else if ends_with_any(ADJECTIVE) {
        Pos::Adj
    } else if ends_with_any(VERB) {
        if follows_modifier(previous) {
            Pos::Adj
        } else {
            Pos::Verb
        }
    } else {
        Pos::Noun
    }
}
