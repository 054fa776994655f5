use crate::types::config::LanguageConfig;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind<'a> {
    Assignment(&'a str),
    FunctionDef(&'a str),
    /// Words of the comment, marker-bearing tokens removed.
    Comment(Vec<&'a str>),
    Other,
}

/// Classifies one whitespace-tokenized line.
///
/// Comment wins over a function definition, which wins over an assignment.
/// Only the literal `=` token counts as assignment: `==`, `+=` and tuple
/// targets such as `a, b = 1, 2` fall through to `Other`.
pub fn classify<'a>(tokens: &[&'a str], language: &LanguageConfig) -> LineKind<'a> {
    if let Some(words) = comment_words(tokens, language) {
        return LineKind::Comment(words);
    }
    if let Some(name) = function_name(tokens, language) {
        return LineKind::FunctionDef(name);
    }
    if let Some(name) = assigned_name(tokens, language) {
        return LineKind::Assignment(name);
    }
    LineKind::Other
}

fn comment_words<'a>(tokens: &[&'a str], language: &LanguageConfig) -> Option<Vec<&'a str>> {
    let marker = language.comment_marker.as_str();
    let first = tokens.first()?;
    if marker.is_empty() || !first.starts_with(marker) {
        return None;
    }
    Some(
        tokens
            .iter()
            .copied()
            .filter(|token| !token.contains(marker))
            .collect(),
    )
}

fn function_name<'a>(tokens: &[&'a str], language: &LanguageConfig) -> Option<&'a str> {
    match tokens {
        [keyword, name, ..] if *keyword == language.function_keyword => {
            Some((*name).split('(').next().unwrap_or_default())
        }
        _ => None,
    }
}

fn assigned_name<'a>(tokens: &[&'a str], language: &LanguageConfig) -> Option<&'a str> {
    match tokens {
        [name, "=", ..] if is_identifier(name) && !language.is_keyword(name) => Some(*name),
        _ => None,
    }
}

fn is_identifier(token: &str) -> bool {
    !token.is_empty()
        && token
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_')
}
