pub mod comments;
pub mod names;

use crate::extract::{extract, Symbols};
use crate::lexicon::{SentenceAnalyzer, WordLookup};
use crate::scan::filesystem::read_source_lines;
use crate::scan::SourceFile;
use crate::types::config::LanguageConfig;
use crate::types::report::{BatchReport, FileReport, SkippedFile};
use crate::types::scoring::Mean;

/// Loaded resources shared by every file of a run.
pub struct Analyzer<'a, D, A> {
    pub dictionary: &'a D,
    pub sentences: &'a A,
    pub language: &'a LanguageConfig,
}

impl<D: WordLookup, A: SentenceAnalyzer> Analyzer<'_, D, A> {
    pub fn score_symbols(&self, id: &str, symbols: &Symbols) -> FileReport {
        let identifiers: Vec<&str> = symbols.identifiers.iter().map(String::as_str).collect();
        let variables = names::score_names(&identifiers, self.dictionary);
        let functions = names::score_names(&symbols.functions, self.dictionary);
        let comments = comments::score_comments(&symbols.comments, self.sentences);

        tracing::debug!(
            file = id,
            identifiers = variables.scores.len(),
            functions = functions.scores.len(),
            sentences = comments.sentences.len(),
            comments = %symbols.comments,
            "corpora scored"
        );

        aggregate(id, variables.mean, functions.mean, comments.mean)
    }

    pub fn analyze_source<S: AsRef<str>>(&self, id: &str, lines: &[S]) -> FileReport {
        let symbols = extract(lines, self.language);
        self.score_symbols(id, &symbols)
    }

    /// Scores files one at a time; an unreadable file is recorded and skipped.
    pub fn analyze_batch(&self, sources: &[SourceFile]) -> BatchReport {
        let mut batch = BatchReport::default();
        for source in sources {
            let lines = match read_source_lines(&source.path) {
                Ok(lines) => lines,
                Err(e) => {
                    tracing::warn!(file = %source.path.display(), error = %e, "skipping file");
                    batch.skipped.push(SkippedFile {
                        path: source.path.display().to_string(),
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            let report = self.analyze_source(&source.id, &lines);
            let undefined = report.undefined_metrics();
            if undefined.is_empty() {
                tracing::info!(file = %source.id, und = ?report.und, "file scored");
            } else {
                tracing::warn!(
                    file = %source.id,
                    undefined = %undefined.join(","),
                    "file scored with undefined metrics"
                );
            }
            batch.files.push(report);
        }
        batch
    }
}

/// Combines the three metric means; the composite is undefined when any input is.
pub fn aggregate(name: &str, var: Mean, func: Mean, comm: Mean) -> FileReport {
    let und = match (var, func, comm) {
        (Some(var), Some(func), Some(comm)) => Some((var + func + comm) / 3.0),
        _ => None,
    };
    FileReport {
        name: name.to_string(),
        var,
        func,
        comm,
        und,
    }
}
