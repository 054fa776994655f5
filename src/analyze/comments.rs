use crate::lexicon::SentenceAnalyzer;
use crate::types::scoring::{mean, Mean, SentenceScore};

#[derive(Debug, Clone, PartialEq)]
pub struct CommentQuality {
    pub sentences: Vec<SentenceScore>,
    pub mean: Mean,
}

/// Scores each sentence of the comment blob, analyzing its text on its own.
pub fn score_comments(blob: &str, analyzer: &impl SentenceAnalyzer) -> CommentQuality {
    let sentences: Vec<SentenceScore> = analyzer
        .sentences(blob)
        .into_iter()
        .map(|text| SentenceScore {
            has_noun_phrase: analyzer.has_noun_phrase(&text),
            has_verb: analyzer.has_verb(&text),
            text,
        })
        .collect();
    for sentence in &sentences {
        tracing::debug!(sentence = %sentence.text, score = sentence.value(), "sentence scored");
    }
    let mean = mean(sentences.iter().map(SentenceScore::value));
    CommentQuality { sentences, mean }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::LexiconTagger;
    use std::cell::RefCell;

    /// Records which texts were analyzed so isolation can be checked.
    struct RecordingAnalyzer {
        seen: RefCell<Vec<String>>,
    }

    impl SentenceAnalyzer for RecordingAnalyzer {
        fn sentences(&self, text: &str) -> Vec<String> {
            text.split('|')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        }

        fn has_noun_phrase(&self, sentence: &str) -> bool {
            self.seen.borrow_mut().push(sentence.to_string());
            sentence.contains("noun")
        }

        fn has_verb(&self, sentence: &str) -> bool {
            sentence.contains("verb")
        }
    }

    #[test]
    fn each_sentence_is_analyzed_in_isolation() {
        let analyzer = RecordingAnalyzer {
            seen: RefCell::new(Vec::new()),
        };
        let quality = score_comments("noun verb | noun | nothing", &analyzer);
        assert_eq!(
            *analyzer.seen.borrow(),
            vec!["noun verb", "noun", "nothing"]
        );
        let values: Vec<f64> = quality.sentences.iter().map(SentenceScore::value).collect();
        assert_eq!(values, vec![1.0, 0.5, 0.0]);
        assert_eq!(quality.mean, Some(0.5));
    }

    #[test]
    fn empty_blob_has_undefined_mean() {
        let tagger = LexiconTagger::builtin().expect("built-in lexicon should parse");
        let quality = score_comments("", &tagger);
        assert!(quality.sentences.is_empty());
        assert_eq!(quality.mean, None);
    }

    #[test]
    fn complete_sentences_score_full_marks() {
        let tagger = LexiconTagger::builtin().expect("built-in lexicon should parse");
        let quality = score_comments("returns the sum of two numbers. the file ", &tagger);
        let values: Vec<f64> = quality.sentences.iter().map(SentenceScore::value).collect();
        assert_eq!(values, vec![1.0, 0.5]);
        assert_eq!(quality.mean, Some(0.75));
    }

    #[test]
    fn unpunctuated_comment_lines_are_scored_separately() {
        let tagger = LexiconTagger::builtin().expect("built-in lexicon should parse");
        let blob = "Checks if word exists in English dictionary \
                    Return true if the line is an assignment \
                    CODE Grabbed words from the list \
                    CSV-line with file name and other proportions ";
        let quality = score_comments(blob, &tagger);
        let values: Vec<f64> = quality.sentences.iter().map(SentenceScore::value).collect();
        assert_eq!(values, vec![1.0, 1.0, 1.0, 0.5]);
        assert_eq!(quality.mean, Some(0.875));
    }

    #[test]
    fn sentence_scores_take_only_half_steps() {
        let tagger = LexiconTagger::builtin().expect("built-in lexicon should parse");
        let quality = score_comments(
            "TODO. very quickly! it works. we split the words on underscores. ",
            &tagger,
        );
        for sentence in &quality.sentences {
            assert!([0.0, 0.5, 1.0].contains(&sentence.value()));
        }
    }
}
