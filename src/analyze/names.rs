use crate::lexicon::WordLookup;
use crate::types::scoring::{mean, Mean, NameScore};
use regex::Regex;
use std::sync::LazyLock;

static SUB_WORD_DELIMITER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"_|[0-9]+").expect("delimiter pattern is valid"));

#[derive(Debug, Clone, PartialEq)]
pub struct NameQuality {
    pub scores: Vec<NameScore>,
    pub mean: Mean,
}

/// Fragments of a name between underscores and digit runs. camelCase is not split.
pub fn sub_words(name: &str) -> Vec<&str> {
    SUB_WORD_DELIMITER
        .split(name)
        .filter(|fragment| !fragment.is_empty())
        .collect()
}

pub fn score_name(name: &str, dictionary: &impl WordLookup) -> NameScore {
    let words = sub_words(name);
    let hits = words
        .iter()
        .filter(|word| dictionary.contains_word(word))
        .count();
    NameScore {
        name: name.to_string(),
        sub_words: words.len(),
        hits,
    }
}

/// Scores every name; names without sub-words stay in `scores` but not in the mean.
pub fn score_names<S: AsRef<str>>(names: &[S], dictionary: &impl WordLookup) -> NameQuality {
    let scores: Vec<NameScore> = names
        .iter()
        .map(|name| score_name(name.as_ref(), dictionary))
        .collect();
    for score in scores.iter().filter(|score| score.ratio().is_none()) {
        tracing::debug!(name = %score.name, "name has no sub-words, excluded from mean");
    }
    let mean = mean(scores.iter().filter_map(NameScore::ratio));
    NameQuality { scores, mean }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::Dictionary;

    fn dictionary() -> Dictionary {
        Dictionary::from_words(["total", "count", "file", "name", "max", "val", "num"])
    }

    #[test]
    fn splits_on_underscores_and_digit_runs() {
        assert_eq!(sub_words("file_name2ext"), vec!["file", "name", "ext"]);
        assert_eq!(sub_words("__private__"), vec!["private"]);
        assert_eq!(sub_words("row10col"), vec!["row", "col"]);
    }

    #[test]
    fn camel_case_is_not_segmented() {
        assert_eq!(sub_words("numVal2"), vec!["numVal"]);
        let score = score_name("numVal2", &dictionary());
        assert_eq!(score.ratio(), Some(0.0));
    }

    #[test]
    fn ratio_counts_dictionary_hits() {
        let score = score_name("total_cnt", &dictionary());
        assert_eq!(score.sub_words, 2);
        assert_eq!(score.hits, 1);
        assert_eq!(score.ratio(), Some(0.5));

        let score = score_name("MAX_COUNT", &dictionary());
        assert_eq!(score.ratio(), Some(1.0));
    }

    #[test]
    fn degenerate_names_are_excluded_from_mean() {
        let quality = score_names(&["_1_", "file_name", "xyz"], &dictionary());
        assert_eq!(quality.scores.len(), 3);
        assert_eq!(quality.scores[0].ratio(), None);
        assert_eq!(quality.mean, Some(0.5));
    }

    #[test]
    fn empty_name_list_has_undefined_mean() {
        let names: [&str; 0] = [];
        let quality = score_names(&names, &dictionary());
        assert!(quality.scores.is_empty());
        assert_eq!(quality.mean, None);
    }

    #[test]
    fn only_degenerate_names_leave_mean_undefined() {
        let quality = score_names(&["__", "42", ""], &dictionary());
        assert_eq!(quality.mean, None);
    }

    #[test]
    fn ratios_stay_within_unit_interval() {
        let names = ["a_b_c", "total", "x1y2z3", "count_count", "q"];
        let quality = score_names(&names, &dictionary());
        for score in &quality.scores {
            let ratio = score.ratio().expect("every name has sub-words");
            assert!((0.0..=1.0).contains(&ratio));
        }
    }
}
