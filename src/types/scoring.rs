/// Mean of a metric; `None` when no defined sample contributed.
pub type Mean = Option<f64>;

#[derive(Debug, Clone, PartialEq)]
pub struct NameScore {
    pub name: String,
    pub sub_words: usize,
    pub hits: usize,
}

impl NameScore {
    pub fn ratio(&self) -> Option<f64> {
        if self.sub_words == 0 {
            return None;
        }
        Some(self.hits as f64 / self.sub_words as f64)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SentenceScore {
    pub text: String,
    pub has_noun_phrase: bool,
    pub has_verb: bool,
}

impl SentenceScore {
    pub fn value(&self) -> f64 {
        let mut score = 0.0;
        if self.has_noun_phrase {
            score += 0.5;
        }
        if self.has_verb {
            score += 0.5;
        }
        score
    }
}

pub fn mean<I>(values: I) -> Mean
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), value| (sum + value, count + 1));
    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}
