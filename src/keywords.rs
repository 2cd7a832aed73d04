use rand::Rng;
use std::collections::HashMap;

use crate::analyzer::TextAnalyzer;
use crate::data_models::{KeywordEntry, SearchResultItem, Sentiment};

/// Number of ranked keywords kept from real search results.
pub const RANKED_KEYWORD_LIMIT: usize = 40;

pub const RELATED_TERM_SUFFIXES: [&str; 6] =
    ["디자인", "트렌드", "인테리어", "스타일", "컨셉", "아이디어"];

pub const POSITIVE_MARKERS: &[&str] = &[
    "좋은", "훌륭한", "만족", "추천", "최고", "완벽", "멋진", "아름다운", "편안한", "깔끔한", "모던",
    "세련된", "고급", "프리미엄", "우수한", "뛰어난",
];

pub const NEGATIVE_MARKERS: &[&str] = &[
    "나쁜", "별로", "불만", "아쉬운", "실망", "부족", "문제", "불편", "시끄러운", "더러운", "낡은",
    "비싼", "최악", "형편없는",
];

/// Never consulted by [`SentimentLexicon::classify`]; neutral is the fallback label.
pub const NEUTRAL_MARKERS: &[&str] = &["일반", "보통", "평범", "그냥", "무난", "적당한"];

/// Token counts in first-seen order.
///
/// Ranking ties are broken by the order tokens were first added, so the order is kept
/// explicitly in a vector and the hash map only indexes into it.
#[derive(Debug, Default, Clone)]
pub struct KeywordFrequencyMap {
    entries: Vec<(String, u32)>,
    index: HashMap<String, usize>,
}

impl KeywordFrequencyMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, token: &str) {
        match self.index.get(token) {
            Some(&idx) => self.entries[idx].1 += 1,
            None => {
                self.index.insert(token.to_string(), self.entries.len());
                self.entries.push((token.to_string(), 1));
            }
        }
    }

    pub fn extend<I, S>(&mut self, tokens: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for token in tokens {
            self.add(token.as_ref());
        }
    }

    pub fn get(&self, token: &str) -> Option<u32> {
        self.index.get(token).map(|&idx| self.entries[idx].1)
    }

    /// Number of distinct tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all counts, i.e. the number of tokens added.
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|(_, c)| u64::from(*c)).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> {
        self.entries.iter().map(|(w, c)| (w.as_str(), *c))
    }

    /// Sorts by descending count and keeps the first `limit`. `sort_by` is stable, so
    /// equal counts stay in first-seen order.
    pub fn into_ranked(self, limit: usize) -> Vec<(String, u32)> {
        let mut entries = self.entries;
        entries.sort_by(|a, b| b.1.cmp(&a.1));
        entries.truncate(limit);
        entries
    }
}

/// Static word lists matched by substring containment.
///
/// A marker buried in an unrelated compound still counts (`고급스러운` is positive, and so
/// is any token that merely contains `추천`). This is a known limit of the heuristic and
/// is kept as-is.
#[derive(Debug, Clone, Copy)]
pub struct SentimentLexicon {
    positive: &'static [&'static str],
    negative: &'static [&'static str],
    neutral: &'static [&'static str],
}

impl Default for SentimentLexicon {
    fn default() -> Self {
        Self {
            positive: POSITIVE_MARKERS,
            negative: NEGATIVE_MARKERS,
            neutral: NEUTRAL_MARKERS,
        }
    }
}

impl SentimentLexicon {
    pub fn new(
        positive: &'static [&'static str],
        negative: &'static [&'static str],
        neutral: &'static [&'static str],
    ) -> Self {
        Self {
            positive,
            negative,
            neutral,
        }
    }

    /// Positive markers are checked first, then negative; anything else is neutral.
    pub fn classify(&self, token: &str) -> Sentiment {
        if self.positive.iter().any(|m| token.contains(m)) {
            Sentiment::Positive
        } else if self.negative.iter().any(|m| token.contains(m)) {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn markers(&self, sentiment: Sentiment) -> &'static [&'static str] {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }
}

/// `<query> <suffix>` for each fixed suffix, frequency uniform in 5..=24, always positive.
pub fn related_terms<R: Rng + ?Sized>(query: &str, rng: &mut R) -> Vec<KeywordEntry> {
    RELATED_TERM_SUFFIXES
        .iter()
        .map(|suffix| {
            KeywordEntry::new(
                format!("{query} {suffix}"),
                rng.gen_range(5..=24),
                Sentiment::Positive,
            )
        })
        .collect()
}

/// Turns search results into a ranked, sentiment-tagged keyword list.
pub struct KeywordExtractor {
    analyzer: TextAnalyzer,
    lexicon: SentimentLexicon,
    limit: usize,
}

impl Default for KeywordExtractor {
    fn default() -> Self {
        Self::new(
            TextAnalyzer::default(),
            SentimentLexicon::default(),
            RANKED_KEYWORD_LIMIT,
        )
    }
}

impl KeywordExtractor {
    pub fn new(analyzer: TextAnalyzer, lexicon: SentimentLexicon, limit: usize) -> Self {
        Self {
            analyzer,
            lexicon,
            limit,
        }
    }

    pub fn lexicon(&self) -> &SentimentLexicon {
        &self.lexicon
    }

    /// Counts accepted tokens across every item, in item order.
    pub fn frequencies(&self, items: &[SearchResultItem]) -> KeywordFrequencyMap {
        let mut frequencies = KeywordFrequencyMap::new();
        for item in items {
            frequencies.extend(self.analyzer.terms(item.text()));
        }
        frequencies
    }

    /// Top ranked tokens with their sentiment, without the related terms.
    pub fn rank(&self, frequencies: KeywordFrequencyMap) -> Vec<KeywordEntry> {
        frequencies
            .into_ranked(self.limit)
            .into_iter()
            .map(|(word, frequency)| {
                let sentiment = self.lexicon.classify(&word);
                KeywordEntry::new(word, frequency, sentiment)
            })
            .collect()
    }

    /// Ranked keywords followed by the related terms for `query`. The two parts are not
    /// deduplicated against each other.
    pub fn extract<R: Rng + ?Sized>(
        &self,
        items: &[SearchResultItem],
        query: &str,
        rng: &mut R,
    ) -> Vec<KeywordEntry> {
        let frequencies = self.frequencies(items);
        log::debug!(
            "extracted {} tokens ({} distinct) from {} results",
            frequencies.total(),
            frequencies.len(),
            items.len()
        );

        let mut keywords = self.rank(frequencies);
        keywords.extend(related_terms(query, rng));
        keywords
    }
}
