use rand::Rng;

use crate::data_models::{KeywordEntry, Sentiment};

/// Fixed vocabulary mixed into every demo result.
pub const BASE_VOCABULARY: [&str; 38] = [
    "호텔", "디자인", "인테리어", "모던", "럭셔리", "편안함", "서비스", "위치", "가격", "예약",
    "객실", "로비", "레스토랑", "수영장", "스파", "피트니스", "비즈니스", "컨퍼런스", "이벤트",
    "고급", "깔끔", "세련된", "아늑한", "넓은", "쾌적한", "친절한", "신속한", "품질", "만족",
    "트렌드", "스타일", "컨셉", "테마", "분위기", "경험", "브랜드", "평점", "리뷰",
];

pub const DEMO_SUFFIXES: [&str; 9] = [
    "디자인", "트렌드", "스타일", "컨셉", "인테리어", "기획", "아이디어", "브랜드", "마케팅",
];

pub const DEMO_KEYWORD_COUNT: usize = BASE_VOCABULARY.len() + DEMO_SUFFIXES.len();

/// Synthetic keyword lists for when real search results are unavailable.
#[derive(Debug, Default, Clone, Copy)]
pub struct DemoGenerator;

impl DemoGenerator {
    /// Base vocabulary plus `<query> <suffix>` terms, each with a frequency in 10..=109
    /// and a random sentiment, sorted by descending frequency.
    pub fn generate<R: Rng + ?Sized>(&self, query: &str, rng: &mut R) -> Vec<KeywordEntry> {
        let words = BASE_VOCABULARY
            .iter()
            .map(|w| (*w).to_string())
            .chain(DEMO_SUFFIXES.iter().map(|s| format!("{query} {s}")));

        let mut keywords: Vec<KeywordEntry> = words
            .map(|word| {
                let frequency = rng.gen_range(10..=109);
                let sentiment = Self::random_sentiment(rng);
                KeywordEntry::new(word, frequency, sentiment)
            })
            .collect();

        keywords.sort_by(|a, b| b.frequency.cmp(&a.frequency));
        keywords
    }

    /// Two sequential draws: `> 0.3` is positive, otherwise a second draw `> 0.5` is
    /// neutral and the rest negative. That works out to 70% / 15% / 15%.
    pub fn random_sentiment<R: Rng + ?Sized>(rng: &mut R) -> Sentiment {
        if rng.gen_range(0.0..1.0) > 0.3 {
            Sentiment::Positive
        } else if rng.gen_range(0.0..1.0) > 0.5 {
            Sentiment::Neutral
        } else {
            Sentiment::Negative
        }
    }
}
