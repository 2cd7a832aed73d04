use serde::{Deserialize, Serialize};

/// Provenance tag carried by every keyword the service emits.
pub const NAVER_SOURCE: &str = "naver";

/// One item of a blog search response. Fields may contain markup and entities.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResultItem {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
}

impl SearchResultItem {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> SearchResultItem {
        SearchResultItem {
            title: title.into(),
            description: description.into(),
        }
    }

    /// Title and description joined by a single space.
    pub fn text(&self) -> String {
        format!("{} {}", self.title, self.description)
    }
}

/// The subset of the blog search response body the pipeline reads.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct BlogSearchPage {
    pub total: u64,
    pub items: Vec<SearchResultItem>,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Sentiment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct KeywordEntry {
    pub word: String,
    pub frequency: u32,
    pub sentiment: Sentiment,
    pub source: String,
}

impl KeywordEntry {
    pub fn new(word: impl Into<String>, frequency: u32, sentiment: Sentiment) -> KeywordEntry {
        KeywordEntry {
            word: word.into(),
            frequency,
            sentiment,
            source: NAVER_SOURCE.to_string(),
        }
    }
}

/// Final output of one analysis request.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub query: String,
    pub total: u64,
    pub keywords: Vec<KeywordEntry>,
    pub is_demo: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
