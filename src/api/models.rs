use serde::{Deserialize, Serialize};

use crate::data_models::{AnalysisResult, KeywordEntry};
use crate::search_client::SearchRequest;

pub const MISSING_QUERY_MESSAGE: &str = "검색어가 필요합니다.";

/// Raw query string. Numbers are parsed leniently so a bad `display` or `start` falls
/// back to its default instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub query: Option<String>,
    pub display: Option<String>,
    pub start: Option<String>,
}

impl SearchParams {
    /// `None` when `query` is absent or empty.
    pub fn into_request(self) -> Option<SearchRequest> {
        let query = self.query.filter(|q| !q.is_empty())?;
        let parse = |v: Option<String>, default: u32| {
            v.and_then(|s| s.trim().parse().ok()).unwrap_or(default)
        };
        Some(SearchRequest {
            query,
            display: parse(self.display, SearchRequest::DEFAULT_DISPLAY),
            start: parse(self.start, SearchRequest::DEFAULT_START),
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub success: bool,
    pub total: u64,
    pub keywords: Vec<KeywordEntry>,
    pub is_demo: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<AnalysisResult> for SearchResponse {
    fn from(result: AnalysisResult) -> Self {
        SearchResponse {
            success: true,
            total: result.total,
            keywords: result.keywords,
            is_demo: result.is_demo,
            error: result.error,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}
