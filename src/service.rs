use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::data_models::AnalysisResult;
use crate::demo::DemoGenerator;
use crate::keywords::KeywordExtractor;
use crate::search_client::{BlogSearch, SearchRequest};

/// Runs one analysis per request: real extraction when the search source answers,
/// demo data otherwise.
pub struct KeywordService<S> {
    source: Option<S>,
    extractor: KeywordExtractor,
    demo: DemoGenerator,
    seed: Option<u64>,
}

impl<S: BlogSearch> KeywordService<S> {
    /// `source` is `None` when no credentials are configured.
    pub fn new(source: Option<S>) -> Self {
        Self {
            source,
            extractor: KeywordExtractor::default(),
            demo: DemoGenerator,
            seed: None,
        }
    }

    /// Fixes the RNG seed used for every request.
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    /// Never fails: every error path ends in a demo result.
    pub async fn analyze(&self, request: &SearchRequest) -> AnalysisResult {
        let Some(source) = &self.source else {
            log::info!("no search credentials configured, serving demo data");
            return self.demo_result(&request.query, None);
        };

        match source.search(request).await {
            Ok(page) => {
                let mut rng = self.rng();
                let keywords = self.extractor.extract(&page.items, &request.query, &mut rng);
                AnalysisResult {
                    query: request.query.clone(),
                    total: page.total,
                    keywords,
                    is_demo: false,
                    error: None,
                }
            }
            Err(e) => {
                log::error!(
                    "search failed for {:?}, falling back to demo data: {:#}",
                    request.query,
                    e
                );
                self.demo_result(&request.query, Some(e.to_string()))
            }
        }
    }

    pub fn demo_result(&self, query: &str, error: Option<String>) -> AnalysisResult {
        let mut rng = self.rng();
        let keywords = self.demo.generate(query, &mut rng);
        AnalysisResult {
            query: query.to_string(),
            total: keywords.len() as u64,
            keywords,
            is_demo: true,
            error,
        }
    }
}
