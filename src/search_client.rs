use anyhow::Result;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use crate::config::{Config, Credentials};
use crate::data_models::BlogSearchPage;
use crate::error::SearchError;

/// Parameters of one outbound search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub query: String,
    pub display: u32,
    pub start: u32,
}

impl SearchRequest {
    pub const DEFAULT_DISPLAY: u32 = 10;
    pub const DEFAULT_START: u32 = 1;

    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            display: Self::DEFAULT_DISPLAY,
            start: Self::DEFAULT_START,
        }
    }
}

/// A source of blog search results.
pub trait BlogSearch: Send + Sync {
    fn search(
        &self,
        request: &SearchRequest,
    ) -> impl Future<Output = Result<BlogSearchPage, SearchError>> + Send;
}

impl<T: BlogSearch> BlogSearch for Arc<T> {
    fn search(
        &self,
        request: &SearchRequest,
    ) -> impl Future<Output = Result<BlogSearchPage, SearchError>> + Send {
        (**self).search(request)
    }
}

pub struct NaverBlogClient {
    client: reqwest::Client,
    endpoint: String,
    credentials: Credentials,
}

impl NaverBlogClient {
    pub fn new(endpoint: String, credentials: Credentials, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint,
            credentials,
        })
    }

    /// `None` when the credentials are not configured.
    pub fn from_config(config: &Config) -> Result<Option<Self>> {
        let Some(credentials) = config.credentials() else {
            return Ok(None);
        };
        let client = Self::new(
            config.blog_search_url.clone(),
            credentials,
            Duration::from_secs(config.search_timeout_secs),
        )?;
        Ok(Some(client))
    }
}

impl BlogSearch for NaverBlogClient {
    async fn search(&self, request: &SearchRequest) -> Result<BlogSearchPage, SearchError> {
        let display = request.display.to_string();
        let start = request.start.to_string();
        let res = self
            .client
            .get(&self.endpoint)
            .query(&[
                ("query", request.query.as_str()),
                ("display", display.as_str()),
                ("start", start.as_str()),
                ("sort", "sim"),
            ])
            .header("X-Naver-Client-Id", &self.credentials.client_id)
            .header("X-Naver-Client-Secret", &self.credentials.client_secret)
            .send()
            .await?;

        let status = res.status();
        if !status.is_success() {
            return Err(SearchError::Status(status.as_u16()));
        }

        let body = res.text().await?;
        let page = serde_json::from_str(&body)?;
        Ok(page)
    }
}
