use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode},
};
use serde_json::Value;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tower::ServiceExt;

use keyword_trends::api::create_router;
use keyword_trends::data_models::{BlogSearchPage, SearchResultItem};
use keyword_trends::error::SearchError;
use keyword_trends::search_client::{BlogSearch, NaverBlogClient, SearchRequest};
use keyword_trends::service::KeywordService;

mod test_helpers {
    use super::*;

    /// Canned search source that records what it was asked.
    pub struct FakeSearch {
        pub outcome: Result<BlogSearchPage, u16>,
        pub calls: AtomicUsize,
        pub last_request: std::sync::Mutex<Option<SearchRequest>>,
    }

    impl FakeSearch {
        pub fn ok(total: u64, items: Vec<SearchResultItem>) -> Self {
            Self {
                outcome: Ok(BlogSearchPage { total, items }),
                calls: AtomicUsize::new(0),
                last_request: std::sync::Mutex::new(None),
            }
        }

        pub fn failing(status: u16) -> Self {
            Self {
                outcome: Err(status),
                calls: AtomicUsize::new(0),
                last_request: std::sync::Mutex::new(None),
            }
        }
    }

    impl BlogSearch for FakeSearch {
        async fn search(&self, request: &SearchRequest) -> Result<BlogSearchPage, SearchError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            *self.last_request.lock().unwrap() = Some(request.clone());
            match &self.outcome {
                Ok(page) => Ok(page.clone()),
                Err(status) => Err(SearchError::Status(*status)),
            }
        }
    }

    pub fn unconfigured_router() -> Router {
        let service = KeywordService::<NaverBlogClient>::new(None).with_seed(Some(9));
        create_router(Arc::new(service))
    }

    pub fn router_with(source: Arc<FakeSearch>) -> Router {
        create_router(Arc::new(KeywordService::new(Some(source)).with_seed(Some(9))))
    }

    pub async fn send(router: Router, method: Method, uri: &str) -> (StatusCode, Vec<u8>) {
        let response = router
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, bytes.to_vec())
    }

    pub async fn get_json(router: Router, uri: &str) -> (StatusCode, Value) {
        let (status, body) = send(router, Method::GET, uri).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    pub fn hotel_query() -> String {
        // 호텔, percent-encoded
        "/api/search?query=%ED%98%B8%ED%85%94".to_string()
    }
}

use test_helpers::*;

#[tokio::test]
async fn test_missing_query_is_bad_request() {
    let (status, body) = get_json(unconfigured_router(), "/api/search").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, serde_json::json!({ "error": "검색어가 필요합니다." }));
}

#[tokio::test]
async fn test_empty_query_is_bad_request() {
    let (status, _) = get_json(unconfigured_router(), "/api/search?query=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_query_skips_search_call() {
    let source = Arc::new(FakeSearch::ok(1, vec![]));
    let (status, _) = get_json(router_with(source.clone()), "/api/search").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(source.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_unconfigured_serves_demo_data() {
    let (status, body) = get_json(unconfigured_router(), &hotel_query()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["isDemo"], true);
    assert_eq!(body["total"], 47);
    assert!(body.get("error").is_none());

    let keywords = body["keywords"].as_array().unwrap();
    assert_eq!(keywords.len(), 47);
    for k in keywords {
        let f = k["frequency"].as_u64().unwrap();
        assert!((10..=109).contains(&f));
        assert_eq!(k["source"], "naver");
        let s = k["sentiment"].as_str().unwrap();
        assert!(["positive", "negative", "neutral"].contains(&s));
    }
}

#[tokio::test]
async fn test_real_results_are_extracted() {
    let source = Arc::new(FakeSearch::ok(
        1234,
        vec![
            SearchResultItem::new("<b>호텔</b> 추천", "깔끔한 호텔 객실"),
            SearchResultItem::new("호텔 후기", "조금 시끄러운 객실"),
        ],
    ));
    let (status, body) = get_json(router_with(source.clone()), &hotel_query()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["isDemo"], false);
    assert_eq!(body["total"], 1234);
    assert!(body.get("error").is_none());

    let keywords = body["keywords"].as_array().unwrap();
    assert_eq!(keywords[0]["word"], "호텔");
    assert_eq!(keywords[0]["frequency"], 3);
    assert_eq!(keywords[0]["sentiment"], "neutral");
    assert_eq!(keywords[1]["word"], "객실");
    assert_eq!(keywords[1]["frequency"], 2);

    let related = &keywords[keywords.len() - 6..];
    assert!(related.iter().all(|k| k["sentiment"] == "positive"));
    assert_eq!(related[0]["word"], "호텔 디자인");
}

#[tokio::test]
async fn test_display_and_start_forwarded() {
    let source = Arc::new(FakeSearch::ok(0, vec![]));
    let uri = format!("{}&display=20&start=11", hotel_query());
    let (status, _) = get_json(router_with(source.clone()), &uri).await;
    assert_eq!(status, StatusCode::OK);

    let request = source.last_request.lock().unwrap().clone().unwrap();
    assert_eq!(request.query, "호텔");
    assert_eq!(request.display, 20);
    assert_eq!(request.start, 11);
}

#[tokio::test]
async fn test_defaults_for_bad_numbers() {
    let source = Arc::new(FakeSearch::ok(0, vec![]));
    let uri = format!("{}&display=lots", hotel_query());
    let (status, _) = get_json(router_with(source.clone()), &uri).await;
    assert_eq!(status, StatusCode::OK);

    let request = source.last_request.lock().unwrap().clone().unwrap();
    assert_eq!(request.display, 10);
    assert_eq!(request.start, 1);
}

#[tokio::test]
async fn test_search_failure_falls_back_to_demo() {
    let source = Arc::new(FakeSearch::failing(500));
    let (status, body) = get_json(router_with(source.clone()), &hotel_query()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["isDemo"], true);
    assert_eq!(body["total"], 47);
    assert_eq!(body["error"], "네이버 API 오류: 500");
    assert_eq!(source.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_post_reads_query_string() {
    let (status, body) = send(unconfigured_router(), Method::POST, &hotel_query()).await;
    assert_eq!(status, StatusCode::OK);
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(body["isDemo"], true);
}

#[tokio::test]
async fn test_options_short_circuits() {
    let (status, body) = send(unconfigured_router(), Method::OPTIONS, "/api/search").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
}

#[tokio::test]
async fn test_cors_headers() {
    let response = unconfigured_router()
        .oneshot(
            Request::builder()
                .uri(hotel_query())
                .header("origin", "https://example.com")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "*"
    );
}

#[tokio::test]
async fn test_preflight_allows_methods() {
    let response = unconfigured_router()
        .oneshot(
            Request::builder()
                .method(Method::OPTIONS)
                .uri("/api/search")
                .header("origin", "https://example.com")
                .header("access-control-request-method", "GET")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let methods = response.headers()["access-control-allow-methods"]
        .to_str()
        .unwrap()
        .to_string();
    for m in ["GET", "POST", "OPTIONS"] {
        assert!(methods.contains(m), "{methods}");
    }
}

#[tokio::test]
async fn test_seeded_demo_is_reproducible() {
    let (_, a) = get_json(unconfigured_router(), &hotel_query()).await;
    let (_, b) = get_json(unconfigured_router(), &hotel_query()).await;
    assert_eq!(a, b);
}
