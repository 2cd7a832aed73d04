use dotenvy::dotenv;
use once_cell::sync::Lazy;
use std::env;
use std::str::FromStr;

pub const DEFAULT_BLOG_SEARCH_URL: &str = "https://openapi.naver.com/v1/search/blog.json";

pub static CONFIG: Lazy<Config> = Lazy::new(|| {
    dotenv().ok(); // Load .env file if present
    Config {
        naver_client_id: get_env_opt("NAVER_CLIENT_ID"),
        naver_client_secret: get_env_opt("NAVER_CLIENT_SECRET"),
        blog_search_url: get_env_or_default("NAVER_BLOG_SEARCH_URL", DEFAULT_BLOG_SEARCH_URL),
        search_timeout_secs: get_env_parsed_or("SEARCH_TIMEOUT_SECS", 5),
        bind_addr: get_env_or_default("BIND_ADDR", "0.0.0.0:3000"),
        demo_seed: get_env_opt("DEMO_SEED").and_then(|s| s.parse().ok()),
    }
});

#[derive(Debug, Clone)]
pub struct Config {
    pub naver_client_id: Option<String>,
    pub naver_client_secret: Option<String>,
    pub blog_search_url: String,
    pub search_timeout_secs: u64,
    pub bind_addr: String,
    pub demo_seed: Option<u64>,
}

/// API credentials for the blog search endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Config {
    /// Both halves must be present and non-empty, otherwise the service runs on demo data.
    pub fn credentials(&self) -> Option<Credentials> {
        match (&self.naver_client_id, &self.naver_client_secret) {
            (Some(id), Some(secret)) if !id.is_empty() && !secret.is_empty() => Some(Credentials {
                client_id: id.clone(),
                client_secret: secret.clone(),
            }),
            _ => None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            naver_client_id: None,
            naver_client_secret: None,
            blog_search_url: DEFAULT_BLOG_SEARCH_URL.to_string(),
            search_timeout_secs: 5,
            bind_addr: "0.0.0.0:3000".to_string(),
            demo_seed: None,
        }
    }
}

fn get_env_opt(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn get_env_or_default(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn get_env_parsed_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
