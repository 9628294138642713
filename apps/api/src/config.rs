use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// When unset the server runs on the in-memory store (local dev / tests).
    pub database_url: Option<String>,
    pub port: u16,
    pub rust_log: String,
    /// Upper bound for the `?limit` query on the feed endpoint, and the
    /// default batch size when the client sends none.
    pub feed_batch_limit: usize,
    /// Whether fetching a job's detail page counts as a view. Off by default:
    /// only feed presentation bumps the counter.
    pub count_detail_views: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_url: std::env::var("DATABASE_URL").ok(),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            feed_batch_limit: std::env::var("FEED_BATCH_LIMIT")
                .unwrap_or_else(|_| "10".to_string())
                .parse::<usize>()
                .context("FEED_BATCH_LIMIT must be a positive integer")?,
            count_detail_views: std::env::var("COUNT_DETAIL_VIEWS")
                .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
        })
    }
}
