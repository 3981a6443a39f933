use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub api_base_url: String,
    pub bearer_token: Option<String>,
    pub request_timeout_secs: u64,
    pub move_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        Ok(Self {
            api_base_url: std::env::var("BOARD_API_URL")
                .unwrap_or_else(|_| "http://localhost:8000".into()),
            bearer_token: std::env::var("BOARD_API_TOKEN").ok(),
            request_timeout_secs: std::env::var("BOARD_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
            move_timeout_secs: std::env::var("BOARD_MOVE_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".into(),
            bearer_token: None,
            request_timeout_secs: 30,
            move_timeout_secs: 10,
        }
    }
}
