use reqwest::StatusCode;

use crate::config::Config;
use crate::domain::{Board, BoardError, Card};
use crate::gateway::{BoardGateway, MoveRejection, MoveRequest};

/// HTTP implementation of [`BoardGateway`] against the board REST API.
#[derive(Debug, Clone)]
pub struct HttpGateway {
    client: reqwest::Client,
    base_url: String,
    bearer_token: Option<String>,
}

impl HttpGateway {
    pub fn new(config: &Config) -> Result<Self, BoardError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()?;
        Ok(Self {
            client,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
            bearer_token: config.bearer_token.clone(),
        })
    }

    fn get(&self, path: &str) -> reqwest::RequestBuilder {
        self.authorized(self.client.get(format!("{}{}", self.base_url, path)))
    }

    fn post(&self, path: &str) -> reqwest::RequestBuilder {
        self.authorized(self.client.post(format!("{}{}", self.base_url, path)))
    }

    fn authorized(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        match &self.bearer_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    /// Maps a non-success move response to the error taxonomy. A body
    /// carrying a structured rejection code wins; anything else is a
    /// plain API failure.
    async fn decode_rejection(response: reqwest::Response) -> BoardError {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();

        if let Ok(rejection) = serde_json::from_str::<MoveRejection>(&body) {
            return rejection.into_error();
        }

        BoardError::Api {
            status: status.as_u16(),
            message: if body.is_empty() {
                status.to_string()
            } else {
                body
            },
        }
    }
}

impl BoardGateway for HttpGateway {
    async fn fetch_board(&self) -> Result<Board, BoardError> {
        let response = self.get("/api/columns").send().await?;

        if !response.status().is_success() {
            return Err(BoardError::Api {
                status: response.status().as_u16(),
                message: "failed to fetch board".into(),
            });
        }

        let board: Board = response.json().await?;
        tracing::debug!(columns = board.columns.len(), "fetched board snapshot");
        Ok(board)
    }

    async fn move_card(&self, card_id: i64, request: &MoveRequest) -> Result<Card, BoardError> {
        let response = self
            .post(&format!("/api/cards/{}/move", card_id))
            .json(request)
            .send()
            .await?;

        if response.status() == StatusCode::NOT_FOUND {
            return Err(BoardError::NotFound(format!("card {}", card_id)));
        }
        if !response.status().is_success() {
            return Err(Self::decode_rejection(response).await);
        }

        let card: Card = response.json().await?;
        Ok(card)
    }
}
