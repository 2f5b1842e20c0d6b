use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared::{ApiError, ApiResult, decode_response};
use shared::models::*;
use shared::service::{GENERATE_BOOK_PATH, GENERATE_CHARACTER_PATH, GenerationService};

/// Talks to the generation backend configured in the client settings.
pub struct HttpGenerationService {
    settings: ClientSettings,
}

impl HttpGenerationService {
    pub fn new(settings: ClientSettings) -> Self {
        Self { settings }
    }

    async fn post<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: serde::Serialize,
        T: DeserializeOwned,
    {
        let response = Request::post(&self.settings.endpoint(path))
            .json(body)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let (ok, status) = (response.ok(), response.status());
    let body = response
        .text()
        .await
        .map_err(|e| ApiError::Transport(e.to_string()))?;
    decode_response(ok, status, &body)
}

#[async_trait(?Send)]
impl GenerationService for HttpGenerationService {
    async fn generate_book(&self, request: &BookRequest) -> ApiResult<Book> {
        self.post(GENERATE_BOOK_PATH, request).await
    }

    async fn generate_character(&self, request: &CharacterRequest) -> ApiResult<Character> {
        self.post(GENERATE_CHARACTER_PATH, request).await
    }
}
