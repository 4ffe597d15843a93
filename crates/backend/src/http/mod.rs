//! REST adapter for the admin API.

use drive_core::model::{ListQuery, Page};
use reqwest::multipart::Form;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ApiError, decode_error};

mod bookings;
mod directory;
mod schools;

pub const DEFAULT_API_URL: &str = "http://localhost:8000/api";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BackendConfig {
    pub base_url: String,
    pub token: Option<String>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

impl BackendConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
        }
    }

    /// Attach a bearer token; blank tokens are ignored.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        let token = token.into();
        self.token = (!token.trim().is_empty()).then_some(token);
        self
    }
}

/// Gateway implementation backed by `reqwest`.
#[derive(Clone)]
pub struct HttpBackend {
    client: Client,
    config: BackendConfig,
}

impl HttpBackend {
    /// # Errors
    ///
    /// Returns `ApiError::Http` if the TLS backend cannot be initialised.
    pub fn new(config: BackendConfig) -> Result<Self, ApiError> {
        let client = Client::builder().build()?;
        Ok(Self { client, config })
    }

    #[must_use]
    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.config.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(String, String)],
    ) -> Result<T, ApiError> {
        debug!(path, "GET");
        let request = self.authorize(self.client.get(self.url(path)).query(query));
        read_response(path, request.send().await?).await
    }

    /// POST whose response contract lives at the top level of the body.
    ///
    /// A `data` member next to it is payload, not an envelope.
    async fn post_json_top_level<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        debug!(path, "POST");
        let request = self.authorize(self.client.post(self.url(path)).json(body));
        let text = read_text(path, request.send().await?).await?;
        parse_top_level(&text)
    }

    async fn post_empty(&self, path: &str) -> Result<(), ApiError> {
        debug!(path, "POST");
        let response = self
            .authorize(self.client.post(self.url(path)))
            .send()
            .await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        let body = response.text().await.unwrap_or_default();
        warn!(path, status = status.as_u16(), "request failed");
        Err(decode_error(status.as_u16(), &body))
    }

    async fn post_form<T: DeserializeOwned>(&self, path: &str, form: Form) -> Result<T, ApiError> {
        debug!(path, "POST multipart");
        let request = self.authorize(self.client.post(self.url(path)).multipart(form));
        read_response(path, request.send().await?).await
    }
}

async fn read_response<T: DeserializeOwned>(path: &str, response: Response) -> Result<T, ApiError> {
    let body = read_text(path, response).await?;
    parse_body(&body)
}

async fn read_text(path: &str, response: Response) -> Result<String, ApiError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        warn!(path, status = status.as_u16(), "request failed");
        return Err(decode_error(status.as_u16(), &body));
    }
    Ok(body)
}

fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str::<Envelope<T>>(body)
        .map(Envelope::into_inner)
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Top-level shape first; a body that only fits inside `{ "data": ... }` is unwrapped.
fn parse_top_level<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    serde_json::from_str::<T>(body).or_else(|_| parse_body(body))
}

/// Most endpoints wrap their payload in `{ "data": ... }`; some do not.
#[derive(Deserialize)]
#[serde(untagged)]
enum Envelope<T> {
    Wrapped { data: T },
    Bare(T),
}

impl<T> Envelope<T> {
    fn into_inner(self) -> T {
        match self {
            Envelope::Wrapped { data } => data,
            Envelope::Bare(inner) => inner,
        }
    }
}

/// List endpoints either return a page object or a plain array.
#[derive(Deserialize)]
#[serde(untagged)]
enum PageBody<T> {
    Paged(Page<T>),
    Plain(Vec<T>),
}

impl<T> PageBody<T> {
    fn into_page(self, query: &ListQuery) -> Page<T> {
        match self {
            PageBody::Paged(page) => page,
            PageBody::Plain(items) => Page {
                total: items.len() as u64,
                items,
                page: query.page,
                limit: query.limit,
            },
        }
    }
}
