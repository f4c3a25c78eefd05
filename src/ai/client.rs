use super::{ChatError, ChatResult};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

/// Anything that can answer a user query with raw (unformatted) text.
#[async_trait(?Send)]
pub trait QueryBackend {
    async fn query(&self, text: &str) -> ChatResult<String>;
}

#[derive(Serialize)]
struct QueryRequest<'a> {
    query: &'a str,
}

#[derive(Deserialize)]
struct QueryReply {
    response: String,
    #[serde(default)]
    original_query: Option<String>,
    #[serde(default)]
    translated_query: Option<String>,
}

#[derive(Deserialize)]
struct QueryFailure {
    error: String,
}

/// POSTs `{"query": ...}` to the configured endpoint and expects
/// `{"response": ...}` back.
pub struct HttpQueryBackend {
    endpoint: String,
    client: Client,
}

impl HttpQueryBackend {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }

    /// Use a preconfigured client (proxy, TLS or timeout settings).
    pub fn with_client(endpoint: impl Into<String>, client: Client) -> Self {
        Self {
            endpoint: endpoint.into(),
            client,
        }
    }
}

#[async_trait(?Send)]
impl QueryBackend for HttpQueryBackend {
    async fn query(&self, text: &str) -> ChatResult<String> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&QueryRequest { query: text })
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        parse_query_response(status, &body)
    }
}

/// Interpret a query endpoint reply. Only the presence of `response` (on 2xx)
/// or `error` (otherwise) is checked.
pub fn parse_query_response(status: StatusCode, body: &str) -> ChatResult<String> {
    if !status.is_success() {
        let message = match serde_json::from_str::<QueryFailure>(body) {
            Ok(failure) => failure.error,
            Err(_) => body.to_string(),
        };
        return Err(ChatError::Backend {
            status: status.as_u16(),
            message,
        });
    }

    let reply: QueryReply = serde_json::from_str(body)
        .map_err(|err| ChatError::MalformedResponse(err.to_string()))?;
    if let Some(translated) = &reply.translated_query {
        tracing::debug!(
            original = reply.original_query.as_deref().unwrap_or_default(),
            translated = translated.as_str(),
            "Backend translated query"
        );
    }
    Ok(reply.response)
}
