//! The AnkiConnect client and builder.

use std::time::Duration;

use reqwest::Client;
use serde::{Deserialize, Serialize, de::DeserializeOwned};

use crate::actions::{ModelActions, NoteActions};
use crate::error::{Error, Result};

/// Default URL for AnkiConnect.
const DEFAULT_URL: &str = "http://127.0.0.1:8765";

/// Default timeout for requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// AnkiConnect protocol version this client speaks.
const API_VERSION: u8 = 6;

/// Wire envelope for a single AnkiConnect call.
#[derive(Debug, Serialize)]
struct Envelope<'a, T> {
    action: &'a str,
    version: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    key: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    params: Option<T>,
}

/// The `{result, error}` pair every AnkiConnect reply carries.
#[derive(Debug, Deserialize)]
struct Reply<T> {
    result: Option<T>,
    error: Option<String>,
}

/// The client for the AnkiConnect actions a coverage scan needs.
///
/// # Example
///
/// ```no_run
/// use kanjikit::AnkiClient;
///
/// # async fn example() -> kanjikit::Result<()> {
/// let client = AnkiClient::new();
/// let fields = client.models().field_names("Japanese Vocabulary").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AnkiClient {
    http_client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl AnkiClient {
    /// Create a new client with default settings.
    ///
    /// Connects to `http://127.0.0.1:8765` with a 30 second timeout.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Create a builder for custom client configuration.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Access model (note type) operations.
    pub fn models(&self) -> ModelActions<'_> {
        ModelActions { client: self }
    }

    /// Access note operations.
    pub fn notes(&self) -> NoteActions<'_> {
        NoteActions { client: self }
    }

    /// Execute an action without parameters.
    pub(crate) async fn invoke_without_params<R>(&self, action: &str) -> Result<R>
    where
        R: DeserializeOwned,
    {
        let request = Envelope::<()> {
            action,
            version: API_VERSION,
            key: self.api_key.as_deref(),
            params: None,
        };
        self.send_request(&request).await
    }

    /// Execute an action with parameters.
    pub(crate) async fn invoke<P, R>(&self, action: &str, params: P) -> Result<R>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let request = Envelope {
            action,
            version: API_VERSION,
            key: self.api_key.as_deref(),
            params: Some(params),
        };
        self.send_request(&request).await
    }

    /// Send a request to AnkiConnect and process the response.
    async fn send_request<T, R>(&self, request: &Envelope<'_, T>) -> Result<R>
    where
        T: Serialize,
        R: DeserializeOwned,
    {
        let response = self
            .http_client
            .post(&self.base_url)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() {
                    Error::ConnectionRefused
                } else {
                    Error::Http(e)
                }
            })?;

        let reply: Reply<R> = response.json().await?;

        match (reply.result, reply.error) {
            (Some(result), None) => Ok(result),
            (None, Some(err)) => {
                if err.contains("permission") {
                    Err(Error::PermissionDenied)
                } else {
                    Err(Error::AnkiConnect(err))
                }
            }
            (None, None) => Err(Error::EmptyResponse),
            (Some(_), Some(err)) => Err(Error::AnkiConnect(err)),
        }
    }
}

impl Default for AnkiClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for creating a customized [`AnkiClient`].
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use kanjikit::AnkiClient;
///
/// let client = AnkiClient::builder()
///     .url("http://localhost:8765")
///     .api_key("my-secret-key")
///     .timeout(Duration::from_secs(60))
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    base_url: String,
    api_key: Option<String>,
    timeout: Duration,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            base_url: DEFAULT_URL.to_string(),
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the AnkiConnect URL.
    ///
    /// Defaults to `http://127.0.0.1:8765`.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the API key for authentication.
    ///
    /// Only required if AnkiConnect is configured to require an API key.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the request timeout.
    ///
    /// Defaults to 30 seconds.
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = duration;
        self
    }

    /// Build the client.
    pub fn build(self) -> AnkiClient {
        let http_client = Client::builder()
            .timeout(self.timeout)
            .build()
            .expect("Failed to build HTTP client");

        AnkiClient {
            http_client,
            base_url: self.base_url,
            api_key: self.api_key,
        }
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
