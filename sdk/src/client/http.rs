//! HTTP client implementation.
//!
//! Provides the main HTTP client for interacting with the Stroomp REST API.

use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::config::ClientConfig;
use super::error::ClientError;
use crate::types::{
    ApiResponse, CreateDonationRequest, CreatePollRequest, CreateStreamRequest,
    CreateSubscriptionRequest, CreateUserRequest, Donation, Poll, Stream, Subscription, User,
    VotePollRequest, WalletAddress,
};

/// Error response envelope.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[allow(dead_code)]
    success: bool,
    message: Option<String>,
}

/// HTTP client for the Stroomp REST API.
#[derive(Debug, Clone)]
pub struct StroompClient {
    config: ClientConfig,
    http: reqwest::Client,
}

impl StroompClient {
    /// Creates a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the HTTP client
    /// cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .user_agent(&config.user_agent)
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self { config, http })
    }

    /// Creates a new client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, ClientError> {
        Self::new(ClientConfig::default())
    }

    /// Creates a new client with the given base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::new(ClientConfig::new(base_url))
    }

    /// Returns the client configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Makes a GET request to the given path.
    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ClientError> {
        let url = format!("{}{}", self.config.base_url, path);
        let response = self.http.get(&url).send().await?;
        Self::handle(response).await
    }

    /// Makes a POST request to the given path.
    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ClientError> {
        let url = format!("{}{}", self.config.base_url, path);
        let response = self.http.post(&url).json(body).send().await?;
        Self::handle(response).await
    }

    /// Unwraps the `{success, data, message}` envelope or maps the error body.
    async fn handle<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ClientError> {
        let status = response.status();

        if status.is_success() {
            let envelope: ApiResponse<T> = response
                .json()
                .await
                .map_err(|e| ClientError::Deserialization(e.to_string()))?;
            return Ok(envelope.data);
        }

        let message = match response.json::<ErrorBody>().await {
            Ok(body) => body.message.unwrap_or_else(|| status.to_string()),
            Err(_) => status.to_string(),
        };

        if status == reqwest::StatusCode::NOT_FOUND {
            Err(ClientError::NotFound(message))
        } else {
            Err(ClientError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }

    /// Returns all streams.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get_streams(&self) -> Result<Vec<Stream>, ClientError> {
        self.get("/api/streams").await
    }

    /// Returns currently live streams.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get_live_streams(&self) -> Result<Vec<Stream>, ClientError> {
        self.get("/api/streams/live").await
    }

    /// Returns a single stream by id.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::NotFound` if the stream does not exist.
    pub async fn get_stream(&self, id: &str) -> Result<Stream, ClientError> {
        self.get(&format!("/api/streams/{}", id)).await
    }

    /// Creates a stream.
    ///
    /// # Errors
    ///
    /// Returns an error if the request is rejected.
    pub async fn create_stream(&self, request: &CreateStreamRequest) -> Result<Stream, ClientError> {
        self.post("/api/streams", request).await
    }

    /// Returns donations for a stream group.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get_donations(&self, stream_id: &str) -> Result<Vec<Donation>, ClientError> {
        self.get(&format!("/api/donations?streamId={}", stream_id))
            .await
    }

    /// Creates a donation.
    ///
    /// The server notifies the target stream group and the global feed
    /// before this call returns.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Validation` without sending anything if the
    /// request is invalid, or an API error if the server rejects it.
    pub async fn create_donation(
        &self,
        request: &CreateDonationRequest,
    ) -> Result<Donation, ClientError> {
        request
            .validate()
            .map_err(|e| ClientError::Validation(e.to_string()))?;
        self.post("/api/donations", request).await
    }

    /// Returns polls for a stream group.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get_polls(&self, stream_id: &str) -> Result<Vec<Poll>, ClientError> {
        self.get(&format!("/api/polls?streamId={}", stream_id)).await
    }

    /// Creates a poll.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::Validation` without sending anything if the
    /// request is invalid, or an API error if the server rejects it.
    pub async fn create_poll(&self, request: &CreatePollRequest) -> Result<Poll, ClientError> {
        request
            .validate()
            .map_err(|e| ClientError::Validation(e.to_string()))?;
        self.post("/api/polls", request).await
    }

    /// Votes on a poll option.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::NotFound` for an unknown poll, or an API error
    /// for an unknown option or inactive poll.
    pub async fn vote_poll(
        &self,
        poll_id: &str,
        request: &VotePollRequest,
    ) -> Result<Poll, ClientError> {
        self.post(&format!("/api/polls/{}/vote", poll_id), request)
            .await
    }

    /// Looks up a user by wallet address.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::NotFound` if no user has this wallet.
    pub async fn get_user_by_wallet(&self, wallet: &WalletAddress) -> Result<User, ClientError> {
        self.get(&format!("/api/users/wallet/{}", wallet)).await
    }

    /// Creates a user, or returns the existing user for the wallet.
    ///
    /// # Errors
    ///
    /// Returns an error if the request is rejected.
    pub async fn create_user(&self, request: &CreateUserRequest) -> Result<User, ClientError> {
        self.post("/api/users", request).await
    }

    /// Returns a user's subscriptions.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get_user_subscriptions(
        &self,
        user_id: &str,
    ) -> Result<Vec<Subscription>, ClientError> {
        self.get(&format!("/api/subscriptions?userId={}", user_id))
            .await
    }

    /// Returns the subscriptions to a streamer.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn get_streamer_subscriptions(
        &self,
        streamer_id: &str,
    ) -> Result<Vec<Subscription>, ClientError> {
        self.get(&format!("/api/subscriptions/streamer/{}", streamer_id))
            .await
    }

    /// Creates a subscription.
    ///
    /// # Errors
    ///
    /// Returns an error if the request is rejected.
    pub async fn create_subscription(
        &self,
        request: &CreateSubscriptionRequest,
    ) -> Result<Subscription, ClientError> {
        self.post("/api/subscriptions", request).await
    }
}
