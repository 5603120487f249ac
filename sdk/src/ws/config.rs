//! WebSocket configuration.
//!
//! Provides configuration options for the WebSocket client.

/// Default WebSocket URL.
pub const DEFAULT_WS_URL: &str = "ws://localhost:3001/ws";

/// WebSocket configuration.
#[derive(Debug, Clone)]
pub struct WsConfig {
    /// WebSocket URL.
    pub url: String,

    /// Stream group to join; the server falls back to `"global"` when
    /// absent.
    pub stream_id: Option<String>,
}

impl Default for WsConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_WS_URL.to_string(),
            stream_id: None,
        }
    }
}

impl WsConfig {
    /// Creates a new configuration with the given URL.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Sets the stream group to join on connect.
    #[must_use]
    pub fn with_stream_id(mut self, stream_id: impl Into<String>) -> Self {
        self.stream_id = Some(stream_id.into());
        self
    }

    /// Returns the connection URL with the `streamId` query parameter.
    #[must_use]
    pub fn connection_url(&self) -> String {
        match &self.stream_id {
            Some(stream_id) => {
                if self.url.contains('?') {
                    format!("{}&streamId={}", self.url, stream_id)
                } else {
                    format!("{}?streamId={}", self.url, stream_id)
                }
            }
            None => self.url.clone(),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), super::error::WsError> {
        if self.url.is_empty() {
            return Err(super::error::WsError::InvalidConfig(
                "url cannot be empty".to_string(),
            ));
        }

        if !self.url.starts_with("ws://") && !self.url.starts_with("wss://") {
            return Err(super::error::WsError::InvalidConfig(
                "url must start with ws:// or wss://".to_string(),
            ));
        }

        Ok(())
    }
}
