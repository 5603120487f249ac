//! WebSocket client implementation.
//!
//! Provides the client side of the Stroomp notification socket.

use std::sync::Arc;

use futures_util::stream::{SplitSink, SplitStream};
use futures_util::{SinkExt, StreamExt};
use serde_json::Value;
use tokio::net::TcpStream;
use tokio::sync::{mpsc, Mutex, RwLock};
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};

use super::config::WsConfig;
use super::error::WsError;
use super::messages::EventMessage;

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;
type WsSink = SplitSink<WsStream, Message>;
type WsSource = SplitStream<WsStream>;

/// WebSocket client for live Stroomp events.
///
/// A client joins exactly one stream group per connection. Reconnecting
/// after a drop is the caller's responsibility and produces a brand-new
/// connection (and a fresh welcome message).
#[derive(Debug)]
pub struct StroompWsClient {
    config: WsConfig,
    sink: Arc<Mutex<Option<WsSink>>>,
    event_tx: mpsc::Sender<EventMessage>,
    event_rx: Arc<Mutex<mpsc::Receiver<EventMessage>>>,
    connected: Arc<RwLock<bool>>,
}

impl StroompWsClient {
    /// Creates a new WebSocket client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: WsConfig) -> Result<Self, WsError> {
        config.validate()?;

        let (event_tx, event_rx) = mpsc::channel(1000);

        Ok(Self {
            config,
            sink: Arc::new(Mutex::new(None)),
            event_tx,
            event_rx: Arc::new(Mutex::new(event_rx)),
            connected: Arc::new(RwLock::new(false)),
        })
    }

    /// Creates a new client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_defaults() -> Result<Self, WsError> {
        Self::new(WsConfig::default())
    }

    /// Creates a new client for the given URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn with_url(url: impl Into<String>) -> Result<Self, WsError> {
        Self::new(WsConfig::new(url))
    }

    /// Returns the client configuration.
    #[must_use]
    pub fn config(&self) -> &WsConfig {
        &self.config
    }

    /// Returns true if connected.
    pub async fn is_connected(&self) -> bool {
        *self.connected.read().await
    }

    /// Connects to the WebSocket server and joins the configured stream
    /// group.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection fails.
    pub async fn connect(&self) -> Result<(), WsError> {
        let url = self.config.connection_url();

        let (ws_stream, _) = tokio_tungstenite::connect_async(&url)
            .await
            .map_err(|e| WsError::Connection(e.to_string()))?;

        let (sink, source) = ws_stream.split();

        *self.sink.lock().await = Some(sink);
        *self.connected.write().await = true;

        self.spawn_reader(source);

        Ok(())
    }

    /// Spawns the message reader task.
    fn spawn_reader(&self, mut source: WsSource) {
        let event_tx = self.event_tx.clone();
        let connected = self.connected.clone();

        tokio::spawn(async move {
            while let Some(result) = source.next().await {
                match result {
                    Ok(Message::Text(text)) => {
                        if let Ok(msg) = serde_json::from_str::<EventMessage>(&text) {
                            let _ = event_tx.send(msg).await;
                        }
                    }
                    Ok(Message::Close(_)) => {
                        *connected.write().await = false;
                        break;
                    }
                    Err(_) => {
                        *connected.write().await = false;
                        break;
                    }
                    _ => {}
                }
            }
        });
    }

    /// Sends an arbitrary JSON payload to the server.
    ///
    /// The server echoes any inbound message back wrapped in an `echo`
    /// envelope.
    ///
    /// # Errors
    ///
    /// Returns an error if not connected or the send fails.
    pub async fn send_json(&self, payload: &Value) -> Result<(), WsError> {
        let json =
            serde_json::to_string(payload).map_err(|e| WsError::Serialization(e.to_string()))?;

        let mut sink_guard = self.sink.lock().await;
        let sink = sink_guard.as_mut().ok_or(WsError::NotConnected)?;

        sink.send(Message::Text(json.into()))
            .await
            .map_err(|e| WsError::SendFailed(e.to_string()))?;

        Ok(())
    }

    /// Returns the next event from the server.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection is closed.
    pub async fn next_event(&self) -> Result<EventMessage, WsError> {
        self.event_rx
            .lock()
            .await
            .recv()
            .await
            .ok_or(WsError::Closed)
    }

    /// Closes the connection gracefully.
    ///
    /// # Errors
    ///
    /// Returns an error if the close fails.
    pub async fn close(&self) -> Result<(), WsError> {
        *self.connected.write().await = false;

        if let Some(ref mut sink) = *self.sink.lock().await {
            let _ = sink.send(Message::Close(None)).await;
        }

        *self.sink.lock().await = None;

        Ok(())
    }
}
