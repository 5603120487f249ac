//! End-to-end WebSocket flow tests.
//!
//! Runs the full server on an ephemeral port and drives it with a real
//! WebSocket client: join, welcome, echo, donation fan-out, teardown.

use std::time::Duration;

use chrono::Utc;
use futures_util::{SinkExt, StreamExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::time::{sleep, timeout};
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream};

use stroomp_api::{router, AppState};
use stroomp_sdk::types::{Donation, WalletAddress};
use stroomp_sdk::ws::EventMessage;

type WsStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

const RECV_TIMEOUT: Duration = Duration::from_secs(2);

fn streamer() -> WalletAddress {
    WalletAddress::from_bytes([2u8; 32])
}

fn sample_donation() -> Donation {
    Donation {
        id: "donation-1".to_string(),
        from: WalletAddress::from_bytes([1u8; 32]),
        to: streamer(),
        amount: 2500,
        message: Some("nice clutch".to_string()),
        tx_signature: "sig".to_string(),
        timestamp: Utc::now(),
        is_anonymous: false,
    }
}

/// Serves the app on an ephemeral port and returns its ws base URL.
async fn spawn_server(state: AppState) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    let app = router(state);

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });

    format!("ws://{}/ws", addr)
}

async fn connect(url: &str) -> WsStream {
    let (socket, _) = tokio_tungstenite::connect_async(url).await.expect("connect");
    socket
}

/// Reads the next event frame, skipping transport-level frames.
async fn next_event(socket: &mut WsStream) -> EventMessage {
    loop {
        let frame = timeout(RECV_TIMEOUT, socket.next())
            .await
            .expect("timed out waiting for event")
            .expect("stream ended")
            .expect("transport error");

        if let Message::Text(text) = frame {
            return serde_json::from_str(&text).expect("event envelope");
        }
    }
}

#[tokio::test]
async fn test_welcome_carries_resolved_group() {
    let url = spawn_server(AppState::new()).await;

    let mut viewer = connect(&format!("{}?streamId=s1", url)).await;
    match next_event(&mut viewer).await {
        EventMessage::Welcome(info) => assert_eq!(info.stream_id, "s1"),
        other => panic!("expected welcome, got {:?}", other),
    }

    let mut lurker = connect(&url).await;
    match next_event(&mut lurker).await {
        EventMessage::Welcome(info) => assert_eq!(info.stream_id, "global"),
        other => panic!("expected welcome, got {:?}", other),
    }
}

#[tokio::test]
async fn test_echo_round_trip() {
    let url = spawn_server(AppState::new()).await;

    let mut client = connect(&url).await;
    next_event(&mut client).await; // welcome

    client
        .send(Message::Text(r#"{"hello":"world"}"#.into()))
        .await
        .expect("send");

    match next_event(&mut client).await {
        EventMessage::Echo(data) => assert_eq!(data["hello"], "world"),
        other => panic!("expected echo, got {:?}", other),
    }
}

#[tokio::test]
async fn test_malformed_message_keeps_connection_open() {
    let url = spawn_server(AppState::new()).await;

    let mut client = connect(&url).await;
    next_event(&mut client).await; // welcome

    client
        .send(Message::Text("this is not json".into()))
        .await
        .expect("send");

    // The malformed message is dropped; the next valid one still echoes.
    client
        .send(Message::Text(r#"{"still":"alive"}"#.into()))
        .await
        .expect("send");

    match next_event(&mut client).await {
        EventMessage::Echo(data) => assert_eq!(data["still"], "alive"),
        other => panic!("expected echo, got {:?}", other),
    }
}

#[tokio::test]
async fn test_donation_fanout() {
    let state = AppState::new();
    let url = spawn_server(state.clone()).await;

    let mut viewer = connect(&format!("{}?streamId={}", url, streamer())).await;
    next_event(&mut viewer).await; // welcome

    let mut lurker = connect(&url).await;
    next_event(&mut lurker).await; // welcome

    state.dispatcher.donation_created(&sample_donation()).await;

    // The stream viewer gets the full donation first, then the notice.
    match next_event(&mut viewer).await {
        EventMessage::Donation(donation) => {
            assert_eq!(donation.amount, 2500);
            assert_eq!(donation.tx_signature, "sig");
        }
        other => panic!("expected donation, got {:?}", other),
    }
    match next_event(&mut viewer).await {
        EventMessage::GlobalDonation(notice) => assert_eq!(notice.amount, 2500),
        other => panic!("expected global_donation, got {:?}", other),
    }

    // The global lurker only sees the redacted notice.
    match next_event(&mut lurker).await {
        EventMessage::GlobalDonation(notice) => {
            assert_eq!(notice.amount, 2500);
            assert_eq!(notice.to, streamer());
        }
        other => panic!("expected global_donation, got {:?}", other),
    }
}

#[tokio::test]
async fn test_disconnect_leaves_group() {
    let state = AppState::new();
    let url = spawn_server(state.clone()).await;

    let mut viewer = connect(&format!("{}?streamId=s1", url)).await;
    next_event(&mut viewer).await; // welcome
    assert_eq!(state.registry.member_count("s1").await, 1);

    viewer.close(None).await.expect("close");

    // Teardown is asynchronous; wait for the registry to observe it.
    for _ in 0..50 {
        if state.registry.member_count("s1").await == 0 {
            break;
        }
        sleep(Duration::from_millis(50)).await;
    }
    assert_eq!(state.registry.member_count("s1").await, 0);
    assert_eq!(state.registry.group_count().await, 0);

    // Sending into the emptied group reaches nobody and does not error.
    let delivered = state
        .registry
        .send_to_stream("s1", &EventMessage::echo(serde_json::json!({"x": 1})))
        .await;
    assert_eq!(delivered, 0);
}
