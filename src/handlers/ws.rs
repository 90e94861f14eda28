use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    response::Response,
};
use futures_util::stream::SplitSink;
use futures_util::{SinkExt, StreamExt};

use crate::models::mood::MoodEntry;
use crate::AppState;

/// GET /ws — live timeline feed. Each text frame is the complete current
/// list as a JSON array, newest first; one frame on connect, then one per
/// store write from any client.
pub async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(socket: WebSocket, state: AppState) {
    // Subscribe before the initial read so a write landing in between
    // still reaches this session.
    let mut subscription = state.feed.subscribe();

    let initial = match state.store.list_moods().await {
        Ok(entries) => entries,
        Err(err) => {
            // Closing the socket hands recovery to the client's
            // re-establish-on-mount policy.
            tracing::error!(error = %err, "could not read initial feed snapshot");
            return;
        }
    };

    let (mut sender, mut receiver) = socket.split();

    tracing::debug!("feed connection established");

    if send_snapshot(&mut sender, &initial).await.is_err() {
        return;
    }

    // Forward every published snapshot until the subscriber goes away.
    let mut send_task = tokio::spawn(async move {
        while let Some(snapshot) = subscription.recv().await {
            if send_snapshot(&mut sender, &snapshot).await.is_err() {
                break;
            }
        }
    });

    // The feed is one-way; client frames only matter for Close.
    let mut recv_task = tokio::spawn(async move {
        while let Some(Ok(msg)) = receiver.next().await {
            if let Message::Close(_) = msg {
                break;
            }
        }
    });

    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
    }

    tracing::debug!("feed connection closed");
}

async fn send_snapshot(
    sender: &mut SplitSink<WebSocket, Message>,
    snapshot: &[MoodEntry],
) -> Result<(), axum::Error> {
    let payload = match serde_json::to_string(snapshot) {
        Ok(payload) => payload,
        Err(err) => {
            tracing::error!(error = %err, "could not serialize feed snapshot");
            return Ok(());
        }
    };
    sender.send(Message::Text(payload)).await
}
