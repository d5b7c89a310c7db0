// src/websocket.rs

use crate::{chat, models::decode_frame, state::ChatState};
use axum::{
    extract::{
        ws::{Message, WebSocket},
        State, WebSocketUpgrade,
    },
    response::IntoResponse,
};
use futures_util::{
    sink::SinkExt,
    stream::{SplitSink, SplitStream, StreamExt},
};
use tokio::sync::mpsc::Receiver;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// The main handler for WebSocket connections.
pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<ChatState>,
) -> impl IntoResponse {
    debug!("websocket upgrade requested");
    ws.on_upgrade(|socket| handle_socket(socket, state))
}

/// Manages the lifecycle of one connection: register, relay until either side ends, clean up.
async fn handle_socket(socket: WebSocket, state: ChatState) {
    let client_id = Uuid::new_v4();
    let (sender, receiver) = socket.split();

    let outbound = state.register(client_id);
    info!(%client_id, clients = state.client_count(), "client connected");

    let mut send_task = tokio::spawn(write_to_client(sender, outbound, client_id));
    let mut receive_task = tokio::spawn(read_from_client(receiver, client_id, state.clone()));

    // Whichever side finishes first ends the connection.
    tokio::select! {
        _ = &mut send_task => receive_task.abort(),
        _ = &mut receive_task => send_task.abort(),
    }

    state.remove(client_id);
    info!(%client_id, clients = state.client_count(), "client disconnected");
}

/// Drains the client's queue into its socket.
async fn write_to_client(
    mut sender: SplitSink<WebSocket, Message>,
    mut outbound: Receiver<String>,
    client_id: Uuid,
) {
    while let Some(payload) = outbound.recv().await {
        if sender.send(Message::Text(payload.into())).await.is_err() {
            warn!(%client_id, "failed to send message to client");
            break;
        }
    }
}

/// Reads frames from a client and hands each decoded command to the handler.
async fn read_from_client(mut receiver: SplitStream<WebSocket>, client_id: Uuid, state: ChatState) {
    let id = client_id.to_string();

    while let Some(Ok(msg)) = receiver.next().await {
        match msg {
            Message::Text(text) => match decode_frame(text.as_str(), &id) {
                Ok(command) => {
                    debug!(%client_id, ?command, "received command");
                    chat::handle(command, &state);
                }
                Err(e) => warn!(%client_id, error = %e, "ignoring malformed frame"),
            },
            Message::Close(_) => break,
            Message::Binary(_) | Message::Ping(_) | Message::Pong(_) => {}
        }
    }
}
