// src/state.rs

use crate::{chat::Announcer, error::ChatError, models::ServerMessage};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::mpsc::{self, error::TrySendError, Receiver, Sender};
use tracing::{debug, error, warn};
use uuid::Uuid;

/// Frames queued per client before further broadcasts to it are dropped.
pub const CLIENT_BUFFER_SIZE: usize = 64;

/// A connected client. Serialized frames queued here are written to its socket
/// by the connection's writer task.
pub struct Client {
    pub sender: Sender<String>,
}

/// The application's shared state, accessible from all request handlers.
/// Created once in `main.rs` and shared across all connections via Axum's state management.
#[derive(Clone, Default)]
pub struct ChatState {
    clients: Arc<Mutex<HashMap<Uuid, Client>>>,
}

impl ChatState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a client and returns the queue its writer task drains.
    pub fn register(&self, client_id: Uuid) -> Receiver<String> {
        let (sender, receiver) = mpsc::channel(CLIENT_BUFFER_SIZE);
        let mut clients = self.lock();
        clients.insert(client_id, Client { sender });
        debug!(%client_id, total = clients.len(), "client registered");
        receiver
    }

    pub fn remove(&self, client_id: Uuid) {
        let mut clients = self.lock();
        if clients.remove(&client_id).is_some() {
            debug!(%client_id, total = clients.len(), "client removed");
        }
    }

    pub fn client_count(&self) -> usize {
        self.lock().len()
    }

    // The map is only touched by non-panicking code, so a poisoned lock still holds a valid map.
    fn lock(&self) -> MutexGuard<'_, HashMap<Uuid, Client>> {
        self.clients.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Announcer for ChatState {
    /// Queues the notification for every registered client, the originator included.
    fn announce(&self, message: ServerMessage) {
        let payload = match serde_json::to_string(&message).map_err(ChatError::Encode) {
            Ok(payload) => payload,
            Err(e) => {
                error!(error = %e, "dropping announcement");
                return;
            }
        };

        let clients = self.lock();
        debug!(recipients = clients.len(), %payload, "broadcasting");
        for (id, client) in clients.iter() {
            match client.sender.try_send(payload.clone()) {
                Ok(()) => {}
                Err(TrySendError::Full(_)) => {
                    warn!(client_id = %id, "client queue full, dropping message");
                }
                // The connection is shutting down; its own task removes it.
                Err(TrySendError::Closed(_)) => {
                    warn!(client_id = %id, "client queue closed, dropping message");
                }
            }
        }
    }
}
