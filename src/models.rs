// src/models.rs

use serde::{Deserialize, Serialize};

use crate::error::ChatError;

/// A command from a client, stamped with the id of the connection it arrived on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ClientMessage {
    Connect { username: String, id: String },
    NewMessage { content: String, id: String },
}

/// A client command as it appears on the wire.
/// Clients never send an id; the server attaches the connection's own.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type")] // Use a 'type' field to determine which variant it is
pub enum ClientFrame {
    Connect { username: String },
    NewMessage { content: String },
}

impl ClientFrame {
    pub fn into_command(self, id: impl Into<String>) -> ClientMessage {
        let id = id.into();
        match self {
            ClientFrame::Connect { username } => ClientMessage::Connect { username, id },
            ClientFrame::NewMessage { content } => ClientMessage::NewMessage { content, id },
        }
    }
}

/// A notification broadcast by the server to every connected client.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(tag = "type")]
pub enum ServerMessage {
    UserJoined { username: String, id: String },
    NewMessage { content: String, id: String },
}

/// Decodes a text frame into a command for the connection `id`.
pub fn decode_frame(text: &str, id: &str) -> Result<ClientMessage, ChatError> {
    let frame: ClientFrame = serde_json::from_str(text).map_err(ChatError::Decode)?;
    Ok(frame.into_command(id))
}
