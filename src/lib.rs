// src/lib.rs

//! A websocket chat relay. Clients announce themselves and post messages;
//! every command becomes one notification broadcast to all connected clients.

pub mod chat;
pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
pub mod websocket;

pub use chat::{handle, Announcer};
pub use error::ChatError;
pub use models::{ClientMessage, ServerMessage};
pub use routes::app;
pub use state::ChatState;
