// src/config.rs

use crate::error::ChatError;
use clap::Parser;
use std::net::{IpAddr, SocketAddr};

#[derive(Parser, Debug, Clone)]
#[command(name = "chat_relay")]
#[command(about = "Websocket chat relay")]
#[command(version)]
pub struct Config {
    /// Port to listen on
    #[arg(short, long, env = "CHAT_RELAY_PORT", default_value = "8080")]
    pub port: u16,

    /// Address to bind to
    #[arg(short, long, env = "CHAT_RELAY_BIND", default_value = "0.0.0.0")]
    pub bind: String,

    /// Enable verbose logging
    #[arg(short, long, env = "CHAT_RELAY_VERBOSE")]
    pub verbose: bool,
}

impl Config {
    pub fn socket_addr(&self) -> Result<SocketAddr, ChatError> {
        let ip: IpAddr = self
            .bind
            .parse()
            .map_err(|_| ChatError::InvalidAddress(self.bind.clone()))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    /// Default log filter, used when `RUST_LOG` is unset.
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "chat_relay=debug,tower_http=debug"
        } else {
            "chat_relay=info,tower_http=info"
        }
    }
}
