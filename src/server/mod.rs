//! WebSocket push server: one session at a time over the shared rig.

use crate::core::engine::RadarEngine;
use crate::domain::model::Reading;
use crate::domain::ports::{DistanceSensor, ReadingSink, SweepServo};
use crate::utils::error::Result;
use async_trait::async_trait;
use futures_util::SinkExt;
use std::net::SocketAddr;
use tokio::net::{TcpListener, TcpStream};
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::WebSocketStream;
use tracing::{info, warn};

/// `ReadingSink` over an accepted WebSocket connection. Send failures caused
/// by the peer closing surface through `RadarError::is_disconnect`.
pub struct WsSink {
    ws: WebSocketStream<TcpStream>,
}

impl WsSink {
    pub fn new(ws: WebSocketStream<TcpStream>) -> Self {
        Self { ws }
    }
}

#[async_trait]
impl ReadingSink for WsSink {
    async fn publish(&mut self, reading: &Reading) -> Result<()> {
        let payload = serde_json::to_string(reading)?;
        self.ws.send(Message::text(payload)).await?;
        Ok(())
    }
}

pub struct RadarServer {
    listener: TcpListener,
}

impl RadarServer {
    pub async fn bind(addr: &str) -> Result<Self> {
        let listener = TcpListener::bind(addr).await?;
        Ok(Self { listener })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Accept clients forever, running one engine session per connection.
    /// There is a single rig, so sessions are strictly sequential; a second
    /// client waits in the TCP backlog until the current one disconnects.
    pub async fn run<S, V>(&self, mut engine: RadarEngine<S, V>) -> Result<()>
    where
        S: DistanceSensor,
        V: SweepServo,
    {
        loop {
            let (stream, peer) = self.listener.accept().await?;
            info!("Client connected: {}", peer);

            let ws = match tokio_tungstenite::accept_async(stream).await {
                Ok(ws) => ws,
                Err(e) => {
                    warn!("WebSocket handshake failed for {}: {}", peer, e);
                    continue;
                }
            };

            let mut sink = WsSink::new(ws);
            let published = engine.run_session(&mut sink).await?;
            info!("Client disconnected: {} ({} readings sent)", peer, published);
        }
    }
}
