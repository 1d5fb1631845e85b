use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use futures_util::StreamExt;
use tokio::sync::broadcast;
use tokio::task::JoinHandle;
use tokio::time::sleep;
use tokio_tungstenite::connect_async;
use tokio_tungstenite::tungstenite::Message;
use tracing::{debug, error, info, warn};

use flowdose_core::DeviceStatus;

use crate::config::DeviceConfig;

/// Events published by the live channel.
#[derive(Debug, Clone)]
pub enum LiveEvent {
    Connected,
    /// One full status snapshot; each frame replaces the previous one
    /// wholesale.
    Status(DeviceStatus),
    Disconnected,
}

/// Owns the push socket exclusively. The socket is recreated, never
/// reused, on every reconnect, and reconnection runs at a fixed delay
/// forever; the device is either coming back or rebooting.
#[derive(Clone)]
pub struct LiveStateClient {
    connected: Arc<AtomicBool>,
    events_tx: broadcast::Sender<LiveEvent>,
    // Keeps the socket loop alive for as long as any clone exists.
    _loop_handle: Arc<JoinHandle<()>>,
}

impl LiveStateClient {
    pub fn spawn(config: DeviceConfig) -> Self {
        let connected = Arc::new(AtomicBool::new(false));
        let (events_tx, _) = broadcast::channel(64);
        let connected_clone = connected.clone();
        let events_clone = events_tx.clone();

        let loop_handle = tokio::spawn(async move {
            run_socket_loop(config, connected_clone, events_clone).await;
        });

        Self {
            connected,
            events_tx,
            _loop_handle: Arc::new(loop_handle),
        }
    }

    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::Relaxed)
    }

    pub fn events(&self) -> broadcast::Receiver<LiveEvent> {
        self.events_tx.subscribe()
    }
}

async fn run_socket_loop(
    config: DeviceConfig,
    connected: Arc<AtomicBool>,
    events_tx: broadcast::Sender<LiveEvent>,
) {
    let url = config.ws_url();
    loop {
        match connect_async(url.as_str()).await {
            Ok((mut stream, _)) => {
                info!(%url, "live channel connected");
                connected.store(true, Ordering::Relaxed);
                let _ = events_tx.send(LiveEvent::Connected);

                while let Some(frame) = stream.next().await {
                    match frame {
                        Ok(Message::Text(text)) => {
                            match serde_json::from_str::<DeviceStatus>(&text) {
                                Ok(status) => {
                                    let _ = events_tx.send(LiveEvent::Status(status));
                                }
                                Err(err) => warn!(%err, "dropping malformed status frame"),
                            }
                        }
                        Ok(Message::Close(_)) => {
                            info!("live channel closed by device");
                            break;
                        }
                        Ok(other) => debug!(?other, "ignoring non-status frame"),
                        Err(err) => {
                            error!(%err, "live channel error");
                            break;
                        }
                    }
                }

                connected.store(false, Ordering::Relaxed);
                let _ = events_tx.send(LiveEvent::Disconnected);
            }
            Err(err) => {
                error!(%err, "live channel connect failed");
            }
        }

        sleep(config.reconnect_delay).await;
    }
}
