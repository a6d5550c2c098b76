// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Live roster change streaming for connected clients.
//!
//! This module provides read-only, non-authoritative change
//! notifications via WebSocket connections. Events describe what
//! changed in the canonical roster, never directives or domain logic.
//!
//! # Architecture
//!
//! - Events are broadcast to all connected clients
//! - Events are informational only and never authoritative
//! - No commands are executed over WebSocket connections
//! - Clients must still query canonical state via HTTP for
//!   authoritative data

use axum::{
    extract::{
        State as AxumState, WebSocketUpgrade,
        ws::{Message, WebSocket},
    },
    response::Response,
};
use futures::{SinkExt, stream::StreamExt};
use serde::Serialize;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, error, info, warn};

use party_roster::ScheduleChange;

/// Maximum number of events to buffer in the broadcast channel.
/// If clients cannot keep up, older events will be dropped.
const EVENT_BUFFER_SIZE: usize = 100;

/// Live roster event types.
///
/// These events are derived from successful transitions, not the
/// source of truth.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum LiveEvent {
    /// A schedule was created.
    ScheduleCreated {
        /// The schedule identifier.
        schedule_id: String,
    },
    /// An existing schedule changed.
    ScheduleChanged {
        /// The schedule identifier.
        schedule_id: String,
        /// What the transition changed.
        change: ScheduleChange,
    },
    /// A schedule was deleted.
    ScheduleDeleted {
        /// The schedule identifier.
        schedule_id: String,
    },
    /// Connection confirmation (sent on initial connect).
    Connected {
        /// Server timestamp (ISO 8601).
        timestamp: String,
    },
}

/// Broadcaster for live roster events.
///
/// A lightweight wrapper around `tokio::sync::broadcast` that lets
/// multiple WebSocket clients receive change notifications.
#[derive(Clone)]
pub struct LiveEventBroadcaster {
    /// The broadcast channel sender.
    tx: broadcast::Sender<LiveEvent>,
}

impl LiveEventBroadcaster {
    /// Creates a new event broadcaster.
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(EVENT_BUFFER_SIZE);
        Self { tx }
    }

    /// Broadcasts an event to all connected clients.
    ///
    /// If no clients are connected, the event is silently dropped.
    /// This is non-blocking and never waits for clients.
    pub fn broadcast(&self, event: &LiveEvent) {
        match self.tx.send(event.clone()) {
            Ok(count) => {
                debug!(?event, receivers = count, "Broadcast live event");
            }
            Err(_) => {
                // No receivers, which is fine
                debug!(?event, "No receivers for live event");
            }
        }
    }

    /// Subscribes to the event stream.
    ///
    /// Events sent before subscription are not received.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<LiveEvent> {
        self.tx.subscribe()
    }
}

impl Default for LiveEventBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}

/// Handles WebSocket upgrade requests for live event streaming.
///
/// # Arguments
///
/// * `ws` - WebSocket upgrade request
/// * `broadcaster` - The live event broadcaster from application state
///
/// # Returns
///
/// An HTTP response that upgrades the connection to WebSocket
#[allow(clippy::unused_async)]
pub async fn live_events_handler(
    ws: WebSocketUpgrade,
    AxumState(broadcaster): AxumState<Arc<LiveEventBroadcaster>>,
) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, broadcaster))
}

/// Handles an individual WebSocket connection.
///
/// Sends a connection confirmation, then streams all live events until
/// the client disconnects or an error occurs.
async fn handle_socket(socket: WebSocket, broadcaster: Arc<LiveEventBroadcaster>) {
    info!("Client connected to live event stream");

    let (mut sender, mut receiver) = socket.split();
    let mut rx: broadcast::Receiver<LiveEvent> = broadcaster.subscribe();

    // Send connection confirmation
    let connected_event = LiveEvent::Connected {
        timestamp: time::OffsetDateTime::now_utc()
            .format(&time::format_description::well_known::Iso8601::DEFAULT)
            .unwrap_or_else(|_| String::from("unknown")),
    };

    if let Ok(json) = serde_json::to_string(&connected_event)
        && sender.send(Message::Text(json.into())).await.is_err()
    {
        warn!("Failed to send connection confirmation");
        return;
    }

    // Task for sending events to the client
    let mut send_task = tokio::spawn(async move {
        while let Ok(event) = rx.recv().await {
            match serde_json::to_string(&event) {
                Ok(json) => {
                    if sender.send(Message::Text(json.into())).await.is_err() {
                        // Client disconnected
                        break;
                    }
                }
                Err(e) => {
                    error!(?e, "Failed to serialize live event");
                }
            }
        }
    });

    // Task for receiving messages from the client (though we don't expect any)
    let mut recv_task = tokio::spawn(async move {
        while let Some(msg) = receiver.next().await {
            match msg {
                Ok(Message::Text(_) | Message::Binary(_)) => {
                    // We don't process commands over WebSocket
                    warn!("Received unexpected message from client, ignoring");
                }
                Ok(Message::Close(_)) => {
                    debug!("Client sent close frame");
                    break;
                }
                Ok(Message::Ping(_) | Message::Pong(_)) => {
                    // Ping/pong handled automatically by Axum
                }
                Err(e) => {
                    error!(?e, "WebSocket receive error");
                    break;
                }
            }
        }
    });

    // Wait for either task to complete
    tokio::select! {
        _ = &mut send_task => {
            debug!("Send task completed");
            recv_task.abort();
        }
        _ = &mut recv_task => {
            debug!("Receive task completed");
            send_task.abort();
        }
    }

    info!("Client disconnected from live event stream");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_broadcaster_creation() {
        let broadcaster = LiveEventBroadcaster::new();
        assert_eq!(broadcaster.tx.receiver_count(), 0);
    }

    #[test]
    fn test_broadcast_no_receivers() {
        let broadcaster = LiveEventBroadcaster::new();
        // Should not panic when no receivers
        broadcaster.broadcast(&LiveEvent::ScheduleDeleted {
            schedule_id: String::from("sched-1"),
        });
    }

    #[test]
    fn test_broadcast_with_receiver() {
        let broadcaster = LiveEventBroadcaster::new();
        let mut rx = broadcaster.subscribe();

        broadcaster.broadcast(&LiveEvent::ScheduleCreated {
            schedule_id: String::from("sched-1"),
        });

        match rx.try_recv() {
            Ok(LiveEvent::ScheduleCreated { schedule_id }) => {
                assert_eq!(schedule_id, "sched-1");
            }
            other => panic!("Expected ScheduleCreated, got {other:?}"),
        }
    }

    #[test]
    fn test_multiple_receivers() {
        let broadcaster = LiveEventBroadcaster::new();
        let mut rx1 = broadcaster.subscribe();
        let mut rx2 = broadcaster.subscribe();

        broadcaster.broadcast(&LiveEvent::ScheduleDeleted {
            schedule_id: String::from("sched-1"),
        });

        // Both receivers should get the event
        assert!(matches!(
            rx1.try_recv(),
            Ok(LiveEvent::ScheduleDeleted { .. })
        ));
        assert!(matches!(
            rx2.try_recv(),
            Ok(LiveEvent::ScheduleDeleted { .. })
        ));
    }

    #[test]
    fn test_event_serialization() {
        let event = LiveEvent::ScheduleChanged {
            schedule_id: String::from("sched-1"),
            change: ScheduleChange::MemberJoined {
                nickname: String::from("Mira"),
            },
        };

        let json = serde_json::to_string(&event).expect("Failed to serialize");

        assert!(json.contains("\"type\":\"schedule_changed\""));
        assert!(json.contains("\"schedule_id\":\"sched-1\""));
        assert!(json.contains("\"kind\":\"member_joined\""));
        assert!(json.contains("\"nickname\":\"Mira\""));
    }
}
