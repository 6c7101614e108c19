//! The WebSocket endpoint: wire envelopes, per-connection loop, and state
//! frame fan-out.
//!
//! Envelopes are adjacently tagged (`event` / `data`) with kebab-case event
//! names, the plain-WebSocket rendering of the original controller's
//! (event, payload) pairs.

use axum::Router;
use axum::extract::State;
use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::response::IntoResponse;
use axum::routing::get;
use futures_util::StreamExt;
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tokio::sync::broadcast::error::RecvError;
use tower_http::cors::CorsLayer;
use tracing::{debug, error, info, warn};

use roverlink_sim::{Command, RobotStateView};

use crate::blackboard::{self, Blackboard};
use crate::bus::Topic;

/// Everything a socket task needs: the state handle and the frame topic.
#[derive(Clone)]
pub struct AppState {
    pub blackboard: Blackboard,
    pub frames: Topic<ServerEvent>,
}

/// Messages the server accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ClientEvent {
    /// One operator command for the simulated robot.
    RobotCommand(Command),
}

/// Messages the server emits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum ServerEvent {
    /// Authoritative state, sent on connect and after every command.
    RobotState(RobotStateView),
    /// Acknowledgment sent only to the connection that issued the command.
    CommandReceived(CommandAck),
}

/// Payload of the `command-received` acknowledgment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommandAck {
    pub status: AckStatus,
    /// Echo of the command as the client sent it.
    pub command: Command,
    pub robot_state: RobotStateView,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AckStatus {
    Success,
}

/// One route: `GET /ws` upgrades to the teleoperation socket. Cross-origin
/// access is unrestricted, matching the original controller.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/ws", get(ws_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

pub async fn serve(listener: TcpListener, state: AppState) -> anyhow::Result<()> {
    info!(addr = %listener.local_addr()?, "teleoperation endpoint listening");
    axum::serve(listener, router(state)).await?;
    Ok(())
}

async fn ws_handler(ws: WebSocketUpgrade, State(state): State<AppState>) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

async fn handle_socket(mut socket: WebSocket, state: AppState) {
    let mut frames = state.frames.subscribe();
    info!(observers = state.frames.observer_count(), "client connected");

    // Every connection starts from the current authoritative state.
    let hello = ServerEvent::RobotState(blackboard::snapshot(&state.blackboard));
    if send_event(&mut socket, &hello).await.is_err() {
        return;
    }

    loop {
        tokio::select! {
            inbound = socket.next() => match inbound {
                Some(Ok(Message::Text(text))) => match serde_json::from_str::<ClientEvent>(&text) {
                    Ok(ClientEvent::RobotCommand(cmd)) => {
                        if handle_command(&mut socket, &state, cmd).await.is_err() {
                            break;
                        }
                    }
                    Err(err) => {
                        warn!(%err, "discarding malformed client message");
                    }
                },
                Some(Ok(Message::Close(_))) | None => break,
                Some(Ok(_)) => continue,
                Some(Err(err)) => {
                    error!(%err, "websocket receive error");
                    break;
                }
            },
            frame = frames.recv() => match frame {
                Ok(event) => {
                    if send_event(&mut socket, &event).await.is_err() {
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "observer lagged behind state frames, resyncing");
                    let resync = ServerEvent::RobotState(blackboard::snapshot(&state.blackboard));
                    if send_event(&mut socket, &resync).await.is_err() {
                        break;
                    }
                }
                Err(RecvError::Closed) => break,
            },
        }
    }

    // However the session ended, leave the robot halted.
    info!("client disconnected");
    let view = blackboard::apply_command(&state.blackboard, &Command::stop());
    state.frames.publish(ServerEvent::RobotState(view));
}

/// Apply a command inside the blackboard critical section, ack the sender,
/// then publish the fresh snapshot for every observer.
async fn handle_command(
    socket: &mut WebSocket,
    state: &AppState,
    cmd: Command,
) -> Result<(), ()> {
    info!(command = %cmd.command, "received command");
    debug!(frame = %cmd.drive_frame(), "drive frame");

    let view = blackboard::apply_command(&state.blackboard, &cmd);
    let ack = ServerEvent::CommandReceived(CommandAck {
        status: AckStatus::Success,
        command: cmd,
        robot_state: view.clone(),
    });
    send_event(socket, &ack).await?;
    state.frames.publish(ServerEvent::RobotState(view));
    Ok(())
}

async fn send_event(socket: &mut WebSocket, event: &ServerEvent) -> Result<(), ()> {
    let text = match serde_json::to_string(event) {
        Ok(value) => value,
        Err(err) => {
            error!("failed to serialize state frame: {err}");
            return Err(());
        }
    };
    socket
        .send(Message::Text(text.into()))
        .await
        .map_err(|err| {
            debug!("websocket send failed: {err}");
        })
}
