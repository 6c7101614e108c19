mod blackboard;   // brings `blackboard.rs` in as `crate::blackboard`
mod bus;          // brings `bus.rs` in as `crate::bus`
mod config;       // brings `config.rs` in as `crate::config`
mod server;       // brings `server.rs` in as `crate::server`

use std::sync::Arc;

use spin_sleep::SpinSleeper;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{self, EnvFilter};

use roverlink_sim::TICK_INTERVAL;

use crate::blackboard::Blackboard;
use crate::bus::Topic;
use crate::server::{AppState, ServerEvent};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    info!("Roverlink teleoperation server starting...");

    let settings = config::load_config()?;

    let bb: Blackboard = Arc::default();
    let frames: Topic<ServerEvent> = Topic::new(16);

    info!("Spawning simulation thread...");
    std::thread::Builder::new()
        .name("sim-tick".into())
        .spawn({
            let bb = Arc::clone(&bb);
            move || {
                info!("Simulation thread started.");
                let sleeper = SpinSleeper::new(100_000);
                loop {
                    sleeper.sleep(TICK_INTERVAL);
                    blackboard::advance(&bb);
                }
            }
        })?;

    let listener = TcpListener::bind(("0.0.0.0", settings.server.port)).await?;
    info!(
        port = settings.server.port,
        "Virtual robot simulation active; ready to accept WebSocket connections"
    );

    server::serve(
        listener,
        AppState {
            blackboard: bb,
            frames,
        },
    )
    .await
}
