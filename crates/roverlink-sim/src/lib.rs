//! Command protocol and kinematic state machine for the roverlink
//! teleoperation server.
//!
//! Two halves, mirroring the two ends of the link:
//!
//! - [`encoder`]: maps raw joystick geometry (angle, displacement, distance)
//!   into the discrete command vocabulary plus continuous parameters.
//! - [`state`]: the authoritative simulated robot — applies commands to its
//!   control parameters and advances position at a fixed rate.
//!
//! [`command`] carries the wire schema both halves share. Nothing in this
//! crate can fail: missing parameters fall back to defaults, unknown command
//! names are recorded and otherwise ignored.

pub mod command;
pub mod encoder;
pub mod state;

pub use command::{Command, CommandKind, DEFAULT_INTENSITY, DEFAULT_SPEED};
pub use state::{RobotState, RobotStateView, Status, TICK_INTERVAL, TURN_STEP_DEG};
