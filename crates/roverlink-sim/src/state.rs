//! The kinematic simulator: authoritative robot state, command application,
//! and the fixed-rate integration step.

use std::time::Duration;

use roverlink_kinematics::{Position, normalize_degrees};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::command::{Command, CommandKind};

/// Wall-clock interval between integration steps (10 Hz).
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Degrees stepped per turn command. Fixed: turning is never speed-scaled.
pub const TURN_STEP_DEG: f64 = 5.0;

/// Divisor mapping the 0–100 speed scale onto per-tick displacement.
const SPEED_SCALE: f64 = 100.0;

/// Coarse motion status, derived from the last command rather than from the
/// physics: `Moving` and `Turning` are mutually exclusive even though a real
/// chassis could do both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    /// No motion; position holds between ticks.
    Stopped,
    /// Translating along the current heading every tick.
    Moving,
    /// Heading just stepped; position holds until a move command arrives.
    Turning,
}

/// The authoritative simulated robot state.
///
/// One instance lives for the server process lifetime. Whichever command
/// arrived last wins; there is no per-client ownership.
#[derive(Debug, Clone, PartialEq)]
pub struct RobotState {
    /// Unrounded position on the unbounded plane.
    pub position: Position,
    /// Heading in degrees, kept normalized to `[0, 360)`.
    pub direction: f64,
    /// Signed speed; sign is forward/backward, magnitude is
    /// `command speed × intensity`.
    pub speed: f64,
    /// Last-command-derived motion status.
    pub status: Status,
    /// Most recently applied command name, for display only.
    pub last_command: Option<CommandKind>,
}

impl Default for RobotState {
    fn default() -> Self {
        RobotState {
            position: Position::default(),
            direction: 0.0,
            speed: 0.0,
            status: Status::Stopped,
            last_command: None,
        }
    }
}

impl RobotState {
    /// A robot at the origin, heading 0, stopped.
    pub fn new() -> Self {
        RobotState::default()
    }

    /// Apply one command to the control state. Infallible: missing
    /// parameters fall back to defaults, unknown names record into
    /// `last_command` and mutate nothing else.
    pub fn apply(&mut self, cmd: &Command) {
        debug!(command = %cmd.command, "applying drive command");
        self.last_command = Some(cmd.command);

        match cmd.command {
            CommandKind::Forward => {
                self.speed = cmd.speed_or_default() * cmd.intensity_or_default();
                self.status = Status::Moving;
            }
            CommandKind::Backward => {
                self.speed = -cmd.speed_or_default() * cmd.intensity_or_default();
                self.status = Status::Moving;
            }
            CommandKind::Left => {
                self.direction = normalize_degrees(self.direction - TURN_STEP_DEG);
                self.status = Status::Turning;
            }
            CommandKind::Right => {
                self.direction = normalize_degrees(self.direction + TURN_STEP_DEG);
                self.status = Status::Turning;
            }
            CommandKind::Stop => {
                self.speed = 0.0;
                self.status = Status::Stopped;
            }
            CommandKind::Unknown => {}
        }
    }

    /// One integration step, called every [`TICK_INTERVAL`] of wall-clock
    /// time regardless of command activity.
    ///
    /// Only a `Moving` robot translates; turning changes heading at the
    /// command instant, not continuously.
    pub fn tick(&mut self) {
        if self.status == Status::Moving {
            self.position.advance(self.direction, self.speed / SPEED_SCALE);
        }
    }

    /// The externally visible projection: position rounded to hundredths,
    /// everything else verbatim.
    pub fn snapshot(&self) -> RobotStateView {
        RobotStateView {
            position: self.position.rounded(),
            direction: self.direction,
            speed: self.speed,
            status: self.status,
            last_command: self.last_command,
        }
    }
}

/// The state projection broadcast to observers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotStateView {
    /// Position rounded to two decimal places.
    pub position: Position,
    /// Heading in degrees, `[0, 360)`.
    pub direction: f64,
    /// Signed speed.
    pub speed: f64,
    /// Motion status.
    pub status: Status,
    /// Last applied command name; `null` until the first command.
    pub last_command: Option<CommandKind>,
}
