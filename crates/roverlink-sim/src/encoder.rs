//! The command encoder: joystick gesture geometry in, [`Command`] values out.
//!
//! The operator console drives two sticks. The vertical-only stick maps pull
//! distance onto speed; the omnidirectional stick maps its angle onto one of
//! four quadrant commands with a displacement-derived intensity. The UI layer
//! owns event wiring and the connected-socket guard — an emission attempted
//! while the channel is down is silently dropped, never queued or retried.

use crate::command::{Command, CommandKind};

/// Ceiling of the speed scale.
pub const MAX_SPEED: f64 = 100.0;

/// Stick distance units per speed point.
const SPEED_DIVISOR: f64 = 2.0;

/// Stick distance at which intensity saturates.
const INTENSITY_DIVISOR: f64 = 50.0;

/// Vertical pull direction reported by the speed stick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pull {
    /// Stick pulled up: drive forwards.
    Up,
    /// Stick pulled down: drive backwards.
    Down,
}

/// Which stick a release event came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// The vertical-only speed stick.
    Speed,
    /// The omnidirectional direction stick.
    Direction,
}

/// Encode a movement event on the speed stick.
///
/// Speed is `min(|distance| / 2, 100)`, clamped to `[0, 100]`.
pub fn speed_axis(distance: f64, pull: Pull) -> Command {
    let command = match pull {
        Pull::Up => CommandKind::Forward,
        Pull::Down => CommandKind::Backward,
    };
    let mut cmd = Command::bare(command);
    cmd.speed = Some((distance.abs() / SPEED_DIVISOR).min(MAX_SPEED));
    cmd
}

/// Encode a movement event on the direction stick.
///
/// The angle picks a quadrant command (see [`heading_command`]); intensity is
/// `min(distance / 50, 1)`, clamped to `[0, 1]`.
pub fn direction_axis(angle_deg: f64, distance: f64) -> Command {
    let mut cmd = Command::bare(heading_command(angle_deg));
    cmd.angle = Some(angle_deg);
    cmd.intensity = Some((distance / INTENSITY_DIVISOR).clamp(0.0, 1.0));
    cmd
}

/// Map a stick angle in degrees onto a quadrant command.
///
/// Quadrants are half-open with the boundary belonging to the lower one, and
/// `right` is the fallback bucket covering `[0, 45]` and `(315, 360)`.
pub fn heading_command(angle_deg: f64) -> CommandKind {
    if angle_deg > 45.0 && angle_deg <= 135.0 {
        CommandKind::Forward
    } else if angle_deg > 135.0 && angle_deg <= 225.0 {
        CommandKind::Left
    } else if angle_deg > 225.0 && angle_deg <= 315.0 {
        CommandKind::Backward
    } else {
        CommandKind::Right
    }
}

/// Encode a stick release: stop, with the released axis' field zeroed and
/// the ramp-down marker carried for a future consumer.
pub fn release(axis: Axis) -> Command {
    let mut cmd = Command::stop();
    match axis {
        Axis::Speed => cmd.speed = Some(0.0),
        Axis::Direction => cmd.angle = Some(0.0),
    }
    cmd.decelerate = Some(true);
    cmd
}

/// Encode the halt sent when the operator console becomes hidden.
///
/// Safety/idle policy rather than a gesture: motion stops whenever the
/// controls are not visible to the operator.
pub fn console_hidden() -> Command {
    let mut cmd = Command::stop();
    cmd.speed = Some(0.0);
    cmd.angle = Some(0.0);
    cmd
}
