//! Command vocabulary and wire schema for the teleoperation link.
//!
//! A [`Command`] is one discrete instruction from the operator: an enumerated
//! name plus optional numeric parameters. Parameters omitted on the wire fall
//! back to defaults when the simulator consumes them; there is no validation
//! step and no error path.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Speed applied when a command omits the `speed` parameter.
pub const DEFAULT_SPEED: f64 = 100.0;
/// Intensity multiplier applied when a command omits `intensity`.
pub const DEFAULT_INTENSITY: f64 = 1.0;

/// The enumerated command names the link understands.
///
/// Anything else on the wire decodes to [`CommandKind::Unknown`], which is
/// recorded as the last command but never mutates the simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CommandKind {
    /// Drive forwards at `speed × intensity`.
    Forward,
    /// Drive backwards at `speed × intensity`.
    Backward,
    /// Step the heading 5 degrees counter-clockwise.
    Left,
    /// Step the heading 5 degrees clockwise.
    Right,
    /// Halt: zero speed, status `stopped`.
    Stop,
    /// Any name outside the vocabulary.
    #[serde(other)]
    Unknown,
}

impl fmt::Display for CommandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CommandKind::Forward => "forward",
            CommandKind::Backward => "backward",
            CommandKind::Left => "left",
            CommandKind::Right => "right",
            CommandKind::Stop => "stop",
            CommandKind::Unknown => "unknown",
        };
        f.write_str(name)
    }
}

/// One operator instruction as it travels over the socket.
///
/// Optional fields are omitted from the serialized form when unset so a
/// command echoes back exactly as the client sent it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Command {
    /// The command name.
    pub command: CommandKind,
    /// Requested speed on the 0–100 scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    /// Raw joystick angle in degrees, informational.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub angle: Option<f64>,
    /// Displacement-derived multiplier in `[0, 1]` applied to speed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<f64>,
    /// Carried for a future ramp-down behaviour; the simulator ignores it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decelerate: Option<bool>,
}

impl Command {
    /// A bare command with every parameter left to its default.
    pub const fn bare(command: CommandKind) -> Self {
        Command {
            command,
            speed: None,
            angle: None,
            intensity: None,
            decelerate: None,
        }
    }

    /// The `stop` command the server synthesizes on client disconnect.
    pub const fn stop() -> Self {
        Command::bare(CommandKind::Stop)
    }

    /// Requested speed, defaulting to [`DEFAULT_SPEED`].
    pub fn speed_or_default(&self) -> f64 {
        self.speed.unwrap_or(DEFAULT_SPEED)
    }

    /// Intensity multiplier, defaulting to [`DEFAULT_INTENSITY`].
    pub fn intensity_or_default(&self) -> f64 {
        self.intensity.unwrap_or(DEFAULT_INTENSITY)
    }

    /// The string a hardware drive link would consume, e.g. `MOVE F 100`.
    ///
    /// Kept from the original controller for the day a real robot replaces
    /// the simulator; today it only feeds diagnostic logging. Unknown names
    /// format as `STOP`.
    pub fn drive_frame(&self) -> String {
        let scaled = (self.speed_or_default() * self.intensity_or_default()).floor() as i64;
        match self.command {
            CommandKind::Forward => format!("MOVE F {scaled}"),
            CommandKind::Backward => format!("MOVE B {scaled}"),
            CommandKind::Left => format!("TURN L {scaled}"),
            CommandKind::Right => format!("TURN R {scaled}"),
            CommandKind::Stop | CommandKind::Unknown => "STOP".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_names_round_trip() {
        for (kind, name) in [
            (CommandKind::Forward, "\"forward\""),
            (CommandKind::Backward, "\"backward\""),
            (CommandKind::Left, "\"left\""),
            (CommandKind::Right, "\"right\""),
            (CommandKind::Stop, "\"stop\""),
        ] {
            assert_eq!(serde_json::to_string(&kind).unwrap(), name);
            assert_eq!(serde_json::from_str::<CommandKind>(name).unwrap(), kind);
        }
    }

    #[test]
    fn unrecognized_name_decodes_to_unknown() {
        let kind: CommandKind = serde_json::from_str("\"dance\"").unwrap();
        assert_eq!(kind, CommandKind::Unknown);
    }

    #[test]
    fn omitted_parameters_deserialize_to_none() {
        let cmd: Command = serde_json::from_str(r#"{"command":"forward"}"#).unwrap();
        assert_eq!(cmd.command, CommandKind::Forward);
        assert_eq!(cmd.speed, None);
        assert_eq!(cmd.angle, None);
        assert_eq!(cmd.intensity, None);
        assert_eq!(cmd.decelerate, None);
    }

    #[test]
    fn omitted_parameters_stay_omitted_on_echo() {
        let cmd: Command = serde_json::from_str(r#"{"command":"forward","speed":50}"#).unwrap();
        let echoed = serde_json::to_string(&cmd).unwrap();
        assert_eq!(echoed, r#"{"command":"forward","speed":50.0}"#);
    }

    #[test]
    fn decelerate_round_trips() {
        let json = r#"{"command":"stop","speed":0.0,"decelerate":true}"#;
        let cmd: Command = serde_json::from_str(json).unwrap();
        assert_eq!(cmd.decelerate, Some(true));
        assert_eq!(serde_json::to_string(&cmd).unwrap(), json);
    }

    #[test]
    fn defaults_apply_when_parameters_missing() {
        let cmd = Command::bare(CommandKind::Forward);
        assert_eq!(cmd.speed_or_default(), DEFAULT_SPEED);
        assert_eq!(cmd.intensity_or_default(), DEFAULT_INTENSITY);
    }

    #[test]
    fn drive_frame_scales_and_floors() {
        let mut cmd = Command::bare(CommandKind::Forward);
        cmd.speed = Some(75.0);
        cmd.intensity = Some(0.5);
        // floor(75 * 0.5) = 37
        assert_eq!(cmd.drive_frame(), "MOVE F 37");

        cmd.command = CommandKind::Backward;
        assert_eq!(cmd.drive_frame(), "MOVE B 37");
        cmd.command = CommandKind::Left;
        assert_eq!(cmd.drive_frame(), "TURN L 37");
        cmd.command = CommandKind::Right;
        assert_eq!(cmd.drive_frame(), "TURN R 37");
    }

    #[test]
    fn drive_frame_defaults_to_full_speed() {
        assert_eq!(Command::bare(CommandKind::Forward).drive_frame(), "MOVE F 100");
    }

    #[test]
    fn drive_frame_stop_and_unknown() {
        assert_eq!(Command::stop().drive_frame(), "STOP");
        assert_eq!(Command::bare(CommandKind::Unknown).drive_frame(), "STOP");
    }
}
