use parking_lot::RwLock;
use std::sync::Arc;

use roverlink_sim::{Command, RobotState, RobotStateView};

/// Shared handle to the authoritative robot state. Constructed once in
/// `main` and passed by handle into the socket tasks and the simulation
/// thread; there are no module-level statics.
pub type Blackboard = Arc<RwLock<RobotState>>;

pub fn snapshot(bb: &Blackboard) -> RobotStateView {
    bb.read().snapshot()
}

/// Apply one command and capture the resulting view under a single write
/// guard, so no observer can read the state mid-mutation.
pub fn apply_command(bb: &Blackboard, cmd: &Command) -> RobotStateView {
    let mut state = bb.write();
    state.apply(cmd);
    state.snapshot()
}

/// One simulation tick.
pub fn advance(bb: &Blackboard) {
    bb.write().tick();
}
