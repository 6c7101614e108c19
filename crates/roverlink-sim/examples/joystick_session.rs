use roverlink_sim::encoder::{self, Axis, Pull};
use roverlink_sim::RobotState;

fn main() {
    let mut robot = RobotState::new();

    println!("Simulating an operator session...\n");

    // Pull the speed stick up, drive for a second of ticks.
    let cmd = encoder::speed_axis(100.0, Pull::Up);
    println!("gesture -> {:?} (frame: {})", cmd, cmd.drive_frame());
    robot.apply(&cmd);
    for _ in 0..10 {
        robot.tick();
    }
    println!("after 10 ticks: {:?}\n", robot.snapshot());

    // Nudge the direction stick left a few times.
    for _ in 0..3 {
        let cmd = encoder::direction_axis(180.0, 40.0);
        robot.apply(&cmd);
    }
    println!("after 3 left turns: {:?}\n", robot.snapshot());

    // Resume driving on the new heading.
    let cmd = encoder::speed_axis(100.0, Pull::Up);
    robot.apply(&cmd);
    for _ in 0..10 {
        robot.tick();
    }
    println!("after 10 more ticks: {:?}\n", robot.snapshot());

    // Release the stick: the console emits a stop.
    let cmd = encoder::release(Axis::Speed);
    println!("release -> {:?}", cmd);
    robot.apply(&cmd);
    robot.tick();
    println!("final state: {:?}", robot.snapshot());
}
