use roverlink_kinematics::*;

fn main() {
    let heading_deg = 0.0;
    let step = 0.5; // displacement per tick (speed 50 on a 100-point scale)
    let num_steps = 10;

    let mut position = Position::new(0.0, 0.0);

    println!("Initializing integration demo...");
    println!("  Heading:   {} deg", heading_deg);
    println!("  Step:      {} per tick", step);
    println!("  Num Steps: {}", num_steps);
    println!("\nIntegrating...");

    for i in 0..num_steps {
        position.advance(heading_deg, step);
        println!("Step {:>2}: Position: {}", i + 1, position);
    }

    println!("\nIntegration complete.");
    println!("Final Position: {:?}", position.rounded());
}
