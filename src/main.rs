use kosmorbit::config::Scenario;
use kosmorbit::output::write_trajectory;
use kosmorbit::physics::orbital_elements;
use kosmorbit::simulation::simulate_scenario;
use log::{info, warn};
use std::error::Error;
use std::fs::{self, File};
use std::io::BufWriter;
use std::path::Path;

fn main() -> Result<(), Box<dyn Error>> {
    pretty_env_logger::init();

    // 700 km altitude, slightly below circular speed
    let scenario = Scenario::default();
    scenario.validate()?;
    info!(
        "simulating {} s with dt = {} s from r0 = {:?} m, v0 = {:?} m/s",
        scenario.t_max, scenario.dt, scenario.position, scenario.velocity
    );

    let (trajectory, final_state) = simulate_scenario(&scenario)?;
    info!(
        "{} samples, final radius {:.2} km",
        trajectory.len(),
        final_state.radius() / 1000.0
    );
    if trajectory.dips_below(scenario.body.radius) {
        warn!(
            "orbit intersects the central body (closest approach {:.2} km)",
            trajectory.min_radius().unwrap_or_default() / 1000.0
        );
    }

    let elements = orbital_elements(&scenario.position, &scenario.velocity, &scenario.body)?;
    println!("Semi-major axis (a): {:.2} km", elements.semi_major_axis / 1000.0);
    println!("Orbital period (T): {:.2} minutes", elements.period / 60.0);
    println!("Eccentricity (e): {:.3}", elements.eccentricity);

    // Create output directory if it doesn't exist
    let output_dir = Path::new("output");
    fs::create_dir_all(output_dir)?;

    let file = File::create(output_dir.join("trajectory.csv"))?;
    write_trajectory(
        BufWriter::new(file),
        &trajectory,
        &scenario.body,
        scenario.start_epoch,
    )?;
    println!("Trajectory data has been written to output/trajectory.csv");

    Ok(())
}
