use skiff::{Controls, RigidBody, SimConfig, Simulation};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let config = SimConfig::default();
    let timestep = config.timestep;
    let mut sim = Simulation::new(config)?;

    // 30 seconds: full throttle with a lazy S-curve, then coast
    let ticks = (30.0 / timestep) as u64;
    for tick in 0..ticks {
        let t = tick as f64 * timestep;
        let controls = Controls {
            throttle: if t < 20.0 { 1.0 } else { 0.0 },
            steering: (t / 5.0).sin() * 0.6,
        };
        sim.step(controls);

        if tick % 50 == 0 {
            let boat = sim.boat();
            let position = boat.body().position();
            println!(
                "t={:5.1}s pos=({:7.2}, {:5.2}, {:7.2}) throttle={:.2} rudder={:6.1}° depth={:5.2} pitch={:.2}",
                sim.elapsed_seconds(),
                position.x,
                position.y,
                position.z,
                boat.engine().current_acceleration(),
                boat.engine().rudder_angle(),
                boat.engine().submersion_depth(),
                boat.engine().audio_params().engine_pitch,
            );
        }
    }

    sim.shutdown();
    Ok(())
}
