use std::thread;
use std::time::Duration;

use instant::Instant;
use rand::prelude::*;
use ring_core::{ProgressRing, RingConfig};

// Frame cadence for the driver loop; the core only sees the measured dt.
const FRAME: Duration = Duration::from_millis(16);

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .init();

    let config = RingConfig {
        show_particles: true,
        ..RingConfig::default()
    };
    let mut ring = ProgressRing::new(config, 42)?;
    log::info!(
        "[ring] radius={:.1} circumference={:.2}",
        ring.state().radius,
        ring.state().circumference
    );

    // Step the value toward max in uneven increments, the way a host
    // forwards download or task progress.
    let mut rng = StdRng::seed_from_u64(7);
    let max = ring.config().max;
    let mut value = 0.0_f32;
    let mut last = Instant::now();
    while value < max {
        thread::sleep(FRAME);
        let now = Instant::now();
        ring.tick(now - last);
        last = now;

        value = (value + rng.gen_range(0.05..0.25)).min(max);
        let state = ring.update(value).clone();
        log::info!(
            "[ring] value={:.2} fraction={:.3} dash_offset={:.2} particles={} animating={}",
            state.value,
            state.percentage,
            state.dash_offset,
            ring.particles().len(),
            ring.is_animating()
        );
    }

    // Let the final burst run out its window before exiting.
    while ring.is_animating() {
        thread::sleep(FRAME);
        let now = Instant::now();
        ring.tick(now - last);
        last = now;
    }
    log::info!("[ring] complete: dash_offset={:.2}", ring.state().dash_offset);
    Ok(())
}
