//! Particle bursts anchored at the ring's progress point.
//!
//! A burst is decorative: the renderer fades each particle to zero
//! opacity over its own duration, while the session window below governs
//! when the whole batch is dropped from the component state.

use glam::Vec2;
use rand::prelude::*;
use smallvec::SmallVec;
use std::time::Duration;

use crate::constants::*;

/// One decorative particle. `position` is relative to the ring center;
/// `opacity` starts at 1 and is animated to 0 by the renderer over
/// `duration_ms`.
#[derive(Clone, Debug)]
pub struct Particle {
    pub id: u32,
    pub position: Vec2,
    pub size: f32,
    pub duration_ms: f32,
    pub opacity: f32,
}

/// Timed, at-most-one-concurrent burst session.
///
/// Idle -> Animating on [`try_spawn`](Self::try_spawn), Animating -> Idle
/// once [`tick`](Self::tick) has accumulated [`PARTICLE_SESSION`], or
/// immediately on [`cancel`](Self::cancel). A trigger arriving while a
/// session is active is dropped silently.
pub struct ParticleAnimator {
    particles: SmallVec<[Particle; PARTICLE_COUNT]>,
    animating: bool,
    elapsed: Duration,
    rng: StdRng,
}

impl ParticleAnimator {
    pub fn new(seed: u64) -> Self {
        Self {
            particles: SmallVec::new(),
            animating: false,
            elapsed: Duration::ZERO,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Spawn a burst anchored at `fraction` of the ring, on the stroke
    /// radius. Returns whether a session started; an in-flight session
    /// drops the request.
    pub fn try_spawn(&mut self, fraction: f32, radius: f32) -> bool {
        if self.animating {
            return false;
        }
        let anchor = anchor_angle(fraction);
        self.particles.clear();
        for id in 0..PARTICLE_COUNT as u32 {
            let angle =
                anchor + self.rng.gen_range(-PARTICLE_ANGLE_JITTER..PARTICLE_ANGLE_JITTER);
            self.particles.push(Particle {
                id,
                position: radius * Vec2::new(angle.cos(), angle.sin()),
                size: self.rng.gen_range(PARTICLE_SIZE_MIN..PARTICLE_SIZE_MAX),
                duration_ms: self.rng.gen_range(PARTICLE_FADE_MIN_MS..PARTICLE_FADE_MAX_MS),
                opacity: 1.0,
            });
        }
        self.animating = true;
        self.elapsed = Duration::ZERO;
        log::debug!(
            "[particles] burst of {} at fraction {:.3}",
            self.particles.len(),
            fraction
        );
        true
    }

    /// Advance the session window; once the accumulated time reaches
    /// [`PARTICLE_SESSION`] the batch and the animating flag clear
    /// together.
    pub fn tick(&mut self, dt: Duration) {
        if !self.animating {
            return;
        }
        self.elapsed += dt;
        if self.elapsed >= PARTICLE_SESSION {
            self.clear();
        }
    }

    /// Deterministic teardown of an in-flight session. No-op when idle.
    pub fn cancel(&mut self) {
        if self.animating {
            self.clear();
        }
    }

    fn clear(&mut self) {
        self.particles.clear();
        self.animating = false;
        self.elapsed = Duration::ZERO;
        log::debug!("[particles] session cleared");
    }
}
