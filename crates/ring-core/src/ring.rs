//! Component wiring: configuration, derived state, and the update/tick
//! surface consumed by a host rendering layer.

use std::time::Duration;
use thiserror::Error;

use crate::constants::{DEFAULT_MAX, DEFAULT_SIZE, DEFAULT_STROKE_WIDTH};
use crate::geometry;
use crate::particles::{Particle, ParticleAnimator};

/// Host-supplied ring configuration. Read at construction and on explicit
/// [`ProgressRing::reconfigure`], never observed continuously.
#[derive(Clone, Debug)]
pub struct RingConfig {
    pub size: f32,
    pub stroke_width: f32,
    pub max: f32,
    pub show_particles: bool,
}

impl Default for RingConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            stroke_width: DEFAULT_STROKE_WIDTH,
            max: DEFAULT_MAX,
            show_particles: false,
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("ring size must be positive, got {0}")]
    NonPositiveSize(f32),
    #[error("stroke width must be non-negative, got {0}")]
    NegativeStrokeWidth(f32),
    #[error("stroke width {stroke_width} must be smaller than ring size {size}")]
    StrokeTooWide { size: f32, stroke_width: f32 },
    #[error("max must be positive, got {0}")]
    NonPositiveMax(f32),
}

impl RingConfig {
    /// Reject configurations that would produce a non-positive radius or
    /// an undefined progress fraction. Reported once, at construction or
    /// reconfigure.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size <= 0.0 {
            return Err(ConfigError::NonPositiveSize(self.size));
        }
        if self.stroke_width < 0.0 {
            return Err(ConfigError::NegativeStrokeWidth(self.stroke_width));
        }
        if self.stroke_width >= self.size {
            return Err(ConfigError::StrokeTooWide {
                size: self.size,
                stroke_width: self.stroke_width,
            });
        }
        if self.max <= 0.0 {
            return Err(ConfigError::NonPositiveMax(self.max));
        }
        Ok(())
    }
}

/// Derived stroke parameters, read-only from the renderer's perspective.
///
/// `percentage` is always `clamp(value/max, 0, 1)` and `dash_offset` is
/// always re-derived from it, never stored independently.
#[derive(Clone, Debug, Default)]
pub struct RingState {
    pub value: f32,
    pub percentage: f32,
    pub radius: f32,
    pub circumference: f32,
    pub dash_offset: f32,
}

/// The progress-ring component: one owned state instance per ring, fed
/// by value updates and a frame clock.
pub struct ProgressRing {
    config: RingConfig,
    state: RingState,
    animator: ParticleAnimator,
}

impl ProgressRing {
    /// Validates the config once, computes radius and circumference, and
    /// runs the initial progress computation from value 0.
    pub fn new(config: RingConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_value(config, 0.0, seed)
    }

    /// Same as [`new`](Self::new) but starting from an explicit value.
    /// The initial computation never raises a particle trigger.
    pub fn with_value(config: RingConfig, value: f32, seed: u64) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut ring = Self {
            state: RingState::default(),
            animator: ParticleAnimator::new(seed),
            config,
        };
        ring.recompute_static();
        ring.apply_value(value);
        Ok(ring)
    }

    /// The sole input event. Geometry always applies, even while a
    /// particle session is in flight; only the decorative trigger is
    /// gated, on `show_particles`, a strict fraction increase, and an
    /// idle animator.
    pub fn update(&mut self, value: f32) -> &RingState {
        let prev = self.state.percentage;
        self.apply_value(value);
        if self.config.show_particles && self.state.percentage > prev {
            self.animator
                .try_spawn(self.state.percentage, self.state.radius);
        }
        &self.state
    }

    /// Advance the particle session window by `dt` of host time.
    pub fn tick(&mut self, dt: Duration) {
        self.animator.tick(dt);
    }

    /// Explicit re-init: revalidate, recompute the static geometry, and
    /// re-derive the current fraction against the new max. Cancels any
    /// in-flight session, whose anchor radius is stale.
    pub fn reconfigure(&mut self, config: RingConfig) -> Result<(), ConfigError> {
        config.validate()?;
        self.config = config;
        self.animator.cancel();
        self.recompute_static();
        self.apply_value(self.state.value);
        Ok(())
    }

    /// Deterministically end any pending particle session.
    pub fn cancel_particles(&mut self) {
        self.animator.cancel();
    }

    pub fn state(&self) -> &RingState {
        &self.state
    }

    pub fn config(&self) -> &RingConfig {
        &self.config
    }

    pub fn particles(&self) -> &[Particle] {
        self.animator.particles()
    }

    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    fn recompute_static(&mut self) {
        self.state.radius = geometry::ring_radius(self.config.size, self.config.stroke_width);
        self.state.circumference = geometry::ring_circumference(self.state.radius);
    }

    fn apply_value(&mut self, value: f32) {
        self.state.value = value;
        self.state.percentage = geometry::progress_fraction(value, self.config.max);
        self.state.dash_offset =
            geometry::dash_offset(self.state.circumference, self.state.percentage);
    }
}
