use std::time::Duration;

// Shared tuning constants for the ring geometry and the particle bursts.

// Ring defaults (host px units)
pub const DEFAULT_SIZE: f32 = 120.0; // bounding box of the ring
pub const DEFAULT_STROKE_WIDTH: f32 = 8.0;
pub const DEFAULT_MAX: f32 = 10.0; // value range upper bound

// Progress fraction
pub const MAX_EPSILON: f32 = 1e-6; // lower bound applied to `max` so the fraction stays total

// Particle bursts
pub const PARTICLE_COUNT: usize = 8; // particles per burst
pub const PARTICLE_ANGLE_JITTER: f32 = 0.25; // radians either side of the anchor angle
pub const PARTICLE_SIZE_MIN: f32 = 2.0;
pub const PARTICLE_SIZE_MAX: f32 = 6.0;
pub const PARTICLE_FADE_MIN_MS: f32 = 200.0; // renderer-side fade-out duration range
pub const PARTICLE_FADE_MAX_MS: f32 = 500.0;
pub const PARTICLE_SESSION: Duration = Duration::from_millis(400); // burst lifetime

#[inline]
pub fn anchor_angle(fraction: f32) -> f32 {
    fraction * 2.0 * std::f32::consts::PI
}
