//! Stroke geometry for the circular progress ring.
//!
//! Pure, order-independent functions mapping a scalar progress value to
//! the stroke-dash parameters the renderer draws with. Radius and
//! circumference change only with the ring dimensions; fraction and dash
//! offset change on every value update.

use crate::constants::MAX_EPSILON;

/// Radius of the stroke centerline for a ring drawn inside a `size` box.
///
/// Expects `size > stroke_width >= 0`; a violation yields a non-positive
/// radius rather than an error. [`crate::ring::RingConfig::validate`]
/// rejects such configurations up front.
#[inline]
pub fn ring_radius(size: f32, stroke_width: f32) -> f32 {
    (size - stroke_width) / 2.0
}

/// Circumference of the stroke centerline.
#[inline]
pub fn ring_circumference(radius: f32) -> f32 {
    2.0 * std::f32::consts::PI * radius
}

/// Fraction of the ring that is filled, clamped to `[0, 1]`.
///
/// `max` is clamped below by [`MAX_EPSILON`] so the function is total
/// even for degenerate input.
#[inline]
pub fn progress_fraction(value: f32, max: f32) -> f32 {
    (value / max.max(MAX_EPSILON)).clamp(0.0, 1.0)
}

/// Unfilled portion of the circumference, used as the stroke dash offset.
#[inline]
pub fn dash_offset(circumference: f32, fraction: f32) -> f32 {
    circumference * (1.0 - fraction)
}
