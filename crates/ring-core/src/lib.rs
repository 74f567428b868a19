//! Visual-state core for a circular progress ring with particle bursts.
//!
//! This crate owns the numeric model only: stroke geometry derived from a
//! `value/max` pair, and the timed particle-burst session raised on
//! progress increase. A host rendering layer feeds value updates and a
//! frame clock in, and reads stroke parameters and particle batches out.
//! No platform dependencies; usable from any front-end.

pub mod constants;
pub mod geometry;
pub mod particles;
pub mod ring;

pub use constants::*;
pub use particles::*;
pub use ring::*;
