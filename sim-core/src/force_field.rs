//! Pointer-driven repulsion.
//!
//! Particles inside the pointer's influence radius are pushed straight away
//! from it. The push falls off linearly from full strength at the pointer to
//! zero at the edge of the radius and is added onto the particle's push
//! accumulator, so a pointer that lingers keeps compounding the push until
//! friction catches up.

use crate::{particle::Particle, pointer::PointerState};
use glam::Vec2;

/// Distances at or below this are treated as coincident with the pointer;
/// the direction away from it is undefined there.
pub const DEAD_ZONE: f32 = 0.1;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ForceField {
    /// Push added at the pointer's centre.
    pub strength: f32,
}

impl ForceField {
    pub fn new(strength: f32) -> Self {
        Self { strength }
    }

    /// Push contribution the pointer makes to a particle at `pos` this tick.
    ///
    /// Returns `Vec2::ZERO` when the pointer is absent, when `pos` is at or
    /// beyond the influence radius, or when it is inside [`DEAD_ZONE`].
    pub fn push_contribution(&self, pointer: &PointerState, pos: Vec2) -> Vec2 {
        let Some(origin) = pointer.position() else {
            return Vec2::ZERO;
        };

        let offset = pos - origin;
        let d = offset.length();
        if d >= pointer.influence_radius || d <= DEAD_ZONE {
            return Vec2::ZERO;
        }

        let falloff = 1.0 - d / pointer.influence_radius;
        offset / d * falloff * self.strength
    }

    /// Adds this tick's pointer push onto the particle's accumulator.
    #[inline]
    pub fn apply(&self, pointer: &PointerState, particle: &mut Particle) {
        particle.push += self.push_contribution(pointer, particle.pos);
    }
}
