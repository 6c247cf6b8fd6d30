//! Per-tick phases of the particle field.
//!
//! One tick runs, in this order:
//! 1. [`force_phase`] — the pointer adds repulsion onto every particle's
//!    push accumulator.
//! 2. [`integration_phase`] — every particle decays its push, moves and
//!    bounces off the canvas walls.
//! 3. [`connection_phase`] — the proximity graph is built over the
//!    post-integration positions and its edges are emitted as lines.
//! 4. [`particle_phase`] — every particle is emitted as a filled circle.
//!
//! Lines and circles are emitted from the same positions, and lines come
//! first so the circles are painted over their end points.

use crate::{
    config::ConnectionConfig,
    connections::Connections,
    force_field::ForceField,
    particle::ParticleSet,
    pointer::PointerState,
    render::{Circle, FrameSink, Segment},
    types::Extent,
};

/// Applies the pointer's repulsion to every particle.
///
/// Does nothing for any particle while the pointer is absent.
///
/// ### Parameters
/// - `particles` - Particles whose push accumulators receive the force.
/// - `pointer` - The pointer state current at the start of this tick.
/// - `field` - Strength of the repulsion.
pub fn force_phase(particles: &mut ParticleSet, pointer: &PointerState, field: &ForceField) {
    if pointer.position().is_none() {
        return;
    }
    for p in &mut particles.particles {
        field.apply(pointer, p);
    }
}

/// Moves every particle by one tick and resolves wall collisions.
///
/// ### Parameters
/// - `particles` - Particles to advance.
/// - `extent` - Canvas the particles must stay inside.
pub fn integration_phase(particles: &mut ParticleSet, extent: Extent) {
    for p in &mut particles.particles {
        p.integrate(extent);
    }
}

/// Emits the edges of this frame's proximity graph as line segments.
///
/// ### Parameters
/// - `particles` - Particles in their post-integration positions.
/// - `cfg` - Distance threshold, per-source peer cap and opacity factor.
/// - `sink` - Receiver of the segments, in `(i, j)` ascending order.
///
/// ### Returns
/// The number of segments emitted.
pub fn connection_phase(
    particles: &ParticleSet,
    cfg: &ConnectionConfig,
    sink: &mut impl FrameSink,
) -> usize {
    let mut emitted = 0;
    for edge in Connections::new(&particles.particles, *cfg) {
        sink.stroke_line(Segment::from(edge));
        emitted += 1;
    }
    emitted
}

/// Emits one filled circle per particle, in particle order.
pub fn particle_phase(particles: &ParticleSet, sink: &mut impl FrameSink) {
    for p in &particles.particles {
        sink.fill_circle(Circle::from(p));
    }
}
