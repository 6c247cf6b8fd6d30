//! The simulation context and its tick driver.
//!
//! A [`Simulation`] owns everything one particle field needs: its fixed
//! [`Config`], the current canvas [`Extent`], the particle set, the pointer
//! and the RNG used to (re)spawn particles. Hosts hold it by value and call
//! into it between and during frames; there is no shared global state.

use crate::{
    config::Config,
    error::Result,
    force_field::ForceField,
    particle::ParticleSet,
    phases,
    pointer::PointerState,
    render::FrameSink,
    types::Extent,
};
use glam::Vec2;
use rand::{SeedableRng, rngs::StdRng};

/// Host primitive that asks for the next tick to run.
///
/// Any `FnMut()` closure is a scheduler, so a host can capture whatever
/// handle it needs to get back to the same [`Simulation`].
pub trait TickScheduler {
    fn schedule_next(&mut self);
}

impl<F: FnMut()> TickScheduler for F {
    fn schedule_next(&mut self) {
        self();
    }
}

/// What one tick produced.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    pub particles: usize,
    pub edges: usize,
}

#[derive(Debug)]
pub struct Simulation {
    cfg: Config,
    extent: Extent,
    particles: ParticleSet,
    pointer: PointerState,
    field: ForceField,
    rng: StdRng,
}

impl Simulation {
    /// Creates a simulation and spawns its first particle set.
    ///
    /// The configuration is validated against `extent` first; nothing is
    /// spawned if it is rejected. Passing a `seed` makes the particle draws
    /// reproducible, otherwise the RNG is seeded from the OS.
    pub fn new(cfg: Config, extent: Extent, seed: Option<u64>) -> Result<Self> {
        cfg.validate(extent)?;

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let mut sim = Self {
            pointer: PointerState::new(cfg.influence_radius),
            field: ForceField::new(cfg.push_strength),
            particles: ParticleSet::default(),
            cfg,
            extent,
            rng,
        };
        sim.respawn();
        Ok(sim)
    }

    /// Replaces the canvas extent and rebuilds the whole particle set.
    ///
    /// A resize to the current extent is a no-op. On error the simulation
    /// keeps its previous extent and particles.
    pub fn resize(&mut self, extent: Extent) -> Result<()> {
        if extent == self.extent {
            return Ok(());
        }
        self.cfg.validate(extent)?;
        self.extent = extent;
        self.respawn();
        Ok(())
    }

    /// Throws away every particle and spawns a fresh set at the current extent.
    pub fn reset(&mut self) {
        self.respawn();
    }

    fn respawn(&mut self) {
        let count = self.cfg.particle_count(self.extent.width);
        self.particles =
            ParticleSet::random_in_extent(count, &self.cfg, self.extent, &mut self.rng);
        tracing::debug!(
            count,
            width = self.extent.width,
            height = self.extent.height,
            "Spawned particle set"
        );
    }

    /// Records the latest pointer position. Takes effect on the next tick.
    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer.move_to(Vec2::new(x, y));
    }

    /// Marks the pointer as gone, switching the repulsion off.
    pub fn pointer_left(&mut self) {
        self.pointer.leave();
    }

    /// Runs one tick and emits its draw requests into `sink`.
    ///
    /// Order: clear, pointer force, integration, connection lines over the
    /// new positions, then particle circles.
    pub fn step(&mut self, sink: &mut impl FrameSink) -> FrameStats {
        sink.clear();
        phases::force_phase(&mut self.particles, &self.pointer, &self.field);
        phases::integration_phase(&mut self.particles, self.extent);
        let stats = self.emit(sink);
        tracing::trace!(particles = stats.particles, edges = stats.edges, "Tick");
        stats
    }

    /// Emits the current frame without advancing the physics, for hosts
    /// that repaint while paused.
    pub fn draw(&self, sink: &mut impl FrameSink) -> FrameStats {
        sink.clear();
        self.emit(sink)
    }

    fn emit(&self, sink: &mut impl FrameSink) -> FrameStats {
        let edges = phases::connection_phase(&self.particles, &self.cfg.connections, sink);
        phases::particle_phase(&self.particles, sink);
        FrameStats {
            particles: self.particles.len(),
            edges,
        }
    }

    /// Runs one tick, then asks `scheduler` for the next one.
    ///
    /// Stopping the loop is simply not calling `tick` again.
    pub fn tick(
        &mut self,
        sink: &mut impl FrameSink,
        scheduler: &mut impl TickScheduler,
    ) -> FrameStats {
        let stats = self.step(sink);
        scheduler.schedule_next();
        stats
    }

    pub fn config(&self) -> &Config {
        &self.cfg
    }

    pub fn extent(&self) -> Extent {
        self.extent
    }

    pub fn particles(&self) -> &ParticleSet {
        &self.particles
    }

    pub fn pointer(&self) -> &PointerState {
        &self.pointer
    }
}
