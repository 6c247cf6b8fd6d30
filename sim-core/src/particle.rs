use crate::{config::Config, types::Extent};
use glam::Vec2;
use rand::Rng;

/// Coefficient applied to the push component that hits a wall.
///
/// Base velocity reflects unchanged, so drift never decays, while the
/// pointer-induced push loses half its magnitude on every bounce.
pub const PUSH_RESTITUTION: f32 = -0.5;

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: Vec2,
    /// Base drift, applied every tick and never damped.
    pub vel: Vec2,
    /// Push accumulated from the pointer, decayed by `friction` every tick.
    pub push: Vec2,
    pub radius: f32,
    pub friction: f32,
}

#[derive(Debug, Default)]
pub struct ParticleSet {
    pub particles: Vec<Particle>,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, friction: f32) -> Self {
        Self {
            pos,
            vel,
            push: Vec2::ZERO,
            radius,
            friction,
        }
    }

    /// Advances the particle by one tick inside `extent`.
    ///
    /// 1. The push accumulator decays: `push *= friction`.
    /// 2. Explicit Euler with a unit timestep: `pos += push + vel`.
    /// 3. Each axis is tested against at most one wall. A particle past a
    ///    wall is clamped onto it, its base velocity on that axis is
    ///    reflected and its push on that axis is scaled by
    ///    [`PUSH_RESTITUTION`].
    ///
    /// Afterwards `radius <= pos.x <= width - radius` and likewise for `y`,
    /// provided the radius is less than half of each side.
    pub fn integrate(&mut self, extent: Extent) {
        self.push *= self.friction;
        self.pos += self.push + self.vel;

        if self.pos.x < self.radius {
            self.pos.x = self.radius;
            self.vel.x = -self.vel.x;
            self.push.x *= PUSH_RESTITUTION;
        } else if self.pos.x > extent.width - self.radius {
            self.pos.x = extent.width - self.radius;
            self.vel.x = -self.vel.x;
            self.push.x *= PUSH_RESTITUTION;
        }

        if self.pos.y < self.radius {
            self.pos.y = self.radius;
            self.vel.y = -self.vel.y;
            self.push.y *= PUSH_RESTITUTION;
        } else if self.pos.y > extent.height - self.radius {
            self.pos.y = extent.height - self.radius;
            self.vel.y = -self.vel.y;
            self.push.y *= PUSH_RESTITUTION;
        }
    }
}

impl ParticleSet {
    pub fn from_particles(particles: Vec<Particle>) -> Self {
        Self { particles }
    }

    /// Spawns `count` particles with independently random radius, position
    /// and velocity.
    ///
    /// Radii are drawn from `cfg.min_radius..=cfg.max_radius`, and each
    /// particle is placed so that it starts fully inside `extent`. The caller
    /// is expected to have run [`Config::validate`] for this extent first.
    pub fn random_in_extent(
        count: usize,
        cfg: &Config,
        extent: Extent,
        rng: &mut impl Rng,
    ) -> Self {
        let particles = (0..count)
            .map(|_| {
                let radius = rng.random_range(cfg.min_radius..=cfg.max_radius);
                let x = rng.random_range(radius..=extent.width - radius);
                let y = rng.random_range(radius..=extent.height - radius);
                let vx = (rng.random::<f32>() - 0.5) * cfg.velocity_scale;
                let vy = (rng.random::<f32>() - 0.5) * cfg.velocity_scale;
                Particle::new(Vec2::new(x, y), Vec2::new(vx, vy), radius, cfg.push_friction)
            })
            .collect();

        Self::from_particles(particles)
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    const EXTENT: Extent = Extent::new(200.0, 100.0);

    fn in_bounds(p: &Particle, extent: Extent) -> bool {
        p.pos.x >= p.radius
            && p.pos.x <= extent.width - p.radius
            && p.pos.y >= p.radius
            && p.pos.y <= extent.height - p.radius
    }

    #[test]
    fn resting_interior_particle_stays_put() {
        let mut p = Particle::new(Vec2::new(50.0, 50.0), Vec2::ZERO, 2.0, 0.95);

        p.integrate(EXTENT);

        assert_eq!(p.pos, Vec2::new(50.0, 50.0));
        assert_eq!(p.vel, Vec2::ZERO);
        assert_eq!(p.push, Vec2::ZERO);
    }

    #[test]
    fn push_decays_before_it_moves_the_particle() {
        let mut p = Particle::new(Vec2::new(50.0, 50.0), Vec2::new(1.0, 0.0), 2.0, 0.5);
        p.push = Vec2::new(4.0, -2.0);

        p.integrate(EXTENT);

        assert_eq!(p.push, Vec2::new(2.0, -1.0));
        assert_eq!(p.pos, Vec2::new(53.0, 49.0));
    }

    #[test]
    fn bounce_off_left_wall_reflects_velocity() {
        let radius = 3.0;
        let mut p = Particle::new(
            Vec2::new(radius - 1.0, 50.0),
            Vec2::new(-2.0, 0.0),
            radius,
            0.95,
        );

        p.integrate(EXTENT);

        assert_eq!(p.pos.x, radius);
        assert_eq!(p.vel.x, 2.0);
        assert_eq!(p.pos.y, 50.0);
    }

    #[test]
    fn bounce_off_far_walls_halves_and_reverses_push() {
        let radius = 2.0;
        let mut p = Particle::new(
            Vec2::new(EXTENT.width - radius, EXTENT.height - radius),
            Vec2::new(1.0, 0.5),
            radius,
            0.5,
        );
        p.push = Vec2::new(8.0, 4.0);

        p.integrate(EXTENT);

        assert_eq!(p.pos, Vec2::new(EXTENT.width - radius, EXTENT.height - radius));
        assert_eq!(p.vel, Vec2::new(-1.0, -0.5));
        // Decayed to (4, 2), then reflected at half strength.
        assert_eq!(p.push, Vec2::new(-2.0, -1.0));
    }

    #[test]
    fn push_magnitude_never_grows_without_new_force() {
        let mut rng = StdRng::seed_from_u64(7);
        let cfg = Config::default();
        let mut set = ParticleSet::random_in_extent(64, &cfg, EXTENT, &mut rng);
        for p in &mut set.particles {
            p.push = Vec2::new(rng.random_range(-20.0..20.0), rng.random_range(-20.0..20.0));
        }

        for _ in 0..200 {
            for p in &mut set.particles {
                let before = p.push.length();
                p.integrate(EXTENT);
                assert!(p.push.length() <= before);
            }
        }
    }

    #[test]
    fn particles_stay_inside_extent_over_many_ticks() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut cfg = Config::default();
        cfg.velocity_scale = 12.0;
        let mut set = ParticleSet::random_in_extent(128, &cfg, EXTENT, &mut rng);
        for p in &mut set.particles {
            p.push = Vec2::new(rng.random_range(-30.0..30.0), rng.random_range(-30.0..30.0));
        }

        for _ in 0..500 {
            for p in &mut set.particles {
                p.integrate(EXTENT);
                assert!(in_bounds(p, EXTENT), "escaped: {p:?}");
            }
        }
    }

    #[test]
    fn random_in_extent_respects_config_ranges() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut cfg = Config::default();
        cfg.min_radius = 2.0;
        cfg.max_radius = 6.0;
        cfg.velocity_scale = 4.0;

        let set = ParticleSet::random_in_extent(500, &cfg, EXTENT, &mut rng);

        assert_eq!(set.len(), 500);
        for p in &set.particles {
            assert!((2.0..=6.0).contains(&p.radius));
            assert!(in_bounds(p, EXTENT));
            assert!(p.vel.x.abs() <= 2.0 && p.vel.y.abs() <= 2.0);
            assert_eq!(p.push, Vec2::ZERO);
            assert_eq!(p.friction, cfg.push_friction);
        }
    }

    #[test]
    fn zero_count_gives_an_empty_set() {
        let mut rng = StdRng::seed_from_u64(0);
        let set = ParticleSet::random_in_extent(0, &Config::default(), EXTENT, &mut rng);
        assert!(set.is_empty());
    }
}
