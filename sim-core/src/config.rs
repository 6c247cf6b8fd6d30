//! Fixed tuning for the particle field.
//!
//! A [`Config`] is read once at startup and never changes while the
//! simulation runs. Every field has a default, so a config file only needs
//! to name the values it overrides.

use serde::Deserialize;
use snafu::ensure;

use crate::{
    error::{
        InvalidConfigSnafu, InvalidExtentSnafu, InvalidFrictionSnafu, InvalidInfluenceRadiusSnafu,
        InvalidRadiusRangeSnafu, RadiusTooLargeSnafu, Result,
    },
    types::Extent,
};

/// Scales the base particle count on canvases narrower than `below_width`.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
pub struct CountTier {
    pub below_width: f32,
    pub factor: f32,
}

/// Parameters of the proximity graph drawn between particles.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConnectionConfig {
    /// Pairs farther apart than this never get an edge.
    pub max_distance: f32,
    /// Maximum number of outgoing edges counted per source particle.
    pub max_peers: usize,
    /// Multiplier applied to the linear distance falloff before clamping.
    pub opacity_factor: f32,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            max_distance: 100.0,
            max_peers: 5,
            opacity_factor: 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub base_particle_count: usize,
    pub count_tiers: Vec<CountTier>,
    pub min_radius: f32,
    pub max_radius: f32,
    /// Each base velocity component is drawn from `(u - 0.5) * velocity_scale`.
    pub velocity_scale: f32,
    pub influence_radius: f32,
    /// Per-tick multiplicative decay of the push accumulator.
    pub push_friction: f32,
    /// Push added at the pointer's centre, falling off linearly to the edge.
    pub push_strength: f32,
    pub connections: ConnectionConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_particle_count: 100,
            count_tiers: vec![CountTier {
                below_width: 768.0,
                factor: 0.5,
            }],
            min_radius: 1.0,
            max_radius: 3.0,
            velocity_scale: 1.0,
            influence_radius: 150.0,
            push_friction: 0.95,
            push_strength: 5.0,
            connections: ConnectionConfig::default(),
        }
    }
}

impl Config {
    /// Number of particles to spawn on a canvas of the given width.
    ///
    /// The narrowest tier whose `below_width` is still above `width` scales
    /// the base count; with no matching tier the base count is used as is.
    /// The scaled count is truncated towards zero (floor).
    pub fn particle_count(&self, width: f32) -> usize {
        let factor = self
            .count_tiers
            .iter()
            .filter(|tier| width < tier.below_width)
            .min_by(|a, b| a.below_width.total_cmp(&b.below_width))
            .map_or(1.0, |tier| tier.factor);

        (self.base_particle_count as f64 * f64::from(factor)).floor() as usize
    }

    /// Rejects configurations that would make the initial placement range
    /// empty or inverted for a canvas of the given size, or that fail
    /// [`Config::validate_tuning`].
    pub fn validate(&self, extent: Extent) -> Result<()> {
        ensure!(
            extent.is_valid(),
            InvalidExtentSnafu {
                width: extent.width,
                height: extent.height,
            }
        );
        self.validate_tuning()?;
        ensure!(
            self.max_radius < extent.width / 2.0 && self.max_radius < extent.height / 2.0,
            RadiusTooLargeSnafu {
                max_radius: self.max_radius,
                width: extent.width,
                height: extent.height,
            }
        );
        Ok(())
    }

    /// Checks every value that doesn't depend on the canvas size, so a bad
    /// config file can be rejected before any window exists.
    pub fn validate_tuning(&self) -> Result<()> {
        ensure!(
            self.min_radius.is_finite()
                && self.max_radius.is_finite()
                && self.min_radius > 0.0
                && self.min_radius <= self.max_radius,
            InvalidRadiusRangeSnafu {
                min: self.min_radius,
                max: self.max_radius,
            }
        );
        ensure!(
            self.push_friction > 0.0 && self.push_friction < 1.0,
            InvalidFrictionSnafu {
                friction: self.push_friction,
            }
        );
        ensure!(
            self.influence_radius.is_finite() && self.influence_radius > 0.0,
            InvalidInfluenceRadiusSnafu {
                radius: self.influence_radius,
            }
        );
        ensure!(
            self.push_strength.is_finite() && self.push_strength >= 0.0,
            InvalidConfigSnafu {
                reason: format!("push strength {} must be >= 0", self.push_strength),
            }
        );
        ensure!(
            self.velocity_scale.is_finite() && self.velocity_scale >= 0.0,
            InvalidConfigSnafu {
                reason: format!("velocity scale {} must be >= 0", self.velocity_scale),
            }
        );
        ensure!(
            self.count_tiers.iter().all(|tier| {
                tier.factor.is_finite()
                    && tier.factor >= 0.0
                    && tier.below_width.is_finite()
                    && tier.below_width > 0.0
            }),
            InvalidConfigSnafu {
                reason: "count tiers need a positive width and a factor >= 0".to_string(),
            }
        );

        let conn = &self.connections;
        ensure!(
            conn.max_distance.is_finite() && conn.max_distance > 0.0,
            InvalidConfigSnafu {
                reason: format!("connection distance {} must be positive", conn.max_distance),
            }
        );
        ensure!(
            conn.opacity_factor.is_finite() && conn.opacity_factor >= 0.0,
            InvalidConfigSnafu {
                reason: format!("opacity factor {} must be >= 0", conn.opacity_factor),
            }
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SimError;

    #[test]
    fn default_config_is_valid_for_a_desktop_canvas() {
        let cfg = Config::default();
        assert_eq!(cfg.validate(Extent::new(1280.0, 720.0)), Ok(()));
    }

    #[test]
    fn particle_count_uses_base_count_above_every_tier() {
        let cfg = Config::default();
        assert_eq!(cfg.particle_count(1280.0), 100);
        // The threshold itself is not "below".
        assert_eq!(cfg.particle_count(768.0), 100);
    }

    #[test]
    fn particle_count_floors_the_scaled_count() {
        let mut cfg = Config::default();
        cfg.base_particle_count = 75;
        // 75 * 0.5 = 37.5 -> 37
        assert_eq!(cfg.particle_count(500.0), 37);

        cfg.count_tiers = vec![CountTier {
            below_width: 768.0,
            factor: 0.99,
        }];
        // 75 * 0.99 = 74.25 -> 74
        assert_eq!(cfg.particle_count(500.0), 74);
    }

    #[test]
    fn particle_count_picks_the_narrowest_matching_tier() {
        let mut cfg = Config::default();
        cfg.count_tiers = vec![
            CountTier {
                below_width: 1024.0,
                factor: 0.75,
            },
            CountTier {
                below_width: 480.0,
                factor: 0.25,
            },
        ];

        assert_eq!(cfg.particle_count(2000.0), 100);
        assert_eq!(cfg.particle_count(800.0), 75);
        assert_eq!(cfg.particle_count(320.0), 25);
    }

    #[test]
    fn validate_rejects_non_positive_extents() {
        let cfg = Config::default();
        assert!(matches!(
            cfg.validate(Extent::new(0.0, 600.0)),
            Err(SimError::InvalidExtent { .. })
        ));
        assert!(matches!(
            cfg.validate(Extent::new(800.0, -1.0)),
            Err(SimError::InvalidExtent { .. })
        ));
        assert!(matches!(
            cfg.validate(Extent::new(f32::NAN, 600.0)),
            Err(SimError::InvalidExtent { .. })
        ));
    }

    #[test]
    fn validate_rejects_radius_not_below_half_extent() {
        let mut cfg = Config::default();
        cfg.min_radius = 1.0;
        cfg.max_radius = 5.0;

        // Exactly half of the height is not strictly less.
        assert_eq!(
            cfg.validate(Extent::new(100.0, 10.0)),
            Err(SimError::RadiusTooLarge {
                max_radius: 5.0,
                width: 100.0,
                height: 10.0,
            })
        );
        assert_eq!(cfg.validate(Extent::new(100.0, 10.5)), Ok(()));
    }

    #[test]
    fn validate_rejects_bad_tuning() {
        let extent = Extent::new(800.0, 600.0);

        let mut cfg = Config::default();
        cfg.min_radius = 4.0;
        cfg.max_radius = 2.0;
        assert!(matches!(
            cfg.validate(extent),
            Err(SimError::InvalidRadiusRange { .. })
        ));

        let mut cfg = Config::default();
        cfg.push_friction = 1.0;
        assert!(matches!(
            cfg.validate(extent),
            Err(SimError::InvalidFriction { .. })
        ));

        let mut cfg = Config::default();
        cfg.influence_radius = 0.0;
        assert!(matches!(
            cfg.validate(extent),
            Err(SimError::InvalidInfluenceRadius { .. })
        ));

        let mut cfg = Config::default();
        cfg.connections.max_distance = 0.0;
        assert!(matches!(
            cfg.validate(extent),
            Err(SimError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn validate_tuning_rejects_unusable_count_tiers() {
        for below_width in [f32::NAN, -10.0, 0.0] {
            let mut cfg = Config::default();
            cfg.count_tiers = vec![CountTier {
                below_width,
                factor: 0.5,
            }];
            assert!(matches!(
                cfg.validate_tuning(),
                Err(SimError::InvalidConfig { .. })
            ));
        }
    }

    #[test]
    fn validate_tuning_ignores_the_canvas() {
        let mut cfg = Config::default();
        cfg.max_radius = 500.0;
        // Only too large for a concrete canvas.
        assert_eq!(cfg.validate_tuning(), Ok(()));
        assert!(matches!(
            cfg.validate(Extent::new(800.0, 600.0)),
            Err(SimError::RadiusTooLarge { .. })
        ));
    }

    #[test]
    fn particle_count_keeps_precision_for_large_counts() {
        let mut cfg = Config::default();
        cfg.base_particle_count = 16_777_217; // 2^24 + 1
        cfg.count_tiers.clear();
        assert_eq!(cfg.particle_count(1000.0), 16_777_217);
    }

    #[test]
    fn partial_toml_keeps_defaults_for_missing_fields() {
        let cfg: Config = toml::from_str(
            r#"
            base_particle_count = 40
            push_friction = 0.9

            [connections]
            max_peers = 3
            "#,
        )
        .unwrap();

        assert_eq!(cfg.base_particle_count, 40);
        assert_eq!(cfg.push_friction, 0.9);
        assert_eq!(cfg.connections.max_peers, 3);
        assert_eq!(cfg.connections.max_distance, 100.0);
        assert_eq!(cfg.influence_radius, 150.0);
        assert_eq!(cfg.count_tiers, Config::default().count_tiers);
    }
}
