//! Errors for rejected simulation setup.
//!
//! Nothing that runs per tick can fail; these are only returned when a
//! [`crate::simulation::Simulation`] is created, reset or resized with a
//! configuration that cannot produce a valid particle set.

use snafu::Snafu;

/// All the known errors returned by this crate.
#[derive(Debug, Snafu, PartialEq)]
#[snafu(visibility(pub(crate)))]
pub enum SimError {
    /// Canvas sides must be finite and strictly positive.
    #[snafu(display("invalid canvas extent {width}x{height}"))]
    InvalidExtent { width: f32, height: f32 },

    /// Particles of the largest radius could not be placed inside the canvas.
    #[snafu(display(
        "max particle radius {max_radius} must be less than half of the {width}x{height} canvas"
    ))]
    RadiusTooLarge {
        max_radius: f32,
        width: f32,
        height: f32,
    },

    #[snafu(display("invalid particle radius range {min}..={max}"))]
    InvalidRadiusRange { min: f32, max: f32 },

    #[snafu(display("push friction {friction} must be inside (0, 1)"))]
    InvalidFriction { friction: f32 },

    #[snafu(display("pointer influence radius {radius} must be positive"))]
    InvalidInfluenceRadius { radius: f32 },

    /// Any other out-of-range tuning value.
    #[snafu(display("invalid configuration: {reason}"))]
    InvalidConfig { reason: String },
}

pub type Result<T> = std::result::Result<T, SimError>;
