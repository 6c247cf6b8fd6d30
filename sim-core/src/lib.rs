//! Core of a pointer-reactive 2-D particle field.
//!
//! Main components:
//! - [`particle`] — particle state, the per-tick integrator and wall bounces.
//! - [`pointer`] — the optional pointer position.
//! - [`force_field`] — pointer repulsion onto particle push accumulators.
//! - [`connections`] — the bounded-degree proximity graph drawn between particles.
//! - [`render`] — geometric draw requests and the [`render::FrameSink`] trait.
//! - [`phases`] — the per-tick phases, in order.
//! - [`simulation`] — the simulation context and its tick driver.
//! - [`config`] — fixed tuning and setup validation.
//! - [`error`] — errors for rejected setup.
//! - [`types`] — shared type aliases and the canvas extent.

pub mod config;
pub mod connections;
pub mod error;
pub mod force_field;
pub mod particle;
pub mod phases;
pub mod pointer;
pub mod render;
pub mod simulation;
pub mod types;

pub use config::Config;
pub use error::SimError;
pub use simulation::{FrameStats, Simulation};
pub use types::Extent;
