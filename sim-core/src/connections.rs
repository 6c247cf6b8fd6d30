//! Bounded-degree proximity graph between particles.
//!
//! The graph is purely visual: it is rebuilt from scratch every frame and
//! feeds nothing back into the physics. Pairs are enumerated by brute force
//! in `(i ascending, j > i ascending)` order, each unordered pair visited once
//! and attributed to its lower index. A source stops scanning as soon as it
//! has emitted `max_peers` edges, which caps *outgoing* edges only: a
//! particle can still receive any number of edges from lower indices.

use std::iter::FusedIterator;

use crate::{config::ConnectionConfig, particle::Particle, types::ParticleId};
use glam::Vec2;

/// One line to draw between two particles this frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub from: ParticleId,
    pub to: ParticleId,
    pub a: Vec2,
    pub b: Vec2,
    /// In `[0, 1]`.
    pub opacity: f32,
}

/// Lazy iterator over the edges of one frame.
///
/// Borrowing the particle slice keeps positions frozen while the edges are
/// drawn; build a new one for the next frame.
#[derive(Debug)]
pub struct Connections<'a> {
    particles: &'a [Particle],
    cfg: ConnectionConfig,
    max_d2: f32,
    i: usize,
    j: usize,
    peers: usize,
}

impl<'a> Connections<'a> {
    pub fn new(particles: &'a [Particle], cfg: ConnectionConfig) -> Self {
        Self {
            particles,
            cfg,
            max_d2: cfg.max_distance * cfg.max_distance,
            i: 0,
            j: 1,
            peers: 0,
        }
    }

    fn edge_between(&self, i: ParticleId, j: ParticleId) -> Option<Edge> {
        let a = self.particles[i].pos;
        let b = self.particles[j].pos;

        // Cheap rejection first, the root is only taken for accepted pairs.
        if a.distance_squared(b) >= self.max_d2 {
            return None;
        }

        let d = a.distance(b);
        let falloff = 1.0 - d / self.cfg.max_distance;
        let opacity = (falloff * self.cfg.opacity_factor).clamp(0.0, 1.0);
        Some(Edge {
            from: i,
            to: j,
            a,
            b,
            opacity,
        })
    }
}

impl Iterator for Connections<'_> {
    type Item = Edge;

    fn next(&mut self) -> Option<Edge> {
        let n = self.particles.len();
        while self.i < n {
            while self.peers < self.cfg.max_peers && self.j < n {
                let (i, j) = (self.i, self.j);
                self.j += 1;
                if let Some(edge) = self.edge_between(i, j) {
                    self.peers += 1;
                    return Some(edge);
                }
            }

            self.i += 1;
            self.j = self.i + 1;
            self.peers = 0;
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining_sources = self.particles.len().saturating_sub(self.i);
        let upper = remaining_sources
            .saturating_mul(self.cfg.max_peers)
            .saturating_sub(self.peers.min(self.cfg.max_peers));
        (0, Some(upper))
    }
}

impl FusedIterator for Connections<'_> {}
