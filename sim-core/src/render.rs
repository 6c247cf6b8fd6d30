//! Geometric draw requests emitted once per tick.
//!
//! The core never touches a rendering API. A host implements [`FrameSink`]
//! and decides how circles and lines are styled and painted.

use crate::{connections::Edge, particle::Particle};

/// A filled particle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Circle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
}

/// A stroked connection line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
    pub opacity: f32,
}

impl From<&Particle> for Circle {
    fn from(p: &Particle) -> Self {
        Self {
            x: p.pos.x,
            y: p.pos.y,
            radius: p.radius,
        }
    }
}

impl From<Edge> for Segment {
    fn from(e: Edge) -> Self {
        Self {
            x1: e.a.x,
            y1: e.a.y,
            x2: e.b.x,
            y2: e.b.y,
            opacity: e.opacity,
        }
    }
}

/// Receiver of one frame's draw requests, in the order they must be painted.
pub trait FrameSink {
    /// Start of a new frame.
    fn clear(&mut self);
    fn stroke_line(&mut self, segment: Segment);
    fn fill_circle(&mut self, circle: Circle);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum DrawCommand {
    Clear,
    Line(Segment),
    Fill(Circle),
}

/// A [`FrameSink`] that keeps the commands of the most recent frame.
#[derive(Debug, Default)]
pub struct FrameRecorder {
    pub commands: Vec<DrawCommand>,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn segments(&self) -> impl Iterator<Item = &Segment> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Line(s) => Some(s),
            _ => None,
        })
    }

    pub fn circles(&self) -> impl Iterator<Item = &Circle> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Fill(circle) => Some(circle),
            _ => None,
        })
    }
}

impl FrameSink for FrameRecorder {
    /// Drops whatever the previous frame recorded.
    fn clear(&mut self) {
        self.commands.clear();
        self.commands.push(DrawCommand::Clear);
    }

    fn stroke_line(&mut self, segment: Segment) {
        self.commands.push(DrawCommand::Line(segment));
    }

    fn fill_circle(&mut self, circle: Circle) {
        self.commands.push(DrawCommand::Fill(circle));
    }
}
