//! Interactive particle field viewer built with eframe/egui.
//!
//! This module defines [`Viewer`], which owns the [`Simulation`] and
//! implements [`eframe::App`] to feed it canvas size and pointer events and
//! to paint the draw requests it emits.

use eframe::App;
use glam::Vec2;
use sim_core::{
    Config, Extent, FrameStats, Simulation,
    render::{Circle, FrameSink, Segment},
    simulation::TickScheduler,
};

const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(12, 14, 28);
const PARTICLE_COLOR: egui::Color32 = egui::Color32::from_rgb(170, 200, 255);
const LINE_COLOR: egui::Color32 = egui::Color32::from_rgb(120, 150, 230);
const LINE_WIDTH: f32 = 1.0;

/// Main application state for the viewer.
///
/// [`Viewer`] glues together:
/// - The simulation core: a [`Simulation`] built from [`Config`].
/// - UI state (running/paused, pending single step, last frame stats).
/// - eframe/egui callbacks for painting and pointer tracking.
///
/// The simulation is created lazily on the first frame, once the canvas
/// size is known, and rebuilt by [`Simulation::resize`] whenever the canvas
/// size changes.
///
/// ### Fields
/// - `cfg` - Tuning handed to every simulation this viewer creates.
/// - `seed` - Optional RNG seed for reproducible spawns.
/// - `sim` - The simulation, `None` until a valid canvas size is seen.
/// - `running` - Whether a tick runs every frame.
/// - `step_requested` - Run exactly one tick on the next frame while paused.
/// - `last_stats` - Particle and edge counts of the last painted frame.
/// - `setup_error` - Why the current canvas size was rejected, if it was.
pub struct Viewer {
    cfg: Config,
    seed: Option<u64>,
    sim: Option<Simulation>,

    running: bool,
    step_requested: bool,

    last_stats: FrameStats,
    setup_error: Option<String>,
}

/// [`FrameSink`] that paints straight onto an egui canvas.
struct PainterSink<'a> {
    painter: &'a egui::Painter,
    rect: egui::Rect,
}

impl FrameSink for PainterSink<'_> {
    fn clear(&mut self) {
        self.painter.rect_filled(self.rect, 0.0, BACKGROUND);
    }

    fn stroke_line(&mut self, s: Segment) {
        let a = canvas_to_screen(Vec2::new(s.x1, s.y1), self.rect);
        let b = canvas_to_screen(Vec2::new(s.x2, s.y2), self.rect);
        let color = LINE_COLOR.gamma_multiply(s.opacity);
        self.painter
            .line_segment([a, b], egui::Stroke::new(LINE_WIDTH, color));
    }

    fn fill_circle(&mut self, c: Circle) {
        let center = canvas_to_screen(Vec2::new(c.x, c.y), self.rect);
        self.painter.circle_filled(center, c.radius, PARTICLE_COLOR);
    }
}

/// Converts a canvas position (origin at the canvas' top-left) to screen-space.
fn canvas_to_screen(p: Vec2, rect: egui::Rect) -> egui::Pos2 {
    egui::pos2(rect.min.x + p.x, rect.min.y + p.y)
}

/// Inverse of [`canvas_to_screen`].
fn screen_to_canvas(p: egui::Pos2, rect: egui::Rect) -> Vec2 {
    Vec2::new(p.x - rect.min.x, p.y - rect.min.y)
}

impl Viewer {
    /// Creates a running viewer; the simulation itself waits for the first frame.
    pub fn new(cfg: Config, seed: Option<u64>) -> Self {
        Self {
            cfg,
            seed,
            sim: None,
            running: true,
            step_requested: false,
            last_stats: FrameStats::default(),
            setup_error: None,
        }
    }

    /// Makes sure a simulation exists for a canvas of the given size.
    ///
    /// Creates it on first use and resizes it afterwards. A rejected size is
    /// logged once and leaves any existing simulation untouched.
    fn ensure_simulation(&mut self, extent: Extent) {
        let result = match self.sim.as_mut() {
            Some(sim) => sim.resize(extent),
            None => match Simulation::new(self.cfg.clone(), extent, self.seed) {
                Ok(sim) => {
                    self.sim = Some(sim);
                    Ok(())
                }
                Err(err) => Err(err),
            },
        };

        match result {
            Ok(()) => self.setup_error = None,
            Err(err) => {
                let message = err.to_string();
                if self.setup_error.as_ref() != Some(&message) {
                    tracing::warn!("Canvas rejected: {message}");
                }
                self.setup_error = Some(message);
            }
        }
    }

    /// Respawns all particles at the current canvas size.
    fn reset(&mut self) {
        if let Some(sim) = self.sim.as_mut() {
            sim.reset();
        }
    }

    /// Forwards the pointer and produces this frame's draw requests.
    ///
    /// While running a full tick runs and `scheduler` is asked for the next
    /// frame. While paused the current positions are redrawn, unless a single
    /// step was requested, which runs exactly one tick.
    ///
    /// ### Parameters
    /// - `hover` - Pointer position in canvas coordinates, `None` once it left.
    /// - `sink` - Receiver of the draw requests.
    /// - `scheduler` - Called once per running tick to request a repaint.
    fn advance_frame(
        &mut self,
        hover: Option<Vec2>,
        sink: &mut impl FrameSink,
        scheduler: &mut impl TickScheduler,
    ) {
        let Some(sim) = self.sim.as_mut() else {
            return;
        };

        match hover {
            Some(p) => sim.pointer_moved(p.x, p.y),
            None => sim.pointer_left(),
        }

        self.last_stats = if self.running {
            sim.tick(sink, scheduler)
        } else if self.step_requested {
            self.step_requested = false;
            sim.step(sink)
        } else {
            sim.draw(sink)
        };
    }

    /// Builds the top panel UI (run controls, stepping, reset).
    fn ui_top_panel(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .button(if self.running { "⏸ Pause" } else { "▶ Run" })
                    .clicked()
                {
                    self.running = !self.running;
                }

                if ui
                    .add_enabled(!self.running, egui::Button::new("Step"))
                    .clicked()
                {
                    self.step_requested = true;
                }

                if ui.button("Reset").clicked() {
                    self.reset();
                }
            });
        });
    }

    /// Builds the bottom status bar (particle and edge counts, pointer).
    fn ui_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let sim = self.sim.as_ref();
                let pointer = sim.and_then(|sim| sim.pointer().position());
                match pointer {
                    Some(p) => ui.label(format!("pointer = ({:.0}, {:.0})", p.x, p.y)),
                    None => ui.label("pointer = none"),
                };
                ui.separator();
                ui.label(format!("edges = {}", self.last_stats.edges));
                ui.label(format!("particles = {}", self.last_stats.particles));
            });
        });
    }

    /// Builds the central canvas: tracks its size and the pointer, runs the
    /// tick and paints the frame.
    fn ui_central_panel(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let response = ui.allocate_response(ui.available_size(), egui::Sense::hover());
                let rect = response.rect;
                let painter = ui.painter_at(rect);

                self.ensure_simulation(Extent::new(rect.width(), rect.height()));

                if let Some(message) = &self.setup_error {
                    painter.rect_filled(rect, 0.0, BACKGROUND);
                    painter.text(
                        rect.center(),
                        egui::Align2::CENTER_CENTER,
                        message,
                        egui::FontId::proportional(14.0),
                        egui::Color32::LIGHT_RED,
                    );
                    return;
                }

                let hover = response.hover_pos().map(|p| screen_to_canvas(p, rect));
                let mut sink = PainterSink {
                    painter: &painter,
                    rect,
                };
                self.advance_frame(hover, &mut sink, &mut || ctx.request_repaint());
            });
    }
}

impl App for Viewer {
    /// eframe callback that builds all UI panels for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ui_top_panel(ctx);
        self.ui_status_bar(ctx);
        self.ui_central_panel(ctx);
    }
}
