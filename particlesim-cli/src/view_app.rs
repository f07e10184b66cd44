//! Windowed host for the particle simulation.
//!
//! Each frame: track the canvas size as the viewport, feed the wall-clock
//! delta through the simulation clock, then draw every particle as a filled
//! square.

use eframe::egui;
use particlesim_core::{
    advance_frame, build_simulation_context, get_particle_states, step_simulation,
    SimulationConfig, SimulationContext,
};
use std::time::Instant;

const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(40, 42, 54);
const PARTICLE_COLOR: egui::Color32 = egui::Color32::from_rgb(139, 233, 253);

/// Open the window and block until it is closed
pub fn run_window(config: SimulationConfig) -> Result<(), Box<dyn std::error::Error>> {
    let ctx = build_simulation_context(config)?;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Particle Simulation")
            .with_inner_size([ctx.bounds.width() as f32, ctx.bounds.height() as f32])
            .with_resizable(true),
        ..Default::default()
    };

    eframe::run_native(
        "Particle Simulation",
        options,
        Box::new(move |_cc| Ok(Box::new(ViewApp::new(ctx)))),
    )?;
    Ok(())
}

pub struct ViewApp {
    ctx: SimulationContext,
    playing: bool,
    last_frame: Instant,
}

impl ViewApp {
    pub fn new(ctx: SimulationContext) -> Self {
        Self {
            ctx,
            playing: true,
            last_frame: Instant::now(),
        }
    }

    /// Keep the simulation viewport in sync with the canvas
    fn sync_bounds(&mut self, canvas: egui::Rect) {
        let width = canvas.width().round() as u32;
        let height = canvas.height().round() as u32;
        if width == self.ctx.bounds.width() && height == self.ctx.bounds.height() {
            return;
        }
        // A minimized window reports a zero-sized canvas; keep the old bounds
        if let Err(e) = self.ctx.set_bounds(width, height) {
            log::debug!("ignoring resize: {}", e);
        }
    }

    fn frame_dt(&mut self) -> f32 {
        let now = Instant::now();
        let dt = now.duration_since(self.last_frame).as_secs_f32();
        self.last_frame = now;
        dt
    }
}

impl eframe::App for ViewApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Measure every frame so a pause does not turn into one huge delta
        let frame_dt = self.frame_dt();

        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button(if self.playing { "⏸ Pause" } else { "▶ Play" }).clicked() {
                    self.playing = !self.playing;
                }

                if ui.button("⏮ Reset").clicked() {
                    self.ctx.reset();
                }

                if ui.button("⏭ Step").clicked() {
                    let dt = self.ctx.clock.fixed_step();
                    step_simulation(&mut self.ctx, dt);
                }

                ui.separator();

                ui.label(format!(
                    "Particles: {}  Collisions: {:?}  Remainder: {:?}  Steps: {}  Time: {:.2}s  Viewport: {}x{}",
                    self.ctx.system.len(),
                    self.ctx.system.collision_mode(),
                    self.ctx.clock.policy(),
                    self.ctx.step_count,
                    self.ctx.elapsed,
                    self.ctx.bounds.width(),
                    self.ctx.bounds.height()
                ));
            });
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(BACKGROUND))
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::hover());
                let canvas = response.rect;
                self.sync_bounds(canvas);

                if self.playing {
                    advance_frame(&mut self.ctx, frame_dt);
                }

                for particle in get_particle_states(&self.ctx) {
                    let (left, top, w, h) = particle.rect();
                    let rect = egui::Rect::from_min_size(
                        canvas.min + egui::vec2(left as f32, top as f32),
                        egui::vec2(w as f32, h as f32),
                    );
                    painter.rect_filled(rect, 0.0, PARTICLE_COLOR);
                }
            });

        if self.playing {
            ctx.request_repaint();
        }
    }
}
