//! Interactive window for the gravity sandbox
//!
//! Ticks the simulation at a fixed 60 Hz, feeds it the pointer position and
//! spawns a body wherever the primary button is pressed.

use crate::pacer::FramePacer;
use crate::trails::Trails;
use eframe::egui;
use gravity_core::{default_scenario, Color, PointerSample, SimConfig, Simulation};

const HUD_SIZE: egui::Vec2 = egui::vec2(155.0, 40.0);
const HUD_TEXT_OFFSET: egui::Vec2 = egui::vec2(15.0, 32.0);
const HUD_TEXT_COLOR: egui::Color32 = egui::Color32::from_rgb(0, 123, 255);

pub struct GravityApp {
    config: SimConfig,
    sim_opt: Option<Simulation>,
    last_error: Option<String>,
    playing: bool,
    /// Last known pointer position in world coordinates
    pointer: egui::Vec2,
    pacer: FramePacer,
    trails: Trails,
}

impl GravityApp {
    pub fn new(config: SimConfig, _cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self {
            config,
            sim_opt: None,
            last_error: None,
            playing: true,
            pointer: egui::Vec2::ZERO,
            pacer: FramePacer::default(),
            trails: Trails::default(),
        };

        // Initial load
        app.reload_simulation();

        app
    }

    fn reload_simulation(&mut self) {
        match Simulation::new(self.config.clone(), default_scenario()) {
            Ok(sim) => {
                self.sim_opt = Some(sim);
                self.trails.clear();
                self.last_error = None;
            }
            Err(e) => {
                log::error!("failed to start simulation: {}", e);
                self.last_error = Some(e.to_string());
                self.sim_opt = None;
                self.playing = false;
            }
        }
    }

    fn spawn_at(&mut self, pos: egui::Vec2) {
        if let Some(ref mut sim) = self.sim_opt {
            if let Err(e) = sim.spawn_at(glam::Vec2::new(pos.x, pos.y)) {
                log::warn!("spawn ignored: {}", e);
            }
        }
    }
}

fn to_color32(c: Color, opacity: f32) -> egui::Color32 {
    let alpha = (opacity.clamp(0.0, 1.0) * 255.0) as u8;
    egui::Color32::from_rgba_unmultiplied(c.r, c.g, c.b, alpha)
}

impl eframe::App for GravityApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Top bar with controls
        egui::TopBottomPanel::top("controls").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button(if self.playing { "⏸ Pause" } else { "▶ Play" }).clicked() {
                    self.playing = !self.playing;
                }

                if ui.button("⏮ Reset").clicked() {
                    self.reload_simulation();
                }

                ui.separator();

                if let Some(ref sim) = self.sim_opt {
                    ui.label(format!("Tick: {}", sim.ticks()));
                }
            });
        });

        if let Some(ref error) = self.last_error {
            egui::TopBottomPanel::bottom("errors").show(ctx, |ui| {
                ui.label(
                    egui::RichText::new(format!("Error: {}", error)).color(egui::Color32::RED),
                );
            });
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(egui::Color32::BLACK))
            .show(ctx, |ui| {
                let (response, painter) =
                    ui.allocate_painter(ui.available_size(), egui::Sense::click());
                let origin = response.rect.min;

                // World coordinates are canvas pixels from the top-left corner
                let (hover, pressed, press_pos, frame_secs) = ctx.input(|i| {
                    (
                        i.pointer.hover_pos(),
                        i.pointer.primary_pressed(),
                        i.pointer.interact_pos(),
                        i.unstable_dt,
                    )
                });
                if let Some(pos) = hover {
                    self.pointer = pos - origin;
                }

                let due = self.pacer.advance(frame_secs);
                if let (true, Some(elapsed_millis), Some(sim)) =
                    (self.playing, due, self.sim_opt.as_mut())
                {
                    self.trails.record(sim.list_bodies());
                    sim.tick(PointerSample::new(self.pointer.x, self.pointer.y, elapsed_millis));
                }

                if pressed && response.hovered() {
                    if let Some(pos) = press_pos {
                        self.spawn_at(pos - origin);
                    }
                }

                for (opacity, body) in self.trails.faded() {
                    let center = origin + egui::vec2(body.pos.x, body.pos.y);
                    painter.circle_filled(center, body.radius, to_color32(body.color, opacity));
                }

                if let Some(ref sim) = self.sim_opt {
                    for body in sim.list_bodies() {
                        let center = origin + egui::vec2(body.pos.x, body.pos.y);
                        painter.circle_filled(center, body.radius, to_color32(body.color, 1.0));
                    }

                    // HUD
                    painter.rect_filled(
                        egui::Rect::from_min_size(origin, HUD_SIZE),
                        0.0,
                        egui::Color32::BLACK,
                    );
                    painter.text(
                        origin + HUD_TEXT_OFFSET,
                        egui::Align2::LEFT_BOTTOM,
                        sim.report(),
                        egui::FontId::monospace(14.0),
                        HUD_TEXT_COLOR,
                    );
                }
            });

        // Wake up again in time for the next tick
        ctx.request_repaint_after(self.pacer.until_next());
    }
}
