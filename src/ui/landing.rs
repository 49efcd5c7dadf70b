// Landing page: the floating particle backdrop and the command console.
use std::time::Instant;

use eframe::egui;

use crate::console::ConsoleSession;
use crate::particles::{ParticleField, PARTICLE_COUNT};
use crate::router::SiteRouter;

const CYAN: egui::Color32 = egui::Color32::from_rgb(34, 211, 238);
const GREEN: egui::Color32 = egui::Color32::from_rgb(74, 222, 128);
const RED: egui::Color32 = egui::Color32::from_rgb(252, 165, 165);

pub struct LandingPage {
    field: ParticleField,
    console: ConsoleSession,
    /// Widget-side mirror of the console buffer for the text edit.
    input_text: String,
    focus_requested: bool,
}

impl LandingPage {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            field: ParticleField::new(PARTICLE_COUNT, now, &mut rand::thread_rng()),
            console: ConsoleSession::new(now),
            input_text: String::new(),
            focus_requested: false,
        }
    }

    pub fn show(&mut self, ctx: &egui::Context, router: &mut SiteRouter) {
        let now = Instant::now();
        self.field.advance(now);
        self.console.poll(now, router);

        egui::CentralPanel::default()
            .frame(egui::Frame::default().fill(egui::Color32::from_rgb(15, 12, 41)))
            .show(ctx, |ui| {
                self.paint_particles(ui);
                self.console_frame(ui, now);
            });
    }

    fn paint_particles(&self, ui: &egui::Ui) {
        let rect = ui.max_rect();
        let painter = ui.painter();

        for d in self.field.draw_instructions() {
            let center = egui::pos2(
                rect.min.x + rect.width() * d.x_pct / 100.0,
                rect.min.y + rect.height() * d.y_pct / 100.0,
            );
            let alpha = (d.opacity * 255.0) as u8;
            // Soft glow under the core dot.
            painter.circle_filled(
                center,
                d.glow_radius,
                egui::Color32::from_rgba_unmultiplied(34, 211, 238, alpha / 5),
            );
            painter.circle_filled(
                center,
                d.diameter / 2.0,
                egui::Color32::from_rgba_unmultiplied(34, 211, 238, alpha),
            );
        }
    }

    fn console_frame(&mut self, ui: &mut egui::Ui, now: Instant) {
        // Copy the view out so the session can be mutated below.
        let view = self.console.view();
        let (loading, typing, cursor_visible) = (view.loading, view.typing, view.cursor_visible);
        let error = view.error.to_string();

        ui.vertical_centered(|ui| {
            ui.add_space(ui.available_height() * 0.18);

            ui.label(
                egui::RichText::new("Univers.run")
                    .size(64.0)
                    .strong()
                    .color(CYAN),
            );
            ui.add_space(8.0);
            ui.label(
                egui::RichText::new(
                    "In the language of machines, the run command executes a program.",
                )
                .size(18.0)
                .color(egui::Color32::from_gray(210)),
            );
            ui.label(
                egui::RichText::new("Type the command: npm run univers")
                    .size(16.0)
                    .color(egui::Color32::from_rgb(253, 224, 71)),
            );
            ui.add_space(24.0);

            egui::Frame::default()
                .fill(egui::Color32::from_black_alpha(200))
                .stroke(egui::Stroke::new(1.5, CYAN.gamma_multiply(0.5)))
                .rounding(12.0)
                .inner_margin(16.0)
                .show(ui, |ui| {
                    ui.set_max_width(560.0);

                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new(">_").color(CYAN).monospace());
                        ui.label(egui::RichText::new("Universal Console").color(CYAN));
                        if typing {
                            ui.label(egui::RichText::new("...").color(GREEN).monospace());
                        }
                    });
                    ui.add_space(6.0);

                    ui.horizontal(|ui| {
                        ui.label(egui::RichText::new("$").color(CYAN).monospace());

                        let edit = egui::TextEdit::singleline(&mut self.input_text)
                            .font(egui::TextStyle::Monospace)
                            .text_color(GREEN)
                            .hint_text("Type your command")
                            .frame(false)
                            .desired_width(440.0);
                        let response = ui.add_enabled(!loading, edit);

                        // One focus request at mount; ignored if it fails.
                        if !self.focus_requested {
                            response.request_focus();
                            self.focus_requested = true;
                        }

                        if response.changed() {
                            self.console.on_input(&self.input_text, now);
                        }

                        if response.lost_focus()
                            && ui.input(|i| i.key_pressed(egui::Key::Enter))
                        {
                            self.console.on_submit(now);
                            // The console may have cleared or frozen the
                            // buffer; resync the widget mirror.
                            self.input_text = self.console.view().buffer.to_string();
                            response.request_focus();
                        }

                        if cursor_visible && !loading {
                            ui.label(egui::RichText::new("|").color(GREEN).monospace());
                        }
                    });

                    if !error.is_empty() {
                        ui.add_space(8.0);
                        egui::Frame::default()
                            .fill(egui::Color32::from_rgba_unmultiplied(127, 29, 29, 120))
                            .stroke(egui::Stroke::new(1.0, RED.gamma_multiply(0.5)))
                            .rounding(8.0)
                            .inner_margin(8.0)
                            .show(ui, |ui| {
                                ui.label(
                                    egui::RichText::new(error.as_str())
                                        .color(RED)
                                        .monospace(),
                                );
                            });
                    }

                    if loading {
                        ui.add_space(8.0);
                        egui::Frame::default()
                            .fill(egui::Color32::from_rgba_unmultiplied(20, 83, 45, 120))
                            .stroke(egui::Stroke::new(1.0, GREEN.gamma_multiply(0.5)))
                            .rounding(8.0)
                            .inner_margin(8.0)
                            .show(ui, |ui| {
                                ui.label(
                                    egui::RichText::new("Initializing universe...")
                                        .color(GREEN)
                                        .monospace(),
                                );
                            });
                    }
                });

            ui.add_space(16.0);
            ui.label(
                egui::RichText::new("Press Enter to execute your command")
                    .size(13.0)
                    .color(egui::Color32::from_gray(140)),
            );
        });
    }
}

impl Default for LandingPage {
    fn default() -> Self {
        Self::new()
    }
}
