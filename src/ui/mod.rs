//! UI shell: the eframe application, the landing console page, and the
//! routed destination pages.
use eframe::egui;

use crate::particles;
use crate::router::{Route, SiteRouter};

pub mod landing;
pub mod pages;

/// Main application state: the router plus the landing page's engines.
///
/// The landing state only exists while the landing route is mounted;
/// switching away drops it, which cancels every pending timer in one go.
pub struct UniversApp {
    router: SiteRouter,
    landing: Option<landing::LandingPage>,
}

impl UniversApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            router: SiteRouter::new(),
            landing: None,
        }
    }

    fn nav_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(
                    egui::RichText::new("Univers.run")
                        .strong()
                        .color(egui::Color32::from_rgb(34, 211, 238)),
                );
                ui.separator();
                for route in Route::nav_entries() {
                    let selected = *route == self.router.current();
                    if ui.selectable_label(selected, route.title()).clicked() {
                        self.router.go(*route);
                    }
                }
            });
        });
    }
}

impl eframe::App for UniversApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        match self.router.current() {
            Route::Landing => {
                let landing = self
                    .landing
                    .get_or_insert_with(landing::LandingPage::new);
                landing.show(ctx, &mut self.router);

                if self.router.current() != Route::Landing {
                    // Unmount: drops the field and the console session,
                    // cancelling their remaining timers.
                    self.landing = None;
                }

                // Keep the particle field ticking while mounted.
                ctx.request_repaint_after(particles::TICK_INTERVAL);
            }
            route => {
                self.landing = None;
                self.nav_bar(ctx);
                egui::CentralPanel::default().show(ctx, |ui| {
                    pages::show(ui, route);
                });
            }
        }
    }
}
