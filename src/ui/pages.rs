// Routed destination pages. These are opaque presentational views: the
// core engines never depend on their internals.
use eframe::egui;

use crate::router::Route;

pub fn show(ui: &mut egui::Ui, route: Route) {
    ui.vertical_centered(|ui| {
        ui.add_space(24.0);
        ui.heading(route.title());
        ui.add_space(12.0);
        ui.label(blurb(route));
    });
}

fn blurb(route: Route) -> &'static str {
    match route {
        Route::Landing => "",
        Route::CodeUnivers => {
            "The universe as a running program: explore how physical law \
             compiles into everything you see."
        }
        Route::Relativity => {
            "Time dilation and length contraction, computed live as you \
             approach the speed of light."
        }
        Route::BlackHoleConcept => {
            "Event horizons, spaghettification, and what falls in never \
             comes back out."
        }
        Route::GodBinary => {
            "If the universe computes, what is its instruction set?"
        }
        Route::QuantumLab => {
            "Superposition and entanglement experiments you can poke at."
        }
        Route::ScaleLab => {
            "From Planck length to the observable universe, one slider."
        }
    }
}
