// Path-addressed routing between the site's pages.
use log::{info, warn};

use crate::console;

/// Every page of the site. Each one is an opaque destination addressed by
/// its path string; the routed content lives in `ui::pages`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// The command console gating entry to the rest of the site.
    Landing,
    CodeUnivers,
    Relativity,
    BlackHoleConcept,
    GodBinary,
    QuantumLab,
    ScaleLab,
}

impl Route {
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" => Some(Route::Landing),
            "/code-univers" => Some(Route::CodeUnivers),
            "/relativity" => Some(Route::Relativity),
            "/black-hole-concept" => Some(Route::BlackHoleConcept),
            "/god-binary" => Some(Route::GodBinary),
            "/quantum-lab" => Some(Route::QuantumLab),
            "/scale-lab" => Some(Route::ScaleLab),
            _ => None,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::CodeUnivers => "/code-univers",
            Route::Relativity => "/relativity",
            Route::BlackHoleConcept => "/black-hole-concept",
            Route::GodBinary => "/god-binary",
            Route::QuantumLab => "/quantum-lab",
            Route::ScaleLab => "/scale-lab",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Landing => "Univers.run",
            Route::CodeUnivers => "Code Universe",
            Route::Relativity => "Relativity Calculator",
            Route::BlackHoleConcept => "Black Hole Concept",
            Route::GodBinary => "God Codes In Binary",
            Route::QuantumLab => "Quantum Lab",
            Route::ScaleLab => "Scale Lab",
        }
    }

    /// Destinations listed in the navigation bar, in display order.
    pub fn nav_entries() -> &'static [Route] {
        &[
            Route::CodeUnivers,
            Route::Relativity,
            Route::BlackHoleConcept,
            Route::QuantumLab,
            Route::ScaleLab,
            Route::GodBinary,
        ]
    }
}

/// Holds the current route and satisfies the console's navigation handoff.
pub struct SiteRouter {
    current: Route,
}

impl SiteRouter {
    pub fn new() -> Self {
        Self {
            current: Route::Landing,
        }
    }

    pub fn current(&self) -> Route {
        self.current
    }

    pub fn go(&mut self, route: Route) {
        if route != self.current {
            info!("route change: {} -> {}", self.current.path(), route.path());
            self.current = route;
        }
    }
}

impl Default for SiteRouter {
    fn default() -> Self {
        Self::new()
    }
}

impl console::Router for SiteRouter {
    fn navigate_to(&mut self, path: &str) {
        match Route::from_path(path) {
            Some(route) => self.go(route),
            None => warn!("navigation requested to unknown path {path:?}"),
        }
    }
}
