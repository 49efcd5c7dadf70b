// Floating particle field that drifts behind the landing console.
use std::time::{Duration, Instant};

use rand::Rng;

/// Number of particles in the background field.
pub const PARTICLE_COUNT: usize = 20;

/// Fixed simulation step for the field.
pub const TICK_INTERVAL: Duration = Duration::from_millis(50);

// Particles drift upward out of view and recycle from the top band.
const WRAP_BOTTOM: f32 = -5.0;
const WRAP_TOP: f32 = 105.0;

/// One animated point in the field. Position is in percent of the viewport;
/// `x`, `size` and `speed` are fixed at creation, `y` and `opacity` mutate
/// every tick.
#[derive(Debug, Clone)]
pub struct Particle {
    pub id: usize,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub speed: f32,
    pub opacity: f32,
}

/// What the presentation layer needs to draw one particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawInstruction {
    /// Horizontal position, percent of viewport width.
    pub x_pct: f32,
    /// Vertical position, percent of viewport height.
    pub y_pct: f32,
    /// Core circle diameter in pixels.
    pub diameter: f32,
    /// Soft glow radius in pixels (3x the particle size).
    pub glow_radius: f32,
    pub opacity: f32,
}

/// Fixed-size set of particles advanced on a fixed 50 ms step.
///
/// The field owns no timer of its own; the caller feeds it wall-clock
/// instants via [`ParticleField::advance`] and the field runs however many
/// whole steps have elapsed. Dropping the field cancels everything.
pub struct ParticleField {
    particles: Vec<Particle>,
    started: Instant,
    last_tick: Instant,
}

impl ParticleField {
    /// Create `count` particles with randomized initial state.
    ///
    /// The random source is injected so tests can seed it.
    pub fn new(count: usize, now: Instant, rng: &mut impl Rng) -> Self {
        let particles = (0..count)
            .map(|id| Particle {
                id,
                x: rng.gen_range(0.0..100.0),
                y: rng.gen_range(0.0..100.0),
                size: rng.gen_range(1.0..4.0),
                speed: rng.gen_range(0.2..0.7),
                opacity: rng.gen_range(0.2..0.8),
            })
            .collect();

        Self {
            particles,
            started: now,
            last_tick: now,
        }
    }

    /// Run one fixed step per whole 50 ms interval elapsed since the last
    /// call. Returns the number of steps taken.
    pub fn advance(&mut self, now: Instant) -> u32 {
        let mut steps = 0;
        while now.duration_since(self.last_tick) >= TICK_INTERVAL {
            self.last_tick += TICK_INTERVAL;
            let t = self.last_tick.duration_since(self.started).as_secs_f32();
            self.step(t);
            steps += 1;
        }
        steps
    }

    // One simulation step at elapsed time `t` seconds.
    fn step(&mut self, t: f32) {
        for p in &mut self.particles {
            let fallen = p.y - p.speed;
            p.y = if fallen < WRAP_BOTTOM {
                // Recycle into the top band, keeping y inside [-5, 105).
                WRAP_TOP - p.speed
            } else {
                fallen
            };
            // Per-particle phase offset so the field shimmers instead of
            // pulsing in unison. Range is [0.2, 0.8] by construction.
            p.opacity = (t + p.id as f32).sin() * 0.3 + 0.5;
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Pure projection of the current state into draw instructions.
    pub fn draw_instructions(&self) -> impl Iterator<Item = DrawInstruction> + '_ {
        self.particles.iter().map(|p| DrawInstruction {
            x_pct: p.x,
            y_pct: p.y,
            diameter: p.size,
            glow_radius: p.size * 3.0,
            opacity: p.opacity,
        })
    }
}
