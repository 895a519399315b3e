use std::time::{Duration, Instant};

use pitris_engine::Cell;
use rand::Rng;

const MAX_PARTICLES: usize = 100;
const LIFETIME: Duration = Duration::from_secs(1);
const FALL_ROWS_PER_SEC: f32 = 3.0;
const MAX_DRIFT_COLS_PER_SEC: f32 = 1.5;

#[derive(Debug, Clone, Copy)]
struct Particle {
    row: f32,
    col: f32,
    drift: f32,
    life: f32,
}

/// Short-lived sparks emitted where rows cleared. Each one falls, drifts
/// sideways a little, and dies after a second.
#[derive(Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    last_advance: Instant,
}

impl Default for ParticleField {
    fn default() -> Self {
        Self::new()
    }
}

impl ParticleField {
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
            last_advance: Instant::now(),
        }
    }

    /// Spawns one particle per cell, up to the field's capacity.
    #[expect(clippy::cast_precision_loss)]
    pub fn spawn(&mut self, cells: impl IntoIterator<Item = Cell>) {
        let mut rng = rand::rng();
        for cell in cells {
            if self.particles.len() >= MAX_PARTICLES {
                break;
            }
            self.particles.push(Particle {
                row: cell.row as f32,
                col: cell.col as f32,
                drift: rng.random_range(-MAX_DRIFT_COLS_PER_SEC..=MAX_DRIFT_COLS_PER_SEC),
                life: LIFETIME.as_secs_f32(),
            });
        }
    }

    /// Advances positions and ages by the wall-clock time since the last call.
    pub fn advance(&mut self) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.last_advance);
        self.last_advance = now;
        self.advance_by(elapsed);
    }

    fn advance_by(&mut self, elapsed: Duration) {
        let dt = elapsed.as_secs_f32();
        for particle in &mut self.particles {
            particle.life -= dt;
            particle.row += FALL_ROWS_PER_SEC * dt;
            particle.col += particle.drift * dt;
        }
        self.particles.retain(|particle| particle.life > 0.0);
    }

    pub fn clear(&mut self) {
        self.particles.clear();
    }

    /// Current particle positions, rounded to the grid.
    #[expect(clippy::cast_possible_truncation)]
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.particles
            .iter()
            .map(|particle| Cell::new(particle.row.round() as i32, particle.col.round() as i32))
    }
}
