//! The simulation state machine: frame advance, history and the transient
//! global effects (wind, one-shot impulse, interactive insertion).

use crate::behavior;
use crate::boid::Boid;
use crate::config::SimulationConfig;
use crate::error::SimulationError;
use crate::history::{Frame, FrameHistory};
use crate::vector::Vector2D;

/// A one-shot acceleration override, applied to every boid for exactly one
/// tick and then cleared.
pub type Impulse = Box<dyn Fn(&Boid) -> Vector2D + Send + Sync>;

/// Owns the frame history and the transient effect state, and advances the
/// simulation one tick at a time.
///
/// All per-boid computation within a tick reads a frozen snapshot of the
/// previous frame; commands (`set_wind`, `trigger_startle`, `insert_boid`)
/// take `&mut self` and therefore serialize against `tick` under Rust's
/// borrow rules. Hosts sharing a `Simulation` across threads must add their
/// own mutual exclusion.
pub struct Simulation {
    config: SimulationConfig,
    history: FrameHistory,
    wind: Option<Vector2D>,
    impulse: Option<Impulse>,
}

impl Simulation {
    /// Creates a simulation seeded with an initial explosion frame of
    /// `config.num_boids` boids, so the history is never empty.
    pub fn new(config: SimulationConfig) -> Self {
        let mut sim = Self {
            config,
            history: FrameHistory::new(),
            wind: None,
            impulse: None,
        };
        sim.explosion(config.num_boids);
        sim
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn history(&self) -> &FrameHistory {
        &self.history
    }

    /// The persistent wind acceleration, if any has been set.
    pub fn wind(&self) -> Option<Vector2D> {
        self.wind
    }

    /// The most recently pushed frame.
    pub fn current_frame(&self) -> Result<&Frame, SimulationError> {
        self.history.latest().ok_or(SimulationError::EmptyHistory)
    }

    /// Appends a frame to the history (evicting the oldest when full) and
    /// returns a reference to it.
    pub fn push_frame(&mut self, frame: Frame) -> Result<&Frame, SimulationError> {
        self.history.push(frame);
        self.current_frame()
    }

    /// Re-pushes the oldest retained frame.
    ///
    /// This is not a restart from t=0: together with capacity eviction,
    /// each call slides the retained window forward by one slot, stepping
    /// the simulation backwards through the remembered frames while the
    /// buffer refills behind it.
    pub fn reset_to_earliest(&mut self) -> Result<(), SimulationError> {
        let earliest = self
            .history
            .earliest()
            .cloned()
            .ok_or(SimulationError::EmptyHistory)?;
        log::info!("rewound to earliest remembered frame ({} boids)", earliest.len());
        self.history.push(earliest);
        Ok(())
    }

    /// Sets the persistent wind from a meteorological direction: `theta`
    /// names where the wind blows *from*, so the acceleration points the
    /// opposite way. Overwrites any previous wind.
    pub fn set_wind(&mut self, theta: f64) {
        let wind = Vector2D::from_polar(self.config.wind_strength, theta) * -1.0;
        log::info!("wind set to ({:.4}, {:.4})", wind.x, wind.y);
        self.wind = Some(wind);
    }

    /// Installs a one-shot acceleration override for the next tick.
    pub fn set_impulse(&mut self, impulse: Impulse) {
        self.impulse = Some(impulse);
    }

    /// Startles the flock: for one tick, every boid accelerates by its own
    /// position scaled by `startle_strength`. Not a physical force: the
    /// position-dependent magnitudes produce a deliberately dramatic
    /// scatter.
    pub fn trigger_startle(&mut self) {
        let strength = self.config.startle_strength;
        log::info!("startle triggered");
        self.set_impulse(Box::new(move |boid: &Boid| boid.position * strength));
    }

    /// Appends a boid to the current frame and pushes the result as a new
    /// state, synchronously with the call.
    pub fn insert_boid(&mut self, boid: Boid) -> Result<(), SimulationError> {
        let mut frame = self.current_frame()?.clone();
        frame.push(boid);
        log::info!(
            "inserted boid at ({:.1}, {:.1}); {} boids total",
            boid.position.x,
            boid.position.y,
            frame.len()
        );
        self.history.push(frame);
        Ok(())
    }

    /// Pushes a frame of `n` fresh boids at the world centre, each with a
    /// unit velocity in a random direction.
    pub fn explosion(&mut self, n: usize) {
        let centre = Vector2D::new(self.config.width / 2.0, self.config.height / 2.0);
        let frame: Frame = (0..n)
            .map(|_| Boid::new(centre, Vector2D::random_direction(1.0)))
            .collect();
        log::info!("explosion seeded {} boids at the centre", frame.len());
        self.history.push(frame);
    }

    /// Advances the simulation by one tick.
    ///
    /// Every boid in the current frame is updated against that same frame:
    /// with the one-shot impulse as its acceleration and a fresh random
    /// wind-equivalent of `startle_strength` when an impulse is pending,
    /// otherwise with the composite flocking force and the persistent wind
    /// (zero if unset). The impulse is cleared exactly once, after all
    /// boids have been computed, and the new frame is pushed.
    pub fn tick(&mut self) -> Result<(), SimulationError> {
        let config = self.config;
        let wind = self.wind.unwrap_or_else(Vector2D::zero);

        let frame = self.history.latest().ok_or(SimulationError::EmptyHistory)?;
        let next: Frame = match &self.impulse {
            Some(impulse) => frame
                .iter()
                .map(|boid| {
                    let scatter_wind = Vector2D::random_direction(config.startle_strength);
                    boid.update(impulse(boid), scatter_wind, &config)
                })
                .collect(),
            None => frame
                .iter()
                .map(|boid| boid.update(behavior::flock(boid, frame, &config), wind, &config))
                .collect(),
        };

        self.impulse = None;
        log::debug!("tick advanced {} boids", next.len());
        self.history.push(next);
        Ok(())
    }
}
