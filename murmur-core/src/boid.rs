//! A single flocking agent and its kinematic update.

use crate::config::SimulationConfig;
use crate::vector::Vector2D;

/// One simulated agent. Immutable: [`Boid::update`] returns a new value, so
/// every boid in a tick is computed against the same unmodified frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boid {
    pub position: Vector2D,
    pub velocity: Vector2D,
}

impl Boid {
    pub fn new(position: Vector2D, velocity: Vector2D) -> Self {
        Self { position, velocity }
    }

    /// Advances this boid by one tick, returning the successor.
    ///
    /// The new velocity is `limit(velocity + acceleration, max_speed) + wind`;
    /// the speed cap applies before the wind term, so a tailwind may push
    /// the effective speed above `max_speed`. The new position integrates
    /// the *pre-update* velocity (a one-tick-lagged Euler step) and wraps
    /// toroidally against the world bounds.
    pub fn update(&self, acceleration: Vector2D, wind: Vector2D, config: &SimulationConfig) -> Self {
        let velocity = (self.velocity + acceleration).limit(config.max_speed) + wind;
        let position = Vector2D::new(
            wrap(self.position.x + self.velocity.x, config.width),
            wrap(self.position.y + self.velocity.y, config.height),
        );
        Self { position, velocity }
    }
}

/// Toroidal wrap of one coordinate against one world dimension.
fn wrap(x: f64, dimension: f64) -> f64 {
    if x > dimension {
        x - dimension
    } else if x < 0.0 {
        x + dimension
    } else {
        x
    }
}
