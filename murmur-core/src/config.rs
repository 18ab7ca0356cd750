//! Fixed design parameters of the simulation.

/// Capacity of the frame history. Once this many frames are retained, every
/// push evicts the oldest.
pub const FRAME_MEMORY: usize = 60;

/// Simulation-wide constants: world bounds, steering radii and caps, and the
/// strengths of the global perturbations. These are design parameters, not
/// tunables derived at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    /// World width; positions wrap toroidally against it.
    pub width: f64,
    /// World height; positions wrap toroidally against it.
    pub height: f64,
    /// Population of the seeding explosion.
    pub num_boids: usize,
    /// Radius inside which neighbours are pushed away from.
    pub desired_separation: f64,
    /// Radius inside which neighbours count for alignment and cohesion.
    pub neighbour_dist: f64,
    /// Speed cap applied before the wind term is added.
    pub max_speed: f64,
    /// Cap on composed steering forces.
    pub max_force: f64,
    /// Magnitude of the persistent wind acceleration.
    pub wind_strength: f64,
    /// Magnitude of the one-shot startle perturbation; equal to the speed
    /// cap so the scatter is visibly dramatic.
    pub startle_strength: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 480.0,
            num_boids: 150,
            desired_separation: 25.0,
            neighbour_dist: 50.0,
            max_speed: 2.0,
            max_force: 0.03,
            wind_strength: 0.02,
            startle_strength: 2.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();
        assert_eq!(config.width, 640.0);
        assert_eq!(config.height, 480.0);
        assert_eq!(config.num_boids, 150);
        assert_eq!(config.startle_strength, config.max_speed);
    }
}
