//! Shared data types for the simulation's host boundary.
//!
//! Rendering, input wiring and the animation timer live outside the
//! simulation; these serde types are the surface they talk through: frame
//! snapshots going out, commands coming in.

#![cfg_attr(not(feature = "std"), no_std)]

use serde::{Deserialize, Serialize};

/// A 2D value in world coordinates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct Vec2Data {
    pub x: f64,
    pub y: f64,
}

impl Vec2Data {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// One boid as seen by a host: position and velocity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BoidState {
    pub position: Vec2Data,
    pub velocity: Vec2Data,
}

/// One full frame, in the simulation's insertion order.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FrameSnapshot {
    pub boids: Vec<BoidState>,
}

/// Commands a host may issue against the simulation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Command {
    /// Advance the simulation by one tick.
    Tick,
    /// Re-push the oldest remembered frame (rewind-and-replay step).
    ResetToEarliest,
    /// Set the persistent wind; `theta` is radians, naming where the wind
    /// blows from.
    SetWind { theta: f64 },
    /// Startle the flock for exactly one tick.
    TriggerStartle,
    /// Insert one boid into the current frame.
    Insert {
        position: Vec2Data,
        velocity: Vec2Data,
    },
    /// Replace the population with a fresh centred burst.
    Explosion { count: usize },
}

/// The simulation's fixed design parameters, reportable to hosts.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SimulationSettings {
    pub width: f64,
    pub height: f64,
    pub num_boids: usize,
    pub frame_memory: usize,
    pub desired_separation: f64,
    pub neighbour_dist: f64,
    pub max_speed: f64,
    pub max_force: f64,
    pub wind_strength: f64,
    pub startle_strength: f64,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            width: 640.0,
            height: 480.0,
            num_boids: 150,
            frame_memory: 60,
            desired_separation: 25.0,
            neighbour_dist: 50.0,
            max_speed: 2.0,
            max_force: 0.03,
            wind_strength: 0.02,
            startle_strength: 2.0,
        }
    }
}

/// Summary of the simulation state after a run.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct StatusResponse {
    pub boid_count: usize,
    pub frame_count: usize,
    pub wind_active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_round_trip() {
        let command = Command::SetWind { theta: 1.5 };
        let json = serde_json::to_string(&command).unwrap();
        let parsed: Command = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, command);
    }

    #[test]
    fn test_insert_command_carries_both_vectors() {
        let command = Command::Insert {
            position: Vec2Data::new(10.0, 20.0),
            velocity: Vec2Data::new(-1.0, 0.5),
        };
        let json = serde_json::to_string(&command).unwrap();
        assert!(json.contains("\"x\":10.0"));
        let parsed: Command = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, command);
    }

    #[test]
    fn test_frame_snapshot_shape() {
        let snapshot = FrameSnapshot {
            boids: vec![BoidState {
                position: Vec2Data::new(320.0, 240.0),
                velocity: Vec2Data::new(0.0, 1.0),
            }],
        };
        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"position\""));
        assert!(json.contains("\"velocity\""));

        let parsed: FrameSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, snapshot);
    }

    #[test]
    fn test_default_settings_match_the_design_constants() {
        let settings = SimulationSettings::default();
        assert_eq!(settings.width, 640.0);
        assert_eq!(settings.height, 480.0);
        assert_eq!(settings.frame_memory, 60);
        assert_eq!(settings.startle_strength, settings.max_speed);
    }
}
