use anyhow::{Context, Result};
use clap::Parser;
use murmur_core::{Boid, Frame, Simulation, SimulationConfig, Vector2D, FRAME_MEMORY};
use murmur_shared::{BoidState, Command, FrameSnapshot, SimulationSettings, StatusResponse, Vec2Data};

#[derive(Parser, Debug)]
#[command(author, version, about = "Headless flocking simulation driver", long_about = None)]
struct Args {
    /// Number of ticks to advance
    #[arg(short, long, default_value_t = 60)]
    ticks: u32,

    /// Override the number of boids in the seeding explosion
    #[arg(short, long)]
    boids: Option<usize>,

    /// Wind direction in radians (meteorological: where it blows from)
    #[arg(long)]
    wind: Option<f64>,

    /// Tick at which the wind starts
    #[arg(long, default_value_t = 0)]
    wind_at: u32,

    /// Tick at which to startle the flock
    #[arg(long)]
    startle_at: Option<u32>,

    /// Insert a boid at "x,y" before the run starts
    #[arg(long)]
    insert: Option<String>,

    /// Rewind this many steps through the remembered frames after the run
    #[arg(long, default_value_t = 0)]
    rewind: u32,

    /// Run commands from a script instead of the tick loop: one JSON
    /// command per line (e.g. {"SetWind":{"theta":0.0}} or "Tick")
    #[arg(long, conflicts_with_all = ["ticks", "wind", "startle_at"])]
    script: Option<String>,

    /// Emit every frame as a JSON line on stdout
    #[arg(short, long)]
    frames: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

/// Parses an "x,y" coordinate pair.
fn parse_point(raw: &str) -> Result<Vector2D> {
    let (x, y) = raw
        .split_once(',')
        .context("expected a coordinate pair like \"320,240\"")?;
    let x: f64 = x.trim().parse().context("x coordinate is not a number")?;
    let y: f64 = y.trim().parse().context("y coordinate is not a number")?;
    Ok(Vector2D::new(x, y))
}

fn snapshot(frame: &Frame) -> FrameSnapshot {
    FrameSnapshot {
        boids: frame
            .iter()
            .map(|boid| BoidState {
                position: Vec2Data::new(boid.position.x, boid.position.y),
                velocity: Vec2Data::new(boid.velocity.x, boid.velocity.y),
            })
            .collect(),
    }
}

fn settings(config: &SimulationConfig) -> SimulationSettings {
    SimulationSettings {
        width: config.width,
        height: config.height,
        num_boids: config.num_boids,
        frame_memory: FRAME_MEMORY,
        desired_separation: config.desired_separation,
        neighbour_dist: config.neighbour_dist,
        max_speed: config.max_speed,
        max_force: config.max_force,
        wind_strength: config.wind_strength,
        startle_strength: config.startle_strength,
    }
}

struct Driver {
    simulation: Simulation,
    args: Args,
}

impl Driver {
    fn new(args: Args) -> Result<Self> {
        let config = SimulationConfig {
            num_boids: args.boids.unwrap_or(SimulationConfig::default().num_boids),
            ..SimulationConfig::default()
        };
        let mut simulation = Simulation::new(config);

        if let Some(raw) = &args.insert {
            let position = parse_point(raw).context("invalid --insert")?;
            simulation.insert_boid(Boid::new(position, Vector2D::random_direction(1.0)))?;
        }

        Ok(Self { simulation, args })
    }

    fn apply(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Tick => {
                self.simulation.tick()?;
                self.emit_frame()?;
            }
            Command::ResetToEarliest => self.simulation.reset_to_earliest()?,
            Command::SetWind { theta } => self.simulation.set_wind(theta),
            Command::TriggerStartle => self.simulation.trigger_startle(),
            Command::Insert { position, velocity } => self.simulation.insert_boid(Boid::new(
                Vector2D::new(position.x, position.y),
                Vector2D::new(velocity.x, velocity.y),
            ))?,
            Command::Explosion { count } => self.simulation.explosion(count),
        }
        Ok(())
    }

    fn emit_frame(&self) -> Result<()> {
        if self.args.frames {
            let frame = self.simulation.current_frame()?;
            println!("{}", serde_json::to_string(&snapshot(frame))?);
        }
        Ok(())
    }

    fn run_script(&mut self, script: &str) -> Result<()> {
        for (number, line) in script.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let command: Command = serde_json::from_str(line)
                .with_context(|| format!("invalid command on script line {}", number + 1))?;
            log::debug!("applying {:?}", command);
            self.apply(command)?;
        }
        Ok(())
    }

    fn run_ticks(&mut self) -> Result<()> {
        log::info!("Advancing {} ticks...", self.args.ticks);

        for tick in 0..self.args.ticks {
            if let Some(theta) = self.args.wind {
                if tick == self.args.wind_at {
                    self.simulation.set_wind(theta);
                }
            }
            if self.args.startle_at == Some(tick) {
                self.simulation.trigger_startle();
            }

            self.simulation.tick()?;
            self.emit_frame()?;
        }
        Ok(())
    }

    fn run(&mut self) -> Result<()> {
        if self.args.frames {
            println!("{}", serde_json::to_string(&settings(self.simulation.config()))?);
        }

        match self.args.script.clone() {
            Some(path) => {
                let script = std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read script {path}"))?;
                self.run_script(&script)?;
            }
            None => self.run_ticks()?,
        }

        for _ in 0..self.args.rewind {
            self.simulation.reset_to_earliest()?;
        }

        let status = StatusResponse {
            boid_count: self.simulation.current_frame()?.len(),
            frame_count: self.simulation.history().len(),
            wind_active: self.simulation.wind().is_some(),
        };
        println!("{}", serde_json::to_string(&status)?);

        Ok(())
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging
    if args.debug {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Debug)
            .init();
    } else {
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();
    }

    log::info!("Murmur starting...");

    let mut driver = Driver::new(args).context("Failed to initialize simulation")?;
    driver.run().context("Simulation error")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point() {
        let point = parse_point("320,240").unwrap();
        assert_eq!(point, Vector2D::new(320.0, 240.0));

        let point = parse_point(" 10.5 , -3 ").unwrap();
        assert_eq!(point, Vector2D::new(10.5, -3.0));

        assert!(parse_point("320").is_err());
        assert!(parse_point("a,b").is_err());
    }

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["murmur"]);
        assert_eq!(args.ticks, 60);
        assert!(args.boids.is_none());
        assert!(!args.frames);
    }

    #[test]
    fn test_snapshot_preserves_order_and_values() {
        let frame: Frame = vec![
            Boid::new(Vector2D::new(1.0, 2.0), Vector2D::new(0.1, 0.2)),
            Boid::new(Vector2D::new(3.0, 4.0), Vector2D::new(0.3, 0.4)),
        ];
        let snap = snapshot(&frame);
        assert_eq!(snap.boids.len(), 2);
        assert_eq!(snap.boids[0].position, Vec2Data::new(1.0, 2.0));
        assert_eq!(snap.boids[1].velocity, Vec2Data::new(0.3, 0.4));
    }

    #[test]
    fn test_driver_runs_to_completion() {
        let args = Args::parse_from(["murmur", "--ticks", "3", "--boids", "8", "--rewind", "1"]);
        let mut driver = Driver::new(args).unwrap();
        driver.run().unwrap();
        assert_eq!(driver.simulation.current_frame().unwrap().len(), 8);
        // seed frame + 3 ticks + 1 rewind push
        assert_eq!(driver.simulation.history().len(), 5);
    }

    #[test]
    fn test_script_commands_drive_the_simulation() {
        let args = Args::parse_from(["murmur", "--boids", "4"]);
        let mut driver = Driver::new(args).unwrap();

        let script = r#"
            {"SetWind":{"theta":0.0}}
            "Tick"
            {"Insert":{"position":{"x":10.0,"y":10.0},"velocity":{"x":1.0,"y":0.0}}}
            "Tick"
        "#;
        driver.run_script(script).unwrap();

        assert_eq!(driver.simulation.current_frame().unwrap().len(), 5);
        assert!(driver.simulation.wind().is_some());
        // seed + 2 ticks + 1 insertion push
        assert_eq!(driver.simulation.history().len(), 4);
    }

    #[test]
    fn test_script_rejects_garbage() {
        let args = Args::parse_from(["murmur"]);
        let mut driver = Driver::new(args).unwrap();
        assert!(driver.run_script("not json").is_err());
    }
}
