//! Steering rules: separation, alignment, cohesion and their composition.
//!
//! Each rule takes the acting boid plus an iterator over candidate
//! neighbours (typically the whole current frame) and returns an
//! acceleration. Nothing here mutates the caller; the composed force is
//! applied later through [`Boid::update`].

use crate::boid::Boid;
use crate::config::SimulationConfig;
use crate::vector::Vector2D;

/// Neighbours whose distance to `boid` is strictly between 0 and `dist`.
/// The lower bound excludes the boid itself (and any exact co-location);
/// the upper bound is exclusive.
pub fn within<'a, I>(boid: &Boid, others: I, dist: f64) -> impl Iterator<Item = &'a Boid>
where
    I: Iterator<Item = &'a Boid>,
{
    let origin = boid.position;
    others.filter(move |other| {
        let d = origin.distance(&other.position);
        d > 0.0 && d < dist
    })
}

/// Steer away from neighbours inside `desired_separation`, weighting closer
/// neighbours more strongly.
///
/// The result is `normalize(sum) * max_speed - velocity` over the raw sum of
/// inverse-distance-weighted offsets. It is intentionally not force-limited
/// here; the cap is applied once when the rules are composed in [`flock`].
pub fn separation<'a, I>(boid: &Boid, others: I, config: &SimulationConfig) -> Vector2D
where
    I: Iterator<Item = &'a Boid>,
{
    let mut sum = Vector2D::zero();
    let mut count = 0;

    for other in within(boid, others, config.desired_separation) {
        let d = boid.position.distance(&other.position);
        sum += (boid.position - other.position).normalize() / d;
        count += 1;
    }

    if count == 0 {
        return Vector2D::zero();
    }
    sum.normalize() * config.max_speed - boid.velocity
}

/// Match the average heading of neighbours inside `neighbour_dist`.
///
/// The subtrahend is the boid's velocity limited to `max_force`, not the
/// final steer. Unusual, but it is this simulation's defining update rule;
/// the force cap on the composite comes from [`flock`].
pub fn alignment<'a, I>(boid: &Boid, others: I, config: &SimulationConfig) -> Vector2D
where
    I: Iterator<Item = &'a Boid>,
{
    let mut sum = Vector2D::zero();
    let mut count = 0;

    for other in within(boid, others, config.neighbour_dist) {
        sum += other.velocity;
        count += 1;
    }

    if count == 0 {
        return Vector2D::zero();
    }
    (sum / count as f64).normalize() * config.max_speed - boid.velocity.limit(config.max_force)
}

/// Steer toward `target` at full speed, force-limited.
pub fn seek(boid: &Boid, target: Vector2D, config: &SimulationConfig) -> Vector2D {
    let desired = (target - boid.position).normalize() * config.max_speed;
    (desired - boid.velocity).limit(config.max_force)
}

/// Steer toward the mean position of neighbours inside `neighbour_dist`.
pub fn cohesion<'a, I>(boid: &Boid, others: I, config: &SimulationConfig) -> Vector2D
where
    I: Iterator<Item = &'a Boid>,
{
    let mut sum = Vector2D::zero();
    let mut count = 0;

    for other in within(boid, others, config.neighbour_dist) {
        sum += other.position;
        count += 1;
    }

    if count == 0 {
        return Vector2D::zero();
    }
    seek(boid, sum / count as f64, config)
}

/// The composite flocking acceleration: separation + alignment + cohesion,
/// limited to `max_force`.
pub fn flock(boid: &Boid, others: &[Boid], config: &SimulationConfig) -> Vector2D {
    let sep = separation(boid, others.iter(), config);
    let ali = alignment(boid, others.iter(), config);
    let coh = cohesion(boid, others.iter(), config);
    (sep + ali + coh).limit(config.max_force)
}
