//! 2D vector algebra for positions, velocities and steering forces.

/// An immutable 2D vector. Every operation returns a new value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector2D {
    pub x: f64,
    pub y: f64,
}

impl Vector2D {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Builds the vector `(r cos theta, r sin theta)`.
    pub fn from_polar(r: f64, theta: f64) -> Self {
        #[cfg(feature = "std")]
        {
            Self::new(r * theta.cos(), r * theta.sin())
        }
        #[cfg(not(feature = "std"))]
        {
            Self::new(r * libm::cos(theta), r * libm::sin(theta))
        }
    }

    /// A vector of the given magnitude pointing in a uniformly random
    /// direction (angle in `[0, 2*pi)`).
    #[cfg(feature = "std")]
    pub fn random_direction(magnitude: f64) -> Self {
        use rand::Rng;
        let theta = rand::thread_rng().gen_range(0.0..core::f64::consts::TAU);
        Self::from_polar(magnitude, theta)
    }

    pub fn magnitude(&self) -> f64 {
        #[cfg(feature = "std")]
        {
            (self.x * self.x + self.y * self.y).sqrt()
        }
        #[cfg(not(feature = "std"))]
        {
            libm::sqrt(self.x * self.x + self.y * self.y)
        }
    }

    /// Unit vector in the same direction. The zero vector normalizes to
    /// itself, so callers summing over empty neighbour sets stay total.
    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag > 0.0 {
            Self {
                x: self.x / mag,
                y: self.y / mag,
            }
        } else {
            Self::zero()
        }
    }

    /// Rescales to exactly `max` if the magnitude exceeds it, otherwise
    /// returns the vector unchanged.
    pub fn limit(&self, max: f64) -> Self {
        let mag = self.magnitude();
        if mag > max {
            self.normalize() * max
        } else {
            *self
        }
    }

    pub fn distance(&self, other: &Vector2D) -> f64 {
        (*self - *other).magnitude()
    }
}

impl core::ops::Add for Vector2D {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl core::ops::Sub for Vector2D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }
}

impl core::ops::Mul<f64> for Vector2D {
    type Output = Self;

    fn mul(self, scalar: f64) -> Self {
        Self {
            x: self.x * scalar,
            y: self.y * scalar,
        }
    }
}

impl core::ops::Div<f64> for Vector2D {
    type Output = Self;

    fn div(self, scalar: f64) -> Self {
        Self {
            x: self.x / scalar,
            y: self.y / scalar,
        }
    }
}

impl core::ops::AddAssign for Vector2D {
    fn add_assign(&mut self, other: Self) {
        self.x += other.x;
        self.y += other.y;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_magnitude() {
        let v = Vector2D::new(3.0, 4.0);
        assert_eq!(v.magnitude(), 5.0);
    }

    #[test]
    fn test_normalize() {
        let v = Vector2D::new(3.0, 4.0);
        let normalized = v.normalize();
        assert!((normalized.magnitude() - 1.0).abs() < 1e-12);
        assert!((normalized.x - 0.6).abs() < 1e-12);
        assert!((normalized.y - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_normalize_zero_vector_is_zero() {
        assert_eq!(Vector2D::zero().normalize(), Vector2D::zero());
    }

    #[test]
    fn test_limit_caps_magnitude() {
        let v = Vector2D::new(3.0, 4.0);
        let limited = v.limit(1.0);
        assert!((limited.magnitude() - 1.0).abs() < 1e-12);
        // Direction is preserved
        assert!((limited.y / limited.x - 4.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_limit_leaves_small_vectors_alone() {
        let v = Vector2D::new(0.3, 0.4);
        assert_eq!(v.limit(1.0), v);
    }

    #[test]
    fn test_from_polar() {
        let v = Vector2D::from_polar(2.0, 0.0);
        assert!((v.x - 2.0).abs() < 1e-12);
        assert!(v.y.abs() < 1e-12);

        let v = Vector2D::from_polar(2.0, core::f64::consts::FRAC_PI_2);
        assert!(v.x.abs() < 1e-12);
        assert!((v.y - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_random_direction_has_requested_magnitude() {
        for _ in 0..32 {
            let v = Vector2D::random_direction(1.0);
            assert!((v.magnitude() - 1.0).abs() < 1e-9);
        }
    }

    #[test]
    fn test_operators() {
        let v1 = Vector2D::new(1.0, 2.0);
        let v2 = Vector2D::new(3.0, 4.0);

        assert_eq!(v1 + v2, Vector2D::new(4.0, 6.0));
        assert_eq!(v2 - v1, Vector2D::new(2.0, 2.0));
        assert_eq!(v1 * 2.0, Vector2D::new(2.0, 4.0));
        assert_eq!(v2 / 2.0, Vector2D::new(1.5, 2.0));

        let mut sum = v1;
        sum += v2;
        assert_eq!(sum, Vector2D::new(4.0, 6.0));
    }

    #[test]
    fn test_distance() {
        let p1 = Vector2D::new(0.0, 0.0);
        let p2 = Vector2D::new(3.0, 4.0);
        assert_eq!(p1.distance(&p2), 5.0);
    }
}
