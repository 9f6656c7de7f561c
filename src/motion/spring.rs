use crate::models::SpringConfig;

/// Largest step fed to the integrator; longer frames are subdivided.
const MAX_STEP_SECS: f64 = 1.0 / 120.0;

/// Longest frame the integrator will simulate; stalls beyond this are dropped.
const MAX_FRAME_SECS: f64 = 0.25;

/// Distance and speed below which the spring snaps to rest.
const REST_DELTA: f64 = 0.01;

/// One-dimensional damped spring chasing a target value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring {
    config: SpringConfig,
    value: f64,
    velocity: f64,
    target: f64,
}

impl Spring {
    pub fn new(config: SpringConfig, initial: f64) -> Self {
        Self {
            config,
            value: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    pub fn is_at_rest(&self) -> bool {
        (self.target - self.value).abs() < REST_DELTA && self.velocity.abs() < REST_DELTA
    }

    /// Advance by `dt` seconds (semi-implicit Euler).
    pub fn step(&mut self, dt: f64) -> f64 {
        if self.is_at_rest() {
            self.value = self.target;
            self.velocity = 0.0;
            return self.value;
        }

        let mut remaining = dt.clamp(0.0, MAX_FRAME_SECS);
        while remaining > 0.0 {
            let h = remaining.min(MAX_STEP_SECS);
            let SpringConfig {
                stiffness,
                damping,
                mass,
            } = self.config;
            let force = -stiffness * (self.value - self.target) - damping * self.velocity;
            self.velocity += force / mass * h;
            self.value += self.velocity * h;
            remaining -= h;
        }
        self.value
    }
}

/// Pair of springs for a 2D point
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spring2 {
    pub x: Spring,
    pub y: Spring,
}

impl Spring2 {
    pub fn new(config: SpringConfig, initial: (f64, f64)) -> Self {
        Self {
            x: Spring::new(config, initial.0),
            y: Spring::new(config, initial.1),
        }
    }

    pub fn set_target(&mut self, target: (f64, f64)) {
        self.x.set_target(target.0);
        self.y.set_target(target.1);
    }

    pub fn step(&mut self, dt: f64) -> (f64, f64) {
        (self.x.step(dt), self.y.step(dt))
    }

    pub fn value(&self) -> (f64, f64) {
        (self.x.value(), self.y.value())
    }

    pub fn is_at_rest(&self) -> bool {
        self.x.is_at_rest() && self.y.is_at_rest()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settles_on_target() {
        let mut s = Spring::new(SpringConfig::follower(), 0.0);
        s.set_target(100.0);
        for _ in 0..240 {
            s.step(1.0 / 60.0);
        }
        assert!((s.value() - 100.0).abs() < 0.05, "value {}", s.value());
    }

    #[test]
    fn eases_instead_of_snapping() {
        let mut s = Spring::new(SpringConfig::follower(), 0.0);
        s.set_target(100.0);
        let first = s.step(1.0 / 60.0);
        assert!(first > 0.0 && first < 50.0, "first frame jumped to {first}");
    }

    #[test]
    fn rest_is_stable() {
        let mut s = Spring::new(SpringConfig::follower(), 42.0);
        assert!(s.is_at_rest());
        assert_eq!(s.step(1.0), 42.0);
    }

    #[test]
    fn long_frame_is_capped() {
        let mut stalled = Spring::new(SpringConfig::follower(), 0.0);
        stalled.set_target(10.0);
        let mut capped = stalled;

        let v = stalled.step(2.0);
        assert!(v.is_finite());
        assert!(v > 0.0 && v < 10.0, "value {v}");
        assert_eq!(v, capped.step(0.25));
    }

    #[test]
    fn unbounded_frames_return() {
        let mut s = Spring::new(SpringConfig::follower(), 0.0);
        s.set_target(10.0);
        assert!(s.step(f64::INFINITY).is_finite());

        let mut s = Spring::new(SpringConfig::follower(), 0.0);
        s.set_target(10.0);
        assert_eq!(s.step(f64::NAN), 0.0);
    }

    #[test]
    fn two_axes_move_independently() {
        let mut p = Spring2::new(SpringConfig::follower(), (0.0, 0.0));
        p.set_target((50.0, 0.0));
        let (x, y) = p.step(1.0 / 60.0);
        assert!(x > 0.0);
        assert_eq!(y, 0.0);
    }
}
