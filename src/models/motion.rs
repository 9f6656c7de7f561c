use serde::{Deserialize, Serialize};

/// Timing curve for a CSS transition
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub enum Easing {
    Linear,
    EaseOut,
    CubicBezier(f64, f64, f64, f64),
}

/// The long-tail deceleration curve used by most reveals on the site.
pub const EXPO_OUT: Easing = Easing::CubicBezier(0.19, 1.0, 0.22, 1.0);

impl Easing {
    pub fn css(&self) -> String {
        match self {
            Easing::Linear => "linear".into(),
            Easing::EaseOut => "ease-out".into(),
            Easing::CubicBezier(x1, y1, x2, y2) => {
                format!("cubic-bezier({x1}, {y1}, {x2}, {y2})")
            }
        }
    }
}

/// Errors raised while building motion primitives
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum MotionError {
    #[error("Range needs at least two stops, got {0}")]
    TooFewStops(usize),
    #[error("Input and output stop counts differ: {input} vs {output}")]
    StopCountMismatch { input: usize, output: usize },
    #[error("Input stops must be strictly increasing (at index {0})")]
    NonIncreasingInput(usize),
    #[error("Spring parameter out of range: {0}")]
    InvalidSpring(&'static str),
}

/// One-shot entry animation: fade in while sliding up by `distance` pixels.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct RevealConfig {
    /// Seconds
    pub duration: f64,
    /// Seconds
    pub delay: f64,
    pub easing: Easing,
    /// Vertical travel in pixels; zero means opacity only
    pub distance: f64,
}

impl RevealConfig {
    /// Home page section reveal
    pub const fn settle() -> Self {
        Self {
            duration: 0.9,
            delay: 0.0,
            easing: EXPO_OUT,
            distance: 40.0,
        }
    }

    /// Studio page section reveal
    pub const fn gentle() -> Self {
        Self {
            duration: 0.8,
            delay: 0.0,
            easing: Easing::EaseOut,
            distance: 30.0,
        }
    }

    /// Quote blocks
    pub const fn fade() -> Self {
        Self {
            duration: 1.5,
            delay: 0.0,
            easing: Easing::EaseOut,
            distance: 0.0,
        }
    }

    /// Kinetic works grid
    pub const fn slide_up() -> Self {
        Self {
            duration: 0.8,
            delay: 0.0,
            easing: Easing::EaseOut,
            distance: 100.0,
        }
    }

    /// Project card entry
    pub const fn card(distance: f64, delay: f64) -> Self {
        Self {
            duration: 0.8,
            delay,
            easing: Easing::EaseOut,
            distance,
        }
    }

    pub const fn with_delay(self, delay: f64) -> Self {
        Self { delay, ..self }
    }

    pub fn transition_css(&self) -> String {
        let ease = self.easing.css();
        format!(
            "opacity {d}s {ease} {delay}s, transform {d}s {ease} {delay}s",
            d = self.duration,
            delay = self.delay,
        )
    }

    /// Inline style for the element in the given state.
    pub fn style(&self, revealed: bool) -> String {
        let (opacity, offset) = if revealed {
            (1.0, 0.0)
        } else {
            (0.0, self.distance)
        };
        format!(
            "opacity: {opacity}; transform: translateY({offset}px); transition: {};",
            self.transition_css()
        )
    }
}

/// Scale-on-hover for card imagery
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct HoverConfig {
    pub scale: f64,
    pub duration: f64,
    pub easing: Easing,
}

impl HoverConfig {
    pub const fn new(scale: f64, duration: f64) -> Self {
        Self {
            scale,
            duration,
            easing: EXPO_OUT,
        }
    }

    pub fn style(&self, hovered: bool) -> String {
        let scale = if hovered { self.scale } else { 1.0 };
        format!(
            "transform: scale({scale}); transition: transform {}s {};",
            self.duration,
            self.easing.css()
        )
    }
}

/// Damped spring parameters
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f64,
    pub damping: f64,
    pub mass: f64,
}

impl SpringConfig {
    pub fn new(stiffness: f64, damping: f64, mass: f64) -> Result<Self, MotionError> {
        if !(stiffness.is_finite() && stiffness > 0.0) {
            return Err(MotionError::InvalidSpring("stiffness must be positive"));
        }
        if !(damping.is_finite() && damping >= 0.0) {
            return Err(MotionError::InvalidSpring("damping must be non-negative"));
        }
        if !(mass.is_finite() && mass > 0.0) {
            return Err(MotionError::InvalidSpring("mass must be positive"));
        }
        Ok(Self {
            stiffness,
            damping,
            mass,
        })
    }

    /// The pointer follower's spring
    pub const fn follower() -> Self {
        Self {
            stiffness: 200.0,
            damping: 25.0,
            mass: 0.5,
        }
    }
}

/// Looping keyframe animation rendered as a CSS `@keyframes` block.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LoopConfig {
    pub name: &'static str,
    /// Seconds per cycle
    pub duration: f64,
    pub easing: Easing,
    /// (percent, transform) pairs
    pub frames: Vec<(u8, String)>,
}

impl LoopConfig {
    /// Text band sliding left forever
    pub fn marquee() -> Self {
        Self {
            name: "marquee-slide",
            duration: 20.0,
            easing: Easing::Linear,
            frames: vec![
                (0, "translateX(0px)".into()),
                (100, "translateX(-1000px)".into()),
            ],
        }
    }

    /// Vertical bob under "Explore Work"
    pub fn scroll_cue() -> Self {
        Self {
            name: "scroll-cue-bob",
            duration: 2.0,
            easing: Easing::EaseOut,
            frames: vec![
                (0, "translateY(0px)".into()),
                (50, "translateY(10px)".into()),
                (100, "translateY(0px)".into()),
            ],
        }
    }

    pub fn keyframes_css(&self) -> String {
        let body: String = self
            .frames
            .iter()
            .map(|(pct, transform)| format!("{pct}% {{ transform: {transform}; }} "))
            .collect();
        format!("@keyframes {} {{ {body}}}", self.name)
    }

    pub fn animation_css(&self) -> String {
        format!(
            "animation: {} {}s {} infinite;",
            self.name,
            self.duration,
            self.easing.css()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_renders_css_curves() {
        assert_eq!(Easing::Linear.css(), "linear");
        assert_eq!(EXPO_OUT.css(), "cubic-bezier(0.19, 1, 0.22, 1)");
    }

    #[test]
    fn hidden_reveal_is_offset_and_transparent() {
        let cfg = RevealConfig::card(60.0, 0.2);
        let hidden = cfg.style(false);
        assert!(hidden.contains("opacity: 0;"));
        assert!(hidden.contains("translateY(60px)"));
        assert!(hidden.contains("0.8s ease-out 0.2s"));

        let shown = cfg.style(true);
        assert!(shown.contains("opacity: 1;"));
        assert!(shown.contains("translateY(0px)"));
    }

    #[test]
    fn fade_has_no_travel() {
        assert!(RevealConfig::fade().style(false).contains("translateY(0px)"));
    }

    #[test]
    fn zero_distance_changes_opacity_only() {
        let fade = RevealConfig::fade();
        assert_eq!(fade.distance, 0.0);
        assert_eq!(
            fade.style(false).replacen("opacity: 0;", "opacity: 1;", 1),
            fade.style(true)
        );
    }

    #[test]
    fn hover_scales_only_when_hovered() {
        let cfg = HoverConfig::new(1.04, 1.4);
        assert!(cfg.style(false).contains("scale(1)"));
        assert!(cfg.style(true).contains("scale(1.04)"));
    }

    #[test]
    fn spring_rejects_bad_parameters() {
        assert!(SpringConfig::new(200.0, 25.0, 0.5).is_ok());
        assert!(SpringConfig::new(0.0, 25.0, 0.5).is_err());
        assert!(SpringConfig::new(200.0, -1.0, 0.5).is_err());
        assert!(SpringConfig::new(200.0, 25.0, f64::NAN).is_err());
    }

    #[test]
    fn marquee_keyframes() {
        let css = LoopConfig::marquee().keyframes_css();
        assert!(css.starts_with("@keyframes marquee-slide {"));
        assert!(css.contains("100% { transform: translateX(-1000px); }"));
        assert_eq!(
            LoopConfig::marquee().animation_css(),
            "animation: marquee-slide 20s linear infinite;"
        );
    }
}
