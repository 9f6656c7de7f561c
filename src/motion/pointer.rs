//! Pointer follower state: where the dot should be and how big.

use super::spring::{Spring, Spring2};
use crate::models::SpringConfig;

/// Class that marks an element (or any of its ancestors) as interactive.
pub const HOVER_TRIGGER: &str = "hover-trigger";

/// Viewports at or below this width get the stock pointer back.
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0;

/// Rendered diameter of the follower dot.
pub const FOLLOWER_SIZE_PX: f64 = 24.0;

const HOVER_SCALE: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FollowerMode {
    #[default]
    Idle,
    Hovering,
}

impl FollowerMode {
    pub fn scale(self) -> f64 {
        match self {
            FollowerMode::Idle => 1.0,
            FollowerMode::Hovering => HOVER_SCALE,
        }
    }
}

/// Latest pointer reading
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CursorPosition {
    pub x: f64,
    pub y: f64,
    pub hovering: bool,
}

impl CursorPosition {
    pub fn moved_to(self, x: f64, y: f64) -> Self {
        Self { x, y, ..self }
    }

    pub fn with_hover(self, hovering: bool) -> Self {
        Self { hovering, ..self }
    }

    pub fn mode(&self) -> FollowerMode {
        if self.hovering {
            FollowerMode::Hovering
        } else {
            FollowerMode::Idle
        }
    }

    /// Top-left corner that centres the dot on the pointer
    pub fn follower_origin(&self) -> (f64, f64) {
        let half = FOLLOWER_SIZE_PX / 2.0;
        (self.x - half, self.y - half)
    }
}

/// Rendered follower state for one tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FollowerFrame {
    /// Top-left corner of the dot
    pub origin: (f64, f64),
    pub scale: f64,
}

/// Position and scale of the follower, eased by one shared spring config.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FollowerSpring {
    origin: Spring2,
    scale: Spring,
}

impl FollowerSpring {
    pub fn new(config: SpringConfig, at: CursorPosition) -> Self {
        Self {
            origin: Spring2::new(config, at.follower_origin()),
            scale: Spring::new(config, at.mode().scale()),
        }
    }

    pub fn retarget(&mut self, cursor: CursorPosition) {
        self.origin.set_target(cursor.follower_origin());
        self.scale.set_target(cursor.mode().scale());
    }

    pub fn frame(&self) -> FollowerFrame {
        FollowerFrame {
            origin: self.origin.value(),
            scale: self.scale.value(),
        }
    }

    pub fn is_at_rest(&self) -> bool {
        self.origin.is_at_rest() && self.scale.is_at_rest()
    }

    /// Advance by `dt` seconds. Returns the new frame and whether the motion
    /// has settled; a settled frame sits exactly on the target.
    pub fn advance(&mut self, dt: f64) -> (FollowerFrame, bool) {
        self.origin.step(dt);
        self.scale.step(dt);
        let settled = self.is_at_rest();
        if settled {
            // a zero step snaps a resting spring onto its target
            self.origin.step(0.0);
            self.scale.step(0.0);
        }
        (self.frame(), settled)
    }
}

/// True when any class list in the chain, starting at the event target and
/// walking up through its ancestors, contains `marker`.
pub fn chain_has_marker<'a, I>(class_lists: I, marker: &str) -> bool
where
    I: IntoIterator<Item = &'a str>,
{
    class_lists
        .into_iter()
        .any(|classes| classes.split_ascii_whitespace().any(|c| c == marker))
}

/// Whether the follower should be shown at this viewport width
pub fn follower_enabled(viewport_width: f64) -> bool {
    viewport_width > MOBILE_BREAKPOINT_PX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hover_triples_the_dot() {
        let pos = CursorPosition::default();
        assert_eq!(pos.mode().scale(), 1.0);
        assert_eq!(pos.with_hover(true).mode().scale(), 3.0);
        assert_eq!(pos.with_hover(true).with_hover(false).mode(), FollowerMode::Idle);
    }

    #[test]
    fn origin_centres_dot() {
        let pos = CursorPosition::default().moved_to(100.0, 40.0);
        assert_eq!(pos.follower_origin(), (88.0, 28.0));
    }

    #[test]
    fn moving_keeps_hover_flag() {
        let pos = CursorPosition::default().with_hover(true).moved_to(1.0, 2.0);
        assert!(pos.hovering);
    }

    #[test]
    fn marker_matches_any_ancestor() {
        let chain = ["text-4xl", "relative overflow-hidden", "group hover-trigger cursor-pointer"];
        assert!(chain_has_marker(chain, HOVER_TRIGGER));
        assert!(!chain_has_marker(["text-4xl", "hover-triggered"], HOVER_TRIGGER));
        assert!(!chain_has_marker(std::iter::empty(), HOVER_TRIGGER));
    }

    #[test]
    fn follower_eases_position_and_scale_together() {
        let start = CursorPosition::default().moved_to(100.0, 100.0);
        let mut follower = FollowerSpring::new(SpringConfig::follower(), start);
        assert_eq!(follower.frame().scale, 1.0);
        assert!(follower.is_at_rest());

        let target = start.moved_to(300.0, 100.0).with_hover(true);
        follower.retarget(target);
        let (frame, settled) = follower.advance(0.016);
        assert!(!settled);
        assert!(frame.scale > 1.0 && frame.scale < 3.0, "scale {}", frame.scale);
        assert!(frame.origin.0 > 88.0 && frame.origin.0 < 288.0, "x {}", frame.origin.0);
        assert_eq!(frame.origin.1, 88.0);
    }

    #[test]
    fn follower_settles_on_target_and_stays() {
        let mut follower = FollowerSpring::new(SpringConfig::follower(), CursorPosition::default());
        let target = CursorPosition::default().moved_to(500.0, 240.0).with_hover(true);
        follower.retarget(target);

        let ticks = (1..=200)
            .find(|_| follower.advance(0.016).1)
            .expect("follower never settled");
        assert!(ticks < 120, "took {ticks} ticks");

        let expected = FollowerFrame {
            origin: target.follower_origin(),
            scale: 3.0,
        };
        assert_eq!(follower.frame(), expected);
        assert_eq!(follower.advance(0.016), (expected, true));
    }

    #[test]
    fn breakpoint_hides_follower() {
        assert!(!follower_enabled(375.0));
        assert!(!follower_enabled(768.0));
        assert!(follower_enabled(769.0));
        assert!(follower_enabled(1440.0));
    }
}
