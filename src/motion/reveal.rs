#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

/// One-shot latch: the first intersection reveals, nothing ever hides again.
#[derive(Debug, Clone, Copy, Default)]
pub struct RevealLatch {
    state: RevealState,
}

impl RevealLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_revealed(&self) -> bool {
        self.state == RevealState::Revealed
    }

    /// Feed an intersection report. Returns true only on the transition.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        match (self.state, intersecting) {
            (RevealState::Hidden, true) => {
                self.state = RevealState::Revealed;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_hidden() {
        assert!(!RevealLatch::new().is_revealed());
    }

    #[test]
    fn reveals_once_and_never_hides() {
        let mut latch = RevealLatch::new();
        assert!(!latch.observe(false));
        assert!(latch.observe(true));

        let mut fired = 0;
        for intersecting in [false, true, false, true, true] {
            if latch.observe(intersecting) {
                fired += 1;
            }
        }
        assert_eq!(fired, 0);
        assert!(latch.is_revealed());
    }
}
