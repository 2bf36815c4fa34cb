//! Sound toggle
//!
//! Purely visual: the page has no audio, the toggle only flips its muted
//! look.

/// Muted state of the dock's sound button
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SoundToggle {
    muted: bool,
}

impl SoundToggle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Flip the muted state and return the new one
    pub fn toggle(&mut self) -> bool {
        self.muted = !self.muted;
        self.muted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut sound = SoundToggle::new();
        assert!(!sound.is_muted());
        assert!(sound.toggle());
        assert!(!sound.toggle());
    }
}
