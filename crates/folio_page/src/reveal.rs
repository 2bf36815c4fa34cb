//! Scroll reveal
//!
//! Elements fade in the first time enough of them scrolls into view. Once
//! revealed an element is no longer observed, so reveals happen at most
//! once per element.

use folio_platform::{ObserverKind, VisibilityEvent};
use rustc_hash::FxHashSet;

/// Tracks which observed elements are still waiting to be revealed
#[derive(Clone, Debug)]
pub struct RevealTracker {
    threshold: f32,
    watching: FxHashSet<usize>,
    revealed: usize,
}

impl RevealTracker {
    /// Watch elements `0..count`, revealing each once `threshold` of it is
    /// visible
    pub fn new(count: usize, threshold: f32) -> Self {
        Self {
            threshold,
            watching: (0..count).collect(),
            revealed: 0,
        }
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn is_watching(&self, index: usize) -> bool {
        self.watching.contains(&index)
    }

    /// Elements still waiting
    pub fn pending(&self) -> usize {
        self.watching.len()
    }

    /// Elements revealed so far
    pub fn revealed(&self) -> usize {
        self.revealed
    }

    /// Handle a visibility change
    ///
    /// Returns the element index if this change reveals it.
    pub fn handle(&mut self, event: &VisibilityEvent) -> Option<usize> {
        if event.observer != ObserverKind::Reveal
            || !event.intersecting
            || event.ratio < self.threshold
        {
            return None;
        }
        if !self.watching.remove(&event.index) {
            return None;
        }
        self.revealed += 1;
        tracing::trace!("RevealTracker: revealed {}", event.index);
        Some(event.index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seen(index: usize, ratio: f32) -> VisibilityEvent {
        VisibilityEvent {
            observer: ObserverKind::Reveal,
            index,
            id: None,
            intersecting: ratio > 0.0,
            ratio,
        }
    }

    #[test]
    fn test_reveals_once_above_threshold() {
        let mut reveal = RevealTracker::new(3, 0.18);

        assert_eq!(reveal.handle(&seen(1, 0.1)), None);
        assert_eq!(reveal.handle(&seen(1, 0.18)), Some(1));
        assert_eq!(reveal.handle(&seen(1, 0.9)), None);
        assert!(!reveal.is_watching(1));
        assert_eq!(reveal.pending(), 2);
        assert_eq!(reveal.revealed(), 1);
    }

    #[test]
    fn test_ignores_other_observers_and_unknown_elements() {
        let mut reveal = RevealTracker::new(2, 0.18);
        let mut section = seen(0, 1.0);
        section.observer = ObserverKind::Section;

        assert_eq!(reveal.handle(&section), None);
        assert_eq!(reveal.handle(&seen(7, 1.0)), None);
        assert_eq!(reveal.pending(), 2);
    }
}
