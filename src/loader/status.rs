//! Progress-to-status-message mapping.

/// Message index for `progress` percent over `count` messages:
/// `floor(progress / 100 * count)`, capped at `count - 1`.
#[must_use]
pub fn status_index(progress: f32, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let raw = (progress.clamp(0.0, 100.0) / 100.0 * count as f32).floor();
    (raw as usize).min(count - 1)
}

/// Tracks the displayed status line, advancing only forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusTracker {
    index: usize,
    count: usize,
}

impl StatusTracker {
    /// Tracker showing the first of `count` messages.
    pub fn new(count: usize) -> Self {
        Self { index: 0, count }
    }

    /// Currently displayed index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Re-map `progress`; returns the new index only when it moved forward.
    pub fn advance(&mut self, progress: f32) -> Option<usize> {
        let next = status_index(progress, self.count);
        if next > self.index {
            self.index = next;
            Some(next)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_steps() {
        assert_eq!(status_index(0.0, 4), 0);
        assert_eq!(status_index(24.9, 4), 0);
        assert_eq!(status_index(25.0, 4), 1);
        assert_eq!(status_index(74.0, 4), 2);
        assert_eq!(status_index(99.9, 4), 3);
    }

    #[test]
    fn test_index_never_exceeds_last() {
        assert_eq!(status_index(100.0, 4), 3);
        assert_eq!(status_index(250.0, 4), 3);
        assert_eq!(status_index(50.0, 0), 0);
    }

    #[test]
    fn test_tracker_only_moves_forward() {
        let mut tracker = StatusTracker::new(4);
        assert_eq!(tracker.advance(10.0), None);
        assert_eq!(tracker.advance(30.0), Some(1));
        assert_eq!(tracker.advance(40.0), None);
        assert_eq!(tracker.advance(5.0), None);
        assert_eq!(tracker.index(), 1);
        assert_eq!(tracker.advance(80.0), Some(3));
    }
}
