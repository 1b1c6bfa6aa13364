//! Single-shot completion signal.

/// A zero-argument notification resolved at most once.
///
/// An optional listener runs on the resolving call; later calls are no-ops.
#[derive(Default)]
pub struct Completion {
    resolved: bool,
    listener: Option<Box<dyn FnOnce()>>,
}

impl Completion {
    /// Unresolved signal with no listener.
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the listener, replacing any previous one.
    ///
    /// Installing after resolution does nothing: the signal has already
    /// been delivered.
    pub fn set_listener(&mut self, listener: impl FnOnce() + 'static) {
        if !self.resolved {
            self.listener = Some(Box::new(listener));
        }
    }

    /// Resolve the signal. Returns `true` only on the first call.
    pub fn resolve(&mut self) -> bool {
        if self.resolved {
            return false;
        }
        self.resolved = true;
        if let Some(listener) = self.listener.take() {
            listener();
        }
        true
    }

    /// Drop the listener without resolving (teardown).
    pub fn discard(&mut self) {
        self.listener = None;
    }

    /// Whether the signal has fired.
    pub fn is_resolved(&self) -> bool {
        self.resolved
    }
}

impl std::fmt::Debug for Completion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Completion")
            .field("resolved", &self.resolved)
            .field("has_listener", &self.listener.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::*;

    #[test]
    fn test_resolves_exactly_once() {
        let calls = Rc::new(Cell::new(0));
        let mut completion = Completion::new();
        let counter = Rc::clone(&calls);
        completion.set_listener(move || counter.set(counter.get() + 1));

        assert!(completion.resolve());
        assert!(!completion.resolve());
        assert!(completion.is_resolved());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_discarded_listener_never_runs() {
        let calls = Rc::new(Cell::new(0));
        let mut completion = Completion::new();
        let counter = Rc::clone(&calls);
        completion.set_listener(move || counter.set(counter.get() + 1));
        completion.discard();

        assert!(completion.resolve());
        assert_eq!(calls.get(), 0);
    }
}
