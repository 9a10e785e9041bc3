//! Synchronized state abstraction for platform-agnostic state access.
//!
//! This module provides the `SharedState` trait that abstracts over different
//! synchronization mechanisms (Embassy Mutex in firmware, RefCell for tests).

/// Platform-agnostic synchronized state access.
///
/// Implementations:
/// - `EmbassyState<T>` (firmware crate) using Embassy's critical-section Mutex
/// - `MockState<T>` for host testing using RefCell (single-threaded)
///
/// Closures must not block or await; the firmware implementation runs them
/// inside a critical section.
pub trait SharedState<T> {
    /// Access state immutably.
    fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R;

    /// Access state mutably.
    fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R;
}

/// Mock synchronized state using RefCell for single-threaded testing.
///
/// # Panics
///
/// Panics if borrowing rules are violated (e.g., calling `with_mut` while
/// `with` is active). This indicates a bug in the test code.
///
/// # Example
///
/// ```
/// use lighthouse_select_core::traits::{MockState, SharedState};
///
/// let state = MockState::new(42u32);
/// assert_eq!(state.with(|v| *v), 42);
///
/// state.with_mut(|v| *v += 1);
/// assert_eq!(state.with(|v| *v), 43);
/// ```
pub struct MockState<T> {
    inner: core::cell::RefCell<T>,
}

impl<T> MockState<T> {
    /// Creates a new `MockState` wrapping the given value.
    pub fn new(value: T) -> Self {
        Self {
            inner: core::cell::RefCell::new(value),
        }
    }
}

impl<T> SharedState<T> for MockState<T> {
    fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.inner.borrow())
    }

    fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        f(&mut self.inner.borrow_mut())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_state_with_read() {
        let state = MockState::new(42u32);
        assert_eq!(state.with(|v| *v), 42);
    }

    #[test]
    fn mock_state_with_mut_returns_closure_value() {
        let state = MockState::new(0b0011u32);

        let previous = state.with_mut(|mask| {
            let old = *mask;
            *mask = 0b0100;
            old
        });

        assert_eq!(previous, 0b0011);
        assert_eq!(state.with(|v| *v), 0b0100);
    }

    #[test]
    #[should_panic]
    fn mock_state_double_borrow_panics() {
        let state = MockState::new(0u32);

        state.with(|_v| {
            let _ = state.inner.borrow_mut();
        });
    }
}
