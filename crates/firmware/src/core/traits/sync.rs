//! Embassy implementation of `SharedState`.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::{raw::CriticalSectionRawMutex, Mutex};
use lighthouse_select_core::traits::SharedState;

/// Store wrapper shared between Embassy tasks
///
/// Backs the global `PARAMS` and `LOGS` stores: the lighthouse driver
/// publishes into them while the method select task resolves handles and
/// writes the method. Every access is one short closure inside a critical
/// section, never held across an `.await`.
pub struct EmbassyState<T> {
    inner: Mutex<CriticalSectionRawMutex, RefCell<T>>,
}

impl<T> EmbassyState<T> {
    /// Wrap a store; `const` so the globals can be statics.
    pub const fn new(value: T) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(value)),
        }
    }
}

impl<T> SharedState<T> for EmbassyState<T> {
    fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        self.inner.lock(|cell| f(&cell.borrow()))
    }

    fn with_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut T) -> R,
    {
        self.inner.lock(|cell| f(&mut cell.borrow_mut()))
    }
}
