//! Lighthouse method selection subsystem
//!
//! Firmware wrapper around `MethodSelector`: a missing parameter or log
//! entry at startup is fatal, and every method change is logged.

use lighthouse_select_core::lighthouse::{MethodSelector, Transition};
use lighthouse_select_core::traits::{LogAccess, ParamAccess};

/// Build the selector or halt
///
/// # Panics
///
/// Panics when the `lighthouse.method` parameter or the `lighthouse.bsActive`
/// log variable is not registered. The panic handler stops the firmware
/// before the selector loop starts.
pub fn start_selector<'a, P, L>(params: &'a P, logs: &'a L) -> MethodSelector<'a, P, L>
where
    P: ParamAccess + ?Sized,
    L: LogAccess + ?Sized,
{
    match MethodSelector::new(params, logs) {
        Ok(selector) => {
            crate::log_info!("APP: Lighthouse method selector started");
            selector
        }
        Err(e) => {
            crate::log_error!("{}", e.describe());
            panic!("lighthouse method selector startup failed");
        }
    }
}

/// Run one selector iteration and log a method change
pub fn run_iteration<P, L>(selector: &mut MethodSelector<'_, P, L>) -> Option<Transition>
where
    P: ParamAccess + ?Sized,
    L: LogAccess + ?Sized,
{
    let transition = selector.step();
    if let Some(t) = &transition {
        crate::log_info!("APP: Switching to {}", t.to.describe());
        crate::log_debug!("APP: {} base stations active", t.active);
    }
    transition
}
