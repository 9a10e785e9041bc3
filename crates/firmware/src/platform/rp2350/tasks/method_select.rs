//! Lighthouse Method Select Task
//!
//! Embassy task that keeps the lighthouse estimator method in line with the
//! number of visible base stations.
//!
//! ## Responsibilities
//!
//! - Resolve `lighthouse.method` and `lighthouse.bsActive` once (fatal if missing)
//! - Every 16 ms: read the active map, select and write the method
//! - Log method changes

use crate::core::stores::{LOGS, PARAMS};
use crate::subsystems::lighthouse::{run_iteration, start_selector};
use embassy_time::{Duration, Ticker};
use lighthouse_select_core::scheduler::METHOD_SELECT_TASK;

/// Lighthouse method select task (16 ms period)
///
/// The lighthouse driver must have registered its entries in the global
/// stores before this task is spawned.
///
/// # Example
///
/// ```rust,ignore
/// #[embassy_executor::main]
/// async fn main(spawner: Spawner) {
///     register_lighthouse_entries(&PARAMS, &LOGS).unwrap();
///     spawner.spawn(method_select_task()).unwrap();
/// }
/// ```
#[embassy_executor::task]
pub async fn method_select_task() {
    crate::log_info!(
        "Task '{}' started: period={}ms rate={}Hz priority={}",
        METHOD_SELECT_TASK.name,
        METHOD_SELECT_TASK.period_ms,
        METHOD_SELECT_TASK.rate_hz(),
        METHOD_SELECT_TASK.priority
    );

    let mut selector = start_selector(&PARAMS, &LOGS);
    let mut ticker = Ticker::every(Duration::from_millis(METHOD_SELECT_TASK.period_ms));

    loop {
        run_iteration(&mut selector);

        ticker.next().await;
    }
}
