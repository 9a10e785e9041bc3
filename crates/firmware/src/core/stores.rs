//! Global parameter and log stores
//!
//! Shared by every task through a critical-section mutex. The lighthouse
//! driver registers its entries here at boot and publishes the active base
//! station map; the method selector resolves both by name.

use lighthouse_select_core::lighthouse::{
    Method, ACTIVE_MAP_LOG, LIGHTHOUSE_GROUP, METHOD_PARAM,
};
use lighthouse_select_core::parameters::{ParamFlags, ParamId, ParameterError, ParameterStore};
use lighthouse_select_core::telemetry::{LogError, LogId, LogStore};
use lighthouse_select_core::traits::SharedState;

use super::traits::EmbassyState;

/// System parameter store
pub static PARAMS: EmbassyState<ParameterStore> = EmbassyState::new(ParameterStore::new());

/// System log variable store
pub static LOGS: EmbassyState<LogStore> = EmbassyState::new(LogStore::new());

/// Error registering the lighthouse driver entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "pico2_w", derive(defmt::Format))]
pub enum RegisterError {
    Param(ParameterError),
    Log(LogError),
}

impl From<ParameterError> for RegisterError {
    fn from(err: ParameterError) -> Self {
        RegisterError::Param(err)
    }
}

impl From<LogError> for RegisterError {
    fn from(err: LogError) -> Self {
        RegisterError::Log(err)
    }
}

impl core::fmt::Display for RegisterError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RegisterError::Param(e) => write!(f, "parameter: {}", e),
            RegisterError::Log(e) => write!(f, "log variable: {}", e),
        }
    }
}

/// Handles owned by the lighthouse driver side
#[derive(Debug, Clone, Copy)]
pub struct LighthouseEntries {
    pub method: ParamId,
    pub active_map: LogId,
}

/// Register `lighthouse.method` and `lighthouse.bsActive`
///
/// The method defaults to `SweepAngle` and the active map to zero.
pub fn register_lighthouse_entries<P, L>(
    params: &P,
    logs: &L,
) -> Result<LighthouseEntries, RegisterError>
where
    P: SharedState<ParameterStore>,
    L: SharedState<LogStore>,
{
    let method = params.with_mut(|store| {
        store.register(
            LIGHTHOUSE_GROUP,
            METHOD_PARAM,
            Method::SweepAngle.param_value(),
            ParamFlags::empty(),
        )
    })?;
    let active_map = logs.with_mut(|store| store.register(LIGHTHOUSE_GROUP, ACTIVE_MAP_LOG))?;

    Ok(LighthouseEntries { method, active_map })
}

/// Publish a new active base station bitmask
pub fn publish_active_map<L>(logs: &L, entries: &LighthouseEntries, mask: u32)
where
    L: SharedState<LogStore>,
{
    // Entries come from `register_lighthouse_entries` on the same store
    let _ = logs.with_mut(|store| store.set_uint(entries.active_map, mask));
}

/// Read back the method parameter, if it holds a known value
pub fn current_method<P>(params: &P, entries: &LighthouseEntries) -> Option<Method>
where
    P: SharedState<ParameterStore>,
{
    params.with(|store| store.get_int(entries.method).and_then(Method::from_param_value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use lighthouse_select_core::traits::MockState;

    #[test]
    fn test_register_defaults() {
        let params = MockState::new(ParameterStore::new());
        let logs = MockState::new(LogStore::new());

        let entries = register_lighthouse_entries(&params, &logs).unwrap();

        assert_eq!(current_method(&params, &entries), Some(Method::SweepAngle));
        assert_eq!(logs.with(|s| s.get_uint(entries.active_map)), Some(0));
    }

    #[test]
    fn test_register_twice_returns_same_entries() {
        let params = MockState::new(ParameterStore::new());
        let logs = MockState::new(LogStore::new());

        let first = register_lighthouse_entries(&params, &logs).unwrap();
        let second = register_lighthouse_entries(&params, &logs).unwrap();

        assert_eq!(first.method, second.method);
        assert_eq!(first.active_map, second.active_map);
    }

    #[test]
    fn test_publish_active_map() {
        let params = MockState::new(ParameterStore::new());
        let logs = MockState::new(LogStore::new());
        let entries = register_lighthouse_entries(&params, &logs).unwrap();

        publish_active_map(&logs, &entries, 0b0110);

        assert_eq!(logs.with(|s| s.get_uint(entries.active_map)), Some(0b0110));
    }

    #[test]
    fn test_global_stores() {
        let entries = register_lighthouse_entries(&PARAMS, &LOGS).unwrap();

        assert!(PARAMS.with(|s| s.var_id("lighthouse", "method")).is_some());
        assert_eq!(LOGS.with(|s| s.var_id("lighthouse", "bsActive")), Some(entries.active_map));
    }
}
