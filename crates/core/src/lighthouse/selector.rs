//! Method selector context
//!
//! `MethodSelector` holds the two resolved handles and the method written
//! on the previous iteration. The firmware task builds one at startup and
//! calls [`MethodSelector::step`] once per period.

use core::fmt;

use super::error::SelectorError;
use super::method::{popcount, Method};
use super::{ACTIVE_MAP_LOG, LIGHTHOUSE_GROUP, METHOD_PARAM};
use crate::parameters::{ParamId, ParameterError};
use crate::telemetry::LogId;
use crate::traits::{LogAccess, ParamAccess};

/// Method change produced by one selector iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Transition {
    /// Method written on the previous iteration
    pub from: Method,
    /// Method written on this iteration
    pub to: Method,
    /// Number of active base stations that caused the change
    pub active: u32,
}

impl fmt::Display for Transition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Switching to {}", self.to)
    }
}

/// Lighthouse method selector
pub struct MethodSelector<'a, P: ?Sized, L: ?Sized> {
    params: &'a P,
    logs: &'a L,
    method_id: ParamId,
    active_map_id: LogId,
    current: Method,
    iterations: u32,
    transitions: u32,
}

impl<'a, P, L> MethodSelector<'a, P, L>
where
    P: ParamAccess + ?Sized,
    L: LogAccess + ?Sized,
{
    /// Resolve the method parameter and active map log variable
    ///
    /// The parameter is resolved first. On success `SweepAngle` is written
    /// as the starting method; a rejected write fails startup.
    pub fn new(params: &'a P, logs: &'a L) -> Result<Self, SelectorError> {
        let method_id = params.param_id(LIGHTHOUSE_GROUP, METHOD_PARAM).ok_or(
            SelectorError::ParamNotFound {
                group: LIGHTHOUSE_GROUP,
                name: METHOD_PARAM,
            },
        )?;
        let active_map_id = logs.log_id(LIGHTHOUSE_GROUP, ACTIVE_MAP_LOG).ok_or(
            SelectorError::LogNotFound {
                group: LIGHTHOUSE_GROUP,
                name: ACTIVE_MAP_LOG,
            },
        )?;

        let selector = Self {
            params,
            logs,
            method_id,
            active_map_id,
            current: Method::SweepAngle,
            iterations: 0,
            transitions: 0,
        };
        selector.write_method(selector.current).map_err(|error| {
            SelectorError::ParamNotWritable {
                group: LIGHTHOUSE_GROUP,
                name: METHOD_PARAM,
                error,
            }
        })?;
        Ok(selector)
    }

    /// Run one iteration: read the active map, pick a method, write it
    ///
    /// The parameter is written every iteration. Returns the transition
    /// when the method differs from the previous iteration. A rejected
    /// write leaves the current method unchanged and reports no transition.
    pub fn step(&mut self) -> Option<Transition> {
        let active = popcount(self.logs.log_uint(self.active_map_id));
        let method = Method::from_active_count(active);
        let written = self.write_method(method).is_ok();

        self.iterations = self.iterations.wrapping_add(1);

        if !written || method == self.current {
            return None;
        }

        let transition = Transition {
            from: self.current,
            to: method,
            active,
        };
        self.current = method;
        self.transitions = self.transitions.wrapping_add(1);
        Some(transition)
    }

    /// Method written on the most recent iteration
    pub fn current(&self) -> Method {
        self.current
    }

    /// Number of completed iterations
    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    /// Number of method changes so far
    pub fn transitions(&self) -> u32 {
        self.transitions
    }

    fn write_method(&self, method: Method) -> Result<(), ParameterError> {
        self.params.set_param_int(self.method_id, method.param_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameters::{ParamFlags, ParameterStore};
    use crate::telemetry::LogStore;
    use crate::traits::{MockState, SharedState};

    fn stores() -> (MockState<ParameterStore>, MockState<LogStore>) {
        let mut params = ParameterStore::new();
        params
            .register(
                LIGHTHOUSE_GROUP,
                METHOD_PARAM,
                Method::CrossingBeam.param_value(),
                ParamFlags::empty(),
            )
            .unwrap();

        let mut logs = LogStore::new();
        logs.register(LIGHTHOUSE_GROUP, ACTIVE_MAP_LOG).unwrap();

        (MockState::new(params), MockState::new(logs))
    }

    fn set_active_map(logs: &MockState<LogStore>, mask: u32) {
        logs.with_mut(|store| {
            let id = store.var_id(LIGHTHOUSE_GROUP, ACTIVE_MAP_LOG).unwrap();
            store.set_uint(id, mask).unwrap();
        });
    }

    fn method_param(params: &MockState<ParameterStore>) -> Option<Method> {
        params.with(|store| {
            let id = store.var_id(LIGHTHOUSE_GROUP, METHOD_PARAM)?;
            Method::from_param_value(store.get_int(id)?)
        })
    }

    #[test]
    fn test_new_writes_sweep_angle() {
        let (params, logs) = stores();

        let selector = MethodSelector::new(&params, &logs).unwrap();

        assert_eq!(selector.current(), Method::SweepAngle);
        assert_eq!(method_param(&params), Some(Method::SweepAngle));
        assert_eq!(selector.iterations(), 0);
    }

    #[test]
    fn test_new_missing_param() {
        let params = MockState::new(ParameterStore::new());
        let (_, logs) = stores();

        let result = MethodSelector::new(&params, &logs);

        assert_eq!(
            result.err(),
            Some(SelectorError::ParamNotFound {
                group: "lighthouse",
                name: "method"
            })
        );
    }

    #[test]
    fn test_new_missing_log() {
        let (params, _) = stores();
        let logs = MockState::new(LogStore::new());

        let result = MethodSelector::new(&params, &logs);

        assert_eq!(
            result.err(),
            Some(SelectorError::LogNotFound {
                group: "lighthouse",
                name: "bsActive"
            })
        );
    }

    #[test]
    fn test_param_checked_before_log() {
        let params = MockState::new(ParameterStore::new());
        let logs = MockState::new(LogStore::new());

        let result = MethodSelector::new(&params, &logs);

        assert!(matches!(
            result.err(),
            Some(SelectorError::ParamNotFound { .. })
        ));
    }

    #[test]
    fn test_step_selects_crossing_beam() {
        let (params, logs) = stores();
        let mut selector = MethodSelector::new(&params, &logs).unwrap();
        set_active_map(&logs, 0b101);

        let transition = selector.step();

        assert_eq!(
            transition,
            Some(Transition {
                from: Method::SweepAngle,
                to: Method::CrossingBeam,
                active: 2,
            })
        );
        assert_eq!(method_param(&params), Some(Method::CrossingBeam));
    }

    #[test]
    fn test_step_single_station_stays_sweep_angle() {
        let (params, logs) = stores();
        let mut selector = MethodSelector::new(&params, &logs).unwrap();
        set_active_map(&logs, 0b001);

        assert_eq!(selector.step(), None);
        assert_eq!(method_param(&params), Some(Method::SweepAngle));
    }

    #[test]
    fn test_new_read_only_param() {
        let mut store = ParameterStore::new();
        store
            .register(
                LIGHTHOUSE_GROUP,
                METHOD_PARAM,
                Method::CrossingBeam.param_value(),
                ParamFlags::READ_ONLY,
            )
            .unwrap();
        let params = MockState::new(store);
        let (_, logs) = stores();

        let result = MethodSelector::new(&params, &logs);

        assert_eq!(
            result.err(),
            Some(SelectorError::ParamNotWritable {
                group: "lighthouse",
                name: "method",
                error: ParameterError::ReadOnly,
            })
        );
        assert_eq!(method_param(&params), Some(Method::CrossingBeam));
    }

    #[test]
    fn test_step_rejected_write_keeps_method() {
        let (params, logs) = stores();
        let mut selector = MethodSelector::new(&params, &logs).unwrap();
        set_active_map(&logs, 0b11);

        // Parameter replaced by a read-only entry after startup
        params.with_mut(|store| {
            *store = ParameterStore::new();
            store
                .register(
                    LIGHTHOUSE_GROUP,
                    METHOD_PARAM,
                    Method::SweepAngle.param_value(),
                    ParamFlags::READ_ONLY,
                )
                .unwrap();
        });

        assert_eq!(selector.step(), None);
        assert_eq!(selector.current(), Method::SweepAngle);
        assert_eq!(selector.transitions(), 0);
        assert_eq!(selector.iterations(), 1);
        assert_eq!(method_param(&params), Some(Method::SweepAngle));
    }

    #[test]
    fn test_step_writes_every_iteration() {
        let (params, logs) = stores();
        let mut selector = MethodSelector::new(&params, &logs).unwrap();
        set_active_map(&logs, 0b11);
        selector.step();

        // Someone else overwrites the parameter; the next iteration restores it
        params.with_mut(|store| {
            let id = store.var_id(LIGHTHOUSE_GROUP, METHOD_PARAM).unwrap();
            store.set_int(id, Method::SweepAngle.param_value()).unwrap();
        });

        assert_eq!(selector.step(), None);
        assert_eq!(method_param(&params), Some(Method::CrossingBeam));
    }

    #[test]
    fn test_transitions_only_on_change() {
        let (params, logs) = stores();
        let mut selector = MethodSelector::new(&params, &logs).unwrap();

        let masks = [0b0, 0b1, 0b11, 0b111, 0b110, 0b100, 0b0, 0b1001, 0b1000];
        let expected = [
            None,
            None,
            Some(Method::CrossingBeam),
            None,
            None,
            Some(Method::SweepAngle),
            None,
            Some(Method::CrossingBeam),
            Some(Method::SweepAngle),
        ];

        for (mask, want) in masks.iter().zip(expected.iter()) {
            set_active_map(&logs, *mask);
            let transition = selector.step();
            assert_eq!(transition.map(|t| t.to), *want, "mask {:#b}", mask);
            assert_eq!(selector.current(), select_expected(*mask));
        }

        assert_eq!(selector.iterations(), 9);
        assert_eq!(selector.transitions(), 4);
    }

    fn select_expected(mask: u32) -> Method {
        if mask.count_ones() > 1 {
            Method::CrossingBeam
        } else {
            Method::SweepAngle
        }
    }

    #[test]
    fn test_transition_display() {
        extern crate std;
        use std::string::ToString;

        let transition = Transition {
            from: Method::SweepAngle,
            to: Method::CrossingBeam,
            active: 2,
        };
        assert_eq!(transition.to_string(), "Switching to crossing beam method");
    }
}
