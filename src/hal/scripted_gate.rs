use std::cell::Cell;

use anyhow::anyhow;

use crate::hal::gate::GateController;

/// In-memory gate controller whose next actions can be scripted to fail.
///
/// Every `open`, `close` and `reset` consumes one scheduled failure while any
/// are pending. `is_open` never fails and never consumes one.
#[derive(Default, Debug)]
pub struct ScriptedGateController {
    is_open: Cell<bool>,
    scheduled_failures: Cell<u32>,
    actions: Cell<u32>,
}

impl ScriptedGateController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_is_open(&self, value: bool) {
        self.is_open.set(value);
    }

    /// Make the next `count` actions fail. Replaces any pending count.
    pub fn schedule_failures(&self, count: u32) {
        self.scheduled_failures.set(count);
    }

    pub fn pending_failures(&self) -> u32 {
        self.scheduled_failures.get()
    }

    /// Number of open/close/reset calls received, failed ones included.
    pub fn action_count(&self) -> u32 {
        self.actions.get()
    }

    fn act(&self, name: &str, is_open_after: bool) -> anyhow::Result<()> {
        self.actions.set(self.actions.get() + 1);

        let pending = self.scheduled_failures.get();
        if pending > 0 {
            self.scheduled_failures.set(pending - 1);
            return Err(anyhow!("failure to {name}"));
        }

        self.is_open.set(is_open_after);
        Ok(())
    }
}

impl GateController for ScriptedGateController {
    fn open(&self) -> anyhow::Result<()> {
        self.act("open", true)
    }

    fn close(&self) -> anyhow::Result<()> {
        self.act("close", false)
    }

    fn reset(&self) -> anyhow::Result<()> {
        self.act("reset", false)
    }

    fn is_open(&self) -> anyhow::Result<bool> {
        Ok(self.is_open.get())
    }
}

#[cfg(test)]
mod tests {
    use crate::hal::gate::GateState;

    use super::*;

    #[test]
    fn test_new_controller_is_closed() {
        let controller = ScriptedGateController::new();
        assert_eq!(controller.state().unwrap(), GateState::Closed);
        assert_eq!(controller.pending_failures(), 0);
    }

    #[test]
    fn test_scheduled_failures_are_consumed_by_actions_only() {
        let controller = ScriptedGateController::new();
        controller.schedule_failures(2);

        assert!(!controller.is_open().unwrap());
        assert_eq!(controller.pending_failures(), 2);

        let err = controller.open().unwrap_err();
        assert_eq!(err.to_string(), "failure to open");
        let err = controller.reset().unwrap_err();
        assert_eq!(err.to_string(), "failure to reset");

        controller.open().unwrap();
        assert_eq!(controller.state().unwrap(), GateState::Open);
        assert_eq!(controller.action_count(), 3);
    }

    #[test]
    fn test_failed_action_leaves_position_unchanged() {
        let controller = ScriptedGateController::new();
        controller.set_is_open(true);
        controller.schedule_failures(1);

        assert!(controller.close().is_err());
        assert!(controller.is_open().unwrap());

        controller.reset().unwrap();
        assert!(!controller.is_open().unwrap());
    }

    #[test]
    fn test_schedule_replaces_pending_count() {
        let controller = ScriptedGateController::new();
        controller.schedule_failures(4);
        controller.schedule_failures(1);
        assert_eq!(controller.pending_failures(), 1);
    }
}
