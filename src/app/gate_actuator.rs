use crate::app::action::Action;
use crate::config::GateConfig;
use crate::error::{GateError, GateResult};
use crate::hal::gate::{GateController, GateState};
use crate::svc::{LogEntry, MessageSink};

/// Hardware calls per dispatched action before the gate latches unresponsive.
pub const MAX_ATTEMPTS: u32 = 3;

#[derive(Debug, Copy, Clone, Eq, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GateStats {
    pub opens: u32,
    pub closes: u32,
    pub responsive: bool,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
struct ActuatorState {
    responsive: bool,
    open_count: u32,
    close_count: u32,
}

impl Default for ActuatorState {
    fn default() -> Self {
        Self {
            responsive: true,
            open_count: 0,
            close_count: 0,
        }
    }
}

enum AttemptOutcome {
    Succeeded,
    Failed(anyhow::Error),
}

/// Drives a [`GateController`], retrying failed actions and latching itself
/// unresponsive when an action fails [`MAX_ATTEMPTS`] times in a row.
///
/// While latched every open/close fails with [`GateError::Unresponsive`]
/// without touching the hardware. Only a successful reset clears the latch;
/// it never clears the counters.
pub struct GateActuator<'a> {
    controller: &'a dyn GateController,
    sink: &'a dyn MessageSink,
    config: GateConfig,
    state: ActuatorState,
}

impl<'a> GateActuator<'a> {
    pub fn new(controller: &'a dyn GateController, sink: &'a dyn MessageSink) -> Self {
        Self::with_config(controller, sink, GateConfig::default())
    }

    pub fn with_config(
        controller: &'a dyn GateController,
        sink: &'a dyn MessageSink,
        config: GateConfig,
    ) -> Self {
        Self {
            controller,
            sink,
            config,
            state: ActuatorState::default(),
        }
    }

    pub fn open(&mut self) -> GateResult<()> {
        if self.controller.state()? == GateState::Open {
            log::debug!("[{}] open: already open", self.config.label);
            return Ok(());
        }
        self.dispatch(Action::Open)
    }

    pub fn close(&mut self) -> GateResult<()> {
        if self.controller.state()? == GateState::Closed {
            log::debug!("[{}] close: already closed", self.config.label);
            return Ok(());
        }
        self.dispatch(Action::Close)
    }

    pub fn reset(&mut self) -> GateResult<()> {
        self.dispatch(Action::Reset)
    }

    /// Fails with [`GateError::StateUnavailable`] while latched, since the
    /// hardware position can no longer be trusted.
    pub fn is_open(&self) -> GateResult<bool> {
        if !self.state.responsive {
            return Err(GateError::StateUnavailable);
        }
        Ok(self.controller.is_open()?)
    }

    pub fn is_responsive(&self) -> bool {
        self.state.responsive
    }

    pub fn open_count(&self) -> u32 {
        self.state.open_count
    }

    pub fn close_count(&self) -> u32 {
        self.state.close_count
    }

    pub fn stats(&self) -> GateStats {
        GateStats {
            opens: self.state.open_count,
            closes: self.state.close_count,
            responsive: self.state.responsive,
        }
    }

    fn attempt(&self, action: Action) -> AttemptOutcome {
        let result = match action {
            Action::Open => self.controller.open(),
            Action::Close => self.controller.close(),
            Action::Reset => self.controller.reset(),
        };

        match result {
            Ok(()) => AttemptOutcome::Succeeded,
            Err(e) => AttemptOutcome::Failed(e),
        }
    }

    fn dispatch(&mut self, action: Action) -> GateResult<()> {
        let label = self.config.label;

        for attempt in 1..=MAX_ATTEMPTS {
            if !self.state.responsive && action != Action::Reset {
                let err = GateError::Unresponsive(action);
                log::error!("[{label}] {err}");
                self.sink.accept(LogEntry::with_cause(
                    err.to_string(),
                    GateError::Unresponsive(action).into(),
                ));
                return Err(err);
            }

            match self.attempt(action) {
                AttemptOutcome::Succeeded => {
                    match action {
                        Action::Open => self.state.open_count += 1,
                        Action::Close => self.state.close_count += 1,
                        Action::Reset => self.state.responsive = true,
                    }
                    let text = format!("{action}: successful");
                    log::info!("[{label}] {text} (attempt {attempt}/{MAX_ATTEMPTS})");
                    self.sink.accept(LogEntry::new(text));
                    return Ok(());
                }
                AttemptOutcome::Failed(cause) if attempt == MAX_ATTEMPTS => {
                    let text = format!("{action}: unrecoverable malfunction");
                    log::error!("[{label}] {text}: {cause}");
                    self.sink.accept(LogEntry::with_cause(text, cause));
                    self.state.responsive = false;
                }
                AttemptOutcome::Failed(cause) => {
                    let text = format!("{action}: malfunction");
                    log::warn!("[{label}] {text} (attempt {attempt}/{MAX_ATTEMPTS}): {cause}");
                    self.sink.accept(LogEntry::with_cause(text, cause));
                }
            }
        }

        Ok(())
    }
}
