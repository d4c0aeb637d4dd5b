/// Physical gate actuator.
///
/// Any call may fail; the caller only learns that it did, never why in a way
/// it can act on.
pub trait GateController {
    fn open(&self) -> anyhow::Result<()>;

    fn close(&self) -> anyhow::Result<()>;

    /// Return the actuator to its power-on position (closed).
    fn reset(&self) -> anyhow::Result<()>;

    fn is_open(&self) -> anyhow::Result<bool>;

    fn state(&self) -> anyhow::Result<GateState> {
        self.is_open().map(GateState::from)
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug, Default)]
pub enum GateState {
    #[default]
    Closed,
    Open,
}

impl From<bool> for GateState {
    fn from(is_open: bool) -> Self {
        if is_open {
            GateState::Open
        } else {
            GateState::Closed
        }
    }
}
