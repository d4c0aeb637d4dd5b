use thiserror::Error;

use crate::app::action::Action;

pub type GateResult<T> = Result<T, GateError>;

#[derive(Error, Debug)]
pub enum GateError {
    /// The actuator is latched after an unrecoverable malfunction and only
    /// accepts a reset.
    #[error("{0}: will not respond")]
    Unresponsive(Action),

    #[error("gate is in unresponsive mode")]
    StateUnavailable,

    #[error(transparent)]
    Hardware(#[from] anyhow::Error),
}

#[cfg(test)]
mod tests {
    use anyhow::anyhow;

    use super::*;

    #[test]
    fn test_unresponsive_message_names_the_action() {
        assert_eq!(
            GateError::Unresponsive(Action::Open).to_string(),
            "open: will not respond"
        );
        assert_eq!(
            GateError::Unresponsive(Action::Close).to_string(),
            "close: will not respond"
        );
    }

    #[test]
    fn test_hardware_error_is_transparent() {
        let err = GateError::from(anyhow!("sensor offline"));
        assert_eq!(err.to_string(), "sensor offline");
    }
}
