use std::fmt;

#[derive(Copy, Clone, Eq, PartialEq, Debug, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Open,
    Close,
    Reset,
}

impl Action {
    pub fn name(&self) -> &'static str {
        match self {
            Action::Open => "open",
            Action::Close => "close",
            Action::Reset => "reset",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_serializes_as_lowercase_name() {
        assert_eq!(serde_json::to_string(&Action::Reset).unwrap(), "\"reset\"");
        let action: Action = serde_json::from_str("\"close\"").unwrap();
        assert_eq!(action, Action::Close);
    }
}
