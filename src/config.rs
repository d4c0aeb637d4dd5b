#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GateConfig {
    /// Prefix for diagnostics emitted through the `log` facade.
    pub label: &'static str,
}

impl GateConfig {
    fn try_from_str(s: &'static str) -> Result<Self, ()> {
        let label = s.trim();
        if label.is_empty() {
            return Err(());
        }
        Ok(GateConfig { label })
    }

    pub fn from_env_var() -> Result<Self, ()> {
        if let Some(s) = option_env!("TOLLGATE_LABEL") {
            GateConfig::try_from_str(s)
        } else {
            Err(())
        }
    }
}

impl Default for GateConfig {
    fn default() -> Self {
        GateConfig { label: "tollgate" }
    }
}
