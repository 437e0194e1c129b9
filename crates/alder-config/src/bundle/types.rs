use serde::{Deserialize, Serialize};

/// Build mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Fast builds, no optimization (default)
    #[default]
    Development,
    /// Optimized output for deployment
    Production,
}

impl Mode {
    pub fn is_production(self) -> bool {
        matches!(self, Mode::Production)
    }
}
