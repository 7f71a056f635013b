use serde::{Deserialize, Serialize};

use crate::error::{ConstraintError, ConstraintResult};

/// Relative slack under which a group counts as already satisfied.
pub const ALMOST_EQUAL: f64 = 1.0 - 1e-6;

/// Public enforcer configuration.
///
/// Serializable so hosts can keep it next to the rest of their layout
/// settings.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnforcerConfig {
    /// A group is skipped when `min_scale > almost_equal * max_scale`.
    #[serde(default = "default_almost_equal")]
    pub almost_equal: f64,
    /// Re-derive autorange padding after a domain shrink.
    #[serde(default = "default_repair_autorange")]
    pub repair_autorange: bool,
}

impl Default for EnforcerConfig {
    fn default() -> Self {
        Self {
            almost_equal: default_almost_equal(),
            repair_autorange: default_repair_autorange(),
        }
    }
}

impl EnforcerConfig {
    #[must_use]
    pub fn with_almost_equal(mut self, almost_equal: f64) -> Self {
        self.almost_equal = almost_equal;
        self
    }

    #[must_use]
    pub fn with_repair_autorange(mut self, repair_autorange: bool) -> Self {
        self.repair_autorange = repair_autorange;
        self
    }

    pub fn from_json_str(input: &str) -> ConstraintResult<Self> {
        let config: Self = serde_json::from_str(input).map_err(|e| {
            ConstraintError::InvalidData(format!("failed to parse enforcer config json: {e}"))
        })?;
        config.validate()
    }

    pub(crate) fn validate(self) -> ConstraintResult<Self> {
        if !self.almost_equal.is_finite() || self.almost_equal <= 0.0 || self.almost_equal > 1.0
        {
            return Err(ConstraintError::InvalidData(
                "almost_equal tolerance must be finite and within (0, 1]".to_owned(),
            ));
        }
        Ok(self)
    }
}

fn default_almost_equal() -> f64 {
    ALMOST_EQUAL
}

fn default_repair_autorange() -> bool {
    true
}
