use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{AppliedView, AxisLayout, ConstrainMode, PlotArea};
use crate::error::{ConstraintError, ConstraintResult};

pub const LAYOUT_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable per-axis state after enforcement, used by regression tests
/// and debugging tooling.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisSnapshot {
    pub domain: (f64, f64),
    pub range: (f64, f64),
    pub scale: f64,
    pub constrain: ConstrainMode,
    pub applied: AppliedView,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    pub plot_area: PlotArea,
    pub axes: IndexMap<String, AxisSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: LayoutSnapshot,
}

impl AxisLayout {
    /// Captures domain, range and scale of every axis. Scales are reported
    /// as last computed; call `refresh_scales` first for a layout that has
    /// not been enforced yet.
    #[must_use]
    pub fn snapshot(&self) -> LayoutSnapshot {
        LayoutSnapshot {
            plot_area: self.plot_area(),
            axes: self
                .axes()
                .map(|axis| {
                    (
                        axis.id().to_string(),
                        AxisSnapshot {
                            domain: axis.domain(),
                            range: axis.range(),
                            scale: axis.scale(),
                            constrain: axis.constrain(),
                            applied: axis.applied(),
                        },
                    )
                })
                .collect(),
        }
    }
}

impl LayoutSnapshot {
    pub fn to_json_contract_v1_pretty(&self) -> ConstraintResult<String> {
        let payload = LayoutSnapshotJsonContractV1 {
            schema_version: LAYOUT_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            ConstraintError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    pub fn from_json_compat_str(input: &str) -> ConstraintResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<LayoutSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: LayoutSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            ConstraintError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != LAYOUT_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(ConstraintError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
