mod autorange_repair;
mod constraint_group;
mod domain_plan;
mod enforcer;
mod enforcer_config;
mod report;
mod snapshot;
mod validation;

pub use constraint_group::ConstraintGroup;
pub use domain_plan::{DomainPlan, plan_domain_adjustment};
pub use enforcer::{ConstraintEnforcer, enforce_axis_constraints};
pub use enforcer_config::{ALMOST_EQUAL, EnforcerConfig};
pub use report::{Adjustment, AxisAdjustment, EnforcementReport, GroupOutcome, GroupReport};
pub use snapshot::{
    AxisSnapshot, LAYOUT_SNAPSHOT_JSON_SCHEMA_V1, LayoutSnapshot, LayoutSnapshotJsonContractV1,
};
