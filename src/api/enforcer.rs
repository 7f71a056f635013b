use smallvec::SmallVec;
use tracing::{debug, trace, warn};

use crate::core::{Axis, AxisId, AxisLayout, ConstrainMode, PlotArea, scale_zoom, update_domain};
use crate::error::{ConstraintError, ConstraintResult};

use super::autorange_repair::repair_autorange;
use super::validation::validate_constraint_groups;
use super::{
    Adjustment, AxisAdjustment, ConstraintGroup, DomainPlan, EnforcementReport, EnforcerConfig,
    GroupOutcome, GroupReport, plan_domain_adjustment,
};

/// Drives every constraint group toward a common normalized scale.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ConstraintEnforcer {
    config: EnforcerConfig,
}

impl ConstraintEnforcer {
    pub fn new(config: EnforcerConfig) -> ConstraintResult<Self> {
        Ok(Self {
            config: config.validate()?,
        })
    }

    #[must_use]
    pub fn config(&self) -> EnforcerConfig {
        self.config
    }

    /// Enforces every group against `layout`, mutating domains, ranges and
    /// scales in place.
    ///
    /// Groups are validated up front: an unknown axis, a non-positive weight
    /// or an axis shared between groups fails before anything is mutated.
    /// Running this twice with no state change in between leaves the second
    /// call a no-op.
    pub fn enforce(
        &self,
        layout: &mut AxisLayout,
        groups: &[ConstraintGroup],
    ) -> ConstraintResult<EnforcementReport> {
        validate_constraint_groups(layout, groups)?;

        let mut report = EnforcementReport {
            groups: Vec::with_capacity(groups.len()),
        };
        for group in groups {
            report.groups.push(self.enforce_group(layout, group)?);
        }
        Ok(report)
    }

    fn enforce_group(
        &self,
        layout: &mut AxisLayout,
        group: &ConstraintGroup,
    ) -> ConstraintResult<GroupReport> {
        let plot = layout.plot_area();
        let mut min_scale = f64::INFINITY;
        let mut max_scale = 0.0_f64;
        // Usually equal to min_scale; axes an autorange step already shrank
        // do not get a say.
        let mut match_scale = f64::INFINITY;
        let mut normalized: SmallVec<[f64; 4]> = SmallVec::with_capacity(group.len());

        for (id, weight) in group.members() {
            let axis = resolve(layout, id)?;
            axis.ensure_pass_snapshot();
            let scale = axis.set_scale(plot);

            let normalized_scale = scale.abs() / weight;
            normalized.push(normalized_scale);
            min_scale = min_scale.min(normalized_scale);
            max_scale = max_scale.max(normalized_scale);
            if !axis.take_shrink_state().is_provisionally_shrunk() {
                match_scale = match_scale.min(normalized_scale);
            }
        }

        if min_scale > self.config.almost_equal * max_scale {
            debug!(
                members = group.len(),
                min_scale, max_scale, "constraint group already satisfied"
            );
            return Ok(GroupReport {
                min_scale,
                max_scale,
                match_scale,
                outcome: GroupOutcome::Satisfied,
            });
        }

        if !match_scale.is_finite() {
            warn!(
                members = group.len(),
                min_scale, "every group member was provisionally shrunk; matching group minimum"
            );
            match_scale = min_scale;
        }

        debug!(
            members = group.len(),
            min_scale, max_scale, match_scale, "enforcing constraint group"
        );

        let mut adjustments = Vec::with_capacity(group.len());
        for ((id, _), normalized_scale) in group.members().zip(normalized) {
            let axis = resolve(layout, id)?;
            let mode = axis.constrain();

            // domain axes are always recomputed: the anchor may have moved
            if normalized_scale == match_scale && mode != ConstrainMode::Domain {
                continue;
            }

            let factor = normalized_scale / match_scale;
            let adjustment = match mode {
                ConstrainMode::Range => {
                    scale_zoom(axis, factor);
                    Adjustment::RangeZoom { factor }
                }
                ConstrainMode::Domain => {
                    let plan = plan_domain_adjustment(axis, factor, self.config.repair_autorange);
                    apply_domain_plan(layout, id, plot, plan)?
                }
            };

            let axis = resolve(layout, id)?;
            let scale = axis.set_scale(plot);
            trace!(
                axis = %id,
                factor = adjustment.factor(),
                scale,
                ?adjustment,
                "axis constrained"
            );
            adjustments.push(AxisAdjustment {
                axis: id.clone(),
                adjustment,
            });
        }

        Ok(GroupReport {
            min_scale,
            max_scale,
            match_scale,
            outcome: GroupOutcome::Adjusted(adjustments),
        })
    }
}

fn apply_domain_plan(
    layout: &mut AxisLayout,
    id: &AxisId,
    plot: PlotArea,
    plan: DomainPlan,
) -> ConstraintResult<Adjustment> {
    let axis = resolve(layout, id)?;
    let snapshot = axis.ensure_pass_snapshot();

    let adjustment = match plan {
        DomainPlan::ApplyRangeOnly { factor } => {
            axis.write_domain(snapshot.domain);
            scale_zoom(axis, factor);
            Adjustment::RangeOnly { factor }
        }
        DomainPlan::ApplyDomainOnly {
            factor,
            restore_range,
        } => {
            if restore_range {
                axis.write_range(snapshot.range);
            }
            update_domain(axis, factor);
            Adjustment::DomainOnly {
                factor,
                restored_range: restore_range,
            }
        }
        DomainPlan::ApplyDomainThenRepair {
            factor,
            restore_range,
        } => {
            if restore_range {
                axis.write_range(snapshot.range);
            }
            let domain_expand = repair_autorange(axis, plot, factor);
            let factor = factor / domain_expand;
            update_domain(axis, factor);
            Adjustment::DomainThenRepair {
                factor,
                restored_range: restore_range,
                domain_expand,
            }
        }
    };
    Ok(adjustment)
}

fn resolve<'a>(layout: &'a mut AxisLayout, id: &AxisId) -> ConstraintResult<&'a mut Axis> {
    layout
        .axis_mut(id)
        .ok_or_else(|| ConstraintError::UnknownAxis { id: id.to_string() })
}

/// Enforces `groups` with the default [`EnforcerConfig`].
pub fn enforce_axis_constraints(
    layout: &mut AxisLayout,
    groups: &[ConstraintGroup],
) -> ConstraintResult<EnforcementReport> {
    ConstraintEnforcer::default().enforce(layout, groups)
}
