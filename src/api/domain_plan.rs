use crate::core::Axis;

/// How a domain-constrained axis reaches its target scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DomainPlan {
    /// The domain would have to grow past its baseline: reset the domain to
    /// the baseline and zoom the range by `factor` instead.
    ApplyRangeOnly { factor: f64 },
    /// Resize the domain by `factor` relative to the baseline. When
    /// `restore_range` is set the range first goes back to its baseline.
    ApplyDomainOnly { factor: f64, restore_range: bool },
    /// As `ApplyDomainOnly`, then re-derive autorange padding at the new
    /// scale before the final resize.
    ApplyDomainThenRepair { factor: f64, restore_range: bool },
}

impl DomainPlan {
    #[must_use]
    pub fn factor(self) -> f64 {
        match self {
            Self::ApplyRangeOnly { factor }
            | Self::ApplyDomainOnly { factor, .. }
            | Self::ApplyDomainThenRepair { factor, .. } => factor,
        }
    }
}

/// Chooses the domain-mode regime for `axis` given the group factor
/// `normalized_scale / match_scale`.
///
/// The factor is first re-expressed against the pass baseline: any shrink
/// already applied to the domain or the range during this pass is folded in.
/// An axis with no baseline yet is treated as unshrunk.
#[must_use]
pub fn plan_domain_adjustment(axis: &Axis, factor: f64, repair_autorange: bool) -> DomainPlan {
    let (domain_shrunk, range_shrunk) = match axis.pass_snapshot() {
        Some(snapshot) => {
            let (d0, d1) = axis.domain();
            let (l0, l1) = axis.linear_range();
            let axis_type = axis.axis_type();
            let input_span =
                axis_type.r2l(snapshot.range.1) - axis_type.r2l(snapshot.range.0);
            ((d1 - d0) / snapshot.domain_width(), (l1 - l0) / input_span)
        }
        None => (1.0, 1.0),
    };

    let mut factor = factor / domain_shrunk;
    if factor * range_shrunk < 1.0 {
        return DomainPlan::ApplyRangeOnly { factor };
    }

    let restore_range = range_shrunk < 1.0;
    if restore_range {
        factor *= range_shrunk;
    }

    if repair_autorange && axis.autorange() {
        DomainPlan::ApplyDomainThenRepair {
            factor,
            restore_range,
        }
    } else {
        DomainPlan::ApplyDomainOnly {
            factor,
            restore_range,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AxisId, ConstrainMode, update_domain};
    use approx::assert_relative_eq;

    fn domain_axis(domain: (f64, f64), range: (f64, f64)) -> Axis {
        Axis::new(AxisId::parse("x").expect("id"), domain, range)
            .expect("axis")
            .with_constrain(ConstrainMode::Domain)
    }

    #[test]
    fn fresh_axis_shrinks_domain() {
        let mut x = domain_axis((0.0, 1.0), (0.0, 10.0));
        x.ensure_pass_snapshot();
        assert_eq!(
            plan_domain_adjustment(&x, 2.0, true),
            DomainPlan::ApplyDomainOnly {
                factor: 2.0,
                restore_range: false
            }
        );
    }

    #[test]
    fn growing_past_the_baseline_switches_to_range() {
        let mut x = domain_axis((0.0, 1.0), (0.0, 10.0));
        x.ensure_pass_snapshot();
        update_domain(&mut x, 2.0);
        // domain is at half width; asking for a further 0.25 means growing
        // it to twice the baseline
        let plan = plan_domain_adjustment(&x, 0.25, true);
        match plan {
            DomainPlan::ApplyRangeOnly { factor } => assert_relative_eq!(factor, 0.5),
            other => panic!("unexpected plan {other:?}"),
        }
    }

    #[test]
    fn shrunk_range_is_restored_and_folded_into_factor() {
        let mut x = domain_axis((0.0, 1.0), (0.0, 10.0));
        x.ensure_pass_snapshot();
        x.set_range((2.5, 7.5)).expect("narrow range");
        let plan = plan_domain_adjustment(&x, 4.0, true);
        assert_eq!(
            plan,
            DomainPlan::ApplyDomainOnly {
                factor: 2.0,
                restore_range: true
            }
        );
    }

    #[test]
    fn autorange_axes_request_repair() {
        let mut x = domain_axis((0.0, 1.0), (0.0, 10.0)).with_autorange(true);
        x.ensure_pass_snapshot();
        assert!(matches!(
            plan_domain_adjustment(&x, 1.5, true),
            DomainPlan::ApplyDomainThenRepair { .. }
        ));
        assert!(matches!(
            plan_domain_adjustment(&x, 1.5, false),
            DomainPlan::ApplyDomainOnly { .. }
        ));
    }
}
