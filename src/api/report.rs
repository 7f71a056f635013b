use crate::core::AxisId;

/// What enforcement did to one axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Adjustment {
    /// Range-constrained axis: range zoomed about its center.
    RangeZoom { factor: f64 },
    /// Domain-constrained axis that could not grow its domain far enough:
    /// domain reset to its baseline, range zoomed instead.
    RangeOnly { factor: f64 },
    /// Domain resized about its anchor.
    DomainOnly { factor: f64, restored_range: bool },
    /// Domain resized after autorange padding was re-derived.
    /// `factor` is the final resize, already divided by `domain_expand`.
    DomainThenRepair {
        factor: f64,
        restored_range: bool,
        domain_expand: f64,
    },
}

impl Adjustment {
    #[must_use]
    pub fn factor(self) -> f64 {
        match self {
            Self::RangeZoom { factor }
            | Self::RangeOnly { factor }
            | Self::DomainOnly { factor, .. }
            | Self::DomainThenRepair { factor, .. } => factor,
        }
    }

    #[must_use]
    pub fn changes_domain(self) -> bool {
        !matches!(self, Self::RangeZoom { .. })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisAdjustment {
    pub axis: AxisId,
    pub adjustment: Adjustment,
}

#[derive(Debug, Clone, PartialEq)]
pub enum GroupOutcome {
    /// Scales already agree within tolerance; nothing was touched.
    Satisfied,
    Adjusted(Vec<AxisAdjustment>),
}

/// Normalized scales observed for one group, and what was done about them.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupReport {
    pub min_scale: f64,
    pub max_scale: f64,
    /// Common target every member was driven toward.
    pub match_scale: f64,
    pub outcome: GroupOutcome,
}

impl GroupReport {
    #[must_use]
    pub fn adjustments(&self) -> &[AxisAdjustment] {
        match &self.outcome {
            GroupOutcome::Satisfied => &[],
            GroupOutcome::Adjusted(adjustments) => adjustments,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct EnforcementReport {
    pub groups: Vec<GroupReport>,
}

impl EnforcementReport {
    /// `true` when every group was already satisfied.
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.groups
            .iter()
            .all(|group| group.outcome == GroupOutcome::Satisfied)
    }

    pub fn adjusted_axes(&self) -> impl Iterator<Item = &AxisId> {
        self.groups
            .iter()
            .flat_map(|group| group.adjustments())
            .map(|entry| &entry.axis)
    }

    #[must_use]
    pub fn adjustment_for(&self, id: &AxisId) -> Option<Adjustment> {
        self.groups
            .iter()
            .flat_map(|group| group.adjustments())
            .find(|entry| &entry.axis == id)
            .map(|entry| entry.adjustment)
    }
}
