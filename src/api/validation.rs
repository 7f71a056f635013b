use indexmap::IndexSet;

use crate::core::{AxisId, AxisLayout};
use crate::error::{ConstraintError, ConstraintResult};

use super::ConstraintGroup;

/// Checks every group before any axis is touched, so a bad group never
/// leaves the layout half-enforced.
pub(super) fn validate_constraint_groups(
    layout: &AxisLayout,
    groups: &[ConstraintGroup],
) -> ConstraintResult<()> {
    let mut seen: IndexSet<&AxisId> = IndexSet::new();
    for group in groups {
        for (id, weight) in group.members() {
            if !layout.contains(id) {
                return Err(ConstraintError::UnknownAxis { id: id.to_string() });
            }
            if !weight.is_finite() || weight <= 0.0 {
                return Err(ConstraintError::InvalidWeight {
                    id: id.to_string(),
                    weight,
                });
            }
            if !seen.insert(id) {
                return Err(ConstraintError::InvalidData(format!(
                    "axis {id} appears in more than one constraint group"
                )));
            }
        }
    }
    Ok(())
}
