use crate::core::Axis;

/// Resizes the domain about the axis anchor by `1 / factor`.
///
/// Distances are always measured from the pass baseline domain, never from
/// the current one, so repeated calls within a pass do not compound.
/// `factor > 1` shrinks toward the anchor; `factor < 1` grows, possibly past
/// the baseline. The range is left untouched.
pub fn update_domain(axis: &mut Axis, factor: f64) {
    let input = axis.ensure_pass_snapshot().domain;
    let fraction = axis.constrain_toward().fraction();
    let center = input.0 + (input.1 - input.0) * fraction;

    axis.write_domain((
        center + (input.0 - center) / factor,
        center + (input.1 - center) / factor,
    ));
}
