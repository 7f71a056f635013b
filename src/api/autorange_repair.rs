use crate::core::{Axis, PlotArea, update_domain};

/// Re-derives an autoranged axis's range after its domain shrinks by `factor`.
///
/// Shrinking the domain with the range held fixed reduces the pixels
/// available for autorange padding. Each padding candidate is re-evaluated at
/// the provisional new scale and may widen the range, but never past the
/// bound the whole half-range would reach at `factor`; candidates beyond it
/// could never be satisfied. Returns how much the range widened relative to
/// its previous span, which the caller divides out of the final domain
/// resize.
///
/// This is a one-shot correction. With very uneven padding on the two ends
/// the result can sit slightly off-center compared to recomputing padding
/// continuously during a zoom.
pub(crate) fn repair_autorange(axis: &mut Axis, plot: PlotArea, factor: f64) -> f64 {
    let (l0, l1) = axis.linear_range();
    let mut range_min = l0.min(l1);
    let mut range_max = l0.max(l1);
    let range_center = (range_min + range_max) / 2.0;
    let half_range = range_max - range_center;
    let outer_min = range_center - half_range * factor;
    let outer_max = range_center + half_range * factor;

    update_domain(axis, factor);
    let m = axis.set_scale(plot).abs();

    for candidate in axis.pad_min() {
        let value = candidate.val - candidate.pad / m;
        if value > outer_min && value < range_min {
            range_min = value;
        }
    }

    for candidate in axis.pad_max() {
        let value = candidate.val + candidate.pad / m;
        if value < outer_max && value > range_max {
            range_max = value;
        }
    }

    if l0 < l1 {
        axis.write_linear_range((range_min, range_max));
    } else {
        axis.write_linear_range((range_max, range_min));
    }

    (range_max - range_min) / (2.0 * half_range)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{AxisId, ConstrainMode, PadCandidate};
    use approx::assert_relative_eq;

    fn plot() -> PlotArea {
        PlotArea::new(500.0, 500.0).expect("plot")
    }

    fn autorange_axis(range: (f64, f64)) -> Axis {
        let mut axis = Axis::new(AxisId::parse("x").expect("id"), (0.0, 1.0), range)
            .expect("axis")
            .with_constrain(ConstrainMode::Domain)
            .with_autorange(true);
        axis.ensure_pass_snapshot();
        axis
    }

    #[test]
    fn padding_is_recomputed_at_the_shrunk_scale() {
        // 500px over 10 units is 50px/unit; shrinking by 2 leaves 25px/unit
        let mut axis =
            autorange_axis((0.0, 10.0)).with_pad_max(vec![PadCandidate::new(9.0, 50.0)]);
        let expand = repair_autorange(&mut axis, plot(), 2.0);

        let (start, end) = axis.range();
        assert_relative_eq!(start, 0.0);
        assert_relative_eq!(end, 11.0, epsilon = 1e-12);
        assert_relative_eq!(expand, 1.1, epsilon = 1e-12);
    }

    #[test]
    fn impossible_padding_is_ignored() {
        // needs 9 + 400/25 = 25, past the outer bound of 5 + 5 * 2 = 15
        let mut axis =
            autorange_axis((0.0, 10.0)).with_pad_max(vec![PadCandidate::new(9.0, 400.0)]);
        let expand = repair_autorange(&mut axis, plot(), 2.0);
        assert_eq!(axis.range(), (0.0, 10.0));
        assert_relative_eq!(expand, 1.0);
    }

    #[test]
    fn reversed_ranges_stay_reversed() {
        let mut axis = autorange_axis((10.0, 0.0))
            .with_pad_min(vec![PadCandidate::new(1.0, 50.0), PadCandidate::new(0.5, 25.0)]);
        repair_autorange(&mut axis, plot(), 2.0);
        let (start, end) = axis.range();
        assert_relative_eq!(start, 10.0);
        assert_relative_eq!(end, -1.0, epsilon = 1e-12);
    }
}
