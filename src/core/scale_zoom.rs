use crate::core::Axis;

/// Zooms the range about its midpoint.
///
/// See [`scale_zoom_around`].
pub fn scale_zoom(axis: &mut Axis, factor: f64) {
    scale_zoom_around(axis, factor, 0.5);
}

/// Multiplies the linearized range span by `factor`, keeping the point at
/// `center_fraction` of the range fixed.
///
/// `factor > 1` widens the range and therefore lowers `|scale|` by the same
/// factor. The domain is left untouched; the scale itself is refreshed by
/// the next `set_scale`.
pub fn scale_zoom_around(axis: &mut Axis, factor: f64, center_fraction: f64) {
    let (l0, l1) = axis.linear_range();
    let center = l0 + (l1 - l0) * center_fraction;
    axis.write_linear_range((
        center + (l0 - center) * factor,
        center + (l1 - center) * factor,
    ));
}
