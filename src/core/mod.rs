pub mod anchor;
pub mod axis;
pub mod axis_id;
pub mod domain;
pub mod layout;
pub mod scale_zoom;

pub use anchor::ConstrainToward;
pub use axis::{
    AppliedView, Axis, AxisType, ConstrainMode, PadCandidate, PassSnapshot, ShrinkState,
};
pub use axis_id::{AxisId, AxisLetter};
pub use domain::update_domain;
pub use layout::{AxisLayout, PlotArea};
pub use scale_zoom::{scale_zoom, scale_zoom_around};
