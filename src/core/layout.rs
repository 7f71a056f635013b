use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::{Axis, AxisId, AxisLetter};
use crate::error::{ConstraintError, ConstraintResult};

/// Pixel size of the overall plotting rectangle that axis domains divide up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub width_px: f64,
    pub height_px: f64,
}

impl PlotArea {
    pub fn new(width_px: f64, height_px: f64) -> ConstraintResult<Self> {
        Self {
            width_px,
            height_px,
        }
        .validate()
    }

    #[must_use]
    pub fn extent_px(self, letter: AxisLetter) -> f64 {
        match letter {
            AxisLetter::X => self.width_px,
            AxisLetter::Y => self.height_px,
        }
    }

    fn validate(self) -> ConstraintResult<Self> {
        if !self.width_px.is_finite()
            || !self.height_px.is_finite()
            || self.width_px <= 0.0
            || self.height_px <= 0.0
        {
            return Err(ConstraintError::InvalidData(format!(
                "plot area must be finite and > 0: width={}, height={}",
                self.width_px, self.height_px
            )));
        }
        Ok(self)
    }
}

/// Axis records of one figure, keyed by id in insertion order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLayout {
    plot_area: PlotArea,
    axes: IndexMap<AxisId, Axis>,
}

impl AxisLayout {
    #[must_use]
    pub fn new(plot_area: PlotArea) -> Self {
        Self {
            plot_area,
            axes: IndexMap::new(),
        }
    }

    /// Adds or replaces the axis stored under its own id.
    pub fn insert(&mut self, axis: Axis) -> ConstraintResult<Option<Axis>> {
        let axis = axis.validate()?;
        Ok(self.axes.insert(axis.id().clone(), axis))
    }

    /// Builder form of [`AxisLayout::insert`].
    pub fn with_axis(mut self, axis: Axis) -> ConstraintResult<Self> {
        self.insert(axis)?;
        Ok(self)
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        self.plot_area
    }

    /// Changes the plot size; scales are refreshed on the next enforcement.
    pub fn set_plot_area(&mut self, plot_area: PlotArea) -> ConstraintResult<()> {
        self.plot_area = plot_area.validate()?;
        Ok(())
    }

    #[must_use]
    pub fn axis(&self, id: &AxisId) -> Option<&Axis> {
        self.axes.get(id)
    }

    #[must_use]
    pub fn axis_mut(&mut self, id: &AxisId) -> Option<&mut Axis> {
        self.axes.get_mut(id)
    }

    pub fn axes(&self) -> impl Iterator<Item = &Axis> {
        self.axes.values()
    }

    #[must_use]
    pub fn contains(&self, id: &AxisId) -> bool {
        self.axes.contains_key(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.axes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.axes.is_empty()
    }

    /// Starts a new layout pass: every axis re-captures its baseline the next
    /// time it takes part in enforcement.
    pub fn begin_pass(&mut self) {
        for axis in self.axes.values_mut() {
            axis.clear_pass_snapshot();
        }
    }

    pub fn mark_provisionally_shrunk(&mut self, id: &AxisId) -> ConstraintResult<()> {
        let axis = self
            .axes
            .get_mut(id)
            .ok_or_else(|| ConstraintError::UnknownAxis { id: id.to_string() })?;
        axis.mark_provisionally_shrunk();
        Ok(())
    }

    /// Recomputes every axis scale against the current plot area.
    pub fn refresh_scales(&mut self) {
        let plot_area = self.plot_area;
        for axis in self.axes.values_mut() {
            axis.set_scale(plot_area);
        }
    }

    pub fn from_json_str(input: &str) -> ConstraintResult<Self> {
        let layout: Self = serde_json::from_str(input).map_err(|e| {
            ConstraintError::InvalidData(format!("failed to parse axis layout json: {e}"))
        })?;
        layout.validate()
    }

    pub fn to_json_pretty(&self) -> ConstraintResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ConstraintError::InvalidData(format!("failed to serialize axis layout: {e}"))
        })
    }

    fn validate(self) -> ConstraintResult<Self> {
        let plot_area = self.plot_area.validate()?;
        let mut axes = IndexMap::with_capacity(self.axes.len());
        for (id, axis) in self.axes {
            if &id != axis.id() {
                return Err(ConstraintError::InvalidData(format!(
                    "axis stored under {id} reports id {}",
                    axis.id()
                )));
            }
            axes.insert(id, axis.validate()?);
        }
        Ok(Self { plot_area, axes })
    }
}
