use serde::{Deserialize, Serialize};

use crate::core::{AxisId, AxisLetter, ConstrainToward, PlotArea};
use crate::error::{ConstraintError, ConstraintResult};

/// Mapping between stored range endpoints and the linear space scales are
/// computed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AxisType {
    /// Range endpoints are already linear.
    #[default]
    Linear,
    /// Range endpoints are data values; scales use their base-10 logarithm.
    Log,
}

impl AxisType {
    /// Range value to linear value.
    #[must_use]
    pub fn r2l(self, value: f64) -> f64 {
        match self {
            Self::Linear => value,
            Self::Log => value.log10(),
        }
    }

    /// Linear value back to range value.
    #[must_use]
    pub fn l2r(self, value: f64) -> f64 {
        match self {
            Self::Linear => value,
            Self::Log => 10f64.powf(value),
        }
    }
}

/// What a scale constraint is allowed to change on this axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConstrainMode {
    /// Grow or shrink the visible data range; the domain stays put.
    #[default]
    Range,
    /// Grow or shrink the on-screen domain; the data range stays put.
    Domain,
}

/// Single-use marker left by an external autorange step.
///
/// A provisionally shrunk axis already reflects a tentative shrink, so its
/// scale must not set the target for the rest of its group. The marker is
/// consumed by the next enforcement pass that reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShrinkState {
    #[default]
    Fresh,
    ProvisionallyShrunk,
}

impl ShrinkState {
    /// Returns the current state and resets it to `Fresh`.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    #[must_use]
    pub fn is_provisionally_shrunk(self) -> bool {
        self == Self::ProvisionallyShrunk
    }
}

/// Domain and range an axis had when it first joined the current layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PassSnapshot {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl PassSnapshot {
    #[must_use]
    pub fn domain_width(self) -> f64 {
        self.domain.1 - self.domain.0
    }
}

/// Last domain/range written back to the user-facing layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AppliedView {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

/// Autorange padding requirement: keep `pad` pixels between `val` and the
/// range edge. `val` is in linearized units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PadCandidate {
    pub val: f64,
    pub pad: f64,
}

impl PadCandidate {
    #[must_use]
    pub fn new(val: f64, pad: f64) -> Self {
        Self { val, pad }
    }
}

/// One coordinate axis of a plot.
///
/// Deserialized records may omit the anchor and the applied view; they
/// default to the letter's anchor and the current domain/range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "AxisRecord")]
pub struct Axis {
    id: AxisId,
    #[serde(default)]
    axis_type: AxisType,
    domain: (f64, f64),
    range: (f64, f64),
    #[serde(default)]
    scale: f64,
    #[serde(default)]
    constrain: ConstrainMode,
    constrain_toward: ConstrainToward,
    #[serde(default)]
    autorange: bool,
    #[serde(default)]
    pad_min: Vec<PadCandidate>,
    #[serde(default)]
    pad_max: Vec<PadCandidate>,
    #[serde(default)]
    pass_snapshot: Option<PassSnapshot>,
    #[serde(default)]
    shrink_state: ShrinkState,
    applied: AppliedView,
}

#[derive(Deserialize)]
struct AxisRecord {
    id: AxisId,
    #[serde(default)]
    axis_type: AxisType,
    domain: (f64, f64),
    range: (f64, f64),
    #[serde(default)]
    scale: f64,
    #[serde(default)]
    constrain: ConstrainMode,
    #[serde(default)]
    constrain_toward: Option<ConstrainToward>,
    #[serde(default)]
    autorange: bool,
    #[serde(default)]
    pad_min: Vec<PadCandidate>,
    #[serde(default)]
    pad_max: Vec<PadCandidate>,
    #[serde(default)]
    pass_snapshot: Option<PassSnapshot>,
    #[serde(default)]
    shrink_state: ShrinkState,
    #[serde(default)]
    applied: Option<AppliedView>,
}

impl From<AxisRecord> for Axis {
    fn from(record: AxisRecord) -> Self {
        let constrain_toward = record
            .constrain_toward
            .unwrap_or_else(|| ConstrainToward::default_for(record.id.letter()));
        let applied = record.applied.unwrap_or(AppliedView {
            domain: record.domain,
            range: record.range,
        });
        Self {
            id: record.id,
            axis_type: record.axis_type,
            domain: record.domain,
            range: record.range,
            scale: record.scale,
            constrain: record.constrain,
            constrain_toward,
            autorange: record.autorange,
            pad_min: record.pad_min,
            pad_max: record.pad_max,
            pass_snapshot: record.pass_snapshot,
            shrink_state: record.shrink_state,
            applied,
        }
    }
}

impl Axis {
    /// Creates a linear, range-constrained axis. The domain must lie within
    /// `[0, 1]` of the plot area.
    pub fn new(id: AxisId, domain: (f64, f64), range: (f64, f64)) -> ConstraintResult<Self> {
        validate_input_domain(domain)?;
        let constrain_toward = ConstrainToward::default_for(id.letter());
        Self {
            id,
            axis_type: AxisType::Linear,
            domain,
            range,
            scale: 0.0,
            constrain: ConstrainMode::Range,
            constrain_toward,
            autorange: false,
            pad_min: Vec::new(),
            pad_max: Vec::new(),
            pass_snapshot: None,
            shrink_state: ShrinkState::Fresh,
            applied: AppliedView { domain, range },
        }
        .validate()
    }

    #[must_use]
    pub fn with_axis_type(mut self, axis_type: AxisType) -> Self {
        self.axis_type = axis_type;
        self
    }

    #[must_use]
    pub fn with_constrain(mut self, constrain: ConstrainMode) -> Self {
        self.constrain = constrain;
        self
    }

    #[must_use]
    pub fn with_constrain_toward(mut self, constrain_toward: ConstrainToward) -> Self {
        self.constrain_toward = constrain_toward;
        self
    }

    #[must_use]
    pub fn with_autorange(mut self, autorange: bool) -> Self {
        self.autorange = autorange;
        self
    }

    #[must_use]
    pub fn with_pad_min(mut self, candidates: Vec<PadCandidate>) -> Self {
        self.pad_min = candidates;
        self
    }

    #[must_use]
    pub fn with_pad_max(mut self, candidates: Vec<PadCandidate>) -> Self {
        self.pad_max = candidates;
        self
    }

    #[must_use]
    pub fn id(&self) -> &AxisId {
        &self.id
    }

    #[must_use]
    pub fn letter(&self) -> AxisLetter {
        self.id.letter()
    }

    #[must_use]
    pub fn axis_type(&self) -> AxisType {
        self.axis_type
    }

    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Signed pixels per linearized data unit as of the last `set_scale`.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[must_use]
    pub fn constrain(&self) -> ConstrainMode {
        self.constrain
    }

    #[must_use]
    pub fn constrain_toward(&self) -> ConstrainToward {
        self.constrain_toward
    }

    #[must_use]
    pub fn autorange(&self) -> bool {
        self.autorange
    }

    #[must_use]
    pub fn pad_min(&self) -> &[PadCandidate] {
        &self.pad_min
    }

    #[must_use]
    pub fn pad_max(&self) -> &[PadCandidate] {
        &self.pad_max
    }

    #[must_use]
    pub fn pass_snapshot(&self) -> Option<PassSnapshot> {
        self.pass_snapshot
    }

    #[must_use]
    pub fn shrink_state(&self) -> ShrinkState {
        self.shrink_state
    }

    #[must_use]
    pub fn applied(&self) -> AppliedView {
        self.applied
    }

    /// Replaces the domain, e.g. after the host relayouts the plot. The
    /// domain must lie within `[0, 1]` of the plot area.
    pub fn set_domain(&mut self, domain: (f64, f64)) -> ConstraintResult<()> {
        validate_input_domain(domain)?;
        self.write_domain(domain);
        Ok(())
    }

    /// Replaces the range, e.g. after a user zoom or pan.
    pub fn set_range(&mut self, range: (f64, f64)) -> ConstraintResult<()> {
        validate_range(range, self.axis_type)?;
        self.write_range(range);
        Ok(())
    }

    /// Moves the point the domain resizes about. Takes effect on the next
    /// enforcement that touches this axis.
    pub fn set_constrain_toward(
        &mut self,
        constrain_toward: ConstrainToward,
    ) -> ConstraintResult<()> {
        self.constrain_toward = constrain_toward.validate()?;
        Ok(())
    }

    /// Flags this axis as already shrunk by an autorange step.
    pub fn mark_provisionally_shrunk(&mut self) {
        self.shrink_state = ShrinkState::ProvisionallyShrunk;
    }

    pub fn clear_pass_snapshot(&mut self) {
        self.pass_snapshot = None;
    }

    /// Pixel length of the domain inside `plot`.
    #[must_use]
    pub fn length_px(&self, plot: PlotArea) -> f64 {
        plot.extent_px(self.letter()) * (self.domain.1 - self.domain.0)
    }

    /// Recomputes the signed scale from the current domain and range.
    ///
    /// Y axes run against pixel rows, so an ascending y range has a negative
    /// scale. Degenerate ranges are not guarded.
    pub fn set_scale(&mut self, plot: PlotArea) -> f64 {
        let length = self.length_px(plot);
        let (l0, l1) = self.linear_range();
        self.scale = match self.letter() {
            AxisLetter::X => length / (l1 - l0),
            AxisLetter::Y => length / (l0 - l1),
        };
        self.scale
    }

    /// Range endpoints in linearized units.
    #[must_use]
    pub fn linear_range(&self) -> (f64, f64) {
        (
            self.axis_type.r2l(self.range.0),
            self.axis_type.r2l(self.range.1),
        )
    }

    pub(crate) fn write_linear_range(&mut self, linear: (f64, f64)) {
        let range = (
            self.axis_type.l2r(linear.0),
            self.axis_type.l2r(linear.1),
        );
        self.write_range(range);
    }

    pub(crate) fn write_domain(&mut self, domain: (f64, f64)) {
        self.domain = domain;
        self.applied.domain = domain;
    }

    pub(crate) fn write_range(&mut self, range: (f64, f64)) {
        self.range = range;
        self.applied.range = range;
    }

    /// Returns the pass baseline, capturing it on first use within a pass.
    pub(crate) fn ensure_pass_snapshot(&mut self) -> PassSnapshot {
        *self.pass_snapshot.get_or_insert(PassSnapshot {
            domain: self.domain,
            range: self.range,
        })
    }

    pub(crate) fn take_shrink_state(&mut self) -> ShrinkState {
        self.shrink_state.take()
    }

    pub(crate) fn validate(self) -> ConstraintResult<Self> {
        validate_domain(self.domain)?;
        validate_range(self.range, self.axis_type)?;
        self.constrain_toward.validate()?;
        for candidate in self.pad_min.iter().chain(&self.pad_max) {
            if !candidate.val.is_finite() || !candidate.pad.is_finite() || candidate.pad < 0.0 {
                return Err(ConstraintError::InvalidData(format!(
                    "autorange padding on axis {} must be finite with pad >= 0",
                    self.id
                )));
            }
        }
        Ok(self)
    }
}

/// Stored domains may extend past `[0, 1]`: a domain constraint can grow an
/// axis beyond its baseline.
fn validate_domain(domain: (f64, f64)) -> ConstraintResult<()> {
    let (start, end) = domain;
    if !start.is_finite() || !end.is_finite() {
        return Err(ConstraintError::InvalidData(
            "axis domain must be finite".to_owned(),
        ));
    }
    if start >= end {
        return Err(ConstraintError::InvalidData(
            "axis domain must be increasing".to_owned(),
        ));
    }
    Ok(())
}

fn validate_input_domain(domain: (f64, f64)) -> ConstraintResult<()> {
    validate_domain(domain)?;
    if domain.0 < 0.0 || domain.1 > 1.0 {
        return Err(ConstraintError::InvalidData(
            "axis domain must be within [0, 1]".to_owned(),
        ));
    }
    Ok(())
}

fn validate_range(range: (f64, f64), axis_type: AxisType) -> ConstraintResult<()> {
    let (start, end) = range;
    if !start.is_finite() || !end.is_finite() || start == end {
        return Err(ConstraintError::InvalidData(
            "axis range must be finite and non-zero".to_owned(),
        ));
    }
    if axis_type == AxisType::Log && (start <= 0.0 || end <= 0.0) {
        return Err(ConstraintError::InvalidData(
            "log axis range endpoints must be > 0".to_owned(),
        ));
    }
    Ok(())
}
