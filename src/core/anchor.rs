use serde::{Deserialize, Serialize};

use crate::core::AxisLetter;
use crate::error::{ConstraintError, ConstraintResult};

/// Point of an axis domain held fixed while a domain constraint resizes it.
///
/// Named anchors resolve to a fraction measured from the bottom/left edge of
/// the domain. `Fraction` accepts any explicit position in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstrainToward {
    Left,
    Center,
    Right,
    Bottom,
    Middle,
    Top,
    Fraction(f64),
}

impl ConstrainToward {
    /// Anchor used when the host does not configure one.
    #[must_use]
    pub fn default_for(letter: AxisLetter) -> Self {
        match letter {
            AxisLetter::X => Self::Center,
            AxisLetter::Y => Self::Middle,
        }
    }

    #[must_use]
    pub fn fraction(self) -> f64 {
        match self {
            Self::Left | Self::Bottom => 0.0,
            Self::Center | Self::Middle => 0.5,
            Self::Right | Self::Top => 1.0,
            Self::Fraction(value) => value,
        }
    }

    pub(crate) fn validate(self) -> ConstraintResult<Self> {
        let fraction = self.fraction();
        if !fraction.is_finite() || !(0.0..=1.0).contains(&fraction) {
            return Err(ConstraintError::InvalidData(
                "constraint anchor fraction must be finite and within [0, 1]".to_owned(),
            ));
        }
        Ok(self)
    }
}
