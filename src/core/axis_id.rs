use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ConstraintError, ConstraintResult};

/// Direction of the pixel axis an axis is laid out along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisLetter {
    X,
    Y,
}

impl AxisLetter {
    #[must_use]
    pub fn as_char(self) -> char {
        match self {
            Self::X => 'x',
            Self::Y => 'y',
        }
    }
}

/// Short axis identifier such as `x`, `x2` or `y3`.
///
/// The first axis of each letter carries no suffix; later ones are numbered
/// from 2 upwards.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AxisId(String);

impl AxisId {
    pub fn parse(raw: &str) -> ConstraintResult<Self> {
        let mut chars = raw.chars();
        match chars.next() {
            Some('x' | 'y') => {}
            _ => return Err(ConstraintError::InvalidAxisId(raw.to_owned())),
        }

        let suffix = chars.as_str();
        if !suffix.is_empty() {
            if !suffix.bytes().all(|b| b.is_ascii_digit()) {
                return Err(ConstraintError::InvalidAxisId(raw.to_owned()));
            }
            let number: u32 = suffix
                .parse()
                .map_err(|_| ConstraintError::InvalidAxisId(raw.to_owned()))?;
            // `x1` is spelled `x`
            if number < 2 || suffix.starts_with('0') {
                return Err(ConstraintError::InvalidAxisId(raw.to_owned()));
            }
        }

        Ok(Self(raw.to_owned()))
    }

    #[must_use]
    pub fn letter(&self) -> AxisLetter {
        if self.0.starts_with('x') {
            AxisLetter::X
        } else {
            AxisLetter::Y
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Name of the layout attribute holding this axis (`x2` -> `xaxis2`).
    #[must_use]
    pub fn layout_name(&self) -> String {
        let (letter, suffix) = self.0.split_at(1);
        format!("{letter}axis{suffix}")
    }
}

impl fmt::Display for AxisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for AxisId {
    type Error = ConstraintError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl TryFrom<&str> for AxisId {
    type Error = ConstraintError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<AxisId> for String {
    fn from(value: AxisId) -> Self {
        value.0
    }
}
