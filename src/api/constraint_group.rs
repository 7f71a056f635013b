use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::AxisId;

/// Axes that must keep a fixed relative scale, with each axis's weight.
///
/// A satisfied group has `|scale| / weight` equal across members. Member
/// order is insertion order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConstraintGroup {
    weights: IndexMap<AxisId, f64>,
}

impl ConstraintGroup {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_axis(mut self, id: AxisId, weight: f64) -> Self {
        self.insert(id, weight);
        self
    }

    pub fn insert(&mut self, id: AxisId, weight: f64) -> Option<f64> {
        self.weights.insert(id, weight)
    }

    #[must_use]
    pub fn weight(&self, id: &AxisId) -> Option<f64> {
        self.weights.get(id).copied()
    }

    pub fn members(&self) -> impl Iterator<Item = (&AxisId, f64)> {
        self.weights.iter().map(|(id, weight)| (id, *weight))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

impl FromIterator<(AxisId, f64)> for ConstraintGroup {
    fn from_iter<T: IntoIterator<Item = (AxisId, f64)>>(iter: T) -> Self {
        Self {
            weights: iter.into_iter().collect(),
        }
    }
}
