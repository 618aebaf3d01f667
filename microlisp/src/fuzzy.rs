//! Fuzzy sets
//!
//! A fuzzy set is an ordered list of `(value, weight)` pairs where the weight
//! is a degree of membership. Sets are not deduplicated: lookups use the
//! first matching element.

use crate::Value;
use serde::Serialize;
use std::fmt;

/// One member of a fuzzy set with its degree of membership
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuzzyElement {
    pub value: Value,
    pub weight: f32,
}

impl FuzzyElement {
    pub fn new(value: impl Into<Value>, weight: f32) -> Self {
        Self {
            value: value.into(),
            weight,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FuzzySet {
    elements: Vec<FuzzyElement>,
}

impl FuzzySet {
    /// Collect `elements` into a set, optionally normalizing the weights.
    pub fn new(normalize: bool, elements: impl IntoIterator<Item = FuzzyElement>) -> Self {
        let mut set = Self {
            elements: elements.into_iter().collect(),
        };
        if normalize {
            set.normalize();
        }
        set
    }

    /// Divide every weight by the sum of all weights.
    ///
    /// A set whose weights sum to exactly zero is left untouched.
    pub fn normalize(&mut self) {
        let sum: f32 = self.elements.iter().map(|e| e.weight).sum();
        if sum != 0.0 {
            for element in &mut self.elements {
                element.weight /= sum;
            }
        }
    }

    pub fn elements(&self) -> &[FuzzyElement] {
        &self.elements
    }

    pub fn iter(&self) -> std::slice::Iter<'_, FuzzyElement> {
        self.elements.iter()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn push(&mut self, element: FuzzyElement) {
        self.elements.push(element);
    }

    /// Weight of the first element equal to `value`, or 0.0
    pub fn membership(&self, value: &Value) -> f32 {
        self.elements
            .iter()
            .find(|element| element.value == *value)
            .map_or(0.0, |element| element.weight)
    }

    /// Sum of `membership` over `values`, accumulated in input order
    pub fn membership_sum(&self, values: &[Value]) -> f32 {
        values
            .iter()
            .fold(0.0, |total, value| total + self.membership(value))
    }
}

impl FromIterator<FuzzyElement> for FuzzySet {
    fn from_iter<I: IntoIterator<Item = FuzzyElement>>(iter: I) -> Self {
        Self::new(false, iter)
    }
}

impl<'a> IntoIterator for &'a FuzzySet {
    type Item = &'a FuzzyElement;
    type IntoIter = std::slice::Iter<'a, FuzzyElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl fmt::Display for FuzzySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {:?}", element.value, element.weight)?;
        }
        write!(f, "}}")
    }
}

/// Copy `elements` into a new set, normalizing weights when asked.
pub fn make_fuzzy_set(normalize: bool, elements: &[FuzzyElement]) -> FuzzySet {
    FuzzySet::new(normalize, elements.iter().cloned())
}

/// Degree to which `value` belongs to `set`.
pub fn fuzzy_equals(set: &FuzzySet, value: &Value) -> f32 {
    set.membership(value)
}

/// Summed degree of membership of every value in `values`.
pub fn fuzzy_equals_many(set: &FuzzySet, values: &[Value]) -> f32 {
    set.membership_sum(values)
}
