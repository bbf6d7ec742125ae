use std::slice::Iter;

use nalgebra::{DMatrix, DVector};

use crate::{Coefficients, NUM_COEFFICIENTS};

/// A single observation of the three features and the target
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    id: usize,
    x1: f64,
    x2: f64,
    x3: f64,
    y: f64,
}

impl Observation {
    #[inline(always)]
    pub(crate) fn new(id: usize, x1: f64, x2: f64, x3: f64, y: f64) -> Self {
        Self { id, x1, x2, x3, y }
    }

    /// Identifier, unique within the set this observation belongs to
    #[inline(always)]
    pub fn id(&self) -> usize {
        self.id
    }

    /// The first feature
    #[inline(always)]
    pub fn x1(&self) -> f64 {
        self.x1
    }

    /// The second feature
    #[inline(always)]
    pub fn x2(&self) -> f64 {
        self.x2
    }

    /// The third feature
    #[inline(always)]
    pub fn x3(&self) -> f64 {
        self.x3
    }

    /// The target
    #[inline(always)]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// The row of the design matrix for this observation, `[1, x1, x2, x3]`
    #[inline]
    pub fn design_row(&self) -> Coefficients {
        Coefficients::new(1.0, self.x1, self.x2, self.x3)
    }
}

/// An ordered set of observations.
/// Identifiers are assigned sequentially on construction, so they are unique
/// within the set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObservationSet {
    observations: Vec<Observation>,
}

impl ObservationSet {
    /// Build a set from `(x1, x2, x3, y)` tuples, numbering them from zero
    pub fn from_points<I>(points: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64, f64, f64)>,
    {
        let observations = points
            .into_iter()
            .enumerate()
            .map(|(id, (x1, x2, x3, y))| Observation::new(id, x1, x2, x3, y))
            .collect();

        Self { observations }
    }

    /// Number of observations
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.observations.len()
    }

    /// Whether the set holds no observations
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    /// The observation at `index`, if any
    #[inline(always)]
    pub fn get(&self, index: usize) -> Option<&Observation> {
        self.observations.get(index)
    }

    /// Iterate the observations in order
    #[inline(always)]
    pub fn iter(&self) -> Iter<'_, Observation> {
        self.observations.iter()
    }

    /// The `n x 4` design matrix, whose rows are `[1, x1, x2, x3]`.
    /// Derived on every call, nothing is cached.
    pub fn design_matrix(&self) -> DMatrix<f64> {
        DMatrix::from_fn(self.len(), NUM_COEFFICIENTS, |i, j| self.observations[i].design_row()[j])
    }

    /// The column of targets, in observation order
    pub fn targets(&self) -> DVector<f64> {
        DVector::from_iterator(self.len(), self.observations.iter().map(|o| o.y))
    }
}

impl<'a> IntoIterator for &'a ObservationSet {
    type Item = &'a Observation;
    type IntoIter = Iter<'a, Observation>;

    fn into_iter(self) -> Self::IntoIter {
        self.observations.iter()
    }
}
