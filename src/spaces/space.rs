use nalgebra::DVector;

use crate::core::dtype::Dtype;

/// Per-dimension inclusive lower/upper bounds of a numeric vector.
///
/// Bounds are stored as given. Nothing checks that `low <= high` or that both have the same
/// length; an inverted box simply contains no vector.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxSpace {
    low: DVector<f64>,
    high: DVector<f64>,
    dtype: Dtype,
}

impl BoxSpace {
    /// Creates a new box.
    pub fn new(low: impl Into<Vec<f64>>, high: impl Into<Vec<f64>>, dtype: Dtype) -> Self {
        Self {
            low: DVector::from_vec(low.into()),
            high: DVector::from_vec(high.into()),
            dtype,
        }
    }

    /// One dimensional box.
    pub fn scalar(low: f64, high: f64, dtype: Dtype) -> Self {
        Self::new([low], [high], dtype)
    }

    /// Lower bounds.
    pub fn low(&self) -> &DVector<f64> {
        &self.low
    }

    /// Upper bounds.
    pub fn high(&self) -> &DVector<f64> {
        &self.high
    }

    /// Precision of the vectors in this box.
    pub fn dtype(&self) -> Dtype {
        self.dtype
    }

    /// Dimension, taken from the lower bound.
    pub fn len(&self) -> usize {
        self.low.len()
    }

    /// True for a zero dimensional box.
    pub fn is_empty(&self) -> bool {
        self.low.is_empty()
    }

    /// Whether `x` has the box dimension and lies within the bounds.
    pub fn contains(&self, x: &[f64]) -> bool {
        x.len() == self.low.len()
            && x.len() == self.high.len()
            && x
                .iter()
                .zip(self.low.iter().zip(self.high.iter()))
                .all(|(v, (lo, hi))| lo <= v && v <= hi)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_inclusive() {
        let space = BoxSpace::new([-1.0, -1.0], [1.0, 1.0], Dtype::Float32);
        assert!(space.contains(&[1.0, -1.0]));
        assert!(space.contains(&[0.0, 0.5]));
        assert!(!space.contains(&[1.5, 0.0]));
        assert!(!space.contains(&[0.0]));
    }

    #[test]
    fn inverted_box_contains_nothing() {
        let space = BoxSpace::scalar(3.0, -3.0, Dtype::Float64);
        assert_eq!(space.low().as_slice(), &[3.0]);
        assert_eq!(space.high().as_slice(), &[-3.0]);
        assert!(!space.contains(&[0.0]));
        assert!(!space.contains(&[3.0]));
    }
}
