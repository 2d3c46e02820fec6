use std::fmt::Display;
use std::ops::Index;

use crate::core::dtype::Dtype;

/// Scalar message with 32-bit payload.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Float32 {
    /// payload
    pub data: f32,
}

impl From<f32> for Float32 {
    fn from(data: f32) -> Self {
        Self { data }
    }
}

impl Display for Float32 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.data)
    }
}

/// Numeric vector tagged with its precision.
///
/// Elements are cast through the dtype on construction, hence an array tagged `Float32` only
/// ever holds values representable as `f32`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TypedArray {
    dtype: Dtype,
    data: Vec<f64>,
}

impl TypedArray {
    /// Creates a new array, casting every element to `dtype`.
    pub fn new(dtype: Dtype, data: impl IntoIterator<Item = f64>) -> Self {
        Self {
            dtype,
            data: data.into_iter().map(|x| dtype.cast(x)).collect(),
        }
    }

    /// Precision tag.
    pub fn dtype(&self) -> Dtype {
        self.dtype
    }

    /// Elements.
    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True if there are no elements.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Same values recast to another precision.
    pub fn cast(&self, dtype: Dtype) -> Self {
        Self::new(dtype, self.data.iter().copied())
    }
}

impl Index<usize> for TypedArray {
    type Output = f64;

    fn index(&self, index: usize) -> &f64 {
        &self.data[index]
    }
}

impl Display for TypedArray {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?} ({})", self.data, self.dtype)
    }
}

/// Messages received on a node input for a single tick, oldest first. Never empty.
#[derive(Clone, Debug)]
pub struct Msg<T> {
    tick: u64,
    msgs: Vec<T>,
}

impl<T> Msg<T> {
    /// Bundles the messages of tick `tick`. Returns `None` if `msgs` is empty.
    pub fn new(tick: u64, msgs: Vec<T>) -> Option<Self> {
        if msgs.is_empty() {
            return None;
        }
        Some(Self { tick, msgs })
    }

    /// Index of the tick these messages are delivered at.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// All messages, oldest first.
    pub fn msgs(&self) -> &[T] {
        &self.msgs
    }

    /// Most recent message.
    pub fn latest(&self) -> &T {
        &self.msgs[self.msgs.len() - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typed_array_keeps_dtype() {
        let a = TypedArray::new(Dtype::Float32, [0.1, 2.0]);
        assert_eq!(a.dtype(), Dtype::Float32);
        assert_eq!(a.len(), 2);
        assert_eq!(a[0], 0.1_f32 as f64);
        assert_eq!(a.cast(Dtype::Float64).dtype(), Dtype::Float64);
    }

    #[test]
    fn latest_is_last() {
        let m = Msg::new(3, vec![Float32::from(1.0), Float32::from(2.0)]).unwrap();
        assert_eq!(m.latest(), &Float32 { data: 2.0 });
        assert_eq!(m.tick(), 3);
        assert!(Msg::<Float32>::new(0, vec![]).is_none());
    }
}
