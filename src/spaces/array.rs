use crate::core::dtype::Dtype;
use crate::core::error::NodeError;
use crate::core::message::TypedArray;
use crate::spaces::converter::{check_len, SpaceConverter};
use crate::spaces::space::BoxSpace;

/// Passes arrays through, recast to the declared dtype.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrayConverter {
    space: BoxSpace,
}

impl ArrayConverter {
    /// Creates a converter declaring the box `low`..`high`.
    pub fn new(low: impl Into<Vec<f64>>, high: impl Into<Vec<f64>>, dtype: Dtype) -> Self {
        Self {
            space: BoxSpace::new(low, high, dtype),
        }
    }
}

impl SpaceConverter for ArrayConverter {
    type Msg = TypedArray;

    fn name_hint(&self) -> String {
        "ArrayConverter".to_owned()
    }

    fn declared_range(&self) -> &BoxSpace {
        &self.space
    }

    fn forward(&self, msg: &TypedArray) -> Result<TypedArray, NodeError> {
        check_len(self.space.len(), msg)?;
        Ok(msg.cast(self.space.dtype()))
    }

    fn backward(&self, array: &TypedArray) -> Result<TypedArray, NodeError> {
        check_len(self.space.len(), array)?;
        Ok(array.cast(self.space.dtype()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recasts_to_declared_dtype() {
        let c = ArrayConverter::new([-3.0], [3.0], Dtype::Float32);
        let a = TypedArray::new(Dtype::Float64, [0.1]);
        let b = c.forward(&a).unwrap();
        assert_eq!(b.dtype(), Dtype::Float32);
        assert_eq!(b[0], 0.1_f32 as f64);
    }

    #[test]
    fn rejects_wrong_length() {
        let c = ArrayConverter::new([-3.0], [3.0], Dtype::Float32);
        let a = TypedArray::new(Dtype::Float32, [0.0, 0.0]);
        assert!(matches!(
            c.forward(&a),
            Err(NodeError::ShapeMismatch { .. })
        ));
        assert!(matches!(
            c.backward(&a),
            Err(NodeError::ShapeMismatch { .. })
        ));
    }
}
