use crate::core::dtype::Dtype;
use crate::core::error::NodeError;
use crate::core::message::{Float32, TypedArray};
use crate::spaces::converter::{check_len, SpaceConverter};
use crate::spaces::space::BoxSpace;

/// Converts a scalar message into a single element array.
#[derive(Clone, Debug, PartialEq)]
pub struct ScalarConverter {
    space: BoxSpace,
}

impl ScalarConverter {
    /// Creates a converter declaring the interval `low`..`high`.
    pub fn new(low: f64, high: f64, dtype: Dtype) -> Self {
        Self {
            space: BoxSpace::scalar(low, high, dtype),
        }
    }
}

impl SpaceConverter for ScalarConverter {
    type Msg = Float32;

    fn name_hint(&self) -> String {
        "ScalarConverter".to_owned()
    }

    fn declared_range(&self) -> &BoxSpace {
        &self.space
    }

    fn forward(&self, msg: &Float32) -> Result<TypedArray, NodeError> {
        Ok(TypedArray::new(self.space.dtype(), [msg.data as f64]))
    }

    fn backward(&self, array: &TypedArray) -> Result<Float32, NodeError> {
        check_len(1, array)?;
        Ok(Float32 {
            data: array[0] as f32,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_and_unwraps() {
        let c = ScalarConverter::new(-3.0, 3.0, Dtype::Float32);
        let a = c.forward(&Float32 { data: 1.5 }).unwrap();
        assert_eq!(a.data(), &[1.5]);
        assert_eq!(c.backward(&a).unwrap(), Float32 { data: 1.5 });
    }

    #[test]
    fn rejects_wrong_length() {
        let c = ScalarConverter::new(-3.0, 3.0, Dtype::Float32);
        let a = TypedArray::new(Dtype::Float32, [1.0, 2.0]);
        assert_eq!(
            c.backward(&a),
            Err(NodeError::ShapeMismatch {
                expected: 1,
                actual: 2
            })
        );
    }
}
