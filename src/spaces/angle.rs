use nalgebra::Vector2;

use crate::core::dtype::Dtype;
use crate::core::error::NodeError;
use crate::core::message::{Float32, TypedArray};
use crate::spaces::converter::SpaceConverter;
use crate::spaces::space::BoxSpace;

/// Encodes a pendulum angle as `[sin(theta), cos(theta)]`.
///
/// Only the angle to vector direction exists; [SpaceConverter::backward] always fails with
/// [NodeError::NotSupported]. The angle is not wrapped into `[-pi, pi]` before encoding.
#[derive(Clone, Debug, PartialEq)]
pub struct AngleConverter {
    space: BoxSpace,
}

impl AngleConverter {
    /// Creates a converter declaring the box `low`..`high`. Bounds are not validated.
    pub fn new(low: impl Into<Vec<f64>>, high: impl Into<Vec<f64>>, dtype: Dtype) -> Self {
        Self {
            space: BoxSpace::new(low, high, dtype),
        }
    }

    /// `[sin(angle), cos(angle)]` cast to the declared dtype.
    pub fn encode(&self, angle: f64) -> TypedArray {
        let v = Vector2::new(angle.sin(), angle.cos());
        TypedArray::new(self.space.dtype(), v.iter().copied())
    }
}

impl Default for AngleConverter {
    fn default() -> Self {
        Self::new([-1.0, -1.0], [1.0, 1.0], Dtype::Float32)
    }
}

impl SpaceConverter for AngleConverter {
    type Msg = Float32;

    fn name_hint(&self) -> String {
        "AngleConverter".to_owned()
    }

    fn declared_range(&self) -> &BoxSpace {
        &self.space
    }

    fn forward(&self, msg: &Float32) -> Result<TypedArray, NodeError> {
        Ok(self.encode(msg.data as f64))
    }

    fn backward(&self, _array: &TypedArray) -> Result<Float32, NodeError> {
        Err(NodeError::NotSupported(
            "vector to angle conversion".to_owned(),
        ))
    }
}
