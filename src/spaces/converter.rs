use std::fmt::Debug;

use crate::core::error::NodeError;
use crate::core::message::TypedArray;
use crate::spaces::space::BoxSpace;

/// Bidirectional mapping between a raw message and a vector of a declared box space.
pub trait SpaceConverter: Send + Sync + 'static {
    /// Raw message type.
    type Msg: Clone + Debug + Send + Sync + 'static;

    /// Name hint for nodes wrapping this converter.
    fn name_hint(&self) -> String;

    /// The box the converted vectors live in, unchanged from construction.
    fn declared_range(&self) -> &BoxSpace;

    /// Raw message to vector.
    fn forward(&self, msg: &Self::Msg) -> Result<TypedArray, NodeError>;

    /// Vector to raw message.
    fn backward(&self, array: &TypedArray) -> Result<Self::Msg, NodeError>;
}

pub(crate) fn check_len(expected: usize, array: &TypedArray) -> Result<(), NodeError> {
    if array.len() == expected {
        Ok(())
    } else {
        Err(NodeError::ShapeMismatch {
            expected,
            actual: array.len(),
        })
    }
}
