//! Core types of the pendulum nodes: messages, node contract, errors.

/// Errors
pub mod error;
pub use error::NodeError;

/// Numeric precision tag
pub mod dtype;
pub use dtype::Dtype;

/// Messages
pub mod message;
pub use message::{Float32, Msg, TypedArray};

/// Node contract
pub mod node;
pub use node::{IoSpec, Node, NodeSpec, Process};
